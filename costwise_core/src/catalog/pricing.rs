//! Pricing Constants
//!
//! Global numeric constants behind the estimation formulas: user-load
//! multipliers, usage-based storage and authentication pricing, and the
//! timeline calculator assumptions surfaced in reports.

use serde::{Deserialize, Serialize};

use crate::catalog::ServiceCategory;

/// Average weeks per month, used for monthly cost figures
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Weeks per "month of effort" when deriving the base timeline.
///
/// The scope multiplier expresses effort in months of a baseline team;
/// the base week count uses a fixed 4-weeks/month approximation.
pub const BASE_WEEKS_PER_MONTH: f64 = 4.0;

/// Cost increase per 1000 users for the scaling categories.
///
/// A multiplier of 0.2 means a 20% cost increase per 1000 users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserCostMultipliers {
    pub hosting: f64,
    pub database: f64,
    pub cdn: f64,
    pub cicd: f64,
}

impl UserCostMultipliers {
    /// Multiplier for a scaling category, 0 for usage-billed categories
    pub fn get(&self, category: ServiceCategory) -> f64 {
        match category {
            ServiceCategory::Hosting => self.hosting,
            ServiceCategory::Database => self.database,
            ServiceCategory::Cdn => self.cdn,
            ServiceCategory::Cicd => self.cicd,
            _ => 0.0,
        }
    }
}

impl Default for UserCostMultipliers {
    fn default() -> Self {
        UserCostMultipliers {
            hosting: 0.2,
            database: 0.25,
            cdn: 0.3,
            cicd: 0.1,
        }
    }
}

/// Usage-based object storage pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageCalculator {
    /// GB included before billing starts
    pub base_free_gb: f64,

    /// Price per billable GB per month
    pub price_per_gb_month: f64,
}

impl Default for StorageCalculator {
    fn default() -> Self {
        StorageCalculator {
            base_free_gb: 5.0,
            price_per_gb_month: 0.023,
        }
    }
}

/// Usage-based authentication pricing (MAU = monthly active user).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuthCalculator {
    /// MAUs included before billing starts
    pub free_maus: f64,

    /// Price per MAU beyond the free allowance
    pub price_per_mau: f64,
}

impl Default for AuthCalculator {
    fn default() -> Self {
        AuthCalculator {
            free_maus: 7000.0,
            price_per_mau: 0.0015,
        }
    }
}

/// Baseline-team assumptions surfaced in the report's assumptions section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineCalculator {
    /// Assumed average team size
    pub team_size: u32,

    /// Productive hours per developer per week
    pub hours_per_week_per_dev: u32,
}

impl Default for TimelineCalculator {
    fn default() -> Self {
        TimelineCalculator {
            team_size: 3,
            hours_per_week_per_dev: 35,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_multipliers() {
        let mult = UserCostMultipliers::default();
        assert_eq!(mult.get(ServiceCategory::Hosting), 0.2);
        assert_eq!(mult.get(ServiceCategory::Cdn), 0.3);
        // Usage-billed categories do not scale with user count here
        assert_eq!(mult.get(ServiceCategory::Storage), 0.0);
        assert_eq!(mult.get(ServiceCategory::OtherServices), 0.0);
    }

    #[test]
    fn test_default_usage_pricing() {
        let storage = StorageCalculator::default();
        assert_eq!(storage.base_free_gb, 5.0);
        assert_eq!(storage.price_per_gb_month, 0.023);

        let auth = AuthCalculator::default();
        assert_eq!(auth.free_maus, 7000.0);
        assert_eq!(auth.price_per_mau, 0.0015);
    }
}
