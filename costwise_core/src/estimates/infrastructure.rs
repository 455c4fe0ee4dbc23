//! Infrastructure Cost
//!
//! Monthly cost per service category. Three billing shapes:
//!
//! - Scaling categories (hosting, database, CI/CD, CDN): base cost grown
//!   linearly with user count.
//! - Usage-billed categories (storage, authentication): billable volume
//!   beyond a free allowance, with the scope's (or selected provider's) base
//!   figure acting as a floor, never a starting point.
//! - Other services: plain sum of user-entered line items.
//!
//! A free-tier flag forces its category to exactly 0 after everything else.

use serde::{Deserialize, Serialize};

use crate::catalog::{ReferenceData, ServiceCategory};
use crate::params::Parameters;

/// Monthly infrastructure cost per category, after free-tier zeroing.
///
/// Derived entirely from parameters and reference data; never edited.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureCosts {
    pub hosting: f64,
    pub database: f64,
    pub cdn: f64,
    pub cicd: f64,
    pub storage: f64,
    pub authentication: f64,
    pub other_services: f64,
}

impl InfrastructureCosts {
    /// Monthly cost for one category
    pub fn get(&self, category: ServiceCategory) -> f64 {
        match category {
            ServiceCategory::Hosting => self.hosting,
            ServiceCategory::Database => self.database,
            ServiceCategory::Cdn => self.cdn,
            ServiceCategory::Cicd => self.cicd,
            ServiceCategory::Storage => self.storage,
            ServiceCategory::Authentication => self.authentication,
            ServiceCategory::OtherServices => self.other_services,
        }
    }

    /// Sum of all seven categories
    pub fn monthly_total(&self) -> f64 {
        ServiceCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }

    pub fn yearly_total(&self) -> f64 {
        self.monthly_total() * 12.0
    }
}

/// Monthly cost of one category before free-tier zeroing.
fn computed_cost(params: &Parameters, reference: &ReferenceData, category: ServiceCategory) -> f64 {
    let base = reference.base_cost(params.scope, category, params.providers.get(category));
    match category {
        ServiceCategory::Hosting
        | ServiceCategory::Database
        | ServiceCategory::Cdn
        | ServiceCategory::Cicd => {
            let multiplier = reference.user_cost.get(category);
            base * (1.0 + multiplier * (params.user_count as f64 / 1000.0))
        }
        ServiceCategory::Storage => {
            let billable_gb = (params.gb_storage as f64 - reference.storage.base_free_gb).max(0.0);
            let computed = billable_gb * reference.storage.price_per_gb_month;
            // Base figure is a floor: low usage never drops below the
            // scope's (or selected provider's) listed cost.
            computed.max(base)
        }
        ServiceCategory::Authentication => {
            let billable_maus = (params.user_count as f64 - reference.auth.free_maus).max(0.0);
            let computed = billable_maus * reference.auth.price_per_mau;
            computed.max(base)
        }
        ServiceCategory::OtherServices => params.other_services.iter().map(|s| s.cost).sum(),
    }
}

/// Monthly cost for one category, 0 under its free-tier flag.
pub fn category_cost(params: &Parameters, reference: &ReferenceData, category: ServiceCategory) -> f64 {
    if params.free_tier.get(category) {
        0.0
    } else {
        computed_cost(params, reference, category)
    }
}

/// Compute the full per-category record from sanitized parameters.
pub fn calculate(params: &Parameters, reference: &ReferenceData) -> InfrastructureCosts {
    InfrastructureCosts {
        hosting: category_cost(params, reference, ServiceCategory::Hosting),
        database: category_cost(params, reference, ServiceCategory::Database),
        cdn: category_cost(params, reference, ServiceCategory::Cdn),
        cicd: category_cost(params, reference, ServiceCategory::Cicd),
        storage: category_cost(params, reference, ServiceCategory::Storage),
        authentication: category_cost(params, reference, ServiceCategory::Authentication),
        other_services: category_cost(params, reference, ServiceCategory::OtherServices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Scope;
    use crate::params::OtherService;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_scaling_category_grows_with_users() {
        let reference = ReferenceData::default();
        // MVP hosting base 50, multiplier 0.2/1000 users
        let params = Parameters::default().with_user_count(0);
        assert!(close(category_cost(&params, &reference, ServiceCategory::Hosting), 50.0));

        let params = params.with_user_count(1000);
        assert!(close(category_cost(&params, &reference, ServiceCategory::Hosting), 60.0));

        let params = params.with_user_count(10000);
        assert!(close(category_cost(&params, &reference, ServiceCategory::Hosting), 150.0));
    }

    #[test]
    fn test_storage_floor_scenario() {
        // gb=100, free=5, $0.023/GB, MVP base 15: computed 2.185 floors at 15
        let reference = ReferenceData::default();
        let params = Parameters::default().with_gb_storage(100);
        assert!(close(category_cost(&params, &reference, ServiceCategory::Storage), 15.0));
    }

    #[test]
    fn test_storage_above_floor() {
        // 1005 GB: 1000 billable * 0.023 = 23.0 > base 15
        let reference = ReferenceData::default();
        let params = Parameters::default().with_gb_storage(1005);
        assert!(close(category_cost(&params, &reference, ServiceCategory::Storage), 23.0));
    }

    #[test]
    fn test_storage_monotone_in_gb() {
        let reference = ReferenceData::default();
        let mut last = 0.0;
        for gb in [0, 5, 10, 100, 1000, 5000, 50000] {
            let params = Parameters::default().with_gb_storage(gb);
            let cost = category_cost(&params, &reference, ServiceCategory::Storage);
            assert!(cost >= last, "storage cost decreased at {} GB", gb);
            last = cost;
        }
    }

    #[test]
    fn test_auth_floor_scenario() {
        // users=10000, free=7000, $0.0015/MAU, MVP base 10:
        // computed 4.5 floors at 10
        let reference = ReferenceData::default();
        let params = Parameters::default().with_user_count(10000);
        assert!(close(
            category_cost(&params, &reference, ServiceCategory::Authentication),
            10.0
        ));
    }

    #[test]
    fn test_auth_above_floor() {
        // 100k users: 93000 billable * 0.0015 = 139.5 > base 10
        let reference = ReferenceData::default();
        let params = Parameters::default().with_user_count(100_000);
        assert!(close(
            category_cost(&params, &reference, ServiceCategory::Authentication),
            139.5
        ));
    }

    #[test]
    fn test_provider_overrides_base() {
        let reference = ReferenceData::default();
        let params = Parameters::default()
            .with_user_count(0)
            .with_provider(ServiceCategory::Hosting, Some("Vercel Pro".to_string()));
        assert!(close(category_cost(&params, &reference, ServiceCategory::Hosting), 20.0));
    }

    #[test]
    fn test_provider_sets_storage_floor() {
        let reference = ReferenceData::default();
        let params = Parameters::default()
            .with_gb_storage(100)
            .with_provider(ServiceCategory::Storage, Some("Cloudflare R2".to_string()));
        // R2 floor is 8 on MVP; computed 2.185 floors at 8
        assert!(close(category_cost(&params, &reference, ServiceCategory::Storage), 8.0));
    }

    #[test]
    fn test_free_tier_forces_zero() {
        let reference = ReferenceData::default();
        for category in ServiceCategory::ALL {
            let params = Parameters::default()
                .with_user_count(100_000)
                .with_gb_storage(10_000)
                .push_service(OtherService::new("Email", 300.0))
                .with_provider(category, Some("AWS CloudFront".to_string()))
                .with_free_tier(category, true);
            assert_eq!(
                category_cost(&params, &reference, category),
                0.0,
                "{:?} not zeroed",
                category
            );
        }
    }

    #[test]
    fn test_other_services_sum() {
        let reference = ReferenceData::default();
        let params = Parameters::default()
            .push_service(OtherService::new("Email", 25.0))
            .push_service(OtherService::new("Monitoring", 40.0));
        assert!(close(
            category_cost(&params, &reference, ServiceCategory::OtherServices),
            65.0
        ));
    }

    #[test]
    fn test_totals_sum_all_seven() {
        let reference = ReferenceData::default();
        let params = Parameters::default()
            .with_scope(Scope::Poc)
            .with_user_count(0)
            .push_service(OtherService::new("Email", 10.0));
        let costs = calculate(&params, &reference);
        // POC bases: 20 + 15 + 10 + 0, storage floor 5, auth floor 0, other 10
        assert!(close(costs.monthly_total(), 60.0));
        assert!(close(costs.yearly_total(), 720.0));
    }
}
