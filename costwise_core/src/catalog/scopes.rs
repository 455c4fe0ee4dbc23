//! Project Scope Definitions
//!
//! Each scope tier carries a development-time multiplier, a planning-hours
//! table per role, and base monthly infrastructure costs. Values are
//! illustrative estimates, not quotes from any particular vendor.

use serde::{Deserialize, Serialize};

use crate::catalog::ServiceCategory;
use crate::errors::{EstimateError, EstimateResult};

/// Project scope tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Proof of Concept
    Poc,
    /// Minimum Viable Product
    Mvp,
    /// Production Application
    Production,
}

impl Scope {
    /// All scope variants for UI selection
    pub const ALL: [Scope; 3] = [Scope::Poc, Scope::Mvp, Scope::Production];

    /// Get the query-string key for this scope (e.g., "poc", "mvp")
    pub fn key(&self) -> &'static str {
        match self {
            Scope::Poc => "poc",
            Scope::Mvp => "mvp",
            Scope::Production => "production",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "poc" | "proof-of-concept" | "proof of concept" => Ok(Scope::Poc),
            "mvp" | "minimum-viable-product" | "minimum viable product" => Ok(Scope::Mvp),
            "production" | "prod" => Ok(Scope::Production),
            _ => Err(EstimateError::invalid_input(
                "scope",
                s,
                "Expected one of: poc, mvp, production",
            )),
        }
    }

    /// Get display name
    pub fn label(&self) -> &'static str {
        self.definition().label
    }

    /// Get the static definition for this scope
    pub fn definition(&self) -> &'static ScopeDefinition {
        ScopeDefinition::lookup(*self)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Base monthly infrastructure costs for one scope tier.
///
/// One field per service category. Other-services has no base figure
/// (it is entirely user-entered), so [`CategoryCosts::get`] returns 0 for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryCosts {
    pub hosting: f64,
    pub database: f64,
    pub cdn: f64,
    pub cicd: f64,
    pub storage: f64,
    pub authentication: f64,
}

impl CategoryCosts {
    /// Base monthly cost for a category
    pub fn get(&self, category: ServiceCategory) -> f64 {
        match category {
            ServiceCategory::Hosting => self.hosting,
            ServiceCategory::Database => self.database,
            ServiceCategory::Cdn => self.cdn,
            ServiceCategory::Cicd => self.cicd,
            ServiceCategory::Storage => self.storage,
            ServiceCategory::Authentication => self.authentication,
            ServiceCategory::OtherServices => 0.0,
        }
    }
}

/// Full definition of one project scope tier.
///
/// Serialize-only: definitions are compiled in and never read back.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeDefinition {
    /// Display name (e.g., "Minimum Viable Product")
    pub label: &'static str,

    /// One-line description for UI selection
    pub description: &'static str,

    /// Effort expressed in months of a baseline team.
    ///
    /// Converted to a week count by the timeline calculator
    /// (see [`crate::estimates::timeline`]).
    pub development_time_multiplier: f64,

    /// Planning hours per role id, the reference staffing table for this tier
    pub planning_hours: &'static [(&'static str, f64)],

    /// Base monthly infrastructure costs
    pub base_costs: CategoryCosts,
}

static POC: ScopeDefinition = ScopeDefinition {
    label: "Proof of Concept",
    description: "A minimal implementation to validate the core idea.",
    development_time_multiplier: 1.0,
    planning_hours: &[
        ("juniorDev", 40.0),
        ("seniorDev", 20.0),
        ("designer", 10.0),
        ("projectManager", 10.0),
        ("qaEngineer", 5.0),
    ],
    base_costs: CategoryCosts {
        hosting: 20.0,
        database: 15.0,
        cdn: 10.0,
        cicd: 0.0,
        storage: 5.0,
        authentication: 0.0,
    },
};

static MVP: ScopeDefinition = ScopeDefinition {
    label: "Minimum Viable Product",
    description: "Core features with basic user experience.",
    development_time_multiplier: 2.5,
    planning_hours: &[
        ("juniorDev", 100.0),
        ("seniorDev", 50.0),
        ("designer", 30.0),
        ("projectManager", 25.0),
        ("qaEngineer", 20.0),
    ],
    base_costs: CategoryCosts {
        hosting: 50.0,
        database: 30.0,
        cdn: 25.0,
        cicd: 30.0,
        storage: 15.0,
        authentication: 10.0,
    },
};

static PRODUCTION: ScopeDefinition = ScopeDefinition {
    label: "Production Application",
    description: "Complete solution with full feature set and polished UX.",
    development_time_multiplier: 5.0,
    planning_hours: &[
        ("juniorDev", 300.0),
        ("seniorDev", 150.0),
        ("designer", 80.0),
        ("projectManager", 70.0),
        ("qaEngineer", 60.0),
    ],
    base_costs: CategoryCosts {
        hosting: 150.0,
        database: 100.0,
        cdn: 75.0,
        cicd: 100.0,
        storage: 50.0,
        authentication: 40.0,
    },
};

impl ScopeDefinition {
    /// Look up the static definition for a scope tier.
    pub fn lookup(scope: Scope) -> &'static ScopeDefinition {
        match scope {
            Scope::Poc => &POC,
            Scope::Mvp => &MVP,
            Scope::Production => &PRODUCTION,
        }
    }

    /// Planning hours for a role id, 0 if the role is not in the table.
    pub fn planning_hours_for(&self, role_id: &str) -> f64 {
        self.planning_hours
            .iter()
            .find(|(id, _)| *id == role_id)
            .map(|(_, hours)| *hours)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_parsing() {
        assert_eq!(Scope::from_str_flexible("mvp").unwrap(), Scope::Mvp);
        assert_eq!(Scope::from_str_flexible("Prod").unwrap(), Scope::Production);
        assert_eq!(
            Scope::from_str_flexible("proof of concept").unwrap(),
            Scope::Poc
        );
        assert!(Scope::from_str_flexible("enterprise").is_err());
    }

    #[test]
    fn test_scope_serde_keys() {
        let json = serde_json::to_string(&Scope::Production).unwrap();
        assert_eq!(json, "\"production\"");
        let back: Scope = serde_json::from_str("\"poc\"").unwrap();
        assert_eq!(back, Scope::Poc);
    }

    #[test]
    fn test_definition_lookup() {
        let def = ScopeDefinition::lookup(Scope::Mvp);
        assert_eq!(def.development_time_multiplier, 2.5);
        assert_eq!(def.base_costs.hosting, 50.0);
        assert_eq!(def.planning_hours_for("seniorDev"), 50.0);
        assert_eq!(def.planning_hours_for("unknown"), 0.0);
    }

    #[test]
    fn test_other_services_has_no_base_cost() {
        let def = ScopeDefinition::lookup(Scope::Production);
        assert_eq!(def.base_costs.get(crate::catalog::ServiceCategory::OtherServices), 0.0);
    }
}
