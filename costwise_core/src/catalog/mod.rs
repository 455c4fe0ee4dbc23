//! # Reference Data Catalog
//!
//! Static configuration consumed by the estimation engine: scope tier
//! definitions, base infrastructure costs, the named service-provider
//! catalog, and global pricing constants. Loaded once, never mutated at
//! runtime.
//!
//! ## Example
//!
//! ```rust
//! use costwise_core::catalog::{ReferenceData, Scope, ServiceCategory};
//!
//! let reference = ReferenceData::default();
//! let def = reference.scope(Scope::Mvp);
//! assert_eq!(def.development_time_multiplier, 2.5);
//!
//! let providers = reference.providers(Scope::Mvp, ServiceCategory::Hosting);
//! assert!(!providers.is_empty());
//! ```

pub mod pricing;
pub mod providers;
pub mod scopes;

use serde::{Deserialize, Serialize};

pub use pricing::{
    AuthCalculator, StorageCalculator, TimelineCalculator, UserCostMultipliers,
    BASE_WEEKS_PER_MONTH, WEEKS_PER_MONTH,
};
pub use providers::{find_provider, providers_for, ServiceProvider};
pub use scopes::{CategoryCosts, Scope, ScopeDefinition};

/// Default staffing lines: (role id, title, hourly rate)
pub const DEFAULT_ROLES: [(&str, &str, f64); 5] = [
    ("juniorDev", "Junior Developer", 75.0),
    ("seniorDev", "Senior Developer", 150.0),
    ("designer", "Designer", 125.0),
    ("projectManager", "Project Manager", 135.0),
    ("qaEngineer", "QA Engineer", 85.0),
];

/// Infrastructure service categories.
///
/// A closed enumeration rather than a string-keyed map: the category set is
/// fixed at design time, which removes a class of missing-key bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceCategory {
    Hosting,
    Database,
    Cdn,
    Cicd,
    Storage,
    Authentication,
    OtherServices,
}

impl ServiceCategory {
    /// All categories, in display order
    pub const ALL: [ServiceCategory; 7] = [
        ServiceCategory::Hosting,
        ServiceCategory::Database,
        ServiceCategory::Cdn,
        ServiceCategory::Cicd,
        ServiceCategory::Storage,
        ServiceCategory::Authentication,
        ServiceCategory::OtherServices,
    ];

    /// Categories whose cost scales linearly with user count
    pub const SCALING: [ServiceCategory; 4] = [
        ServiceCategory::Hosting,
        ServiceCategory::Database,
        ServiceCategory::Cdn,
        ServiceCategory::Cicd,
    ];

    /// Categories that accept a provider selection
    pub const SELECTABLE: [ServiceCategory; 6] = [
        ServiceCategory::Hosting,
        ServiceCategory::Database,
        ServiceCategory::Cdn,
        ServiceCategory::Cicd,
        ServiceCategory::Storage,
        ServiceCategory::Authentication,
    ];

    /// Get the JSON/query-string key (e.g., "cicd", "otherServices")
    pub fn key(&self) -> &'static str {
        match self {
            ServiceCategory::Hosting => "hosting",
            ServiceCategory::Database => "database",
            ServiceCategory::Cdn => "cdn",
            ServiceCategory::Cicd => "cicd",
            ServiceCategory::Storage => "storage",
            ServiceCategory::Authentication => "authentication",
            ServiceCategory::OtherServices => "otherServices",
        }
    }

    /// Get display name
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Hosting => "Hosting",
            ServiceCategory::Database => "Database",
            ServiceCategory::Cdn => "CDN",
            ServiceCategory::Cicd => "CI/CD",
            ServiceCategory::Storage => "Storage",
            ServiceCategory::Authentication => "Authentication",
            ServiceCategory::OtherServices => "Other Services",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bundle of reference data handed to the estimation engine.
///
/// Scope definitions and the provider catalog are compiled in; the numeric
/// calculators are fields so callers can substitute their own rates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    pub user_cost: UserCostMultipliers,
    pub storage: StorageCalculator,
    pub auth: AuthCalculator,
    pub timeline: TimelineCalculator,
}

impl ReferenceData {
    /// Definition for a scope tier
    pub fn scope(&self, scope: Scope) -> &'static ScopeDefinition {
        ScopeDefinition::lookup(scope)
    }

    /// Provider catalog for a scope/category combination (may be empty)
    pub fn providers(&self, scope: Scope, category: ServiceCategory) -> &'static [ServiceProvider] {
        providers_for(scope, category)
    }

    /// Base monthly cost for a category, honoring a provider selection.
    ///
    /// An unknown provider name falls back to the scope's base figure.
    pub fn base_cost(
        &self,
        scope: Scope,
        category: ServiceCategory,
        provider: Option<&str>,
    ) -> f64 {
        provider
            .and_then(|name| find_provider(scope, category, name))
            .map(|p| p.base_cost)
            .unwrap_or_else(|| self.scope(scope).base_costs.get(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys_are_stable() {
        assert_eq!(ServiceCategory::Cicd.key(), "cicd");
        assert_eq!(ServiceCategory::OtherServices.key(), "otherServices");
        let json = serde_json::to_string(&ServiceCategory::OtherServices).unwrap();
        assert_eq!(json, "\"otherServices\"");
    }

    #[test]
    fn test_base_cost_provider_override() {
        let reference = ReferenceData::default();
        // No selection: scope base figure
        assert_eq!(reference.base_cost(Scope::Mvp, ServiceCategory::Hosting, None), 50.0);
        // Known provider: listed figure
        assert_eq!(
            reference.base_cost(Scope::Mvp, ServiceCategory::Hosting, Some("Vercel Pro")),
            20.0
        );
        // Unknown provider: fall back to scope base
        assert_eq!(
            reference.base_cost(Scope::Mvp, ServiceCategory::Hosting, Some("Unknown Cloud")),
            50.0
        );
    }
}
