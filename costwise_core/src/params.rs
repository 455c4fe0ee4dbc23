//! # Calculator Parameters
//!
//! The full user-adjustable input set as one immutable value. Mutation
//! helpers return a new `Parameters` (reducer style); the estimation engine
//! is a pure projection over the current value, so there is no stored
//! derived state to go stale.
//!
//! Numeric inputs are sanitized at this boundary (NaN and negative values
//! clamp to 0, weekly hours cap at 40); the engine assumes sanitized input
//! and never errors.
//!
//! ## Example
//!
//! ```rust
//! use costwise_core::params::Parameters;
//! use costwise_core::catalog::Scope;
//!
//! let params = Parameters::default()
//!     .with_scope(Scope::Production)
//!     .with_role_hours("seniorDev", 20.0);
//! assert_eq!(params.scope, Scope::Production);
//! assert_eq!(params.total_weekly_hours(), 20.0);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Scope, ServiceCategory, DEFAULT_ROLES};

/// Maximum weekly hours for one staffing line
pub const MAX_WEEKLY_HOURS: f64 = 40.0;

/// Clamp a user-supplied number to non-negative, mapping NaN/infinite to 0.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// One staffing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Unique key (e.g., "seniorDev")
    pub id: String,

    /// Display title (e.g., "Senior Developer")
    pub title: String,

    /// Billing rate in currency units per hour
    pub hourly_rate: f64,

    /// Allocated hours per week, capped at 40
    pub weekly_hours: f64,
}

impl Role {
    pub fn new(id: impl Into<String>, title: impl Into<String>, hourly_rate: f64) -> Self {
        Role {
            id: id.into(),
            title: title.into(),
            hourly_rate,
            weekly_hours: 0.0,
        }
    }

    /// Cost of this line for one week
    pub fn weekly_cost(&self) -> f64 {
        self.hourly_rate * self.weekly_hours
    }

    fn sanitized(&self) -> Role {
        Role {
            id: self.id.clone(),
            title: self.title.clone(),
            hourly_rate: non_negative(self.hourly_rate),
            weekly_hours: non_negative(self.weekly_hours).min(MAX_WEEKLY_HOURS),
        }
    }
}

/// A free-form user-added monthly line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherService {
    /// Unique id; generated as a UUID for new items, but any string decoded
    /// from shared state is accepted
    pub id: String,

    pub name: String,

    /// Monthly cost in currency units
    pub cost: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OtherService {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        OtherService {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            cost,
            description: None,
        }
    }

    fn sanitized(&self) -> OtherService {
        OtherService {
            cost: non_negative(self.cost),
            ..self.clone()
        }
    }
}

/// Free-tier flags, one per service category.
///
/// A set flag forces that category's final cost to exactly 0 regardless of
/// provider selection or usage inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FreeTierEligibility {
    pub hosting: bool,
    pub database: bool,
    pub cdn: bool,
    pub cicd: bool,
    pub storage: bool,
    pub authentication: bool,
    pub other_services: bool,
}

impl FreeTierEligibility {
    pub fn get(&self, category: ServiceCategory) -> bool {
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

    pub fn set(&mut self, category: ServiceCategory, enabled: bool) {
        match category {
            ServiceCategory::Hosting => self.hosting = enabled,
            ServiceCategory::Database => self.database = enabled,
            ServiceCategory::Cdn => self.cdn = enabled,
            ServiceCategory::Cicd => self.cicd = enabled,
            ServiceCategory::Storage => self.storage = enabled,
            ServiceCategory::Authentication => self.authentication = enabled,
            ServiceCategory::OtherServices => self.other_services = enabled,
        }
    }
}

/// Chosen provider name per category, drawn from the reference catalog.
///
/// Other-services is entirely user-entered and has no provider slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderSelections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cicd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<String>,
}

impl ProviderSelections {
    pub fn get(&self, category: ServiceCategory) -> Option<&str> {
        match category {
            ServiceCategory::Hosting => self.hosting.as_deref(),
            ServiceCategory::Database => self.database.as_deref(),
            ServiceCategory::Cdn => self.cdn.as_deref(),
            ServiceCategory::Cicd => self.cicd.as_deref(),
            ServiceCategory::Storage => self.storage.as_deref(),
            ServiceCategory::Authentication => self.authentication.as_deref(),
            ServiceCategory::OtherServices => None,
        }
    }

    pub fn set(&mut self, category: ServiceCategory, provider: Option<String>) {
        match category {
            ServiceCategory::Hosting => self.hosting = provider,
            ServiceCategory::Database => self.database = provider,
            ServiceCategory::Cdn => self.cdn = provider,
            ServiceCategory::Cicd => self.cicd = provider,
            ServiceCategory::Storage => self.storage = provider,
            ServiceCategory::Authentication => self.authentication = provider,
            ServiceCategory::OtherServices => {}
        }
    }
}

/// Which cost sections participate in display and aggregate totals.
///
/// A section toggled off is excluded from every aggregate, not merely hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionVisibility {
    pub results_only: bool,
    pub show_development: bool,
    pub show_infrastructure: bool,
    pub show_retainer: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        SectionVisibility {
            results_only: false,
            show_development: true,
            show_infrastructure: true,
            show_retainer: true,
        }
    }
}

/// The full user-adjustable parameter set.
///
/// Derived figures (timeline multiplier, per-category infrastructure costs)
/// are deliberately absent: they are recomputed by the engine on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    pub scope: Scope,

    /// Staffing lines, set semantics keyed by role id
    pub roles: Vec<Role>,

    /// Expected user count (also the MAU figure for authentication billing)
    pub user_count: u32,

    /// Stored data volume in GB
    pub gb_storage: u32,

    /// Weekly hours of ongoing support after development
    pub retainer_hours: f64,

    pub free_tier: FreeTierEligibility,

    pub providers: ProviderSelections,

    pub other_services: Vec<OtherService>,

    /// User override of the development timeline, in weeks.
    ///
    /// `None` means "use the derived base weeks". Cleared whenever scope or
    /// role hours change (deliberate reset policy). The engine clamps any
    /// stored value into the allowed range.
    pub adjusted_weeks: Option<u32>,

    pub visibility: SectionVisibility,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            scope: Scope::Mvp,
            roles: DEFAULT_ROLES
                .iter()
                .map(|(id, title, rate)| Role::new(*id, *title, *rate))
                .collect(),
            user_count: 500,
            gb_storage: 0,
            retainer_hours: 0.0,
            free_tier: FreeTierEligibility::default(),
            providers: ProviderSelections::default(),
            other_services: Vec::new(),
            adjusted_weeks: None,
            visibility: SectionVisibility::default(),
        }
    }
}

impl Parameters {
    /// Total allocated hours per week across all roles
    pub fn total_weekly_hours(&self) -> f64 {
        self.roles.iter().map(|r| r.weekly_hours).sum()
    }

    /// Copy with all numeric inputs clamped to valid ranges.
    ///
    /// NaN and negative values become 0; weekly hours cap at 40.
    pub fn sanitized(&self) -> Parameters {
        Parameters {
            roles: self.roles.iter().map(Role::sanitized).collect(),
            other_services: self.other_services.iter().map(OtherService::sanitized).collect(),
            retainer_hours: non_negative(self.retainer_hours),
            ..self.clone()
        }
    }

    // === Reducer-style updates ===

    /// Select a scope tier. Drops any timeline override.
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self.adjusted_weeks = None;
        self
    }

    /// Set the hourly rate for a role id (no-op for unknown ids).
    pub fn with_role_rate(mut self, role_id: &str, hourly_rate: f64) -> Self {
        if let Some(role) = self.roles.iter_mut().find(|r| r.id == role_id) {
            role.hourly_rate = non_negative(hourly_rate);
        }
        self
    }

    /// Set the weekly hours for a role id. Drops any timeline override.
    pub fn with_role_hours(mut self, role_id: &str, weekly_hours: f64) -> Self {
        if let Some(role) = self.roles.iter_mut().find(|r| r.id == role_id) {
            role.weekly_hours = non_negative(weekly_hours).min(MAX_WEEKLY_HOURS);
            self.adjusted_weeks = None;
        }
        self
    }

    pub fn with_user_count(mut self, user_count: u32) -> Self {
        self.user_count = user_count;
        self
    }

    pub fn with_gb_storage(mut self, gb_storage: u32) -> Self {
        self.gb_storage = gb_storage;
        self
    }

    pub fn with_retainer_hours(mut self, hours: f64) -> Self {
        self.retainer_hours = non_negative(hours);
        self
    }

    /// Override the development timeline in weeks (clamped by the engine)
    pub fn with_adjusted_weeks(mut self, weeks: u32) -> Self {
        self.adjusted_weeks = Some(weeks);
        self
    }

    pub fn with_free_tier(mut self, category: ServiceCategory, enabled: bool) -> Self {
        self.free_tier.set(category, enabled);
        self
    }

    pub fn with_provider(mut self, category: ServiceCategory, provider: Option<String>) -> Self {
        self.providers.set(category, provider);
        self
    }

    /// Append a user-added monthly line item
    pub fn push_service(mut self, service: OtherService) -> Self {
        self.other_services.push(service.sanitized());
        self
    }

    /// Remove a line item by id (no-op for unknown ids)
    pub fn remove_service(mut self, id: &str) -> Self {
        self.other_services.retain(|s| s.id != id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roles() {
        let params = Parameters::default();
        assert_eq!(params.roles.len(), 5);
        assert_eq!(params.total_weekly_hours(), 0.0);
        assert_eq!(params.scope, Scope::Mvp);
    }

    #[test]
    fn test_sanitize_clamps_invalid_numbers() {
        let mut params = Parameters::default();
        params.roles[0].hourly_rate = -50.0;
        params.roles[1].weekly_hours = f64::NAN;
        params.roles[2].weekly_hours = 80.0;
        params.retainer_hours = -3.0;
        params.other_services.push(OtherService::new("Email", -12.0));

        let clean = params.sanitized();
        assert_eq!(clean.roles[0].hourly_rate, 0.0);
        assert_eq!(clean.roles[1].weekly_hours, 0.0);
        assert_eq!(clean.roles[2].weekly_hours, MAX_WEEKLY_HOURS);
        assert_eq!(clean.retainer_hours, 0.0);
        assert_eq!(clean.other_services[0].cost, 0.0);
    }

    #[test]
    fn test_scope_change_resets_timeline_override() {
        let params = Parameters::default()
            .with_role_hours("seniorDev", 20.0)
            .with_adjusted_weeks(15);
        assert_eq!(params.adjusted_weeks, Some(15));

        let params = params.with_scope(Scope::Production);
        assert_eq!(params.adjusted_weeks, None);
    }

    #[test]
    fn test_role_hours_change_resets_timeline_override() {
        let params = Parameters::default()
            .with_role_hours("seniorDev", 20.0)
            .with_adjusted_weeks(15)
            .with_role_hours("juniorDev", 10.0);
        assert_eq!(params.adjusted_weeks, None);
    }

    #[test]
    fn test_service_append_remove() {
        let service = OtherService::new("Email Service", 25.0);
        let id = service.id.clone();
        let params = Parameters::default().push_service(service);
        assert_eq!(params.other_services.len(), 1);

        let params = params.remove_service(&id);
        assert!(params.other_services.is_empty());
    }

    #[test]
    fn test_provider_selection_ignores_other_services() {
        let params = Parameters::default()
            .with_provider(ServiceCategory::OtherServices, Some("Nope".to_string()));
        assert_eq!(params.providers.get(ServiceCategory::OtherServices), None);
    }

    #[test]
    fn test_free_tier_json_shape() {
        let mut free = FreeTierEligibility::default();
        free.set(ServiceCategory::OtherServices, true);
        let json = serde_json::to_string(&free).unwrap();
        assert!(json.contains("\"otherServices\":true"));
        let back: FreeTierEligibility = serde_json::from_str(&json).unwrap();
        assert_eq!(free, back);
    }
}
