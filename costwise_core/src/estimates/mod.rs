//! # Estimation Engine
//!
//! Pure, deterministic projection from [`Parameters`] + [`ReferenceData`] to
//! a full [`Breakdown`]. No side effects, no hidden state; recomputing on
//! every parameter change is cheap (linear in roles + categories + line
//! items, all small).
//!
//! ## Example
//!
//! ```rust
//! use costwise_core::catalog::ReferenceData;
//! use costwise_core::estimates::estimate;
//! use costwise_core::params::Parameters;
//!
//! let params = Parameters::default()
//!     .with_role_rate("seniorDev", 100.0)
//!     .with_role_hours("seniorDev", 20.0);
//! let breakdown = estimate(&params, &ReferenceData::default());
//!
//! assert_eq!(breakdown.timeline.base_weeks, 10);
//! assert_eq!(breakdown.development.total_cost, 20000.0);
//! ```

pub mod development;
pub mod infrastructure;
pub mod retainer;
pub mod timeline;

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceData;
use crate::params::Parameters;

pub use development::{DevelopmentEstimate, RoleCost};
pub use infrastructure::InfrastructureCosts;
pub use retainer::RetainerEstimate;
pub use timeline::{TimelineAdjustment, TimelineBounds};

/// Grand totals with section visibility applied.
///
/// A section toggled off contributes nothing to any of these figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// One-time development investment
    pub initial_cost: f64,

    /// Ongoing monthly cost (infrastructure + retainer)
    pub monthly_cost: f64,

    /// Ongoing yearly cost (`monthly_cost * 12`)
    pub yearly_cost: f64,

    /// First-year projection: initial cost, a year of infrastructure, and
    /// the retainer pro-rated to the post-development remainder of the year
    pub first_year_cost: f64,
}

/// The complete estimation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub timeline: TimelineAdjustment,

    /// Allowed adjustment range for the current base weeks
    pub timeline_bounds: TimelineBounds,

    pub development: DevelopmentEstimate,

    pub infrastructure: InfrastructureCosts,

    pub retainer: RetainerEstimate,

    pub totals: Totals,
}

/// Compute the full breakdown for the current parameters.
///
/// Inputs are sanitized at this boundary (NaN/negative clamp to 0), so the
/// function is total: it never errors and never panics.
pub fn estimate(params: &Parameters, reference: &ReferenceData) -> Breakdown {
    let params = params.sanitized();

    let tl = timeline::calculate(&params, reference);
    let bounds = TimelineBounds::for_base(tl.base_weeks);
    let development = development::calculate(&params, &tl);
    let infrastructure = infrastructure::calculate(&params, reference);
    let retainer = retainer::calculate(&params, &tl);

    let visibility = params.visibility;
    let initial_cost = if visibility.show_development {
        development.total_cost
    } else {
        0.0
    };
    let mut monthly_cost = 0.0;
    let mut first_year_cost = initial_cost;
    if visibility.show_infrastructure {
        monthly_cost += infrastructure.monthly_total();
        first_year_cost += infrastructure.yearly_total();
    }
    if visibility.show_retainer {
        monthly_cost += retainer.monthly_cost;
        first_year_cost += retainer.first_year_cost;
    }

    Breakdown {
        timeline: tl,
        timeline_bounds: bounds,
        development,
        infrastructure,
        retainer,
        totals: Totals {
            initial_cost,
            monthly_cost,
            yearly_cost: monthly_cost * 12.0,
            first_year_cost,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceCategory;
    use crate::params::OtherService;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample_params() -> Parameters {
        Parameters::default()
            .with_role_rate("seniorDev", 100.0)
            .with_role_hours("seniorDev", 20.0)
            .with_retainer_hours(10.0)
            .push_service(OtherService::new("Email", 25.0))
    }

    #[test]
    fn test_full_breakdown_is_consistent() {
        let reference = ReferenceData::default();
        let breakdown = estimate(&sample_params(), &reference);

        assert_eq!(breakdown.timeline.base_weeks, 10);
        assert_eq!(breakdown.timeline_bounds.min_weeks, 5);
        assert_eq!(breakdown.timeline_bounds.max_weeks, 20);
        assert_eq!(breakdown.development.total_cost, 20000.0);

        let expected_monthly =
            breakdown.infrastructure.monthly_total() + breakdown.retainer.monthly_cost;
        assert!(close(breakdown.totals.monthly_cost, expected_monthly));
        assert!(close(breakdown.totals.yearly_cost, expected_monthly * 12.0));
        assert!(close(
            breakdown.totals.first_year_cost,
            breakdown.development.total_cost
                + breakdown.infrastructure.yearly_total()
                + breakdown.retainer.first_year_cost
        ));
    }

    #[test]
    fn test_section_toggles_exclude_from_every_aggregate() {
        let reference = ReferenceData::default();
        let mut params = sample_params();

        params.visibility.show_development = false;
        let breakdown = estimate(&params, &reference);
        assert_eq!(breakdown.totals.initial_cost, 0.0);
        assert!(close(
            breakdown.totals.first_year_cost,
            breakdown.infrastructure.yearly_total() + breakdown.retainer.first_year_cost
        ));

        params.visibility.show_development = true;
        params.visibility.show_infrastructure = false;
        let breakdown = estimate(&params, &reference);
        assert!(close(
            breakdown.totals.monthly_cost,
            breakdown.retainer.monthly_cost
        ));

        params.visibility.show_retainer = false;
        let breakdown = estimate(&params, &reference);
        assert_eq!(breakdown.totals.monthly_cost, 0.0);
        assert!(close(
            breakdown.totals.first_year_cost,
            breakdown.development.total_cost
        ));
    }

    #[test]
    fn test_engine_is_total_over_garbage_input() {
        let reference = ReferenceData::default();
        let mut params = sample_params();
        params.roles[0].hourly_rate = f64::NAN;
        params.roles[1].weekly_hours = -10.0;
        params.retainer_hours = f64::INFINITY;

        let breakdown = estimate(&params, &reference);
        assert!(breakdown.totals.first_year_cost.is_finite());
        assert!(breakdown.development.total_cost >= 0.0);
    }

    #[test]
    fn test_free_tier_zeroes_category_in_breakdown() {
        let reference = ReferenceData::default();
        let params = sample_params()
            .with_free_tier(ServiceCategory::Hosting, true)
            .with_free_tier(ServiceCategory::OtherServices, true);
        let breakdown = estimate(&params, &reference);
        assert_eq!(breakdown.infrastructure.hosting, 0.0);
        assert_eq!(breakdown.infrastructure.other_services, 0.0);
        assert!(breakdown.infrastructure.database > 0.0);
    }

    #[test]
    fn test_breakdown_serializes() {
        let reference = ReferenceData::default();
        let breakdown = estimate(&sample_params(), &reference);
        let json = serde_json::to_string(&breakdown).unwrap();
        let back: Breakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, back);
    }
}
