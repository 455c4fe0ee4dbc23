//! Support Retainer Cost
//!
//! Ongoing weekly support hours billed at the team's blended hourly rate.
//! The blended rate weights each role's rate by its share of allocated
//! hours; with no hours allocated it falls back to a simple mean so the
//! figure stays meaningful while the team is still being sketched out.

use serde::{Deserialize, Serialize};

use crate::catalog::WEEKS_PER_MONTH;
use crate::estimates::timeline::TimelineAdjustment;
use crate::params::Parameters;

/// Retainer cost figures for the current team.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetainerEstimate {
    /// Hours-weighted mean hourly rate (simple mean when no hours allocated)
    pub blended_hourly_rate: f64,

    pub weekly_cost: f64,

    /// `weekly_cost * 4.33`
    pub monthly_cost: f64,

    /// `monthly_cost * 12`
    pub yearly_cost: f64,

    /// Yearly cost pro-rated to the fraction of the year remaining after
    /// development, avoiding double counting during the active window:
    /// `yearly_cost * (52 - adjusted_weeks) / 52`, floored at 0.
    pub first_year_cost: f64,
}

/// Blended hourly rate for the current team.
pub fn blended_hourly_rate(params: &Parameters) -> f64 {
    if params.roles.is_empty() {
        return 0.0;
    }
    let total_hours = params.total_weekly_hours();
    if total_hours <= 0.0 {
        let total_rates: f64 = params.roles.iter().map(|r| r.hourly_rate).sum();
        return total_rates / params.roles.len() as f64;
    }
    params
        .roles
        .iter()
        .map(|r| r.hourly_rate * (r.weekly_hours / total_hours))
        .sum()
}

/// Compute retainer costs from sanitized parameters and the timeline.
pub fn calculate(params: &Parameters, timeline: &TimelineAdjustment) -> RetainerEstimate {
    let blended = blended_hourly_rate(params);
    let weekly_cost = blended * params.retainer_hours;
    let monthly_cost = weekly_cost * WEEKS_PER_MONTH;
    let yearly_cost = monthly_cost * 12.0;
    let remaining_weeks = (52.0 - timeline.adjusted_weeks as f64).max(0.0);
    let first_year_cost = yearly_cost * remaining_weeks / 52.0;

    RetainerEstimate {
        blended_hourly_rate: blended,
        weekly_cost,
        monthly_cost,
        yearly_cost,
        first_year_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn no_development() -> TimelineAdjustment {
        TimelineAdjustment {
            base_weeks: 0,
            adjusted_weeks: 0,
            multiplier: 1.0,
        }
    }

    #[test]
    fn test_simple_mean_when_no_hours() {
        // Default rates: 75, 150, 125, 135, 85 -> mean 114
        let params = Parameters::default();
        assert!(close(blended_hourly_rate(&params), 114.0));
    }

    #[test]
    fn test_weighted_mean_with_hours() {
        let params = Parameters::default()
            .with_role_hours("juniorDev", 30.0)
            .with_role_hours("seniorDev", 10.0);
        // 75 * 0.75 + 150 * 0.25 = 93.75
        assert!(close(blended_hourly_rate(&params), 93.75));
    }

    #[test]
    fn test_empty_team_rates_zero() {
        let mut params = Parameters::default();
        params.roles.clear();
        assert_eq!(blended_hourly_rate(&params), 0.0);
    }

    #[test]
    fn test_retainer_costs_scale_with_hours() {
        let params = Parameters::default()
            .with_role_hours("seniorDev", 20.0)
            .with_retainer_hours(10.0);
        let retainer = calculate(&params, &no_development());
        assert!(close(retainer.blended_hourly_rate, 150.0));
        assert!(close(retainer.weekly_cost, 1500.0));
        assert!(close(retainer.monthly_cost, 1500.0 * 4.33));
        assert!(close(retainer.yearly_cost, retainer.monthly_cost * 12.0));
    }

    #[test]
    fn test_first_year_prorated_by_development_window() {
        let params = Parameters::default()
            .with_role_hours("seniorDev", 20.0)
            .with_retainer_hours(10.0);
        let tl = TimelineAdjustment {
            base_weeks: 10,
            adjusted_weeks: 13,
            multiplier: 1.3,
        };
        let retainer = calculate(&params, &tl);
        assert!(close(retainer.first_year_cost, retainer.yearly_cost * 39.0 / 52.0));
    }

    #[test]
    fn test_first_year_floors_at_zero_for_long_projects() {
        let params = Parameters::default()
            .with_role_hours("seniorDev", 20.0)
            .with_retainer_hours(10.0);
        let tl = TimelineAdjustment {
            base_weeks: 30,
            adjusted_weeks: 60,
            multiplier: 2.0,
        };
        let retainer = calculate(&params, &tl);
        assert_eq!(retainer.first_year_cost, 0.0);
    }
}
