//! Development Cost
//!
//! Per-role weekly costs rolled up through the adjusted timeline. The total
//! project cost (`total_cost`) is the authoritative development figure used
//! by every aggregate.

use serde::{Deserialize, Serialize};

use crate::catalog::WEEKS_PER_MONTH;
use crate::estimates::timeline::TimelineAdjustment;
use crate::params::Parameters;

/// One staffing line with its computed weekly cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCost {
    pub id: String,
    pub title: String,
    pub hourly_rate: f64,
    pub weekly_hours: f64,
    pub weekly_cost: f64,
}

/// Development cost figures for the current team and timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentEstimate {
    /// Per-role breakdown in parameter order
    pub role_costs: Vec<RoleCost>,

    /// Sum of role weekly costs
    pub total_weekly_cost: f64,

    /// `total_weekly_cost * 4.33`
    pub monthly_cost: f64,

    /// `total_weekly_cost * adjusted_weeks` - the project cost figure
    pub total_cost: f64,

    /// Equal to `total_cost` for projects under a year, else the
    /// monthly figure annualized
    pub yearly_cost: f64,
}

/// Compute development costs from sanitized parameters and the timeline.
pub fn calculate(params: &Parameters, timeline: &TimelineAdjustment) -> DevelopmentEstimate {
    let role_costs: Vec<RoleCost> = params
        .roles
        .iter()
        .map(|role| RoleCost {
            id: role.id.clone(),
            title: role.title.clone(),
            hourly_rate: role.hourly_rate,
            weekly_hours: role.weekly_hours,
            weekly_cost: role.weekly_cost(),
        })
        .collect();

    let total_weekly_cost: f64 = role_costs.iter().map(|r| r.weekly_cost).sum();
    let monthly_cost = total_weekly_cost * WEEKS_PER_MONTH;
    let total_cost = total_weekly_cost * timeline.adjusted_weeks as f64;
    let yearly_cost = if timeline.adjusted_weeks < 52 {
        total_cost
    } else {
        monthly_cost * 12.0
    };

    DevelopmentEstimate {
        role_costs,
        total_weekly_cost,
        monthly_cost,
        total_cost,
        yearly_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceData;
    use crate::estimates::timeline;

    #[test]
    fn test_single_role_mvp_scenario() {
        // One role at $100/h for 20h/week on MVP: base 10 weeks,
        // weekly 2000, total 20000.
        let reference = ReferenceData::default();
        let params = Parameters::default()
            .with_role_rate("seniorDev", 100.0)
            .with_role_hours("seniorDev", 20.0);
        let tl = timeline::calculate(&params, &reference);
        assert_eq!(tl.adjusted_weeks, 10);

        let dev = calculate(&params, &tl);
        assert_eq!(dev.total_weekly_cost, 2000.0);
        assert_eq!(dev.total_cost, 20000.0);
        assert_eq!(dev.monthly_cost, 2000.0 * 4.33);
        assert_eq!(dev.yearly_cost, dev.total_cost);
    }

    #[test]
    fn test_yearly_cap_beyond_one_year() {
        let params = Parameters::default().with_role_hours("seniorDev", 20.0);
        let tl = TimelineAdjustment {
            base_weeks: 30,
            adjusted_weeks: 60,
            multiplier: 2.0,
        };
        let dev = calculate(&params, &tl);
        assert_eq!(dev.yearly_cost, dev.monthly_cost * 12.0);
        assert!(dev.yearly_cost < dev.total_cost);
    }

    #[test]
    fn test_yearly_formulas_coincide_at_52_weeks() {
        // At exactly 52 weeks, 4.33 weeks/month * 12 months == 51.96 weeks,
        // so the annualized figure sits within rounding of the total.
        let params = Parameters::default()
            .with_role_rate("seniorDev", 100.0)
            .with_role_hours("seniorDev", 20.0);
        let tl = TimelineAdjustment {
            base_weeks: 26,
            adjusted_weeks: 52,
            multiplier: 2.0,
        };
        let dev = calculate(&params, &tl);
        let total = dev.total_weekly_cost * 52.0;
        assert!((dev.yearly_cost - total).abs() / total < 0.001);
    }

    #[test]
    fn test_empty_allocation_costs_nothing() {
        let reference = ReferenceData::default();
        let params = Parameters::default();
        let tl = timeline::calculate(&params, &reference);
        let dev = calculate(&params, &tl);
        assert_eq!(dev.total_weekly_cost, 0.0);
        assert_eq!(dev.total_cost, 0.0);
        assert_eq!(dev.role_costs.len(), 5);
    }
}
