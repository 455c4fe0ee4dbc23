//! Development Timeline
//!
//! Derives the base week count from the scope's effort multiplier and applies
//! the user's adjustment within hard bounds.
//!
//! The scope multiplier expresses effort in months of a baseline team,
//! converted to weeks with a fixed 4-weeks/month approximation. Zero
//! allocated hours means no schedule is meaningful, so everything collapses
//! to zero.

use serde::{Deserialize, Serialize};

use crate::catalog::{ReferenceData, BASE_WEEKS_PER_MONTH};
use crate::params::Parameters;

/// Derived timeline with the user adjustment applied.
///
/// Invariant: `multiplier == adjusted_weeks / base_weeks` whenever
/// `base_weeks > 0`; exactly 1.0 when `base_weeks == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineAdjustment {
    /// Derived week count before adjustment
    pub base_weeks: u32,

    /// User-adjusted week count, clamped into [`TimelineBounds`]
    pub adjusted_weeks: u32,

    /// adjusted / base ratio
    pub multiplier: f64,
}

/// Allowed range for the adjusted week count: 50% to 200% of base,
/// never below one week. Degenerate `[0, 0]` when base is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBounds {
    pub min_weeks: u32,
    pub max_weeks: u32,
}

impl TimelineBounds {
    /// Bounds for a given base week count
    pub fn for_base(base_weeks: u32) -> TimelineBounds {
        if base_weeks == 0 {
            return TimelineBounds {
                min_weeks: 0,
                max_weeks: 0,
            };
        }
        TimelineBounds {
            min_weeks: ((base_weeks as f64 * 0.5).floor() as u32).max(1),
            max_weeks: (base_weeks as f64 * 2.0).ceil() as u32,
        }
    }

    /// Clamp a requested week count into this range
    pub fn clamp(&self, weeks: u32) -> u32 {
        weeks.clamp(self.min_weeks, self.max_weeks)
    }
}

/// Base week count for the current parameters.
///
/// `ceil(development_time_multiplier * 4)` when any role has allocated
/// hours, else 0.
pub fn base_weeks(params: &Parameters, reference: &ReferenceData) -> u32 {
    if params.total_weekly_hours() <= 0.0 {
        return 0;
    }
    let multiplier = reference.scope(params.scope).development_time_multiplier;
    (multiplier * BASE_WEEKS_PER_MONTH).ceil() as u32
}

/// Compute the adjusted timeline for the current parameters.
///
/// An out-of-range override (e.g. from decoded shared state) is clamped,
/// and the multiplier is always recomputed from the clamped value.
pub fn calculate(params: &Parameters, reference: &ReferenceData) -> TimelineAdjustment {
    let base = base_weeks(params, reference);
    let bounds = TimelineBounds::for_base(base);
    let adjusted = bounds.clamp(params.adjusted_weeks.unwrap_or(base));
    let multiplier = if base > 0 {
        adjusted as f64 / base as f64
    } else {
        1.0
    };
    TimelineAdjustment {
        base_weeks: base,
        adjusted_weeks: adjusted,
        multiplier,
    }
}
