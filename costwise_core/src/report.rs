//! # CSV Report
//!
//! Renders a [`Breakdown`] as a sectioned CSV document for download or
//! archiving. All numbers come from the structured result; nothing is
//! computed here beyond text formatting.
//!
//! Sections honor the visibility flags the same way the aggregates do: a
//! section toggled off is omitted entirely, and the summary totals already
//! exclude it.

use std::io::Write;

use chrono::Utc;
use csv::WriterBuilder;

use crate::catalog::{ReferenceData, ServiceCategory};
use crate::errors::{EstimateError, EstimateResult};
use crate::estimates::Breakdown;
use crate::params::Parameters;

/// Format a currency amount for report cells
fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn row<W: Write>(writer: &mut csv::Writer<W>, fields: &[&str]) -> EstimateResult<()> {
    writer.write_record(fields)?;
    Ok(())
}

/// Generate the full CSV report for a computed breakdown.
///
/// `params` must be the parameter set the breakdown was computed from.
pub fn generate_csv(
    params: &Parameters,
    breakdown: &Breakdown,
    reference: &ReferenceData,
) -> EstimateResult<String> {
    let params = params.sanitized();
    let mut w = WriterBuilder::new().flexible(true).from_writer(vec![]);
    let visibility = params.visibility;
    let scope_def = reference.scope(params.scope);

    // --- Title ---
    row(&mut w, &["Project Cost Estimate Report"])?;
    row(&mut w, &["Generated", &Utc::now().to_rfc3339()])?;
    row(&mut w, &[""])?;

    // --- Summary ---
    row(&mut w, &["SUMMARY"])?;
    row(&mut w, &["Project Type", scope_def.label])?;
    row(&mut w, &["Estimated Users", &params.user_count.to_string()])?;
    row(
        &mut w,
        &[
            "Estimated Timeline",
            &format!(
                "{} weeks (base {})",
                breakdown.timeline.adjusted_weeks, breakdown.timeline.base_weeks
            ),
        ],
    )?;
    if visibility.show_development {
        row(
            &mut w,
            &["Total Development Cost", &money(breakdown.development.total_cost)],
        )?;
    }
    if visibility.show_infrastructure {
        row(
            &mut w,
            &[
                "Monthly Infrastructure Cost",
                &money(breakdown.infrastructure.monthly_total()),
            ],
        )?;
        row(
            &mut w,
            &[
                "Yearly Infrastructure Cost",
                &money(breakdown.infrastructure.yearly_total()),
            ],
        )?;
    }
    if visibility.show_retainer {
        row(
            &mut w,
            &["Monthly Retainer Cost", &money(breakdown.retainer.monthly_cost)],
        )?;
    }
    row(
        &mut w,
        &["First Year Total", &money(breakdown.totals.first_year_cost)],
    )?;
    row(&mut w, &[""])?;

    // --- Development ---
    if visibility.show_development {
        row(&mut w, &["DEVELOPMENT COSTS"])?;
        row(&mut w, &["Role", "Hours/Week", "Rate", "Weekly Cost"])?;
        for role in &breakdown.development.role_costs {
            row(
                &mut w,
                &[
                    &role.title,
                    &role.weekly_hours.to_string(),
                    &money(role.hourly_rate),
                    &money(role.weekly_cost),
                ],
            )?;
        }
        row(
            &mut w,
            &["TOTAL", "", "", &money(breakdown.development.total_weekly_cost)],
        )?;
        row(
            &mut w,
            &[
                "Total Project Cost",
                &format!("{} weeks", breakdown.timeline.adjusted_weeks),
                "",
                &money(breakdown.development.total_cost),
            ],
        )?;
        row(&mut w, &[""])?;
    }

    // --- Infrastructure ---
    if visibility.show_infrastructure {
        row(&mut w, &["INFRASTRUCTURE COSTS"])?;
        row(&mut w, &["Service", "Monthly Cost", "Free Tier", "Provider"])?;
        for category in ServiceCategory::ALL {
            row(
                &mut w,
                &[
                    category.label(),
                    &money(breakdown.infrastructure.get(category)),
                    if params.free_tier.get(category) { "yes" } else { "no" },
                    params.providers.get(category).unwrap_or("-"),
                ],
            )?;
        }
        row(
            &mut w,
            &["TOTAL MONTHLY", &money(breakdown.infrastructure.monthly_total())],
        )?;
        row(
            &mut w,
            &["TOTAL YEARLY", &money(breakdown.infrastructure.yearly_total())],
        )?;
        row(&mut w, &[""])?;

        if !params.other_services.is_empty() {
            row(&mut w, &["OTHER SERVICES"])?;
            row(&mut w, &["Name", "Monthly Cost", "Description"])?;
            for service in &params.other_services {
                row(
                    &mut w,
                    &[
                        &service.name,
                        &money(service.cost),
                        service.description.as_deref().unwrap_or(""),
                    ],
                )?;
            }
            row(&mut w, &[""])?;
        }

        row(&mut w, &["SERVICE CATALOG"])?;
        row(&mut w, &["Category", "Provider", "Base Cost", "Description"])?;
        for category in ServiceCategory::SELECTABLE {
            for provider in reference.providers(params.scope, category) {
                row(
                    &mut w,
                    &[
                        category.label(),
                        &provider.name,
                        &money(provider.base_cost),
                        &provider.description,
                    ],
                )?;
            }
        }
        row(&mut w, &[""])?;
    }

    // --- Retainer ---
    if visibility.show_retainer && params.retainer_hours > 0.0 {
        row(&mut w, &["SUPPORT RETAINER"])?;
        row(
            &mut w,
            &["Weekly Support Hours", &params.retainer_hours.to_string()],
        )?;
        row(
            &mut w,
            &["Blended Hourly Rate", &money(breakdown.retainer.blended_hourly_rate)],
        )?;
        row(&mut w, &["Weekly Cost", &money(breakdown.retainer.weekly_cost)])?;
        row(&mut w, &["Monthly Cost", &money(breakdown.retainer.monthly_cost)])?;
        row(
            &mut w,
            &[
                "First Year Cost (post-development)",
                &money(breakdown.retainer.first_year_cost),
            ],
        )?;
        row(&mut w, &[""])?;
    }

    // --- Assumptions ---
    row(&mut w, &["CALCULATION ASSUMPTIONS"])?;
    row(
        &mut w,
        &["Team Size", &format!("{} developers", reference.timeline.team_size)],
    )?;
    row(
        &mut w,
        &[
            "Productive Hours",
            &format!("{} hours/dev/week", reference.timeline.hours_per_week_per_dev),
        ],
    )?;
    row(
        &mut w,
        &[
            "Scope Effort Multiplier",
            &scope_def.development_time_multiplier.to_string(),
        ],
    )?;
    row(
        &mut w,
        &["Timeline Adjustment", &format!("{:.2}x", breakdown.timeline.multiplier)],
    )?;
    row(&mut w, &["Weeks Per Month", "4.33"])?;
    row(&mut w, &["Planned Role Hours", ""])?;
    for (role_id, hours) in scope_def.planning_hours {
        row(&mut w, &[*role_id, &hours.to_string()])?;
    }

    let bytes = w.into_inner().map_err(|err| EstimateError::Report {
        reason: err.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|err| EstimateError::Report {
        reason: err.to_string(),
    })
}
