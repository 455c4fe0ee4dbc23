//! # Costwise CLI Application
//!
//! Terminal front end for the estimation engine. Accepts a shared calculator
//! link (or bare query string), prints the cost breakdown, and can export
//! the CSV report.
//!
//! ```text
//! costwise_cli [QUERY_OR_URL] [--csv PATH] [--json] [--share]
//! ```
//!
//! With no arguments the default parameter set is estimated.

use std::env;
use std::fs;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use costwise_core::catalog::ReferenceData;
use costwise_core::errors::{EstimateError, EstimateResult};
use costwise_core::estimates::{estimate, Breakdown};
use costwise_core::params::Parameters;
use costwise_core::{report, state, ServiceCategory};

struct Args {
    query: Option<String>,
    csv_path: Option<String>,
    json: bool,
    share: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        query: None,
        csv_path: None,
        json: false,
        share: false,
    };
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--csv" => {
                args.csv_path = Some(iter.next().ok_or("--csv requires a path")?);
            }
            "--json" => args.json = true,
            "--share" => args.share = true,
            "--help" | "-h" => {
                return Err("usage: costwise_cli [QUERY_OR_URL] [--csv PATH] [--json] [--share]"
                    .to_string())
            }
            other if args.query.is_none() => args.query = Some(other.to_string()),
            other => return Err(format!("unexpected argument: {}", other)),
        }
    }
    Ok(args)
}

/// Extract the query-string portion of a shared link, tolerating a bare
/// query string with or without a leading `?`.
fn query_portion(input: &str) -> &str {
    match input.split_once('?') {
        Some((_, query)) => query,
        None => input,
    }
}

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn print_breakdown(params: &Parameters, breakdown: &Breakdown) {
    println!("═══════════════════════════════════════");
    println!("  PROJECT COST BREAKDOWN");
    println!("═══════════════════════════════════════");
    println!();
    println!("Scope:    {}", params.scope);
    println!("Users:    {}", params.user_count);
    println!(
        "Timeline: {} weeks (base {}, {:.2}x)",
        breakdown.timeline.adjusted_weeks, breakdown.timeline.base_weeks, breakdown.timeline.multiplier
    );
    println!();

    if params.visibility.show_development {
        println!("Development:");
        for role in &breakdown.development.role_costs {
            if role.weekly_hours > 0.0 {
                println!(
                    "  {:<20} {:>5.1} h/wk @ {:>8}  = {:>10}/wk",
                    role.title,
                    role.weekly_hours,
                    money(role.hourly_rate),
                    money(role.weekly_cost)
                );
            }
        }
        println!("  Weekly total:  {}", money(breakdown.development.total_weekly_cost));
        println!("  Project total: {}", money(breakdown.development.total_cost));
        println!();
    }

    if params.visibility.show_infrastructure {
        println!("Infrastructure (monthly):");
        for category in ServiceCategory::ALL {
            let cost = breakdown.infrastructure.get(category);
            let note = if params.free_tier.get(category) {
                " (free tier)"
            } else {
                ""
            };
            println!("  {:<16} {:>10}{}", category.label(), money(cost), note);
        }
        println!(
            "  Monthly total:   {}",
            money(breakdown.infrastructure.monthly_total())
        );
        println!();
    }

    if params.visibility.show_retainer && params.retainer_hours > 0.0 {
        println!("Support retainer:");
        println!(
            "  {} h/wk @ {} blended = {}/mo",
            params.retainer_hours,
            money(breakdown.retainer.blended_hourly_rate),
            money(breakdown.retainer.monthly_cost)
        );
        println!();
    }

    println!("Totals:");
    println!("  Initial investment: {}", money(breakdown.totals.initial_cost));
    println!("  Ongoing monthly:    {}", money(breakdown.totals.monthly_cost));
    println!("  First year:         {}", money(breakdown.totals.first_year_cost));
}

fn run(args: &Args) -> EstimateResult<()> {
    let reference = ReferenceData::default();
    let params = match &args.query {
        Some(input) => state::decode_query(query_portion(input)),
        None => Parameters::default(),
    };
    let breakdown = estimate(&params, &reference);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print_breakdown(&params, &breakdown);
    }

    if args.share {
        println!();
        println!("Share: ?{}", state::encode_query(&params, &reference));
    }

    if let Some(path) = &args.csv_path {
        let csv = report::generate_csv(&params, &breakdown, &reference)?;
        fs::write(path, csv).map_err(|err| EstimateError::io("write", path, err.to_string()))?;
        info!(%path, "wrote CSV report");
        println!();
        println!("CSV report written to {}", path);
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
