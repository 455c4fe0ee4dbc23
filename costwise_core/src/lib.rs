//! # costwise_core - Project Cost Estimation Engine
//!
//! `costwise_core` estimates software project cost and timeline from
//! user-adjustable parameters (team composition, project scope, user load,
//! infrastructure choices) and produces a structured breakdown that renderers
//! and exporters consume. All costs are illustrative estimates computed from
//! static coefficients; there is no billing integration.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the engine is a pure function from parameters +
//!   reference data to a breakdown; recompute on every change
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Total**: invalid numeric input is clamped at the boundary, never
//!   raised as an error
//! - **Shareable**: the full parameter set round-trips through a flat
//!   query-string map
//!
//! ## Quick Start
//!
//! ```rust
//! use costwise_core::catalog::ReferenceData;
//! use costwise_core::estimates::estimate;
//! use costwise_core::params::Parameters;
//! use costwise_core::state;
//!
//! let reference = ReferenceData::default();
//! let params = Parameters::default()
//!     .with_role_rate("seniorDev", 100.0)
//!     .with_role_hours("seniorDev", 20.0);
//!
//! let breakdown = estimate(&params, &reference);
//! assert_eq!(breakdown.development.total_cost, 20000.0);
//!
//! // Shareable state
//! let query = state::encode_query(&params, &reference);
//! let restored = state::decode_query(&query);
//! assert_eq!(estimate(&restored, &reference), breakdown);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Static reference data (scopes, providers, pricing)
//! - [`params`] - The user-adjustable parameter set
//! - [`estimates`] - The pure estimation engine
//! - [`state`] - Query-string state codec for shareable links
//! - [`report`] - CSV report builder
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod errors;
pub mod estimates;
pub mod params;
pub mod report;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use catalog::{ReferenceData, Scope, ServiceCategory};
pub use errors::{EstimateError, EstimateResult};
pub use estimates::{estimate, Breakdown};
pub use params::Parameters;
