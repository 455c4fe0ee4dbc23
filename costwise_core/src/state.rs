//! # State Codec
//!
//! Bidirectional mapping between [`Parameters`] and a flat string-keyed map
//! suitable for a URL query string, making calculator state shareable and
//! bookmarkable.
//!
//! Encoding always writes every key so a link captures the complete state.
//! Decoding starts from defaults and is resilient per key: a malformed
//! number or JSON value is logged and skipped without affecting the other
//! keys, and unrecognized keys are ignored. Derived figures (timeline
//! multiplier, infrastructure costs) are never decoded; the engine
//! recomputes them, so they cannot go stale.
//!
//! ## Example
//!
//! ```rust
//! use costwise_core::catalog::ReferenceData;
//! use costwise_core::params::Parameters;
//! use costwise_core::state;
//!
//! let reference = ReferenceData::default();
//! let params = Parameters::default().with_user_count(2500);
//!
//! let query = state::encode_query(&params, &reference);
//! let decoded = state::decode_query(&query);
//! assert_eq!(decoded.user_count, 2500);
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::catalog::{ReferenceData, Scope};
use crate::estimates::timeline;
use crate::params::{FreeTierEligibility, OtherService, Parameters, ProviderSelections, Role};

/// Recognized query-string keys, in encode order
pub const KEYS: [&str; 13] = [
    "scope",
    "users",
    "storage",
    "retainerHours",
    "roles",
    "freeTier",
    "timeline",
    "services",
    "providers",
    "resultsOnly",
    "showDevelopment",
    "showInfrastructure",
    "showRetainer",
];

/// Serialize the full parameter set to a flat string-keyed map.
///
/// Every key is always written, enabling a complete round trip. The
/// `timeline` entry carries the derived [`timeline::TimelineAdjustment`]
/// (readable in a shared link), though only its adjusted week count is a
/// source of truth on decode.
pub fn encode(params: &Parameters, reference: &ReferenceData) -> BTreeMap<String, String> {
    let params = params.sanitized();
    let tl = timeline::calculate(&params, reference);

    let mut map = BTreeMap::new();
    let mut put = |key: &str, value: String| {
        map.insert(key.to_string(), value);
    };

    put("scope", params.scope.key().to_string());
    put("users", params.user_count.to_string());
    put("storage", params.gb_storage.to_string());
    put("retainerHours", params.retainer_hours.to_string());
    put("roles", to_json(&params.roles));
    put("freeTier", to_json(&params.free_tier));
    put("timeline", to_json(&tl));
    put("services", to_json(&params.other_services));
    put("providers", to_json(&params.providers));
    put("resultsOnly", params.visibility.results_only.to_string());
    put("showDevelopment", params.visibility.show_development.to_string());
    put("showInfrastructure", params.visibility.show_infrastructure.to_string());
    put("showRetainer", params.visibility.show_retainer.to_string());
    map
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    // Only infallible shapes (structs/vecs of plain fields) pass through here
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Lenient mirror of the encoded timeline entry: only the adjusted week
/// count is read back; derived fields are recomputed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineState {
    adjusted_weeks: u32,
}

/// Rebuild a parameter set from a flat string-keyed map.
///
/// Missing keys keep their defaults; an empty map yields
/// `Parameters::default()`. Failures are isolated per key.
pub fn decode(map: &BTreeMap<String, String>) -> Parameters {
    let mut params = Parameters::default();

    for (key, value) in map {
        match key.as_str() {
            "scope" => match Scope::from_str_flexible(value) {
                Ok(scope) => params.scope = scope,
                Err(_) => {
                    warn!(%key, %value, "unrecognized scope in shared state, keeping default")
                }
            },
            "users" => decode_number(key, value, &mut params.user_count),
            "storage" => decode_number(key, value, &mut params.gb_storage),
            "retainerHours" => decode_number(key, value, &mut params.retainer_hours),
            "roles" => decode_json::<Vec<Role>>(key, value, &mut params.roles),
            "freeTier" => decode_json::<FreeTierEligibility>(key, value, &mut params.free_tier),
            "timeline" => {
                let mut state: Option<TimelineState> = None;
                decode_json(key, value, &mut state);
                if let Some(state) = state {
                    params.adjusted_weeks = Some(state.adjusted_weeks);
                }
            }
            "services" => decode_json::<Vec<OtherService>>(key, value, &mut params.other_services),
            "providers" => decode_json::<ProviderSelections>(key, value, &mut params.providers),
            "resultsOnly" => decode_bool(key, value, &mut params.visibility.results_only),
            "showDevelopment" => decode_bool(key, value, &mut params.visibility.show_development),
            "showInfrastructure" => {
                decode_bool(key, value, &mut params.visibility.show_infrastructure)
            }
            "showRetainer" => decode_bool(key, value, &mut params.visibility.show_retainer),
            _ => debug!(%key, "ignoring unrecognized state key"),
        }
    }

    params.sanitized()
}

fn decode_number<T: std::str::FromStr>(key: &str, value: &str, target: &mut T) {
    match value.trim().parse::<T>() {
        Ok(parsed) => *target = parsed,
        Err(_) => warn!(key, value, "non-numeric value in shared state, keeping default"),
    }
}

fn decode_bool(key: &str, value: &str, target: &mut bool) {
    match value.trim() {
        "true" => *target = true,
        "false" => *target = false,
        _ => warn!(key, value, "non-boolean value in shared state, keeping default"),
    }
}

fn decode_json<T>(key: &str, value: &str, target: &mut T)
where
    T: for<'de> Deserialize<'de>,
{
    match serde_json::from_str::<T>(value) {
        Ok(parsed) => *target = parsed,
        Err(err) => warn!(key, %err, "malformed JSON in shared state, keeping default"),
    }
}

/// Encode directly to a query string (without the leading `?`).
pub fn encode_query(params: &Parameters, reference: &ReferenceData) -> String {
    let map = encode(params, reference);
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    // Emit in the canonical key order rather than alphabetical
    for key in KEYS {
        if let Some(value) = map.get(key) {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}

/// Decode from a query string, with or without a leading `?`.
pub fn decode_query(query: &str) -> Parameters {
    let query = query.trim_start_matches('?');
    let map: BTreeMap<String, String> = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    decode(&map)
}
