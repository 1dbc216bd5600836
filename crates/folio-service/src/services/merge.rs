//! Partial-update merge policy
//!
//! A profile submission may carry any subset of fields, and the override
//! trigger deliberately differs by field shape:
//!
//! - scalars and flags: key present overrides, so an explicit `""` clears;
//! - collections (`skills`, `social_links`, `projects`): key present AND
//!   non-empty overrides, so an accidental `[]` from a client that did not
//!   resend the field cannot wipe saved data.
//!
//! Every profile field goes through exactly one of these functions; the
//! asymmetry is a contract, not an accident.

use std::collections::BTreeMap;

/// Scalar rule: key present overrides, explicit empty clears
pub fn scalar(existing: &str, submitted: Option<&String>) -> String {
    match submitted {
        Some(value) => value.clone(),
        None => existing.to_string(),
    }
}

/// Optional-scalar rule: key present overrides; an explicit empty string
/// clears to absent
pub fn optional_scalar(existing: Option<&String>, submitted: Option<&String>) -> Option<String> {
    match submitted {
        Some(value) if value.is_empty() => None,
        Some(value) => Some(value.clone()),
        None => existing.cloned(),
    }
}

/// Flag rule: key present overrides
pub fn flag(existing: bool, submitted: Option<bool>) -> bool {
    submitted.unwrap_or(existing)
}

/// Collection rule for lists: key present AND non-empty overrides
pub fn list<T: Clone>(existing: &[T], submitted: Option<&Vec<T>>) -> Vec<T> {
    match submitted {
        Some(values) if !values.is_empty() => values.clone(),
        _ => existing.to_vec(),
    }
}

/// Collection rule for maps: key present AND non-empty overrides
pub fn map(
    existing: &BTreeMap<String, String>,
    submitted: Option<&BTreeMap<String, String>>,
) -> BTreeMap<String, String> {
    match submitted {
        Some(values) if !values.is_empty() => values.clone(),
        _ => existing.clone(),
    }
}
