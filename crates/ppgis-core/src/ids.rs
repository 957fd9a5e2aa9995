//! ID prefixes and generation.
//!
//! Observation IDs are `obs-` followed by eight lowercase hex digits drawn
//! from the OS random source, e.g. `obs-a3f8b2c1`.

use crate::errors::CoreError;

pub const PREFIX_OBSERVATION: &str = "obs";
pub const PREFIX_POI: &str = "poi";

/// Generate a prefixed random ID, e.g. `"obs-a3f8b2c1"`.
///
/// # Errors
///
/// Returns [`CoreError::Random`] if the OS random source fails.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|error| CoreError::Random(error.to_string()))?;
    let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{suffix}"))
}

/// Check an ID has the given prefix and an eight-digit hex suffix.
#[must_use]
pub fn is_valid_id(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|suffix| {
            suffix.len() == 8 && suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generate_id_correct_format() {
        let id = generate_id(PREFIX_OBSERVATION).unwrap();
        assert!(id.starts_with("obs-"), "got {id}");
        assert_eq!(id.len(), 12);
        assert!(is_valid_id(&id, PREFIX_OBSERVATION));
    }

    #[test]
    fn generate_id_uniqueness() {
        let ids: HashSet<String> = (0..200)
            .map(|_| generate_id(PREFIX_OBSERVATION).unwrap())
            .collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn validation_rejects_malformed_ids() {
        assert!(!is_valid_id("obs-xyz", PREFIX_OBSERVATION));
        assert!(!is_valid_id("poi-a3f8b2c1", PREFIX_OBSERVATION));
        assert!(!is_valid_id("obs-A3F8B2C1", PREFIX_OBSERVATION));
        assert!(!is_valid_id("obsa3f8b2c1", PREFIX_OBSERVATION));
    }
}
