use crate::error::{BackupError, Result};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

/// Timestamp segment embedded in every artifact name. It is the only
/// record of creation time; trim parses it back out of the filename.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

const COMPRESSED_SUFFIX: &str = ".gz";

fn label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[a-zA-Z0-9_-]*$").unwrap())
}

pub fn validate_label(label: &str) -> Result<()> {
    if label_pattern().is_match(label) {
        Ok(())
    } else {
        Err(BackupError::Config(format!(
            "invalid label '{}', allowed characters are a-z, A-Z, 0-9, '_' and '-'",
            label
        )))
    }
}

/// Builds `[label_]<database>_<timestamp>`. The raw label is validated
/// first, then lowercased with spaces turned into hyphens.
pub fn build_base_filename(
    label: Option<&str>,
    database: &str,
    timestamp: &NaiveDateTime,
) -> Result<String> {
    let stamp = timestamp.format(TIMESTAMP_FORMAT);
    match label {
        Some(label) if !label.is_empty() => {
            validate_label(label)?;
            let label = label.replace(' ', "-").to_lowercase();
            Ok(format!("{}_{}_{}", label, database, stamp))
        }
        _ => Ok(format!("{}_{}", database, stamp)),
    }
}

/// Extracts the timestamp tail from a listed artifact name. A trailing
/// `.gz` is stripped before the final `_`-delimited segment is parsed;
/// names without a parseable tail yield `None` and are left alone by trim.
pub fn parse_artifact_timestamp(name: &str) -> Option<NaiveDateTime> {
    let stem = name.strip_suffix(COMPRESSED_SUFFIX).unwrap_or(name);
    let tail = stem.rsplit('_').next()?;
    NaiveDateTime::parse_from_str(tail, TIMESTAMP_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap()
    }

    #[test]
    fn test_filename_without_label() {
        let name = build_base_filename(None, "orders", &stamp()).unwrap();
        assert_eq!(name, "orders_20240601123045");
    }

    #[test]
    fn test_filename_with_label_is_normalized() {
        let name = build_base_filename(Some("Weekly-Full"), "orders", &stamp()).unwrap();
        assert_eq!(name, "weekly-full_orders_20240601123045");
    }

    #[test]
    fn test_empty_label_behaves_like_no_label() {
        let name = build_base_filename(Some(""), "orders", &stamp()).unwrap();
        assert_eq!(name, "orders_20240601123045");
    }

    #[test]
    fn test_invalid_labels_never_reach_filename_construction() {
        for label in ["has space", "semi;colon", "dot.dot", "slash/", "ünïcode"] {
            let result = build_base_filename(Some(label), "orders", &stamp());
            match result {
                Err(BackupError::Config(_)) => {}
                other => panic!("expected Config error for label '{}', got {:?}", label, other),
            }
        }
    }

    #[test]
    fn test_parse_timestamp_from_artifact_name() {
        let ts = parse_artifact_timestamp("orders_20240601123045").unwrap();
        assert_eq!(ts, stamp());
    }

    #[test]
    fn test_parse_timestamp_strips_compressed_suffix() {
        let ts = parse_artifact_timestamp("orders_20240601123045.gz").unwrap();
        assert_eq!(ts, stamp());
    }

    #[test]
    fn test_parse_timestamp_with_label_prefix() {
        let ts = parse_artifact_timestamp("weekly_orders_20240601123045.gz").unwrap();
        assert_eq!(ts, stamp());
    }

    #[test]
    fn test_unparseable_names_yield_none() {
        assert!(parse_artifact_timestamp("orders").is_none());
        assert!(parse_artifact_timestamp("orders_backup").is_none());
        assert!(parse_artifact_timestamp("orders_2024").is_none());
        assert!(parse_artifact_timestamp("orders_20241301000000").is_none());
        assert!(parse_artifact_timestamp("").is_none());
    }
}
