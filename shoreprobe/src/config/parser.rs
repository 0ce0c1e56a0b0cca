//! INI parsing logic for converting `Ini` → `ProbeConfig`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use std::str::FromStr;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ProbeConfig;

/// Parse an `Ini` object into a `ProbeConfig`.
///
/// Starts from `ProbeConfig::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ProbeConfig, ConfigFileError> {
    let mut config = ProbeConfig::default();

    // [oracle] section
    if let Some(section) = ini.section(Some("oracle")) {
        if let Some(v) = section.get("endpoint") {
            let v = v.trim();
            if !v.is_empty() {
                config.oracle.endpoint = v.to_string();
            }
        }
        if let Some(v) = section.get("access_token") {
            let v = v.trim();
            if !v.is_empty() {
                config.oracle.access_token = Some(v.to_string());
            }
        }
        if let Some(v) = section.get("timeout") {
            config.oracle.timeout_secs =
                parse_value(v, "oracle", "timeout", "must be a positive integer (seconds)")?;
            if config.oracle.timeout_secs == 0 {
                return Err(invalid(v, "oracle", "timeout", "must be at least 1 second"));
            }
        }
    }

    // [probe] section
    if let Some(section) = ini.section(Some("probe")) {
        if let Some(v) = section.get("default_distance") {
            config.default_shore_distance_m =
                parse_value(v, "probe", "default_distance", "must be a distance in meters")?;
        }
        if let Some(v) = section.get("scan_limit") {
            config.cache.scan_limit =
                parse_value(v, "probe", "scan_limit", "must be a positive integer")?;
            if config.cache.scan_limit == 0 {
                return Err(invalid(v, "probe", "scan_limit", "must be at least 1"));
            }
        }
        if let Some(v) = section.get("alignment_tolerance") {
            let degrees: f64 = parse_value(
                v,
                "probe",
                "alignment_tolerance",
                "must be an angle in degrees",
            )?;
            if !(0.0..=180.0).contains(&degrees) {
                return Err(invalid(
                    v,
                    "probe",
                    "alignment_tolerance",
                    "must be between 0 and 180 degrees",
                ));
            }
            config.cache.alignment_tolerance_deg = degrees;
        }
    }

    Ok(config)
}

fn parse_value<T: FromStr>(
    value: &str,
    section: &str,
    key: &str,
    reason: &str,
) -> Result<T, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(value, section, key, reason))
}

fn invalid(value: &str, section: &str, key: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ProbeConfig, ConfigFileError> {
        let ini = Ini::load_from_str(text).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_gives_defaults() {
        assert_eq!(parse("").unwrap(), ProbeConfig::default());
    }

    #[test]
    fn test_full_ini() {
        let config = parse(
            "[oracle]\n\
             endpoint = http://localhost:8080/results\n\
             access_token = secret\n\
             timeout = 5\n\
             [probe]\n\
             default_distance = 150\n\
             scan_limit = 25\n\
             alignment_tolerance = 15.5\n",
        )
        .unwrap();

        assert_eq!(config.oracle.endpoint, "http://localhost:8080/results");
        assert_eq!(config.oracle.access_token.as_deref(), Some("secret"));
        assert_eq!(config.oracle.timeout_secs, 5);
        assert_eq!(config.default_shore_distance_m, 150.0);
        assert_eq!(config.cache.scan_limit, 25);
        assert_eq!(config.cache.alignment_tolerance_deg, 15.5);
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = parse("[oracle]\naccess_token = \n").unwrap();
        assert_eq!(config.oracle.access_token, None);
    }

    #[test]
    fn test_invalid_timeout() {
        let err = parse("[oracle]\ntimeout = soon\n").unwrap_err();
        match err {
            ConfigFileError::InvalidValue { section, key, .. } => {
                assert_eq!(section, "oracle");
                assert_eq!(key, "timeout");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_scan_limit_rejected() {
        assert!(matches!(
            parse("[probe]\nscan_limit = 0\n"),
            Err(ConfigFileError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_tolerance_out_of_range_rejected() {
        assert!(parse("[probe]\nalignment_tolerance = 270\n").is_err());
    }
}
