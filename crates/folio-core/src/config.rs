//! Page configuration.
//!
//! The host document may embed a JSON object in
//! `<script id="folio-config" type="application/json">`; every field is
//! optional and falls back to the built-in value.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::FolioError;

/// Id of the element holding the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Tunable page parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Number of static starfield dots
    pub star_count: usize,
    /// Raw pointer samples kept for the cursor trail
    pub trail_capacity: usize,
    /// Fixed-header allowance subtracted from planet scroll targets
    pub header_offset_px: f64,
    /// Planet cluster hides once scroll exceeds this share of the viewport height
    pub cluster_hide_ratio: f64,
    /// Visible share of an element required before it is revealed
    pub reveal_threshold: f64,
    /// Reveal triggers this many pixels before the element fully enters
    pub reveal_bottom_margin_px: f64,
    /// Minimum tracing level, e.g. "info" or "debug"
    pub log_level: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            star_count: 65,
            trail_capacity: 30,
            header_offset_px: 80.0,
            cluster_hide_ratio: 0.5,
            reveal_threshold: 0.1,
            reveal_bottom_margin_px: 100.0,
            log_level: "info".to_string(),
        }
    }
}

impl FolioConfig {
    /// Parse and validate a JSON configuration object
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let config: FolioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break a behavior
    pub fn validate(&self) -> Result<(), FolioError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FolioError::InvalidConfig(format!(
                "reveal_threshold must be within 0..=1, got {}",
                self.reveal_threshold
            )));
        }
        if self.trail_capacity < 2 {
            return Err(FolioError::InvalidConfig(format!(
                "trail_capacity must be at least 2, got {}",
                self.trail_capacity
            )));
        }
        if self.cluster_hide_ratio < 0.0 {
            return Err(FolioError::InvalidConfig(
                "cluster_hide_ratio must not be negative".to_string(),
            ));
        }
        if self.header_offset_px < 0.0 || self.reveal_bottom_margin_px < 0.0 {
            return Err(FolioError::InvalidConfig(
                "pixel offsets must not be negative".to_string(),
            ));
        }
        Level::from_str(&self.log_level).map_err(|_| {
            FolioError::InvalidConfig(format!("unknown log level: {}", self.log_level))
        })?;
        Ok(())
    }

    /// Tracing level for the page logger (validated in [`Self::validate`])
    pub fn log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let config = FolioConfig::default();
        assert_eq!(config.star_count, 65);
        assert_eq!(config.trail_capacity, 30);
        assert_eq!(config.header_offset_px, 80.0);
        assert_eq!(config.cluster_hide_ratio, 0.5);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.reveal_bottom_margin_px, 100.0);
        assert_eq!(config.log_level(), Level::INFO);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = FolioConfig::from_json(r#"{ "star_count": 12, "log_level": "debug" }"#)
            .unwrap();
        assert_eq!(config.star_count, 12);
        assert_eq!(config.trail_capacity, 30);
        assert_eq!(config.log_level(), Level::DEBUG);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(FolioConfig::from_json("{}").unwrap(), FolioConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = FolioConfig::from_json("{ star_count: ").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn out_of_range_values_rejected() {
        let err = FolioConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));

        let err = FolioConfig::from_json(r#"{ "trail_capacity": 1 }"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));

        let err = FolioConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
    }
}
