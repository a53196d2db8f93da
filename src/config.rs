//! Catalog configuration for saving and loading what the salon offers.
//!
//! The catalog only feeds the front ends (choice lists, toast lifetime).
//! The wizard itself accepts any non-empty value for every field.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

const DEFAULT_SERVICES: [&str; 5] = [
    "Signature Precision Cut",
    "Velvet Transformation",
    "Luxury Color Experience",
    "Executive Quick Service",
    "Bridal Experience",
];

const DEFAULT_STYLISTS: [&str; 4] = [
    "Alex Thompson - Master Stylist",
    "Jordan Blake - Color Specialist",
    "Morgan Reed - Creative Director",
    "Quinn Martins - Senior Stylist",
];

const DEFAULT_TIME_SLOTS: [&str; 8] = [
    "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM", "5:00 PM",
];

/// Services, stylists and time slots offered by the salon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub services: Vec<String>,
    /// Stylists in `"Name - Role"` form
    pub stylists: Vec<String>,
    pub time_slots: Vec<String>,
    /// How long a confirmation toast stays on screen
    pub toast_seconds: u64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            services: DEFAULT_SERVICES.iter().map(ToString::to_string).collect(),
            stylists: DEFAULT_STYLISTS.iter().map(ToString::to_string).collect(),
            time_slots: DEFAULT_TIME_SLOTS.iter().map(ToString::to_string).collect(),
            toast_seconds: 5,
        }
    }
}

impl BookingConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise use the built-in catalog.
    /// Either way the result is validated.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        check_list("services", &self.services)?;
        check_list("stylists", &self.stylists)?;
        check_list("time_slots", &self.time_slots)?;

        if self.toast_seconds == 0 {
            anyhow::bail!("toast_seconds must be at least 1");
        }

        Ok(())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }
}

fn check_list(name: &str, entries: &[String]) -> Result<()> {
    if entries.is_empty() {
        anyhow::bail!("{name} must list at least one entry");
    }

    let mut seen = HashSet::new();
    for entry in entries {
        if entry.trim().is_empty() {
            anyhow::bail!("{name} cannot contain blank entries");
        }
        if !seen.insert(entry.as_str()) {
            anyhow::bail!("{name} lists {entry:?} more than once");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let config = BookingConfig::default();
        assert_eq!(config.services.len(), 5);
        assert_eq!(config.stylists.len(), 4);
        assert_eq!(config.time_slots.first().map(String::as_str), Some("10:00 AM"));
        assert_eq!(config.time_slots.last().map(String::as_str), Some("5:00 PM"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_list() {
        let config = BookingConfig {
            stylists: Vec::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("stylists"));
    }

    #[test]
    fn test_validate_rejects_duplicates_and_blanks() {
        let mut config = BookingConfig::default();
        config.services.push("Bridal Experience".to_string());
        assert!(config.validate().is_err());

        let mut config = BookingConfig::default();
        config.time_slots.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_toast() {
        let config = BookingConfig {
            toast_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config: BookingConfig =
            serde_json::from_str(r#"{"services": ["Beard Trim"]}"#).unwrap();
        assert_eq!(config.services, vec!["Beard Trim".to_string()]);
        assert_eq!(config.stylists, BookingConfig::default().stylists);
        assert_eq!(config.toast_seconds, 5);
    }
}
