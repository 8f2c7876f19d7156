//! # Configuration
//!
//! Salon configuration is managed by [`confique`], which handles layered
//! loading from TOML files, environment variables, and programmatic
//! overrides by the embedding process.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `opens_at` | `9` | Hour the salon opens (first bookable slot) |
//! | `closes_at` | `19` | Hour the salon closes (end of last slot) |
//! | `services` | built-in list | Selectable services |
//! | `stylists` | built-in list | Stylists on the roster |
//!
//! The per-service eligible-stylist table is compiled in; a service not in
//! the table has no eligible stylists.

use std::collections::BTreeMap;

use confique::Config;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const DEFAULT_STYLISTS: &[&str] = &["Ashley", "Jo", "Pat", "Sam"];

const DEFAULT_SERVICES: &[&str] = &[
    "Cut",
    "Blow-dry",
    "Cut & color",
    "Beard trim",
    "Cut & beard trim",
    "Extensions",
];

/// Which stylists may perform which service.
static SERVICE_STYLISTS: Lazy<BTreeMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    BTreeMap::from([
        ("Cut", vec!["Ashley", "Jo", "Pat", "Sam"]),
        ("Blow-dry", vec!["Ashley", "Jo"]),
        ("Cut & color", vec!["Ashley", "Jo"]),
        ("Beard trim", vec!["Pat", "Sam"]),
        ("Cut & beard trim", vec!["Pat", "Sam"]),
        ("Extensions", vec!["Ashley", "Pat"]),
    ])
});

/// Configuration for the booking core, stored in `salon.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SalonConfig {
    /// Hour of day the salon opens (0-23).
    #[config(default = 9)]
    pub opens_at: u32,

    /// Hour of day the salon closes (1-24). The last bookable slot starts
    /// half an hour before this.
    #[config(default = 19)]
    pub closes_at: u32,

    /// Selectable services. When absent, the built-in service list applies.
    pub services: Option<Vec<String>>,

    /// Stylists on the roster. When absent, the built-in roster applies.
    pub stylists: Option<Vec<String>>,
}

impl Default for SalonConfig {
    fn default() -> Self {
        Self {
            opens_at: 9,
            closes_at: 19,
            services: None,
            stylists: None,
        }
    }
}

impl SalonConfig {
    /// Selectable services, using the built-in list if not configured.
    pub fn services(&self) -> Vec<String> {
        self.services
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect())
    }

    /// The stylist roster, using the built-in list if not configured.
    pub fn stylists(&self) -> Vec<String> {
        self.stylists
            .clone()
            .unwrap_or_else(|| DEFAULT_STYLISTS.iter().map(|s| s.to_string()).collect())
    }

    /// Stylists eligible to perform `service`. Unknown services have no
    /// eligible stylists.
    pub fn stylists_for(&self, service: &str) -> Vec<String> {
        SERVICE_STYLISTS
            .get(service)
            .map(|stylists| stylists.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default()
    }
}
