use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::RANDOM_INIT_METHOD;
use crate::error::{CellviewError, Result};

/// Selectable values offered by the backend for the simulation form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOptions {
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub init_methods: Vec<String>,
    #[serde(default)]
    pub print_methods: Vec<String>,
}

impl SimulationOptions {
    /// The catalog the reference backend ships with.
    pub fn builtin() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            rules: owned(&["18", "22", "30", "54", "60", "90", "110"]),
            init_methods: owned(&["single_cell", RANDOM_INIT_METHOD]),
            print_methods: owned(&["png"]),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CellviewError::MissingOptions);
        }
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&content)?;
        tracing::info!(
            rules = options.rules.len(),
            init_methods = options.init_methods.len(),
            print_methods = options.print_methods.len(),
            "loaded simulation options from {}",
            path.display()
        );
        Ok(options)
    }

    /// Load the catalog, or log the failure and fall back to an empty one so
    /// the form still shows (with empty dropdowns).
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::error!("no simulation options supplied; dropdowns stay empty");
            return Self::default();
        };
        match Self::load(path) {
            Ok(options) => options,
            Err(e) => {
                tracing::error!("cannot load simulation options from {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.init_methods.is_empty() && self.print_methods.is_empty()
    }

    /// `random` when offered, otherwise the first listed method.
    pub fn default_init_method(&self) -> Option<&str> {
        self.init_methods
            .iter()
            .find(|m| m.as_str() == RANDOM_INIT_METHOD)
            .or_else(|| self.init_methods.first())
            .map(String::as_str)
    }
}

/// Whether the density input applies to the given init method.
pub fn density_visible(init_method: &str) -> bool {
    init_method == RANDOM_INIT_METHOD
}
