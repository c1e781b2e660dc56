use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_DENSITY;
use crate::density::normalize_density;
use crate::error::Result;
use crate::options::SimulationOptions;

/// Flat key/value payload sent to the generation endpoint.
///
/// Values are strings, exactly as a form would carry them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationRequest {
    pub fields: BTreeMap<String, String>,
}

impl SimulationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Successful body of the generation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub image_data: String,
}

impl SimulationResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Read the body straight from a stream; data URIs can run to many megabytes.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Editable fields of the simulation form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationForm {
    pub rule: String,
    pub cell_space: String,
    pub num_evolutions: String,
    pub init_method: String,
    pub print_method: String,
    pub density: String,
}

impl Default for SimulationForm {
    fn default() -> Self {
        Self {
            rule: String::new(),
            cell_space: "100".into(),
            num_evolutions: "100".into(),
            init_method: String::new(),
            print_method: String::new(),
            density: DEFAULT_DENSITY.into(),
        }
    }
}

impl SimulationForm {
    /// Form preselected from the option catalog.
    pub fn from_options(options: &SimulationOptions) -> Self {
        let first = |list: &[String]| list.first().cloned().unwrap_or_default();
        Self {
            rule: first(&options.rules),
            init_method: options.default_init_method().unwrap_or_default().to_string(),
            print_method: first(&options.print_methods),
            ..Self::default()
        }
    }

    /// Serialize every field. The density is normalized once more so an
    /// unvalidated edit can never reach the backend out of range.
    pub fn to_request(&self) -> SimulationRequest {
        let mut request = SimulationRequest::new();
        request.insert("rule", self.rule.clone());
        request.insert("cell_space", self.cell_space.trim());
        request.insert("num_evolutions", self.num_evolutions.trim());
        request.insert("init_method", self.init_method.clone());
        request.insert("print_method", self.print_method.clone());
        request.insert("density", normalize_density(&self.density));
        request
    }
}
