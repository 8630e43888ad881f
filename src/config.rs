//! Optional configuration loaded from `alangrapher.toml`.
//!
//! Every key has a default, and the defaults reproduce the classic output
//! exactly, so most users never need a config file.
//!
//! ```toml
//! [compiler]
//! program = "alan"
//! dump_args = ["-dump", "ci"]
//!
//! [graph]
//! name = "finite_state_machine"
//! rankdir = "LR"
//! node_shape = "octagon"
//! node_style = "filled"
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::GrapherError;

pub const DEFAULT_CONFIG_FILE: &str = "alangrapher.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrapherConfig {
    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub graph: GraphConfig,
}

/// How the external compiler is invoked to obtain a dump.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    pub program: String,
    pub dump_args: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            program: "alan".to_string(),
            dump_args: vec!["-dump".to_string(), "ci".to_string()],
        }
    }
}

/// Attributes written into the graph header.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    pub name: String,
    pub rankdir: String,
    pub node_shape: String,
    pub node_style: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            name: "finite_state_machine".to_string(),
            rankdir: "LR".to_string(),
            node_shape: "octagon".to_string(),
            node_style: "filled".to_string(),
        }
    }
}

impl GrapherConfig {
    pub fn from_toml(text: &str, origin: &str) -> Result<Self, GrapherError> {
        toml::from_str(text).map_err(|e| GrapherError::Config(origin.to_string(), e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, GrapherError> {
        let origin = path.display().to_string();
        debug!("Loading configuration from {}", origin);
        let text = fs::read_to_string(path)
            .map_err(|e| GrapherError::Config(origin.clone(), e.to_string()))?;
        Self::from_toml(&text, &origin)
    }

    /// Load `path` if given, else `alangrapher.toml` in the working
    /// directory if it exists, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, GrapherError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
