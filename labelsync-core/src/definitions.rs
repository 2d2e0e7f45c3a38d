//! Label definitions file
//!
//! The definitions file is a YAML document with two top level lists:
//!
//! ```yaml
//! types:
//!   - name: bug
//!     hex_color: d73a4a
//! labels:
//!   - name: crash
//!     type: bug
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A label category and the color every label in it gets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    pub hex_color: String,
}

/// A base label assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDef {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
}

/// Contents of the definitions file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definitions {
    pub types: Vec<TypeDef>,
    pub labels: Vec<LabelDef>,
}

impl Definitions {
    /// Parse definitions from a YAML string
    pub fn from_yaml(content: &str) -> crate::Result<Self> {
        serde_yaml::from_str(content).map_err(crate::LabelSyncError::from)
    }

    /// Read and parse a definitions file
    pub async fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let definitions = Self::from_yaml(&content)?;

        debug!(
            "Loaded {} type(s) and {} label(s) from {}",
            definitions.types.len(),
            definitions.labels.len(),
            path.display()
        );

        Ok(definitions)
    }
}
