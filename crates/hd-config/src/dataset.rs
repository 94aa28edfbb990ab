//! Secondary dataset location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// JSON file replacing the bundled happiness table. Empty uses the bundled one.
    #[serde(default)]
    pub happiness_path: String,
}

impl DatasetConfig {
    /// Override path, if one is configured.
    #[must_use]
    pub fn override_path(&self) -> Option<PathBuf> {
        if self.happiness_path.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(self.happiness_path.trim()))
        }
    }
}
