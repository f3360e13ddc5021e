use std::{fs, path::Path};

use serde::Deserialize;

use crate::model::ledger::Ledger;

/// Starting stock for a machine.
///
/// ```json
/// { "stock": { "water": 1000, "milk": 500, "beans": 200, "cups": 20, "money": 0 } }
/// ```
///
/// Missing fields fall back to the factory values. The menu is not
/// configurable; every machine sells the standard three coffees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    pub stock: Ledger,
}

impl MachineConfig {
    pub fn from_json(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: MachineConfig = serde_json::from_str(contents)?;
        Ok(config)
    }

    pub fn load(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let path = Path::new(config_path);
        if !path.exists() {
            return Err(format!("Config file not found at {}", config_path).into());
        }

        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
