// SPDX-License-Identifier: PMPL-1.0-or-later

//! Sweep plan: the configuration list and the external command contract.

use crate::types::{ConfigEntry, Invocation};
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_PROGRAM: &str = "python";
pub const DEFAULT_SCRIPT: &str = "bpda_eot_attack.py";
pub const DEFAULT_CONFIG_FLAG: &str = "--config_file";
pub const DEFAULT_CONFIG_DIR: &str = "./config_attack/";

/// Built-in attack configurations, in execution order.
pub const DEFAULT_ENTRIES: [&str; 5] = [
    "standard_PGD_attack_n50.json",
    "standard_PGD_attack_n75.json",
    "standard_PGD_attack_n100.json",
    "standard_PGD_attack_n150.json",
    "standard_PGD_attack_n200.json",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepPlan {
    pub program: String,
    /// Arguments placed before the config flag, usually the attack script.
    pub args: Vec<String>,
    pub config_flag: String,
    /// Prefix joined to each entry by plain concatenation.
    pub config_dir: String,
    pub entries: Vec<ConfigEntry>,
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: vec![DEFAULT_SCRIPT.to_string()],
            config_flag: DEFAULT_CONFIG_FLAG.to_string(),
            config_dir: DEFAULT_CONFIG_DIR.to_string(),
            entries: DEFAULT_ENTRIES.iter().copied().map(ConfigEntry::from).collect(),
        }
    }
}

impl SweepPlan {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading sweep plan {}", path.display()))?;
        let plan: SweepPlan = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json sweep plan {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml sweep plan {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported sweep plan extension for {}",
                    path.display()
                ))
            }
        };
        plan.validate()
            .with_context(|| format!("invalid sweep plan {}", path.display()))?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            bail!("program must not be empty");
        }
        if self.entries.is_empty() {
            bail!("plan has no configuration entries");
        }
        Ok(())
    }

    /// `<config_dir><file_name>`, with no separator inserted.
    pub fn config_path(&self, entry: &ConfigEntry) -> String {
        format!("{}{}", self.config_dir, entry.file_name())
    }

    pub fn invocation_for(&self, entry: &ConfigEntry) -> Invocation {
        let mut args = self.args.clone();
        args.push(self.config_flag.clone());
        args.push(self.config_path(entry));
        Invocation {
            program: self.program.clone(),
            args,
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.entries
            .iter()
            .map(|entry| self.invocation_for(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_has_five_entries_in_order() {
        let plan = SweepPlan::default();
        let labels: Vec<String> = plan.entries.iter().map(|e| e.step_label()).collect();
        assert_eq!(labels, vec!["n50", "n75", "100", "150", "200"]);
    }

    #[test]
    fn invocation_matches_attack_tool_contract() {
        let plan = SweepPlan::default();
        let invocation = plan.invocation_for(&ConfigEntry::new("standard_PGD_attack_n50.json"));
        assert_eq!(invocation.program, "python");
        assert_eq!(
            invocation.args,
            vec![
                "bpda_eot_attack.py",
                "--config_file",
                "./config_attack/standard_PGD_attack_n50.json"
            ]
        );
    }

    #[test]
    fn config_path_is_plain_concatenation() {
        let plan = SweepPlan {
            config_dir: "configs".to_string(),
            ..SweepPlan::default()
        };
        assert_eq!(plan.config_path(&ConfigEntry::new("a.json")), "configsa.json");
    }

    #[test]
    fn validate_rejects_empty_entries() {
        let plan = SweepPlan {
            entries: Vec::new(),
            ..SweepPlan::default()
        };
        assert!(plan.validate().is_err());
    }
}
