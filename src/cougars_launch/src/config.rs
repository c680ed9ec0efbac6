//! Plan configuration and launch argument overrides

use crate::error::{LaunchError, Result};
use std::collections::HashMap;

pub const DEFAULT_CONFIG_FILE: &str = "~/config/sim_config.yaml";
pub const DEFAULT_CONTROL_PACKAGE: &str = "cougars_control";
pub const DEFAULT_COMPANION_PACKAGE: &str = "cougars_localization";

/// Inputs to the launch plan builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    /// Parameter file handed to every node. Passed through verbatim.
    pub config_file: String,
    /// Package that ships the node executables
    pub control_package: String,
    /// Package whose installation is checked before planning
    pub companion_package: String,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            control_package: DEFAULT_CONTROL_PACKAGE.to_string(),
            companion_package: DEFAULT_COMPANION_PACKAGE.to_string(),
        }
    }
}

impl PlanConfig {
    pub fn with_config_file(mut self, config_file: impl Into<String>) -> Self {
        self.config_file = config_file.into();
        self
    }

    /// Apply `key:=value` launch arguments on top of the current values.
    pub fn apply_launch_args(&mut self, args: &HashMap<String, String>) -> Result<()> {
        for (name, value) in args {
            let slot = match name.as_str() {
                "config_file" => &mut self.config_file,
                "control_package" => &mut self.control_package,
                "companion_package" => &mut self.companion_package,
                other => {
                    log::warn!("Ignoring unknown launch argument: {}", other);
                    continue;
                }
            };

            if value.trim().is_empty() {
                return Err(LaunchError::InvalidLaunchArgument {
                    name: name.clone(),
                    reason: "value must not be empty".to_string(),
                });
            }

            log::debug!("Launch argument {} := {}", name, value);
            *slot = value.clone();
        }
        Ok(())
    }

    /// Every field ends up in a launch request and must be non-empty.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("config_file", &self.config_file),
            ("control_package", &self.control_package),
            ("companion_package", &self.companion_package),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(LaunchError::InvalidLaunchArgument {
                    name: name.to_string(),
                    reason: "value must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// The three node roles started by the plan, in start order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Kinematics,
    Controls,
    Mission,
}

impl NodeRole {
    pub const ALL: [NodeRole; 3] = [NodeRole::Kinematics, NodeRole::Controls, NodeRole::Mission];

    pub fn executable(self) -> &'static str {
        match self {
            NodeRole::Kinematics => "coug_kinematics",
            NodeRole::Controls => "coug_controls",
            NodeRole::Mission => "manual_mission",
        }
    }
}

/// Parse a `key:=value` launch argument.
pub fn parse_launch_arg(s: &str) -> std::result::Result<(String, String), String> {
    let parts: Vec<&str> = s.split(":=").collect();
    if parts.len() != 2 || parts[0].is_empty() {
        return Err(format!("Invalid launch argument format: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}
