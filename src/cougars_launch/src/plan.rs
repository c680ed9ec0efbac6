//! Launch plan construction

use crate::{
    config::{NodeRole, PlanConfig},
    error::Result,
    package::PackageResolver,
};
use serde::{Deserialize, Serialize};

/// Request to the host supervisor to start one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
    pub package: String,
    pub executable: String,
    pub parameters: Vec<String>,
}

/// Ordered launch requests. Order is a start-order hint only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPlan {
    pub requests: Vec<LaunchRequest>,
}

impl LaunchPlan {
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchRequest> {
        self.requests.iter()
    }
}

impl<'a> IntoIterator for &'a LaunchPlan {
    type Item = &'a LaunchRequest;
    type IntoIter = std::slice::Iter<'a, LaunchRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.iter()
    }
}

/// Build the plan with the default configuration.
pub fn build_launch_plan<R: PackageResolver + ?Sized>(resolver: &R) -> Result<LaunchPlan> {
    build_launch_plan_with(resolver, &PlanConfig::default())
}

/// Build the plan for `config`.
///
/// Fails with [`LaunchError::InvalidLaunchArgument`](crate::error::LaunchError::InvalidLaunchArgument)
/// if a field of `config` is empty, and with
/// [`LaunchError::PackageNotFound`](crate::error::LaunchError::PackageNotFound)
/// if the companion package is not installed. Nothing is returned in either case.
pub fn build_launch_plan_with<R: PackageResolver + ?Sized>(
    resolver: &R,
    config: &PlanConfig,
) -> Result<LaunchPlan> {
    config.validate()?;

    let share_dir = resolver.share_directory(&config.companion_package)?;
    log::debug!(
        "Companion package {} launch directory: {}",
        config.companion_package,
        share_dir.join("launch").display()
    );

    let requests = NodeRole::ALL
        .iter()
        .map(|role| LaunchRequest {
            package: config.control_package.clone(),
            executable: role.executable().to_string(),
            parameters: vec![config.config_file.clone()],
        })
        .collect::<Vec<_>>();

    log::info!(
        "Planned {} nodes from package {}",
        requests.len(),
        config.control_package
    );

    Ok(LaunchPlan { requests })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::LaunchError, package::StaticIndex};

    fn resolver() -> StaticIndex {
        StaticIndex::new()
            .with_share_directory("cougars_localization", "/opt/pkgs/loc/share/loc_pkg")
    }

    #[test]
    fn test_plan_has_three_requests() {
        let plan = build_launch_plan(&resolver()).unwrap();
        assert_eq!(plan.len(), 3);
        assert!(plan
            .iter()
            .all(|r| r.package == "cougars_control"
                && r.parameters == vec!["~/config/sim_config.yaml".to_string()]));
    }

    #[test]
    fn test_plan_order() {
        let plan = build_launch_plan(&resolver()).unwrap();
        let exes: Vec<_> = plan.iter().map(|r| r.executable.as_str()).collect();
        assert_eq!(exes, vec!["coug_kinematics", "coug_controls", "manual_mission"]);
    }

    #[test]
    fn test_missing_companion_package() {
        let err = build_launch_plan(&StaticIndex::new()).unwrap_err();
        assert!(matches!(err, LaunchError::PackageNotFound(ref p) if p == "cougars_localization"));
    }

    #[test]
    fn test_injected_config_file() {
        let config = PlanConfig::default().with_config_file("/etc/coug/field.yaml");
        let plan = build_launch_plan_with(&resolver(), &config).unwrap();
        for request in &plan {
            assert_eq!(request.parameters, vec!["/etc/coug/field.yaml".to_string()]);
        }
    }

    #[test]
    fn test_empty_control_package_rejected() {
        let mut config = PlanConfig::default();
        config.control_package = String::new();
        let err = build_launch_plan_with(&resolver(), &config).unwrap_err();
        assert!(matches!(err, LaunchError::InvalidLaunchArgument { ref name, .. } if name == "control_package"));
    }

    #[test]
    fn test_empty_config_file_rejected() {
        let config = PlanConfig::default().with_config_file("");
        let err = build_launch_plan_with(&resolver(), &config).unwrap_err();
        assert!(matches!(err, LaunchError::InvalidLaunchArgument { ref name, .. } if name == "config_file"));
    }

    #[test]
    fn test_control_package_is_not_resolved() {
        // Only the companion package has to be installed to plan.
        let plan = build_launch_plan(&resolver()).unwrap();
        assert_eq!(plan.requests[0].package, "cougars_control");
    }
}
