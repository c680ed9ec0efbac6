//! Command-line and record generation

use crate::{
    error::Result,
    package::PackageResolver,
    params::parse_params,
    plan::{LaunchPlan, LaunchRequest},
    record::types::{NodeRecord, RecordJson},
};
use std::{collections::HashMap, fs};

const ROOT_NAMESPACE: &str = "/";

#[derive(Debug, Clone, Copy, Default)]
pub struct RecordOptions {
    /// Read each parameter file, copy its values into `params` and its
    /// contents into `file_data`
    pub inline_params: bool,
}

pub struct CommandGenerator;

impl CommandGenerator {
    pub fn generate_record<R: PackageResolver + ?Sized>(
        plan: &LaunchPlan,
        resolver: &R,
        options: RecordOptions,
    ) -> Result<RecordJson> {
        let mut record = RecordJson::new();
        if options.inline_params {
            for request in plan {
                Self::read_param_files(request, &mut record.file_data);
            }
        }

        for request in plan {
            let node = Self::node_record(request, resolver, options, &record.file_data)?;
            record.node.push(node);
        }
        Ok(record)
    }

    pub fn generate_node_record<R: PackageResolver + ?Sized>(
        request: &LaunchRequest,
        resolver: &R,
        options: RecordOptions,
    ) -> Result<NodeRecord> {
        let mut file_data = HashMap::new();
        if options.inline_params {
            Self::read_param_files(request, &mut file_data);
        }
        Self::node_record(request, resolver, options, &file_data)
    }

    /// Read every parameter file of `request` not yet in `file_data`.
    /// Unreadable files are logged and skipped.
    fn read_param_files(request: &LaunchRequest, file_data: &mut HashMap<String, String>) {
        for param_file in &request.parameters {
            if file_data.contains_key(param_file) {
                continue;
            }
            match fs::read_to_string(param_file) {
                Ok(content) => {
                    file_data.insert(param_file.clone(), content);
                }
                Err(e) => {
                    log::warn!("Failed to load parameter file {}: {}", param_file, e);
                }
            }
        }
    }

    fn node_record<R: PackageResolver + ?Sized>(
        request: &LaunchRequest,
        resolver: &R,
        options: RecordOptions,
        file_data: &HashMap<String, String>,
    ) -> Result<NodeRecord> {
        let cmd = Self::generate_node_command(request, resolver)?;

        let mut params = Vec::new();
        if options.inline_params {
            for param_file in &request.parameters {
                let Some(content) = file_data.get(param_file) else {
                    continue;
                };
                match parse_params(content) {
                    Ok(file_params) => params.extend(file_params),
                    Err(e) => {
                        log::warn!("Failed to parse parameter file {}: {}", param_file, e);
                    }
                }
            }
        }

        Ok(NodeRecord {
            executable: request.executable.clone(),
            package: Some(request.package.clone()),
            name: Some(request.executable.clone()),
            namespace: Some(ROOT_NAMESPACE.to_string()),
            exec_name: None,
            params,
            params_files: request.parameters.clone(),
            remaps: Vec::new(),
            ros_args: None,
            args: None,
            cmd,
            env: None,
            respawn: Some(false),
            respawn_delay: None,
            global_params: None,
        })
    }

    pub fn generate_node_command<R: PackageResolver + ?Sized>(
        request: &LaunchRequest,
        resolver: &R,
    ) -> Result<Vec<String>> {
        let exec_path = resolver.executable_path(&request.package, &request.executable)?;

        let mut cmd = vec![
            exec_path.display().to_string(),
            "--ros-args".to_string(),
            "-r".to_string(),
            format!("__node:={}", request.executable),
            "-r".to_string(),
            format!("__ns:={}", ROOT_NAMESPACE),
        ];

        for param_file in &request.parameters {
            cmd.push("--params-file".to_string());
            cmd.push(param_file.clone());
        }

        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::LaunchError, package::StaticIndex};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn request(parameters: Vec<String>) -> LaunchRequest {
        LaunchRequest {
            package: "cougars_control".to_string(),
            executable: "coug_kinematics".to_string(),
            parameters,
        }
    }

    fn resolver() -> StaticIndex {
        StaticIndex::new().with_package("cougars_control", "/opt/ros/humble")
    }

    #[test]
    fn test_generate_command() {
        let req = request(vec!["~/config/sim_config.yaml".to_string()]);
        let cmd = CommandGenerator::generate_node_command(&req, &resolver()).unwrap();

        assert_eq!(
            cmd,
            vec![
                "/opt/ros/humble/lib/cougars_control/coug_kinematics",
                "--ros-args",
                "-r",
                "__node:=coug_kinematics",
                "-r",
                "__ns:=/",
                "--params-file",
                "~/config/sim_config.yaml",
            ]
        );
    }

    #[test]
    fn test_missing_control_package() {
        let req = request(vec![]);
        let err = CommandGenerator::generate_node_command(&req, &StaticIndex::new()).unwrap_err();
        assert!(matches!(err, LaunchError::PackageNotFound(ref p) if p == "cougars_control"));
    }

    #[test]
    fn test_record_keeps_literal_params_file() {
        let req = request(vec!["~/config/sim_config.yaml".to_string()]);
        let options = RecordOptions {
            inline_params: true,
        };
        let record = CommandGenerator::generate_node_record(&req, &resolver(), options).unwrap();

        assert_eq!(record.params_files, vec!["~/config/sim_config.yaml"]);
        // Unreadable files are reported, not fatal
        assert!(record.params.is_empty());
        assert_eq!(record.name.as_deref(), Some("coug_kinematics"));
        assert_eq!(record.respawn, Some(false));
    }

    #[test]
    fn test_record_inlines_params() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"coug_kinematics:\n  ros__parameters:\n    trim_ratio: 0.5\n")
            .unwrap();
        file.flush().unwrap();

        let req = request(vec![file.path().display().to_string()]);
        let options = RecordOptions {
            inline_params: true,
        };
        let record = CommandGenerator::generate_node_record(&req, &resolver(), options).unwrap();
        assert_eq!(
            record.params,
            vec![("trim_ratio".to_string(), "0.5".to_string())]
        );
    }

    #[test]
    fn test_record_keeps_file_data() {
        let mut file = NamedTempFile::new().unwrap();
        let yaml = "coug_controls:\n  ros__parameters:\n    timer_period: 80\n";
        file.write_all(yaml.as_bytes()).unwrap();
        file.flush().unwrap();
        let path = file.path().display().to_string();

        let plan = LaunchPlan {
            requests: vec![request(vec![path.clone()]), request(vec![path.clone()])],
        };
        let options = RecordOptions {
            inline_params: true,
        };
        let record = CommandGenerator::generate_record(&plan, &resolver(), options).unwrap();

        assert_eq!(record.file_data.len(), 1);
        assert_eq!(record.file_data.get(&path).map(String::as_str), Some(yaml));
        for node in &record.node {
            assert_eq!(
                node.params,
                vec![("timer_period".to_string(), "80".to_string())]
            );
        }
    }

    #[test]
    fn test_unreadable_file_has_no_file_data() {
        let plan = LaunchPlan {
            requests: vec![request(vec!["~/config/sim_config.yaml".to_string()])],
        };
        let options = RecordOptions {
            inline_params: true,
        };
        let record = CommandGenerator::generate_record(&plan, &resolver(), options).unwrap();
        assert!(record.file_data.is_empty());
        assert_eq!(record.node.len(), 1);
    }

    #[test]
    fn test_params_not_inlined_by_default() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"n:\n  ros__parameters:\n    a: 1\n").unwrap();
        file.flush().unwrap();

        let req = request(vec![file.path().display().to_string()]);
        let record =
            CommandGenerator::generate_node_record(&req, &resolver(), RecordOptions::default())
                .unwrap();
        assert!(record.params.is_empty());
    }
}
