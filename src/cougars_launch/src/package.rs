//! Package resolution against ROS 2 install prefixes

use crate::error::{LaunchError, Result};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// Marker directory that ament uses to register installed packages
const PACKAGE_MARKERS: &str = "share/ament_index/resource_index/packages";

/// Lookup of installed packages by name.
pub trait PackageResolver {
    /// Install prefix that contains the package's `share/` and `lib/` trees
    fn prefix(&self, package: &str) -> Result<PathBuf>;

    /// `<prefix>/share/<package>`
    fn share_directory(&self, package: &str) -> Result<PathBuf> {
        Ok(self.prefix(package)?.join("share").join(package))
    }

    /// `<prefix>/lib/<package>/<executable>`
    fn executable_path(&self, package: &str, executable: &str) -> Result<PathBuf> {
        Ok(self.prefix(package)?.join("lib").join(package).join(executable))
    }
}

/// Resolver that walks ament install prefixes on disk
#[derive(Debug, Clone, Default)]
pub struct AmentIndex {
    prefixes: Vec<PathBuf>,
}

impl AmentIndex {
    pub fn from_prefixes<I, P>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the search path from `ROS_DISTRO` and `AMENT_PREFIX_PATH`.
    pub fn from_env() -> Self {
        let mut prefixes = Vec::new();

        if let Ok(distro) = std::env::var("ROS_DISTRO") {
            if !distro.is_empty() {
                prefixes.push(PathBuf::from(format!("/opt/ros/{}", distro)));
            }
        }

        if let Ok(prefix_path) = std::env::var("AMENT_PREFIX_PATH") {
            for prefix in prefix_path.split(':').filter(|p| !p.is_empty()) {
                let prefix = PathBuf::from(prefix);
                if !prefixes.contains(&prefix) {
                    prefixes.push(prefix);
                }
            }
        }

        log::debug!("Package search prefixes: {:?}", prefixes);
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &[PathBuf] {
        &self.prefixes
    }
}

fn has_package(prefix: &Path, package: &str) -> bool {
    prefix.join(PACKAGE_MARKERS).join(package).exists()
        || prefix.join("share").join(package).is_dir()
}

impl PackageResolver for AmentIndex {
    fn prefix(&self, package: &str) -> Result<PathBuf> {
        self.prefixes
            .iter()
            .find(|prefix| has_package(prefix, package))
            .cloned()
            .ok_or_else(|| LaunchError::PackageNotFound(package.to_string()))
    }
}

/// In-memory package table, mainly for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct StaticIndex {
    packages: HashMap<String, PathBuf>,
    shares: HashMap<String, PathBuf>,
}

impl StaticIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: impl Into<String>, prefix: impl Into<PathBuf>) -> Self {
        self.insert(package, prefix);
        self
    }

    pub fn insert(&mut self, package: impl Into<String>, prefix: impl Into<PathBuf>) {
        self.packages.insert(package.into(), prefix.into());
    }

    /// Register a share directory that does not follow `<prefix>/share/<package>`.
    pub fn with_share_directory(
        mut self,
        package: impl Into<String>,
        share: impl Into<PathBuf>,
    ) -> Self {
        self.shares.insert(package.into(), share.into());
        self
    }
}

impl PackageResolver for StaticIndex {
    fn prefix(&self, package: &str) -> Result<PathBuf> {
        self.packages
            .get(package)
            .cloned()
            .ok_or_else(|| LaunchError::PackageNotFound(package.to_string()))
    }

    fn share_directory(&self, package: &str) -> Result<PathBuf> {
        match self.shares.get(package) {
            Some(share) => Ok(share.clone()),
            None => Ok(self.prefix(package)?.join("share").join(package)),
        }
    }
}
