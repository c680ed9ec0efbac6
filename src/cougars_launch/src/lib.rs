//! cougars_launch library
//!
//! Builds the launch plan for the CougUV control nodes and renders it as a
//! record.json document for a process supervisor.

pub mod config;
pub mod error;
pub mod package;
pub mod params;
pub mod plan;
pub mod record;

pub use config::{NodeRole, PlanConfig};
pub use error::{LaunchError, Result};
pub use package::{AmentIndex, PackageResolver, StaticIndex};
pub use plan::{build_launch_plan, build_launch_plan_with, LaunchPlan, LaunchRequest};

use record::{CommandGenerator, RecordJson, RecordOptions};

/// Build the plan for `config` and render it as record.json
pub fn generate_launch_record<R: PackageResolver + ?Sized>(
    resolver: &R,
    config: &PlanConfig,
    options: RecordOptions,
) -> Result<RecordJson> {
    let plan = build_launch_plan_with(resolver, config)?;
    CommandGenerator::generate_record(&plan, resolver, options)
}
