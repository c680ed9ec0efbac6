//! Record module for generating record.json

pub mod generator;
pub mod types;

pub use generator::{CommandGenerator, RecordOptions};
pub use types::{NodeRecord, RecordJson};
