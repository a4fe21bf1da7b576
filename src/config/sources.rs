//! Option sources read from outside the process arguments.

pub mod config_file;
