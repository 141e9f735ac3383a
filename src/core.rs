//! Core module tree: parameter schema, command assembly, execution flow and
//! the result contract returned to Ansible.

pub mod command;
pub mod execution;
pub mod params;
pub mod report;
