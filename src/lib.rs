//! # ansible-behave
//!
//! An Ansible *binary module* that wraps the [behave](https://behave.readthedocs.io/)
//! BDD test runner. Ansible copies the executable to the target host and
//! invokes it with a single argument: the path to a JSON file holding the
//! task's parameters. The module validates the parameters, assembles a
//! `behave` command line, runs it in the requested directory, and prints one
//! JSON result object on stdout (exit code 0 on success, non-zero on
//! failure), which is the contract Ansible expects from a binary module.
//!
//! ## Options
//!
//! | name | required | default | choices |
//! |---|---|---|---|
//! | `path` | yes | — | directory containing the `features` directory |
//! | `name` | no | — | feature file to run; all files when omitted |
//! | `language` | no | `fr` | `fr`, `en` |
//! | `tags` | no | — | comma-separated tag selection, no spaces |
//! | `output_format` | no | `pretty` | `pretty`, `json.pretty` |
//! | `output_name` | no | `{feature}_result` | must contain `{feature}` |
//! | `output_dir` | no | `/tmp` | — |
//!
//! ## Examples
//!
//! ```yaml
//! # run all features available under /home/foo/tests
//! - behave:
//!     path: /home/foo/tests
//!
//! # run only base.feature and store the output as json
//! - behave:
//!     path: /home/foo/tests
//!     name: base.feature
//!     output_format: json.pretty
//!     output_name: "{feature}.output"
//! ```
//!
//! ## Modules
//!
//! - `core` - parameter schema, command assembly, execution flow, result contract
//! - `infra` - process spawning with captured output streams
//! - `cli` - the binary module front end (args-file ingestion)

pub mod cli;
pub mod core;
pub mod infra;

// Re-export commonly used items
pub use crate::core::command;
pub use crate::core::params;
pub use crate::core::report;
