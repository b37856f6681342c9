//! Typed process wrapper around the gLabels batch label-printing tools.
//!
//! This crate exposes `glabels-3-batch` and `glabels-batch-qt` as Rust clients
//! whose flags are typed option structs. Each call validates its inputs,
//! runs the tool synchronously, and returns the captured output.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use glabels_core::{GlabelsBatchQt, InvocationConfigBuilder, QtOptions};
//!
//! let config = InvocationConfigBuilder::new("glabels-batch-qt")
//!     .command_env(["xvfb-run", "--wait=0.1"])
//!     .qt_arg("platform", "offscreen")
//!     .echo(true)
//!     .build();
//! let client = GlabelsBatchQt::new(&config);
//!
//! let options = QtOptions::new().copies(2).define("name", "Ada");
//! let pdf = client
//!     .run(std::path::PathBuf::from("/srv/labels/badge.glabels"), None, options)
//!     .unwrap();
//! assert!(pdf.is_some());
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod external;
pub mod invoker;
pub mod logging;
pub mod template;

// Re-exports for public API
pub use clients::{DefineMap, Glabels3Batch, Glabels3Options, GlabelsBatchQt, PreparedInvocation, QtOptions};
pub use config::{InvocationConfig, InvocationConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{ProcessOutput, ProcessRunner, SystemProcessRunner};
pub use invoker::CommandInvoker;
pub use template::{InputFile, Template};
