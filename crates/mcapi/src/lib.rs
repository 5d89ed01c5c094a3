//! Materials Commons entities and client contract
//!
//! Workflows record a simulation as processes and samples on the Materials
//! Commons platform. This crate provides:
//!
//! - The entity model, [Process], [Sample], [FileRef] and typed
//!   [Measurement] values
//! - The [Client] trait naming every call a workflow makes
//! - [Journal], a local [Client] that assigns ids and keeps an ordered log of
//!   calls, saved as JSON
//!
//! # Quickstart example
//!
//! ```rust
//! # use pfmc_mcapi::{Client, Journal, Measurement, Value};
//! let mut journal = Journal::default();
//!
//! let process = journal.create_process_from_template("global_Phase Field Simulation").unwrap();
//! journal.rename_process(&process.id, "Run Simulation").unwrap();
//! journal
//!     .add_measurement(&process.id, Measurement::integer("Number of cores", 8))
//!     .unwrap();
//!
//! let process = journal.get_process(&process.id).unwrap();
//! assert_eq!(process.name, "Run Simulation");
//! assert_eq!(process.measurement("Number of cores"), Some(&Value::Integer(8)));
//! ```

// Split into subfiles for development, but anything important is re-exported
mod client;
mod error;
mod journal;
mod model;

// Inline anything important for a nice public API
#[doc(inline)]
pub use client::Client;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use journal::{Call, Journal};

#[doc(inline)]
pub use model::{Direction, FileRef, Measurement, Process, Sample, Value};
