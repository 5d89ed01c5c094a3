//! Record PRISMS-PF simulation inputs as Materials Commons processes
//!
//! Each workflow reads part of a PRISMS-PF application directory, creates
//! processes and samples through a [Client](pfmc_mcapi::Client), and returns
//! the processes it created as they stand afterwards.
//!
//! | Workflow                        | Process                       | Sample                  |
//! | ------------------------------- | ----------------------------- | ----------------------- |
//! | [create_numerical_parameters]   | Set Numerical Parameters      | Numerical Parameters    |
//! | [create_model_parameters]       | Set Model Parameters          | Model Parameters        |
//! | [create_software]               | Set Software                  | Software                |
//! | [create_equations]              | Set Equations: `<name>`       | Equations: `<name>`     |
//! | [create_environment]            | Set Computing Environment     | Computing Environment   |
//! | [create_simulation]             | Run Simulation                | none                    |
//!
//! [full_simulation] runs every input workflow then the simulation.
//!
//! Template ids come from an explicit [Templates] value, with defaults that
//! may be overridden from a JSON file.
//!
//! # Quickstart example
//!
//! ```rust
//! # use pfmc_mcapi::Journal;
//! # use pfmc_workflow::{create_environment, Options, Templates};
//! let mut journal = Journal::default();
//! let templates = Templates::default();
//! let options = Options {
//!     num_cores: Some(16),
//!     ..Default::default()
//! };
//!
//! let process = create_environment(&mut journal, &templates, &options).unwrap();
//! assert_eq!(process.name, "Set Computing Environment");
//! assert_eq!(process.measurements[0].value.to_string(), "16");
//! ```

// Split into subfiles for development, but anything important is re-exported
mod application;
mod common;
mod environment;
mod equations;
mod error;
mod lookup;
mod model;
mod numerical;
mod simulation;
mod software;
mod templates;

// Inline anything important for a nice public API
#[doc(inline)]
pub use application::{hostname, Application, UNKNOWN};

#[doc(inline)]
pub use common::Options;

#[doc(inline)]
pub use environment::create_environment;

#[doc(inline)]
pub use equations::create_equations;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use lookup::{find_sample_by_id, find_unique_output_sample};

#[doc(inline)]
pub use model::create_model_parameters;

#[doc(inline)]
pub use numerical::create_numerical_parameters;

#[doc(inline)]
pub use simulation::{create_inputs, create_simulation, full_simulation, simulation_from_ids};

#[doc(inline)]
pub use software::{create_software, SOFTWARE_NAME};

#[doc(inline)]
pub use templates::{SampleKind, Templates};
