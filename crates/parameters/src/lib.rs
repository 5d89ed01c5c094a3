//! Read PRISMS-PF `parameters.in` files
//!
//! PRISMS-PF applications use the deal.II parameter file format. Each
//! statement sits on its own line:
//!
//! ```text
//! # comments start with a hash
//! set Number of dimensions = 2
//! set Domain size (X) = 40
//!
//! set Model constant McV = 1.0, DOUBLE
//!
//! subsection Refinement criterion: n
//!     set Criterion type = VALUE
//! end
//! ```
//!
//! [Parameters] keeps every `set` entry. Two groups of values are then
//! derived from the entries:
//!
//! - [ModelConstant] for each `Model constant` entry
//! - [NumericalParameter] for the fixed mesh and time stepping settings in
//!   [NUMERICAL_KEYS]
//!
//! # Quickstart example
//!
//! ```rust
//! # use pfmc_parameters::{Parameters, NumericalValue};
//! let text = "
//! set Number of dimensions = 2
//! set Time step = 2.0e-4
//! set Model constant McV = 1.0, DOUBLE
//! set Model constant Dc = (1,0,0,1), RANK 2 TENSOR
//! ";
//!
//! let parameters = Parameters::from_reader(text.as_bytes()).unwrap();
//!
//! let constants = parameters.model_constants();
//! assert_eq!(constants[1].value, "(1, 0, 0, 1)");
//!
//! let numerical = parameters.numerical_parameters().unwrap();
//! assert_eq!(numerical[1].value, NumericalValue::Number(2.0e-4));
//! ```

// Split into subfiles for development, but anything important is re-exported
mod constants;
mod error;
mod numerical;
mod parameters;
mod parsers;

// Inline anything important for a nice public API
#[doc(inline)]
pub use constants::{ModelConstant, MODEL_CONSTANT_PREFIX};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use numerical::{NumericalParameter, NumericalType, NumericalValue, NUMERICAL_KEYS};

#[doc(inline)]
pub use parameters::{Parameter, Parameters};
