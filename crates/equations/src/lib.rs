//! Read variable attributes from PRISMS-PF `equations.h` files
//!
//! A PRISMS-PF application declares its field variables in `equations.h`
//! through setter calls inside `loadVariableAttributes()`:
//!
//! ```text
//! void variableAttributeLoader::loadVariableAttributes(){
//!     // Variable 0
//!     set_variable_name               (0,"c");
//!     set_variable_type               (0,SCALAR);
//!     set_variable_equation_type      (0,EXPLICIT_TIME_DEPENDENT);
//!     ...
//! ```
//!
//! This crate scans the file for those three setters and collects one
//! [EquationRecord] per variable index. Nothing else in the file is
//! interpreted.
//!
//! ## Comments
//!
//! Lines starting with `//` are skipped outright. Block comments are stripped
//! before matching, including those opened on one line and closed on a later
//! one, so commented-out variables never produce records.
//!
//! ## Robustness
//!
//! Scanning never fails on content. Unbalanced comment markers are handled as
//! well as possible and malformed setter calls are logged and skipped. The
//! only error is failing to read the file.
//!
//! # Quickstart example
//!
//! ```rust
//! # use pfmc_equations::{Equations, EquationKind};
//! let text = r#"
//!     set_variable_name(0,"c_v");
//!     set_variable_type(0,"SCALAR");
//!     /* set_variable_name(1,"old"); */
//!     set_variable_name(1,"n");
//! "#;
//!
//! let equations = Equations::from_reader(text.as_bytes()).unwrap();
//! assert_eq!(equations.len(), 2);
//! assert_eq!(equations.get("1").unwrap().name, "n");
//! assert_eq!(equations.get("0").unwrap().equation_kind, EquationKind::Parabolic);
//! ```

// Split into subfiles for development, but anything important is re-exported
mod comments;
mod equations;
mod error;
mod parsers;
mod reader;
mod record;

// Inline anything important for a nice public API
#[doc(inline)]
pub use comments::{is_blank_or_line_comment, strip_block_comments};

#[doc(inline)]
pub use equations::Equations;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use reader::{apply_attribute, match_attribute, read_equations, read_equations_file};

#[doc(inline)]
pub use record::{Attribute, EquationKind, EquationRecord, VariableKind};
