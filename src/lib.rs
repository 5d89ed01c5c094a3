//! `prismspf-mc` records PRISMS-PF phase-field simulations as Materials
//! Commons processes and samples
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of workspace crates.
#[doc(inline)]
pub use pfmc_format as format;

#[doc(inline)]
pub use pfmc_equations as equations;

#[cfg(feature = "mcapi")]
#[cfg_attr(docsrs, doc(cfg(feature = "mcapi")))]
#[doc(inline)]
pub use pfmc_mcapi as mcapi;

#[cfg(feature = "parameters")]
#[cfg_attr(docsrs, doc(cfg(feature = "parameters")))]
#[doc(inline)]
pub use pfmc_parameters as parameters;

#[cfg(feature = "workflow")]
#[cfg_attr(docsrs, doc(cfg(feature = "workflow")))]
#[doc(inline)]
pub use pfmc_workflow as workflow;
