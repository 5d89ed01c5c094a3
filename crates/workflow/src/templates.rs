// standard library
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

// internal modules
use crate::error::{Error, Result};

// external crates
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// The kinds of process recorded for a PRISMS-PF simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    /// Numerical parameters from `parameters.in`
    NumericalParameters,
    /// Model constants from `parameters.in`
    ModelParameters,
    /// PRISMS-PF version and application
    Software,
    /// One variable from `equations.h`
    Equations,
    /// Host and core count
    Environment,
    /// The simulation consuming every other sample
    Simulation,
}

impl SampleKind {
    /// Every kind, in the order the commands are listed
    pub const ALL: [SampleKind; 6] = [
        Self::NumericalParameters,
        Self::ModelParameters,
        Self::Software,
        Self::Equations,
        Self::Environment,
        Self::Simulation,
    ];

    /// Command name, also used as the key in a templates file
    pub fn command(&self) -> &'static str {
        match self {
            Self::NumericalParameters => "numerical-parameters",
            Self::ModelParameters => "model-parameters",
            Self::Software => "software",
            Self::Equations => "equations",
            Self::Environment => "environment",
            Self::Simulation => "simulation",
        }
    }

    /// Human readable name, e.g. `Computing Environment`
    pub fn description(&self) -> &'static str {
        match self {
            Self::NumericalParameters => "Numerical Parameters",
            Self::ModelParameters => "Model Parameters",
            Self::Software => "Software",
            Self::Equations => "Equations",
            Self::Environment => "Computing Environment",
            Self::Simulation => "Simulation",
        }
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl FromStr for SampleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.command() == s)
            .ok_or_else(|| Error::UnknownTemplate(s.to_string()))
    }
}

/// Template id used for each kind of process
///
/// Resolved once at start and passed to every workflow. A JSON file keyed by
/// command name may override any subset of the defaults:
///
/// ```rust
/// # use pfmc_workflow::{SampleKind, Templates};
/// let templates = Templates::from_json(r#"{"software": "custom_Software"}"#).unwrap();
///
/// assert_eq!(templates.template(SampleKind::Software), "custom_Software");
/// assert_eq!(
///     templates.template(SampleKind::Simulation),
///     "global_Phase Field Simulation"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Templates {
    /// Template for `numerical-parameters`
    pub numerical_parameters: String,
    /// Template for `model-parameters`
    pub model_parameters: String,
    /// Template for `software`
    pub software: String,
    /// Template for `equations`
    pub equations: String,
    /// Template for `environment`
    pub environment: String,
    /// Template for `simulation` and `full-simulation`
    pub simulation: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            numerical_parameters: "global_Phase Field Simulation: Numerical Parameters".into(),
            model_parameters: "global_Phase Field Simulation: Set Model Parameters".into(),
            software: "global_Phase Field Simulation: Software".into(),
            equations: "global_Phase Field Simulation: Variable Name and Governing Equation"
                .into(),
            environment: "global_Phase Field Simulation: Set Computing Environment".into(),
            simulation: "global_Phase Field Simulation".into(),
        }
    }
}

impl Templates {
    /// Read overrides from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading templates from {}", path.as_ref().display());
        let reader = BufReader::new(File::open(path)?);
        let templates: Self = serde_json::from_reader(reader)?;
        debug!("{templates:?}");
        Ok(templates)
    }

    /// Read overrides from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Template id for a kind of process
    pub fn template(&self, kind: SampleKind) -> &str {
        match kind {
            SampleKind::NumericalParameters => &self.numerical_parameters,
            SampleKind::ModelParameters => &self.model_parameters,
            SampleKind::Software => &self.software,
            SampleKind::Equations => &self.equations,
            SampleKind::Environment => &self.environment,
            SampleKind::Simulation => &self.simulation,
        }
    }

    /// Template id for a command name
    pub fn get(&self, command: &str) -> Result<&str> {
        Ok(self.template(command.parse()?))
    }
}
