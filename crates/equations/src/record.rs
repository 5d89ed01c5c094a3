// standard library
use std::fmt;

// external crates
use serde::{Deserialize, Serialize};

// internal modules
use crate::error::Result;
use pfmc_format::f;

/// Variable attributes that can be set in `equations.h`
///
/// Each attribute is bound to the name of the setter call that assigns it.
///
/// | Attribute                     | Setter                       |
/// | ----------------------------- | ---------------------------- |
/// | [Attribute::Name]             | `set_variable_name`          |
/// | [Attribute::Kind]             | `set_variable_type`          |
/// | [Attribute::EquationKind]     | `set_variable_equation_type` |
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// Variable name
    Name,
    /// Variable type, i.e. scalar or vector field
    Kind,
    /// Governing equation type
    EquationKind,
}

impl Attribute {
    /// Every attribute, in the order they are matched against a line
    pub const ALL: [Attribute; 3] = [Attribute::Name, Attribute::Kind, Attribute::EquationKind];

    /// Name of the setter call for this attribute
    ///
    /// ```rust
    /// # use pfmc_equations::Attribute;
    /// assert_eq!(Attribute::Name.setter(), "set_variable_name");
    /// assert_eq!(Attribute::Kind.setter(), "set_variable_type");
    /// assert_eq!(Attribute::EquationKind.setter(), "set_variable_equation_type");
    /// ```
    pub fn setter(&self) -> &'static str {
        match self {
            Attribute::Name => "set_variable_name",
            Attribute::Kind => "set_variable_type",
            Attribute::EquationKind => "set_variable_equation_type",
        }
    }
}

/// Type of field a variable represents
///
/// Anything other than the known PRISMS-PF keywords is kept verbatim rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VariableKind {
    /// Scalar field (`SCALAR`)
    #[default]
    Scalar,
    /// Vector field (`VECTOR`)
    Vector,
    /// Unrecognised keyword
    Other(String),
}

impl From<&str> for VariableKind {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "SCALAR" => VariableKind::Scalar,
            "VECTOR" => VariableKind::Vector,
            _ => VariableKind::Other(s.to_string()),
        }
    }
}

impl From<String> for VariableKind {
    fn from(s: String) -> Self {
        VariableKind::from(s.as_str())
    }
}

impl From<VariableKind> for String {
    fn from(kind: VariableKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            VariableKind::Scalar => "SCALAR",
            VariableKind::Vector => "VECTOR",
            VariableKind::Other(s) => s,
        };
        write!(f, "{s}")
    }
}

/// Type of governing equation for a variable
///
/// Older PRISMS-PF applications use `PARABOLIC`/`ELLIPTIC`, newer ones use the
/// time-dependence keywords. Unknown keywords are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EquationKind {
    /// `PARABOLIC`
    #[default]
    Parabolic,
    /// `ELLIPTIC`
    Elliptic,
    /// `EXPLICIT_TIME_DEPENDENT`
    ExplicitTimeDependent,
    /// `IMPLICIT_TIME_DEPENDENT`
    ImplicitTimeDependent,
    /// `TIME_INDEPENDENT`
    TimeIndependent,
    /// `AUXILIARY`
    Auxiliary,
    /// Unrecognised keyword
    Other(String),
}

impl From<&str> for EquationKind {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "PARABOLIC" => EquationKind::Parabolic,
            "ELLIPTIC" => EquationKind::Elliptic,
            "EXPLICIT_TIME_DEPENDENT" => EquationKind::ExplicitTimeDependent,
            "IMPLICIT_TIME_DEPENDENT" => EquationKind::ImplicitTimeDependent,
            "TIME_INDEPENDENT" => EquationKind::TimeIndependent,
            "AUXILIARY" => EquationKind::Auxiliary,
            _ => EquationKind::Other(s.to_string()),
        }
    }
}

impl From<String> for EquationKind {
    fn from(s: String) -> Self {
        EquationKind::from(s.as_str())
    }
}

impl From<EquationKind> for String {
    fn from(kind: EquationKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            EquationKind::Parabolic => "PARABOLIC",
            EquationKind::Elliptic => "ELLIPTIC",
            EquationKind::ExplicitTimeDependent => "EXPLICIT_TIME_DEPENDENT",
            EquationKind::ImplicitTimeDependent => "IMPLICIT_TIME_DEPENDENT",
            EquationKind::TimeIndependent => "TIME_INDEPENDENT",
            EquationKind::Auxiliary => "AUXILIARY",
            EquationKind::Other(s) => s,
        };
        write!(f, "{s}")
    }
}

/// Attributes collected for a single variable/equation index
///
/// A record is created the first time its index is mentioned by any setter,
/// with defaults for everything not yet seen:
///
/// - `name` = `"var"`
/// - `kind` = [VariableKind::Scalar]
/// - `equation_kind` = [EquationKind::Parabolic]
///
/// ```rust
/// # use pfmc_equations::{EquationRecord, EquationKind, VariableKind};
/// let record = EquationRecord::new("0");
/// assert_eq!(record.name, "var");
/// assert_eq!(record.kind, VariableKind::Scalar);
/// assert_eq!(record.equation_kind, EquationKind::Parabolic);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationRecord {
    /// Index token from the first setter argument
    pub index: String,
    /// Variable name
    pub name: String,
    /// Scalar or vector field
    pub kind: VariableKind,
    /// Governing equation type
    pub equation_kind: EquationKind,
}

impl EquationRecord {
    /// New record for `index` with every attribute at its default
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            name: "var".to_string(),
            kind: VariableKind::default(),
            equation_kind: EquationKind::default(),
        }
    }

    /// Assign the value for one attribute
    ///
    /// ```rust
    /// # use pfmc_equations::{Attribute, EquationRecord, VariableKind};
    /// let mut record = EquationRecord::new("1");
    /// record.set(Attribute::Name, "n");
    /// record.set(Attribute::Kind, "VECTOR");
    /// assert_eq!(record.name, "n");
    /// assert_eq!(record.kind, VariableKind::Vector);
    /// ```
    pub fn set(&mut self, attribute: Attribute, value: &str) {
        match attribute {
            Attribute::Name => self.name = value.to_string(),
            Attribute::Kind => self.kind = VariableKind::from(value),
            Attribute::EquationKind => self.equation_kind = EquationKind::from(value),
        }
    }

    /// The index as a number, if it is a plain integer literal
    ///
    /// ```rust
    /// # use pfmc_equations::EquationRecord;
    /// assert_eq!(EquationRecord::new("3").index_number(), Some(3));
    /// assert_eq!(EquationRecord::new("n_idx").index_number(), None);
    /// ```
    pub fn index_number(&self) -> Option<u32> {
        self.index.parse().ok()
    }

    /// Serialize to JSON format string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for EquationRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = f!("Variable {}\n", self.index);
        s += &f!("  Name           {}\n", self.name);
        s += &f!("  Type           {}\n", self.kind);
        s += &f!("  Equation type  {}", self.equation_kind);
        write!(f, "{s}")
    }
}
