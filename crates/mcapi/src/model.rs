// standard library
use std::fmt;
use std::path::PathBuf;

// internal modules
use pfmc_format::f;

// external crates
use serde::{Deserialize, Serialize};

/// Whether a file is an input to, or an output of, a process
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Input to a process
    #[default]
    In,
    /// Produced by a process
    Out,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::In => write!(f, "in"),
            Self::Out => write!(f, "out"),
        }
    }
}

/// An uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// Project file id
    pub id: String,
    /// Absolute path of the local copy
    pub path: PathBuf,
    /// Input or output
    pub direction: Direction,
}

/// Typed value of a process measurement
///
/// Serialised with an explicit type tag so that integers and numbers survive
/// a round trip through JSON:
///
/// ```rust
/// # use pfmc_mcapi::Value;
/// let json = serde_json::to_string(&Value::Integer(2)).unwrap();
/// assert_eq!(json, r#"{"otype":"integer","value":2}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "otype", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// Free text
    String(String),
    /// Floating point
    Number(f64),
    /// Whole number
    Integer(i64),
    /// True or false
    Boolean(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::String(v) => write!(f, "{v}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
        }
    }
}

/// A named attribute value recorded against a process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Attribute description, e.g. `Computer name`
    pub attribute: String,
    /// Recorded value
    pub value: Value,
}

impl Measurement {
    /// Text measurement
    pub fn string(attribute: &str, value: &str) -> Self {
        Self {
            attribute: attribute.to_string(),
            value: Value::String(value.to_string()),
        }
    }

    /// Floating point measurement
    pub fn number(attribute: &str, value: f64) -> Self {
        Self {
            attribute: attribute.to_string(),
            value: Value::Number(value),
        }
    }

    /// Whole number measurement
    pub fn integer(attribute: &str, value: i64) -> Self {
        Self {
            attribute: attribute.to_string(),
            value: Value::Integer(value),
        }
    }

    /// True or false measurement
    pub fn boolean(attribute: &str, value: bool) -> Self {
        Self {
            attribute: attribute.to_string(),
            value: Value::Boolean(value),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.attribute, self.value)
    }
}

/// An artifact produced by a process
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Sample id, e.g. `samp-1`
    pub id: String,
    /// Display name
    pub name: String,
    /// Ids of linked files
    pub files: Vec<String>,
}

/// An action performed in an experiment
///
/// Related samples and files are referenced by id. Use
/// [Client::find_sample](crate::Client::find_sample) to resolve them.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Process id, e.g. `proc-1`
    pub id: String,
    /// Display name
    pub name: String,
    /// Template the process was created from
    pub template_id: String,
    /// Measurements in the order they were added
    pub measurements: Vec<Measurement>,
    /// Ids of samples consumed by the process
    pub input_samples: Vec<String>,
    /// Ids of samples created by the process
    pub output_samples: Vec<String>,
    /// Ids of attached files
    pub files: Vec<String>,
}

impl Process {
    /// Value of the first measurement with a matching attribute
    pub fn measurement(&self, attribute: &str) -> Option<&Value> {
        self.measurements
            .iter()
            .find(|m| m.attribute == attribute)
            .map(|m| &m.value)
    }
}

impl fmt::Display for Process {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut s = f!("Process {}\n", self.id);
        s += &f!("  Name           {}\n", self.name);
        s += &f!("  Template       {}\n", self.template_id);
        s += &f!("  Inputs         {}\n", self.input_samples.join(", "));
        s += &f!("  Outputs        {}\n", self.output_samples.join(", "));
        s += &f!("  Files          {}", self.files.join(", "));
        for measurement in &self.measurements {
            s += &f!("\n  - {measurement}");
        }
        write!(fmt, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_values() {
        let m = Measurement::number("Time step", 0.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(
            json,
            r#"{"attribute":"Time step","value":{"otype":"number","value":0.5}}"#
        );
        assert_eq!(serde_json::from_str::<Measurement>(&json).unwrap(), m);
    }

    #[test]
    fn direction_names() {
        assert_eq!(serde_json::to_string(&Direction::In).unwrap(), "\"in\"");
        assert_eq!(Direction::Out.to_string(), "out");
    }

    #[test]
    fn measurement_lookup() {
        let process = Process {
            measurements: vec![
                Measurement::string("Variable Name", "n"),
                Measurement::boolean("Converged", true),
            ],
            ..Default::default()
        };
        assert_eq!(process.measurement("Converged"), Some(&Value::Boolean(true)));
        assert_eq!(process.measurement("Variable Type"), None);
    }

    #[test]
    fn process_display() {
        let process = Process {
            id: "proc-1".into(),
            name: "Run Simulation".into(),
            template_id: "t".into(),
            input_samples: vec!["samp-1".into(), "samp-2".into()],
            measurements: vec![Measurement::integer("Cores", 4)],
            ..Default::default()
        };
        assert_eq!(
            process.to_string(),
            "Process proc-1\n  Name           Run Simulation\n  Template       t\n  Inputs         samp-1, samp-2\n  Outputs        \n  Files          \n  - Cores = 4"
        );
    }
}
