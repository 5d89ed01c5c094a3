// standard library
use std::fmt;

// internal modules
use crate::error::{Error, Result};
use crate::parameters::Parameters;

// external crates
use log::{debug, info};

/// Numerical parameters recorded with Materials Commons, and their types
pub const NUMERICAL_KEYS: [(&str, NumericalType); 12] = [
    ("Number of dimensions", NumericalType::Integer),
    ("Domain size (X)", NumericalType::Number),
    ("Domain size (Y)", NumericalType::Number),
    ("Domain size (Z)", NumericalType::Number),
    ("Subdivisions X", NumericalType::Integer),
    ("Subdivisions Y", NumericalType::Integer),
    ("Subdivisions Z", NumericalType::Integer),
    ("Refine factor", NumericalType::Integer),
    ("Element degree", NumericalType::Integer),
    ("Time step", NumericalType::Number),
    ("Number of time steps", NumericalType::Integer),
    ("Simulation end time", NumericalType::Number),
];

/// Measurement type of a numerical parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericalType {
    /// Whole number, e.g. subdivisions
    Integer,
    /// Floating point, e.g. domain size
    Number,
}

impl NumericalType {
    fn name(&self) -> &'static str {
        match self {
            Self::Integer => "an integer",
            Self::Number => "a number",
        }
    }
}

/// Parsed value of a numerical parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericalValue {
    /// Value of an [NumericalType::Integer] parameter
    Integer(i64),
    /// Value of a [NumericalType::Number] parameter
    Number(f64),
}

impl fmt::Display for NumericalValue {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(fmt, "{v}"),
            Self::Number(v) => write!(fmt, "{v}"),
        }
    }
}

/// A numerical parameter from the fixed set in [NUMERICAL_KEYS]
#[derive(Debug, Clone, PartialEq)]
pub struct NumericalParameter {
    /// Canonical key, independent of the case used in the file
    pub description: String,
    /// Value parsed as the type listed in [NUMERICAL_KEYS]
    pub value: NumericalValue,
}

impl NumericalParameter {
    /// Parse `value` as the given type
    ///
    /// ```rust
    /// # use pfmc_parameters::{NumericalParameter, NumericalType, NumericalValue};
    /// let p = NumericalParameter::parse("Time step", "1.0e-4", NumericalType::Number).unwrap();
    /// assert_eq!(p.value, NumericalValue::Number(1.0e-4));
    ///
    /// assert!(NumericalParameter::parse("Refine factor", "2.5", NumericalType::Integer).is_err());
    /// ```
    pub fn parse(description: &str, value: &str, kind: NumericalType) -> Result<Self> {
        let invalid = || Error::InvalidValue {
            key: description.to_string(),
            value: value.to_string(),
            expected: kind.name(),
        };

        let value = match kind {
            NumericalType::Integer => {
                NumericalValue::Integer(value.parse::<i64>().map_err(|_| invalid())?)
            }
            NumericalType::Number => {
                NumericalValue::Number(value.parse::<f64>().map_err(|_| invalid())?)
            }
        };

        Ok(Self {
            description: description.to_string(),
            value,
        })
    }
}

impl fmt::Display for NumericalParameter {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} = {}", self.description, self.value)
    }
}

/// Every numerical parameter present at the top level
pub(crate) fn numerical_parameters(parameters: &Parameters) -> Result<Vec<NumericalParameter>> {
    let mut found = Vec::with_capacity(NUMERICAL_KEYS.len());

    for (key, kind) in NUMERICAL_KEYS {
        let Some(value) = parameters.get(key) else {
            info!("No \"{key}\" set, skipping");
            continue;
        };
        let parameter = NumericalParameter::parse(key, value, kind)?;
        debug!("{parameter}");
        found.push(parameter);
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let text = "set domain size (x) = 40\nset NUMBER OF DIMENSIONS = 2\n";
        let parameters = Parameters::from_reader(text.as_bytes()).unwrap();
        let found = numerical_parameters(&parameters).unwrap();

        // table order, not file order
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].description, "Number of dimensions");
        assert_eq!(found[0].value, NumericalValue::Integer(2));
        assert_eq!(found[1].description, "Domain size (X)");
        assert_eq!(found[1].value, NumericalValue::Number(40.0));
    }

    #[test]
    fn bad_value_is_an_error() {
        let parameters = Parameters::from_reader("set Subdivisions X = three".as_bytes()).unwrap();
        let error = numerical_parameters(&parameters).unwrap_err();
        assert_eq!(
            error.to_string(),
            "failed to read \"Subdivisions X\" = \"three\" as an integer"
        );
    }

    #[test]
    fn display() {
        let p = NumericalParameter::parse("Element degree", "2", NumericalType::Integer).unwrap();
        assert_eq!(p.to_string(), "Element degree = 2");
    }
}
