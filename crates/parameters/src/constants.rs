// standard library
use std::fmt;

// internal modules
use crate::parameters::Parameters;

// external crates
use log::trace;

/// Key prefix shared by every model constant
pub const MODEL_CONSTANT_PREFIX: &str = "Model constant";

/// Constant types that carry a single value
const SINGLE_VALUE_TYPES: [&str; 3] = ["DOUBLE", "INT", "BOOL"];

/// A `Model constant` entry from `parameters.in`
///
/// Entries take the form `set Model constant <description> = <value>, <TYPE>`.
/// For the single value types `DOUBLE`, `INT` and `BOOL` the value is the
/// first element. For anything else (tensors, elastic constants) the value is
/// every element but the type, joined back together with `", "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConstant {
    /// Key text after the `Model constant` prefix
    pub description: String,
    /// Value as recorded, always kept as text
    pub value: String,
    /// Trailing type element, e.g. `DOUBLE` or `RANK 2 TENSOR`
    pub kind: String,
}

impl ModelConstant {
    /// Interpret a `Model constant` entry, `None` for any other key
    ///
    /// ```rust
    /// # use pfmc_parameters::ModelConstant;
    /// let constant = ModelConstant::from_entry("Model constant McV", "1.0, DOUBLE").unwrap();
    /// assert_eq!(constant.description, "McV");
    /// assert_eq!(constant.value, "1.0");
    ///
    /// let tensor = ModelConstant::from_entry("Model constant Dc", "(1,0,0,1), RANK 2 TENSOR").unwrap();
    /// assert_eq!(tensor.value, "(1, 0, 0, 1)");
    /// ```
    pub fn from_entry(key: &str, value: &str) -> Option<Self> {
        let description = strip_prefix_no_case(key, MODEL_CONSTANT_PREFIX)?.trim();

        let mut elements: Vec<&str> = value.split(',').map(str::trim).collect();
        let kind = match elements.len() {
            1 => "",
            _ => elements.pop().unwrap_or_default(),
        };

        let value = match SINGLE_VALUE_TYPES.iter().any(|t| kind.eq_ignore_ascii_case(t)) {
            true => elements[0].to_string(),
            false => elements.join(", "),
        };

        trace!("Model constant {description:?} = {value:?} ({kind})");
        Some(Self {
            description: description.to_string(),
            value,
            kind: kind.to_string(),
        })
    }

    /// True for `DOUBLE`, `INT` and `BOOL` constants
    pub fn is_single_value(&self) -> bool {
        SINGLE_VALUE_TYPES
            .iter()
            .any(|t| self.kind.eq_ignore_ascii_case(t))
    }
}

impl fmt::Display for ModelConstant {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} = {} ({})", self.description, self.value, self.kind)
    }
}

/// All top level model constants in file order
pub(crate) fn model_constants(parameters: &Parameters) -> Vec<ModelConstant> {
    parameters
        .iter()
        .filter(|p| p.section.is_none())
        .filter_map(|p| ModelConstant::from_entry(&p.key, &p.value))
        .collect()
}

/// Case insensitive prefix strip
fn strip_prefix_no_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    match head.eq_ignore_ascii_case(prefix) {
        true => Some(&s[prefix.len()..]),
        false => None,
    }
}
