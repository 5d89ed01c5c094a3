// standard library
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// internal modules
use crate::constants::{model_constants, ModelConstant};
use crate::error::Result;
use crate::numerical::{numerical_parameters, NumericalParameter};
use crate::parsers::{line, normalise_key, strip_comment, Line};
use pfmc_format::f;

// external crates
use log::{debug, info, trace, warn};

/// A single `set <key> = <value>` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Subsection path the entry was set in, e.g. `Refinement criterion: n`
    ///
    /// Nested subsections are joined with `/`. `None` for top level entries.
    pub section: Option<String>,
    /// Entry name with whitespace normalised
    pub key: String,
    /// Raw text to the right of the `=`, trimmed
    pub value: String,
}

impl fmt::Display for Parameter {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match &self.section {
            Some(section) => write!(fmt, "[{section}] {} = {}", self.key, self.value),
            None => write!(fmt, "{} = {}", self.key, self.value),
        }
    }
}

/// Every entry set in a `parameters.in` file
///
/// Entries keep the order in which their key first appears. Setting a key a
/// second time in the same section replaces the value in place, matching how
/// deal.II resolves repeated `set` statements.
///
/// ```rust
/// # use pfmc_parameters::Parameters;
/// let text = "
/// # Mesh
/// set Number of dimensions = 2
/// set Domain size (X) = 40
/// set Model constant McV = 1.0, DOUBLE
/// ";
///
/// let parameters = Parameters::from_reader(text.as_bytes()).unwrap();
/// assert_eq!(parameters.len(), 3);
/// assert_eq!(parameters.get("domain size (x)"), Some("40"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Entries in order of first appearance
    pub entries: Vec<Parameter>,
}

impl Parameters {
    /// Read a `parameters.in` file
    ///
    /// A missing or unreadable file is an error. Lines that are not `set`,
    /// `subsection`, `end`, blank or comments are logged and skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {}", path.as_ref().display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read `parameters.in` content from any buffered source
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut parameters = Self::default();
        let mut sections: Vec<String> = Vec::new();

        for (n, text) in reader.lines().enumerate() {
            let text = text?;
            match line(strip_comment(&text)) {
                Ok((_, Line::Set(key, value))) => {
                    let section = match sections.is_empty() {
                        true => None,
                        false => Some(sections.join("/")),
                    };
                    parameters.insert(section, key, value);
                }
                Ok((_, Line::Subsection(name))) => {
                    trace!("Entering subsection {name:?}");
                    sections.push(name.to_string());
                }
                Ok((_, Line::End)) => {
                    if sections.pop().is_none() {
                        warn!("Line {}: \"end\" without a subsection", n + 1);
                    }
                }
                Ok((_, Line::Blank)) => (),
                Err(_) => warn!("Line {}: skipping unrecognised {:?}", n + 1, text.trim()),
            }
        }

        if !sections.is_empty() {
            warn!("Unterminated subsection {:?}", sections.join("/"));
        }

        debug!("Read {} parameter entries", parameters.len());
        Ok(parameters)
    }

    /// Value of a top level entry, ignoring case and extra whitespace in `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_in(None, key)
    }

    /// Value of an entry inside a specific subsection
    ///
    /// ```rust
    /// # use pfmc_parameters::Parameters;
    /// let text = "subsection Refinement criterion: n\n  set Criterion type = VALUE\nend";
    /// let parameters = Parameters::from_reader(text.as_bytes()).unwrap();
    ///
    /// assert_eq!(parameters.get("Criterion type"), None);
    /// assert_eq!(
    ///     parameters.get_in(Some("Refinement criterion: n"), "Criterion type"),
    ///     Some("VALUE")
    /// );
    /// ```
    pub fn get_in(&self, section: Option<&str>, key: &str) -> Option<&str> {
        let key = normalise_key(key);
        self.entries
            .iter()
            .find(|p| {
                p.section.as_deref().map(str::to_lowercase) == section.map(str::to_lowercase)
                    && p.key.eq_ignore_ascii_case(&key)
            })
            .map(|p| p.value.as_str())
    }

    /// All `Model constant` entries, split into value and type
    ///
    /// See [ModelConstant] for how values are interpreted.
    pub fn model_constants(&self) -> Vec<ModelConstant> {
        model_constants(self)
    }

    /// The fixed set of numerical parameters, where present
    ///
    /// See [NumericalParameter] for the list of entries and their types. A
    /// value that does not parse as its type is an error.
    pub fn numerical_parameters(&self) -> Result<Vec<NumericalParameter>> {
        numerical_parameters(self)
    }

    /// Iterate over all entries in file order
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.entries.iter()
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, section: Option<String>, key: &str, value: &str) {
        let key = normalise_key(key);
        let existing = self
            .entries
            .iter_mut()
            .find(|p| p.section == section && p.key.eq_ignore_ascii_case(&key));

        match existing {
            Some(parameter) => {
                debug!("Overwriting {:?} ({:?} -> {value:?})", parameter.key, parameter.value);
                parameter.value = value.to_string();
            }
            None => self.entries.push(Parameter {
                section,
                key,
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut s = f!("Parameters ({} entries)", self.len());
        for parameter in &self.entries {
            s += &f!("\n  {parameter}");
        }
        write!(fmt, "{s}")
    }
}
