// standard library
use std::io::BufRead;
use std::path::Path;

// internal modules
use crate::error::Result;
use crate::reader::{read_equations, read_equations_file};
use crate::record::EquationRecord;

// external crates
use log::info;

/// Variable records read from one `equations.h` file
///
/// Thin wrapper around the ordered list of [EquationRecord]s with some
/// convenience lookups. Records keep the order in which their index was first
/// mentioned in the file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Equations {
    /// Records in order of first appearance
    pub records: Vec<EquationRecord>,
}

impl Equations {
    /// Read an `equations.h` file
    ///
    /// ```rust, no_run
    /// # use pfmc_equations::Equations;
    /// let equations = Equations::from_file("path/to/equations.h").unwrap();
    /// println!("{} variables", equations.len());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {}", path.as_ref().display());
        Ok(Self {
            records: read_equations_file(path)?,
        })
    }

    /// Read `equations.h` content from any buffered source
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self {
            records: read_equations(reader)?,
        })
    }

    /// Find the record for a specific index
    ///
    /// ```rust
    /// # use pfmc_equations::Equations;
    /// let text = "set_variable_name(0,\"c\");\nset_variable_name(1,\"n\");";
    /// let equations = Equations::from_reader(text.as_bytes()).unwrap();
    ///
    /// assert_eq!(equations.get("1").unwrap().name, "n");
    /// assert!(equations.get("2").is_none());
    /// ```
    pub fn get(&self, index: &str) -> Option<&EquationRecord> {
        self.records.iter().find(|r| r.index == index)
    }

    /// Iterate over the records in file order
    pub fn iter(&self) -> std::slice::Iter<'_, EquationRecord> {
        self.records.iter()
    }

    /// Number of distinct variables
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no variable statements were found
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize all records to a JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

impl<'a> IntoIterator for &'a Equations {
    type Item = &'a EquationRecord;
    type IntoIter = std::slice::Iter<'a, EquationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Equations {
    type Item = EquationRecord;
    type IntoIter = std::vec::IntoIter<EquationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
