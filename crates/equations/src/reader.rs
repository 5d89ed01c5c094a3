// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// internal modules
use crate::comments::{is_blank_or_line_comment, strip_block_comments};
use crate::error::Result;
use crate::parsers::{attribute_statement, Statement};
use crate::record::{Attribute, EquationRecord};

// external crates
use log::{debug, trace};

/// Read every variable record from an `equations.h` file
///
/// Records are returned in order of the first appearance of their index. A
/// file with no recognised statements gives an empty list. Failing to open or
/// read the file is the only error.
///
/// ```rust, no_run
/// # use pfmc_equations::read_equations_file;
/// let records = read_equations_file("./equations.h").unwrap();
/// for record in &records {
///     println!("{} is a {} variable", record.name, record.kind);
/// }
/// ```
pub fn read_equations_file<P: AsRef<Path>>(path: P) -> Result<Vec<EquationRecord>> {
    let file = File::open(path)?;
    read_equations(BufReader::new(file))
}

/// Read every variable record from any buffered source
///
/// Same as [read_equations_file()] for text that is already in memory.
///
/// ```rust
/// # use pfmc_equations::read_equations;
/// let text = "set_variable_name(0,\"c\");\n/* set_variable_name(1,\"n\"); */";
/// let records = read_equations(text.as_bytes()).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name, "c");
/// ```
pub fn read_equations<R: BufRead>(reader: R) -> Result<Vec<EquationRecord>> {
    let mut scanner = Scanner::new();
    for line in reader.lines() {
        scanner.scan_line(&line?);
    }
    debug!("Found {} variable records", scanner.records.len());
    Ok(scanner.records)
}

/// Index and value of a setter call for `attribute`, if `line` is one
///
/// The value has surrounding double quotes removed. Malformed calls are
/// logged and treated as a non-match.
///
/// ```rust
/// # use pfmc_equations::{match_attribute, Attribute};
/// let line = "set_variable_name\t\t(1,\"mu\");";
/// assert_eq!(match_attribute(line, Attribute::Name), Some(("1", "mu")));
/// assert_eq!(match_attribute(line, Attribute::Kind), None);
/// assert_eq!(match_attribute("set_variable_name(1 \"mu\");", Attribute::Name), None);
/// ```
pub fn match_attribute(line: &str, attribute: Attribute) -> Option<(&str, &str)> {
    match attribute_statement(line, attribute) {
        Statement::Setter(index, value) => Some((index, value)),
        Statement::Unrelated | Statement::Malformed => None,
    }
}

/// Apply a single attribute statement to a collection of records
///
/// If `line` (already trimmed and free of comments) calls the setter for
/// `attribute`, the record for its index is updated, or created with defaults
/// and appended if this is the first mention. Anything else leaves `records`
/// unchanged.
///
/// ```rust
/// # use pfmc_equations::{apply_attribute, Attribute};
/// let mut records = Vec::new();
/// apply_attribute(&mut records, "set_variable_type(0,VECTOR);", Attribute::Kind);
/// apply_attribute(&mut records, "set_variable_name(0,\"u\");", Attribute::Name);
/// apply_attribute(&mut records, "set_variable_name(0,\"u\");", Attribute::Kind);
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name, "u");
/// assert_eq!(records[0].kind.to_string(), "VECTOR");
/// ```
pub fn apply_attribute(records: &mut Vec<EquationRecord>, line: &str, attribute: Attribute) {
    let Some((index, value)) = match_attribute(line, attribute) else {
        return;
    };

    match records.iter_mut().find(|r| r.index == index) {
        Some(record) => record.set(attribute, value),
        None => {
            let mut record = EquationRecord::new(index);
            record.set(attribute, value);
            records.push(record);
        }
    }
}

/// Line-by-line state for a single pass over a file
struct Scanner {
    in_block_comment: bool,
    records: Vec<EquationRecord>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            in_block_comment: false,
            records: Vec::new(),
        }
    }

    fn scan_line(&mut self, raw: &str) {
        // skipped before block comments are considered at all
        if is_blank_or_line_comment(raw) {
            return;
        }

        let (code, in_block_comment) = strip_block_comments(raw, self.in_block_comment);
        self.in_block_comment = in_block_comment;

        let code = code.trim();
        if code.is_empty() {
            return;
        }
        trace!("Code: {code:?}");

        for attribute in Attribute::ALL {
            apply_attribute(&mut self.records, code, attribute);
        }
    }
}
