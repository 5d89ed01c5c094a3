// standard library
use std::path::Path;

// internal modules
use crate::error::Result;
use crate::model::{Direction, FileRef, Measurement, Process, Sample};

/// Calls made against the Materials Commons platform within one experiment
///
/// Every method either acts on the remote state or fails. Lookups return
/// owned copies so callers always see the state after their own changes.
pub trait Client {
    /// Create a new, empty process from a template
    fn create_process_from_template(&mut self, template_id: &str) -> Result<Process>;

    /// Set the display name of a process
    fn rename_process(&mut self, process_id: &str, name: &str) -> Result<()>;

    /// Create output samples of a process, one per name
    fn create_samples(&mut self, process_id: &str, names: &[&str]) -> Result<Vec<Sample>>;

    /// Add a measurement to a process
    fn add_measurement(&mut self, process_id: &str, measurement: Measurement) -> Result<()>;

    /// Upload a local file to the project
    ///
    /// The file must exist at the time of the call.
    fn upload_file(&mut self, path: &Path, direction: Direction) -> Result<FileRef>;

    /// Attach uploaded files to a process
    fn add_files(&mut self, process_id: &str, files: &[FileRef]) -> Result<()>;

    /// Link uploaded files to a sample
    fn link_files(&mut self, sample_id: &str, files: &[FileRef]) -> Result<()>;

    /// Use existing samples as inputs of a process
    fn add_input_samples(&mut self, process_id: &str, samples: &[Sample]) -> Result<()>;

    /// Current state of a process
    fn get_process(&self, process_id: &str) -> Result<Process>;

    /// Every process in the experiment, oldest first
    fn all_processes(&self) -> Result<Vec<Process>>;

    /// Any sample in the experiment by id
    fn find_sample(&self, sample_id: &str) -> Result<Sample>;

    /// Processes created from a specific template
    fn processes_with_template(&self, template_id: &str) -> Result<Vec<Process>> {
        Ok(self
            .all_processes()?
            .into_iter()
            .filter(|p| p.template_id == template_id)
            .collect())
    }
}
