// standard library
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

// internal modules
use crate::client::Client;
use crate::error::{Error, Result};
use crate::model::{Direction, FileRef, Measurement, Process, Sample};
use pfmc_format::f;

// external crates
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

/// A single client call, as recorded in the journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum Call {
    /// [Client::create_process_from_template]
    CreateProcess {
        process_id: String,
        template_id: String,
    },
    /// [Client::rename_process]
    RenameProcess {
        process_id: String,
        name: String,
    },
    /// [Client::create_samples]
    CreateSamples {
        process_id: String,
        sample_ids: Vec<String>,
    },
    /// [Client::add_measurement]
    AddMeasurement {
        process_id: String,
        measurement: Measurement,
    },
    /// [Client::upload_file]
    UploadFile {
        file_id: String,
        path: PathBuf,
        direction: Direction,
    },
    /// [Client::add_files]
    AddFiles {
        process_id: String,
        file_ids: Vec<String>,
    },
    /// [Client::link_files]
    LinkFiles {
        sample_id: String,
        file_ids: Vec<String>,
    },
    /// [Client::add_input_samples]
    AddInputSamples {
        process_id: String,
        sample_ids: Vec<String>,
    },
}

/// Local [Client] that records an experiment as a journal of calls
///
/// Ids are assigned locally as `proc-N`, `samp-N` and `file-N`, counting from
/// 1 in order of creation. The entities and the ordered call log are saved
/// together as JSON so that the session can be continued later, or replayed
/// against the platform by an uploader.
///
/// ```rust
/// # use pfmc_mcapi::{Client, Journal, Call};
/// let mut journal = Journal::default();
///
/// let process = journal.create_process_from_template("template").unwrap();
/// let samples = journal.create_samples(&process.id, &["Software"]).unwrap();
///
/// assert_eq!(process.id, "proc-1");
/// assert_eq!(samples[0].id, "samp-1");
/// assert_eq!(journal.calls.len(), 2);
/// assert!(matches!(journal.calls[1], Call::CreateSamples { .. }));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    /// Processes in order of creation
    pub processes: Vec<Process>,
    /// Samples in order of creation
    pub samples: Vec<Sample>,
    /// Uploaded files
    pub files: Vec<FileRef>,
    /// Every call made, in order
    pub calls: Vec<Call>,
}

impl Journal {
    /// Load a saved journal, or start a new one if `path` does not exist
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.exists() {
            true => Self::load(path),
            false => {
                info!("Starting new journal {}", path.display());
                Ok(Self::default())
            }
        }
    }

    /// Load a saved journal
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading journal {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        let journal: Self = serde_json::from_reader(reader)?;
        info!(
            "Loaded journal {} ({} calls)",
            path.display(),
            journal.calls.len()
        );
        Ok(journal)
    }

    /// Write the journal to `path` as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        info!("Saved journal {} ({} calls)", path.display(), self.calls.len());
        Ok(())
    }

    /// Serialise the journal to a pretty JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn record(&mut self, call: Call) {
        trace!("{call:?}");
        self.calls.push(call);
    }

    fn process_mut(&mut self, process_id: &str) -> Result<&mut Process> {
        self.processes
            .iter_mut()
            .find(|p| p.id == process_id)
            .ok_or_else(|| Error::ProcessNotFound(process_id.to_string()))
    }

    fn sample_mut(&mut self, sample_id: &str) -> Result<&mut Sample> {
        self.samples
            .iter_mut()
            .find(|s| s.id == sample_id)
            .ok_or_else(|| Error::SampleNotFound(sample_id.to_string()))
    }
}

/// Append ids not already in the list
fn extend_unique(ids: &mut Vec<String>, new: &[String]) {
    for id in new {
        if !ids.contains(id) {
            ids.push(id.clone());
        }
    }
}

impl Client for Journal {
    fn create_process_from_template(&mut self, template_id: &str) -> Result<Process> {
        let process = Process {
            id: f!("proc-{}", self.processes.len() + 1),
            name: template_id.to_string(),
            template_id: template_id.to_string(),
            ..Default::default()
        };
        self.processes.push(process.clone());
        self.record(Call::CreateProcess {
            process_id: process.id.clone(),
            template_id: template_id.to_string(),
        });
        Ok(process)
    }

    fn rename_process(&mut self, process_id: &str, name: &str) -> Result<()> {
        self.process_mut(process_id)?.name = name.to_string();
        self.record(Call::RenameProcess {
            process_id: process_id.to_string(),
            name: name.to_string(),
        });
        Ok(())
    }

    fn create_samples(&mut self, process_id: &str, names: &[&str]) -> Result<Vec<Sample>> {
        // fail before creating anything
        self.process_mut(process_id)?;

        let first = self.samples.len() + 1;
        let samples: Vec<Sample> = names
            .iter()
            .enumerate()
            .map(|(n, name)| Sample {
                id: f!("samp-{}", first + n),
                name: name.to_string(),
                files: Vec::new(),
            })
            .collect();
        let sample_ids: Vec<String> = samples.iter().map(|s| s.id.clone()).collect();

        self.samples.extend(samples.iter().cloned());
        extend_unique(&mut self.process_mut(process_id)?.output_samples, &sample_ids);
        self.record(Call::CreateSamples {
            process_id: process_id.to_string(),
            sample_ids,
        });
        Ok(samples)
    }

    fn add_measurement(&mut self, process_id: &str, measurement: Measurement) -> Result<()> {
        self.process_mut(process_id)?
            .measurements
            .push(measurement.clone());
        self.record(Call::AddMeasurement {
            process_id: process_id.to_string(),
            measurement,
        });
        Ok(())
    }

    fn upload_file(&mut self, path: &Path, direction: Direction) -> Result<FileRef> {
        let path = path
            .canonicalize()
            .map_err(|_| Error::FileNotFound(path.to_path_buf()))?;

        let file = FileRef {
            id: f!("file-{}", self.files.len() + 1),
            path,
            direction,
        };
        info!("Uploading {} as {}", file.path.display(), file.id);
        self.files.push(file.clone());
        self.record(Call::UploadFile {
            file_id: file.id.clone(),
            path: file.path.clone(),
            direction,
        });
        Ok(file)
    }

    fn add_files(&mut self, process_id: &str, files: &[FileRef]) -> Result<()> {
        let file_ids: Vec<String> = files.iter().map(|f| f.id.clone()).collect();
        extend_unique(&mut self.process_mut(process_id)?.files, &file_ids);
        self.record(Call::AddFiles {
            process_id: process_id.to_string(),
            file_ids,
        });
        Ok(())
    }

    fn link_files(&mut self, sample_id: &str, files: &[FileRef]) -> Result<()> {
        let file_ids: Vec<String> = files.iter().map(|f| f.id.clone()).collect();
        extend_unique(&mut self.sample_mut(sample_id)?.files, &file_ids);
        self.record(Call::LinkFiles {
            sample_id: sample_id.to_string(),
            file_ids,
        });
        Ok(())
    }

    fn add_input_samples(&mut self, process_id: &str, samples: &[Sample]) -> Result<()> {
        let sample_ids: Vec<String> = samples.iter().map(|s| s.id.clone()).collect();
        for id in &sample_ids {
            self.find_sample(id)?;
        }
        extend_unique(&mut self.process_mut(process_id)?.input_samples, &sample_ids);
        self.record(Call::AddInputSamples {
            process_id: process_id.to_string(),
            sample_ids,
        });
        Ok(())
    }

    fn get_process(&self, process_id: &str) -> Result<Process> {
        self.processes
            .iter()
            .find(|p| p.id == process_id)
            .cloned()
            .ok_or_else(|| Error::ProcessNotFound(process_id.to_string()))
    }

    fn all_processes(&self) -> Result<Vec<Process>> {
        Ok(self.processes.clone())
    }

    fn find_sample(&self, sample_id: &str) -> Result<Sample> {
        self.samples
            .iter()
            .find(|s| s.id == sample_id)
            .cloned()
            .ok_or_else(|| Error::SampleNotFound(sample_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_count_from_one() {
        let mut journal = Journal::default();
        let a = journal.create_process_from_template("a").unwrap();
        let b = journal.create_process_from_template("b").unwrap();
        assert_eq!((a.id.as_str(), b.id.as_str()), ("proc-1", "proc-2"));

        let samples = journal.create_samples(&b.id, &["x", "y"]).unwrap();
        let more = journal.create_samples(&a.id, &["z"]).unwrap();
        assert_eq!(samples[1].id, "samp-2");
        assert_eq!(more[0].id, "samp-3");
        assert_eq!(journal.get_process("proc-2").unwrap().output_samples, ["samp-1", "samp-2"]);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut journal = Journal::default();
        assert!(matches!(
            journal.rename_process("proc-9", "x"),
            Err(Error::ProcessNotFound(_))
        ));
        assert!(matches!(
            journal.create_samples("proc-9", &["x"]),
            Err(Error::ProcessNotFound(_))
        ));
        assert!(matches!(journal.find_sample("samp-1"), Err(Error::SampleNotFound(_))));

        // failed calls are not recorded
        assert!(journal.calls.is_empty());
        assert!(journal.samples.is_empty());
    }

    #[test]
    fn inputs_must_exist() {
        let mut journal = Journal::default();
        let process = journal.create_process_from_template("t").unwrap();
        let ghost = Sample {
            id: "samp-7".into(),
            ..Default::default()
        };
        let result = journal.add_input_samples(&process.id, &[ghost]);
        assert!(matches!(result, Err(Error::SampleNotFound(_))));
        assert_eq!(journal.calls.len(), 1);
    }

    #[test]
    fn new_process_is_named_after_template() {
        let mut journal = Journal::default();
        let process = journal.create_process_from_template("global_Software").unwrap();
        assert_eq!(process.name, "global_Software");
        journal.rename_process(&process.id, "Set Software").unwrap();
        assert_eq!(journal.get_process(&process.id).unwrap().name, "Set Software");
    }
}
