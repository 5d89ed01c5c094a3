// standard library
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// external crates
use log::{debug, warn};

/// Recorded in place of anything that could not be determined
pub const UNKNOWN: &str = "unknown";

/// A PRISMS-PF application directory
///
/// Applications live two levels below the PRISMS-PF root, e.g.
/// `prisms-pf/applications/allenCahn`, which holds the `version` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Directory holding `parameters.in` and `equations.h`
    pub dir: PathBuf,
}

impl Application {
    /// Application in `dir`, which is not checked until a file is read
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Input parameters file, `parameters.in`
    pub fn parameters_file(&self) -> PathBuf {
        self.dir.join("parameters.in")
    }

    /// Equations file, `equations.h`
    pub fn equations_file(&self) -> PathBuf {
        self.dir.join("equations.h")
    }

    /// The PRISMS-PF `version` file, two directories up
    pub fn version_file(&self) -> PathBuf {
        self.dir.join("..").join("..").join("version")
    }

    /// Name of the application directory
    pub fn name(&self) -> String {
        let name = self
            .dir
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()));

        name.unwrap_or_else(|| {
            warn!("Could not resolve the name of {}", self.dir.display());
            UNKNOWN.to_string()
        })
    }

    /// Contents of the `version` file, trimmed
    pub fn version(&self) -> String {
        let path = self.version_file();
        match fs::read_to_string(&path) {
            Ok(text) => text.trim().to_string(),
            Err(_) => {
                warn!(
                    "Did not find the version file at {}, recording \"{UNKNOWN}\"",
                    path.display()
                );
                UNKNOWN.to_string()
            }
        }
    }

    /// Commit hash of the repository holding the application
    pub fn git_hash(&self) -> String {
        let mut command = Command::new("git");
        command.args(["rev-parse", "HEAD"]).current_dir(&self.dir);
        probe(command).unwrap_or_else(|| {
            warn!("Did not find git information, recording \"{UNKNOWN}\"");
            UNKNOWN.to_string()
        })
    }
}

/// Name of the machine running the command
pub fn hostname() -> String {
    probe(Command::new("hostname")).unwrap_or_else(|| {
        warn!("Did not find the computer name, recording \"{UNKNOWN}\"");
        UNKNOWN.to_string()
    })
}

/// Trimmed stdout of a successful command
fn probe(mut command: Command) -> Option<String> {
    debug!("Running {command:?}");
    let output = command.output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    match text.is_empty() {
        true => None,
        false => Some(text),
    }
}
