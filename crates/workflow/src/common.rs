// standard library
use std::path::Path;

// internal modules
use crate::error::Result;
use pfmc_mcapi::{Client, Direction, FileRef, Measurement, Process, Sample};

// external crates
use log::{debug, info};

/// Settings shared by the workflows
///
/// Not every workflow uses every field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    /// Override the default process name
    pub proc_name: Option<String>,
    /// Override the default output sample name
    pub samp_name: Option<String>,
    /// Number of cores used by the simulation
    pub num_cores: Option<i64>,
    /// Existing samples to use as simulation inputs
    pub input_sample_ids: Vec<String>,
}

/// Create a process from a template, rename it and give it one output sample
pub(crate) fn process_with_sample<C: Client>(
    client: &mut C,
    template_id: &str,
    process_name: &str,
    sample_name: &str,
) -> Result<(Process, Sample)> {
    info!("The template ID is: {template_id}");
    let process = client.create_process_from_template(template_id)?;
    client.rename_process(&process.id, process_name)?;

    let sample = client
        .create_samples(&process.id, &[sample_name])?
        .into_iter()
        .next()
        .ok_or_else(|| pfmc_mcapi::Error::SampleNotFound(sample_name.to_string()))?;

    debug!("{} -> {} ({})", process.id, sample.id, sample.name);
    Ok((client.get_process(&process.id)?, sample))
}

/// Add string measurements in order
pub(crate) fn add_strings<C: Client>(
    client: &mut C,
    process_id: &str,
    measurements: &[(&str, &str)],
) -> Result<()> {
    for (attribute, value) in measurements {
        client.add_measurement(process_id, Measurement::string(attribute, value))?;
    }
    Ok(())
}

/// Upload an input file, attach it to the process and link it to the sample
pub(crate) fn attach_input<C: Client>(
    client: &mut C,
    path: &Path,
    process: &Process,
    sample: Option<&Sample>,
) -> Result<FileRef> {
    let file = client.upload_file(path, Direction::In)?;
    client.add_files(&process.id, &[file.clone()])?;
    if let Some(sample) = sample {
        client.link_files(&sample.id, &[file.clone()])?;
    }
    Ok(file)
}
