// internal modules
use crate::application::hostname;
use crate::common::{add_strings, process_with_sample, Options};
use crate::error::{Error, Result};
use crate::templates::{SampleKind, Templates};
use pfmc_mcapi::{Client, Process};

/// Record the machine the simulation runs on
///
/// The number of cores must be given and greater than zero. This is checked
/// before anything is created.
pub fn create_environment<C: Client>(
    client: &mut C,
    templates: &Templates,
    options: &Options,
) -> Result<Process> {
    let cores = options.num_cores.unwrap_or(-1);
    if cores <= 0 {
        return Err(Error::InvalidCoreCount(cores));
    }

    let (process, _) = process_with_sample(
        client,
        templates.template(SampleKind::Environment),
        "Set Computing Environment",
        options.samp_name.as_deref().unwrap_or("Computing Environment"),
    )?;

    let cores = cores.to_string();
    let computer = hostname();
    add_strings(
        client,
        &process.id,
        &[
            ("Number of simulation cores", cores.as_str()),
            ("Computer name", computer.as_str()),
        ],
    )?;

    Ok(client.get_process(&process.id)?)
}
