// internal modules
use crate::application::Application;
use crate::common::{add_strings, process_with_sample, Options};
use crate::error::Result;
use crate::templates::{SampleKind, Templates};
use pfmc_mcapi::{Client, Process};

/// Name recorded for the simulation software
pub const SOFTWARE_NAME: &str = "PRISMS-PF";

/// Record the software used to run the application
///
/// The version is read from the PRISMS-PF `version` file and the commit from
/// git. Either is recorded as `unknown` if unavailable.
pub fn create_software<C: Client>(
    client: &mut C,
    templates: &Templates,
    app: &Application,
    options: &Options,
) -> Result<Process> {
    let (process, _) = process_with_sample(
        client,
        templates.template(SampleKind::Software),
        "Set Software",
        options.samp_name.as_deref().unwrap_or("Software"),
    )?;

    let app_name = app.name();
    let version = app.version();
    let git_hash = app.git_hash();

    add_strings(
        client,
        &process.id,
        &[
            ("Simulation Software Name", SOFTWARE_NAME),
            ("Simulation Software App Name", app_name.as_str()),
            ("Simulation Software Version", version.as_str()),
            ("Simulation Software Git Hash", git_hash.as_str()),
        ],
    )?;

    Ok(client.get_process(&process.id)?)
}
