// internal modules
use crate::application::Application;
use crate::common::{attach_input, process_with_sample, Options};
use crate::error::Result;
use crate::templates::{SampleKind, Templates};
use pfmc_mcapi::{Client, Measurement, Process};
use pfmc_parameters::Parameters;

// external crates
use log::debug;

/// Record the model constants of `parameters.in`
///
/// Every constant is recorded as a string measurement, whatever its type.
pub fn create_model_parameters<C: Client>(
    client: &mut C,
    templates: &Templates,
    app: &Application,
    options: &Options,
) -> Result<Process> {
    let path = app.parameters_file();
    let parameters = Parameters::from_file(&path)?;

    let (process, sample) = process_with_sample(
        client,
        templates.template(SampleKind::ModelParameters),
        options.proc_name.as_deref().unwrap_or("Set Model Parameters"),
        options.samp_name.as_deref().unwrap_or("Model Parameters"),
    )?;

    for constant in parameters.model_constants() {
        debug!("{constant}");
        client.add_measurement(
            &process.id,
            Measurement::string(&constant.description, &constant.value),
        )?;
    }

    attach_input(client, &path, &process, Some(&sample))?;
    Ok(client.get_process(&process.id)?)
}
