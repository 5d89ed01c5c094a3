// internal modules
use crate::application::Application;
use crate::common::{attach_input, process_with_sample, Options};
use crate::error::Result;
use crate::templates::{SampleKind, Templates};
use pfmc_mcapi::{Client, Measurement, Process};
use pfmc_parameters::{NumericalValue, Parameters};

/// Record the numerical parameters of `parameters.in`
///
/// Creates a `Set Numerical Parameters` process with a `Numerical Parameters`
/// output sample, one typed measurement per numerical parameter present, and
/// the uploaded `parameters.in` attached to both. Nothing is created if any
/// numerical parameter cannot be read.
pub fn create_numerical_parameters<C: Client>(
    client: &mut C,
    templates: &Templates,
    app: &Application,
    options: &Options,
) -> Result<Process> {
    let path = app.parameters_file();
    let numerical = Parameters::from_file(&path)?.numerical_parameters()?;

    let (process, sample) = process_with_sample(
        client,
        templates.template(SampleKind::NumericalParameters),
        "Set Numerical Parameters",
        options.samp_name.as_deref().unwrap_or("Numerical Parameters"),
    )?;

    for parameter in numerical {
        let measurement = match parameter.value {
            NumericalValue::Integer(v) => Measurement::integer(&parameter.description, v),
            NumericalValue::Number(v) => Measurement::number(&parameter.description, v),
        };
        client.add_measurement(&process.id, measurement)?;
    }

    attach_input(client, &path, &process, Some(&sample))?;
    Ok(client.get_process(&process.id)?)
}
