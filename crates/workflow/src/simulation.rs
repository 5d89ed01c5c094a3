// internal modules
use crate::application::Application;
use crate::common::Options;
use crate::environment::create_environment;
use crate::equations::create_equations;
use crate::error::{Error, Result};
use crate::lookup::find_sample_by_id;
use crate::model::create_model_parameters;
use crate::numerical::create_numerical_parameters;
use crate::software::create_software;
use crate::templates::{SampleKind, Templates};
use pfmc_equations::Equations;
use pfmc_mcapi::{Client, Process, Sample};
use pfmc_parameters::Parameters;

// external crates
use log::{error, info};

/// Create the `Run Simulation` process consuming the given samples
pub fn create_simulation<C: Client>(
    client: &mut C,
    templates: &Templates,
    inputs: &[Sample],
) -> Result<Process> {
    let template_id = templates.template(SampleKind::Simulation);
    info!("The template ID is: {template_id}");

    let process = client.create_process_from_template(template_id)?;
    client.rename_process(&process.id, "Run Simulation")?;

    info!("Adding {} input sample(s)", inputs.len());
    client.add_input_samples(&process.id, inputs)?;

    Ok(client.get_process(&process.id)?)
}

/// Create the simulation from existing samples given by id
///
/// Returns `None` without creating anything if any id cannot be found.
pub fn simulation_from_ids<C: Client>(
    client: &mut C,
    templates: &Templates,
    sample_ids: &[String],
) -> Result<Option<Process>> {
    let mut inputs = Vec::with_capacity(sample_ids.len());
    for id in sample_ids {
        match find_sample_by_id(client, id)? {
            Some(sample) => inputs.push(sample),
            None => {
                error!("Aborting");
                return Ok(None);
            }
        }
    }
    Ok(Some(create_simulation(client, templates, &inputs)?))
}

/// Create every input process a simulation needs
///
/// In order: numerical parameters, model parameters, computing environment,
/// one process per equation, software. Only `num_cores` is taken from
/// `options`, the default names are always used.
///
/// The core count and both input files are checked before the first process
/// is created.
pub fn create_inputs<C: Client>(
    client: &mut C,
    templates: &Templates,
    app: &Application,
    options: &Options,
) -> Result<Vec<Process>> {
    let cores = options.num_cores.unwrap_or(-1);
    if cores <= 0 {
        return Err(Error::InvalidCoreCount(cores));
    }
    let defaults = Options {
        num_cores: Some(cores),
        ..Default::default()
    };

    Parameters::from_file(app.parameters_file())?.numerical_parameters()?;
    Equations::from_file(app.equations_file())?;

    info!("Creating input samples/processes for the simulation");
    let mut processes = vec![
        create_numerical_parameters(client, templates, app, &defaults)?,
        create_model_parameters(client, templates, app, &defaults)?,
        create_environment(client, templates, &defaults)?,
    ];
    processes.extend(create_equations(client, templates, app, &defaults)?);
    processes.push(create_software(client, templates, app, &defaults)?);

    Ok(processes)
}

/// Create every input process and then the simulation consuming them
///
/// The simulation is always the last process returned.
pub fn full_simulation<C: Client>(
    client: &mut C,
    templates: &Templates,
    app: &Application,
    options: &Options,
) -> Result<Vec<Process>> {
    let mut processes = create_inputs(client, templates, app, options)?;

    let mut inputs = Vec::new();
    for process in &processes {
        for sample_id in &process.output_samples {
            inputs.push(client.find_sample(sample_id)?);
        }
    }

    info!("Samples created as inputs for the simulation:");
    for sample in &inputs {
        info!("  {} {}", sample.name, sample.id);
    }

    processes.push(create_simulation(client, templates, &inputs)?);
    Ok(processes)
}
