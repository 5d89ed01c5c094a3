// internal modules
use crate::application::Application;
use crate::common::{add_strings, attach_input, process_with_sample, Options};
use crate::error::Result;
use crate::templates::{SampleKind, Templates};
use pfmc_equations::Equations;
use pfmc_format::f;
use pfmc_mcapi::{Client, Process};

// external crates
use log::{info, warn};

/// Record every variable declared in `equations.h`
///
/// One `Set Equations: <name>` process is created per variable, each with an
/// `Equations: <name>` output sample. The file is uploaded once and attached
/// to every process.
pub fn create_equations<C: Client>(
    client: &mut C,
    templates: &Templates,
    app: &Application,
    options: &Options,
) -> Result<Vec<Process>> {
    let path = app.equations_file();
    let equations = Equations::from_file(&path)?;

    if equations.is_empty() {
        warn!("No variables found in {}", path.display());
        return Ok(Vec::new());
    }
    info!("Recording {} variables", equations.len());

    let sample_prefix = options.samp_name.as_deref().unwrap_or("Equations");
    let mut processes = Vec::with_capacity(equations.len());
    let mut file = None;

    for record in &equations {
        let (process, _) = process_with_sample(
            client,
            templates.template(SampleKind::Equations),
            &f!("Set Equations: {}", record.name),
            &f!("{sample_prefix}: {}", record.name),
        )?;

        let kind = record.kind.to_string();
        let equation_kind = record.equation_kind.to_string();
        add_strings(
            client,
            &process.id,
            &[
                ("Variable Name", record.name.as_str()),
                ("Variable Index", record.index.as_str()),
                ("Variable Type", kind.as_str()),
                ("Variable Equation Type", equation_kind.as_str()),
            ],
        )?;

        match file.clone() {
            Some(uploaded) => client.add_files(&process.id, &[uploaded])?,
            None => file = Some(attach_input(client, &path, &process, None)?),
        }

        processes.push(client.get_process(&process.id)?);
    }

    Ok(processes)
}
