// internal modules
use crate::error::Result;
use crate::templates::{SampleKind, Templates};
use pfmc_mcapi::{Client, Sample};

// external crates
use log::{error, warn};

/// The output sample of the only process created for `kind`
///
/// Returns `None`, with a diagnostic, when there are no such processes or
/// more than one. This is not an error, the caller decides whether to abort.
pub fn find_unique_output_sample<C: Client>(
    client: &C,
    templates: &Templates,
    kind: SampleKind,
) -> Result<Option<Sample>> {
    let candidates = client.processes_with_template(templates.template(kind))?;

    let process = match candidates.as_slice() {
        [process] => process,
        [] => {
            error!("Did not find a {kind} sample");
            warn!(
                "Use '{} --create' to create one, or --{}-id <id> to specify explicitly",
                kind.command(),
                kind.command()
            );
            return Ok(None);
        }
        _ => {
            error!("Found multiple {kind} samples");
            for candidate in &candidates {
                warn!("  {}  id: {}", candidate.name, candidate.id);
            }
            warn!("Use --{}-id <id> to specify explicitly", kind.command());
            return Ok(None);
        }
    };

    let Some(sample_id) = process.output_samples.first() else {
        error!("Process {} has no output sample", process.id);
        return Ok(None);
    };
    Ok(Some(client.find_sample(sample_id)?))
}

/// Any sample in the experiment by id
///
/// Returns `None`, with a diagnostic, if there is no such sample.
pub fn find_sample_by_id<C: Client>(client: &C, sample_id: &str) -> Result<Option<Sample>> {
    match client.find_sample(sample_id) {
        Ok(sample) => Ok(Some(sample)),
        Err(pfmc_mcapi::Error::SampleNotFound(_)) => {
            error!("Did not find a sample with id {sample_id:?}");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
