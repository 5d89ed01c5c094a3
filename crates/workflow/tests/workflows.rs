//! Integration tests running each workflow against a local journal

use std::fs;

use pfmc_mcapi::{Client, Journal, Value};
use pfmc_workflow::*;
use rstest::{fixture, rstest};
use tempfile::TempDir;

/// PRISMS-PF checkout layout with a single application
struct Checkout {
    _root: TempDir,
    app: Application,
}

#[fixture]
fn checkout() -> Checkout {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("applications").join("allenCahn");
    fs::create_dir_all(&dir).unwrap();

    fs::copy("./data/version", root.path().join("version")).unwrap();
    fs::copy("./data/app/parameters.in", dir.join("parameters.in")).unwrap();
    fs::copy("./data/app/equations.h", dir.join("equations.h")).unwrap();

    Checkout {
        _root: root,
        app: Application::new(dir),
    }
}

#[fixture]
fn templates() -> Templates {
    Templates::default()
}

fn cores(n: i64) -> Options {
    Options {
        num_cores: Some(n),
        ..Default::default()
    }
}

fn string(value: &str) -> Value {
    Value::String(value.to_string())
}

#[rstest]
fn numerical_parameters(checkout: Checkout, templates: Templates) {
    let mut journal = Journal::default();
    let process = create_numerical_parameters(
        &mut journal,
        &templates,
        &checkout.app,
        &Options::default(),
    )
    .unwrap();

    assert_eq!(process.name, "Set Numerical Parameters");
    assert_eq!(process.template_id, templates.numerical_parameters);
    assert_eq!(process.measurements.len(), 11);
    assert_eq!(process.measurement("Number of dimensions"), Some(&Value::Integer(2)));
    assert_eq!(process.measurement("Time step"), Some(&Value::Number(0.02)));

    let sample = journal.find_sample(&process.output_samples[0]).unwrap();
    assert_eq!(sample.name, "Numerical Parameters");
    assert_eq!(sample.files, process.files);
    assert_eq!(journal.files.len(), 1);
}

#[rstest]
fn model_parameters_with_names(checkout: Checkout, templates: Templates) {
    let mut journal = Journal::default();
    let options = Options {
        proc_name: Some("Allen-Cahn constants".into()),
        samp_name: Some("Constants".into()),
        ..Default::default()
    };
    let process =
        create_model_parameters(&mut journal, &templates, &checkout.app, &options).unwrap();

    assert_eq!(process.name, "Allen-Cahn constants");
    assert_eq!(journal.samples[0].name, "Constants");

    let attributes: Vec<&str> = process
        .measurements
        .iter()
        .map(|m| m.attribute.as_str())
        .collect();
    assert_eq!(attributes, ["MnV", "KnV", "Dc", "Refine"]);
    assert_eq!(process.measurement("KnV"), Some(&string("2.5")));
    assert_eq!(process.measurement("Dc"), Some(&string("(1.0, 0, 0, 1.0)")));
}

#[rstest]
fn software(checkout: Checkout, templates: Templates) {
    let mut journal = Journal::default();
    let process =
        create_software(&mut journal, &templates, &checkout.app, &Options::default()).unwrap();

    assert_eq!(process.name, "Set Software");
    assert_eq!(process.measurement("Simulation Software Name"), Some(&string("PRISMS-PF")));
    assert_eq!(
        process.measurement("Simulation Software App Name"),
        Some(&string("allenCahn"))
    );
    assert_eq!(process.measurement("Simulation Software Version"), Some(&string("2.0.1")));
    assert!(process.measurement("Simulation Software Git Hash").is_some());
    assert!(process.files.is_empty());
}

#[rstest]
fn one_process_per_equation(checkout: Checkout, templates: Templates) {
    let mut journal = Journal::default();
    let processes =
        create_equations(&mut journal, &templates, &checkout.app, &Options::default()).unwrap();

    let names: Vec<&str> = processes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Set Equations: n", "Set Equations: u"]);

    let u = &processes[1];
    assert_eq!(u.measurement("Variable Index"), Some(&string("3")));
    assert_eq!(u.measurement("Variable Type"), Some(&string("VECTOR")));
    assert_eq!(
        u.measurement("Variable Equation Type"),
        Some(&string("TIME_INDEPENDENT"))
    );
    assert_eq!(journal.find_sample(&u.output_samples[0]).unwrap().name, "Equations: u");

    // uploaded once, attached to both
    assert_eq!(journal.files.len(), 1);
    assert!(processes.iter().all(|p| p.files == ["file-1"]));
}

#[rstest]
#[case(None)]
#[case(Some(0))]
#[case(Some(-4))]
fn environment_requires_cores(templates: Templates, #[case] num_cores: Option<i64>) {
    let mut journal = Journal::default();
    let options = Options {
        num_cores,
        ..Default::default()
    };
    let result = create_environment(&mut journal, &templates, &options);
    assert!(matches!(result, Err(Error::InvalidCoreCount(_))));
    assert!(journal.calls.is_empty());
}

#[rstest]
fn environment(templates: Templates) {
    let mut journal = Journal::default();
    let process = create_environment(&mut journal, &templates, &cores(32)).unwrap();
    assert_eq!(process.name, "Set Computing Environment");
    assert_eq!(process.measurement("Number of simulation cores"), Some(&string("32")));
    assert!(process.measurement("Computer name").is_some());
}

#[rstest]
fn full_simulation_links_every_input(checkout: Checkout, templates: Templates) {
    let mut journal = Journal::default();
    let processes = full_simulation(&mut journal, &templates, &checkout.app, &cores(4)).unwrap();

    let names: Vec<&str> = processes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Set Numerical Parameters",
            "Set Model Parameters",
            "Set Computing Environment",
            "Set Equations: n",
            "Set Equations: u",
            "Set Software",
            "Run Simulation"
        ]
    );

    let simulation = processes.last().unwrap();
    assert_eq!(simulation.template_id, templates.simulation);
    assert_eq!(simulation.input_samples.len(), 6);
    assert!(simulation.output_samples.is_empty());
}

#[rstest]
fn full_simulation_checks_cores_first(checkout: Checkout, templates: Templates) {
    let mut journal = Journal::default();
    let result = full_simulation(&mut journal, &templates, &checkout.app, &Options::default());
    assert!(matches!(result, Err(Error::InvalidCoreCount(-1))));
    assert!(journal.processes.is_empty());
}

#[rstest]
fn simulation_from_existing_samples(checkout: Checkout, templates: Templates) {
    let mut journal = Journal::default();
    create_software(&mut journal, &templates, &checkout.app, &Options::default()).unwrap();
    create_environment(&mut journal, &templates, &cores(1)).unwrap();

    let ids = vec!["samp-1".to_string(), "samp-2".to_string()];
    let simulation = simulation_from_ids(&mut journal, &templates, &ids)
        .unwrap()
        .unwrap();
    assert_eq!(simulation.name, "Run Simulation");
    assert_eq!(simulation.input_samples, ids);

    // an unknown id aborts before creating anything
    let before = journal.processes.len();
    let missing = vec!["samp-1".to_string(), "samp-99".to_string()];
    assert!(simulation_from_ids(&mut journal, &templates, &missing)
        .unwrap()
        .is_none());
    assert_eq!(journal.processes.len(), before);
}

#[rstest]
fn unique_lookup_after_workflows(checkout: Checkout, templates: Templates) {
    let mut journal = Journal::default();
    create_equations(&mut journal, &templates, &checkout.app, &Options::default()).unwrap();
    create_software(&mut journal, &templates, &checkout.app, &Options::default()).unwrap();

    let software = find_unique_output_sample(&journal, &templates, SampleKind::Software)
        .unwrap()
        .unwrap();
    assert_eq!(software.name, "Software");

    // two equation processes, so no unique sample
    assert!(find_unique_output_sample(&journal, &templates, SampleKind::Equations)
        .unwrap()
        .is_none());
}

#[rstest]
fn missing_input_file(templates: Templates) {
    let dir = tempfile::tempdir().unwrap();
    let app = Application::new(dir.path());
    let mut journal = Journal::default();

    let result = create_numerical_parameters(&mut journal, &templates, &app, &Options::default());
    assert!(matches!(result, Err(Error::Parameters(_))));

    let result = create_equations(&mut journal, &templates, &app, &Options::default());
    assert!(matches!(result, Err(Error::Equations(_))));
    assert!(journal.calls.is_empty());
}

#[rstest]
fn template_overrides_are_used(checkout: Checkout) {
    let templates = Templates::from_json(r#"{"software": "test_Software"}"#).unwrap();
    let mut journal = Journal::default();
    let process =
        create_software(&mut journal, &templates, &checkout.app, &Options::default()).unwrap();
    assert_eq!(process.template_id, "test_Software");
    assert_eq!(journal.processes_with_template("test_Software").unwrap().len(), 1);
}

#[rstest]
fn unreadable_numerical_value_creates_nothing(templates: Templates) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("parameters.in"), "set Subdivisions X = 3.5\n").unwrap();
    let app = Application::new(dir.path());
    let mut journal = Journal::default();

    let result = create_numerical_parameters(&mut journal, &templates, &app, &Options::default());
    assert!(matches!(result, Err(Error::Parameters(_))));
    assert!(journal.calls.is_empty());

    let result = full_simulation(&mut journal, &templates, &app, &cores(4));
    assert!(matches!(result, Err(Error::Parameters(_))));
    assert!(journal.calls.is_empty());
}

#[rstest]
fn full_simulation_checks_equations_first(checkout: Checkout, templates: Templates) {
    fs::remove_file(checkout.app.equations_file()).unwrap();
    let mut journal = Journal::default();

    let result = full_simulation(&mut journal, &templates, &checkout.app, &cores(4));
    assert!(matches!(result, Err(Error::Equations(_))));
    assert!(journal.calls.is_empty());
    assert!(journal.processes.is_empty());
}
