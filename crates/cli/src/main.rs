//! Command line recording of PRISMS-PF simulations on Materials Commons
#![doc(hidden)]

// standard library
use std::path::PathBuf;

// Crate modules
use pfmc_equations::Equations;
use pfmc_format::{f, table_heading, table_row, OptionFormat};
use pfmc_mcapi::{Client, Journal, Process};
use pfmc_workflow::*;

// External crates
use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use log::*;

fn main() -> Result<()> {
    // set up the command line interface and match arguments
    let cli: Cli = Cli::parse();

    // set up logging (+2 to make Info the default)
    let verbosity = cli.verbose + 2;
    logging_init(verbosity, cli.quiet)?;

    let app = Application::new(&cli.app);

    // nothing is recorded for a quick look at the equations
    let record = match cli.command {
        Command::ShowEquations { json } => return show_equations(&app, json),
        Command::Record(record) => record,
    };

    let templates = match &cli.templates {
        Some(path) => Templates::from_file(path)?,
        None => Templates::default(),
    };
    let mut journal = Journal::open(&cli.journal)?;

    let created = match record {
        Record::NumericalParameters(args) => match args.create {
            true => vec![create_numerical_parameters(
                &mut journal,
                &templates,
                &app,
                &args.options(),
            )?],
            false => return list(&journal, &templates, SampleKind::NumericalParameters),
        },
        Record::ModelParameters(args) => match args.sample.create {
            true => vec![create_model_parameters(
                &mut journal,
                &templates,
                &app,
                &args.options(),
            )?],
            false => return list(&journal, &templates, SampleKind::ModelParameters),
        },
        Record::Software(args) => match args.create {
            true => vec![create_software(
                &mut journal,
                &templates,
                &app,
                &args.options(),
            )?],
            false => return list(&journal, &templates, SampleKind::Software),
        },
        Record::Equations(args) => match args.create {
            true => create_equations(&mut journal, &templates, &app, &args.options())?,
            false => return list(&journal, &templates, SampleKind::Equations),
        },
        Record::Environment(args) => match args.create {
            true => vec![create_environment(
                &mut journal,
                &templates,
                &args.options(),
            )?],
            false => return list(&journal, &templates, SampleKind::Environment),
        },
        Record::Simulation(args) => match args.cores.create {
            true => simulation(&mut journal, &templates, &app, &args)?,
            false => return list(&journal, &templates, SampleKind::Simulation),
        },
        Record::FullSimulation(args) => match args.create {
            true => full_simulation(&mut journal, &templates, &app, &args.options())?,
            false => return list(&journal, &templates, SampleKind::Simulation),
        },
    };

    for process in &created {
        println!("Created process: {} {}", process.name, process.id);
    }

    journal.save(&cli.journal)?;
    Ok(())
}

/// Create and inspect PRISMS-PF samples and processes on Materials Commons
///
/// Each command records part of a PRISMS-PF application as a process and
/// output sample. Without --create the processes already recorded for the
/// command are listed instead.
///
/// Calls are kept in a local journal (mc-journal.json by default) which is
/// reopened on every run, so samples created earlier can be referred to by id.
///
/// Examples
/// --------
///
///  Record the computing environment:
///     $ mc-prismspf environment --create --num-cores 16
///
///  Record everything for a simulation in one go:
///     $ mc-prismspf full-simulation --create --num-cores 16
///
///  Simulation from samples created earlier:
///     $ mc-prismspf simulation --create --input-sample-ids samp-1 samp-2
///
///  Check what will be read from equations.h:
///     $ mc-prismspf show-equations
#[allow(rustdoc::invalid_rust_codeblocks)]
#[derive(Parser, Debug)]
#[command(
    verbatim_doc_comment,
    arg_required_else_help(true),
    before_help(banner()),
    after_help("Typical use: mc-prismspf full-simulation --create --num-cores 16\n\nNOTE: --help shows more detail and examples"),
    term_width(70),
    override_usage("mc-prismspf [options] <command> [command options]")
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    // * Optional
    /// PRISMS-PF application directory
    ///
    /// Should contain parameters.in and equations.h. The PRISMS-PF version
    /// file is expected two directories above it.
    #[arg(help_heading("Global options"))]
    #[arg(long, global = true)]
    #[arg(value_name = "dir")]
    #[arg(default_value = ".")]
    app: PathBuf,

    /// Journal of recorded calls
    ///
    /// Created if it does not exist, otherwise continued.
    #[arg(help_heading("Global options"))]
    #[arg(long, global = true)]
    #[arg(value_name = "path")]
    #[arg(default_value = "mc-journal.json")]
    journal: PathBuf,

    /// JSON file overriding template ids
    ///
    /// Keyed by command name, e.g. {"software": "global_Software"}. Any
    /// command not listed keeps its default template.
    #[arg(help_heading("Global options"))]
    #[arg(long, global = true)]
    #[arg(value_name = "path")]
    templates: Option<PathBuf>,

    // * Flags
    /// Verbose logging (-v, -vv)
    ///
    /// If specified, the default log level of INFO is increased to DEBUG (-v)
    /// or TRACE (-vv). Errors and Warnings are always logged unless in quiet
    /// (-q) mode.
    #[arg(short, long, global = true)]
    #[arg(action = clap::ArgAction::Count)]
    verbose: u8,

    /// Supress all log output (overrules --verbose)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Record(Record),

    /// Print the records parsed from an equations file
    ShowEquations {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Commands that list or create processes in the journal
#[derive(Subcommand, Debug)]
enum Record {
    /// (sample) PRISMS-PF Numerical Parameters
    ///
    /// Uploads parameters.in and creates an entity (sample) representing the
    /// numerical parameters.
    NumericalParameters(SampleArgs),

    /// (sample) PRISMS-PF Model Parameters
    ///
    /// Uploads parameters.in and creates an entity (sample) representing the
    /// model parameters.
    ModelParameters(NamedArgs),

    /// (sample) PRISMS-PF Software
    ///
    /// Creates an entity (sample) representing the simulation software used
    /// for a phase field calculation.
    Software(SampleArgs),

    /// (sample) PRISMS-PF Equations
    ///
    /// Uploads equations.h and creates an entity (sample) for every variable
    /// and governing equation.
    Equations(SampleArgs),

    /// (sample) PRISMS-PF Computing Environment
    ///
    /// Creates an entity (sample) representing the computing environment.
    Environment(CoresArgs),

    /// (sample) PRISMS-PF Simulation
    ///
    /// Creates an entity representing the simulation itself.
    Simulation(SimulationArgs),

    /// Create every input sample and the simulation
    FullSimulation(CoresArgs),
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// Create the process and sample
    #[arg(long)]
    create: bool,

    /// Set the name of the output sample
    #[arg(long, num_args(1..), value_name = "name")]
    samp_name: Vec<String>,
}

impl SampleArgs {
    fn options(&self) -> Options {
        Options {
            samp_name: joined(&self.samp_name),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
struct NamedArgs {
    #[command(flatten)]
    sample: SampleArgs,

    /// Set the name of the process
    #[arg(long, num_args(1..), value_name = "name")]
    proc_name: Vec<String>,
}

impl NamedArgs {
    fn options(&self) -> Options {
        Options {
            proc_name: joined(&self.proc_name),
            ..self.sample.options()
        }
    }
}

#[derive(Args, Debug)]
struct CoresArgs {
    /// Create the process and sample
    #[arg(long)]
    create: bool,

    /// Number of cores used in the simulation
    #[arg(long, value_name = "n", allow_negative_numbers(true))]
    num_cores: Option<i64>,
}

impl CoresArgs {
    fn options(&self) -> Options {
        Options {
            num_cores: self.num_cores,
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
struct SimulationArgs {
    #[command(flatten)]
    cores: CoresArgs,

    /// Create the simulation process as well as all of the necessary input
    /// samples and processes
    #[arg(long)]
    full_simulation: bool,

    /// Specify input sample ids explicitly
    #[arg(long, num_args(1..), value_name = "id")]
    #[arg(conflicts_with = "full_simulation")]
    input_sample_ids: Vec<String>,
}

/// Words given to a multi-value option as one name
fn joined(words: &[String]) -> Option<String> {
    match words.is_empty() {
        true => None,
        false => Some(words.join(" ")),
    }
}

fn simulation(
    journal: &mut Journal,
    templates: &Templates,
    app: &Application,
    args: &SimulationArgs,
) -> Result<Vec<Process>> {
    if args.full_simulation {
        return Ok(full_simulation(journal, templates, app, &args.cores.options())?);
    }

    if args.input_sample_ids.is_empty() {
        warn!("No --input-sample-ids given, the simulation will have no inputs");
    }

    match simulation_from_ids(journal, templates, &args.input_sample_ids)? {
        Some(process) => Ok(vec![process]),
        None => Err(anyhow!("Input samples not found, nothing created")),
    }
}

/// Print every process recorded for a command
fn list(journal: &Journal, templates: &Templates, kind: SampleKind) -> Result<()> {
    let processes = journal.processes_with_template(templates.template(kind))?;
    if processes.is_empty() {
        info!("No {kind} processes recorded");
        info!("Use '{} --create' to create one", kind.command());
        return Ok(());
    }

    println!("{}", process_heading());
    for process in &processes {
        let sample = match process.output_samples.first() {
            Some(id) => journal.find_sample(id).ok().map(|s| s.name),
            None => None,
        };
        println!("{}", process_row(process, sample));
    }
    Ok(())
}

fn show_equations(app: &Application, json: bool) -> Result<()> {
    let equations = Equations::from_file(app.equations_file())?;

    if json {
        println!("{}", equations.to_json()?);
        return Ok(());
    }

    if equations.is_empty() {
        warn!("No variables found");
    }
    for record in &equations {
        println!("{record}");
    }
    Ok(())
}

/// generates a banner for cli tool consistency
fn banner() -> String {
    let mut s = f!("{:-<1$}\n", "", 70);
    s += &f!("{:^70}\n", "Materials Commons :: PRISMS-PF");
    s += &f!("{:-<1$}", "", 70);
    s
}

fn logging_init(verbosity: u8, quiet: bool) -> Result<()> {
    stderrlog::new()
        .modules(vec![
            module_path!(),
            "pfmc_equations",
            "pfmc_parameters",
            "pfmc_mcapi",
            "pfmc_workflow",
        ])
        .quiet(quiet)
        .verbosity(verbosity as usize)
        .show_level(false)
        .color(stderrlog::ColorChoice::Never)
        .timestamp(stderrlog::Timestamp::Off)
        .init()?;
    Ok(())
}

const PROCESS_COLUMNS: [(&str, usize); 4] = [
    ("name", 28),
    ("sample", 24),
    ("template", 40),
    ("id", 10),
];

fn process_heading() -> String {
    table_heading(&PROCESS_COLUMNS)
}

fn process_row(process: &Process, sample: Option<String>) -> String {
    let sample = sample.display();
    let values = [
        process.name.as_str(),
        sample.as_str(),
        process.template_id.as_str(),
        process.id.as_str(),
    ];
    let columns: Vec<(&str, usize)> = values
        .into_iter()
        .zip(PROCESS_COLUMNS.iter().map(|(_, width)| *width))
        .collect();
    table_row(&columns)
}
