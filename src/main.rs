use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use iconfig2yaml::{ConfigFile, CreateMode, Dump, EmitterOptions, Serializer, YamlEmitter};

/// Convert an irssi configuration file to YAML.
///
/// The YAML document is written to standard output.
#[derive(Debug, Parser)]
#[command(name = "iconfig2yaml", version)]
struct CliArgs {
    /// Input configuration file.
    #[arg(short = 'i', value_name = "file")]
    input: Option<PathBuf>,

    /// Dump data in YAML's canonical form.
    #[arg(short = 'c')]
    canonical: bool,

    /// Dump data in the Unicode format.
    #[arg(short = 'u')]
    unicode: bool,

    /// Dump data in internal debugging format.
    #[arg(short = 'd')]
    dump: bool,

    /// Enables verbose logging.
    #[arg(short = 'v')]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    if verbose {
        builder
            .filter_level(log::LevelFilter::Off)
            .filter_module("iconfig2yaml::ser", log::LevelFilter::Trace)
            .target(env_logger::Target::Stdout)
            .format(|buf, record| writeln!(buf, "{}", record.args()));
    } else {
        builder
            .filter_level(log::LevelFilter::Off)
            .target(env_logger::Target::Stderr)
            .parse_default_env();
    }
    builder.init();
}

fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            eprintln!("{}", CliArgs::command().render_help());
            return ExitCode::FAILURE;
        }
    };
    init_logging(args.verbose);

    let Some(input) = args.input.clone() else {
        eprintln!("Error: Input file missing");
        eprintln!("{}", CliArgs::command().render_help());
        return ExitCode::FAILURE;
    };

    match run(&args, input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs, input: PathBuf) -> anyhow::Result<()> {
    let config = ConfigFile::open(&input, CreateMode::Never)?;
    let root = config
        .parse()
        .context("Unable to parse configuration file")?;

    // Unbuffered here: the emitter buffers per document, which keeps the YAML
    // and the -v trace in event order.
    let mut out = io::stdout();

    if args.dump {
        writeln!(out, "Irssi Configuration Dump")?;
        writeln!(out, "========================")?;
        write!(out, "{}", Dump(&root))?;
        writeln!(out, "========================")?;
        out.flush()?;
    }

    let options = EmitterOptions::new()
        .with_canonical(args.canonical)
        .with_unicode(args.unicode);
    let mut serializer = Serializer::new(YamlEmitter::with_options(&mut out, options));
    serializer.serialize_document(&root)?;
    serializer.get_mut().flush()?;

    log::debug!("wrote {} as YAML", config.name());
    Ok(())
}
