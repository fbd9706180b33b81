use clap::{CommandFactory, Parser, ValueEnum};
use gazetag_cli::commands::Commands;
use gazetag_cli::context::{CliOverrides, GazetagCliContext};
use gazetag_cli::handlers::*;
use gazetag_cli::output::{OutputFormat, output_error_json};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gazetag")]
#[command(about = "Gazetteer span resolution and BILOU tagging", long_about = None)]
#[command(version = gazetag::VERSION)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Directory of gazetteer files, one `<LABEL>.txt` per label
    #[arg(long, short, global = true)]
    gazetteer: Option<PathBuf>,

    /// Output format (table, json); defaults to $GAZETAG_OUTPUT or table
    #[arg(long, short, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Quiet mode (only log errors)
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Render outside tokens as `0` instead of `O`
    #[arg(long, global = true)]
    zero_outside: bool,

    /// Match gazetteer entries ignoring ASCII case
    #[arg(long, short = 'i', global = true)]
    case_insensitive: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Output format - priority: cli arg > env var > default
    fn output_format(&self) -> OutputFormat {
        self.output
            .or_else(|| {
                std::env::var("GAZETAG_OUTPUT")
                    .ok()
                    .and_then(|value| OutputFormat::from_str(&value, true).ok())
            })
            .unwrap_or_default()
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_file: self.config.clone(),
            gazetteer_dir: self.gazetteer.clone(),
            zero_outside: self.zero_outside,
            case_insensitive: self.case_insensitive,
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output_format = cli.output_format();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(cli, output_format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output_error_json(&e, output_format);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, output_format: OutputFormat) -> gazetag::Result<()> {
    match &cli.command {
        Commands::Version => {
            println!("Gazetag CLI v{}", gazetag::VERSION);
            return Ok(());
        }
        Commands::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "gazetag",
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        _ => {}
    }

    let config = cli.overrides().load_config()?;
    let _log_guard = gazetag::logging::init(&config.logging)?;

    let context = if cli.command.needs_gazetteer() {
        Some(GazetagCliContext::new(config.clone())?)
    } else {
        None
    };

    match (cli.command, context) {
        (Commands::Tag(args), Some(ctx)) => handle_tag_command(args, &ctx, output_format),
        (Commands::Match(args), Some(ctx)) => handle_match_command(args, &ctx, output_format),
        (Commands::Labels, Some(ctx)) => handle_labels_command(&ctx, output_format),
        (Commands::Resolve(args), _) => handle_resolve_command(args, &config, output_format),
        _ => Ok(()),
    }
}
