use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "plagcheck", version, about = "Text similarity checker based on longest common subsequence")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset. `-v` outranks the
    /// config's debug toggle, which outranks `--quiet`.
    pub fn log_level(&self, config_debug: bool) -> &'static str {
        match (self.verbose, config_debug, self.quiet) {
            (0, false, true) => "warn",
            (0, false, false) => "info",
            (0, true, _) | (1, _, _) => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web form
    Serve(ServeArgs),
    /// Compare two texts from the command line
    Compare(CompareArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

impl Commands {
    /// Config file the command runs with, loaded before logging starts.
    pub fn config_path(&self) -> Option<&str> {
        match self {
            Commands::Serve(args) => args.config.as_deref(),
            Commands::Compare(_) | Commands::Validate(_) => None,
        }
    }
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port [default: 5000]
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct CompareArgs {
    /// First text (a path with --file)
    pub text1: String,

    /// Second text (a path with --file)
    pub text2: String,

    /// Treat both arguments as paths to UTF-8 files
    #[arg(short, long)]
    pub file: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
