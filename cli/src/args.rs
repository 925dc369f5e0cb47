use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand, ValueEnum};
use ltlsim_lib::Config;
use std::path::PathBuf;

/// A simple tool to simulate Larger than Life cellular automata.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a simulation and print the final board.
    Run(RunArgs),
    /// Print a random rule.
    Random(RandomArgs),
}

/// How to print a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BoardFormat {
    /// Run-length encoded pattern, as used by Golly.
    #[default]
    Rle,
    /// JSON object with the rule, the generation and the rows of the board.
    Json,
}

/// How to print a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RuleFormat {
    /// Rule string in HROT notation.
    #[default]
    Rule,
    /// JSON rules file.
    Json,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: Config,

    /// Read the rule from a JSON rules file instead of a rule string.
    #[arg(long, conflicts_with = "rule_str")]
    pub rules: Option<PathBuf>,

    /// Start from the board in a JSON file, given as a list of rows of 0s and 1s.
    ///
    /// If this is not given, the board is filled at random.
    #[arg(long)]
    pub start: Option<PathBuf>,

    /// Number of generations to run.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub generations: u64,

    /// Output format of the final board.
    #[arg(short, long, value_enum, default_value_t = BoardFormat::Rle)]
    pub format: BoardFormat,
}

#[derive(Debug, Args)]
pub struct RandomArgs {
    /// Random seed.
    ///
    /// If this is not given, the seed is taken from the system's entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format of the rule.
    #[arg(short, long, value_enum, default_value_t = RuleFormat::Rule)]
    pub format: RuleFormat,
}

impl Cli {
    /// Parse and validate the command line arguments.
    pub fn parse_and_validate() -> Self {
        let args = Self::parse();

        match args.command {
            Command::Run(run) => match run.validate() {
                Ok(run) => Self {
                    command: Command::Run(run),
                },
                Err(e) => Self::command().error(ErrorKind::ValueValidation, e).exit(),
            },
            command => Self { command },
        }
    }
}

impl RunArgs {
    /// Check the board configuration.
    fn validate(self) -> Result<Self, ltlsim_lib::ConfigError> {
        let config = self.config.check()?;
        Ok(Self { config, ..self })
    }
}
