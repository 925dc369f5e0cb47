use crate::args::{BoardFormat, RandomArgs, RuleFormat, RunArgs};
use color_eyre::{eyre::WrapErr, Result};
use ltlsim_lib::{seeded_rng, Board, Grid, RuleConfig};
use serde::Serialize;
use std::{fs, path::Path};

/// A board in JSON output.
#[derive(Debug, Serialize)]
struct BoardOutput<'a> {
    rule: String,
    generation: u64,
    population: usize,
    cells: &'a Grid,
}

/// Read a JSON rules file.
fn load_rules(path: &Path) -> Result<RuleConfig> {
    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read rules file {}", path.display()))?;
    let rule = serde_json::from_str(&json)
        .wrap_err_with(|| format!("Invalid rules file {}", path.display()))?;
    Ok(rule)
}

/// Read a JSON start grid.
fn load_grid(path: &Path) -> Result<Grid> {
    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read start board {}", path.display()))?;
    let grid = serde_json::from_str(&json)
        .wrap_err_with(|| format!("Invalid start board {}", path.display()))?;
    Ok(grid)
}

/// A simulation run from the command line.
#[derive(Debug)]
pub struct App {
    /// The board being simulated.
    pub board: Board,
    /// Number of generations to run.
    pub generations: u64,
    /// Output format of the final board.
    pub format: BoardFormat,
}

impl App {
    /// Create a new [`App`] from the command line arguments.
    pub fn new(args: RunArgs) -> Result<Self> {
        let rule = match &args.rules {
            Some(path) => load_rules(path)?,
            None => args.config.parse_rule()?,
        };

        if !rule.to_rule().check_conditions() {
            log::warn!("Some conditions of {rule} exceed the neighborhood size and can never be met");
        }

        let board = match &args.start {
            Some(path) => Board::with_cells(rule, load_grid(path)?)?,
            None => Board::random(
                rule,
                args.config.size,
                args.config.alive,
                &mut args.config.rng(),
            )?,
        };

        Ok(Self {
            board,
            generations: args.generations,
            format: args.format,
        })
    }

    /// Run the simulation for the requested number of generations.
    pub fn run(&mut self) {
        log::info!(
            "Running {} generations on a {}x{} board",
            self.generations,
            self.board.size(),
            self.board.size()
        );

        for _ in 0..self.generations {
            self.board.step();
            log::debug!(
                "Generation {}: population {}",
                self.board.generation(),
                self.board.population()
            );
        }
    }

    /// The current board in the requested format.
    pub fn output(&self) -> Result<String> {
        match self.format {
            BoardFormat::Rle => Ok(self.board.rle()),
            BoardFormat::Json => {
                let output = BoardOutput {
                    rule: self.board.rule().to_string(),
                    generation: self.board.generation(),
                    population: self.board.population(),
                    cells: self.board.cells(),
                };
                let mut json = serde_json::to_string(&output)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

/// Draw a random rule and format it.
pub fn random_rule(args: &RandomArgs) -> Result<String> {
    let rule = RuleConfig::random(&mut seeded_rng(args.seed));
    log::debug!("Random rule: {rule:?}");

    match args.format {
        RuleFormat::Rule => Ok(rule.to_string()),
        RuleFormat::Json => Ok(serde_json::to_string_pretty(&rule)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Cli, Command};
    use clap::Parser;

    fn run_args(args: &[&str]) -> RunArgs {
        let cli = Cli::try_parse_from(["ltlsim", "run"].iter().chain(args)).unwrap();
        match cli.command {
            Command::Run(args) => args,
            Command::Random(_) => panic!("expected the run command"),
        }
    }

    #[test]
    fn test_run_rle() {
        let mut app = App::new(run_args(&["-s", "20", "-a", "60", "--seed", "1", "-n", "5"])).unwrap();
        assert_eq!(app.board.population(), 60);

        app.run();
        assert_eq!(app.board.generation(), 5);

        let rle = app.output().unwrap();
        assert!(rle.starts_with("x = 20, y = 20, rule = R1,C2,M0,S2-3,B3,NM\n"));
        assert!(rle.trim_end().ends_with('!'));
    }

    #[test]
    fn test_run_is_reproducible() {
        let args = ["-r", "R2,C4,M1,S3-6,B4-5,NN", "-s", "16", "--seed", "11", "-n", "8"];
        let mut a = App::new(run_args(&args)).unwrap();
        let mut b = App::new(run_args(&args)).unwrap();
        a.run();
        b.run();
        assert_eq!(a.board.cells(), b.board.cells());
    }

    #[test]
    fn test_run_json() {
        let mut app = App::new(run_args(&["-s", "8", "-a", "10", "--seed", "2", "-n", "0", "-f", "json"]))
            .unwrap();
        app.run();

        let json: serde_json::Value = serde_json::from_str(&app.output().unwrap()).unwrap();
        assert_eq!(json["rule"], "R1,C2,M0,S2-3,B3,NM");
        assert_eq!(json["generation"], 0);
        assert_eq!(json["population"], 10);
        assert_eq!(json["cells"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_missing_rules_file() {
        let args = run_args(&["--rules", "/nonexistent/rules.json"]);
        assert!(App::new(args).is_err());
    }

    #[test]
    fn test_random_rule() {
        let args = RandomArgs {
            seed: Some(4),
            format: RuleFormat::Rule,
        };
        let rule = random_rule(&args).unwrap();
        assert_eq!(rule.parse::<RuleConfig>().unwrap().to_string(), rule);
        assert_eq!(random_rule(&args).unwrap(), rule);

        let args = RandomArgs {
            seed: Some(4),
            format: RuleFormat::Json,
        };
        let json = random_rule(&args).unwrap();
        assert_eq!(serde_json::from_str::<RuleConfig>(&json).unwrap().to_string(), rule);
    }
}
