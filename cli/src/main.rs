mod app;
mod args;

use crate::{
    app::{random_rule, App},
    args::{Cli, Command},
};
use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Cli::parse_and_validate();

    match args.command {
        Command::Run(args) => {
            let mut app = App::new(args)?;
            app.run();
            print!("{}", app.output()?);
        }
        Command::Random(args) => println!("{}", random_rule(&args)?),
    }

    Ok(())
}
