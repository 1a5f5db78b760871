//! appforge - demo app generator
//!
//! Command line front end: picks a mini-application template from an idea,
//! a category or at random and writes the host page with it mounted.

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::helpers::GlobalOptions;

fn main() {
    let cli = Cli::parse();
    appforge::logging::init(cli.verbose);

    let options = GlobalOptions {
        config: cli.config,
        seed: cli.seed,
    };

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(&options, args),
        Commands::Random(args) => commands::random::run(&options, args),
        Commands::List(args) => commands::list::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Classify(args) => commands::classify::run(args),
        Commands::Replay(args) => commands::replay::run(&options, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
