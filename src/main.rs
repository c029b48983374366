use clap::Parser;

use bundle_bench::cli::{Cli, Commands};
use bundle_bench::commands::{run_bench, run_init};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Run(args) => run_bench(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}
