use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_run_defaults() {
    let cli = Cli::parse_from(["bundle-bench", "run"]);
    match cli.command {
        Commands::Run(args) => {
            assert!(!args.no_build);
            assert!(!args.parallel);
            assert!(args.config.is_none());
        }
        Commands::Init(_) => panic!("Expected Run command"),
    }
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert_eq!(cli.color, ColorChoice::Auto);
    assert!(!cli.no_config);
}

#[test]
fn cli_run_no_build() {
    let cli = Cli::parse_from(["bundle-bench", "run", "--no-build"]);
    match cli.command {
        Commands::Run(args) => assert!(args.no_build),
        Commands::Init(_) => panic!("Expected Run command"),
    }
}

#[test]
fn cli_run_parallel_with_config() {
    let cli = Cli::parse_from(["bundle-bench", "run", "--parallel", "-c", "bench.toml"]);
    match cli.command {
        Commands::Run(args) => {
            assert!(args.parallel);
            assert_eq!(args.config, Some(PathBuf::from("bench.toml")));
        }
        Commands::Init(_) => panic!("Expected Run command"),
    }
}

#[test]
fn cli_run_parallel_conflicts_with_no_build() {
    let result = Cli::try_parse_from(["bundle-bench", "run", "--no-build", "--parallel"]);
    assert!(result.is_err());
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "bundle-bench",
        "run",
        "-vv",
        "--quiet",
        "--color",
        "never",
        "--no-config",
    ]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert_eq!(cli.color, ColorChoice::Never);
    assert!(cli.no_config);
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["bundle-bench", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".bundle-bench.toml"));
            assert!(!args.force);
        }
        Commands::Run(_) => panic!("Expected Init command"),
    }
}

#[test]
fn cli_init_with_output_and_force() {
    let cli = Cli::parse_from(["bundle-bench", "init", "-o", "custom.toml", "--force"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from("custom.toml"));
            assert!(args.force);
        }
        Commands::Run(_) => panic!("Expected Init command"),
    }
}

#[test]
fn cli_rejects_unknown_color() {
    let result = Cli::try_parse_from(["bundle-bench", "--color", "rainbow", "run"]);
    assert!(result.is_err());
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["bundle-bench"]).is_err());
}
