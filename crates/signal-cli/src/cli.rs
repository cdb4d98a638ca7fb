//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Default port for `serve`
pub const DEFAULT_PORT: u16 = 3000;

fn input_arg() -> Arg {
    Arg::new("input")
        .long("input")
        .short('i')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON file with { persona, request } ('-' reads stdin)")
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .value_parser(value_parser!(PathBuf))
        .help("TOML file with provider settings")
}

/// Build the `signal-thread` command tree
#[must_use]
pub fn build_cli() -> Command {
    Command::new("signal-thread")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Social campaign generation with a guaranteed-valid fallback")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines on stderr"),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a campaign artifact")
                .arg(input_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("offline")
                        .long("offline")
                        .action(ArgAction::SetTrue)
                        .help("Skip the provider and synthesize locally"),
                ),
        )
        .subcommand(
            Command::new("prompt")
                .about("Print the provider prompt for an input")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate an input, or a candidate artifact with --artifact")
                .arg(input_arg())
                .arg(
                    Arg::new("artifact")
                        .long("artifact")
                        .action(ArgAction::SetTrue)
                        .help("Treat the file as a generated artifact"),
                ),
        )
        .subcommand(
            Command::new("schema")
                .about("Print the JSON schema of the artifact contract")
                .arg(
                    Arg::new("request")
                        .long("request")
                        .action(ArgAction::SetTrue)
                        .help("Print the request schema instead"),
                ),
        )
        .subcommand(
            Command::new("serve")
                .about("Serve POST /api/generate")
                .arg(
                    Arg::new("port")
                        .long("port")
                        .short('p')
                        .default_value("3000")
                        .value_parser(value_parser!(u16))
                        .help("Port to listen on"),
                )
                .arg(config_arg()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn parses_generate() {
        let matches = build_cli()
            .try_get_matches_from(["signal-thread", "generate", "--input", "in.json", "--offline"])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "generate");
        assert!(args.get_flag("offline"));
        assert_eq!(
            args.get_one::<PathBuf>("input").unwrap(),
            &PathBuf::from("in.json")
        );
    }

    #[test]
    fn serve_default_port() {
        let matches = build_cli()
            .try_get_matches_from(["signal-thread", "serve"])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(*args.get_one::<u16>("port").unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn input_is_required() {
        assert!(build_cli()
            .try_get_matches_from(["signal-thread", "prompt"])
            .is_err());
    }
}
