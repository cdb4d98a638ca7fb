use anyhow::Result;
use signal_cli::{build_cli, commands, init_tracing, server};
use std::net::SocketAddr;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    let input = |args: &clap::ArgMatches| -> Result<String> {
        let path = args
            .get_one::<PathBuf>("input")
            .ok_or_else(|| anyhow::anyhow!("--input is required"))?;
        commands::read_input(path)
    };
    let config_path = |args: &clap::ArgMatches| args.get_one::<PathBuf>("config").cloned();

    match matches.subcommand() {
        Some(("generate", args)) => {
            let config =
                commands::load_config(config_path(args).as_deref(), args.get_flag("offline"))?;
            let studio = commands::build_studio(config)?;
            println!("{}", commands::generate(&studio, &input(args)?).await?);
        }
        Some(("prompt", args)) => {
            println!("{}", commands::prompt(&input(args)?)?);
        }
        Some(("validate", args)) => {
            println!("{}", commands::validate(&input(args)?, args.get_flag("artifact"))?);
        }
        Some(("schema", args)) => {
            println!("{}", commands::schema(args.get_flag("request"))?);
        }
        Some(("serve", args)) => {
            let port = args
                .get_one::<u16>("port")
                .copied()
                .unwrap_or(signal_cli::cli::DEFAULT_PORT);
            let config = commands::load_config(config_path(args).as_deref(), false)?;
            let studio = commands::build_studio(config)?;
            server::serve(studio, SocketAddr::from(([0, 0, 0, 0], port))).await;
        }
        _ => {
            build_cli().print_help()?;
        }
    }
    Ok(())
}
