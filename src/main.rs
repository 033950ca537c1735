//! provider-info — print a provider's base URL and token.
//!
//! Entry point and error handling boundary. Uses `anyhow` for error
//! propagation; every error ends the process with status 1.

mod cli;

use provider_info::config;
use provider_info::env;
use provider_info::logging;
use provider_info::output;
use provider_info::providers;
use provider_info::resolve;

use std::process;

use anyhow::Result;
use clap::Parser;

use cli::args::Cli;
use config::Config;
use env::Env;

fn main() {
    if let Err(err) = run() {
        // Error messages share stdout with the report.
        println!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();
    logging::init(cli.verbose, &env);

    let work_dir = std::env::current_dir().ok();
    let config = Config::load(work_dir.as_deref(), &env)?;

    let providers = providers::load_providers(cli.json_file(&config))?;
    let provider = providers::lookup_provider(&providers, cli.provider_name(&config))?;
    let resolved = resolve::resolve_provider(provider, &env);

    print!("{}", output::render_report(&resolved));
    Ok(())
}
