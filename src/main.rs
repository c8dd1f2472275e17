use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use mc_lang_core::release;
use mc_lang_core::utils::download::Http;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let parse = Cli::try_parse().unwrap_or_else(|e| e.exit());
    let config = parse.into_config();

    let fetch = match Http::new() {
        Ok(fetch) => fetch,
        Err(err) => {
            eprintln!("failed to build the http client: {err:?}");
            return ExitCode::FAILURE;
        }
    };

    // the working directory is the output root
    if let Err(err) = release::run(&fetch, &config, Path::new(".")) {
        eprintln!("sync failed: {err:?}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
