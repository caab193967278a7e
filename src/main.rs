//! cfgload CLI entry point.

use clap::Parser;

use cfgload::cli::Cli;
use cfgload::infrastructure::logging::LoggerImpl;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let _logger = match LoggerImpl::init(&cli.log_config()) {
        Ok(logger) => logger,
        Err(err) => cfgload::cli::handle_error(err, json),
    };

    if let Err(err) = cfgload::cli::run(cli) {
        cfgload::cli::handle_error(err, json);
    }
}
