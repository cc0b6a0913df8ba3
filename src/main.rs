use std::process::exit;

use addressbook::config::DEFAULT_LOG_FILTER;
use addressbook::prelude::{Config, run_app};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = Config::from_env();

    // Logs go to stderr so listings on stdout stay clean
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = run_app(config) {
        eprintln!("{e}");
        exit(1);
    }
}
