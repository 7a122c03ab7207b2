use clap::Parser;
use colored::*;
use std::process;

use oxyshop::api::Dispatcher;
use oxyshop::cli::Args;
use oxyshop::config::Config;
use oxyshop::ui::{display_body, display_error, log_verbose, write_body};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Load configuration
    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            display_error(&e.to_string());
            process::exit(1);
        }
    };

    let descriptor = match args.to_descriptor(&config.defaults) {
        Ok(descriptor) => descriptor,
        Err(e) => {
            display_error(&e.to_string());
            process::exit(1);
        }
    };

    let dispatcher = match Dispatcher::with_timeout(&config.endpoint, config.timeout) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            display_error(&e.to_string());
            process::exit(1);
        }
    };

    log_verbose(
        config.verbose,
        &format!("POST {} as {}", dispatcher.queries_url(), config.credentials.username),
    );
    if config.verbose {
        if let Ok(payload) = descriptor.to_json() {
            log_verbose(true, &format!("Payload: {}", payload));
        }
        if let Some(timeout) = config.timeout {
            log_verbose(true, &format!("Timeout: {}s", timeout.as_secs()));
        }
    }

    let response = match dispatcher.dispatch_raw(&descriptor, &config.credentials).await {
        Ok(response) => response,
        Err(e) => {
            display_error(&e.to_string());
            process::exit(1);
        }
    };

    log_verbose(config.verbose, &format!("HTTP status: {}", response.status));
    if !response.is_success() {
        eprintln!(
            "{}",
            format!("[oxyshop] API answered with status {}", response.status).yellow()
        );
    }

    if let Err(e) = display_body(&response.body, config.pretty) {
        display_error(&e.to_string());
        process::exit(1);
    }

    if let Some(path) = &config.output_file {
        match write_body(path, &response.body) {
            Ok(()) => log_verbose(config.verbose, &format!("Saved response to {}", path.display())),
            Err(e) => {
                display_error(&format!("Failed to write {}: {}", path.display(), e));
                process::exit(1);
            }
        }
    }
}
