mod backup;
mod cli;
mod config;
mod database;
mod error;
mod log;
mod notify;
mod storage;
mod web;

use dotenv::dotenv;
use error::Result;
use notify::EmailNotifier;
use std::env;
use std::process::ExitCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};
use web::AppState;

const HTTP_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    log::init();

    match run_app().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_app() -> Result<()> {
    let app_config = config::load()?;
    let backend = storage::create_backend(&app_config).await?;
    let notifier = Box::new(EmailNotifier::new(
        app_config.smtp.clone(),
        app_config.notify_recipients.clone(),
    ));
    let state = Arc::new(AppState {
        config: app_config,
        backend,
        notifier,
    });

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        install_ctrl_c_handler();
        info!("No subcommand given, starting HTTP task server");
        web::start_server(state, HTTP_PORT).await
    } else {
        cli::run(state, &args).await
    }
}

fn install_ctrl_c_handler() {
    let count = Arc::new(AtomicUsize::new(0));

    let result = ctrlc::set_handler(move || {
        if count.fetch_add(1, Ordering::SeqCst) == 0 {
            println!("\nShutdown signal received. Press Ctrl+C again to force exit...");
        } else {
            println!("\nForce exiting...");
            std::process::exit(130);
        }
    });
    if let Err(e) = result {
        warn!("Could not install Ctrl-C handler: {}", e);
    }
}
