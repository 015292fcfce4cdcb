//! Notipost CLI entry point

use std::env;
use std::process::ExitCode;

use notipost::cli::{run_oneshot, Presenter, EXIT_USAGE_ERROR};
use notipost::domain::NotificationRequest;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match NotificationRequest::parse(args) {
        Ok(request) => run_oneshot(request).await,
        Err(e) => {
            let presenter = Presenter::new();
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_USAGE_ERROR)
        }
    }
}
