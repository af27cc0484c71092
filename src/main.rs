use std::process::ExitCode;
use timl::commands::Cli;
use timl::msg_error;

#[tokio::main]
async fn main() -> ExitCode {
    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            msg_error!(err);
            ExitCode::FAILURE
        }
    }
}
