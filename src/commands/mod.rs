//! Command-line interface and dispatch.

pub mod clear;
pub mod init;
pub mod log;
pub mod push;
pub mod start;
pub mod status;
pub mod stop;
pub mod summary;
pub mod tasks;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Show the currently active task")]
    Status,
    #[command(about = "Show today's log")]
    Log,
    #[command(about = "Show today's per-task summary")]
    Summary,
    #[command(about = "Start logging time for a task", arg_required_else_help = true)]
    Start(start::StartArgs),
    #[command(about = "Stop logging time")]
    Stop,
    #[command(about = "Delete logged intervals")]
    Clear(clear::ClearArgs),
    #[command(about = "Push unpushed intervals to the Jira worklog API")]
    Push,
    #[command(about = "List assigned open subtasks")]
    Tasks,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Status => status::cmd(),
            Commands::Log => log::cmd(),
            Commands::Summary => summary::cmd(),
            Commands::Start(args) => start::cmd(args),
            Commands::Stop => stop::cmd(),
            Commands::Clear(args) => clear::cmd(args),
            Commands::Push => push::cmd().await,
            Commands::Tasks => tasks::cmd().await,
        }
    }
}
