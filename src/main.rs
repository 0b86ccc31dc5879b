#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod cli;
mod config;
mod error;
mod fetch;
mod ocr;
mod parse;
mod report;
mod schedule;
mod site;

use std::process::ExitCode;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::Parser;

use crate::{
    cli::Cli,
    config::{Config, Schedule},
};

pub use error::Result;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Skipped,
    Built,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();
    match run(&cli, Utc::now()).await {
        Ok(outcome) => {
            log::debug!("{outcome:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, now: DateTime<Utc>) -> Result<Outcome> {
    let tz = schedule::parse_time_zone(&cli.tz)?;
    let config = Config::from_env()?;
    let now = now.with_timezone(&tz);
    if !schedule::is_target_time(&now, config.schedule, cli.force) {
        log::info!("Not build time yet ({})", now.format("%a %H:%M %Z"));
        println!("{}", skip_message(config.schedule, tz));
        return Ok(Outcome::Skipped);
    }

    let recognizer = ocr::detect();
    site::build_site(&config, &cli.site_dir, tz, recognizer.as_ref()).await?;
    println!("Built site into: {}", cli.site_dir.display());
    Ok(Outcome::Built)
}

fn skip_message(schedule: Schedule, tz: Tz) -> String {
    format!(
        "Skipping: builds run on weekdays at {:02}:{:02} {tz} (use --force to override).",
        schedule.hour, schedule.minute
    )
}
