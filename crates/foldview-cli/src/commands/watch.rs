use crate::cli::WatchArgs;
use crate::error::{CliError, Result};
use crate::ui::PhaseBoard;
use foldview::core::models::report::{JobStage, StatusReport};
use std::path::Path;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

pub async fn run(args: WatchArgs) -> Result<()> {
    if args.interval_ms == 0 {
        return Err(CliError::Argument(
            "--interval-ms must be greater than zero".to_string(),
        ));
    }

    info!("Watching job status at {:?}", &args.status);
    let board = PhaseBoard::new();

    // One loop, one await per tick: a slow render delays the next poll
    // instead of overlapping it, so a stale payload can never be drawn
    // after a newer one.
    let mut interval = tokio::time::interval(Duration::from_millis(args.interval_ms));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let report = match read_report(&args.status) {
            Ok(report) => report,
            Err(CliError::FileParsing { path, source }) => {
                // The service rewrites the file in place; a torn read shows
                // up as malformed JSON. Keep the last rendered state and
                // retry on the next tick.
                warn!("Unreadable status payload at {:?}: {}", path, source);
                continue;
            }
            Err(e) => return Err(e),
        };
        debug!("Status payload: {:?}", report);

        if report.is_terminal() || args.once {
            board.finish(&report);
            print_outcome(&report);
            return Ok(());
        }
        board.render(&report);
    }
}

fn read_report(path: &Path) -> Result<StatusReport> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

fn print_outcome(report: &StatusReport) {
    match report.status {
        JobStage::Completed => println!("✓ {}", fallback(&report.message, "Job completed.")),
        JobStage::Failed => println!("✗ {}", fallback(&report.message, "Job failed.")),
        JobStage::Submitted | JobStage::Running => {
            println!("Job in progress: {:.1}%", report.progress.clamp(0.0, 100.0));
        }
    }
}

fn fallback<'a>(message: &'a str, default: &'a str) -> &'a str {
    if message.is_empty() { default } else { message }
}
