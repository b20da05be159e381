//! State command - show the progress of an export

use crate::cli::style::{self, Stylize, item_label, task_marker, with_spinner};
use anstream::println;
use indicatif::ProgressBar;
use staticpub_admin::error::{Error, Result};
use staticpub_admin::publication::PublicationService;
use staticpub_admin::types::{ExportState, ExportStateResponse, TaskState};
use std::time::Duration;
use tracing::debug;

/// Delay between export state polls
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// How long `--watch` follows an export before giving up
pub const WATCH_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Run the state command
pub async fn run_state(service: &dyn PublicationService, export_id: u64, watch: bool) -> Result<()> {
    let state = if watch {
        watch_export(service, export_id, WATCH_TIMEOUT).await?
    } else {
        with_spinner("Fetching export state...", service.export_state(export_id)).await?
    };

    print_state(export_id, &state);
    Ok(())
}

/// Poll an export until it completes or `limit` elapses
pub async fn watch_export(
    service: &dyn PublicationService,
    export_id: u64,
    limit: Duration,
) -> Result<ExportStateResponse> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style::spinner_style());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = tokio::time::timeout(limit, poll_export(service, export_id, &spinner)).await;
    spinner.finish_and_clear();

    outcome.map_err(|_| {
        Error::Timeout(format!(
            "export #{export_id} did not complete within {}s",
            limit.as_secs()
        ))
    })?
}

async fn poll_export(
    service: &dyn PublicationService,
    export_id: u64,
    spinner: &ProgressBar,
) -> Result<ExportStateResponse> {
    loop {
        let state = service.export_state(export_id).await?;
        let done = state.tasks.len() - state.count(TaskState::Pending);
        debug!("export {export_id}: {} ({done}/{})", state.state, state.tasks.len());

        if state.state == ExportState::Completed {
            return Ok(state);
        }

        spinner.set_message(format!(
            "Export #{export_id} {}: {done}/{} tasks",
            state.state,
            state.tasks.len()
        ));
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Print export state and per-task status
pub fn print_state(export_id: u64, state: &ExportStateResponse) {
    println!(
        "{} {}",
        format!("Export #{export_id}:").emphasis(),
        style::export_state(state.state)
    );
    println!(
        "  {} succeeded, {} failed, {} pending",
        state.count(TaskState::Success).to_string().accent(),
        state.count(TaskState::Failed).to_string().accent(),
        state.count(TaskState::Pending).to_string().accent()
    );

    for task in &state.tasks {
        let language = task.language.as_deref().unwrap_or("neutral");
        println!(
            "  {} {} {}",
            task_marker(task.state),
            item_label(&task.item),
            language.accent()
        );
        if let Some(message) = &task.error_message {
            println!("    {}", message.error().for_stdout());
        }
    }
}
