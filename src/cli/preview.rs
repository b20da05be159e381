//! Preview command - show what a publication would do

use crate::cli::options::OptionArgs;
use crate::cli::style::{Stream, Stylize, arrow, bullet, hyperlink_url, item_label, with_spinner};
use anstream::println;
use staticpub_admin::error::Result;
use staticpub_admin::publication::PublicationService;
use staticpub_admin::types::{PreviewResponse, TaskAction};

/// Run the preview command
pub async fn run_preview(service: &dyn PublicationService, args: &OptionArgs) -> Result<()> {
    let options = args.resolve()?;
    let preview = with_spinner("Computing preview...", service.preview(&options)).await?;
    print_preview(&preview);
    Ok(())
}

/// Print a preview, one block per item
pub fn print_preview(preview: &PreviewResponse) {
    if preview.summary.is_empty() {
        println!("{}", format!("{} tasks", preview.task_count()).emphasis());
    } else {
        println!("{}", preview.summary.emphasis());
    }

    for record in &preview.tasks {
        println!();
        println!("{} {}", bullet(), item_label(&record.publishable).emphasis());

        if !record.parents.is_empty() {
            let trail: Vec<String> = record.parents.iter().map(item_label).collect();
            println!("  {}", trail.join(" / ").muted());
        }

        for (language, task) in &record.languages {
            let language = if language.is_empty() {
                "neutral"
            } else {
                language.as_str()
            };
            let action = match task.action {
                TaskAction::Post => "post",
                TaskAction::Delete => "delete",
            };
            let target = task.export_url.as_deref().unwrap_or(&task.source_url);
            println!(
                "  {} {} {} {}",
                arrow(),
                language.accent(),
                action,
                hyperlink_url(Stream::Stdout, target).muted()
            );
        }
    }
}
