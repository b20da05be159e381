//! Publish command - preview, confirm and start a publication

use crate::cli::host::terminal_host;
use crate::cli::options::OptionArgs;
use crate::cli::preview::print_preview;
use crate::cli::state::{WATCH_TIMEOUT, print_state, watch_export};
use crate::cli::style::{Stream, Stylize, check, hyperlink_url, with_spinner};
use anstream::println;
use dialoguer::Confirm;
use staticpub_admin::actions::{
    ActionContext, BEGIN_PUBLICATION_ID, BeginPublicationAction, PUBLICATION_STEP, ViewState,
};
use staticpub_admin::error::{Error, Result};
use staticpub_admin::host::Navigation;
use staticpub_admin::publication::PublicationService;
use std::sync::Arc;

/// Run the publish command
pub async fn run_publish(
    service: Arc<dyn PublicationService>,
    args: &OptionArgs,
    yes: bool,
    watch: bool,
) -> Result<()> {
    let options = args.resolve()?;

    let preview = with_spinner("Computing preview...", service.preview(&options)).await?;
    print_preview(&preview);
    println!();

    if preview.task_count() == 0 {
        println!("{}", "Nothing to publish".muted());
        return Ok(());
    }

    if !yes && !confirm(preview.task_count())? {
        println!("{}", "Publication cancelled".muted());
        return Ok(());
    }

    // Same flow as the admin wizard: the user is on the publication step
    // with a loaded, ready view
    let (host, navigation) = terminal_host(&[PUBLICATION_STEP]);
    let action = BeginPublicationAction::new(BEGIN_PUBLICATION_ID, Arc::clone(&service));
    let ctx = ActionContext {
        model: None,
        state: ViewState::Ready,
        publication_options: Some(options),
    };

    let response = with_spinner("Starting publication...", action.begin(&ctx, &host)).await?;
    let export_id = response.export_id;

    println!(
        "{} Export {} started",
        check(),
        format!("#{export_id}").accent()
    );
    println!(
        "  {}",
        format!("admin path: /{}", navigation.current_path().join("/")).muted()
    );

    if watch {
        let state = watch_export(service.as_ref(), export_id, WATCH_TIMEOUT).await?;
        println!();
        print_state(export_id, &state);

        let zip = service.zip_url(export_id)?;
        println!(
            "  {} {}",
            "ZIP destinations:".muted(),
            hyperlink_url(Stream::Stdout, zip.as_str())
        );
    } else {
        println!(
            "  {}",
            format!("Follow progress with: staticpub state {export_id} --watch").muted()
        );
    }

    Ok(())
}

fn confirm(task_count: usize) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!("Publish {task_count} tasks?"))
        .default(false)
        .interact()
        .map_err(|e| Error::Io(std::io::Error::other(e)))
}
