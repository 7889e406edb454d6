use cofat_core::workflow::delete_item;
use cofat_core::{DeleteOutcome, RequestContext, SharePointClient, SiteConfig};

use crate::commands::common::{confirm_on_terminal, normalize_page_url};
use crate::error::CliError;

pub async fn run_delete(
    config: &SiteConfig,
    page_url: &str,
    assume_yes: bool,
) -> Result<(), CliError> {
    let page_url = normalize_page_url(page_url)?;
    let ctx = RequestContext::from_page_url(config, &page_url);
    let client = SharePointClient::from_config(config)?;

    let outcome =
        delete_item(&client, &ctx, |prompt| assume_yes || confirm_on_terminal(prompt)).await?;

    println!("{}", format_delete_outcome(&outcome));
    Ok(())
}

pub fn format_delete_outcome(outcome: &DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::Deleted { redirect_to } => redirect_to.clone(),
        DeleteOutcome::Declined => "Delete canceled".to_string(),
    }
}
