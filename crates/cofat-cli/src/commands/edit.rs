use std::path::PathBuf;

use cofat_core::workflow::SaveReport;
use cofat_core::{EditSession, RequestContext, SharePointClient, SiteConfig};

use crate::commands::common::{normalize_page_url, read_attachment, resolve_content};
use crate::error::CliError;

pub struct EditArgs {
    pub page_url: String,
    pub title: String,
    pub content: String,
    pub attachment: Option<PathBuf>,
}

pub async fn run_edit(config: &SiteConfig, args: EditArgs) -> Result<(), CliError> {
    let page_url = normalize_page_url(&args.page_url)?;
    let content = resolve_content(&args.content)?;
    let attachment = args.attachment.as_deref().map(read_attachment).transpose()?;

    let ctx = RequestContext::from_page_url(config, &page_url);
    let client = SharePointClient::from_config(config)?;

    let mut session = EditSession::new().with_text_color(config.text_color.clone());
    session.open();
    session.set_title(args.title)?;
    session.set_content(content)?;
    if let Some(attachment) = attachment {
        session.set_attachment(attachment)?;
    }

    let report = session.save(&client, &ctx).await?;
    for line in format_save_report(&report) {
        println!("{line}");
    }
    Ok(())
}

pub fn format_save_report(report: &SaveReport) -> Vec<String> {
    let mut lines = vec!["Item updated".to_string()];
    if let Some(attachment) = &report.attachment {
        lines.push(format!(
            "Attachments deleted: {} (conflicts skipped: {})",
            attachment.deleted, attachment.conflicts
        ));
        lines.push(format!("Uploaded: {}", attachment.uploaded_file_name));
    }
    lines
}
