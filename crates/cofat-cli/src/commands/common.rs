use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::Path;

use cofat_core::{Attachment, SiteConfig};

use crate::error::CliError;

/// Environment configuration with command-line overrides applied.
pub fn load_site_config(
    web_url: Option<String>,
    access_token: Option<String>,
    text_color: Option<String>,
) -> Result<SiteConfig, CliError> {
    Ok(SiteConfig::from_env()?.with_overrides(web_url, access_token, text_color)?)
}

pub fn normalize_page_url(page_url: &str) -> Result<String, CliError> {
    let trimmed = page_url.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyPageUrl)
    } else {
        Ok(trimmed.to_string())
    }
}

/// `-` means "read piped stdin"; anything else is taken literally.
pub fn resolve_content(content: &str) -> Result<String, CliError> {
    if content != "-" {
        return Ok(content.to_string());
    }

    read_piped_stdin()?.ok_or(CliError::EmptyContent)
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_content(&buffer))
}

pub fn normalize_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read a file into an attachment named after the file.
pub fn read_attachment(path: &Path) -> Result<Attachment, CliError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| CliError::AttachmentName(path.to_path_buf()))?
        .to_string();
    let bytes = std::fs::read(path).map_err(|source| CliError::AttachmentRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Attachment::new(file_name, bytes))
}

/// Ask a yes/no question on the terminal. Anything but `y`/`yes` declines.
pub fn confirm_on_terminal(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => is_affirmative(&answer),
        Err(_) => false,
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
