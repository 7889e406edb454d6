use cofat_core::PageParameters;

use crate::commands::common::normalize_page_url;
use crate::error::CliError;

pub fn run_params(page_url: &str, as_json: bool) -> Result<(), CliError> {
    let page_url = normalize_page_url(page_url)?;
    let params = PageParameters::from_page_url(&page_url);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&params)?);
    } else {
        for line in format_params_lines(&params) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn format_params_lines(params: &PageParameters) -> Vec<String> {
    vec![
        format!(
            "ActualiteId: {}",
            params.actualite_id.as_deref().unwrap_or("(none)")
        ),
        format!(
            "CofatList:   {}",
            params.cofat_list.as_deref().unwrap_or("(none)")
        ),
    ]
}
