//! The interactive run: prompt, search, print.
//!
//! Every failure of the search itself is printed and the run ends normally.
//! Only I/O errors on the prompt streams are returned.

use std::io::{self, BufRead, Write};

use crate::{
    configuration::{SearchSettings, Settings},
    domain::{build_hr_search_query, extract_profile_urls, resolve_company_name, ScoutReport},
    error::SearchError,
    services::TavilyClient,
};

pub async fn run<R: BufRead, W: Write>(
    settings: &Settings,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let api_key = match settings.api_keys.tavily() {
        Ok(api_key) => api_key,
        Err(e) => {
            log::error!("No api key configured");
            writeln!(output, "❌ {}", e)?;
            writeln!(
                output,
                "Please set your Tavily API key in a .env file or as an environment variable."
            )?;
            return Ok(());
        }
    };

    let company_name = prompt_company_name(
        &mut input,
        &mut output,
        &settings.search.default_company,
    )?;
    writeln!(output, "\n🔍 Searching for HR profiles at {}...", company_name)?;

    let query = build_hr_search_query(&company_name);
    writeln!(output, "Executing search with query: {}\n", query)?;

    match search_profiles(api_key, &settings.search, &query).await {
        Ok(urls) => {
            writeln!(output, "Found LinkedIn Profile URLs for HR at {}:", company_name)?;
            write!(output, "{}", ScoutReport::from_urls(urls))?;
        }
        Err(e) => {
            log::error!("Search failed for {}: {:?}", company_name, e);
            writeln!(output, "❌ {}", e)?;
            writeln!(output, "Please check your API key and internet connection.")?;
        }
    }

    Ok(())
}

pub fn prompt_company_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    fallback: &str,
) -> io::Result<String> {
    write!(
        output,
        "Enter the company name (or press Enter for '{}'): ",
        fallback
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(resolve_company_name(&line, fallback).to_string())
}

async fn search_profiles(
    api_key: &str,
    settings: &SearchSettings,
    query: &str,
) -> Result<Vec<String>, SearchError> {
    let client = TavilyClient::new(api_key.to_string(), settings)?;
    let response = client.search(query).await?;

    Ok(extract_profile_urls(response.urls()))
}
