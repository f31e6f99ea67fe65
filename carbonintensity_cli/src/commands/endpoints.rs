use anyhow::Result;
use clap::Args;

use crate::output::{
    print_endpoints_markdown, print_endpoints_table, print_json, OutputFormat,
};

#[derive(Args)]
pub struct EndpointsArgs {
    /// Only list operations whose name contains this text
    #[arg(long)]
    pub filter: Option<String>,
}

pub fn run(args: &EndpointsArgs, format: &OutputFormat) -> Result<()> {
    let endpoints: Vec<_> = carbonintensity_api::endpoint::ENDPOINTS
        .iter()
        .filter(|e| match &args.filter {
            Some(f) => e.name.contains(f.as_str()),
            None => true,
        })
        .collect();

    match format {
        OutputFormat::Table => print_endpoints_table(&endpoints),
        OutputFormat::Markdown => print_endpoints_markdown(&endpoints),
        OutputFormat::Json => print_json(&crate::output::endpoint_listing(&endpoints)),
    }

    Ok(())
}
