use carbonintensity_api::{Endpoint, Error};
use serde::Serialize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct EndpointRow {
    #[tabled(rename = "Operation")]
    #[serde(rename = "operation")]
    name: String,
    #[tabled(rename = "Method")]
    #[serde(rename = "method")]
    method: String,
    #[tabled(rename = "Path")]
    #[serde(rename = "path")]
    template: String,
    #[tabled(rename = "Params")]
    #[serde(rename = "params")]
    params: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "description")]
    description: String,
}

// -- Row builders --

fn build_endpoint_rows(endpoints: &[&Endpoint]) -> Vec<EndpointRow> {
    endpoints
        .iter()
        .map(|e| EndpointRow {
            name: e.name.to_string(),
            method: e.method.to_string(),
            template: e.template(),
            params: e.params().map(|p| p.name()).collect::<Vec<_>>().join(" "),
            description: e.description.to_string(),
        })
        .collect()
}

pub fn endpoint_listing(endpoints: &[&Endpoint]) -> Vec<EndpointRow> {
    build_endpoint_rows(endpoints)
}

// -- Table output --

pub fn print_endpoints_table(endpoints: &[&Endpoint]) {
    println!("{}", Table::new(build_endpoint_rows(endpoints)));
}

// -- Markdown output --

pub fn print_endpoints_markdown(endpoints: &[&Endpoint]) {
    let mut table = Table::new(build_endpoint_rows(endpoints));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_payload(payload: &Value, compact: bool) {
    if compact {
        println!("{}", payload);
    } else {
        print_json(payload);
    }
}

pub fn print_error(err: &Error) {
    eprintln!("{}", err.to_error_object());
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbonintensity_api::Operation;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("anything"), OutputFormat::Table);
    }

    #[test]
    fn test_build_endpoint_rows_mapping() {
        let endpoints = [Operation::Regional24hForwardPostcode.endpoint()];
        let rows = build_endpoint_rows(&endpoints);
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.name, "regional-fw24h-postcode");
        assert_eq!(row.method, "GET");
        assert_eq!(row.template, "/regional/intensity/{from}/fw24h/postcode/{postcode}");
        assert_eq!(row.params, "from postcode");
    }

    #[test]
    fn test_row_without_params() {
        let rows = build_endpoint_rows(&[Operation::IntensityFactors.endpoint()]);
        assert_eq!(rows[0].params, "");
        assert_eq!(rows[0].template, "/intensity/factors");
    }

    #[test]
    fn test_json_listing_uses_lowercase_keys() {
        let rows = endpoint_listing(&[Operation::CurrentIntensity.endpoint()]);
        let value = serde_json::to_value(&rows).unwrap();
        assert_eq!(value[0]["operation"], "current-intensity");
        assert_eq!(value[0]["path"], "/intensity");
    }

    #[test]
    fn test_table_contains_headers() {
        let table = Table::new(build_endpoint_rows(&[Operation::RegionalWales.endpoint()]))
            .to_string();
        assert!(table.contains("Operation"));
        assert!(table.contains("/regional/wales"));
    }
}
