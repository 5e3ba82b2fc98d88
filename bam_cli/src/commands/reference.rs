use anyhow::Result;
use bam_lib::validation::INSTRUMENTS;
use bam_lib::{BamClient, Endpoint};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_rows, OutputFormat};

#[derive(Tabled, Serialize)]
struct InstrumentRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Acronym")]
    #[serde(rename = "Acronym")]
    acronym: String,
}

#[derive(Tabled, Serialize)]
struct EndpointRow {
    #[tabled(rename = "Operation")]
    #[serde(rename = "Operation")]
    operation: String,
    #[tabled(rename = "Key")]
    #[serde(rename = "Key")]
    key: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

fn build_instrument_rows() -> Vec<InstrumentRow> {
    INSTRUMENTS
        .iter()
        .map(|(name, acronym)| InstrumentRow {
            name: name.to_string(),
            acronym: acronym.to_string(),
        })
        .collect()
}

fn build_endpoint_rows(client: &BamClient) -> Result<Vec<EndpointRow>> {
    Endpoint::ALL
        .iter()
        .map(|endpoint| -> Result<EndpointRow> {
            Ok(EndpointRow {
                operation: endpoint.name().to_string(),
                key: endpoint.service().config_key().to_string(),
                url: client.endpoint_url(*endpoint)?,
            })
        })
        .collect()
}

pub fn run_instruments(format: &OutputFormat) -> Result<()> {
    print_rows(&build_instrument_rows(), format)
}

pub fn run_endpoints(client: &BamClient, format: &OutputFormat) -> Result<()> {
    print_rows(&build_endpoint_rows(client)?, format)
}
