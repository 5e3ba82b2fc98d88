use anyhow::Result;
use bam_lib::BamClient;
use clap::Args;

use crate::output::{print_records, OutputFormat};

#[derive(Args)]
pub struct PolicyOpsArgs {
    /// First auction date, YYYY-MM-DD
    #[arg(long)]
    pub from: String,

    /// Last auction date, YYYY-MM-DD. Omit for no upper bound
    #[arg(long, default_value = "")]
    pub to: String,

    /// Instrument name or acronym (see `bam instruments`). Omit for all
    #[arg(long, default_value = "")]
    pub instrument: String,
}

#[derive(Args)]
pub struct SettlementArgs {
    /// Settlement date of the auction session, YYYY-MM-DD
    #[arg(long)]
    pub date: String,
}

pub async fn run_policy_ops(
    args: &PolicyOpsArgs,
    client: &BamClient,
    format: &OutputFormat,
) -> Result<()> {
    let records = client
        .monetary_policy_results(&args.from, &args.to, &args.instrument)
        .await?;
    print_records(&records, format)
}

pub async fn run_issuances(
    args: &SettlementArgs,
    client: &BamClient,
    format: &OutputFormat,
) -> Result<()> {
    let records = client.treasury_bill_issuances(&args.date).await?;
    print_records(&records, format)
}

pub async fn run_exchanges(
    args: &SettlementArgs,
    client: &BamClient,
    format: &OutputFormat,
) -> Result<()> {
    let records = client.treasury_bill_exchanges(&args.date).await?;
    print_records(&records, format)
}

pub async fn run_buybacks(
    args: &SettlementArgs,
    client: &BamClient,
    format: &OutputFormat,
) -> Result<()> {
    let records = client.treasury_bill_buybacks(&args.date).await?;
    print_records(&records, format)
}
