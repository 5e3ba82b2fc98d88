use anyhow::Result;
use bam_lib::BamClient;
use clap::Args;

use crate::output::{print_records, OutputFormat};

#[derive(Args)]
pub struct RatesArgs {
    /// Currency label (e.g. EUR, USD). Omit for all currencies
    #[arg(long, default_value = "")]
    pub currency: String,

    /// Date as YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS.ffffffZ. Omit for today
    #[arg(long, default_value = "")]
    pub date: String,
}

pub async fn run_banknotes(args: &RatesArgs, client: &BamClient, format: &OutputFormat) -> Result<()> {
    let records = client.banknote_rates(&args.currency, &args.date).await?;
    print_records(&records, format)
}

pub async fn run_transfers(args: &RatesArgs, client: &BamClient, format: &OutputFormat) -> Result<()> {
    let records = client.transfer_rates(&args.currency, &args.date).await?;
    print_records(&records, format)
}
