use anyhow::Result;
use bam_lib::BamClient;
use clap::Args;

use crate::output::{print_records, OutputFormat};

#[derive(Args)]
pub struct CurveArgs {
    /// Curve date as YYYY-MM-DD. Omit for the previous day
    #[arg(long, default_value = "")]
    pub date: String,
}

pub async fn run(args: &CurveArgs, client: &BamClient, format: &OutputFormat) -> Result<()> {
    let records = client.treasury_curve(&args.date).await?;
    print_records(&records, format)
}
