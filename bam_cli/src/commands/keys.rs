use anyhow::{bail, Result};
use bam_lib::{KeyStore, KeyUpdate, Service};
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_rows, OutputFormat};

#[derive(Subcommand)]
pub enum KeysCommand {
    /// Store one or more subscription keys. Keys not given are left unchanged
    Set(SetKeysArgs),
    /// Show the stored subscription keys
    Show,
}

#[derive(Args)]
pub struct SetKeysArgs {
    /// Primary key for "Marché des adjudications des bons du Trésor"
    #[arg(long, default_value = "")]
    pub auctions: String,

    /// Primary key for "Marché des changes"
    #[arg(long, default_value = "")]
    pub fx: String,

    /// Primary key for "Marché obligataire"
    #[arg(long, default_value = "")]
    pub bonds: String,
}

#[derive(Tabled, Serialize)]
struct KeyRow {
    #[tabled(rename = "Service")]
    #[serde(rename = "Service")]
    service: String,
    #[tabled(rename = "Config Key")]
    #[serde(rename = "Config Key")]
    config_key: String,
    #[tabled(rename = "Subscription Key")]
    #[serde(rename = "Subscription Key")]
    value: String,
}

fn build_update(args: &SetKeysArgs) -> KeyUpdate {
    KeyUpdate {
        marche_adjud_des_bt: args.auctions.clone(),
        marche_des_changes: args.fx.clone(),
        marche_obligataire: args.bonds.clone(),
    }
}

fn build_key_rows(store: &KeyStore) -> Vec<KeyRow> {
    Service::ALL
        .iter()
        .map(|service| KeyRow {
            service: service.label().to_string(),
            config_key: service.config_key().to_string(),
            value: store.keys().get(*service).to_string(),
        })
        .collect()
}

pub fn run(cmd: &KeysCommand, store: &mut KeyStore, format: &OutputFormat) -> Result<()> {
    match cmd {
        KeysCommand::Set(args) => {
            let update = build_update(args);
            if update.is_empty() {
                bail!("nothing to update: pass at least one of --auctions, --fx, --bonds");
            }
            store.update(&update)?;
            eprintln!("Keys saved to {}", store.path().display());
        }
        KeysCommand::Show => {
            eprintln!("Keys from {}", store.path().display());
            print_rows(&build_key_rows(store), format)?;
        }
    }
    Ok(())
}
