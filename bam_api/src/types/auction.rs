use serde::{Deserialize, Serialize};

/// Result of a single monetary policy operation auction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyOperationResult {
    pub date_adjudication: String,
    pub date_valeur: String,
    pub date_echeance: String,
    pub instrument: String,
    pub mnt_demande: f64,
    pub mnt_servi: f64,
    pub taux: f64,
}
