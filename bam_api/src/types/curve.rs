use serde::{Deserialize, Serialize};

/// One maturity on the treasury reference curve. `volume` is in millions of dirhams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    pub date_echeance: String,
    pub date_valeur: String,
    pub date_courbe: String,
    pub tmp: f64,
    pub volume: f64,
}
