use serde::{Deserialize, Serialize};

/// Foreign banknote buy/sell rates for one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanknoteRate {
    pub achat_clientele: f64,
    pub date: String,
    pub lib_devise: String,
    pub unite_devise: i64,
    pub vente_clientele: f64,
}

/// Mid-market bank transfer rate for one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRate {
    pub date: String,
    pub lib_devise: String,
    pub moyen: f64,
    pub unite_devise: i64,
}
