//! Static endpoint table and the API products ("services") they belong to.

use std::fmt;
use std::str::FromStr;

/// One of the three API products. Each product is subscribed to separately
/// and has its own subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Marché des adjudications des bons du Trésor.
    TreasuryBillAuctions,
    /// Marché des changes.
    ForeignExchange,
    /// Marché obligataire.
    BondMarket,
}

impl Service {
    pub const ALL: [Service; 3] = [
        Service::TreasuryBillAuctions,
        Service::ForeignExchange,
        Service::BondMarket,
    ];

    /// Key under which this service's subscription key is stored in the config file.
    pub fn config_key(self) -> &'static str {
        match self {
            Service::TreasuryBillAuctions => "marche_adjud_des_bt",
            Service::ForeignExchange => "marche_des_changes",
            Service::BondMarket => "marche_obligataire",
        }
    }

    /// Product name as published by the bank.
    pub fn label(self) -> &'static str {
        match self {
            Service::TreasuryBillAuctions => "Marché des adjudications des bons du Trésor",
            Service::ForeignExchange => "Marché des changes",
            Service::BondMarket => "Marché obligataire",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Named API operations. Each maps to a fixed path under the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Reference yield curve of treasury bills (Courbe BDT).
    TreasuryCurve,
    /// Foreign banknote exchange rates of the day (Cours BBE).
    BanknoteRates,
    /// Bank transfer exchange rates of the day (Cours virement).
    TransferRates,
    /// Results of monetary policy operations.
    MonetaryPolicyOperations,
    /// Treasury bill issuance auction results.
    TreasuryBillIssuances,
    /// Treasury bill buyback operation results.
    TreasuryBillBuybacks,
    /// Treasury bill exchange operation results.
    TreasuryBillExchanges,
}

impl Endpoint {
    pub const ALL: [Endpoint; 7] = [
        Endpoint::TreasuryCurve,
        Endpoint::BanknoteRates,
        Endpoint::TransferRates,
        Endpoint::MonetaryPolicyOperations,
        Endpoint::TreasuryBillIssuances,
        Endpoint::TreasuryBillBuybacks,
        Endpoint::TreasuryBillExchanges,
    ];

    /// Operation name, as used in the bank's documentation.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::TreasuryCurve => "courbe_BDT",
            Endpoint::BanknoteRates => "cours_BBE",
            Endpoint::TransferRates => "cours_virement",
            Endpoint::MonetaryPolicyOperations => "oprts_de_PM",
            Endpoint::TreasuryBillIssuances => "emissions_de_BT",
            Endpoint::TreasuryBillBuybacks => "oprts_rachat_de_BT",
            Endpoint::TreasuryBillExchanges => "oprts_echange_de_BT",
        }
    }

    /// Path relative to the base URL, without a leading slash.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::TreasuryCurve => "mo/Version1/api/CourbeBDT",
            Endpoint::BanknoteRates => "cours/Version1/api/CoursBBE",
            Endpoint::TransferRates => "cours/Version1/api/CoursVirement",
            Endpoint::MonetaryPolicyOperations => "adju/Version1/api/GenTELADJ",
            Endpoint::TreasuryBillIssuances => "adju/Version1/api/TELADJAdjuNormal",
            Endpoint::TreasuryBillBuybacks => "adju/Version1/api/TELADJRachat",
            Endpoint::TreasuryBillExchanges => "adju/Version1/api/TELADJEchange",
        }
    }

    /// The service whose subscription key authorizes this endpoint.
    pub fn service(self) -> Service {
        match self {
            Endpoint::TreasuryCurve => Service::BondMarket,
            Endpoint::BanknoteRates | Endpoint::TransferRates => Service::ForeignExchange,
            Endpoint::MonetaryPolicyOperations
            | Endpoint::TreasuryBillIssuances
            | Endpoint::TreasuryBillBuybacks
            | Endpoint::TreasuryBillExchanges => Service::TreasuryBillAuctions,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == s)
            .ok_or(())
    }
}
