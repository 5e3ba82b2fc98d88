use super::common::{Query, QueryPairs};

/// Query for monetary policy operation results over an auction date range,
/// optionally filtered by instrument acronym.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyOperationQuery {
    pub from: String,
    pub to: String,
    pub instrument: String,
}

impl Query for PolicyOperationQuery {
    fn query_pairs(&self) -> QueryPairs {
        vec![
            ("dateAdjudicationDu", self.from.clone()),
            ("dateAdjudicationAu", self.to.clone()),
            ("instrument", self.instrument.clone()),
        ]
    }
}

impl PolicyOperationQuery {
    pub fn with_from(mut self, from: &str) -> Self {
        self.from = from.to_string();
        self
    }
    pub fn with_to(mut self, to: &str) -> Self {
        self.to = to.to_string();
        self
    }
    /// Sets the instrument filter. Expects an acronym such as `AVANCES7J`.
    pub fn with_instrument(mut self, instrument: &str) -> Self {
        self.instrument = instrument.to_string();
        self
    }
}

/// Query for treasury bill auction sessions keyed by settlement date
/// (issuances, buybacks and exchanges).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettlementQuery {
    pub settlement_date: String,
}

impl Query for SettlementQuery {
    fn query_pairs(&self) -> QueryPairs {
        vec![("dateReglement", self.settlement_date.clone())]
    }
}

impl SettlementQuery {
    pub fn with_settlement_date(mut self, date: &str) -> Self {
        self.settlement_date = date.to_string();
        self
    }
}
