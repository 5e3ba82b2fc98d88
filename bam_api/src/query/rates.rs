use super::common::{Query, QueryPairs};

/// Query for the foreign-exchange endpoints (banknote and transfer rates).
///
/// An empty currency returns every quoted currency; an empty date lets the
/// server pick the current day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeRateQuery {
    pub currency: String,
    pub date: String,
}

impl Query for ExchangeRateQuery {
    fn query_pairs(&self) -> QueryPairs {
        vec![
            ("libDevise", self.currency.clone()),
            ("date", self.date.clone()),
        ]
    }
}

impl ExchangeRateQuery {
    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }
    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }
}
