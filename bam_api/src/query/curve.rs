use super::common::{Query, QueryPairs};

/// Query for the treasury reference curve. An empty date means the previous day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurveQuery {
    pub date: String,
}

impl Query for CurveQuery {
    fn query_pairs(&self) -> QueryPairs {
        vec![("dateCourbe", self.date.clone())]
    }
}

impl CurveQuery {
    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }
}
