mod common;
pub use self::common::{Query, QueryPairs};

mod rates;
pub use self::rates::ExchangeRateQuery;

mod curve;
pub use self::curve::CurveQuery;

mod auction;
pub use self::auction::{PolicyOperationQuery, SettlementQuery};
