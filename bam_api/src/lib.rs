mod client;
mod endpoint;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, BASE_URL, REQUEST_TIMEOUT, SUBSCRIPTION_KEY_HEADER};
pub use self::endpoint::{Endpoint, Service};
pub use self::errors::Error;
pub use self::query::{
    CurveQuery, ExchangeRateQuery, PolicyOperationQuery, Query, QueryPairs, SettlementQuery,
};
