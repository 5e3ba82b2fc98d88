//! Shared query infrastructure: the [`Query`] trait and [`QueryPairs`].

use url::Url;

/// Ordered query-string parameters. Empty values are kept: the API reads an
/// empty parameter as "no filter".
pub type QueryPairs = Vec<(&'static str, String)>;

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Returns the query-string parameters in the order they are sent.
    fn query_pairs(&self) -> QueryPairs;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (name, value) in self.query_pairs() {
            url.query_pairs_mut().append_pair(name, &value);
        }
        url
    }
}

impl Query for QueryPairs {
    fn query_pairs(&self) -> QueryPairs {
        self.clone()
    }
}
