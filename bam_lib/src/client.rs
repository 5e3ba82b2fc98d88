//! Validated wrappers around the API client, one per endpoint.

use bam_api::types::Record;
use bam_api::{
    Client, CurveQuery, Endpoint, ExchangeRateQuery, PolicyOperationQuery, Query,
    SettlementQuery,
};

use crate::config::ApiKeys;
use crate::error::BamError;
use crate::validation::{
    resolve_instrument, validate_currency, validate_date, DATE_FORMAT, EXCHANGE_RATE_DATE_FORMATS,
};

/// API client bound to a set of subscription keys.
///
/// Inputs are validated before anything is sent; a validation failure never
/// reaches the network. Each method performs exactly one request and returns
/// the records as decoded. An empty vector means the server had no data for
/// the query (HTTP 204).
pub struct BamClient {
    inner: Client,
    keys: ApiKeys,
}

impl BamClient {
    /// Creates a client against the production API.
    pub fn new(keys: ApiKeys) -> Result<Self, BamError> {
        Ok(Self {
            inner: Client::new()?,
            keys,
        })
    }

    /// Creates a client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str, keys: ApiKeys) -> Result<Self, BamError> {
        Ok(Self {
            inner: Client::with_base_url(base_url)?,
            keys,
        })
    }

    pub fn keys(&self) -> &ApiKeys {
        &self.keys
    }

    /// Replaces the subscription keys, e.g. after the key file was updated.
    pub fn set_keys(&mut self, keys: ApiKeys) {
        self.keys = keys;
    }

    /// Fully qualified URL of an endpoint on the configured base URL.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<String, BamError> {
        Ok(self.inner.endpoint_url(endpoint)?.to_string())
    }

    async fn dispatch<Q: Query>(
        &self,
        endpoint: Endpoint,
        query: &Q,
    ) -> Result<Vec<Record>, BamError> {
        let service = endpoint.service();
        let key = self.keys.get(service);
        if key.is_empty() {
            tracing::warn!(
                "No subscription key configured for {} ({})",
                service,
                service.label()
            );
        }
        let records = self.inner.get(key, endpoint, query).await?;
        tracing::debug!("{} returned {} records", endpoint, records.len());
        Ok(records)
    }

    async fn exchange_rates(
        &self,
        endpoint: Endpoint,
        currency: &str,
        date: &str,
    ) -> Result<Vec<Record>, BamError> {
        validate_date(date, EXCHANGE_RATE_DATE_FORMATS, false)?;
        validate_currency(currency)?;

        let query = ExchangeRateQuery::default()
            .with_currency(currency)
            .with_date(date);
        self.dispatch(endpoint, &query).await
    }

    /// Foreign banknote rates of the day, published from 08:30 local time.
    ///
    /// `currency` is a label such as `EUR`, or empty for all currencies.
    /// `date` is `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS.ffffffZ`, or empty for today.
    pub async fn banknote_rates(&self, currency: &str, date: &str) -> Result<Vec<Record>, BamError> {
        self.exchange_rates(Endpoint::BanknoteRates, currency, date)
            .await
    }

    /// Bank transfer rates of the day, published from 12:30 local time.
    /// Same inputs as [`Self::banknote_rates`].
    pub async fn transfer_rates(&self, currency: &str, date: &str) -> Result<Vec<Record>, BamError> {
        self.exchange_rates(Endpoint::TransferRates, currency, date)
            .await
    }

    /// Treasury bill reference curve. An empty date means the previous day.
    pub async fn treasury_curve(&self, date: &str) -> Result<Vec<Record>, BamError> {
        validate_date(date, &[DATE_FORMAT], false)?;

        let query = CurveQuery::default().with_date(date);
        self.dispatch(Endpoint::TreasuryCurve, &query).await
    }

    /// Monetary policy operation results between two auction dates,
    /// optionally filtered by instrument name or acronym.
    pub async fn monetary_policy_results(
        &self,
        from: &str,
        to: &str,
        instrument: &str,
    ) -> Result<Vec<Record>, BamError> {
        validate_date(from, &[DATE_FORMAT], false)?;
        validate_date(to, &[DATE_FORMAT], false)?;
        let instrument = resolve_instrument(instrument)?;

        let query = PolicyOperationQuery::default()
            .with_from(from)
            .with_to(to)
            .with_instrument(&instrument);
        self.dispatch(Endpoint::MonetaryPolicyOperations, &query)
            .await
    }

    /// Treasury bill issuance results for an auction settlement date.
    /// The date is required.
    pub async fn treasury_bill_issuances(
        &self,
        settlement_date: &str,
    ) -> Result<Vec<Record>, BamError> {
        validate_date(settlement_date, &[DATE_FORMAT], true)?;
        self.settlement(Endpoint::TreasuryBillIssuances, settlement_date)
            .await
    }

    /// Treasury bill exchange operation results for a settlement date.
    pub async fn treasury_bill_exchanges(
        &self,
        settlement_date: &str,
    ) -> Result<Vec<Record>, BamError> {
        validate_date(settlement_date, &[DATE_FORMAT], false)?;
        self.settlement(Endpoint::TreasuryBillExchanges, settlement_date)
            .await
    }

    /// Treasury bill buyback operation results for a settlement date.
    pub async fn treasury_bill_buybacks(
        &self,
        settlement_date: &str,
    ) -> Result<Vec<Record>, BamError> {
        validate_date(settlement_date, &[DATE_FORMAT], false)?;
        self.settlement(Endpoint::TreasuryBillBuybacks, settlement_date)
            .await
    }

    async fn settlement(
        &self,
        endpoint: Endpoint,
        settlement_date: &str,
    ) -> Result<Vec<Record>, BamError> {
        let query = SettlementQuery::default().with_settlement_date(settlement_date);
        self.dispatch(endpoint, &query).await
    }
}
