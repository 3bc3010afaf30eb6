//! The client for the finance REST API that owns all of the application's data.
//!
//! Every page and endpoint of this web client is a thin layer over the calls
//! defined here. Responses are decoded into the domain types with `serde`, and
//! transport or status failures are mapped into [Error].

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::{
    Error,
    select_option::{NewOption, OptionKind, SelectOption},
    transaction::{NewTransaction, Transaction, TransactionId},
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A handle to the finance REST API.
///
/// Cloning is cheap, clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http_client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the API at `base_url`, failing requests that take
    /// longer than `timeout`.
    ///
    /// # Errors
    /// Returns [Error::InvalidApiUrl] if `base_url` is not an absolute HTTP(S) URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let url = Url::parse(base_url).map_err(|_| Error::InvalidApiUrl(base_url.to_owned()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidApiUrl(base_url.to_owned()));
        }

        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|error| Error::BackendUnavailable(error.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// GET /transactions
    pub async fn get_transactions(&self) -> Result<Vec<Transaction>, Error> {
        self.get_json("/transactions", &[]).await
    }

    /// GET /transactions/dashboard?year={year}
    ///
    /// The transactions of a single calendar year.
    pub async fn get_dashboard_transactions(&self, year: i32) -> Result<Vec<Transaction>, Error> {
        self.get_json("/transactions/dashboard", &[("year", year.to_string())])
            .await
    }

    /// GET /transactions/getYears
    ///
    /// The years that have at least one transaction, in the order the API
    /// returns them.
    pub async fn get_years(&self) -> Result<Vec<i32>, Error> {
        self.get_json("/transactions/getYears", &[]).await
    }

    /// POST /transactions
    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), Error> {
        let request = self
            .http_client
            .post(self.url("/transactions"))
            .json(transaction);

        self.send(request).await.map(|_| ())
    }

    /// PUT /transactions/{id}
    ///
    /// # Errors
    /// Returns [Error::NotFound] if the API does not know the transaction.
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        transaction: &NewTransaction,
    ) -> Result<(), Error> {
        let request = self
            .http_client
            .put(self.url(&format!("/transactions/{id}")))
            .json(transaction);

        self.send(request).await.map(|_| ())
    }

    /// DELETE /transactions/{id}
    ///
    /// # Errors
    /// Returns [Error::NotFound] if the API does not know the transaction.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<(), Error> {
        let request = self
            .http_client
            .delete(self.url(&format!("/transactions/{id}")));

        self.send(request).await.map(|_| ())
    }

    /// GET /categories, /paymentMethods or /currencies depending on `kind`.
    pub async fn get_options(&self, kind: OptionKind) -> Result<Vec<SelectOption>, Error> {
        self.get_json(kind.backend_path(), &[]).await
    }

    /// POST /categories, /paymentMethods or /currencies depending on `kind`.
    ///
    /// The API assigns the ID; the placeholder ID in `option` is ignored.
    pub async fn create_option(&self, kind: OptionKind, option: &NewOption) -> Result<(), Error> {
        let request = self
            .http_client
            .post(self.url(kind.backend_path()))
            .json(option);

        self.send(request).await.map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let request = self.http_client.get(self.url(path)).query(query);
        let response = self.send(request).await?;

        response
            .json::<T>()
            .await
            .inspect_err(|error| tracing::error!("could not decode response from {path}: {error}"))
            .map_err(|error| Error::InvalidBackendResponse(error.to_string()))
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, Error> {
        let response = request
            .send()
            .await
            .inspect_err(|error| tracing::error!("request to the finance API failed: {error}"))?;

        tracing::debug!(
            "finance API responded with {} for {}",
            response.status(),
            response.url()
        );

        response.error_for_status().map_err(Error::from)
    }
}
