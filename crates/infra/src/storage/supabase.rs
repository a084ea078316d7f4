//! Minimal PostgREST client

use linkedgpt_domain::{LinkedGptError, Result, SupabaseConfig};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use crate::errors::InfraError;
use crate::http::{check_status, read_json, HttpClient};

/// Row filter rendered as a PostgREST query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `column=eq.value`
    Eq(String, String),
    /// `column=lte.value`
    Lte(String, String),
}

impl Filter {
    pub fn eq(column: &str, value: impl ToString) -> Self {
        Self::Eq(column.to_string(), value.to_string())
    }

    pub fn lte(column: &str, value: impl ToString) -> Self {
        Self::Lte(column.to_string(), value.to_string())
    }

    fn to_query(&self) -> (String, String) {
        match self {
            Self::Eq(column, value) => (column.clone(), format!("eq.{value}")),
            Self::Lte(column, value) => (column.clone(), format!("lte.{value}")),
        }
    }
}

/// PostgREST client for one Supabase project
pub struct SupabaseClient {
    http_client: HttpClient,
    url: Option<String>,
    key: Option<String>,
}

impl SupabaseClient {
    /// Credentials are checked per call; a client without them fails every
    /// operation with `Configuration` and never touches the network.
    pub fn new(config: &SupabaseConfig, http_client: HttpClient) -> Self {
        Self {
            http_client,
            url: config.url.clone().filter(|u| !u.trim().is_empty()),
            key: config.key.clone().filter(|k| !k.trim().is_empty()),
        }
    }

    fn table_request(&self, method: Method, table: &str) -> Result<RequestBuilder> {
        let (Some(base), Some(key)) = (self.url.as_deref(), self.key.as_deref()) else {
            return Err(LinkedGptError::Configuration(
                "Supabase URL and key must be configured".to_string(),
            ));
        };

        let base = Url::parse(&format!("{}/", base.trim_end_matches('/')))
            .map_err(|e| LinkedGptError::from(InfraError::from(e)))?;
        let url = base
            .join("rest/v1/")
            .and_then(|u| u.join(table))
            .map_err(|e| LinkedGptError::from(InfraError::from(e)))?;

        Ok(self.http_client.request(method, url).header("apikey", key).bearer_auth(key))
    }

    /// `GET /rest/v1/<table>?select=*&<filters>[&order=...]`
    #[instrument(skip(self, filters), fields(table = table))]
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<&str>,
    ) -> Result<Vec<T>> {
        let mut query = vec![("select".to_string(), "*".to_string())];
        query.extend(filters.iter().map(Filter::to_query));
        if let Some(order) = order {
            query.push(("order".to_string(), order.to_string()));
        }

        let request = self.table_request(Method::GET, table)?.query(&query);
        let response = check_status(self.http_client.send(request).await?, "storage select").await?;
        let rows: Vec<T> = read_json(response, "storage select").await?;
        debug!(rows = rows.len(), "rows selected");
        Ok(rows)
    }

    /// Insert one row and return the stored representation.
    #[instrument(skip(self, row), fields(table = table))]
    pub async fn insert<T: Serialize + Sync, R: DeserializeOwned>(
        &self,
        table: &str,
        row: &T,
    ) -> Result<Vec<R>> {
        let request = self
            .table_request(Method::POST, table)?
            .header("Prefer", "return=representation")
            .json(row);
        let response = check_status(self.http_client.send(request).await?, "storage insert").await?;
        read_json(response, "storage insert").await
    }

    /// Insert one row without reading it back.
    #[instrument(skip(self, row), fields(table = table))]
    pub async fn insert_minimal<T: Serialize + Sync>(&self, table: &str, row: &T) -> Result<()> {
        let request = self
            .table_request(Method::POST, table)?
            .header("Prefer", "return=minimal")
            .json(row);
        check_status(self.http_client.send(request).await?, "storage insert").await?;
        Ok(())
    }

    /// `PATCH` every row matching `filters` with `patch`.
    #[instrument(skip(self, patch, filters), fields(table = table))]
    pub async fn update<T: Serialize + Sync>(
        &self,
        table: &str,
        patch: &T,
        filters: &[Filter],
    ) -> Result<()> {
        if filters.is_empty() {
            return Err(LinkedGptError::Internal("refusing unfiltered update".to_string()));
        }
        let query: Vec<_> = filters.iter().map(Filter::to_query).collect();
        let request = self
            .table_request(Method::PATCH, table)?
            .query(&query)
            .header("Prefer", "return=minimal")
            .json(patch);
        check_status(self.http_client.send(request).await?, "storage update").await?;
        Ok(())
    }
}
