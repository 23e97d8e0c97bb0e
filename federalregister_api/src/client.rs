//! HTTP client for the Federal Register API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, SearchRequest, DETAIL_FIELDS},
    types::{DocumentDetail, DocumentRecord, SearchResult, NO_RAW_TEXT},
    Error,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://www.federalregister.gov/api/v1";
/// Applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("federalregister/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`Client`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API root, without a trailing `/documents`.
    pub base_url: String,
    /// Per-request timeout. Expiry surfaces as [`Error::Transient`].
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for the Federal Register API.
///
/// Holds one `reqwest::Client` whose connection pool is reused across calls.
/// Calls are sequential; there is no caching, pacing or retrying here.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_config(ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Validation(format!("invalid client configuration: {}", e))
            })?;
        Ok(Self {
            http,
            base_api_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_url(&self, path: &str, pairs: &[(String, String)]) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Validation(format!("invalid base URL {}: {}", self.base_api_url, e))
        })?;
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// Sends a GET and returns the body of a successful response.
    /// `what` names the resource in errors; `classify` maps a failed status.
    async fn get_text(
        &self,
        url: Url,
        what: &str,
        classify: fn(reqwest::StatusCode, &str, String) -> Error,
    ) -> Result<String, Error> {
        tracing::debug!("GET {}", url);
        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to get {}: {}", what, e);
            Error::from(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body for {}: {}", what, e);
            Error::Transient(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request for {} failed with status {}: {}", what, status, snippet);
            return Err(classify(status, what, snippet));
        }
        Ok(body)
    }

    async fn get_json<T>(&self, url: Url, what: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let body = self.get_text(url, what, Error::from_status).await?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse {}: {} | body: {}", what, e, snippet);
            Error::Parse(e.to_string())
        })
    }

    /// Runs a documents search. The request is validated before anything is sent.
    pub async fn search_documents(&self, request: &SearchRequest) -> Result<SearchResult, Error> {
        request.validate()?;
        let url = self.get_url("/documents.json", &request.to_query_pairs())?;
        self.get_json::<SearchResult>(url, "documents search").await
    }

    /// Fetches the metadata record of one document, limited to the detail field set.
    pub async fn get_document(&self, document_number: &str) -> Result<DocumentRecord, Error> {
        validate_document_number(document_number)?;
        let pairs: Vec<(String, String)> = DETAIL_FIELDS
            .iter()
            .map(|f| ("fields[]".to_string(), f.to_string()))
            .collect();
        let url = self.get_url(format!("/documents/{}.json", document_number).as_str(), &pairs)?;
        self.get_json::<DocumentRecord>(url, document_number).await
    }

    /// Downloads the body at a record's `raw_text_url`, verbatim.
    ///
    /// A 404 here is `Fatal`, not `NotFound`: the document itself exists.
    pub async fn get_raw_text(&self, raw_text_url: &str) -> Result<String, Error> {
        let url = Url::parse(raw_text_url).map_err(|e| {
            tracing::error!("Invalid raw text URL {}: {}", raw_text_url, e);
            Error::Parse(format!("invalid raw text URL {}: {}", raw_text_url, e))
        })?;
        self.get_text(url, raw_text_url, Error::from_raw_text_status).await
    }

    /// Fetches a document's metadata and then its raw text.
    ///
    /// A record without a (non-blank) `raw_text_url` is not an error: its
    /// text is [`NO_RAW_TEXT`].
    pub async fn fetch(&self, document_number: &str) -> Result<DocumentDetail, Error> {
        let record = self.get_document(document_number).await?;
        let raw_text_url = record
            .raw_text_url
            .as_deref()
            .filter(|u| !u.trim().is_empty());
        let text = match raw_text_url {
            Some(raw_text_url) => self.get_raw_text(raw_text_url).await?,
            None => {
                tracing::debug!("Document {} has no raw text URL", document_number);
                NO_RAW_TEXT.to_string()
            }
        };
        Ok(record.into_detail(text))
    }
}

fn validate_document_number(document_number: &str) -> Result<(), Error> {
    if document_number.is_empty() {
        return Err(Error::Validation(
            "document number must not be empty".to_string(),
        ));
    }
    if !document_number
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(Error::Validation(format!(
            "document number '{}' may only contain letters, digits and hyphens",
            document_number
        )));
    }
    Ok(())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
