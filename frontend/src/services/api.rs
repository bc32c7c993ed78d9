use gloo::net::http::{Request, Response};
use shared::api::{decode_query, decode_store_list, decode_upload};
use shared::{ApiEndpoints, HttpReply, QueryResult, Store, TakingsError, TakingsQuery, UploadResponse};
use web_sys::{File, FormData};

/// API client for communicating with the takings backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    endpoints: ApiEndpoints,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            endpoints: ApiEndpoints::default(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            endpoints: ApiEndpoints::new(base_url),
        }
    }

    /// Client for the base URL baked in at build time through
    /// `TAKINGS_API_URL`, or the default one when it is unset or blank
    pub fn from_build_env() -> Self {
        Self::for_base_url(option_env!("TAKINGS_API_URL"))
    }

    fn for_base_url(configured: Option<&str>) -> Self {
        match configured.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::with_base_url(url.to_string()),
            None => Self::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.endpoints.base_url()
    }

    /// Get the list of stores
    pub async fn list_stores(&self) -> Result<Vec<Store>, TakingsError> {
        let response = Request::get(&self.endpoints.stores_url())
            .send()
            .await
            .map_err(|e| TakingsError::Network(e.to_string()))?;
        decode_store_list(&read_reply(response).await?)
    }

    /// Upload a spreadsheet as a single-part multipart body under `file`
    pub async fn upload_takings(&self, file: &File) -> Result<UploadResponse, TakingsError> {
        let form = FormData::new()
            .map_err(|e| TakingsError::Upload(format!("Failed to build form data: {:?}", e)))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| TakingsError::Upload(format!("Failed to attach file: {:?}", e)))?;

        let response = Request::post(&self.endpoints.upload_url())
            .body(form)
            .map_err(|e| TakingsError::Upload(e.to_string()))?
            .send()
            .await
            .map_err(|e| TakingsError::Network(e.to_string()))?;
        decode_upload(&read_reply(response).await?)
    }

    /// Look up stored takings for one store, or every store, on a date
    pub async fn query_takings(&self, query: &TakingsQuery) -> Result<QueryResult, TakingsError> {
        let url = self.endpoints.query_url(query)?;
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| TakingsError::Network(e.to_string()))?;
        decode_query(query, &read_reply(response).await?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_reply(response: Response) -> Result<HttpReply, TakingsError> {
    let body = response.text().await;
    reply_from(response.status(), response.status_text(), body)
}

/// A body that cannot be read is a transport failure, whatever the status
fn reply_from(
    status: u16,
    status_text: String,
    body: Result<String, gloo::net::Error>,
) -> Result<HttpReply, TakingsError> {
    let body = body.map_err(|e| TakingsError::Network(format!("Failed to read response body: {}", e)))?;
    Ok(HttpReply::new(status, status_text, body))
}
