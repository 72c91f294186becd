//! Async GET client with URL construction.

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use super::error::RequestError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A single `name=value` query pair. Values are stringified by the caller
/// so numbers keep their natural formatting (`51.5`, `-0.1`).
pub type QueryParam<'a> = (&'a str, String);

/// Build a request URL from a base, path segments and query pairs.
///
/// Path segments are percent-encoded individually, so a segment can never
/// introduce a `/`, `?` or `#`. Query pairs are form-encoded and appended in
/// the order given.
pub fn build_url(
    base: &Url,
    path: &[&str],
    params: &[QueryParam<'_>],
) -> Result<Url, RequestError> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|_| RequestError::InvalidUrl {
            url: base.to_string(),
            message: "URL cannot be a base".to_string(),
        })?
        .pop_if_empty()
        .extend(path);

    if !params.is_empty() {
        let mut query = url.query_pairs_mut();
        for (name, value) in params {
            query.append_pair(name, value);
        }
    }

    Ok(url)
}

/// GET client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RequestError> {
        let base_url = Url::parse(base_url).map_err(|e| RequestError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url })
    }

    /// Perform a single GET and return the body of a `200 OK` response.
    pub async fn get(
        &self,
        path: &[&str],
        params: &[QueryParam<'_>],
    ) -> Result<String, RequestError> {
        let url = build_url(&self.base_url, path, params)?;
        debug!(%url, "sending GET request");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "request rejected");
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}
