use std::num::NonZeroUsize;

use reqwest::{header::CONTENT_TYPE, Url};
use serde::Deserialize;
use tracing::{debug, error, trace, warn};

use super::error::{RequestError, Result};
use crate::state::{Page, Record};

/// JSON body returned for one page of artworks
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Vec<Record>,
    pagination: Pagination,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    total: u64,
    #[serde(default)]
    limit: Option<usize>,
}

/// Fetches single pages of artworks from the remote API
///
/// The server decides the page size; only the 1-based page number is
/// sent. Cheap to clone, so every background fetch gets its own copy.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: reqwest::Client,
    endpoint: Url,
    page_size: NonZeroUsize,
}

impl Client {
    /// Build a client for `endpoint`, expecting pages of `page_size` rows
    pub fn new(endpoint: &str, page_size: NonZeroUsize) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| RequestError::Config(format!("Invalid endpoint {endpoint:?}: {e}")))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(RequestError::Config(format!(
                "Unsupported endpoint scheme: {}",
                endpoint.scheme()
            )));
        }

        let http_client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            endpoint,
            page_size,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the 1-based `page` of artworks
    pub async fn fetch_page(&self, page: u32) -> Result<Page> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("page", &page.to_string());

        trace!(%url, page, "Triggering request.");
        let response = self.http_client.get(url).send().await?;

        trace!(
            status = response.status().as_u16(),
            content_length = response.content_length().unwrap_or_default(),
            content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .map(|v| v.to_str().unwrap_or_default()),
            "Received response."
        );

        let status = response.status();
        if !status.is_success() {
            let code = status.as_u16();
            let body = response.text().await?;

            error!(code, body, "Unexpected response.");
            return Err(RequestError::Status { code, body });
        }

        let body = response.bytes().await?;
        let envelope: Envelope = serde_json::from_slice(&body)?;

        if let Some(limit) = envelope.pagination.limit {
            if limit != self.page_size.get() {
                warn!(
                    limit,
                    expected = self.page_size.get(),
                    "Server page size differs from the configured one."
                );
            }
        }

        debug!(
            page,
            rows = envelope.data.len(),
            total = envelope.pagination.total,
            "Fetched page."
        );

        Ok(Page {
            records: envelope.data,
            total_count: envelope.pagination.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::{json, Value};

    use super::*;

    fn artwork_json(id: u64) -> Value {
        json!({
            "id": id,
            "title": format!("Artwork #{id}"),
            "place_of_origin": "France",
            "artist_display": "Claude Monet\nFrench, 1840-1926",
            "inscriptions": null,
            "date_start": 1890,
            "date_end": 1891,
            "image_id": "3c27b499-af56-f0d5-93b5-a7f2f1ad5813"
        })
    }

    fn page_json(ids: std::ops::RangeInclusive<u64>, total: u64) -> Value {
        json!({
            "pagination": {
                "total": total,
                "limit": 10,
                "offset": (ids.start() - 1),
                "total_pages": total.div_ceil(10),
                "current_page": (ids.start() - 1) / 10 + 1
            },
            "data": ids.map(artwork_json).collect::<Vec<_>>(),
            "info": { "license_text": "CC0" }
        })
    }

    fn test_client(server: &MockServer) -> Client {
        Client::new(&server.url("/api/v1/artworks"), NonZeroUsize::new(10).unwrap()).unwrap()
    }

    #[test_log::test(tokio::test)]
    async fn test_fetch_page_sends_page_number_and_parses_envelope() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/artworks")
                    .query_param("page", "2");
                then.status(200).json_body(page_json(11..=20, 100));
            })
            .await;

        let page = test_client(&server).fetch_page(2).await.unwrap();

        assert_eq!(page.total_count, 100);
        assert_eq!(page.ids().collect::<Vec<_>>(), (11..=20).collect::<Vec<_>>());
        assert_eq!(page.records[0].title, "Artwork #11");
        assert_eq!(page.records[0].inscriptions, "");
        assert_eq!(page.records[0].date_end, Some(1891));
        mock.assert_async().await;
    }

    #[test_log::test(tokio::test)]
    async fn test_fetch_page_keeps_existing_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/artworks")
                    .query_param("fields", "id,title")
                    .query_param("page", "1");
                then.status(200).json_body(page_json(1..=10, 10));
            })
            .await;

        let url = server.url("/api/v1/artworks?fields=id,title");
        let client = Client::new(&url, NonZeroUsize::new(10).unwrap()).unwrap();
        let page = client.fetch_page(1).await.unwrap();

        assert_eq!(page.len(), 10);
        mock.assert_async().await;
    }

    #[test_log::test(tokio::test)]
    async fn test_fetch_page_accepts_other_server_page_size() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/artworks")
                    .query_param("page", "1");
                then.status(200).json_body(json!({
                    "pagination": { "total": 120, "limit": 12 },
                    "data": (1..=12).map(artwork_json).collect::<Vec<_>>()
                }));
            })
            .await;

        // Configured for 10 rows; the server's 12 are kept as-is
        let page = test_client(&server).fetch_page(1).await.unwrap();

        assert_eq!(page.total_count, 120);
        assert_eq!(page.ids().collect::<Vec<_>>(), (1..=12).collect::<Vec<_>>());
        mock.assert_async().await;
    }

    #[test_log::test(tokio::test)]
    async fn test_fetch_page_rejects_non_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/artworks");
                then.status(200)
                    .header("content-type", "text/html")
                    .body("<html>maintenance</html>");
            })
            .await;

        let error = test_client(&server).fetch_page(1).await.unwrap_err();

        assert!(matches!(error, RequestError::Decode(_)), "{error:?}");
    }

    #[test_log::test(tokio::test)]
    async fn test_fetch_page_rejects_missing_pagination() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/artworks");
                then.status(200).json_body(json!({ "data": [] }));
            })
            .await;

        let error = test_client(&server).fetch_page(1).await.unwrap_err();

        assert!(matches!(error, RequestError::Decode(_)), "{error:?}");
    }

    #[test_log::test(tokio::test)]
    async fn test_fetch_page_maps_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/artworks");
                then.status(403).body("Forbidden");
            })
            .await;

        let error = test_client(&server).fetch_page(1).await.unwrap_err();

        assert_eq!(
            error,
            RequestError::Status {
                code: 403,
                body: "Forbidden".to_owned()
            }
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_fetch_page_reports_unreachable_server() {
        // Nothing listens on the discard port
        let client = Client::new("http://127.0.0.1:9/artworks", NonZeroUsize::new(10).unwrap()).unwrap();

        let error = client.fetch_page(1).await.unwrap_err();

        assert!(matches!(error, RequestError::Request(_)), "{error:?}");
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let size = NonZeroUsize::new(10).unwrap();

        assert!(matches!(
            Client::new("not a url", size),
            Err(RequestError::Config(_))
        ));
        assert!(matches!(
            Client::new("ftp://example.com/artworks", size),
            Err(RequestError::Config(_))
        ));
    }
}
