use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use crate::error::Result;
use crate::github::client::decode_list;

/// A source of pages: one bounded slice of a paginated result set per call.
#[async_trait]
pub trait PageFetch {
    type Item;

    /// Fetch and decode page `page` (1-based).
    async fn fetch_page(&self, page: u32) -> Result<Vec<Self::Item>>;
}

/// Walk pages 1, 2, 3, ... until a page comes back empty or `max_pages`
/// pages have been fetched, concatenating the batches in order.
///
/// A typed API failure ends pagination for this endpoint and keeps whatever
/// was accumulated; transport and decode failures abort the run. An empty
/// page and an API failure are therefore indistinguishable in the output.
pub async fn collect_pages<F>(fetcher: &F, max_pages: Option<u32>) -> Result<Vec<F::Item>>
where
    F: PageFetch + Sync,
{
    let mut items = Vec::new();
    let mut page = 1u32;

    loop {
        let batch = match fetcher.fetch_page(page).await {
            Ok(batch) => batch,
            Err(e) if e.is_api_failure() => {
                tracing::warn!(
                    "Page {} failed, keeping the {} items collected so far: {}",
                    page,
                    items.len(),
                    e
                );
                break;
            }
            Err(e) => return Err(e),
        };

        if batch.is_empty() {
            break;
        }
        items.extend(batch);

        if let Some(cap) = max_pages {
            if page >= cap {
                tracing::debug!("Page cap {} reached", cap);
                break;
            }
        }
        page += 1;
    }

    Ok(items)
}

/// A fixed endpoint URL plus its query string, fetched page by page with
/// `per_page` and `page` appended per request.
pub struct PagedEndpoint<'a, T> {
    client: &'a Client,
    url: String,
    query: Vec<(&'static str, String)>,
    per_page: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> PagedEndpoint<'a, T> {
    pub fn new(
        client: &'a Client,
        url: String,
        query: Vec<(&'static str, String)>,
        per_page: u32,
    ) -> Self {
        Self {
            client,
            url,
            query,
            per_page,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T> PageFetch for PagedEndpoint<'_, T>
where
    T: DeserializeOwned + Send,
{
    type Item = T;

    async fn fetch_page(&self, page: u32) -> Result<Vec<T>> {
        let mut query = self.query.clone();
        query.push(("per_page", self.per_page.to_string()));
        query.push(("page", page.to_string()));

        tracing::debug!("Fetching: {} page {}", self.url, page);
        let response = self.client.get(&self.url).query(&query).send().await?;
        decode_list(response).await
    }
}
