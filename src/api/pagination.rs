//! Sequential cursor pagination for feed endpoints

use futures::stream::{self, Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

use super::core::ApiClient;
use super::endpoint::Endpoint;
use super::request::RequestParams;
use super::transport::{Credentials, Transport};

/// A response page that may point at the next one.
pub trait Paginated {
    /// Cursor for the next page. `None` or an empty string means this was
    /// the last page.
    fn next_cursor(&self) -> Option<&str>;
}

struct PageState {
    cursor: Option<String>,
    fetched: usize,
    done: bool,
}

impl<T: Transport> ApiClient<T> {
    /// Lazily fetches up to `max_pages` pages of a paginated endpoint.
    ///
    /// The first page is requested without a cursor, every later one with
    /// the cursor of its predecessor, so pages are fetched strictly one
    /// after another. The stream ends after `max_pages` pages, after a page
    /// without a cursor, or right after yielding the first error.
    pub fn fetch_pages<'a, R>(
        &'a self,
        endpoint: &'a Endpoint<R>,
        params: &'a RequestParams,
        credentials: Option<&'a Credentials>,
        max_pages: usize,
    ) -> impl Stream<Item = Result<R, ApiError>> + 'a
    where
        R: DeserializeOwned + Paginated + 'a,
    {
        let initial = PageState {
            cursor: None,
            fetched: 0,
            done: max_pages == 0,
        };

        stream::try_unfold(initial, move |state| async move {
            if state.done || state.fetched >= max_pages {
                return Ok::<_, ApiError>(None);
            }

            let page = self
                .invoke_page(endpoint, params, credentials, state.cursor.as_deref())
                .await?;
            let fetched = state.fetched + 1;

            let cursor = page
                .next_cursor()
                .filter(|cursor| !cursor.is_empty())
                .map(str::to_owned);
            debug!(
                "Fetched page {fetched} of endpoint '{}', next cursor present: {}",
                endpoint.name,
                cursor.is_some()
            );

            let next = PageState {
                done: cursor.is_none(),
                cursor,
                fetched,
            };
            Ok::<_, ApiError>(Some((page, next)))
        })
    }

    /// Drains [`fetch_pages`](Self::fetch_pages) into a vector, stopping at
    /// the first error.
    pub async fn collect_pages<R>(
        &self,
        endpoint: &Endpoint<R>,
        params: &RequestParams,
        credentials: Option<&Credentials>,
        max_pages: usize,
    ) -> Result<Vec<R>, ApiError>
    where
        R: DeserializeOwned + Paginated,
    {
        self.fetch_pages(endpoint, params, credentials, max_pages)
            .try_collect()
            .await
    }
}
