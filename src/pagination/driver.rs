//! Pagination driver
//!
//! Repeats page fetches until the server signals completion, accumulating
//! items in page-arrival order. All-or-nothing: any fetch failure propagates
//! immediately and the partial accumulation is dropped with it.

use super::types::{Endpoint, Page, Paged};
use crate::error::Result;
use crate::http::ApiClient;
use tracing::debug;

/// Fetch every page of `endpoint` for `account_id` and return the full
/// aggregated item sequence.
///
/// The loop requests one page at a time: page N+1's URL depends on page N's
/// continuation marker, so there is nothing to parallelize. Items keep their
/// intra-page order and pages are appended in arrival order; any reordering
/// is the output layer's business.
pub async fn fetch_all<P: Paged>(
    client: &ApiClient,
    endpoint: &Endpoint,
    account_id: &str,
) -> Result<Vec<P::Item>> {
    let mut items = Vec::new();
    let mut continuation: Option<String> = None;
    let mut page_count = 0u32;

    loop {
        let url = endpoint.page_url(account_id, continuation.as_deref());
        let Page {
            items: page_items,
            continuation: marker,
        } = client.get_json::<P>(&url).await?.into_page();

        page_count += 1;
        debug!("page {page_count}: {} items", page_items.len());
        items.extend(page_items);

        match marker.carry() {
            Some(value) => continuation = Some(value.to_owned()),
            None => break,
        }
    }

    Ok(items)
}
