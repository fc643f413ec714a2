/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 22/10/25
******************************************************************************/
use crate::constants::MAX_PAGES;
use crate::error::AppError;
use crate::model::responses::parse_list_page;
use crate::transport::PddHttpClient;
use serde_json::Value;
use tracing::{debug, error, info};

/// Walks a paginated list endpoint and accumulates its items
///
/// Pages are requested with 1-based `page` and fixed `on_page` parameters
/// until the cumulative reported `found` reaches the reported `total`, or
/// until a page is logically unsuccessful, which ends the walk normally
/// with whatever was accumulated. Items keep server order and are not
/// deduplicated across pages.
///
/// A server that keeps reporting inconsistent `found`/`total` values would
/// never satisfy the termination condition, so the walk is capped at
/// [`MAX_PAGES`] and fails with [`AppError::Protocol`] beyond it.
pub(crate) async fn fetch_all_pages<T: PddHttpClient + ?Sized>(
    client: &T,
    path: &str,
    base_query: &[(&str, String)],
    list_key: &str,
    page_size: u32,
) -> Result<Vec<Value>, AppError> {
    let mut items: Vec<Value> = Vec::new();
    let mut seen: u64 = 0;
    let mut page: u32 = 1;

    loop {
        if page > MAX_PAGES {
            error!("{} did not terminate after {} pages", path, MAX_PAGES);
            return Err(AppError::Protocol(MAX_PAGES));
        }

        let mut query: Vec<(&str, String)> = base_query.to_vec();
        query.push(("page", page.to_string()));
        query.push(("on_page", page_size.to_string()));

        let body = client.get_data(path, &query, &[]).await?;
        let Some(parsed) = parse_list_page(&body, list_key) else {
            debug!("{} page {}: no further items", path, page);
            break;
        };

        seen += parsed.found;
        debug!(
            "{} page {}: {} items ({} of {})",
            path, page, parsed.found, seen, parsed.total
        );
        items.extend(parsed.items);

        if seen >= parsed.total {
            break;
        }
        page += 1;
    }

    info!("Fetched {} items from {}", items.len(), path);
    Ok(items)
}
