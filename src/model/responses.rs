/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Response envelope helpers for paginated list endpoints
//!
//! The PDD list endpoints (`/api2/admin/domain/domains`,
//! `/api2/admin/email/list`) wrap their items in a common envelope:
//! `success`, `found`, `total` and a named list key (`domains` or
//! `accounts`). The rest of the body shape is owned by the server and is
//! passed through as raw [`serde_json::Value`] items.

use serde_json::Value;

/// One decoded page of a paginated list response
#[derive(Debug, Clone)]
pub struct ListPage {
    /// Items under the endpoint's list key, in server order
    pub items: Vec<Value>,
    /// Number of items the server reports for this page
    pub found: u64,
    /// Total number of items the server reports across all pages
    pub total: u64,
}

/// Parses one page of a list response
///
/// A page is logically successful when `success` equals `"ok"` exactly,
/// `list_key` is present and holds an array, and `found` is positive.
/// Anything else returns `None`, which ends pagination without error —
/// the API signals "no more data" and "logical failure" the same way.
///
/// # Arguments
///
/// * `body` - Decoded response body
/// * `list_key` - Name of the array field holding the page items
///
/// # Returns
///
/// The decoded page, or `None` for a logically unsuccessful page
pub fn parse_list_page(body: &Value, list_key: &str) -> Option<ListPage> {
    if body.get("success").and_then(Value::as_str) != Some("ok") {
        return None;
    }
    let items = body.get(list_key)?.as_array()?;
    let found = count_field(body, "found");
    if found == 0 {
        return None;
    }
    Some(ListPage {
        items: items.clone(),
        found,
        total: count_field(body, "total"),
    })
}

/// Reads a count field that the API may encode as a number or a numeric string
///
/// Unparseable or missing values read as 0, which terminates pagination.
pub fn count_field(body: &Value, key: &str) -> u64 {
    match body.get(key) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.parse().unwrap_or(0),
        _ => 0,
    }
}
