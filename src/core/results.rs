use serde::Serialize;

use crate::ergast::{ErgastClient, ErgastError};
use crate::models::RaceResult;

/// Fixed page size for result listings.
pub const PAGE_SIZE: usize = 25;

#[derive(Debug, Clone, Serialize)]
pub struct ResultsPage {
    pub page: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
    pub entries: Vec<RaceResult>,
}

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Cuts page `page` (1-indexed) out of the full result set, preserving
/// source order. Out-of-range pages, including any page of an empty set,
/// yield `None`.
pub fn page_of(rows: &[RaceResult], page: usize) -> Option<ResultsPage> {
    let total = total_pages(rows.len());
    if page == 0 || page > total {
        return None;
    }
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(rows.len());
    Some(ResultsPage {
        page,
        total_pages: total,
        has_more: page < total,
        entries: rows[start..end].to_vec(),
    })
}

/// Fetches the normalized result set for a `(circuit, season)` pair. An
/// upstream failure is distinguished from a race that legitimately has no
/// results; callers render both the same way but log them differently.
pub async fn fetch_results(
    client: &ErgastClient,
    circuit_id: &str,
    season: &str,
) -> Result<Vec<RaceResult>, ErgastError> {
    client.circuit_results(season, circuit_id).await
}
