pub mod attendance;
pub mod audit;
pub mod hourly_logs;
pub mod leave;
pub mod migrate;
pub mod pool;
pub mod sessions;
pub mod stats;
pub mod strikes;
pub mod users;

use rusqlite::Result;

/// Build a WHERE clause for an optional period filter on a `date` column
/// plus an optional user filter. Period formats: YYYY, YYYY-MM,
/// YYYY-MM-DD, or ranges "start:end" of equal granularity; "all" bypasses
/// date filtering.
pub(crate) fn build_filtered_query(
    base_query: &str,
    period: Option<&str>,
    user_id: Option<i32>,
) -> Result<(String, Vec<String>)> {
    let mut query = base_query.to_string();
    let mut conditions = Vec::new();
    let mut params: Vec<String> = Vec::new();

    if let Some(p) = period
        && p != "all"
    {
        // Range syntax with ":" → start:end
        if let Some((start_raw, end_raw)) = p.split_once(':') {
            let start = start_raw.trim();
            let end = end_raw.trim();

            if start.is_empty() || end.is_empty() || start.len() != end.len() {
                return Err(rusqlite::Error::InvalidQuery);
            }

            match start.len() {
                4 => {
                    conditions.push("strftime('%Y', date) >= ?".to_string());
                    conditions.push("strftime('%Y', date) <= ?".to_string());
                }
                7 => {
                    conditions.push("strftime('%Y-%m', date) >= ?".to_string());
                    conditions.push("strftime('%Y-%m', date) <= ?".to_string());
                }
                10 => {
                    conditions.push("date >= ?".to_string());
                    conditions.push("date <= ?".to_string());
                }
                _ => return Err(rusqlite::Error::InvalidQuery),
            }
            params.push(start.to_string());
            params.push(end.to_string());
        } else if p.len() == 4 {
            conditions.push("strftime('%Y', date) = ?".to_string());
            params.push(p.to_string());
        } else if p.len() == 7 {
            conditions.push("strftime('%Y-%m', date) = ?".to_string());
            params.push(p.to_string());
        } else if p.len() == 10 {
            conditions.push("date = ?".to_string());
            params.push(p.to_string());
        } else {
            return Err(rusqlite::Error::InvalidQuery);
        }
    }

    if let Some(uid) = user_id {
        conditions.push("user_id = ?".to_string());
        params.push(uid.to_string());
    }

    if !conditions.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&conditions.join(" AND "));
    }

    Ok((query, params))
}
