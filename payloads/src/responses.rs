use serde::{Deserialize, Serialize};

/// One page of rows, with the total row count when the server reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total_count: Option<u64>,
}

/// Body row returned by a `select=count` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRow {
    pub count: u64,
}

/// Parsed `Content-Range` header, e.g. `0-19/45`, `*/0` or `0-19/*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRange {
    /// Inclusive row range of the returned rows, absent for empty results.
    pub range: Option<(u64, u64)>,
    /// Exact total, absent when the server did not count.
    pub total: Option<u64>,
}

impl ContentRange {
    pub fn parse(header: &str) -> Option<Self> {
        let (range, total) = header.trim().split_once('/')?;
        let range = match range {
            "*" => None,
            range => {
                let (from, to) = range.split_once('-')?;
                Some((from.parse().ok()?, to.parse().ok()?))
            }
        };
        let total = match total {
            "*" => None,
            total => Some(total.parse().ok()?),
        };
        Some(ContentRange { range, total })
    }

    /// Header value for `rows` rows starting at `offset` out of `total`.
    pub fn format(offset: u64, rows: usize, total: Option<u64>) -> String {
        let range = if rows == 0 {
            "*".to_string()
        } else {
            format!("{offset}-{}", offset + rows as u64 - 1)
        };
        let total = total.map_or_else(|| "*".to_string(), |t| t.to_string());
        format!("{range}/{total}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ranges_and_totals() {
        assert_eq!(
            ContentRange::parse("0-19/45"),
            Some(ContentRange {
                range: Some((0, 19)),
                total: Some(45)
            })
        );
        assert_eq!(
            ContentRange::parse("*/0"),
            Some(ContentRange {
                range: None,
                total: Some(0)
            })
        );
        assert_eq!(ContentRange::parse("0-19/*").unwrap().total, None);
        assert_eq!(ContentRange::parse("garbage"), None);
        assert_eq!(ContentRange::parse("a-b/3"), None);
    }

    #[test]
    fn formats_empty_and_partial_windows() {
        assert_eq!(ContentRange::format(40, 5, Some(45)), "40-44/45");
        assert_eq!(ContentRange::format(0, 0, Some(0)), "*/0");
        assert_eq!(ContentRange::format(0, 3, None), "0-2/*");
    }
}
