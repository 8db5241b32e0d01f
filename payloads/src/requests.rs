use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[display("asc")]
    Asc,
    #[display("desc")]
    Desc,
}

impl Direction {
    pub fn is_ascending(self) -> bool {
        matches!(self, Direction::Asc)
    }
}

/// Sort column and direction, rendered as `{column}.{asc|desc}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

impl Order {
    pub fn to_param(&self) -> String {
        format!("{}.{}", self.column, self.direction)
    }

    /// Parse the `order` query parameter form, defaulting to ascending.
    pub fn parse(param: &str) -> Option<Self> {
        let (column, direction) = match param.rsplit_once('.') {
            Some((column, "asc")) => (column, Direction::Asc),
            Some((column, "desc")) => (column, Direction::Desc),
            _ => (param, Direction::Asc),
        };
        if column.is_empty() {
            return None;
        }
        Some(Order {
            column: column.to_string(),
            direction,
        })
    }
}

/// One pagination window over a resource.
///
/// Pages are 1-based. Page `p` of size `s` covers rows
/// `(p-1)*s ..= (p-1)*s + s - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub table: String,
    pub select: String,
    pub order: Order,
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }

    /// Inclusive row range for the `Range` header form.
    pub fn range(&self) -> (u64, u64) {
        let from = self.offset();
        (from, from + self.limit().saturating_sub(1))
    }

    /// Query pairs for the direct form of the request.
    pub fn direct_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("select", self.select.clone()),
            ("order", self.order.to_param()),
            ("offset", self.offset().to_string()),
            ("limit", self.limit().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: u32) -> PageRequest {
        PageRequest {
            table: "candidates".into(),
            select: "*".into(),
            order: Order {
                column: "created_at".into(),
                direction: Direction::Desc,
            },
            page,
            page_size: 20,
        }
    }

    #[test]
    fn page_window_is_one_based() {
        assert_eq!(request(1).range(), (0, 19));
        assert_eq!(request(3).offset(), 40);
        assert_eq!(request(3).range(), (40, 59));
    }

    #[test]
    fn direct_query_carries_window_and_order() {
        let query = request(2).direct_query();
        assert!(query.contains(&("order", "created_at.desc".to_string())));
        assert!(query.contains(&("offset", "20".to_string())));
        assert!(query.contains(&("limit", "20".to_string())));
    }

    #[test]
    fn order_param_defaults_to_ascending() {
        let order = Order::parse("company_name.asc").unwrap();
        assert_eq!(order.column, "company_name");
        assert_eq!(order.direction, Direction::Asc);

        let order = Order::parse("closed_at").unwrap();
        assert_eq!(order.column, "closed_at");
        assert_eq!(order.direction, Direction::Asc);

        assert!(Order::parse("").is_none());
    }
}
