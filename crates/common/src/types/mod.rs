use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Pagination block attached to every list/search response.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_records: u64,
    pub limit: u64,
}

impl PageMeta {
    pub fn new(current_page: u64, limit: u64, total_records: u64) -> Self {
        Self {
            current_page,
            total_pages: total_pages(total_records, limit),
            total_records,
            limit,
        }
    }

    /// Envelope for responses that deliberately skip pagination
    /// (full exports, unlimited search dumps).
    pub fn zeroed() -> Self {
        Self { current_page: 0, total_pages: 0, total_records: 0, limit: 0 }
    }
}

/// `ceil(total / limit)`; a zero limit yields zero pages.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn total_pages_zero_limit_is_zero() {
        assert_eq!(total_pages(42, 0), 0);
    }

    #[test]
    fn page_meta_serializes_camel_case() {
        let meta = PageMeta::new(2, 10, 25);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["totalRecords"], 25);
        assert_eq!(json["limit"], 10);
    }
}
