use serde::{Deserialize, Serialize};

/// Paginated list response: `{count, next, previous, results}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(count: u64, results: Vec<T>) -> Self {
        Self {
            count,
            next: None,
            previous: None,
            results,
        }
    }
}

/// Number of pages needed to show `count` items, at least one.
pub fn page_count(count: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(u64::from(page_size)).max(1)
}
