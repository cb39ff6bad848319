/// Number of pages for `total` records at `take` per page. An unreported
/// total means a single page.
pub fn total_pages(total: Option<u64>, take: u32) -> u32 {
    match total {
        Some(total) if total > 0 => {
            let take = u64::from(take.max(1));
            u32::try_from(total.div_ceil(take)).unwrap_or(u32::MAX)
        }
        _ => 1,
    }
}

/// Page requested by a `page` query value. Missing, zero or unparsable
/// values mean the first page.
pub fn page_from_query(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current: u32,
    pub total: u32,
}

impl Pagination {
    pub fn new(current: u32) -> Self {
        Self {
            current: current.max(1),
            total: 1,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current + 1)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1)
    }
}
