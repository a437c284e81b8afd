use std::fmt;

/// The date and time tokens identifying one sailing row in the availability PDF.
///
/// Both halves are compared verbatim against whitespace-split tokens; no
/// calendar validation happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SailingTarget {
    pub date: String,
    pub time: String,
}

impl SailingTarget {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }

    /// Splits a combined `"<date> <time>"` setting at its first space.
    pub fn parse(combined: &str) -> Option<Self> {
        let (date, time) = combined.trim().split_once(' ')?;
        let time = time.trim_start();
        if date.is_empty() || time.is_empty() {
            return None;
        }
        Some(Self::new(date, time))
    }

    /// The literal substring a line must contain to be considered at all.
    pub fn needle(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}

impl fmt::Display for SailingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

/// Positions within an availability row that should be inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CabinIndexFilter {
    indexes: Vec<usize>,
}

impl CabinIndexFilter {
    /// Builds a filter keeping the first occurrence of each index.
    ///
    /// Returns `None` for an empty list, which means "inspect every index".
    pub fn new(indexes: impl IntoIterator<Item = usize>) -> Option<Self> {
        let mut kept = Vec::new();
        for idx in indexes {
            if !kept.contains(&idx) {
                kept.push(idx);
            }
        }

        if kept.is_empty() {
            None
        } else {
            Some(Self { indexes: kept })
        }
    }

    /// Parses a comma separated list such as `"0, 2,x,5"`.
    ///
    /// Tokens that are not plain non-negative integers are dropped silently.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::new(raw.split(',').filter_map(|token| {
            let token = token.trim();
            if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
                token.parse::<usize>().ok()
            } else {
                None
            }
        }))
    }

    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }
}

/// A positive cabin count found for a sailing at a given row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityHit {
    pub target: SailingTarget,
    pub index: usize,
    pub count: u64,
}

impl AvailabilityHit {
    pub fn subject(&self) -> String {
        format!("Cabin available for {}", self.target)
    }

    pub fn message(&self) -> String {
        format!(
            "Cabin(s) available for {} at index {}: {}",
            self.target, self.index, self.count
        )
    }
}
