//! Report ordering and filtering rules.

use std::collections::HashSet;

use crate::domain::asset::ReportRow;

/// Symbols reported when no allow-list is configured.
pub const DEFAULT_SYMBOLS: [&str; 8] = [
    "axlATOM", "xSHRAP", "GMD", "CHAM", "DEXI", "BEAR", "BNB", "ACS",
];

/// Set of symbols the report is interested in.
///
/// Membership is exact (case-sensitive), matching how the backend keys its
/// tokenlist symbols.
#[derive(Debug, Clone)]
pub struct AllowList(HashSet<String>);

impl AllowList {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(symbols.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS)
    }
}

/// Orders stablecoins ahead of everything else.
///
/// Equal flags compare equal, so the sort is a partition: rows keep their
/// input order within each half.
pub fn sort_by_stability(rows: &mut [ReportRow]) {
    rows.sort_by(|a, b| b.stable.cmp(&a.stable));
}

/// Formats every allow-listed row, in order, one line per row.
pub fn render(rows: &[ReportRow], allow_list: &AllowList) -> Vec<String> {
    rows.iter()
        .filter(|row| allow_list.contains(&row.symbol))
        .map(|row| row.to_string())
        .collect()
}
