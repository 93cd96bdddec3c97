use rust_decimal::Decimal;
use serde::Deserialize;

/// A single transaction record, externally supplied and read-only.
///
/// `date` stays a raw `YYYY-MM-DD` string as it arrives from the data file;
/// month matching parses it leniently (see [`Transaction::year_month`])
/// rather than requiring a valid calendar date.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Transaction {
    pub(crate) date: String,
    pub(crate) amount: Decimal,
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) note: String,
}

impl Transaction {
    pub(crate) fn new(
        date: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            category: category.into(),
            note: note.into(),
        }
    }

    /// Parse the first two dash-separated components of `date` as
    /// (year, month). Returns `None` when either component is missing or
    /// non-numeric, so malformed dates never match any month.
    pub(crate) fn year_month(&self) -> Option<(i32, u32)> {
        let mut parts = self.date.splitn(3, '-');
        let year = parts.next()?.trim().parse().ok()?;
        let month = parts.next()?.trim().parse().ok()?;
        Some((year, month))
    }
}
