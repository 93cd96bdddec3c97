use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::Transaction;

/// A (year, 1-based month) pair identifying one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MonthKey {
    pub(crate) year: i32,
    pub(crate) month: u32,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl MonthKey {
    /// Derive the month key of a calendar date.
    pub(crate) fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub(crate) fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub(crate) fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub(crate) fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Parse a `YYYY-MM` string, e.g. "2024-01". Months outside 1-12 are
    /// rejected since this names a real calendar month for navigation.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let (year, month) = s.split_once('-')?;
        let year = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Human-readable label, e.g. "January 2024".
    pub(crate) fn label(&self) -> String {
        let name = self
            .month
            .checked_sub(1)
            .and_then(|i| MONTH_NAMES.get(i as usize))
            .copied()
            .unwrap_or("Unknown");
        format!("{name} {}", self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Per-category aggregate for one month.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategorySummary {
    pub(crate) category: String,
    pub(crate) amount: Decimal,
    pub(crate) percentage: f64,
}

/// Result of [`summarize`]: per-category breakdown plus the grand total.
#[derive(Debug, Clone, Default)]
pub(crate) struct MonthSummary {
    pub(crate) summaries: Vec<CategorySummary>,
    pub(crate) total: Decimal,
}

impl MonthSummary {
    pub(crate) fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Largest category by amount, i.e. the first entry after sorting.
    pub(crate) fn top_category(&self) -> Option<&CategorySummary> {
        self.summaries.first()
    }
}

/// Reduce `transactions` restricted to (`year`, `month`) into per-category
/// totals, a grand total, and per-category percentages, sorted by
/// descending amount.
///
/// A transaction matches when the first two dash-separated components of
/// its date string parse as exactly `year` and `month`; malformed dates are
/// silently excluded. Percentages are 0 for every category unless the grand
/// total is positive. Ties in amount keep first-encountered category order
/// (the sort is stable over insertion order).
pub(crate) fn summarize(transactions: &[Transaction], year: i32, month: u32) -> MonthSummary {
    let mut summaries: Vec<CategorySummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut total = Decimal::ZERO;

    for txn in transactions {
        if txn.year_month() != Some((year, month)) {
            continue;
        }
        total += txn.amount;
        match index.get(txn.category.as_str()) {
            Some(&i) => summaries[i].amount += txn.amount,
            None => {
                index.insert(txn.category.clone(), summaries.len());
                summaries.push(CategorySummary {
                    category: txn.category.clone(),
                    amount: txn.amount,
                    percentage: 0.0,
                });
            }
        }
    }

    for summary in &mut summaries {
        summary.percentage = if total > Decimal::ZERO {
            (summary.amount / total * Decimal::ONE_HUNDRED)
                .to_f64()
                .unwrap_or(0.0)
        } else {
            0.0
        };
    }

    summaries.sort_by(|a, b| b.amount.cmp(&a.amount));

    MonthSummary { summaries, total }
}
