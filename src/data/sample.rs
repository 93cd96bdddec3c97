use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::summary::MonthKey;

/// Built-in demo transactions, shown when no data file exists yet.
///
/// Dates are pinned to the current and previous month so the dashboard and
/// month navigation have something to show on first launch.
pub(crate) fn transactions() -> Vec<Transaction> {
    let this_month = MonthKey::current();
    let last_month = this_month.prev();
    let date = |key: MonthKey, day: u32| format!("{key}-{day:02}");

    vec![
        Transaction::new(date(this_month, 1), Decimal::new(1200_00, 2), "Rent", "monthly rent"),
        Transaction::new(date(this_month, 3), Decimal::new(85_40, 2), "Groceries", "weekly shop"),
        Transaction::new(date(this_month, 5), Decimal::new(42_50, 2), "Transport", "fuel"),
        Transaction::new(date(this_month, 8), Decimal::new(36_75, 2), "Dining Out", "ramen"),
        Transaction::new(date(this_month, 10), Decimal::new(90_25, 2), "Utilities", "electricity"),
        Transaction::new(date(this_month, 12), Decimal::new(15_99, 2), "Entertainment", "streaming"),
        Transaction::new(date(this_month, 15), Decimal::new(62_10, 2), "Groceries", "weekly shop"),
        Transaction::new(date(this_month, 18), Decimal::new(54_00, 2), "Entertainment", "cinema"),
        Transaction::new(date(this_month, 21), Decimal::new(18_00, 2), "Transport", "bus pass"),
        Transaction::new(date(last_month, 1), Decimal::new(1200_00, 2), "Rent", "monthly rent"),
        Transaction::new(date(last_month, 4), Decimal::new(240_80, 2), "Groceries", "monthly shop"),
        Transaction::new(date(last_month, 9), Decimal::new(95_20, 2), "Dining Out", "birthday dinner"),
        Transaction::new(date(last_month, 14), Decimal::new(88_60, 2), "Utilities", "electricity"),
        Transaction::new(date(last_month, 20), Decimal::new(320_00, 2), "Travel", "train tickets"),
    ]
}
