use crate::models::Transaction;
use crate::summary::{summarize, MonthKey, MonthSummary};

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) month: MonthKey,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) summary: MonthSummary,
    pub(crate) source_label: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
}

impl App {
    pub(crate) fn new(transactions: Vec<Transaction>, source_label: String) -> Self {
        let mut app = Self {
            running: true,
            month: MonthKey::current(),
            transactions,
            summary: MonthSummary::default(),
            source_label,
            status_message: String::new(),
            show_help: false,
        };
        app.refresh_summary();
        app
    }

    /// Recompute the month's summary. Cheap enough to run on every month
    /// change; the summary is never cached across edits to the month.
    pub(crate) fn refresh_summary(&mut self) {
        self.summary = summarize(&self.transactions, self.month.year, self.month.month);
    }

    pub(crate) fn go_prev_month(&mut self) {
        self.month = self.month.prev();
        self.refresh_summary();
        self.set_status(format!("Showing {}", self.month.label()));
    }

    pub(crate) fn go_next_month(&mut self) {
        self.month = self.month.next();
        self.refresh_summary();
        self.set_status(format!("Showing {}", self.month.label()));
    }

    pub(crate) fn go_current_month(&mut self) {
        self.month = MonthKey::current();
        self.refresh_summary();
        self.set_status(format!("Showing {}", self.month.label()));
    }

    /// Transactions contributing to the displayed month.
    pub(crate) fn month_txn_count(&self) -> usize {
        let key = (self.month.year, self.month.month);
        self.transactions
            .iter()
            .filter(|t| t.year_month() == Some(key))
            .count()
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
