mod transaction;

pub(crate) use transaction::Transaction;
