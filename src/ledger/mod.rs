use std::path::{Path, PathBuf};

use getset::Getters;
use rust_decimal::Decimal;
use thiserror::Error;

pub mod columns;
pub mod reader;
pub mod recorder;


pub use reader::{Amount, ListedExpense};

pub const LEDGER_FILE_NAME: &str = "gastos.csv";

/// Header row written when the ledger file is first created.
pub const LEDGER_HEADER: [&str; 4] = ["fecha", "categoria", "cantidad", "metodo_de_pago"];

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("date '{0}' is not in YYYY-MM-DD format")]
    InvalidDate(String),
    #[error("the 'category' field cannot be empty")]
    EmptyCategory,
    #[error("amount '{0}' is not a valid number")]
    InvalidAmount(String),
    #[error("amount must be greater than 0")]
    NonPositiveAmount,
    #[error("the 'payment method' field cannot be empty")]
    EmptyPaymentMethod,
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
}

impl LedgerError {
    /// Input was rejected before anything touched the ledger file.
    pub fn is_validation(&self) -> bool {
        !matches!(self, LedgerError::Io(_) | LedgerError::Csv(_))
    }
}

/// A validated expense as it was appended to the ledger.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct ExpenseRecord {
    date: String,
    category: String,
    amount: Decimal,
    payment_method: String,
}

impl ExpenseRecord {
    /// Amount with exactly two decimals, as it is stored in the file.
    pub fn formatted_amount(&self) -> String {
        format!("{:.2}", self.amount)
    }
}

/// Handle on the ledger file. The path is resolved once by the caller and
/// every operation opens and releases the file within the call.
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Ledger {
        Ledger { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
