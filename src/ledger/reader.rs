use std::fs::File;

use log::debug;
use serde::Serialize;

use super::columns::{ColumnMap, Field};
use super::{Ledger, LedgerError};

/// Amount cell as read back: a number when it parses, otherwise the original text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl From<&str> for Amount {
    fn from(raw: &str) -> Self {
        match raw.replace(',', "").trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Amount::Number(value),
            _ => Amount::Text(raw.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedExpense {
    pub date: String,
    pub category: String,
    pub amount: Amount,
    pub payment_method: String,
}

impl ListedExpense {
    fn from_row(columns: &ColumnMap, row: &csv::StringRecord) -> ListedExpense {
        ListedExpense {
            date: columns.cell(row, Field::Date).to_string(),
            category: columns.cell(row, Field::Category).to_string(),
            amount: Amount::from(columns.cell(row, Field::Amount)),
            payment_method: columns.cell(row, Field::PaymentMethod).to_string(),
        }
    }
}

impl Ledger {
    /// Reads every record in append order. A missing ledger is an empty one.
    pub fn list_expenses(&self) -> Result<Vec<ListedExpense>, LedgerError> {
        if !self.path.exists() {
            debug!("ledger {} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

        let columns = ColumnMap::resolve(csv_reader.headers()?);
        debug!("resolved ledger columns, columns={:?}", columns);

        let mut expenses = Vec::new();
        for row in csv_reader.records() {
            expenses.push(ListedExpense::from_row(&columns, &row?));
        }

        Ok(expenses)
    }
}
