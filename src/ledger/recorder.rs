use std::fs::{self, OpenOptions};
use std::str::FromStr;

use chrono::NaiveDate;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{ExpenseRecord, Ledger, LedgerError, DATE_FORMAT, LEDGER_HEADER};

const PRECISION: u32 = 2;

impl ExpenseRecord {
    /// Validates the raw fields in order and stops at the first failure.
    pub fn new(date: &str, category: &str, amount: &str, payment_method: &str) -> Result<ExpenseRecord, LedgerError> {
        if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            return Err(LedgerError::InvalidDate(date.to_string()));
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(LedgerError::EmptyCategory);
        }

        let amount = parse_amount(amount)?.round_dp(PRECISION);
        if amount <= dec!(0) {
            return Err(LedgerError::NonPositiveAmount);
        }

        let payment_method = payment_method.trim();
        if payment_method.is_empty() {
            return Err(LedgerError::EmptyPaymentMethod);
        }

        Ok(ExpenseRecord {
            date: date.to_string(),
            category: category.to_string(),
            amount,
            payment_method: payment_method.to_string(),
        })
    }

    fn to_row(&self) -> [String; 4] {
        [
            self.date.clone(),
            self.category.clone(),
            self.formatted_amount(),
            self.payment_method.clone(),
        ]
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| LedgerError::InvalidAmount(raw.to_string()))
}

impl Ledger {
    /// Validates an expense and appends it to the ledger, creating the file
    /// (and its header row) on first use.
    pub fn add_expense(
        &self,
        date: &str,
        category: &str,
        amount: &str,
        payment_method: &str,
    ) -> Result<ExpenseRecord, LedgerError> {
        let record = ExpenseRecord::new(date, category, amount, payment_method).inspect_err(|err| {
            debug!("rejected expense, err={}", err);
        })?;

        self.append(&record).inspect_err(|err| {
            warn!("failed to append to {}, err={}", self.path.display(), err);
        })?;

        info!(
            "recorded expense date={} category={} amount={}",
            record.date,
            record.category,
            record.formatted_amount()
        );

        Ok(record)
    }

    fn append(&self, record: &ExpenseRecord) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let is_empty = file.metadata()?.len() == 0;
        let mut csv_writer = csv::WriterBuilder::new().from_writer(file);

        if is_empty {
            csv_writer.write_record(LEDGER_HEADER)?;
        }
        csv_writer.write_record(record.to_row())?;
        csv_writer.flush()?;

        Ok(())
    }
}
