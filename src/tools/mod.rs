use enum_dispatch::enum_dispatch;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::ledger::{Ledger, ListedExpense};


pub const ADD_EXPENSE_PROMPT: &str =
    "Use the \"add_expense\" tool to add a new expense. Provide the date, category, amount and payment method.";

#[derive(Debug, PartialEq, Error)]
pub enum ToolError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),
    #[error("tool '{name}' takes {expected} argument(s), got {actual}")]
    WrongArity {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Payload returned by `list_expenses`, either `{"data": [...]}` or `{"error": "..."}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSet {
    Data(Vec<ListedExpense>),
    Error(String),
}

impl RecordSet {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|err| serde_json::json!({ "error": err.to_string() }).to_string())
    }
}

/// Every tool answers with text for the invoking host, failures included.
#[enum_dispatch]
pub trait InvokableTool {
    fn name(&self) -> &'static str;

    fn invoke(&self, ledger: &Ledger) -> String;
}

#[enum_dispatch(InvokableTool)]
#[derive(Debug, PartialEq)]
pub enum Tool {
    AddExpense,
    ListExpenses,
    AddExpensePrompt,
}

impl Tool {
    /// Builds a tool call from its name followed by its positional arguments.
    pub fn parse(name: &str, args: &[String]) -> Result<Tool, ToolError> {
        let expect_arity = |name: &'static str, expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(ToolError::WrongArity {
                    name,
                    expected,
                    actual: args.len(),
                })
            }
        };

        match name {
            AddExpense::NAME => {
                expect_arity(AddExpense::NAME, 4)?;
                Ok(Tool::AddExpense(AddExpense::new(&args[0], &args[1], &args[2], &args[3])))
            },
            ListExpenses::NAME => {
                expect_arity(ListExpenses::NAME, 0)?;
                Ok(Tool::ListExpenses(ListExpenses))
            },
            AddExpensePrompt::NAME => {
                expect_arity(AddExpensePrompt::NAME, 0)?;
                Ok(Tool::AddExpensePrompt(AddExpensePrompt))
            },
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct AddExpense {
    date: String,
    category: String,
    amount: String,
    payment_method: String,
}

impl AddExpense {
    pub const NAME: &'static str = "add_expense";

    pub fn new(date: &str, category: &str, amount: &str, payment_method: &str) -> AddExpense {
        AddExpense {
            date: date.to_string(),
            category: category.to_string(),
            amount: amount.to_string(),
            payment_method: payment_method.to_string(),
        }
    }
}

impl InvokableTool for AddExpense {
    fn name(&self) -> &'static str {
        AddExpense::NAME
    }

    fn invoke(&self, ledger: &Ledger) -> String {
        match ledger.add_expense(&self.date, &self.category, &self.amount, &self.payment_method) {
            Ok(record) => format!(
                "Expense added: {}, {}, {}, {}",
                record.date(),
                record.category(),
                record.formatted_amount(),
                record.payment_method()
            ),
            Err(err) if err.is_validation() => format!("Error: {}.", err),
            Err(err) => format!("Error: could not write to the ledger: {}", err),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ListExpenses;

impl ListExpenses {
    pub const NAME: &'static str = "list_expenses";
}

impl InvokableTool for ListExpenses {
    fn name(&self) -> &'static str {
        ListExpenses::NAME
    }

    fn invoke(&self, ledger: &Ledger) -> String {
        let record_set = match ledger.list_expenses() {
            Ok(expenses) => RecordSet::Data(expenses),
            Err(err) => {
                debug!("failed to read ledger, err={}", err);
                RecordSet::Error(format!("could not read the ledger file: {}", err))
            },
        };

        record_set.to_json()
    }
}

#[derive(Debug, PartialEq)]
pub struct AddExpensePrompt;

impl AddExpensePrompt {
    pub const NAME: &'static str = "prompt_add_expense";
}

impl InvokableTool for AddExpensePrompt {
    fn name(&self) -> &'static str {
        AddExpensePrompt::NAME
    }

    fn invoke(&self, _ledger: &Ledger) -> String {
        ADD_EXPENSE_PROMPT.to_string()
    }
}
