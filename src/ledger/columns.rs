//! Locating the four logical fields among arbitrarily named ledger columns.
//!
//! Headers are compared in normalized form: lowercased, known accented vowels
//! folded to plain ones and spaces replaced by underscores. A field is first
//! looked up by exact name, then by the first header containing its keyword.

use csv::StringRecord;

const ACCENT_FOLDS: [(char, char); 6] = [('á', 'a'), ('é', 'e'), ('í', 'i'), ('ó', 'o'), ('ú', 'u'), ('ü', 'u')];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Category,
    Amount,
    PaymentMethod,
}

impl Field {
    fn exact_names(&self) -> &'static [&'static str] {
        match self {
            Field::Date => &["fecha"],
            Field::Category => &["categoria"],
            Field::Amount => &["cantidad"],
            Field::PaymentMethod => &["metodo_de_pago"],
        }
    }

    fn keyword(&self) -> &'static str {
        match self {
            Field::Date => "fecha",
            Field::Category => "categor",
            Field::Amount => "cantidad",
            Field::PaymentMethod => "metod",
        }
    }

    /// Date and category borrow the first column when unresolved, the
    /// others read as empty.
    fn falls_back_to_first_column(&self) -> bool {
        matches!(self, Field::Date | Field::Category)
    }
}

pub fn normalize_header(header: &str) -> String {
    header
        .to_lowercase()
        .chars()
        .map(|c| {
            ACCENT_FOLDS
                .iter()
                .find(|(accented, _)| *accented == c)
                .map_or(c, |(_, plain)| *plain)
        })
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Column index chosen for each logical field, resolved once per header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    date: Option<usize>,
    category: Option<usize>,
    amount: Option<usize>,
    payment_method: Option<usize>,
}

impl ColumnMap {
    pub fn resolve(headers: &StringRecord) -> ColumnMap {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let first_column = if normalized.is_empty() { None } else { Some(0) };

        let locate = |field: Field| {
            let exact = normalized
                .iter()
                .position(|name| field.exact_names().iter().any(|exact| *exact == name.as_str()));
            let by_keyword = || normalized.iter().position(|name| name.contains(field.keyword()));

            exact.or_else(by_keyword).or_else(|| {
                if field.falls_back_to_first_column() {
                    first_column
                } else {
                    None
                }
            })
        };

        ColumnMap {
            date: locate(Field::Date),
            category: locate(Field::Category),
            amount: locate(Field::Amount),
            payment_method: locate(Field::PaymentMethod),
        }
    }

    pub fn index(&self, field: Field) -> Option<usize> {
        match field {
            Field::Date => self.date,
            Field::Category => self.category,
            Field::Amount => self.amount,
            Field::PaymentMethod => self.payment_method,
        }
    }

    /// Cell for `field` in `row`; unresolved fields and short rows read as empty.
    pub fn cell<'r>(&self, row: &'r StringRecord, field: Field) -> &'r str {
        self.index(field).and_then(|index| row.get(index)).unwrap_or("")
    }
}
