use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ExpenseError;

/// One recorded expense. Field order is the column order of the persisted
/// flat file: `amount,category,description,date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Expense {
    /// Builds a record as-is. No validation: negative amounts (refunds) and
    /// arbitrary category/description text are accepted.
    pub fn new(
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }
}

/// Parses a raw amount string gathered by the shell. Failures stay
/// recoverable so the caller can reprompt instead of aborting.
pub fn parse_amount(raw: &str) -> Result<Decimal, ExpenseError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<Decimal>()
        .map_err(|_| ExpenseError::InvalidAmount(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_amount_accepts_decimal_text() {
        assert_eq!(parse_amount("12.50").unwrap(), dec!(12.50));
        assert_eq!(parse_amount("  7 ").unwrap(), dec!(7));
    }

    #[test]
    fn parse_amount_accepts_zero_and_negative_values() {
        assert_eq!(parse_amount("0").unwrap(), dec!(0));
        assert_eq!(parse_amount("-3.25").unwrap(), dec!(-3.25));
    }

    #[test]
    fn parse_amount_rejects_non_numeric_text() {
        let err = parse_amount("lunch").unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidAmount(raw) if raw == "lunch"));
    }

    #[test]
    fn new_keeps_fields_verbatim() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let expense = Expense::new(dec!(4.20), "Food", "coffee, to go", date);
        assert_eq!(expense.amount, dec!(4.20));
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.description, "coffee, to go");
        assert_eq!(expense.date, date);
    }
}
