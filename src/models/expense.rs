//! Expense model
//!
//! An expense is immutable once it has been appended to a group. Forms build
//! an [`ExpenseDraft`], which receives its ID when the group accepts it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::DEFAULT_CATEGORY;
use super::ids::{ExpenseId, UserId};
use super::split::{Split, SplitValidationError};
use super::{now_millis, Timestamp};

/// A shared expense paid by one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Total amount paid, always positive
    pub amount: f64,

    /// Member who paid the full amount
    pub paid_by: UserId,

    pub category: String,

    /// When the expense happened (milliseconds since the Unix epoch)
    pub date: Timestamp,

    pub split: Split,
}

impl Expense {
    /// The expense date as a UTC datetime
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.title, self.amount)
    }
}

/// An expense that has not been added to a group yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub amount: f64,

    pub paid_by: UserId,

    pub category: String,

    pub date: Timestamp,

    pub split: Split,
}

impl ExpenseDraft {
    /// Create a draft dated now in the default category
    pub fn new(title: impl Into<String>, amount: f64, paid_by: UserId, split: Split) -> Self {
        Self {
            title: title.into(),
            description: None,
            amount,
            paid_by,
            category: DEFAULT_CATEGORY.to_string(),
            date: now_millis(),
            split,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_date(mut self, date: Timestamp) -> Self {
        self.date = date;
        self
    }

    /// Validate the draft on its own, without looking at group membership
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ExpenseValidationError::InvalidAmount(self.amount));
        }

        self.split.validate().map_err(ExpenseValidationError::Split)
    }

    /// Turn the draft into an expense with the given ID
    ///
    /// Title and description are trimmed; a blank description is dropped.
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            title: self.title.trim().to_string(),
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            amount: self.amount,
            paid_by: self.paid_by,
            category: self.category,
            date: self.date,
            split: self.split,
        }
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    InvalidAmount(f64),
    Split(SplitValidationError),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Please enter an expense title"),
            Self::InvalidAmount(amount) => {
                write!(f, "Expense amount must be greater than zero (got {})", amount)
            }
            Self::Split(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn dinner() -> ExpenseDraft {
        let split = Split::equal(vec![UserId::from("a"), UserId::from("b")]);
        ExpenseDraft::new("Dinner", 80.0, UserId::from("a"), split)
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = dinner();
        assert_eq!(draft.category, "Food");
        assert!(draft.description.is_none());
        assert!(draft.date > 0);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validate_title_and_amount() {
        let mut draft = dinner();
        draft.title = "  ".into();
        assert_eq!(draft.validate(), Err(ExpenseValidationError::EmptyTitle));

        let mut draft = dinner();
        draft.amount = 0.0;
        assert!(matches!(
            draft.validate(),
            Err(ExpenseValidationError::InvalidAmount(_))
        ));

        let mut draft = dinner();
        draft.amount = f64::NAN;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_into_expense_trims_fields() {
        let expense = dinner()
            .with_description("   ")
            .into_expense(ExpenseId::from("exp-1"));
        assert_eq!(expense.id.as_str(), "exp-1");
        assert!(expense.description.is_none());

        let mut draft = dinner().with_description(" tip included ");
        draft.title = " Dinner ".into();
        let expense = draft.into_expense(ExpenseId::from("exp-2"));
        assert_eq!(expense.title, "Dinner");
        assert_eq!(expense.description.as_deref(), Some("tip included"));
    }

    #[test]
    fn test_json_field_names() {
        let expense = dinner()
            .with_date(1_700_000_000_000)
            .into_expense(ExpenseId::from("exp-1"));
        let json = serde_json::to_value(&expense).unwrap();

        assert_eq!(json["paidBy"], "a");
        assert_eq!(json["date"], 1_700_000_000_000i64);
        assert_eq!(json["split"]["type"], "equal");
        assert!(json.get("description").is_none());
        assert!(expense.date_time().is_some());
    }
}
