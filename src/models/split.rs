//! Split model
//!
//! A split is the policy for dividing one expense among participants. Shares
//! are keyed by user ID. For an equal split the values are kept only so a
//! form can show them again; the ledger divides by the number of entries.
//! For a custom split every value is a percentage of the expense amount.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ids::UserId;

/// Allowed distance between a custom split's total and 100%
pub const PERCENT_TOLERANCE: f64 = 0.01;

/// How an expense is divided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    /// Divided evenly among everyone listed in the shares
    #[default]
    Equal,
    /// Divided by explicit percentages
    Custom,
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "Equal"),
            Self::Custom => write!(f, "Custom"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    #[serde(rename = "type")]
    pub split_type: SplitType,

    #[serde(default)]
    pub shares: BTreeMap<UserId, f64>,
}

impl Split {
    /// Equal split over the given participants
    ///
    /// Each share is pre-filled with `100 / n` rounded to two decimals.
    pub fn equal<I>(participants: I) -> Self
    where
        I: IntoIterator<Item = UserId>,
    {
        let ids: Vec<UserId> = participants.into_iter().collect();
        let share = if ids.is_empty() {
            0.0
        } else {
            (100.0 / ids.len() as f64 * 100.0).round() / 100.0
        };

        Self {
            split_type: SplitType::Equal,
            shares: ids.into_iter().map(|id| (id, share)).collect(),
        }
    }

    /// Custom split from (user, percentage) pairs
    pub fn custom<I>(shares: I) -> Self
    where
        I: IntoIterator<Item = (UserId, f64)>,
    {
        Self {
            split_type: SplitType::Custom,
            shares: shares.into_iter().collect(),
        }
    }

    pub fn is_equal(&self) -> bool {
        self.split_type == SplitType::Equal
    }

    /// IDs of everyone who shares this expense
    pub fn participants(&self) -> impl Iterator<Item = &UserId> {
        self.shares.keys()
    }

    /// Sum of all share values
    pub fn percentage_total(&self) -> f64 {
        self.shares.values().sum()
    }

    /// Validate the split
    pub fn validate(&self) -> Result<(), SplitValidationError> {
        if self.shares.is_empty() {
            return Err(SplitValidationError::NoParticipants);
        }

        if self.split_type == SplitType::Custom {
            for (user_id, &percentage) in &self.shares {
                if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
                    return Err(SplitValidationError::PercentageOutOfRange {
                        user_id: user_id.clone(),
                        percentage,
                    });
                }
            }

            let total = self.percentage_total();
            if (total - 100.0).abs() > PERCENT_TOLERANCE {
                return Err(SplitValidationError::TotalNotHundred(total));
            }
        }

        Ok(())
    }
}

/// Validation errors for splits
#[derive(Debug, Clone, PartialEq)]
pub enum SplitValidationError {
    NoParticipants,
    PercentageOutOfRange { user_id: UserId, percentage: f64 },
    TotalNotHundred(f64),
}

impl fmt::Display for SplitValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParticipants => write!(f, "Split must include at least one member"),
            Self::PercentageOutOfRange {
                user_id,
                percentage,
            } => write!(
                f,
                "Share for {} must be between 0 and 100 (got {})",
                user_id, percentage
            ),
            Self::TotalNotHundred(total) => {
                write!(f, "Custom split must add up to 100% (got {:.2}%)", total)
            }
        }
    }
}

impl std::error::Error for SplitValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<UserId> {
        names.iter().map(|n| UserId::from(*n)).collect()
    }

    #[test]
    fn test_equal_prefills_rounded_shares() {
        let split = Split::equal(ids(&["a", "b", "c"]));
        assert!(split.is_equal());
        assert_eq!(split.shares.len(), 3);
        assert!(split.shares.values().all(|&v| v == 33.33));
        assert!(split.validate().is_ok());
    }

    #[test]
    fn test_empty_split_is_invalid() {
        let split = Split::equal(Vec::new());
        assert_eq!(split.validate(), Err(SplitValidationError::NoParticipants));
    }

    #[test]
    fn test_custom_total_within_tolerance() {
        let split = Split::custom(vec![
            (UserId::from("a"), 33.33),
            (UserId::from("b"), 33.33),
            (UserId::from("c"), 33.335),
        ]);
        assert!(split.validate().is_ok());
    }

    #[test]
    fn test_custom_total_off() {
        let split = Split::custom(vec![(UserId::from("a"), 60.0), (UserId::from("b"), 30.0)]);
        assert!(matches!(
            split.validate(),
            Err(SplitValidationError::TotalNotHundred(t)) if (t - 90.0).abs() < 1e-9
        ));
    }

    #[test]
    fn test_custom_negative_share() {
        let split = Split::custom(vec![(UserId::from("a"), 120.0), (UserId::from("b"), -20.0)]);
        assert!(matches!(
            split.validate(),
            Err(SplitValidationError::PercentageOutOfRange { .. })
        ));
    }

    #[test]
    fn test_equal_ignores_share_values() {
        // Values of an equal split are never checked
        let split = Split {
            split_type: SplitType::Equal,
            shares: vec![(UserId::from("a"), 7.0)].into_iter().collect(),
        };
        assert!(split.validate().is_ok());
    }

    #[test]
    fn test_json_shape() {
        let split = Split::custom(vec![(UserId::from("a"), 50.0), (UserId::from("b"), 50.0)]);
        let json = serde_json::to_value(&split).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "custom", "shares": {"a": 50.0, "b": 50.0}})
        );
    }
}
