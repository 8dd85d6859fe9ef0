//! Balance model
//!
//! Balances are derived from expenses and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// Amounts closer to zero than this are shown as settled
pub const SETTLED_EPSILON: f64 = 0.005;

/// A member's net position
///
/// Positive means others owe this user; negative means this user owes others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub user_id: UserId,
    pub amount: f64,
}

impl Balance {
    pub fn new(user_id: UserId, amount: f64) -> Self {
        Self { user_id, amount }
    }

    pub fn zero(user_id: UserId) -> Self {
        Self::new(user_id, 0.0)
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::of(self.amount)
    }
}

/// Direction of a balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    /// The user is owed money
    GetsBack,
    /// The user owes money
    Owes,
    Settled,
}

impl BalanceStatus {
    pub fn of(amount: f64) -> Self {
        if amount > SETTLED_EPSILON {
            Self::GetsBack
        } else if amount < -SETTLED_EPSILON {
            Self::Owes
        } else {
            Self::Settled
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GetsBack => write!(f, "gets back"),
            Self::Owes => write!(f, "owes"),
            Self::Settled => write!(f, "settled up"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(Balance::new("a".into(), 50.0).status(), BalanceStatus::GetsBack);
        assert_eq!(Balance::new("a".into(), -0.5).status(), BalanceStatus::Owes);
        assert_eq!(Balance::zero("a".into()).status(), BalanceStatus::Settled);
        assert_eq!(BalanceStatus::of(1e-12), BalanceStatus::Settled);
    }

    #[test]
    fn test_json_shape() {
        let balance = Balance::new("user-1".into(), -20.0);
        let json = serde_json::to_value(&balance).unwrap();
        assert_eq!(json, serde_json::json!({"userId": "user-1", "amount": -20.0}));
    }
}
