//! Balance computation
//!
//! Every expense credits its full amount to the payer and debits the same
//! total across the split's participants, so the balances of a group always
//! sum to zero (up to floating-point rounding).

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{Balance, Expense, Group, SplitType, UserId};

/// Running totals that remember the order in which IDs were first seen
struct Tally<'a> {
    order: Vec<&'a UserId>,
    totals: HashMap<&'a UserId, f64>,
}

impl<'a> Tally<'a> {
    fn seeded(ids: impl Iterator<Item = &'a UserId>) -> Self {
        let mut tally = Self {
            order: Vec::new(),
            totals: HashMap::new(),
        };
        for id in ids {
            tally.adjust(id, 0.0);
        }
        tally
    }

    fn adjust(&mut self, id: &'a UserId, delta: f64) {
        match self.totals.get_mut(id) {
            Some(total) => *total += delta,
            None => {
                self.order.push(id);
                self.totals.insert(id, delta);
            }
        }
    }

    fn into_balances(self) -> Vec<Balance> {
        let Self { order, totals } = self;
        order
            .into_iter()
            .map(|id| Balance::new(id.clone(), totals.get(id).copied().unwrap_or(0.0)))
            .collect()
    }
}

/// How much each participant owes for one expense
///
/// Equal splits divide by the number of share entries, not by the size of
/// the group. Custom splits take each percentage of the amount. An equal
/// split without entries yields nothing.
pub fn expense_debits(expense: &Expense) -> Vec<(&UserId, f64)> {
    let shares = &expense.split.shares;
    match expense.split.split_type {
        SplitType::Equal => {
            if shares.is_empty() {
                return Vec::new();
            }
            let each = expense.amount / shares.len() as f64;
            shares.keys().map(|id| (id, each)).collect()
        }
        SplitType::Custom => shares
            .iter()
            .map(|(id, percentage)| (id, expense.amount * percentage / 100.0))
            .collect(),
    }
}

/// Net balance of every member of a group
///
/// Members come first, in member order, starting from zero. IDs that appear
/// in expenses but are not current members are kept and appended in the
/// order they are first seen.
pub fn compute_group_balances(group: &Group) -> Vec<Balance> {
    let mut tally = Tally::seeded(group.member_ids());

    for expense in &group.expenses {
        let debits = expense_debits(expense);
        if debits.is_empty() {
            warn!(
                group = %group.id,
                expense = %expense.id,
                "expense has no participants, skipping"
            );
            continue;
        }

        tally.adjust(&expense.paid_by, expense.amount);
        for (user_id, owed) in debits {
            tally.adjust(user_id, -owed);
        }
    }

    let balances = tally.into_balances();
    debug!(
        group = %group.id,
        expenses = group.expenses.len(),
        entries = balances.len(),
        "computed group balances"
    );
    balances
}

/// Look up one user's amount in a balance list, treating a missing entry as zero
pub fn member_balance(balances: &[Balance], user_id: &UserId) -> f64 {
    balances
        .iter()
        .find(|b| &b.user_id == user_id)
        .map(|b| b.amount)
        .unwrap_or(0.0)
}

/// The current user's balance summed over all groups
pub fn compute_total_balance(groups: &[Group], current_user_id: &UserId) -> Balance {
    let amount = groups
        .iter()
        .map(|group| member_balance(&compute_group_balances(group), current_user_id))
        .sum();

    Balance::new(current_user_id.clone(), amount)
}
