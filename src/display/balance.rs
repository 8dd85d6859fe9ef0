//! Balance display formatting

use crate::config::Settings;
use crate::models::{Balance, BalanceStatus, Group};

use super::money::format_currency;

/// Format a group's balances, one member per line
pub fn format_group_balances(group: &Group, balances: &[Balance], settings: &Settings) -> String {
    if balances.is_empty() {
        return "No members.".to_string();
    }

    let rows: Vec<(&str, String, BalanceStatus)> = balances
        .iter()
        .map(|b| {
            (
                group.member_name(&b.user_id),
                format_currency(b.amount.abs(), &settings.currency_symbol),
                b.status(),
            )
        })
        .collect();

    let name_width = rows.iter().map(|r| r.0.chars().count()).max().unwrap_or(4).max(4);
    let amount_width = rows.iter().map(|r| r.1.chars().count()).max().unwrap_or(6).max(6);

    let mut output = String::new();
    for (name, amount, status) in rows {
        output.push_str(&format!(
            "{:<name_width$}  {:>amount_width$}  {}\n",
            name,
            amount,
            status,
            name_width = name_width,
            amount_width = amount_width,
        ));
    }
    output
}

/// Format the current user's total across all groups
pub fn format_total_balance(total: &Balance, settings: &Settings) -> String {
    let amount = format_currency(total.amount.abs(), &settings.currency_symbol);
    match total.status() {
        BalanceStatus::GetsBack => format!("{} to be received", amount),
        BalanceStatus::Owes => format!("{} to pay", amount),
        BalanceStatus::Settled => format!("{} (all settled up)", amount),
    }
}
