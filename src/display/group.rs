//! Group display formatting
//!
//! Formats groups for terminal output in list and detail views.

use crate::config::Settings;
use crate::ledger;
use crate::models::{Group, UserId};

use super::balance::format_group_balances;
use super::expense::format_expense_list;
use super::money::{format_currency, format_date};

/// Format all groups as a table, with the given user's balance in each
pub fn format_group_list(groups: &[Group], current_user: &UserId, settings: &Settings) -> String {
    if groups.is_empty() {
        return "No groups yet. Create one with 'groupsplit group create <name>'.".to_string();
    }

    let name_width = groups
        .iter()
        .map(|g| g.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>7}  {:>8}  {:>12}  {:>12}\n",
        "Name",
        "Members",
        "Expenses",
        "Spent",
        "Your Balance",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->7}  {:->8}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for group in groups {
        let balances = ledger::compute_group_balances(group);
        let mine = ledger::member_balance(&balances, current_user);

        output.push_str(&format!(
            "{:<name_width$}  {:>7}  {:>8}  {:>12}  {:>12}\n",
            group.name,
            group.members.len(),
            group.expenses.len(),
            format_currency(group.total_spent(), &settings.currency_symbol),
            format_currency(mine, &settings.currency_symbol),
            name_width = name_width,
        ));
    }

    output
}

/// Format a single group with members, expenses and balances
pub fn format_group_details(group: &Group, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Group: {}\n", group.name));
    output.push_str(&format!("  ID:       {}\n", group.id));
    output.push_str(&format!(
        "  Created:  {} by {}\n",
        format_date(group.created_at, &settings.date_format),
        group.member_name(&group.created_by)
    ));
    if let Some(description) = &group.description {
        output.push_str(&format!("  About:    {}\n", description));
    }

    output.push_str(&format!("\nMembers ({}):\n", group.members.len()));
    for member in &group.members {
        match &member.email {
            Some(email) => output.push_str(&format!("  {} <{}>\n", member.name, email)),
            None => output.push_str(&format!("  {}\n", member.name)),
        }
    }

    output.push_str("\nExpenses:\n");
    output.push_str(&format_expense_list(group, settings));
    if !output.ends_with('\n') {
        output.push('\n');
    }

    output.push_str("\nBalances:\n");
    let balances = ledger::compute_group_balances(group);
    output.push_str(&format_group_balances(group, &balances, settings));

    output
}
