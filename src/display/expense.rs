//! Expense display formatting

use crate::config::Settings;
use crate::models::{Expense, Group, SplitType};

use super::money::{format_currency, format_date};

/// Short description of how an expense is split
pub fn describe_split(expense: &Expense, group: &Group) -> String {
    let split = &expense.split;
    match split.split_type {
        SplitType::Equal => format!("equal among {}", split.shares.len()),
        SplitType::Custom => split
            .shares
            .iter()
            .map(|(id, pct)| format!("{} {}%", group.member_name(id), trim_number(*pct)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn trim_number(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format a group's expenses as a table
pub fn format_expense_list(group: &Group, settings: &Settings) -> String {
    if group.expenses.is_empty() {
        return "No expenses yet.".to_string();
    }

    let rows: Vec<[String; 6]> = group
        .expenses
        .iter()
        .map(|e| {
            [
                format_date(e.date, &settings.date_format),
                e.title.clone(),
                e.category.clone(),
                group.member_name(&e.paid_by).to_string(),
                format_currency(e.amount, &settings.currency_symbol),
                describe_split(e, group),
            ]
        })
        .collect();

    let headers = ["Date", "Title", "Category", "Paid By", "Amount", "Split"];
    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    output.push_str(&format_row(&headers.map(String::from), &widths));
    output.push_str(&format_row(&widths.map(|w| "-".repeat(w)), &widths));
    for row in &rows {
        output.push_str(&format_row(row, &widths));
    }

    output.push_str(&format!(
        "\nTotal spent: {}\n",
        format_currency(group.total_spent(), &settings.currency_symbol)
    ));
    output
}

fn format_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        // amount column is right-aligned
        if i == 4 {
            line.push_str(&format!("{:>width$}", cell, width = *width));
        } else {
            line.push_str(&format!("{:<width$}", cell, width = *width));
        }
        if i + 1 < cells.len() {
            line.push_str("  ");
        }
    }
    let mut line = line.trim_end().to_string();
    line.push('\n');
    line
}
