//! Expense CLI commands
//!
//! Implements CLI commands for logging and listing group expenses.

use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_currency, format_expense_list};
use crate::error::{SplitError, SplitResult};
use crate::models::{category, ExpenseDraft, Group, Split, Timestamp, UserId};
use crate::state::{StateObserver, Store};

use super::{print_block, resolve_group, resolve_member};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense to a group
    ///
    /// Without --share the amount is split equally, over the --with members
    /// or over everyone in the group.
    Add {
        /// Group name or ID
        group: String,
        /// What the money was spent on
        title: String,
        /// Amount paid
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Member who paid (defaults to you)
        #[arg(short, long)]
        paid_by: Option<String>,
        /// Expense category
        #[arg(short, long)]
        category: Option<String>,
        /// Longer description
        #[arg(short, long)]
        description: Option<String>,
        /// Expense date (YYYY-MM-DD, defaults to now)
        #[arg(long)]
        date: Option<String>,
        /// Custom percentage share as NAME=PERCENT (repeatable)
        #[arg(short, long = "share", value_parser = parse_share)]
        shares: Vec<(String, f64)>,
        /// Member taking part in an equal split (repeatable)
        #[arg(short = 'w', long = "with", conflicts_with = "shares")]
        participants: Vec<String>,
    },
    /// List a group's expenses
    List {
        /// Group name or ID
        group: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command<O: StateObserver>(
    store: &mut Store<O>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SplitResult<()> {
    match cmd {
        ExpenseCommands::Add {
            group,
            title,
            amount,
            paid_by,
            category: category_name,
            description,
            date,
            shares,
            participants,
        } => {
            let group_id = resolve_group(store, &group)?;
            let target = store
                .get_group(&group_id)
                .ok_or_else(|| SplitError::group_not_found(group_id.to_string()))?;

            let payer = match paid_by {
                Some(name) => resolve_member(target, &name)?,
                None => store.current_user().id.clone(),
            };
            let split = build_split(target, &shares, &participants)?;

            let mut draft = ExpenseDraft::new(title, amount, payer, split).with_category(
                category::normalize(category_name.as_deref().unwrap_or(&settings.default_category)),
            );
            if let Some(description) = description {
                draft = draft.with_description(description);
            }
            if let Some(date) = date {
                draft = draft.with_date(parse_date(&date)?);
            }

            let group_name = target.name.clone();
            let amount_text = format_currency(draft.amount, &settings.currency_symbol);
            let expense_id = store.add_expense(&group_id, draft)?;
            println!("Added expense to {}: {}", group_name, amount_text);
            println!("  ID: {}", expense_id);
        }

        ExpenseCommands::List { group } => {
            let group_id = resolve_group(store, &group)?;
            let group = store
                .get_group(&group_id)
                .ok_or_else(|| SplitError::group_not_found(group_id.to_string()))?;

            print_block(&format_expense_list(group, settings));
        }
    }

    Ok(())
}

/// Build the split from command-line options
fn build_split(
    group: &Group,
    shares: &[(String, f64)],
    participants: &[String],
) -> SplitResult<Split> {
    if !shares.is_empty() {
        let mut resolved = Vec::with_capacity(shares.len());
        for (name, percentage) in shares {
            resolved.push((resolve_member(group, name)?, *percentage));
        }
        return Ok(Split::custom(resolved));
    }

    let ids: Vec<UserId> = if participants.is_empty() {
        group.member_ids().cloned().collect()
    } else {
        participants
            .iter()
            .map(|name| resolve_member(group, name))
            .collect::<SplitResult<_>>()?
    };
    Ok(Split::equal(ids))
}

/// Parse NAME=PERCENT
fn parse_share(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=PERCENT, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing member name in '{}'", s));
    }
    let percentage: f64 = value
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| format!("invalid percentage in '{}'", s))?;
    Ok((name.to_string(), percentage))
}

/// Parse a YYYY-MM-DD date as noon UTC
fn parse_date(s: &str) -> SplitResult<Timestamp> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| SplitError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))?;
    let noon = NaiveTime::from_hms_opt(12, 0, 0)
        .ok_or_else(|| SplitError::Validation("Invalid time of day".into()))?;
    Ok(date.and_time(noon).and_utc().timestamp_millis())
}
