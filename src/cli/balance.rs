//! Balance CLI command

use crate::config::Settings;
use crate::display::{format_group_balances, format_total_balance};
use crate::error::{SplitError, SplitResult};
use crate::state::{StateObserver, Store};

use super::{print_block, resolve_group};

/// Print one group's balances, or your total across every group
pub fn handle_balance_command<O: StateObserver>(
    store: &Store<O>,
    settings: &Settings,
    group: Option<String>,
) -> SplitResult<()> {
    match group {
        Some(identifier) => {
            let group_id = resolve_group(store, &identifier)?;
            let group = store
                .get_group(&group_id)
                .ok_or_else(|| SplitError::group_not_found(group_id.to_string()))?;
            let balances = store.get_group_balances(&group_id);

            println!("Balances for {}:", group.name);
            print_block(&format_group_balances(group, &balances, settings));
        }
        None => {
            let total = store.get_total_balance();
            println!("Total balance: {}", format_total_balance(&total, settings));
        }
    }

    Ok(())
}
