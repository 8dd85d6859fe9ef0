//! Reset CLI command

use tracing::warn;

use crate::error::SplitResult;
use crate::state::{StateObserver, Store};
use crate::storage::Persistence;

/// Clear every group, keeping the current user
///
/// With `purge` the stored snapshot is discarded as well, so the next run
/// starts from a fresh default state.
pub fn handle_reset_command<O>(store: &mut Store<O>, force: bool, purge: bool) -> SplitResult<()>
where
    O: StateObserver + Persistence,
{
    let count = store.groups().len();
    if !force {
        println!(
            "This will delete {} group{} and every expense in them.",
            count,
            if count == 1 { "" } else { "s" }
        );
        println!("Run again with --force to confirm.");
        return Ok(());
    }

    warn!(groups = count, purge, "resetting all data");
    store.clear_all_data()?;
    if purge {
        store.observer_mut().discard()?;
        println!("Cleared all data and removed the saved state.");
    } else {
        println!("Cleared {} group{}.", count, if count == 1 { "" } else { "s" });
    }

    Ok(())
}
