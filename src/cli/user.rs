//! User CLI commands
//!
//! Shows and edits the current user. The user's ID never changes, so
//! existing group memberships and expenses keep pointing at them.

use clap::Subcommand;

use crate::error::{SplitError, SplitResult};
use crate::state::{StateObserver, Store};

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Show the current user
    Show,
    /// Update the current user's profile
    Set {
        /// New display name
        #[arg(short, long)]
        name: Option<String>,
        /// New email (pass an empty string to clear it)
        #[arg(short, long)]
        email: Option<String>,
    },
}

/// Handle a user command
pub fn handle_user_command<O: StateObserver>(
    store: &mut Store<O>,
    cmd: UserCommands,
) -> SplitResult<()> {
    match cmd {
        UserCommands::Show => {
            let user = store.current_user();
            println!("Name:  {}", user.name);
            println!("ID:    {}", user.id);
            if let Some(email) = &user.email {
                println!("Email: {}", email);
            }
        }

        UserCommands::Set { name, email } => {
            if name.is_none() && email.is_none() {
                return Err(SplitError::Validation(
                    "Nothing to update; pass --name or --email".into(),
                ));
            }

            let mut user = store.current_user().clone();
            if let Some(name) = name {
                user.name = name.trim().to_string();
            }
            if let Some(email) = email {
                let email = email.trim();
                user.email = if email.is_empty() {
                    None
                } else {
                    Some(email.to_string())
                };
            }

            store.set_current_user(user)?;
            println!("Updated user: {}", store.current_user().name);
        }
    }

    Ok(())
}
