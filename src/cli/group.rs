//! Group CLI commands
//!
//! Implements CLI commands for creating groups and managing their members.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_group_details, format_group_list};
use crate::error::{SplitError, SplitResult};
use crate::models::{Group, User};
use crate::services;
use crate::state::{StateObserver, Store};

use super::{print_block, resolve_group};

/// Group subcommands
#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a new group (you are added automatically)
    Create {
        /// Group name
        name: String,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
        /// Additional member names
        #[arg(short, long = "member")]
        members: Vec<String>,
    },
    /// List all groups
    List,
    /// Show group members, expenses and balances
    Show {
        /// Group name or ID
        group: String,
    },
    /// Add a member to a group
    AddMember {
        /// Group name or ID
        group: String,
        /// Member name
        name: String,
        /// Member email
        #[arg(short, long)]
        email: Option<String>,
    },
}

/// Handle a group command
pub fn handle_group_command<O: StateObserver>(
    store: &mut Store<O>,
    settings: &Settings,
    cmd: GroupCommands,
) -> SplitResult<()> {
    match cmd {
        GroupCommands::Create {
            name,
            description,
            members,
        } => {
            // Groups are addressed by name too
            if store.groups().iter().any(|g| g.matches_name(&name)) {
                return Err(SplitError::Duplicate {
                    entity_type: "Group",
                    identifier: name.trim().to_string(),
                });
            }

            // Validate every member before anything is created
            let mut new_members: Vec<User> = Vec::new();
            for member_name in &members {
                let user = services::new_member(member_name, None)?;
                let clashes = store.current_user().matches_name(&user.name)
                    || new_members.iter().any(|m| m.matches_name(&user.name));
                if clashes {
                    return Err(SplitError::Duplicate {
                        entity_type: "Member",
                        identifier: user.name,
                    });
                }
                new_members.push(user);
            }

            let group_id = store.add_group(&name, description.as_deref())?;
            for user in new_members {
                store.add_user_to_group(&group_id, user)?;
            }

            if let Some(group) = store.get_group(&group_id) {
                println!(
                    "Created group: {} ({} member{})",
                    group.name,
                    group.members.len(),
                    if group.members.len() == 1 { "" } else { "s" }
                );
                println!("  ID: {}", group.id);
            }
        }

        GroupCommands::List => {
            print_block(&format_group_list(
                store.groups(),
                &store.current_user().id,
                settings,
            ));
        }

        GroupCommands::Show { group } => {
            let group_id = resolve_group(store, &group)?;
            let group = store
                .get_group(&group_id)
                .ok_or_else(|| SplitError::group_not_found(group_id.to_string()))?;
            print_block(&format_group_details(group, settings));
        }

        GroupCommands::AddMember { group, name, email } => {
            let group_id = resolve_group(store, &group)?;
            let user = services::new_member(&name, email.as_deref())?;

            let existing = store
                .get_group(&group_id)
                .ok_or_else(|| SplitError::group_not_found(group_id.to_string()))?;
            reject_duplicate_name(existing, &user)?;
            let group_name = existing.name.clone();

            let member_name = user.name.clone();
            store.add_user_to_group(&group_id, user)?;
            println!("Added {} to {}", member_name, group_name);
        }
    }

    Ok(())
}

/// Members are addressed by name on the command line, so names must be unique
fn reject_duplicate_name(group: &Group, user: &User) -> SplitResult<()> {
    if group.member_by_name(&user.name).is_some() {
        return Err(SplitError::Duplicate {
            entity_type: "Member",
            identifier: user.name.clone(),
        });
    }
    Ok(())
}
