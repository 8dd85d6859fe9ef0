//! State-change notification
//!
//! A [`Store`] owns an [`AppState`] together with a caller-supplied
//! [`StateObserver`]. Every mutation that succeeds and changes the state is
//! followed by exactly one `on_state_changed` call; failed mutations and
//! no-ops are not reported.

use crate::error::SplitResult;
use crate::models::{Balance, ExpenseDraft, ExpenseId, Group, GroupId, User};

use super::AppState;

/// Hook invoked after the state has changed
pub trait StateObserver {
    fn on_state_changed(&mut self, state: &AppState) -> SplitResult<()>;
}

impl<F> StateObserver for F
where
    F: FnMut(&AppState) -> SplitResult<()>,
{
    fn on_state_changed(&mut self, state: &AppState) -> SplitResult<()> {
        self(state)
    }
}

/// Application state plus the observer that is told about every change
pub struct Store<O: StateObserver> {
    state: AppState,
    observer: O,
}

impl<O: StateObserver> Store<O> {
    pub fn new(state: AppState, observer: O) -> Self {
        Self { state, observer }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_parts(self) -> (AppState, O) {
        (self.state, self.observer)
    }

    pub fn current_user(&self) -> &User {
        self.state.current_user()
    }

    pub fn groups(&self) -> &[Group] {
        self.state.groups()
    }

    pub fn get_group(&self, group_id: &GroupId) -> Option<&Group> {
        self.state.get_group(group_id)
    }

    pub fn find_group(&self, identifier: &str) -> Option<&Group> {
        self.state.find_group(identifier)
    }

    pub fn get_group_balances(&self, group_id: &GroupId) -> Vec<Balance> {
        self.state.get_group_balances(group_id)
    }

    pub fn get_total_balance(&self) -> Balance {
        self.state.get_total_balance()
    }

    pub fn set_current_user(&mut self, user: User) -> SplitResult<()> {
        self.state.set_current_user(user)?;
        self.notify()
    }

    pub fn add_group(&mut self, name: &str, description: Option<&str>) -> SplitResult<GroupId> {
        let id = self.state.add_group(name, description)?;
        self.notify()?;
        Ok(id)
    }

    pub fn add_user_to_group(&mut self, group_id: &GroupId, user: User) -> SplitResult<bool> {
        let added = self.state.add_user_to_group(group_id, user)?;
        if added {
            self.notify()?;
        }
        Ok(added)
    }

    pub fn add_expense(&mut self, group_id: &GroupId, draft: ExpenseDraft) -> SplitResult<ExpenseId> {
        let id = self.state.add_expense(group_id, draft)?;
        self.notify()?;
        Ok(id)
    }

    pub fn clear_all_data(&mut self) -> SplitResult<()> {
        self.state.clear_all_data();
        self.notify()
    }

    fn notify(&mut self) -> SplitResult<()> {
        self.observer.on_state_changed(&self.state)
    }
}
