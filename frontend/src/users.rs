//! UserDirectory reference-data domain.
//!
//! Loads the selectable user list once at construction and keeps it for the
//! page session, together with the id → avatar-URL mapping the views use to
//! reveal the avatar image. The list is replaced wholesale, never appended,
//! so re-initializing a view cannot duplicate selector options.

use crate::api::PresenceApi;
use crate::dataflow::Actor;
use indexmap::IndexMap;
use shared::UserRef;
use zoon::*;

#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryState {
    Loading,
    Ready {
        users: Vec<UserRef>,
        avatars: IndexMap<u32, String>,
    },
    /// The one-shot load failed. No retry; the selector stays empty with a
    /// hint, everything else on the page keeps working.
    Failed,
}

impl DirectoryState {
    pub fn avatar_url(&self, user_id: u32) -> Option<String> {
        match self {
            DirectoryState::Ready { avatars, .. } => avatars.get(&user_id).cloned(),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct UserDirectory {
    pub state: Actor<DirectoryState>,
}

impl UserDirectory {
    pub fn new(api: PresenceApi) -> Self {
        let state = Actor::new(DirectoryState::Loading, async move |state| {
            match api.users().await {
                Ok(users) => {
                    let avatars = users
                        .iter()
                        .map(|user| (user.id, user.avatar_url.clone()))
                        .collect();
                    state.set(DirectoryState::Ready { users, avatars });
                }
                Err(error) => {
                    zoon::eprintln!("Failed to load the user list: {}", error);
                    state.set(DirectoryState::Failed);
                }
            }
        });
        Self { state }
    }

    /// Response-ordered user list; empty until loaded.
    pub fn users_signal(&self) -> impl Signal<Item = Vec<UserRef>> + use<> {
        self.state.signal_ref(|state| match state {
            DirectoryState::Ready { users, .. } => users.clone(),
            _ => Vec::new(),
        })
    }

    pub fn is_loading_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.state
            .signal_ref(|state| matches!(state, DirectoryState::Loading))
    }

    pub fn has_failed_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.state
            .signal_ref(|state| matches!(state, DirectoryState::Failed))
    }
}
