//! Mean start and end of presence per weekday, rendered as interval bars
//! on a 0-24h track.

use crate::aggregate::AggregateLifecycle;
use crate::api::PresenceApi;
use crate::chart;
use crate::config::AppConfig;
use crate::dataflow::Atom;
use crate::users::UserDirectory;
use futures::FutureExt;
use shared::{UserRef, WeekdaySpan};
use zoon::*;

#[derive(Clone)]
pub struct PresenceStartEnd {
    pub lifecycle: AggregateLifecycle<u32, WeekdaySpan>,
    pub selected_user: Atom<Option<UserRef>>,
}

impl PresenceStartEnd {
    pub fn new(api: PresenceApi) -> Self {
        let lifecycle = AggregateLifecycle::new("presence_start_end", move |user_id| {
            let api = api.clone();
            async move { api.presence_start_end(user_id).await }.boxed_local()
        });
        Self {
            lifecycle,
            selected_user: Atom::new(None),
        }
    }

    pub fn select(&self, user: Option<UserRef>) {
        self.selected_user.set(user.clone());
        self.lifecycle
            .selection_changed_relay
            .send(user.map(|user| user.id));
    }
}

pub fn panel(view: &PresenceStartEnd, users: &UserDirectory, config: &AppConfig) -> impl Element {
    let render = {
        let config = config.clone();
        move |rows| chart::span_chart(rows, &config).unify()
    };
    super::user_view_panel(
        config,
        users,
        "Presence start-end by weekday",
        "Select an employee to see their mean arrival and departure interval",
        &view.selected_user,
        &view.lifecycle,
        {
            let view = view.clone();
            move |user| view.select(user)
        },
        render,
    )
}
