//! Total presence per weekday, rendered as a proportional chart.

use crate::aggregate::AggregateLifecycle;
use crate::api::PresenceApi;
use crate::chart;
use crate::config::AppConfig;
use crate::dataflow::Atom;
use crate::users::UserDirectory;
use futures::FutureExt;
use shared::{UserRef, WeekdayTotal};
use zoon::*;

#[derive(Clone)]
pub struct PresenceWeekday {
    pub lifecycle: AggregateLifecycle<u32, WeekdayTotal>,
    pub selected_user: Atom<Option<UserRef>>,
}

impl PresenceWeekday {
    pub fn new(api: PresenceApi) -> Self {
        let lifecycle = AggregateLifecycle::new("presence_weekday", move |user_id| {
            let api = api.clone();
            async move { api.presence_weekday(user_id).await }.boxed_local()
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

pub fn panel(view: &PresenceWeekday, users: &UserDirectory, config: &AppConfig) -> impl Element {
    let render = {
        let config = config.clone();
        move |rows| chart::proportional_chart(rows, &config).unify()
    };
    super::user_view_panel(
        config,
        users,
        "Presence by weekday",
        "Select an employee to see how their presence splits across weekdays",
        &view.selected_user,
        &view.lifecycle,
        {
            let view = view.clone();
            move |user| view.select(user)
        },
        render,
    )
}
