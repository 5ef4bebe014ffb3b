//! Mean presence time per weekday, rendered as a column chart.

use crate::aggregate::AggregateLifecycle;
use crate::api::PresenceApi;
use crate::chart;
use crate::config::AppConfig;
use crate::dataflow::Atom;
use crate::users::UserDirectory;
use futures::FutureExt;
use shared::{UserRef, WeekdayMean};
use zoon::*;

#[derive(Clone)]
pub struct MeanTimeWeekday {
    pub lifecycle: AggregateLifecycle<u32, WeekdayMean>,
    pub selected_user: Atom<Option<UserRef>>,
}

impl MeanTimeWeekday {
    pub fn new(api: PresenceApi) -> Self {
        let lifecycle = AggregateLifecycle::new("mean_time_weekday", move |user_id| {
            let api = api.clone();
            async move { api.mean_time_weekday(user_id).await }.boxed_local()
        });
        Self {
            lifecycle,
            selected_user: Atom::new(None),
        }
    }

    /// The only selection entry point; `None` is the placeholder option.
    pub fn select(&self, user: Option<UserRef>) {
        self.selected_user.set(user.clone());
        self.lifecycle
            .selection_changed_relay
            .send(user.map(|user| user.id));
    }
}

pub fn panel(view: &MeanTimeWeekday, users: &UserDirectory, config: &AppConfig) -> impl Element {
    let render = {
        let config = config.clone();
        move |rows| chart::column_chart(rows, &config).unify()
    };
    super::user_view_panel(
        config,
        users,
        "Mean presence time by weekday",
        "Select an employee to see their mean presence time per weekday",
        &view.selected_user,
        &view.lifecycle,
        {
            let view = view.clone();
            move |user| view.select(user)
        },
        render,
    )
}
