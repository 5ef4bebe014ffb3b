//! The four dashboard views.
//!
//! Structurally parallel pipelines: reference data → selector → aggregate
//! fetch → transform → renderer. The three employee-keyed views share the
//! scaffolding in this module; the year/month view adds a cascading selector
//! pair on top of the same lifecycle.

use crate::aggregate::{AggregateLifecycle, DisplayState};
use crate::config::AppConfig;
use crate::dataflow::Atom;
use crate::selector::{SelectorOption, selector};
use crate::theme;
use crate::users::{DirectoryState, UserDirectory};
use shared::UserRef;
use zoon::*;

pub mod mean_time_weekday;
pub mod presence_start_end;
pub mod presence_weekday;
pub mod top_employees;

pub fn panel_title(config: &AppConfig, title: &'static str) -> impl Element {
    El::new()
        .s(Font::new()
            .size(18)
            .weight(FontWeight::Bold)
            .color_signal(config.theme_signal().map(theme::text_color)))
        .child(Text::new(title))
}

pub fn loading_indicator(config: &AppConfig) -> impl Element {
    El::new()
        .s(Padding::all(24))
        .s(Font::new()
            .size(14)
            .color_signal(config.theme_signal().map(theme::muted_text_color)))
        .child(Text::new("Loading..."))
}

pub fn no_data_indicator(config: &AppConfig) -> impl Element {
    El::new()
        .s(Padding::all(24))
        .s(Font::new()
            .size(14)
            .color_signal(config.theme_signal().map(theme::muted_text_color)))
        .child(Text::new("No data for this selection"))
}

pub fn muted_note(config: &AppConfig, note: impl Into<String>) -> impl Element {
    El::new()
        .s(Padding::all(24))
        .s(Font::new()
            .size(14)
            .color_signal(config.theme_signal().map(theme::muted_text_color)))
        .child(Text::new(note.into()))
}

fn avatar_image(url: String, name: String) -> impl Element {
    Image::new()
        .s(Width::exact(48))
        .s(Height::exact(48))
        .s(RoundedCorners::all(24))
        .url(url)
        .description(name)
}

/// Scaffolding shared by the three employee-keyed views: user selector,
/// avatar region and the four-state display region.
///
/// The avatar is revealed only after a fetch settles (content or no-data)
/// and only for a non-placeholder selection, looked up in the directory's
/// id → avatar-URL mapping.
pub fn user_view_panel<R>(
    config: &AppConfig,
    users: &UserDirectory,
    title: &'static str,
    hint: &'static str,
    selected_user: &Atom<Option<UserRef>>,
    lifecycle: &AggregateLifecycle<u32, R>,
    on_select: impl Fn(Option<UserRef>) + Clone + 'static,
    render: impl Fn(Vec<R>) -> RawElOrText + 'static,
) -> impl Element
where
    R: Clone + Send + Sync + PartialEq + 'static,
{
    let selector_area_signal = {
        let config = config.clone();
        let selected_user = selected_user.clone();
        users.state.signal().map(move |directory| match directory {
            DirectoryState::Loading => loading_indicator(&config).unify(),
            DirectoryState::Failed => muted_note(&config, "User list unavailable").unify(),
            DirectoryState::Ready { users, .. } => {
                let options: Vec<SelectorOption<UserRef>> = users
                    .into_iter()
                    .map(|user| {
                        let label = user.name.clone();
                        SelectorOption::new(user, label)
                    })
                    .collect();
                selector(
                    &config,
                    always(options),
                    selected_user.signal().map(|user| user.map(|user| user.name)),
                    on_select.clone(),
                )
                .unify()
            }
        })
    };

    let avatar_signal = map_ref! {
        let display = lifecycle.display_signal(),
        let selected = selected_user.signal(),
        let directory = users.state.signal() => {
            match (*display, selected) {
                (DisplayState::Content | DisplayState::Empty, Some(user)) => {
                    directory.avatar_url(user.id).map(|url| (url, user.name.clone()))
                }
                _ => None,
            }
        }
    };

    let body_signal = {
        let config = config.clone();
        map_ref! {
            let display = lifecycle.display_signal(),
            let rows = lifecycle.rows_signal() => {
                match *display {
                    DisplayState::Initial => muted_note(&config, hint).unify(),
                    DisplayState::Loading => loading_indicator(&config).unify(),
                    DisplayState::Empty => no_data_indicator(&config).unify(),
                    DisplayState::Content => render(rows.clone()),
                }
            }
        }
    };

    Column::new()
        .s(Padding::all(24))
        .s(Gap::both(16))
        .s(Align::new().top())
        .item(panel_title(config, title))
        .item(
            Row::new()
                .s(Gap::both(16))
                .s(Align::new().center_y())
                .item(El::new().child_signal(selector_area_signal))
                .item(El::new().child_signal(
                    avatar_signal.map(|avatar| avatar.map(|(url, name)| avatar_image(url, name))),
                )),
        )
        .item(El::new().child_signal(body_signal))
}
