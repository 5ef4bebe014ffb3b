//! PresenceApp - Self-contained Actor+Relay composition of the four views.

use zoon::*;

use crate::api::PresenceApi;
use crate::config::AppConfig;
use crate::dataflow::Atom;
use crate::theme;
use crate::users::UserDirectory;
use crate::views;
use crate::views::mean_time_weekday::MeanTimeWeekday;
use crate::views::presence_start_end::PresenceStartEnd;
use crate::views::presence_weekday::PresenceWeekday;
use crate::views::top_employees::TopEmployees;
use shared::Theme;

/// One dashboard tab per view. No state is shared between them beyond the
/// user directory reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    PresenceWeekday,
    MeanTimeWeekday,
    PresenceStartEnd,
    TopEmployees,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::PresenceWeekday,
        ViewKind::MeanTimeWeekday,
        ViewKind::PresenceStartEnd,
        ViewKind::TopEmployees,
    ];

    pub fn tab_label(self) -> &'static str {
        match self {
            ViewKind::PresenceWeekday => "Presence by weekday",
            ViewKind::MeanTimeWeekday => "Mean time",
            ViewKind::PresenceStartEnd => "Start-end",
            ViewKind::TopEmployees => "Top 5",
        }
    }
}

/// Self-contained dashboard application.
#[derive(Clone)]
pub struct PresenceApp {
    pub config: AppConfig,
    pub users: UserDirectory,
    pub mean_time_weekday: MeanTimeWeekday,
    pub presence_weekday: PresenceWeekday,
    pub presence_start_end: PresenceStartEnd,
    pub top_employees: TopEmployees,
    pub active_view: Atom<ViewKind>,
}

impl PresenceApp {
    pub async fn new() -> Self {
        // Configuration first - the API origin is needed by every loader.
        let config = AppConfig::new().await;
        let api = PresenceApi::new(config.api_base.clone());

        let users = UserDirectory::new(api.clone());
        let mean_time_weekday = MeanTimeWeekday::new(api.clone());
        let presence_weekday = PresenceWeekday::new(api.clone());
        let presence_start_end = PresenceStartEnd::new(api.clone());
        let top_employees = TopEmployees::new(api);

        PresenceApp {
            config,
            users,
            mean_time_weekday,
            presence_weekday,
            presence_start_end,
            top_employees,
            // The original front page.
            active_view: Atom::new(ViewKind::PresenceWeekday),
        }
    }

    /// Root UI element
    pub fn root(&self) -> impl Element {
        Column::new()
            .s(Height::screen())
            .s(Width::fill())
            .s(Background::new()
                .color_signal(self.config.theme_signal().map(theme::page_background)))
            .s(Font::new().family([
                FontFamily::new("Inter"),
                FontFamily::new("system-ui"),
                FontFamily::new("Segoe UI"),
                FontFamily::new("Arial"),
                FontFamily::SansSerif,
            ]))
            .item(self.header())
            .item(self.body())
    }

    fn header(&self) -> impl Element {
        let tabs: Vec<_> = ViewKind::ALL
            .into_iter()
            .map(|kind| self.tab_button(kind))
            .collect();

        Row::new()
            .s(Padding::new().x(24).y(12))
            .s(Gap::both(8))
            .s(Align::new().center_y())
            .s(Borders::new().bottom_signal(
                self.config
                    .theme_signal()
                    .map(|t| Border::new().color(theme::border_color(t))),
            ))
            .item(
                El::new()
                    .s(Font::new()
                        .size(16)
                        .weight(FontWeight::Bold)
                        .color_signal(self.config.theme_signal().map(theme::text_color)))
                    .child(Text::new("Presence analyzer")),
            )
            .item(El::new().s(Width::fill()))
            .items(tabs)
            .item(self.theme_toggle())
    }

    fn tab_button(&self, kind: ViewKind) -> impl Element {
        let config = self.config.clone();
        let active_view = self.active_view.clone();
        Button::new()
            .s(Padding::new().x(12).y(6))
            .s(RoundedCorners::all(4))
            .s(Background::new().color_signal(map_ref! {
                let active = active_view.signal(),
                let theme = config.theme_signal() => {
                    if *active == kind {
                        theme::accent_color(*theme)
                    } else {
                        theme::control_background(*theme)
                    }
                }
            }))
            .s(Font::new().size(13).color_signal(map_ref! {
                let active = self.active_view.signal(),
                let theme = self.config.theme_signal() => {
                    if *active == kind {
                        theme::page_background(*theme)
                    } else {
                        theme::text_color(*theme)
                    }
                }
            }))
            .label(kind.tab_label())
            .on_press({
                let active_view = self.active_view.clone();
                move || active_view.set(kind)
            })
    }

    fn theme_toggle(&self) -> impl Element {
        let config = self.config.clone();
        Button::new()
            .s(Padding::new().x(12).y(6))
            .s(RoundedCorners::all(4))
            .s(Background::new()
                .color_signal(self.config.theme_signal().map(theme::control_background)))
            .s(Font::new()
                .size(13)
                .color_signal(self.config.theme_signal().map(theme::text_color)))
            .label(
                El::new().child_signal(self.config.theme_signal().map(|current| {
                    Text::new(match current {
                        Theme::Light => "Dark mode",
                        Theme::Dark => "Light mode",
                    })
                })),
            )
            .on_press(move || config.theme_toggled_relay.send(()))
    }

    fn body(&self) -> impl Element {
        let config = self.config.clone();
        let users = self.users.clone();
        let mean_time_weekday = self.mean_time_weekday.clone();
        let presence_weekday = self.presence_weekday.clone();
        let presence_start_end = self.presence_start_end.clone();
        let top_employees = self.top_employees.clone();

        El::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Scrollbars::both())
            .child_signal(self.active_view.signal().map(move |kind| match kind {
                ViewKind::PresenceWeekday => {
                    views::presence_weekday::panel(&presence_weekday, &users, &config).unify()
                }
                ViewKind::MeanTimeWeekday => {
                    views::mean_time_weekday::panel(&mean_time_weekday, &users, &config).unify()
                }
                ViewKind::PresenceStartEnd => {
                    views::presence_start_end::panel(&presence_start_end, &users, &config).unify()
                }
                ViewKind::TopEmployees => {
                    views::top_employees::panel(&top_employees, &config).unify()
                }
            }))
    }
}
