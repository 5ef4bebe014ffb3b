//! Top-5 employees for a selected year/month, rendered as a ranked card list.
//!
//! Two cascading selectors: years load once at construction; the month list
//! is fetched per selected year and replaced wholesale on every year change.
//! Both the month-list fetch and the ranking fetch are generation-guarded so
//! a rapid re-selection can never leave a stale list or ranking behind.

use crate::aggregate::{AggregateLifecycle, DisplayState, RequestGeneration};
use crate::api::{ApiError, PresenceApi};
use crate::chart;
use crate::config::AppConfig;
use crate::dataflow::{Actor, Atom, Relay, relay};
use crate::selector::{SelectorOption, selector};
use crate::theme;
use futures::{FutureExt, StreamExt, select};
use shared::{MonthRef, RankedEmployee};
use zoon::*;

#[derive(Debug, Clone, PartialEq)]
pub enum YearsState {
    Loading,
    Ready(Vec<i32>),
    Failed,
}

#[derive(Clone)]
pub struct TopEmployees {
    pub years: Actor<YearsState>,
    pub months: Actor<Vec<MonthRef>>,
    pub selected_year: Atom<Option<i32>>,
    pub selected_month: Atom<Option<MonthRef>>,
    pub year_selected_relay: Relay<Option<i32>>,
    pub ranking: AggregateLifecycle<(i32, u32), RankedEmployee>,
}

impl TopEmployees {
    pub fn new(api: PresenceApi) -> Self {
        let years = Actor::new(YearsState::Loading, {
            let api = api.clone();
            async move |state| {
                match api.years().await {
                    Ok(years) => state.set(YearsState::Ready(years)),
                    Err(error) => {
                        zoon::eprintln!("Failed to load the year list: {}", error);
                        state.set(YearsState::Failed);
                    }
                }
            }
        });

        let (year_selected_relay, mut year_selected_stream) = relay::<Option<i32>>();
        let (months_loaded_relay, mut months_loaded_stream) =
            relay::<(u64, Result<Vec<MonthRef>, ApiError>)>();

        let months = Actor::new(Vec::new(), {
            let api = api.clone();
            async move |state| {
                let mut generation = RequestGeneration::default();
                let mut inflight: Option<TaskHandle> = None;
                loop {
                    select! {
                        selection = year_selected_stream.next() => {
                            let Some(selection) = selection else { break };
                            inflight = None;
                            // Replaced on every year change, never merged.
                            state.set_neq(Vec::new());
                            match selection {
                                None => generation.invalidate(),
                                Some(year) => {
                                    let current = generation.begin();
                                    let api = api.clone();
                                    let months_loaded = months_loaded_relay.clone();
                                    inflight = Some(Task::start_droppable(async move {
                                        months_loaded.send((current, api.months(year).await));
                                    }));
                                }
                            }
                        }
                        completion = months_loaded_stream.next() => {
                            let Some((completed_generation, result)) = completion else { break };
                            if !generation.is_current(completed_generation) {
                                zoon::println!(
                                    "[top_employees] discarding stale month list (generation {})",
                                    completed_generation,
                                );
                                continue;
                            }
                            inflight = None;
                            match result {
                                Ok(months) => state.set(months),
                                Err(error) => {
                                    zoon::eprintln!("[top_employees] month list fetch failed: {}", error);
                                    state.set_neq(Vec::new());
                                }
                            }
                        }
                    }
                }
            }
        });

        let ranking = AggregateLifecycle::new("top_employees", {
            move |(year, month)| {
                let api = api.clone();
                async move { api.top_employees(year, month).await }.boxed_local()
            }
        });

        Self {
            years,
            months,
            selected_year: Atom::new(None),
            selected_month: Atom::new(None),
            year_selected_relay,
            ranking,
        }
    }

    /// Year selection resets the dependent month selection and the ranking
    /// region, then repopulates the month list.
    pub fn select_year(&self, year: Option<i32>) {
        self.selected_year.set(year);
        self.year_selected_relay.send(year);
        self.select_month(None);
    }

    pub fn select_month(&self, month: Option<MonthRef>) {
        let key = match (self.selected_year.get_cloned(), &month) {
            (Some(year), Some(month)) => Some((year, month.month)),
            _ => None,
        };
        self.selected_month.set(month);
        self.ranking.selection_changed_relay.send(key);
    }
}

pub fn panel(view: &TopEmployees, config: &AppConfig) -> impl Element {
    let year_selector_signal = {
        let config = config.clone();
        let selected_year = view.selected_year.clone();
        let view_for_select = view.clone();
        view.years.signal().map(move |years| match years {
            YearsState::Loading => super::loading_indicator(&config).unify(),
            YearsState::Failed => super::muted_note(&config, "Year list unavailable").unify(),
            YearsState::Ready(years) => {
                let options: Vec<SelectorOption<i32>> = years
                    .into_iter()
                    .map(|year| SelectorOption::new(year, year.to_string()))
                    .collect();
                let view = view_for_select.clone();
                selector(
                    &config,
                    always(options),
                    selected_year.signal().map(|year| year.map(|year| year.to_string())),
                    move |year| view.select_year(year),
                )
                .unify()
            }
        })
    };

    let month_selector_signal = {
        let config = config.clone();
        let selected_month = view.selected_month.clone();
        let view_for_select = view.clone();
        map_ref! {
            let selected_year = view.selected_year.signal(),
            let months = view.months.signal() => {
                selected_year.map(|_| {
                    let options: Vec<SelectorOption<MonthRef>> = months
                        .iter()
                        .cloned()
                        .map(|month| {
                            let label = month.label.clone();
                            SelectorOption::new(month, label)
                        })
                        .collect();
                    let view = view_for_select.clone();
                    selector(
                        &config,
                        always(options),
                        selected_month.signal().map(|month| month.map(|month| month.label)),
                        move |month| view.select_month(month),
                    )
                    .unify()
                })
            }
        }
    };

    let employees_title_signal = {
        let config = config.clone();
        map_ref! {
            let display = view.ranking.display_signal(),
            let month = view.selected_month.signal() => {
                match (*display, month) {
                    (DisplayState::Content, Some(month)) => Some(
                        El::new()
                            .s(Font::new()
                                .size(15)
                                .weight(FontWeight::Bold)
                                .color_signal(config.theme_signal().map(theme::text_color)))
                            .child(Text::new(format!("TOP 5 employees in {}", month.label))),
                    ),
                    _ => None,
                }
            }
        }
    };

    let body_signal = {
        let config = config.clone();
        map_ref! {
            let display = view.ranking.display_signal(),
            let rows = view.ranking.rows_signal() => {
                match *display {
                    DisplayState::Initial => {
                        super::muted_note(&config, "Select a year and month to rank employees").unify()
                    }
                    DisplayState::Loading => super::loading_indicator(&config).unify(),
                    DisplayState::Empty => super::no_data_indicator(&config).unify(),
                    DisplayState::Content => chart::ranked_list(rows.clone(), &config).unify(),
                }
            }
        }
    };

    Column::new()
        .s(Padding::all(24))
        .s(Gap::both(16))
        .s(Align::new().top())
        .item(super::panel_title(config, "Top 5 employees"))
        .item(
            Row::new()
                .s(Gap::both(16))
                .s(Align::new().top())
                .item(El::new().child_signal(year_selector_signal))
                .item(El::new().child_signal(month_selector_signal)),
        )
        .item(El::new().child_signal(employees_title_signal))
        .item(El::new().child_signal(body_signal))
}
