//! Dropdown selector used by every view.
//!
//! The first row is always the `--` placeholder; picking it clears the view
//! without issuing a request. An invisible fixed overlay closes the open
//! dropdown on outside clicks, Escape closes it too.

use crate::config::AppConfig;
use crate::dataflow::Atom;
use crate::theme;
use zoon::events::KeyDown;
use zoon::*;

/// Placeholder row shown first in every dropdown; selecting it clears the
/// dependent view regions.
const PLACEHOLDER_LABEL: &str = "--";

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorOption<V> {
    pub value: V,
    pub label: String,
}

impl<V> SelectorOption<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        SelectorOption {
            value,
            label: label.into(),
        }
    }
}

pub fn selector<V, OS, LS, F>(
    config: &AppConfig,
    options_signal: OS,
    selected_label_signal: LS,
    on_select: F,
) -> impl Element
where
    V: Clone + Send + Sync + 'static,
    OS: Signal<Item = Vec<SelectorOption<V>>> + 'static,
    LS: Signal<Item = Option<String>> + 'static,
    F: Fn(Option<V>) + Clone + 'static,
{
    let is_open = Atom::new(false);
    let config = config.clone();

    let overlay_signal = {
        let is_open_for_signal = is_open.clone();
        is_open.signal().map(move |open| {
            if open {
                let is_open_for_handlers = is_open_for_signal.clone();
                El::new()
                    .update_raw_el(|raw_el| {
                        raw_el
                            .style("position", "fixed")
                            .style("inset", "0")
                            .style("z-index", "9999")
                            .style("background-color", "rgba(0,0,0,0)")
                    })
                    .on_pointer_down({
                        let is_open = is_open_for_handlers.clone();
                        move || {
                            is_open.set(false);
                        }
                    })
                    .update_raw_el({
                        let is_open = is_open_for_handlers.clone();
                        move |raw_el| {
                            raw_el.global_event_handler(move |event: KeyDown| {
                                if event.key() == "Escape" {
                                    is_open.set(false);
                                }
                            })
                        }
                    })
            } else {
                El::new()
            }
        })
    };

    let trigger_label_signal = map_ref! {
        let open = is_open.signal(),
        let selected = selected_label_signal => {
            let text = selected.clone().unwrap_or_else(|| PLACEHOLDER_LABEL.to_string());
            let chevron = if *open { "▴" } else { "▾" };
            format!("{}  {}", text, chevron)
        }
    };

    let trigger = Button::new()
        .s(Width::exact(240))
        .s(Padding::new().x(12).y(6))
        .s(RoundedCorners::all(4))
        .s(Borders::all_signal(
            config
                .theme_signal()
                .map(|t| Border::new().color(theme::border_color(t))),
        ))
        .s(Background::new().color_signal(config.theme_signal().map(theme::control_background)))
        .s(Font::new().color_signal(config.theme_signal().map(theme::text_color)))
        .label(El::new().child_signal(trigger_label_signal.map(Text::new)))
        .on_press({
            let is_open = is_open.clone();
            move || is_open.set(!is_open.get_cloned())
        });

    let option_list_signal = map_ref! {
        let open = is_open.signal(),
        let options = options_signal => {
            open.then(|| options.clone())
        }
    };

    let list_element_signal = {
        let config = config.clone();
        let is_open = is_open.clone();
        let on_select = on_select.clone();
        option_list_signal.map(move |options| {
            options.map(|options| {
                let mut rows = Vec::new();
                rows.push(option_row(&config, PLACEHOLDER_LABEL, {
                    let is_open = is_open.clone();
                    let on_select = on_select.clone();
                    move || {
                        on_select(None);
                        is_open.set(false);
                    }
                }));
                for option in options {
                    let value = option.value;
                    rows.push(option_row(&config, &option.label, {
                        let is_open = is_open.clone();
                        let on_select = on_select.clone();
                        move || {
                            on_select(Some(value.clone()));
                            is_open.set(false);
                        }
                    }));
                }
                Column::new()
                    .s(Width::exact(240))
                    .s(RoundedCorners::all(4))
                    .s(Borders::all_signal(
                        config
                            .theme_signal()
                            .map(|t| Border::new().color(theme::border_color(t))),
                    ))
                    .s(Background::new()
                        .color_signal(config.theme_signal().map(theme::panel_background)))
                    .update_raw_el(|raw_el| {
                        raw_el
                            .style("position", "relative")
                            .style("z-index", "10000")
                    })
                    .items(rows)
            })
        })
    };

    Column::new()
        .item(El::new().child_signal(overlay_signal.map(|overlay| overlay.unify())))
        .item(trigger)
        .item_signal(list_element_signal)
}

// Returns the unified element type so placeholder and option rows can share
// one Vec despite their distinct handler closures.
fn option_row(config: &AppConfig, label: &str, on_press: impl FnMut() + 'static) -> RawElOrText {
    Button::new()
        .s(Width::fill())
        .s(Padding::new().x(12).y(6))
        .s(Font::new().color_signal(config.theme_signal().map(theme::text_color)))
        .s(Background::new().color_signal(config.theme_signal().map(theme::panel_background)))
        .label(label.to_string())
        .on_press(on_press)
        .unify()
}
