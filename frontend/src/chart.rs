//! Renderer adapter: mounts transformed payloads into the view's display
//! region as DOM-composed charts.
//!
//! Four renderer kinds: column chart (mean time per weekday), span chart
//! (start/end intervals on a 0-24h track), proportional chart (per-weekday
//! share of total presence) and the ranked top-5 card list. Every renderer
//! tolerates zero rows and never panics on type-correct input; the geometry
//! math lives in plain functions so it can be tested without a browser.

use crate::config::AppConfig;
use crate::theme;
use shared::{RankedEmployee, TimeOfDay, WeekdayMean, WeekdaySpan, WeekdayTotal};
use zoon::*;

pub const COLUMN_MAX_PX: u32 = 160;
pub const COLUMN_WIDTH_PX: u32 = 36;
pub const SPAN_TRACK_PX: u32 = 480;
pub const SEGMENT_TRACK_PX: u32 = 560;

const PLACE_LABELS: [&str; 5] = ["1st", "2nd", "3rd", "4th", "5th"];

// ===== GEOMETRY =====

/// Heights relative to the largest value, in `[0, 1]`. All-zero input stays
/// all-zero.
pub fn normalized_heights(values: &[u32]) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|&v| v as f64 / max as f64).collect()
}

/// Each value's share of the total, in `[0, 1]`. A zero total yields zeros.
pub fn shares_of_total(values: &[u64]) -> Vec<f64> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|&v| v as f64 / total as f64).collect()
}

/// Start offset and width of an interval bar on a 0-24h track, as day
/// fractions. An inverted interval (end before start) collapses to width 0.
pub fn span_geometry(start: TimeOfDay, end: TimeOfDay) -> (f64, f64) {
    let offset = start.fraction_of_day();
    let width = (end.fraction_of_day() - offset).max(0.0);
    (offset, width)
}

/// Fraction of a pixel track, rounded; nonzero fractions stay visible
/// (at least 2 px) and never overflow the track.
pub fn scaled_px(fraction: f64, track: u32) -> u32 {
    if fraction <= 0.0 {
        return 0;
    }
    let px = (fraction * track as f64).round() as u32;
    px.clamp(2, track)
}

/// "9h 30m" style label for presence totals.
pub fn format_duration(total_seconds: u64) -> String {
    format!("{}h {:02}m", total_seconds / 3600, total_seconds % 3600 / 60)
}

// ===== RENDERERS =====

pub fn column_chart(rows: Vec<WeekdayMean>, config: &AppConfig) -> impl Element {
    let values: Vec<u32> = rows.iter().map(|row| row.mean.seconds()).collect();
    let heights = normalized_heights(&values);

    let columns: Vec<_> = rows
        .into_iter()
        .zip(heights)
        .map(|(row, height)| {
            let bar_px = scaled_px(height, COLUMN_MAX_PX);
            Column::new()
                .s(Gap::both(4))
                .s(Align::new().center_x())
                .item(El::new().s(Height::exact(COLUMN_MAX_PX - bar_px)))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(11)
                            .color_signal(config.theme_signal().map(theme::muted_text_color)))
                        .child(Text::new(row.mean.to_string())),
                )
                .item(
                    El::new()
                        .s(Width::exact(COLUMN_WIDTH_PX))
                        .s(Height::exact(bar_px))
                        .s(RoundedCorners::new().top(3))
                        .s(Background::new()
                            .color_signal(config.theme_signal().map(theme::bar_color))),
                )
                .item(
                    El::new()
                        .s(Font::new()
                            .size(12)
                            .color_signal(config.theme_signal().map(theme::text_color)))
                        .child(Text::new(row.label)),
                )
        })
        .collect();

    Row::new()
        .s(Gap::both(16))
        .s(Padding::all(16))
        .items(columns)
}

pub fn span_chart(rows: Vec<WeekdaySpan>, config: &AppConfig) -> impl Element {
    let tracks: Vec<_> = rows
        .into_iter()
        .map(|row| {
            let (offset, width) = span_geometry(row.start, row.end);
            let offset_px = scaled_px(offset, SPAN_TRACK_PX).min(SPAN_TRACK_PX);
            let width_px = scaled_px(width, SPAN_TRACK_PX).min(SPAN_TRACK_PX - offset_px);
            Row::new()
                .s(Gap::both(12))
                .s(Align::new().center_y())
                .item(
                    El::new()
                        .s(Width::exact(40))
                        .s(Font::new()
                            .size(12)
                            .color_signal(config.theme_signal().map(theme::text_color)))
                        .child(Text::new(row.label)),
                )
                .item(
                    Row::new()
                        .s(Width::exact(SPAN_TRACK_PX))
                        .s(Height::exact(14))
                        .s(RoundedCorners::all(3))
                        .s(Background::new()
                            .color_signal(config.theme_signal().map(theme::control_background)))
                        .item(El::new().s(Width::exact(offset_px)))
                        .item(
                            El::new()
                                .s(Width::exact(width_px))
                                .s(Height::fill())
                                .s(RoundedCorners::all(3))
                                .s(Background::new()
                                    .color_signal(config.theme_signal().map(theme::span_color))),
                        ),
                )
                .item(
                    El::new()
                        .s(Font::new()
                            .size(11)
                            .color_signal(config.theme_signal().map(theme::muted_text_color)))
                        .child(Text::new(format!("{} - {}", row.start, row.end))),
                )
        })
        .collect();

    Column::new()
        .s(Gap::both(10))
        .s(Padding::all(16))
        .items(tracks)
}

pub fn proportional_chart(rows: Vec<WeekdayTotal>, config: &AppConfig) -> impl Element {
    let values: Vec<u64> = rows.iter().map(|row| row.total_seconds).collect();
    let shares = shares_of_total(&values);
    let colors = theme::segment_colors();

    let slices: Vec<(String, u64, f64, &'static str)> = rows
        .into_iter()
        .zip(shares)
        .enumerate()
        .map(|(index, (row, share))| {
            (
                row.label,
                row.total_seconds,
                share,
                colors[index % colors.len()],
            )
        })
        .collect();

    let segments: Vec<_> = slices
        .iter()
        .filter(|(_, _, share, _)| *share > 0.0)
        .map(|(label, _, share, color)| {
            let title = format!("{}: {:.1}%", label, share * 100.0);
            El::new()
                .s(Width::exact(scaled_px(*share, SEGMENT_TRACK_PX)))
                .s(Height::exact(28))
                .s(Background::new().color(*color))
                .update_raw_el(move |raw_el| raw_el.attr("title", &title))
        })
        .collect();

    let legend: Vec<_> = slices
        .iter()
        .map(|(label, total_seconds, share, color)| {
            Row::new()
                .s(Gap::both(8))
                .s(Align::new().center_y())
                .item(
                    El::new()
                        .s(Width::exact(12))
                        .s(Height::exact(12))
                        .s(RoundedCorners::all(2))
                        .s(Background::new().color(*color)),
                )
                .item(
                    El::new()
                        .s(Width::exact(40))
                        .s(Font::new()
                            .size(12)
                            .color_signal(config.theme_signal().map(theme::text_color)))
                        .child(Text::new(label.clone())),
                )
                .item(
                    El::new()
                        .s(Font::new()
                            .size(12)
                            .color_signal(config.theme_signal().map(theme::muted_text_color)))
                        .child(Text::new(format!(
                            "{} ({:.1}%)",
                            format_duration(*total_seconds),
                            share * 100.0
                        ))),
                )
        })
        .collect();

    Column::new()
        .s(Gap::both(16))
        .s(Padding::all(16))
        .item(
            Row::new()
                .s(RoundedCorners::all(3))
                .s(Scrollbars::both())
                .items(segments),
        )
        .item(Column::new().s(Gap::both(6)).items(legend))
}

pub fn ranked_list(rows: Vec<RankedEmployee>, config: &AppConfig) -> impl Element {
    let cards: Vec<_> = rows
        .into_iter()
        .take(PLACE_LABELS.len())
        .enumerate()
        .map(|(index, employee)| {
            let tooltip = format!("Worked {} hours", employee.worked);
            Column::new()
                .s(Gap::both(8))
                .s(Padding::all(12))
                .s(RoundedCorners::all(6))
                .s(Align::new().center_x())
                .s(Borders::all_signal(
                    config
                        .theme_signal()
                        .map(|t| Border::new().color(theme::border_color(t))),
                ))
                .s(Background::new()
                    .color_signal(config.theme_signal().map(theme::panel_background)))
                .update_raw_el(move |raw_el| raw_el.attr("title", &tooltip))
                .item(
                    El::new()
                        .s(Font::new()
                            .weight(FontWeight::Bold)
                            .size(13)
                            .color_signal(config.theme_signal().map(theme::accent_color)))
                        .child(Text::new(format!("{} place:", PLACE_LABELS[index]))),
                )
                .item(
                    Image::new()
                        .s(Width::exact(64))
                        .s(Height::exact(64))
                        .s(RoundedCorners::all(32))
                        .url(employee.avatar_url)
                        .description(employee.name.clone()),
                )
                .item(
                    El::new()
                        .s(Font::new()
                            .size(13)
                            .color_signal(config.theme_signal().map(theme::text_color)))
                        .child(Text::new(employee.name)),
                )
        })
        .collect();

    Row::new()
        .s(Gap::both(16))
        .s(Padding::all(16))
        .items(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_heights_scale_to_the_largest_value() {
        assert_eq!(normalized_heights(&[10, 20, 40]), vec![0.25, 0.5, 1.0]);
        assert_eq!(normalized_heights(&[0, 0]), vec![0.0, 0.0]);
        assert!(normalized_heights(&[]).is_empty());
    }

    #[test]
    fn shares_of_total_sum_to_one() {
        let shares = shares_of_total(&[1, 1, 2]);
        assert_eq!(shares, vec![0.25, 0.25, 0.5]);
        assert!((shares.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert_eq!(shares_of_total(&[0, 0]), vec![0.0, 0.0]);
    }

    #[test]
    fn span_geometry_maps_interval_onto_the_day() {
        let start = TimeOfDay::from_seconds(6 * 3600).unwrap();
        let end = TimeOfDay::from_seconds(18 * 3600).unwrap();
        let (offset, width) = span_geometry(start, end);
        assert_eq!(offset, 0.25);
        assert_eq!(width, 0.5);
    }

    #[test]
    fn span_geometry_collapses_inverted_intervals() {
        let start = TimeOfDay::from_seconds(18 * 3600).unwrap();
        let end = TimeOfDay::from_seconds(6 * 3600).unwrap();
        let (_, width) = span_geometry(start, end);
        assert_eq!(width, 0.0);
    }

    #[test]
    fn scaled_px_keeps_nonzero_fractions_visible() {
        assert_eq!(scaled_px(0.0, 160), 0);
        assert_eq!(scaled_px(0.001, 160), 2);
        assert_eq!(scaled_px(0.5, 160), 80);
        assert_eq!(scaled_px(1.0, 160), 160);
        // Never overflows the track, even with sloppy input.
        assert_eq!(scaled_px(1.5, 160), 160);
    }

    #[test]
    fn format_duration_renders_hours_and_minutes() {
        assert_eq!(format_duration(0), "0h 00m");
        assert_eq!(format_duration(34_200), "9h 30m");
        assert_eq!(format_duration(500_000), "138h 53m");
    }
}
