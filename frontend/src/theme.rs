//! Color palette for both themes.

use shared::Theme;

pub fn page_background(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "rgb(255, 255, 255)",
        Theme::Dark => "rgb(13, 13, 13)",
    }
}

pub fn panel_background(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "rgb(249, 250, 251)",
        Theme::Dark => "rgb(23, 23, 23)",
    }
}

pub fn control_background(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "rgb(243, 244, 246)",
        Theme::Dark => "rgb(38, 38, 38)",
    }
}

pub fn border_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "rgb(209, 213, 219)",
        Theme::Dark => "rgb(64, 64, 64)",
    }
}

pub fn text_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "rgb(17, 24, 39)",
        Theme::Dark => "rgb(229, 229, 229)",
    }
}

pub fn muted_text_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "rgb(107, 114, 128)",
        Theme::Dark => "rgb(148, 163, 184)",
    }
}

pub fn accent_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "rgb(37, 99, 235)",
        Theme::Dark => "rgb(96, 165, 250)",
    }
}

pub fn bar_color(theme: Theme) -> &'static str {
    accent_color(theme)
}

pub fn span_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "rgb(16, 185, 129)",
        Theme::Dark => "rgb(52, 211, 153)",
    }
}

/// One color per weekday for the proportional chart, Mon..Sun.
pub fn segment_colors() -> [&'static str; 7] {
    [
        "rgb(59, 130, 246)",
        "rgb(16, 185, 129)",
        "rgb(245, 158, 11)",
        "rgb(239, 68, 68)",
        "rgb(139, 92, 246)",
        "rgb(236, 72, 153)",
        "rgb(20, 184, 166)",
    ]
}
