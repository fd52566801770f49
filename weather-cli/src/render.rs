use chrono::{DateTime, Local, TimeZone, Utc};
use weather_lookup_core::{RequestState, ResultPanel, View};

/// Render a state as the lines printed to the terminal.
pub fn render(state: &RequestState) -> String {
    let observed = state
        .result()
        .and_then(|r| r.observed_at())
        .map(|t| format_observed(t, &Local));
    render_view(&View::from_state(state), observed)
}

pub fn render_view(view: &View, observed: Option<String>) -> String {
    match view {
        View::Form => String::new(),
        View::Loading { label } => format!("{label}\n"),
        View::Error { message } => banner(message),
        View::Result(panel) => result_panel(panel, observed.as_deref()),
    }
}

fn banner(message: &str) -> String {
    message.lines().map(|line| format!("✗ {line}\n")).collect()
}

fn result_panel(panel: &ResultPanel, observed: Option<&str>) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", panel.location));
    out.push_str(&format!(
        "{}  {}  {}\n\n",
        panel.icon.glyph(),
        panel.temperature,
        capitalize(&panel.description)
    ));

    let rows = [
        ("Feels Like", Some(&panel.feels_like)),
        ("Humidity", Some(&panel.humidity)),
        ("Wind Speed", Some(&panel.wind_speed)),
        ("Pressure", Some(&panel.pressure)),
        ("Visibility", panel.visibility.as_ref()),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            out.push_str(&format!("  {label:<11} {value}\n"));
        }
    }

    if let Some(observed) = observed {
        out.push_str(&format!("\n  Updated {observed}\n"));
    }

    out
}

/// Observation time in the given zone, e.g. "14:05 (2024-06-10)".
pub fn format_observed<Tz: TimeZone>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%H:%M (%Y-%m-%d)").to_string()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
