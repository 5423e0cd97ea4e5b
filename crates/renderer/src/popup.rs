//! Popup markup shown when a station marker is clicked.

use station_common::StationRecord;

/// Build the popup HTML for a station.
///
/// Station and line names are escaped; the numbers are printed as received.
pub fn popup_html(record: &StationRecord) -> String {
    format!(
        "<b>{}</b> ({})<br>Rent: {} (10k JPY)<br>Commute: {} min",
        escape_html(&record.station),
        escape_html(&record.line),
        record.price,
        record.commute_time,
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
