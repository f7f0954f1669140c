//! Text rendering for template listings and details.

use crate::template::MessageTemplate;
use chrono::{DateTime, TimeZone};

/// One-line preview of `content`, at most `max_chars` characters plus `...`.
///
/// Line breaks are flattened to spaces.
pub fn preview(content: &str, max_chars: usize) -> String {
    let flat: String = content
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() > max_chars {
        let truncated: String = flat.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        flat
    }
}

/// Human date relative to `now`: `today`, `yesterday`, `N days ago` for the
/// last week, then the plain date.
pub fn relative_date<Tz: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let days = (now.date_naive() - then.date_naive()).num_days().abs();
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        _ => then.date_naive().format("%Y-%m-%d").to_string(),
    }
}

fn count_label(n: usize) -> String {
    if n == 1 {
        "1 field".to_string()
    } else {
        format!("{} fields", n)
    }
}

/// Listing card for one template.
pub fn render_card<Tz: TimeZone>(
    template: &MessageTemplate,
    preview_length: usize,
    now: &DateTime<Tz>,
) -> String {
    let updated = template.updated_at.with_timezone(&now.timezone());
    format!(
        "{}  ({})\n  {}\n  {} · updated {}",
        template.name,
        template.id,
        preview(&template.content, preview_length),
        count_label(template.fields.len()),
        relative_date(&updated, now),
    )
}

/// Full view of one template: metadata, content, and fields.
pub fn render_details<Tz: TimeZone>(template: &MessageTemplate, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    out.push_str(&format!("Name:    {}\n", template.name));
    out.push_str(&format!("Id:      {}\n", template.id));
    out.push_str(&format!(
        "Created: {}\n",
        template.created_at.with_timezone(tz).format("%Y-%m-%d %H:%M")
    ));
    out.push_str(&format!(
        "Updated: {}\n",
        template.updated_at.with_timezone(tz).format("%Y-%m-%d %H:%M")
    ));
    out.push('\n');
    out.push_str(&template.content);
    out.push_str("\n\n");

    if template.fields.is_empty() {
        out.push_str("No fields.\n");
    } else {
        out.push_str(&format!("Fields ({}):\n", template.fields.len()));
        for field in &template.fields {
            out.push_str(&format!("  {{{}}}  {}\n", field.name, field.placeholder));
        }
    }

    out
}
