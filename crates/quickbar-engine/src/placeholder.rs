//! Placeholder substitution for snippet bodies and quicklink templates.
//!
//! Supported tokens:
//! - `{date}`      → e.g. "5 Mar 2025"
//! - `{time}`      → e.g. "3:07 PM"
//! - `{datetime}`  → e.g. "5 Mar 2025 3:07 PM"
//! - `{day}`       → e.g. "Wednesday"
//! - `{clipboard}` → current clipboard text (async only)
//! - `{uuid}`      → a fresh id per occurrence (async only)

use chrono::{Local, NaiveDateTime};

use crate::ports::{Clipboard, IdGenerator};

pub const DATE: &str = "{date}";
pub const TIME: &str = "{time}";
pub const DATETIME: &str = "{datetime}";
pub const DAY: &str = "{day}";
pub const CLIPBOARD: &str = "{clipboard}";
pub const UUID: &str = "{uuid}";

/// Day of month without padding, short month, full year: "5 Mar 2025".
pub fn format_date(now: NaiveDateTime) -> String {
    now.format("%-d %b %Y").to_string()
}

/// 12-hour clock, padded minutes: "3:07 PM". Midnight reads "12:00 AM".
pub fn format_time(now: NaiveDateTime) -> String {
    now.format("%-I:%M %p").to_string()
}

/// Full English weekday name.
pub fn format_day(now: NaiveDateTime) -> String {
    now.format("%A").to_string()
}

/// Substitute the clock tokens at a fixed instant.
///
/// `{clipboard}` and `{uuid}` are left as-is, which makes this suitable for
/// live previews.
pub fn resolve_sync_at(template: &str, now: NaiveDateTime) -> String {
    let date = format_date(now);
    let time = format_time(now);

    template
        .replace(DATE, &date)
        .replace(TIME, &time)
        .replace(DATETIME, &format!("{date} {time}"))
        .replace(DAY, &format_day(now))
}

/// Substitute the clock tokens using the local time.
pub fn resolve_sync(template: &str) -> String {
    resolve_sync_at(template, Local::now().naive_local())
}

/// Fully resolve a template at a fixed instant.
///
/// The clipboard is read at most once, and only if `{clipboard}` occurs. A
/// failed read resolves to an empty string. Each `{uuid}` gets its own id.
pub async fn resolve_async_at(
    template: &str,
    now: NaiveDateTime,
    clipboard: &dyn Clipboard,
    ids: &dyn IdGenerator,
) -> String {
    let mut result = resolve_sync_at(template, now);

    if result.contains(CLIPBOARD) {
        let clip = match clipboard.read_text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Clipboard read failed, substituting empty text: {}", e);
                String::new()
            }
        };
        result = result.replace(CLIPBOARD, &clip);
    }

    if result.contains(UUID) {
        result = replace_each(&result, UUID, || ids.generate_id());
    }

    result
}

/// Fully resolve a template using the local time.
pub async fn resolve_async(
    template: &str,
    clipboard: &dyn Clipboard,
    ids: &dyn IdGenerator,
) -> String {
    resolve_async_at(template, Local::now().naive_local(), clipboard, ids).await
}

/// Replace every occurrence of `token` with a separately generated value.
///
/// Generated values are never rescanned, so an id that happens to contain the
/// token cannot loop.
fn replace_each(text: &str, token: &str, mut next: impl FnMut() -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut parts = text.split(token);

    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        out.push_str(&next());
        out.push_str(part);
    }

    out
}
