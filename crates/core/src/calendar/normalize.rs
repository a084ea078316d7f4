//! Provider payload normalisation
//!
//! Maps Google, Outlook and LinkedIn event objects into [`CalendarEvent`].
//! Fields are read leniently: a missing title or time becomes empty/`None`
//! rather than an error. Only entries that are not JSON objects are rejected.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use linkedgpt_domain::{CalendarEvent, CalendarSource};
use serde::Deserialize;
use serde_json::Value;

/// Normalise one raw event. Returns `None` for entries that are not objects.
pub fn normalize_event(source: CalendarSource, raw: &Value) -> Option<CalendarEvent> {
    if !raw.is_object() {
        return None;
    }
    match source {
        CalendarSource::Google => from_google(raw),
        CalendarSource::Outlook => from_outlook(raw),
        CalendarSource::LinkedIn => from_linkedin(raw),
        CalendarSource::Local => serde_json::from_value(raw.clone()).ok(),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GoogleEvent {
    id: String,
    summary: Option<String>,
    start: GoogleTime,
    end: GoogleTime,
    attendees: Vec<GoogleAttendee>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GoogleTime {
    #[serde(rename = "dateTime")]
    date_time: Option<String>,
    date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GoogleAttendee {
    email: String,
}

fn from_google(raw: &Value) -> Option<CalendarEvent> {
    let event: GoogleEvent = serde_json::from_value(raw.clone()).ok()?;
    Some(CalendarEvent {
        id: event.id,
        title: event.summary.unwrap_or_default(),
        start: event.start.date_time.or(event.start.date).as_deref().and_then(parse_time),
        end: event.end.date_time.or(event.end.date).as_deref().and_then(parse_time),
        attendees: attendee_list(event.attendees.into_iter().map(|a| a.email)),
        source: CalendarSource::Google,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutlookEvent {
    id: String,
    subject: Option<String>,
    start: Option<OutlookTime>,
    end: Option<OutlookTime>,
    attendees: Vec<OutlookAttendee>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutlookTime {
    #[serde(rename = "dateTime")]
    date_time: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutlookAttendee {
    #[serde(rename = "emailAddress")]
    email_address: OutlookAddress,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutlookAddress {
    address: String,
}

fn from_outlook(raw: &Value) -> Option<CalendarEvent> {
    let event: OutlookEvent = serde_json::from_value(raw.clone()).ok()?;
    Some(CalendarEvent {
        id: event.id,
        title: event.subject.unwrap_or_default(),
        // Graph returns wall-clock times in the requested zone, UTC by default.
        start: event.start.and_then(|t| parse_time(&t.date_time)),
        end: event.end.and_then(|t| parse_time(&t.date_time)),
        attendees: attendee_list(event.attendees.into_iter().map(|a| a.email_address.address)),
        source: CalendarSource::Outlook,
    })
}

fn from_linkedin(raw: &Value) -> Option<CalendarEvent> {
    let id = match raw.get("id").or_else(|| raw.get("entityUrn")) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    // `name` is either a plain string or a localized map.
    let title = match raw.get("name") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(name)) => name
            .get("localized")
            .and_then(Value::as_object)
            .and_then(|localized| localized.values().find_map(Value::as_str))
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    };

    let range = raw.get("timeRange");
    let millis = |key: &str| range.and_then(|r| r.get(key)).and_then(Value::as_i64);

    Some(CalendarEvent {
        id,
        title,
        start: millis("start").and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        end: millis("end").and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        attendees: Vec::new(),
        source: CalendarSource::LinkedIn,
    })
}

fn attendee_list(emails: impl Iterator<Item = String>) -> Vec<String> {
    emails.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()).collect()
}

/// RFC 3339, zone-less date-time (taken as UTC) or all-day date.
fn parse_time(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
