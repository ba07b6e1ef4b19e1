//! Aggregate statistics over a newest-first list of pain entries.

use chrono::{DateTime, Days, NaiveDate, TimeZone};

use crate::models::{
    CalendarDay, InsightSummary, Insights, PainEntry, ReliefFrequency, SeverityTier,
};

/// Entries averaged for the weekly figure.
pub const WEEKLY_WINDOW: usize = 7;
/// Days shown in the calendar heatmap.
pub const CALENDAR_DAYS: u64 = 14;
/// Relief strategies listed in the summary.
pub const TOP_RELIEF_LIMIT: usize = 3;

/// Compute insights for `entries` (newest first) as of `now`.
///
/// Calendar days are taken in `now`'s time zone.
pub fn compute<Tz: TimeZone>(entries: &[PainEntry], now: DateTime<Tz>) -> Insights {
    if entries.is_empty() {
        return Insights::NoData;
    }

    let tz = now.timezone();
    let today = now.date_naive();

    Insights::Summary(InsightSummary {
        entry_count: entries.len(),
        overall_average: mean_intensity(entries),
        weekly_average: mean_intensity(&entries[..entries.len().min(WEEKLY_WINDOW)]),
        top_relief: top_relief(entries, TOP_RELIEF_LIMIT),
        calendar: calendar(entries, today, &tz),
    })
}

fn mean_intensity(entries: &[PainEntry]) -> f64 {
    let total: u64 = entries.iter().map(|e| u64::from(e.intensity)).sum();
    total as f64 / entries.len() as f64
}

/// Most reported relief strategies, most frequent first.
///
/// Ties keep the order in which labels were first seen while scanning from
/// the newest entry.
pub fn top_relief(entries: &[PainEntry], limit: usize) -> Vec<ReliefFrequency> {
    let mut counts: Vec<ReliefFrequency> = Vec::new();

    for label in entries.iter().filter_map(|e| e.helped.as_ref()).flatten() {
        match counts.iter_mut().find(|c| &c.label == label) {
            Some(existing) => existing.count += 1,
            None => counts.push(ReliefFrequency {
                label: label.clone(),
                count: 1,
            }),
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// The fourteen days ending at `today`, oldest first.
///
/// Each day takes the tier of the first (newest) entry logged on it. Other
/// entries from the same day are not considered.
pub fn calendar<Tz: TimeZone>(entries: &[PainEntry], today: NaiveDate, tz: &Tz) -> Vec<CalendarDay> {
    let entry_days: Vec<(NaiveDate, u8)> = entries
        .iter()
        .map(|e| (e.date.with_timezone(tz).date_naive(), e.intensity))
        .collect();

    (0..CALENDAR_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| CalendarDay {
            date,
            tier: entry_days
                .iter()
                .find(|(day, _)| *day == date)
                .map(|(_, intensity)| SeverityTier::from_intensity(*intensity)),
        })
        .collect()
}
