//! Plain-text rendering of pain history, insights and the journal.

use chrono::Local;

use crate::models::{CalendarDay, Insights, JournalEntry, PainEntry, SeverityTier};

const EMPTY_DAY: char = '·';

/// Heatmap cell for a severity tier.
fn tier_symbol(tier: Option<SeverityTier>) -> char {
    match tier {
        None => EMPTY_DAY,
        Some(SeverityTier::None) => '○',
        Some(SeverityTier::Mild) => '░',
        Some(SeverityTier::Moderate) => '▒',
        Some(SeverityTier::Severe) => '▓',
        Some(SeverityTier::Extreme) => '█',
    }
}

/// Render the heatmap as one row of cells, oldest day first.
///
/// ```text
/// ··░·▒▒··█···░○
/// ```
pub fn render_calendar(days: &[CalendarDay]) -> String {
    days.iter().map(|day| tier_symbol(day.tier)).collect()
}

pub fn render_insights(insights: &Insights) -> String {
    let Some(summary) = insights.summary() else {
        return "No check-ins yet. Your first one starts your insights.\n".to_string();
    };

    let mut output = String::new();
    output.push_str(&format!("Entries:        {}\n", summary.entry_count));
    output.push_str(&format!("Average pain:   {:.1}/10\n", summary.overall_average));
    output.push_str(&format!("Last 7 entries: {:.1}/10\n", summary.weekly_average));

    if !summary.top_relief.is_empty() {
        output.push_str("What helped most:\n");
        for (rank, relief) in summary.top_relief.iter().enumerate() {
            output.push_str(&format!("  {}. {} ({})\n", rank + 1, relief.label, relief.count));
        }
    }

    if let (Some(first), Some(last)) = (summary.calendar.first(), summary.calendar.last()) {
        output.push_str(&format!(
            "Last 14 days ({} to {}):\n  {}\n",
            first.date.format("%b %-d"),
            last.date.format("%b %-d"),
            render_calendar(&summary.calendar)
        ));
    }

    output
}

pub fn render_pain_entry(entry: &PainEntry) -> String {
    let mut output = format!(
        "{}  Pain: {}/10\n",
        entry.date.with_timezone(&Local).format("%b %-d, %Y %H:%M"),
        entry.intensity
    );

    if !entry.quality.is_empty() {
        let labels: Vec<&str> = entry.quality.iter().map(|q| q.as_str()).collect();
        output.push_str(&format!("  Type: {}\n", labels.join(", ")));
    }
    if !entry.location.is_empty() {
        output.push_str(&format!("  Where: {}\n", entry.location.join(", ")));
    }
    if !entry.context.is_empty() {
        output.push_str(&format!("  Factors: {}\n", entry.context.join(", ")));
    }
    if let Some(helped) = entry.helped.as_ref().filter(|h| !h.is_empty()) {
        output.push_str(&format!("  What helped: {}\n", helped.join(", ")));
    }
    if let Some(notes) = &entry.notes {
        output.push_str(&format!("  \"{}\"\n", notes));
    }

    output
}

pub fn render_pain_history(entries: &[PainEntry]) -> String {
    if entries.is_empty() {
        return "Your first check-in creates your pain timeline.\n".to_string();
    }
    entries.iter().map(render_pain_entry).collect::<Vec<_>>().join("\n")
}

pub fn render_journal(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "First step counts. Pick a prompt to begin.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{} {}\n  {}\n",
            entry.emoji,
            entry.timestamp.with_timezone(&Local).format("%b %-d, %Y"),
            entry.preview().replace('\n', "\n  ")
        ));
    }
    output
}
