use std::collections::BTreeMap;

use chrono::{Duration, TimeZone, Utc};
use speculate2::speculate;
use wellspring::models::*;
use wellspring::pain::insights::{self, CALENDAR_DAYS};
use wellspring::pain::PainLog;
use wellspring::store::MemoryStore;

fn input(intensity: u8) -> RecordPainInput {
    RecordPainInput {
        intensity,
        ..RecordPainInput::default()
    }
}

fn relief(labels: &[&str]) -> ReliefInput {
    ReliefInput {
        helped: labels.iter().map(|l| l.to_string()).collect(),
        effectiveness: BTreeMap::new(),
    }
}

/// Record intensities oldest first so the log reads newest-first as `newest_first`.
fn log_with(newest_first: &[u8]) -> PainLog {
    let mut log = PainLog::new();
    for intensity in newest_first.iter().rev() {
        log.record_entry(input(*intensity));
    }
    log
}

speculate! {
    before {
        let mut log = PainLog::new();
    }

    describe "record_entry" {
        it "assigns id and date and keeps form values" {
            let entry = log.record_entry(RecordPainInput {
                intensity: 7,
                location: vec!["Lower back".to_string()],
                quality: vec![PainQuality::Burning, PainQuality::Stiff],
                impact: Impact { activity: 3, mood: 2, sleep: 4, concentration: Some(1) },
                context: vec!["Stress or emotional strain".to_string()],
                notes: "Long day at the desk".to_string(),
                wellbeing: Wellbeing { stress: Some(4), ..Wellbeing::default() },
            });

            assert!(!entry.id.as_str().is_empty());
            assert_eq!(entry.intensity, 7);
            assert_eq!(entry.quality, vec![PainQuality::Burning, PainQuality::Stiff]);
            assert_eq!(entry.impact.concentration, Some(1));
            assert_eq!(entry.notes.as_deref(), Some("Long day at the desk"));
            assert_eq!(entry.wellbeing.stress, Some(4));
            assert!(entry.helped.is_none());
            assert!(entry.helped_effectiveness.is_none());
            assert_eq!(log.most_recent(), Some(&entry));
        }

        it "keeps entries newest first in call order" {
            let first = log.record_entry(input(1));
            let second = log.record_entry(input(2));
            let third = log.record_entry(input(3));

            let ids: Vec<&EntryId> = log.entries().iter().map(|e| &e.id).collect();
            assert_eq!(ids, vec![&third.id, &second.id, &first.id]);
        }

        it "gives every entry a distinct id" {
            for _ in 0..50 {
                log.record_entry(input(4));
            }
            let mut ids: Vec<&EntryId> = log.entries().iter().map(|e| &e.id).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), 50);
        }

        it "does not reject out-of-range values" {
            let entry = log.record_entry(input(14));
            assert_eq!(entry.intensity, 14);
        }

        it "stores a blank note as absent" {
            let entry = log.record_entry(RecordPainInput { notes: "  ".to_string(), ..input(3) });
            assert!(entry.notes.is_none());
        }
    }

    describe "amend_most_recent" {
        it "is a silent no-op on an empty log" {
            let result = log.amend_most_recent(relief(&["Heat"]));
            assert!(result.is_none());
            assert!(log.is_empty());
        }

        it "adds relief fields and leaves the rest unchanged" {
            let original = log.record_entry(input(6));
            let mut effectiveness = BTreeMap::new();
            effectiveness.insert("Heat".to_string(), 3);

            let amended = log
                .amend_most_recent(ReliefInput {
                    helped: vec!["Heat".to_string(), "Walking".to_string()],
                    effectiveness: effectiveness.clone(),
                })
                .expect("entry should be amended");

            assert_eq!(log.len(), 1);
            assert_eq!(amended.helped, Some(vec!["Heat".to_string(), "Walking".to_string()]));
            assert_eq!(amended.helped_effectiveness, Some(effectiveness));

            let expected = PainEntry {
                helped: amended.helped.clone(),
                helped_effectiveness: amended.helped_effectiveness.clone(),
                ..original
            };
            assert_eq!(log.entries()[0], expected);
        }

        it "only touches the newest entry" {
            log.record_entry(input(2));
            log.record_entry(input(8));
            log.amend_most_recent(relief(&["Music"]));

            assert!(log.entries()[0].helped.is_some());
            assert!(log.entries()[1].helped.is_none());
        }
    }

    describe "amend" {
        it "targets an entry by id regardless of position" {
            let older = log.record_entry(input(2));
            log.record_entry(input(8));

            let amended = log.amend(&older.id, relief(&["Resting"])).expect("found");
            assert_eq!(amended.id, older.id);
            assert!(log.entries()[0].helped.is_none());
            assert_eq!(log.entries()[1].helped, Some(vec!["Resting".to_string()]));
        }

        it "returns None for an unknown id" {
            log.record_entry(input(2));
            assert!(log.amend(&EntryId::from("missing"), relief(&["Heat"])).is_none());
            assert!(log.entries()[0].helped.is_none());
        }

        it "replaces earlier relief data" {
            log.record_entry(input(5));
            log.amend_most_recent(relief(&["Heat"]));
            log.amend_most_recent(relief(&["Music"]));
            assert_eq!(log.entries()[0].helped, Some(vec!["Music".to_string()]));
        }
    }

    describe "compute_insights" {
        it "reports no data for an empty log" {
            assert_eq!(log.compute_insights(), Insights::NoData);
        }

        it "averages the last seven entries and everything" {
            let log = log_with(&[2, 8, 4, 6, 9, 1, 3]);
            let summary = log.compute_insights().summary().cloned().expect("summary");
            assert!((summary.weekly_average - 33.0 / 7.0).abs() < 1e-9);
            assert!((summary.overall_average - 33.0 / 7.0).abs() < 1e-9);

            let log = log_with(&[2, 8, 4, 6, 9, 1, 3, 5]);
            let summary = log.compute_insights().summary().cloned().expect("summary");
            assert!((summary.weekly_average - 33.0 / 7.0).abs() < 1e-9);
            assert!((summary.overall_average - 4.75).abs() < 1e-9);
            assert_eq!(summary.entry_count, 8);
        }

        it "averages whatever exists when there are fewer than seven" {
            let log = log_with(&[4, 6]);
            let summary = log.compute_insights().summary().cloned().expect("summary");
            assert!((summary.weekly_average - 5.0).abs() < 1e-9);
        }

        it "ranks relief strategies with ties in first-seen order" {
            let mut log = PainLog::new();
            log.record_entry(input(3));
            log.amend_most_recent(relief(&["Music"]));
            log.record_entry(input(3));
            log.amend_most_recent(relief(&["Heat"]));
            log.record_entry(input(3));
            log.amend_most_recent(relief(&["Heat", "Walking"]));

            let top = insights::top_relief(log.entries(), 3);
            let ranked: Vec<(&str, usize)> = top.iter().map(|r| (r.label.as_str(), r.count)).collect();
            assert_eq!(ranked, vec![("Heat", 2), ("Walking", 1), ("Music", 1)]);
        }

        it "lists at most three strategies" {
            log.record_entry(input(3));
            log.amend_most_recent(relief(&["Heat", "Music", "Walking", "Resting"]));
            let summary = log.compute_insights().summary().cloned().expect("summary");
            assert_eq!(summary.top_relief.len(), 3);
        }
    }

    describe "calendar" {
        it "covers fourteen days ending today" {
            let now = Utc.with_ymd_and_hms(2026, 3, 20, 12, 0, 0).unwrap();
            log.record_entry_at(input(5), now);
            let summary = log.compute_insights_at(now).summary().cloned().expect("summary");

            assert_eq!(summary.calendar.len(), CALENDAR_DAYS as usize);
            assert_eq!(summary.calendar.first().unwrap().date, now.date_naive() - Duration::days(13));
            assert_eq!(summary.calendar.last().unwrap().date, now.date_naive());
        }

        it "buckets matching days and leaves the rest empty" {
            let now = Utc.with_ymd_and_hms(2026, 3, 20, 18, 0, 0).unwrap();
            log.record_entry_at(input(0), now - Duration::days(20));
            log.record_entry_at(input(9), now - Duration::days(10));
            log.record_entry_at(input(2), now - Duration::days(1));
            log.record_entry_at(input(7), now);

            let summary = log.compute_insights_at(now).summary().cloned().expect("summary");
            let tiers: Vec<Option<SeverityTier>> = summary.calendar.iter().map(|d| d.tier).collect();

            assert_eq!(tiers[13], Some(SeverityTier::Severe));
            assert_eq!(tiers[12], Some(SeverityTier::Mild));
            assert_eq!(tiers[3], Some(SeverityTier::Extreme));
            assert_eq!(tiers.iter().filter(|t| t.is_some()).count(), 3);
        }

        it "uses the newest entry of a day" {
            let morning = Utc.with_ymd_and_hms(2026, 3, 20, 8, 0, 0).unwrap();
            let evening = Utc.with_ymd_and_hms(2026, 3, 20, 20, 0, 0).unwrap();
            log.record_entry_at(input(9), morning);
            log.record_entry_at(input(2), evening);

            let summary = log.compute_insights_at(evening).summary().cloned().expect("summary");
            assert_eq!(summary.calendar[13].tier, Some(SeverityTier::Mild));
        }

        it "matches by calendar date in the given time zone" {
            let late = Utc.with_ymd_and_hms(2026, 3, 19, 23, 30, 0).unwrap();
            log.record_entry_at(input(4), late);

            // In UTC+2 that check-in falls on March 20.
            let tz = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
            let now = Utc.with_ymd_and_hms(2026, 3, 20, 9, 0, 0).unwrap().with_timezone(&tz);
            let summary = log.compute_insights_at(now).summary().cloned().expect("summary");
            assert_eq!(summary.calendar[13].tier, Some(SeverityTier::Moderate));
            assert_eq!(summary.calendar[12].tier, None);
        }
    }

    describe "persistence" {
        it "restores a persisted log newest first" {
            let store = MemoryStore::new();
            log.record_entry(input(3));
            log.record_entry(input(8));
            log.amend_most_recent(relief(&["Heat"]));
            log.persist(&store).expect("persist");

            let restored = PainLog::load(&store).expect("load");
            assert_eq!(restored.entries(), log.entries());
        }

        it "keeps call order across reload when timestamps run backwards" {
            let store = MemoryStore::new();
            let noon = Utc.with_ymd_and_hms(2026, 3, 20, 12, 0, 0).unwrap();
            log.record_entry_at(input(2), noon);
            let newest = log.record_entry_at(input(8), noon - Duration::minutes(5));
            log.persist(&store).expect("persist");

            let mut restored = PainLog::load(&store).expect("load");
            assert_eq!(restored.entries()[0].id, newest.id);

            let amended = restored.amend_most_recent(relief(&["Heat"])).expect("amended");
            assert_eq!(amended.id, newest.id);
            assert_eq!(amended.intensity, 8);
        }

        it "starts empty when nothing is stored" {
            let store = MemoryStore::new();
            assert!(PainLog::load(&store).expect("load").is_empty());
        }
    }
}
