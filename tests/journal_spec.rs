use chrono::{TimeZone, Utc};
use speculate2::speculate;
use wellspring::journal::{self, Journal, CALMING_EMOJIS, STORAGE_KEY};
use wellspring::models::*;
use wellspring::store::{KeyValueStore, MemoryStore};

speculate! {
    before {
        let store = MemoryStore::new();
        let mut journal = Journal::load_on_init(&store).expect("Failed to load journal");
    }

    describe "load_on_init" {
        it "starts empty when nothing is stored" {
            assert!(journal.is_empty());
            assert_eq!(store.write_count(), 0);
        }

        it "falls back to empty on malformed data" {
            store.set(STORAGE_KEY, "[{\"id\": 1,").unwrap();
            let journal = Journal::load_on_init(&store).expect("load should not fail");
            assert!(journal.is_empty());
        }

        it "skips corrupt records and keeps the rest" {
            store.set(
                STORAGE_KEY,
                r#"{"version":1,"entries":[
                    {"id":"a","timestamp":"2026-03-01T10:00:00Z","prompt_text":"","body":"kept","emoji":"🌿"},
                    {"id":"b","timestamp":"not a date","body":"dropped","emoji":"🌊"}
                ]}"#,
            ).unwrap();

            let journal = Journal::load_on_init(&store).expect("load");
            assert_eq!(journal.len(), 1);
            assert_eq!(journal.entries()[0].body, "kept");
        }

        it "migrates the legacy unversioned array" {
            store.set(
                STORAGE_KEY,
                r#"[{"id":"1754328000000","timestamp":"2025-08-04T17:20:00.000Z","prompt_text":"","body":"old entry","emoji":"🌙"}]"#,
            ).unwrap();

            let mut journal = Journal::load_on_init(&store).expect("load");
            assert_eq!(journal.entries()[0].id, EntryId::from("1754328000000"));
            assert_eq!(
                journal.entries()[0].timestamp,
                Utc.with_ymd_and_hms(2025, 8, 4, 17, 20, 0).unwrap()
            );

            journal.save_entry(&store, "new entry").expect("save");
            let raw = store.get(STORAGE_KEY).unwrap().unwrap();
            assert!(raw.starts_with("{\"version\":1"));
            assert_eq!(Journal::load_on_init(&store).unwrap().len(), 2);
        }

        it "ignores data from a newer version" {
            store.set(STORAGE_KEY, r#"{"version":7,"entries":[]}"#).unwrap();
            assert!(Journal::load_on_init(&store).expect("load").is_empty());
        }
    }

    describe "save_entry" {
        it "ignores whitespace-only text without writing" {
            let saved = journal.save_entry(&store, "   \n\t ").expect("save");
            assert!(saved.is_none());
            assert!(journal.is_empty());
            assert_eq!(store.write_count(), 0);
            assert!(store.get(STORAGE_KEY).unwrap().is_none());
        }

        it "prepends the entry and writes the whole list" {
            journal.save_entry(&store, "first").expect("save");
            let second = journal.save_entry(&store, "second").expect("save").expect("entry");

            assert_eq!(journal.entries()[0], second);
            assert_eq!(journal.entries()[1].body, "first");
            assert_eq!(store.write_count(), 2);
            assert_eq!(Journal::load_on_init(&store).unwrap().entries(), journal.entries());
        }

        it "keeps the text verbatim with an empty prompt field" {
            let entry = journal
                .save_entry(&store, "  Prompt\n\nbody  ")
                .expect("save")
                .expect("entry");
            assert_eq!(entry.body, "  Prompt\n\nbody  ");
            assert_eq!(entry.prompt_text, "");
        }

        it "rotates emojis by entry count" {
            for i in 0..12 {
                let entry = journal.save_entry(&store, &format!("entry {}", i)).unwrap().unwrap();
                assert_eq!(entry.emoji, CALMING_EMOJIS[i % CALMING_EMOJIS.len()]);
            }
        }
    }

    describe "round trip" {
        it "reloads equal entries with the same timestamps" {
            let at = Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 15).unwrap();
            journal.save_entry_at(&store, "one", at).unwrap();
            journal.save_entry_at(&store, "two", at + chrono::Duration::minutes(5)).unwrap();

            let reloaded = Journal::load_on_init(&store).unwrap();
            assert_eq!(reloaded.entries(), journal.entries());
            assert_eq!(reloaded.entries()[1].timestamp, at);
        }
    }

    describe "insert_prompt_into_draft" {
        it "adds a blank line after the prompt" {
            assert_eq!(journal::insert_prompt_into_draft("", "Prompt A"), "Prompt A\n\n");
            assert_eq!(
                journal::insert_prompt_into_draft("existing text", "Prompt A"),
                "Prompt A\n\nexisting text"
            );
        }
    }

    describe "preview" {
        it "truncates long bodies at one hundred characters" {
            let long = "a".repeat(150);
            let entry = journal.save_entry(&store, &long).unwrap().unwrap();
            assert!(entry.is_truncated());
            assert_eq!(entry.preview(), format!("{}...", "a".repeat(100)));
        }

        it "shows short bodies whole" {
            let entry = journal.save_entry(&store, "short").unwrap().unwrap();
            assert!(!entry.is_truncated());
            assert_eq!(entry.preview(), "short");
        }
    }
}
