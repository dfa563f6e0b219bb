//! Entry store use case
//!
//! All entries live in one JSON array under [`DIARY_ENTRIES_KEY`], kept sorted by entry date,
//! most recent first. Every mutation is a full read-modify-write of that blob. Mutations made
//! through one `EntryStore` are serialized by an internal lock; separate processes sharing a
//! diary can still overwrite each other (last write wins).

use crate::domain::{migrate_tags, sample_entries, sort_by_date_desc, DiaryEntry, EntryFilter};
use crate::error::{DaybookError, Result};
use crate::infrastructure::{CorruptDataPolicy, DiaryRepository, FileStore, KeyValueStore};
use chrono::{NaiveDate, Utc};
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Storage key of the entry collection
pub const DIARY_ENTRIES_KEY: &str = "DIARY_ENTRIES";

/// Where an unparseable collection is copied before it gets overwritten
pub const CORRUPT_BACKUP_KEY: &str = "DIARY_ENTRIES.corrupt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMigrationReport {
    pub scanned_entries: usize,
    pub migrated_entries: usize,
    pub migrated_tags: usize,
}

impl TagMigrationReport {
    pub fn changed(&self) -> bool {
        self.migrated_tags > 0
    }
}

enum Stored {
    Missing,
    Parsed(Vec<DiaryEntry>),
    Corrupt { raw: String, reason: String },
}

/// Collection loaded for a mutation, with the raw blob kept if it could not be parsed
struct Snapshot {
    entries: Vec<DiaryEntry>,
    corrupt: Option<String>,
}

/// Durable, date-ordered collection of diary entries over a key-value backend
#[derive(Debug)]
pub struct EntryStore<S> {
    backend: S,
    policy: CorruptDataPolicy,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_policy(backend, CorruptDataPolicy::default())
    }

    pub fn with_policy(backend: S, policy: CorruptDataPolicy) -> Self {
        EntryStore {
            backend,
            policy,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn policy(&self) -> CorruptDataPolicy {
        self.policy
    }

    /// All entries in stored order.
    ///
    /// Missing data is an empty diary. With the `Empty` policy a failed read or unparseable
    /// data is logged and also yields an empty list; with `Error` both are returned as errors.
    pub fn list_all(&self) -> Result<Vec<DiaryEntry>> {
        let stored = match self.read() {
            Ok(stored) => stored,
            Err(e) => {
                return match self.policy {
                    CorruptDataPolicy::Empty => {
                        warn!("Reading diary entries failed, showing none: {}", e);
                        Ok(Vec::new())
                    }
                    CorruptDataPolicy::Error => Err(e),
                }
            }
        };

        match stored {
            Stored::Missing => Ok(Vec::new()),
            Stored::Parsed(entries) => {
                debug!("Loaded {} diary entries", entries.len());
                Ok(entries)
            }
            Stored::Corrupt { reason, .. } => match self.policy {
                CorruptDataPolicy::Empty => {
                    error!("Stored diary entries are corrupt, showing none: {}", reason);
                    Ok(Vec::new())
                }
                CorruptDataPolicy::Error => Err(DaybookError::CorruptData(reason)),
            },
        }
    }

    /// Sort and overwrite the whole collection with one backend write
    pub fn save_all(&self, entries: Vec<DiaryEntry>) -> Result<()> {
        let _guard = self.lock();
        self.write(entries)
    }

    pub fn get(&self, id: &str) -> Result<Option<DiaryEntry>> {
        Ok(self.list_all()?.into_iter().find(|e| e.id == id))
    }

    pub fn search(&self, filter: &EntryFilter) -> Result<Vec<DiaryEntry>> {
        let mut entries = self.list_all()?;
        entries.retain(|e| filter.matches(e));
        Ok(entries)
    }

    /// Insert `entry`, or replace the stored entry with the same id.
    ///
    /// A replacement keeps the stored `created_at` and moves `updated_at` forward; a new entry
    /// is stored exactly as given.
    pub fn upsert(&self, entry: DiaryEntry) -> Result<UpsertOutcome> {
        let _guard = self.lock();
        let Snapshot {
            mut entries,
            corrupt,
        } = self.load_for_update()?;

        let outcome = match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => {
                let created_at = existing.created_at;
                let updated_at = Utc::now().max(existing.updated_at);
                *existing = DiaryEntry {
                    created_at,
                    updated_at,
                    ..entry
                };
                UpsertOutcome::Updated
            }
            None => {
                entries.push(entry);
                UpsertOutcome::Inserted
            }
        };

        self.commit(entries, corrupt)?;
        Ok(outcome)
    }

    /// Delete the entry with `id`. Returns false, without writing, if there was none.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let _guard = self.lock();
        let Snapshot {
            mut entries,
            corrupt,
        } = self.load_for_update()?;

        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            debug!("No diary entry with id {} to remove", id);
            return Ok(false);
        }

        self.commit(entries, corrupt)?;
        Ok(true)
    }

    /// Rewrite bare-string tags into structured tags.
    ///
    /// Writes at most once, and not at all when nothing needed converting, so it is safe to run
    /// on every start.
    pub fn migrate_legacy_tags(&self) -> Result<TagMigrationReport> {
        let _guard = self.lock();
        let Snapshot {
            mut entries,
            corrupt,
        } = self.load_for_update()?;

        let mut report = TagMigrationReport {
            scanned_entries: entries.len(),
            ..TagMigrationReport::default()
        };

        for entry in entries.iter_mut() {
            let converted = migrate_tags(&mut entry.tags);
            if converted > 0 {
                report.migrated_entries += 1;
                report.migrated_tags += converted;
            }
        }

        if !report.changed() {
            debug!("No legacy tags found in {} entries", report.scanned_entries);
            return Ok(report);
        }

        self.commit(entries, corrupt)?;
        info!(
            "Migrated {} legacy tag(s) in {} entries",
            report.migrated_tags, report.migrated_entries
        );
        Ok(report)
    }

    /// Fill an empty diary with illustrative entries dated around `today`.
    ///
    /// Returns how many entries were written; an existing collection is never touched.
    pub fn generate_sample_data(&self, today: NaiveDate) -> Result<usize> {
        let _guard = self.lock();
        let Snapshot { entries, corrupt } = self.load_for_update()?;

        if !entries.is_empty() {
            info!(
                "Diary already has {} entries, not adding samples",
                entries.len()
            );
            return Ok(0);
        }

        let samples = sample_entries(today, Utc::now());
        let count = samples.len();
        self.commit(samples, corrupt)?;
        info!("Generated {} sample entries", count);
        Ok(count)
    }

    /// Remove every entry. There is no record of which entries were samples, so this is a
    /// full wipe.
    pub fn clear_all(&self) -> Result<()> {
        let _guard = self.lock();
        self.backend.remove(DIARY_ENTRIES_KEY)?;
        info!("Removed all diary entries");
        Ok(())
    }

    /// Replace the collection wholesale, keeping a copy of the old blob if it was unparseable
    pub fn replace_all(&self, entries: Vec<DiaryEntry>) -> Result<()> {
        let _guard = self.lock();

        match self.read() {
            Ok(Stored::Corrupt { raw, .. }) => {
                self.quarantine(&raw)?;
            }
            Ok(_) => {}
            Err(e) => warn!("Could not read existing entries before replacing them: {}", e),
        }

        self.write(entries)
    }

    /// Pretty JSON of the whole collection, in the persisted shape
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.list_all()?)?)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> Result<Stored> {
        let Some(raw) = self.backend.get(DIARY_ENTRIES_KEY)? else {
            return Ok(Stored::Missing);
        };

        match serde_json::from_str::<Vec<DiaryEntry>>(&raw) {
            Ok(entries) => Ok(Stored::Parsed(entries)),
            Err(e) => Ok(Stored::Corrupt {
                raw,
                reason: e.to_string(),
            }),
        }
    }

    /// Read for a mutation. Backend failures always propagate so a write never replaces data
    /// that could not be read.
    fn load_for_update(&self) -> Result<Snapshot> {
        match self.read()? {
            Stored::Missing => Ok(Snapshot {
                entries: Vec::new(),
                corrupt: None,
            }),
            Stored::Parsed(mut entries) => {
                let dropped = drop_duplicate_ids(&mut entries);
                if dropped > 0 {
                    warn!(
                        "Dropped {} stored entries whose id was already used by an earlier entry",
                        dropped
                    );
                }
                Ok(Snapshot {
                    entries,
                    corrupt: None,
                })
            }
            Stored::Corrupt { raw, reason } => match self.policy {
                CorruptDataPolicy::Empty => {
                    error!("Stored diary entries are corrupt, starting over: {}", reason);
                    Ok(Snapshot {
                        entries: Vec::new(),
                        corrupt: Some(raw),
                    })
                }
                CorruptDataPolicy::Error => Err(DaybookError::CorruptData(reason)),
            },
        }
    }

    fn commit(&self, entries: Vec<DiaryEntry>, corrupt: Option<String>) -> Result<()> {
        if let Some(raw) = corrupt {
            self.quarantine(&raw)?;
        }
        self.write(entries)
    }

    /// Copy `raw` to the first unused backup key: `DIARY_ENTRIES.corrupt`, then
    /// `DIARY_ENTRIES.corrupt.1`, `.2`, ... Earlier copies are never overwritten.
    fn quarantine(&self, raw: &str) -> Result<String> {
        let mut key = CORRUPT_BACKUP_KEY.to_string();
        let mut n = 0u32;
        while self.backend.get(&key)?.is_some() {
            n += 1;
            key = format!("{}.{}", CORRUPT_BACKUP_KEY, n);
        }

        self.backend.set(&key, raw)?;
        warn!("Copied unparseable diary data to '{}' before overwriting it", key);
        Ok(key)
    }

    fn write(&self, mut entries: Vec<DiaryEntry>) -> Result<()> {
        if let Some(id) = duplicate_id(&entries) {
            return Err(DaybookError::DuplicateEntryId(id));
        }

        sort_by_date_desc(&mut entries);
        let json = serde_json::to_string(&entries)?;
        self.backend.set(DIARY_ENTRIES_KEY, &json)?;
        debug!("Saved {} diary entries", entries.len());
        Ok(())
    }
}

impl EntryStore<FileStore> {
    /// Open the store of a diary directory, applying its config.
    ///
    /// Runs the legacy tag migration when `migrate_on_open` is set; a failed migration is logged
    /// and does not prevent opening.
    pub fn open(repository: &impl DiaryRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let store = EntryStore::with_policy(repository.data_store(), config.corrupt_data);

        if config.migrate_on_open {
            if let Err(e) = store.migrate_legacy_tags() {
                warn!("Legacy tag migration failed: {}", e);
            }
        }

        Ok(store)
    }
}

/// Keep the first entry for each id; returns how many were removed
fn drop_duplicate_ids(entries: &mut Vec<DiaryEntry>) -> usize {
    let before = entries.len();
    let mut seen = HashSet::with_capacity(before);
    entries.retain(|e| seen.insert(e.id.clone()));
    before - entries.len()
}

fn duplicate_id(entries: &[DiaryEntry]) -> Option<String> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .find(|e| !seen.insert(e.id.as_str()))
        .map(|e| e.id.clone())
}

/// Parse a JSON array of entries, as produced by [`EntryStore::export_json`]
pub fn parse_entries(json: &str) -> Result<Vec<DiaryEntry>> {
    Ok(serde_json::from_str(json)?)
}
