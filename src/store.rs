use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::{debug, info, warn};

use crate::{
    analysis::{PeriodView, WeeklyAnalysis},
    error::Result,
    period::{Period, PeriodKeys},
    storage::KeyValueStore,
    types::{Buckets, Mood, MoodEntry, MoodHistory, ALL_CAPACITY},
};

pub(crate) static HISTORY_KEY: &str = "moodHistory";

/// Owns the mood history and its persisted mirror.
pub(crate) struct MoodStore<S, Tz: TimeZone = Local> {
    storage: S,
    history: MoodHistory,
    tz: Tz,
}

impl<S: KeyValueStore> MoodStore<S> {
    pub(crate) fn load(storage: S) -> Self {
        Self::load_in(storage, Local)
    }
}

impl<S: KeyValueStore, Tz: TimeZone> MoodStore<S, Tz> {
    /// Restores the persisted history, falling back to an empty one when it is
    /// absent, unreadable or malformed. Bucket keys other than the day use the
    /// calendar of `tz`.
    pub(crate) fn load_in(storage: S, tz: Tz) -> Self {
        let history = match storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<MoodHistory>(&raw) {
                Ok(history) => {
                    debug!(entries = history.all.len(), "loaded mood history");
                    history
                }
                Err(error) => {
                    warn!(%error, "discarding malformed mood history");
                    MoodHistory::default()
                }
            },
            Ok(None) => MoodHistory::default(),
            Err(error) => {
                warn!(%error, "mood history unreadable, starting empty");
                MoodHistory::default()
            }
        };
        Self {
            storage,
            history,
            tz,
        }
    }

    pub(crate) fn history(&self) -> &MoodHistory {
        &self.history
    }

    pub(crate) fn insert(&mut self, mood: Mood) -> Result<MoodEntry> {
        self.insert_at(mood, Utc::now())
    }

    /// Records `mood` at `at` in `all` and in every period bucket, then
    /// persists the whole history. On a persistence error the entry stays in
    /// memory.
    pub(crate) fn insert_at(&mut self, mood: Mood, at: DateTime<Utc>) -> Result<MoodEntry> {
        let entry = MoodEntry::new(mood, at.timestamp_millis());

        self.history.all.insert(0, entry.clone());
        self.history.all.truncate(ALL_CAPACITY);

        let keys = PeriodKeys::of(&at.with_timezone(&self.tz));
        push_into(&mut self.history.day, keys.day, &entry);
        push_into(&mut self.history.week, keys.week, &entry);
        push_into(&mut self.history.month, keys.month, &entry);
        push_into(&mut self.history.year, keys.year, &entry);

        info!(mood = %entry.mood, time = entry.time, "recorded mood");
        self.persist()?;
        Ok(entry)
    }

    pub(crate) fn weekly_analysis(&self) -> WeeklyAnalysis {
        self.weekly_analysis_at(Utc::now())
    }

    pub(crate) fn weekly_analysis_at(&self, now: DateTime<Utc>) -> WeeklyAnalysis {
        WeeklyAnalysis::of(&self.history.all, now.timestamp_millis())
    }

    /// `All` reads the capped list newest first; the other periods flatten
    /// their buckets in key order, each bucket oldest first.
    pub(crate) fn period_view(&self, period: Period) -> PeriodView {
        PeriodView::of(self.period_entries(period))
    }

    pub(crate) fn period_entries(&self, period: Period) -> Vec<MoodEntry> {
        let buckets = match period {
            Period::All => return self.history.all.clone(),
            Period::Day => &self.history.day,
            Period::Week => &self.history.week,
            Period::Month => &self.history.month,
            Period::Year => &self.history.year,
        };
        buckets.values().flatten().cloned().collect()
    }

    /// Empties the history and removes the persisted copy.
    pub(crate) fn clear_all(&mut self) -> Result<()> {
        self.history = MoodHistory::default();
        self.storage.remove(HISTORY_KEY)?;
        info!("cleared mood history");
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.history)?;
        self.storage.set(HISTORY_KEY, &raw).map_err(|error| {
            warn!(%error, "failed to persist mood history");
            error
        })?;
        Ok(())
    }
}

fn push_into(buckets: &mut Buckets, key: String, entry: &MoodEntry) {
    buckets.entry(key).or_default().push(entry.clone());
}
