use std::fmt::Display;

use crate::types::MoodEntry;

/// Rolling window of the weekly analysis, in milliseconds.
pub(crate) const WEEK_MILLIS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Fewest entries a period view computes statistics for.
pub(crate) const MIN_PERIOD_ENTRIES: usize = 3;

/// Mean score of the entries, `None` when there are none.
pub(crate) fn calculate_average<'a, I>(entries: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a MoodEntry>,
{
    let (total, count) = entries
        .into_iter()
        .fold((0_u64, 0_u64), |(total, count), entry| {
            (total + u64::from(entry.mood.score()), count + 1)
        });
    if count == 0 {
        None
    } else {
        Some(total as f64 / count as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AverageLabel {
    Angry,
    Sad,
    Tired,
    Neutral,
    Happy,
    VeryHappy,
}

impl AverageLabel {
    /// Step function over the score range; a boundary value belongs to the
    /// higher band.
    pub(crate) fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            AverageLabel::VeryHappy
        } else if score >= 3.5 {
            AverageLabel::Happy
        } else if score >= 2.5 {
            AverageLabel::Neutral
        } else if score >= 1.5 {
            AverageLabel::Tired
        } else if score >= 0.5 {
            AverageLabel::Sad
        } else {
            AverageLabel::Angry
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            AverageLabel::Angry => "Angry",
            AverageLabel::Sad => "Sad",
            AverageLabel::Tired => "Tired",
            AverageLabel::Neutral => "Neutral",
            AverageLabel::Happy => "Happy",
            AverageLabel::VeryHappy => "Very Happy",
        }
    }

    pub(crate) fn emoji(self) -> &'static str {
        match self {
            AverageLabel::Angry => "😠",
            AverageLabel::Sad => "😢",
            AverageLabel::Tired => "😴",
            AverageLabel::Neutral => "😐",
            AverageLabel::Happy => "🙂",
            AverageLabel::VeryHappy => "😊",
        }
    }
}

impl Display for AverageLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.emoji())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MoodAverage {
    pub score: f64,
    pub label: AverageLabel,
}

impl MoodAverage {
    pub(crate) fn of<'a, I>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a MoodEntry>,
    {
        calculate_average(entries).map(|score| MoodAverage {
            score,
            label: AverageLabel::from_score(score),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum WeeklyAnalysis {
    NoData,
    Average(MoodAverage),
}

impl WeeklyAnalysis {
    /// Entries of `all` recorded at or after `now - 7 days`.
    pub(crate) fn of(all: &[MoodEntry], now_millis: i64) -> Self {
        let since = now_millis - WEEK_MILLIS;
        match MoodAverage::of(all.iter().filter(|entry| entry.time >= since)) {
            Some(average) => WeeklyAnalysis::Average(average),
            None => WeeklyAnalysis::NoData,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PeriodView {
    NotEnoughData,
    Stats {
        average: MoodAverage,
        entries: Vec<MoodEntry>,
    },
}

impl PeriodView {
    pub(crate) fn of(entries: Vec<MoodEntry>) -> Self {
        if entries.len() < MIN_PERIOD_ENTRIES {
            return PeriodView::NotEnoughData;
        }
        match MoodAverage::of(&entries) {
            Some(average) => PeriodView::Stats { average, entries },
            None => PeriodView::NotEnoughData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mood;

    fn entries(moods: &[Mood]) -> Vec<MoodEntry> {
        moods
            .iter()
            .enumerate()
            .map(|(i, m)| MoodEntry::new(m.clone(), i as i64))
            .collect()
    }

    #[test]
    fn test_average_of_nothing_is_none() {
        let none: &[MoodEntry] = &[];
        assert_eq!(calculate_average(none), None);
        assert_eq!(MoodAverage::of(none), None);
    }

    #[test]
    fn test_average_ignores_order() {
        let forward = entries(&[Mood::Happy, Mood::Confused, Mood::Angry, Mood::Tired]);
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(calculate_average(&forward), Some(2.0));
        assert_eq!(calculate_average(&forward), calculate_average(&backward));
    }

    #[test]
    fn test_average_scores_unrecognized_as_neutral() {
        let list = entries(&[Mood::Unrecognized("Bored".into()), Mood::Happy]);
        assert_eq!(calculate_average(&list), Some(4.0));
    }

    #[test]
    fn test_happy_happy_angry_is_neutral() {
        let average = MoodAverage::of(&entries(&[Mood::Happy, Mood::Happy, Mood::Angry])).unwrap();
        assert!((average.score - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(format!("{:.2}", average.score), "3.33");
        assert_eq!(average.label.to_string(), "Neutral 😐");
    }

    #[test]
    fn test_label_boundaries() {
        let cases = [
            (5.0, "Very Happy 😊"),
            (4.5, "Very Happy 😊"),
            (4.49999, "Happy 🙂"),
            (3.5, "Happy 🙂"),
            (3.49999, "Neutral 😐"),
            (2.5, "Neutral 😐"),
            (2.49999, "Tired 😴"),
            (1.5, "Tired 😴"),
            (1.49999, "Sad 😢"),
            (0.5, "Sad 😢"),
            (0.49999, "Angry 😠"),
            (0.0, "Angry 😠"),
        ];
        for (score, label) in cases {
            assert_eq!(AverageLabel::from_score(score).to_string(), label, "{score}");
        }
    }

    #[test]
    fn test_weekly_window_is_inclusive_sliding() {
        let now = 100 * WEEK_MILLIS;
        let all = vec![
            MoodEntry::new(Mood::Happy, now),
            MoodEntry::new(Mood::Angry, now - WEEK_MILLIS),
            MoodEntry::new(Mood::Sad, now - WEEK_MILLIS - 1),
        ];
        match WeeklyAnalysis::of(&all, now) {
            WeeklyAnalysis::Average(average) => assert_eq!(average.score, 2.5),
            WeeklyAnalysis::NoData => panic!("expected an average"),
        }
    }

    #[test]
    fn test_weekly_without_recent_entries_is_no_data() {
        let all = vec![MoodEntry::new(Mood::Happy, 0)];
        assert_eq!(WeeklyAnalysis::of(&all, 2 * WEEK_MILLIS), WeeklyAnalysis::NoData);
        assert_eq!(WeeklyAnalysis::of(&[], 0), WeeklyAnalysis::NoData);
    }

    #[test]
    fn test_period_view_needs_three_entries() {
        let two = entries(&[Mood::Happy, Mood::Sad]);
        assert_eq!(PeriodView::of(two), PeriodView::NotEnoughData);

        let three = entries(&[Mood::Happy, Mood::Sad, Mood::Neutral]);
        match PeriodView::of(three.clone()) {
            PeriodView::Stats { average, entries } => {
                assert_eq!(average.score, 3.0);
                assert_eq!(average.label, AverageLabel::Neutral);
                assert_eq!(entries, three);
            }
            PeriodView::NotEnoughData => panic!("expected stats"),
        }
    }
}
