use chrono::{DateTime, Local};

use crate::{
    analysis::{PeriodView, WeeklyAnalysis},
    types::{Mood, MoodEntry},
};

pub(crate) fn weekly(analysis: &WeeklyAnalysis) -> String {
    match analysis {
        WeeklyAnalysis::NoData => "No mood data for the past week.".to_string(),
        WeeklyAnalysis::Average(average) => format!(
            "Your average mood this week: {} (Score: {:.2})",
            average.label, average.score
        ),
    }
}

pub(crate) fn period(view: &PeriodView) -> String {
    match view {
        PeriodView::NotEnoughData => "Not enough mood data for this period.".to_string(),
        PeriodView::Stats { average, entries } => {
            let mut out = format!(
                "Average Mood: {} (Score: {:.2})",
                average.label, average.score
            );
            for entry in entries {
                out.push_str("\n  ");
                out.push_str(&entry_line(entry));
            }
            out
        }
    }
}

fn entry_line(entry: &MoodEntry) -> String {
    let time = DateTime::from_timestamp_millis(entry.time)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| format!("@{}ms", entry.time));
    format!("{} {} - {}", entry.mood, entry.emoji(), time)
}

pub(crate) fn menu() -> String {
    Mood::CATALOGUE
        .iter()
        .map(|m| format!("{} {}", m.emoji(), m.name()))
        .collect::<Vec<_>>()
        .join("  ")
}
