use std::collections::BTreeMap;
use std::fmt::Write;

use shut_the_box::{GameRecord, Strategy};

/// Aggregate statistics for the games of one strategy.
#[derive(Clone, Debug, PartialEq)]
pub struct StrategySummary {
    pub strategy: Strategy,
    pub games: usize,
    pub average_score: f64,
    pub average_tiles_closed: f64,
    /// Games in which the box was shut.
    pub perfect_games: usize,
    pub best_score: u32,
    pub worst_score: u32,
}

impl StrategySummary {
    /// Summarizes `records`, which should all belong to `strategy`.
    ///
    /// Returns `None` when there are no records.
    pub fn from_records(strategy: Strategy, records: &[&GameRecord]) -> Option<Self> {
        let best_score = records.iter().map(|r| r.final_score).min()?;
        let worst_score = records.iter().map(|r| r.final_score).max()?;
        let games = records.len();
        let score_sum: u64 = records.iter().map(|r| u64::from(r.final_score)).sum();
        let tiles_closed_sum: u64 = records.iter().map(|r| u64::from(r.tiles_closed)).sum();
        Some(Self {
            strategy,
            games,
            average_score: score_sum as f64 / games as f64,
            average_tiles_closed: tiles_closed_sum as f64 / games as f64,
            perfect_games: records.iter().filter(|r| r.is_perfect()).count(),
            best_score,
            worst_score,
        })
    }

    /// Percentage of games in which the box was shut.
    pub fn perfect_rate(&self) -> f64 {
        100.0 * self.perfect_games as f64 / self.games as f64
    }
}

/// Groups records by strategy, best (lowest) average score first.
pub fn summarize(records: &[GameRecord]) -> Vec<StrategySummary> {
    let mut by_strategy: BTreeMap<Strategy, Vec<&GameRecord>> = BTreeMap::new();
    for record in records {
        by_strategy.entry(record.strategy).or_default().push(record);
    }
    let mut summaries: Vec<StrategySummary> = by_strategy
        .into_iter()
        .filter_map(|(strategy, records)| StrategySummary::from_records(strategy, &records))
        .collect();
    summaries.sort_by(|a, b| a.average_score.total_cmp(&b.average_score));
    summaries
}

pub fn format_summary_table(summaries: &[StrategySummary]) -> String {
    let mut table = format!(
        "{:<36} {:>8} {:>10} {:>12} {:>9} {:>5} {:>5}\n",
        "Strategy", "Games", "Avg Score", "Avg Closed", "Shut %", "Best", "Worst"
    );
    for summary in summaries {
        // Writing to a String cannot fail
        let _ = writeln!(
            table,
            "{:<36} {:>8} {:>10.2} {:>12.1} {:>8.1}% {:>5} {:>5}",
            summary.strategy.to_string(),
            summary.games,
            summary.average_score,
            summary.average_tiles_closed,
            summary.perfect_rate(),
            summary.best_score,
            summary.worst_score,
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(strategy: Strategy, final_score: u32, tiles_closed: u32) -> GameRecord {
        GameRecord {
            game_number: 1,
            strategy,
            final_score,
            tiles_closed,
            rolls: Vec::new(),
            moves: Vec::new(),
        }
    }

    #[test]
    fn grouped_and_sorted() {
        let records = vec![
            record(Strategy::RandomChoice, 30, 3),
            record(Strategy::LeastProbability, 0, 9),
            record(Strategy::RandomChoice, 20, 4),
            record(Strategy::LeastProbability, 10, 6),
        ];
        let summaries = summarize(&records);
        assert_eq!(summaries.len(), 2);

        let best = &summaries[0];
        assert_eq!(best.strategy, Strategy::LeastProbability);
        assert_eq!(best.games, 2);
        assert_eq!(best.average_score, 5.0);
        assert_eq!(best.average_tiles_closed, 7.5);
        assert_eq!(best.perfect_games, 1);
        assert_eq!(best.perfect_rate(), 50.0);
        assert_eq!((best.best_score, best.worst_score), (0, 10));

        let worst = &summaries[1];
        assert_eq!(worst.strategy, Strategy::RandomChoice);
        assert_eq!(worst.average_score, 25.0);
        assert_eq!(worst.perfect_games, 0);
    }

    #[test]
    fn no_records() {
        assert!(summarize(&[]).is_empty());
        assert_eq!(StrategySummary::from_records(Strategy::InsideOut, &[]), None);
    }

    #[test]
    fn table_has_a_row_per_strategy() {
        let records = vec![
            record(Strategy::OutsideIn, 12, 6),
            record(Strategy::SingleTile, 20, 4),
        ];
        let table = format_summary_table(&summarize(&records));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("5 (Outside In)"));
        assert!(lines[1].contains("12.00"));
        assert!(lines[2].starts_with("1 (Single Tile)"));
    }
}
