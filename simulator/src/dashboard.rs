use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};
use shut_the_box::{GameRecord, Strategy};

/// Progress of one strategy batch: a progress bar plus running averages.
///
/// Can be shared between the threads of a parallel batch.
pub struct Dashboard {
    bar: ProgressBar,
    total: u64,
    refresh_every: u64,
    games: AtomicU64,
    score_sum: AtomicU64,
    tiles_closed_sum: AtomicU64,
}

impl Dashboard {
    /// A progress bar on stderr, whose statistics refresh every `refresh_every` games.
    pub fn new(strategy: Strategy, total: usize, refresh_every: usize) -> anyhow::Result<Self> {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{prefix} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} games ({per_sec}, {eta} remaining)\n{msg}",
            )?
            .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        bar.set_prefix(format!("Strategy {}", strategy));
        Ok(Self::with_bar(bar, total, refresh_every))
    }

    /// Tracks the statistics without drawing anything.
    pub fn hidden(total: usize) -> Self {
        Self::with_bar(ProgressBar::hidden(), total, total.max(1))
    }

    fn with_bar(bar: ProgressBar, total: usize, refresh_every: usize) -> Self {
        Self {
            bar,
            total: total as u64,
            refresh_every: refresh_every.max(1) as u64,
            games: AtomicU64::new(0),
            score_sum: AtomicU64::new(0),
            tiles_closed_sum: AtomicU64::new(0),
        }
    }

    pub fn record(&self, record: &GameRecord) {
        self.score_sum
            .fetch_add(u64::from(record.final_score), Ordering::Relaxed);
        self.tiles_closed_sum
            .fetch_add(u64::from(record.tiles_closed), Ordering::Relaxed);
        let games = self.games.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar.inc(1);
        if games % self.refresh_every == 0 || games == self.total {
            self.bar.set_message(self.stats_line());
        }
    }

    pub fn games(&self) -> u64 {
        self.games.load(Ordering::Relaxed)
    }

    /// Average score and average tiles closed so far.
    pub fn averages(&self) -> (f64, f64) {
        let games = self.games();
        if games == 0 {
            return (0.0, 0.0);
        }
        let score_sum = self.score_sum.load(Ordering::Relaxed) as f64;
        let tiles_closed_sum = self.tiles_closed_sum.load(Ordering::Relaxed) as f64;
        (score_sum / games as f64, tiles_closed_sum / games as f64)
    }

    fn stats_line(&self) -> String {
        let (avg_score, avg_tiles_closed) = self.averages();
        format!(
            "Current Stats: Avg Score: {:.2} | Avg Tiles Closed: {:.1}",
            avg_score, avg_tiles_closed
        )
    }

    pub fn finish(&self) {
        self.bar.finish_with_message(self.stats_line());
    }
}

#[cfg(test)]
mod tests {
    use shut_the_box::{Move, Roll};

    use super::*;

    fn record(final_score: u32, tiles_closed: u32) -> GameRecord {
        GameRecord {
            game_number: 1,
            strategy: Strategy::InsideOut,
            final_score,
            tiles_closed,
            rolls: vec![Roll::new(1, 1).unwrap()],
            moves: vec![Move::new(vec![2])],
        }
    }

    #[test]
    fn running_averages() {
        let dashboard = Dashboard::hidden(4);
        assert_eq!(dashboard.averages(), (0.0, 0.0));
        dashboard.record(&record(43, 1));
        dashboard.record(&record(0, 9));
        assert_eq!(dashboard.games(), 2);
        assert_eq!(dashboard.averages(), (21.5, 5.0));
        assert_eq!(
            dashboard.stats_line(),
            "Current Stats: Avg Score: 21.50 | Avg Tiles Closed: 5.0"
        );
    }
}
