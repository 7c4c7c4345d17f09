use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use shut_the_box::GameRecord;
use tracing::{debug, warn};

/// Result files are named `<prefix><unix seconds>.csv` and `.json`.
pub const RESULTS_PREFIX: &str = "stb_results_";

const CSV_HEADER: &str = "Strategy,Game Number,Score,Tiles Closed,Rolls,Moves";

/// Writes the game records of one run into a CSV and a JSON file.
pub struct Recorder {
    csv_path: PathBuf,
    json_path: PathBuf,
    // Everything written so far, as the JSON file is rewritten as a whole.
    records: Vec<GameRecord>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        let stamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        Self::with_file_stem(directory, &format!("{}{}", RESULTS_PREFIX, stamp))
    }

    pub fn with_file_stem(directory: PathBuf, stem: &str) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            csv_path: directory.join(format!("{}.csv", stem)),
            json_path: directory.join(format!("{}.json", stem)),
            records: Vec::new(),
        })
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn json_path(&self) -> &Path {
        &self.json_path
    }

    /// Appends `records` to the CSV file and rewrites the JSON file.
    pub fn write_results(&mut self, records: &[GameRecord]) -> anyhow::Result<()> {
        self.append_csv(records)?;
        self.records.extend_from_slice(records);
        let mut writer = BufWriter::new(File::create(&self.json_path)?);
        serde_json::to_writer_pretty(&mut writer, &self.records)?;
        writer.flush()?;
        debug!(csv = %self.csv_path.display(), json = %self.json_path.display(), "Results saved");
        Ok(())
    }

    fn append_csv(&self, records: &[GameRecord]) -> anyhow::Result<()> {
        let write_header = !self.csv_path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)?;
        let mut writer = BufWriter::new(file);
        if write_header {
            writeln!(writer, "{}", CSV_HEADER)?;
        }
        for record in records {
            writeln!(writer, "{}", csv_row(record))?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// One CSV line for a record. Rolls and moves are written as bracketed lists.
pub fn csv_row(record: &GameRecord) -> String {
    let rolls: Vec<String> = record
        .rolls
        .iter()
        .map(|roll| format!("({}, {})", roll.die1(), roll.die2()))
        .collect();
    let moves: Vec<String> = record
        .padded_moves()
        .iter()
        .map(|tiles| {
            let tiles: Vec<String> = tiles.iter().map(u8::to_string).collect();
            format!("[{}]", tiles.join(", "))
        })
        .collect();
    [
        record.strategy.tag().to_string(),
        record.game_number.to_string(),
        record.final_score.to_string(),
        record.tiles_closed.to_string(),
        csv_field(&format!("[{}]", rolls.join(", "))),
        csv_field(&format!("[{}]", moves.join(", "))),
    ]
    .join(",")
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        String::from(value)
    }
}

/// Reads the records of every JSON result file in `directory`.
///
/// Files that do not hold a list of game records are skipped with a warning.
pub fn load_results(directory: &Path) -> anyhow::Result<Vec<GameRecord>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(directory)
        .with_context(|| format!("Could not read directory '{}'", directory.display()))?
    {
        let path = entry?.path();
        let is_result_file = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(RESULTS_PREFIX) && name.ends_with(".json"));
        if is_result_file {
            paths.push(path);
        }
    }
    paths.sort();

    let mut records = Vec::new();
    for path in paths {
        let reader = BufReader::new(File::open(&path)?);
        let file_records: Vec<GameRecord> = match serde_json::from_reader(reader) {
            Ok(file_records) => file_records,
            Err(err) => {
                warn!(path = %path.display(), %err, "Skipping invalid result file");
                continue;
            }
        };
        debug!(path = %path.display(), num_records = file_records.len(), "Loaded results");
        records.extend(file_records);
    }
    Ok(records)
}
