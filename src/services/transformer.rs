use log::{debug, info};
use std::collections::HashMap;

use crate::config::RaceSettings;
use crate::domain::{
    CheckpointTime, IN_PROGRESS, LeaderboardEntry, LeaderboardRow, RawSplitRecord, TimingRow,
    TransformOutput,
};
use crate::ranking::RankedOrder;
use crate::timing::{self, BLANK, Seconds, format_diff, format_time, recorded};
use crate::timing::codec::format_clock;

const PACE_UNIT: &str = "/500m";

/// Records sharing a wave name, in input order.
#[derive(Debug, Clone)]
pub struct WaveGroup<'a> {
    pub name: &'a str,
    pub records: Vec<&'a RawSplitRecord>,
}

/// A raw record with the metrics the leaderboard ranks on.
///
/// `None` marks a value the provider never recorded.
#[derive(Debug, Clone)]
pub struct CalculatedRecord<'a> {
    pub raw: &'a RawSplitRecord,
    /// Start to the intermediate checkpoint
    pub split: Option<Seconds>,
    /// Intermediate checkpoint to finish
    pub second: Option<Seconds>,
    pub result: Option<Seconds>,
    pub pace: Seconds,
}

struct WaveRankings {
    split: RankedOrder,
    second: RankedOrder,
    result: RankedOrder,
}

impl WaveRankings {
    fn new(members: &[CalculatedRecord<'_>]) -> Self {
        Self {
            split: RankedOrder::new(members, |m| m.split),
            second: RankedOrder::new(members, |m| m.second),
            result: RankedOrder::new(members, |m| m.result),
        }
    }
}

/// One formatted metric: value, gap to the leader and bracketed position.
struct Cells {
    value: String,
    diff: String,
    rank: String,
}

/// Turns provider records into the timing and leaderboard views
pub struct ResultTransformer {
    race: RaceSettings,
}

impl ResultTransformer {
    pub fn new(race: RaceSettings) -> Self {
        Self { race }
    }

    pub fn transform(&self, records: &[RawSplitRecord]) -> TransformOutput {
        let timing = self.timing_rows(records);
        let results = self.leaderboard(records);

        info!(
            "Transformed {} records into {} leaderboard entries",
            records.len(),
            results.len()
        );

        TransformOutput { timing, results }
    }

    // --- Timing View ---

    pub fn timing_rows(&self, records: &[RawSplitRecord]) -> Vec<TimingRow> {
        records.iter().map(Self::timing_row).collect()
    }

    fn timing_row(record: &RawSplitRecord) -> TimingRow {
        TimingRow {
            name: record.name.clone(),
            bib: record.bib.clone(),
            club: record.club.clone(),
            cat: record.cat.clone(),
            wave_name: record.wave_name.clone(),
            age: record.age.clone(),
            gender: record.gender.clone(),
            lane: record.custom.clone(),
            handicap: record.handicap.clone(),
            start: Self::clock_cell(record.start_time()),
            intermediate: Self::clock_cell(record.intermediate_time()),
            split2: format_clock(&record.split2, &record.split2_dec),
            split3: format_clock(&record.split3, &record.split3_dec),
            split4: BLANK.to_string(),
            finish: Self::clock_cell(record.finish_time()),
            result: record.result.as_str().to_string(),
            penalty: record.penalty.clone(),
            penalty_note: record.penalty_note.clone(),
        }
    }

    fn clock_cell(checkpoint: CheckpointTime<'_>) -> String {
        format_clock(checkpoint.time, checkpoint.decile)
    }

    // --- Leaderboard View ---

    pub fn leaderboard(&self, records: &[RawSplitRecord]) -> Vec<LeaderboardEntry> {
        let waves = group_by_wave(records);
        let mut entries = Vec::with_capacity(records.len() + waves.len());

        for wave in &waves {
            entries.extend(self.wave_entries(wave));
        }

        entries
    }

    fn wave_entries(&self, wave: &WaveGroup<'_>) -> Vec<LeaderboardEntry> {
        let members: Vec<CalculatedRecord<'_>> = wave
            .records
            .iter()
            .map(|record| self.calculate(record))
            .collect();
        let rankings = WaveRankings::new(&members);

        debug!(
            "Wave {:?}: {} athletes, best result {}",
            wave.name,
            members.len(),
            format_time(rankings.result.best_value())
        );

        let mut entries = Vec::with_capacity(members.len() + 1);
        entries.push(LeaderboardEntry::header(wave.name));
        entries.extend(
            members.iter().enumerate().map(|(index, member)| {
                LeaderboardEntry::Row(Self::leaderboard_row(index, member, &rankings))
            }),
        );
        entries
    }

    /// Derive the ranked metrics for one record.
    pub fn calculate<'a>(&self, record: &'a RawSplitRecord) -> CalculatedRecord<'a> {
        let start = parse_checkpoint(record.start_time());
        let intermediate = parse_checkpoint(record.intermediate_time());
        let finish = parse_checkpoint(record.finish_time());

        CalculatedRecord {
            raw: record,
            split: recorded(timing::duration(start, intermediate)),
            second: recorded(timing::duration(intermediate, finish)),
            result: recorded(record.result_secs),
            pace: self.pace(record.result_secs),
        }
    }

    /// Result time scaled to the reporting distance.
    pub fn pace(&self, result_secs: Seconds) -> Seconds {
        if result_secs <= 0.0 || self.race.race_distance <= 0.0 {
            return 0.0;
        }
        (result_secs / self.race.race_distance) * self.race.pace_distance
    }

    fn leaderboard_row(
        index: usize,
        member: &CalculatedRecord<'_>,
        rankings: &WaveRankings,
    ) -> LeaderboardRow {
        let raw = member.raw;
        let split = Self::cells(index, member.split, &rankings.split);
        let second = Self::cells(index, member.second, &rankings.second);
        let result = Self::cells(index, member.result, &rankings.result);

        let result_value = if raw.result.is_in_progress() {
            IN_PROGRESS.to_string()
        } else {
            result.value
        };

        LeaderboardRow {
            rank: BLANK.to_string(),
            name: raw.name.clone(),
            bib: raw.bib.clone(),
            club: raw.club.clone(),
            cat: raw.cat.clone(),
            age: raw.age.clone(),
            gender: raw.gender.clone(),
            lane: raw.custom.clone(),
            handicap: raw.handicap.clone(),
            split: split.value,
            split_diff: split.diff,
            split_rank: split.rank,
            second: second.value,
            second_diff: second.diff,
            second_rank: second.rank,
            result: result_value,
            result_diff: result.diff,
            result_rank: result.rank,
            pace: format_time(member.pace),
            pace_unit: PACE_UNIT.to_string(),
        }
    }

    fn cells(index: usize, value: Option<Seconds>, ranking: &RankedOrder) -> Cells {
        let position = ranking.position_of(index);
        let delta = delta_to_best(position, value, ranking.best_value());

        Cells {
            value: format_time(value.unwrap_or(0.0)),
            diff: format_diff(delta),
            rank: format_rank(position),
        }
    }
}

/// Group records by wave, waves in first-seen order.
pub fn group_by_wave(records: &[RawSplitRecord]) -> Vec<WaveGroup<'_>> {
    let mut waves: Vec<WaveGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let name = record.wave_name.as_str();
        let slot = *index.entry(name).or_insert_with(|| {
            waves.push(WaveGroup {
                name,
                records: Vec::new(),
            });
            waves.len() - 1
        });
        waves[slot].records.push(record);
    }

    waves
}

/// Gap to the ranking's best value; 0 for the leader and for unrecorded values.
pub fn delta_to_best(position: Option<usize>, value: Option<Seconds>, best: Seconds) -> Seconds {
    match value {
        Some(v) if position != Some(1) => v - best,
        _ => 0.0,
    }
}

fn format_rank(position: Option<usize>) -> String {
    position.map_or_else(|| BLANK.to_string(), |p| format!("({p})"))
}

fn parse_checkpoint(checkpoint: CheckpointTime<'_>) -> Seconds {
    timing::parse_time(checkpoint.time, checkpoint.decile)
}
