use serde::{Deserialize, Serialize};

use super::lenient;

/// Literal the provider sends in `Result` while an athlete is still racing.
pub const IN_PROGRESS: &str = "In Progress";

/// A time-of-day reading at one checkpoint: clock string plus decile digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckpointTime<'a> {
    pub time: &'a str,
    pub decile: &'a str,
}

/// Whether the athlete has a terminal result yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FinishStatus {
    Finished(String),
    InProgress,
}

impl Default for FinishStatus {
    fn default() -> Self {
        FinishStatus::Finished(String::new())
    }
}

impl From<String> for FinishStatus {
    fn from(value: String) -> Self {
        if value == IN_PROGRESS {
            FinishStatus::InProgress
        } else {
            FinishStatus::Finished(value)
        }
    }
}

impl From<FinishStatus> for String {
    fn from(status: FinishStatus) -> Self {
        match status {
            FinishStatus::Finished(result) => result,
            FinishStatus::InProgress => IN_PROGRESS.to_string(),
        }
    }
}

impl FinishStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, FinishStatus::InProgress)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FinishStatus::Finished(result) => result,
            FinishStatus::InProgress => IN_PROGRESS,
        }
    }
}

/// One athlete's split data as embedded in the provider's results page
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawSplitRecord {
    #[serde(rename = "Name", default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "Bib", default, deserialize_with = "lenient::text")]
    pub bib: String,
    #[serde(rename = "Club", default, deserialize_with = "lenient::text")]
    pub club: String,
    #[serde(rename = "Cat", default, deserialize_with = "lenient::text")]
    pub cat: String,
    #[serde(rename = "WaveName", default, deserialize_with = "lenient::text")]
    pub wave_name: String,
    #[serde(rename = "Age", default, deserialize_with = "lenient::text")]
    pub age: String,
    #[serde(rename = "Gender", default, deserialize_with = "lenient::text")]
    pub gender: String,
    /// Lane assignment
    #[serde(rename = "Custom", default, deserialize_with = "lenient::text")]
    pub custom: String,
    #[serde(rename = "Handicap", default, deserialize_with = "lenient::text")]
    pub handicap: String,
    #[serde(rename = "RaceId", default, deserialize_with = "lenient::text")]
    pub race_id: String,

    #[serde(rename = "Start", default, deserialize_with = "lenient::text")]
    pub start: String,
    #[serde(rename = "StartDec", default, deserialize_with = "lenient::text")]
    pub start_dec: String,
    #[serde(rename = "Split1", default, deserialize_with = "lenient::text")]
    pub split1: String,
    #[serde(rename = "Split1Dec", default, deserialize_with = "lenient::text")]
    pub split1_dec: String,
    #[serde(rename = "Split2", default, deserialize_with = "lenient::text")]
    pub split2: String,
    #[serde(rename = "Split2Dec", default, deserialize_with = "lenient::text")]
    pub split2_dec: String,
    #[serde(rename = "Split3", default, deserialize_with = "lenient::text")]
    pub split3: String,
    #[serde(rename = "Split3Dec", default, deserialize_with = "lenient::text")]
    pub split3_dec: String,
    #[serde(rename = "Finish", default, deserialize_with = "lenient::text")]
    pub finish: String,
    #[serde(rename = "FinishDec", default, deserialize_with = "lenient::text")]
    pub finish_dec: String,

    #[serde(rename = "Result", default, deserialize_with = "lenient::finish_status")]
    pub result: FinishStatus,
    #[serde(rename = "ResultSecs", default, deserialize_with = "lenient::seconds")]
    pub result_secs: f64,
    #[serde(rename = "Penalty", default, deserialize_with = "lenient::text")]
    pub penalty: String,
    #[serde(rename = "PenaltyNote", default, deserialize_with = "lenient::text")]
    pub penalty_note: String,
}

impl RawSplitRecord {
    pub fn start_time(&self) -> CheckpointTime<'_> {
        CheckpointTime {
            time: &self.start,
            decile: &self.start_dec,
        }
    }

    /// The intermediate checkpoint used for the leaderboard split.
    pub fn intermediate_time(&self) -> CheckpointTime<'_> {
        CheckpointTime {
            time: &self.split1,
            decile: &self.split1_dec,
        }
    }

    pub fn finish_time(&self) -> CheckpointTime<'_> {
        CheckpointTime {
            time: &self.finish,
            decile: &self.finish_dec,
        }
    }
}

/// Flat per-athlete row for the timing view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Bib")]
    pub bib: String,
    #[serde(rename = "Club")]
    pub club: String,
    #[serde(rename = "Cat")]
    pub cat: String,
    #[serde(rename = "WaveName")]
    pub wave_name: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Lane")]
    pub lane: String,
    #[serde(rename = "Handicap")]
    pub handicap: String,
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "500m")]
    pub intermediate: String,
    #[serde(rename = "Split2")]
    pub split2: String,
    #[serde(rename = "Split3")]
    pub split3: String,
    #[serde(rename = "Split4")]
    pub split4: String,
    #[serde(rename = "Finish")]
    pub finish: String,
    #[serde(rename = "Result")]
    pub result: String,
    #[serde(rename = "Penalty")]
    pub penalty: String,
    #[serde(rename = "PenaltyNote")]
    pub penalty_note: String,
}

/// Per-athlete leaderboard row; cells are already formatted for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Bib")]
    pub bib: String,
    #[serde(rename = "Club")]
    pub club: String,
    #[serde(rename = "Cat")]
    pub cat: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Lane")]
    pub lane: String,
    #[serde(rename = "Handicap")]
    pub handicap: String,
    #[serde(rename = "Split")]
    pub split: String,
    #[serde(rename = "SplitDiff")]
    pub split_diff: String,
    #[serde(rename = "SplitRank")]
    pub split_rank: String,
    #[serde(rename = "Second")]
    pub second: String,
    #[serde(rename = "SecondDiff")]
    pub second_diff: String,
    #[serde(rename = "SecondRank")]
    pub second_rank: String,
    #[serde(rename = "Result")]
    pub result: String,
    #[serde(rename = "ResultDiff")]
    pub result_diff: String,
    #[serde(rename = "ResultRank")]
    pub result_rank: String,
    #[serde(rename = "Pace")]
    pub pace: String,
    #[serde(rename = "PaceUnit")]
    pub pace_unit: String,
}

/// Entry of the leaderboard view: a wave marker or an athlete row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LeaderboardEntry {
    Header { header: String },
    Row(LeaderboardRow),
}

impl LeaderboardEntry {
    pub fn header(wave_name: &str) -> Self {
        LeaderboardEntry::Header {
            header: wave_name.to_string(),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, LeaderboardEntry::Header { .. })
    }
}

/// Both views produced from one record set.
#[derive(Debug, Clone, Serialize)]
pub struct TransformOutput {
    pub timing: Vec<TimingRow>,
    pub results: Vec<LeaderboardEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_status_from_result_field() {
        let record: RawSplitRecord =
            serde_json::from_str(r#"{"RaceId": "7", "Result": "In Progress"}"#).unwrap();
        assert!(record.result.is_in_progress());

        let record: RawSplitRecord =
            serde_json::from_str(r#"{"RaceId": "8", "Result": "3:41.2"}"#).unwrap();
        assert_eq!(record.result, FinishStatus::Finished("3:41.2".to_string()));
    }

    #[test]
    fn test_numeric_identity_fields_become_text() {
        let record: RawSplitRecord =
            serde_json::from_str(r#"{"Bib": 112, "RaceId": 9001, "Age": null}"#).unwrap();
        assert_eq!(record.bib, "112");
        assert_eq!(record.race_id, "9001");
        assert_eq!(record.age, "");
    }

    #[test]
    fn test_header_serializes_as_single_field() {
        let json = serde_json::to_value(LeaderboardEntry::header("Wave A")).unwrap();
        assert_eq!(json, serde_json::json!({ "header": "Wave A" }));
    }
}
