use colored::Colorize;

use crate::domain::{LeaderboardEntry, LeaderboardRow};

/// Render leaderboard entries as plain terminal text, one line per entry.
pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        match entry {
            LeaderboardEntry::Header { header } => {
                out.push('\n');
                out.push_str(&format!("{}", header.bold().underline()));
                out.push('\n');
            }
            LeaderboardEntry::Row(row) => {
                out.push_str(&render_row(row));
                out.push('\n');
            }
        }
    }
    out
}

fn render_row(row: &LeaderboardRow) -> String {
    let result = if row.result_rank == "(1)" {
        row.result.green().bold().to_string()
    } else {
        row.result.normal().to_string()
    };

    format!(
        "{:>5} {:<28} {:>9} {:>8} {:>5} {:>9} {:>8} {:>5} {:>10} {:>8} {:>5} {:>7}{}",
        row.bib,
        row.name,
        row.split,
        row.split_diff.dimmed(),
        row.split_rank,
        row.second,
        row.second_diff.dimmed(),
        row.second_rank,
        result,
        row.result_diff.yellow(),
        row.result_rank,
        row.pace,
        row.pace_unit,
    )
}
