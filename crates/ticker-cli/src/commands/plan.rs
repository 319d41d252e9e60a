use anyhow::Result;
use serde::Serialize;

use ticker_core::{AppConfig, ColumnPath, ColumnTransition};

use super::{display_char, display_frames};

#[derive(Debug, Serialize)]
struct ColumnReport<'a> {
    #[serde(flatten)]
    transition: &'a ColumnTransition,
    frames: Vec<char>,
}

pub fn run(config: &AppConfig, from: &str, to: &str, json: bool) -> Result<()> {
    let planner = config.planner()?;
    let columns = planner.plan(from, to);

    if json {
        let report: Vec<ColumnReport> = columns
            .iter()
            .map(|transition| ColumnReport {
                transition,
                frames: transition.frames(&planner),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\"{}\" -> \"{}\" ({} columns):\n", from, to, columns.len());

    for (i, column) in columns.iter().enumerate() {
        let via = match column.path {
            ColumnPath::Scroll { list, indices } => format!(
                "{} [{} -> {}]",
                config.ticker.character_lists[list], indices.start_index, indices.end_index
            ),
            ColumnPath::Instant => "instant".to_string(),
        };

        println!(
            "  {:>3}  {:<6}  {:>7} -> {:<7}  {:<20}  {}",
            i,
            format!("{:?}", column.action).to_lowercase(),
            display_char(column.from),
            display_char(column.to),
            via,
            display_frames(&column.frames(&planner)),
        );
    }

    Ok(())
}
