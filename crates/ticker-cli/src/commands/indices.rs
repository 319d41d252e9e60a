use anyhow::Result;
use serde::Serialize;

use ticker_core::sequence::ScrollDirection;
use ticker_core::{AppConfig, CharacterList};

use super::{display_char, display_frames, parse_char};

#[derive(Debug, Serialize)]
struct IndicesReport {
    list: String,
    start_index: usize,
    end_index: usize,
    direction: ScrollDirection,
    distance: usize,
    frames: Vec<char>,
}

pub fn run(config: &AppConfig, start: &str, end: &str, list: Option<&str>, json: bool) -> Result<()> {
    let start = parse_char(start)?;
    let end = parse_char(end)?;

    let candidates: Vec<(String, CharacterList)> = match list {
        Some(name) => vec![(name.to_string(), config.character_list(name)?)],
        None => config
            .ticker
            .character_lists
            .iter()
            .cloned()
            .zip(config.character_lists()?)
            .collect(),
    };

    let report = candidates.iter().find_map(|(name, list)| {
        let indices = list.character_indices(start, end)?;
        let buffer = list.character_buffer();
        Some(IndicesReport {
            list: name.clone(),
            start_index: indices.start_index,
            end_index: indices.end_index,
            direction: indices.direction(),
            distance: indices.distance(),
            frames: indices.steps().map(|i| buffer[i]).collect(),
        })
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match report {
        Some(report) => {
            println!(
                "{} -> {} via list '{}'",
                display_char(start),
                display_char(end),
                report.list
            );
            println!("  Indices:   {} -> {}", report.start_index, report.end_index);
            println!("  Direction: {:?} ({} steps)", report.direction, report.distance);
            println!("  Frames:    {}", display_frames(&report.frames));
        }
        None => {
            tracing::debug!(start = ?start, end = ?end, "No character list supports transition");
            println!(
                "{} -> {} is not supported by any character list; it changes instantly.",
                display_char(start),
                display_char(end)
            );
        }
    }

    Ok(())
}
