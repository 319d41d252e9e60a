//! Column alignment between an old and a new text
//!
//! Characters that no character list supports act as anchors: they stay in
//! place and split both texts into runs of animatable characters. Runs of
//! the same length line up one-to-one; runs of different length are aligned
//! with a Levenshtein edit matrix so that the fewest columns appear or
//! disappear.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// What happens to one column when the text changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAction {
    /// A new column appears, consuming one target character
    Insert,
    /// An existing column disappears, consuming one source character
    Delete,
    /// The column stays and moves from its source to its target character
    Same,
}

/// Align `source` and `target` into columns.
///
/// The result holds one action per column of the transition; replaying it
/// consumes every character of both texts exactly once.
pub fn compute_column_actions(
    source: &[char],
    target: &[char],
    supported: &HashSet<char>,
) -> Vec<ColumnAction> {
    let mut actions = Vec::with_capacity(source.len().max(target.len()));
    let mut source_index = 0;
    let mut target_index = 0;

    loop {
        let source_done = source_index == source.len();
        let target_done = target_index == target.len();

        if source_done && target_done {
            break;
        } else if source_done {
            actions.extend(std::iter::repeat(ColumnAction::Insert).take(target.len() - target_index));
            break;
        } else if target_done {
            actions.extend(std::iter::repeat(ColumnAction::Delete).take(source.len() - source_index));
            break;
        }

        let source_supported = supported.contains(&source[source_index]);
        let target_supported = supported.contains(&target[target_index]);

        match (source_supported, target_supported) {
            (true, true) => {
                let source_end = find_next_unsupported(source, source_index + 1, supported);
                let target_end = find_next_unsupported(target, target_index + 1, supported);
                append_run_actions(
                    &mut actions,
                    &source[source_index..source_end],
                    &target[target_index..target_end],
                );
                source_index = source_end;
                target_index = target_end;
            }
            (true, false) => {
                actions.push(ColumnAction::Insert);
                target_index += 1;
            }
            (false, true) => {
                actions.push(ColumnAction::Delete);
                source_index += 1;
            }
            (false, false) => {
                actions.push(ColumnAction::Same);
                source_index += 1;
                target_index += 1;
            }
        }
    }

    actions
}

fn find_next_unsupported(text: &[char], from: usize, supported: &HashSet<char>) -> usize {
    text[from..]
        .iter()
        .position(|c| !supported.contains(c))
        .map_or(text.len(), |offset| from + offset)
}

fn append_run_actions(actions: &mut Vec<ColumnAction>, source: &[char], target: &[char]) {
    if source.len() == target.len() {
        actions.extend(std::iter::repeat(ColumnAction::Same).take(source.len()));
        return;
    }

    let rows = source.len() + 1;
    let cols = target.len() + 1;
    let mut matrix = vec![vec![0usize; cols]; rows];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..cols {
        matrix[0][j] = j;
    }

    for row in 1..rows {
        for col in 1..cols {
            let cost = usize::from(source[row - 1] != target[col - 1]);
            matrix[row][col] = (matrix[row - 1][col] + 1)
                .min(matrix[row][col - 1] + 1)
                .min(matrix[row - 1][col - 1] + cost);
        }
    }

    // Backtrack from the bottom-right corner, then reverse
    let mut run = Vec::with_capacity(rows.max(cols));
    let (mut row, mut col) = (rows - 1, cols - 1);
    while row > 0 || col > 0 {
        if row == 0 {
            run.push(ColumnAction::Insert);
            col -= 1;
        } else if col == 0 {
            run.push(ColumnAction::Delete);
            row -= 1;
        } else {
            let insert = matrix[row][col - 1];
            let delete = matrix[row - 1][col];
            let replace = matrix[row - 1][col - 1];

            if insert < delete && insert < replace {
                run.push(ColumnAction::Insert);
                col -= 1;
            } else if delete < replace {
                run.push(ColumnAction::Delete);
                row -= 1;
            } else {
                run.push(ColumnAction::Same);
                row -= 1;
                col -= 1;
            }
        }
    }

    run.reverse();
    actions.extend(run);
}
