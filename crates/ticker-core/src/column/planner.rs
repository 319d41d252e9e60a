use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::alignment::{compute_column_actions, ColumnAction};
use crate::sequence::{AnimationCharacterIndices, CharacterList, EMPTY_CHAR};

/// How a single column gets from its old to its new character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColumnPath {
    /// Scroll through the buffer of `planner.lists()[list]`
    Scroll {
        list: usize,
        indices: AnimationCharacterIndices,
    },
    /// No list supports both characters; swap without intermediate frames
    Instant,
}

/// One column of a planned text change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTransition {
    pub action: ColumnAction,
    /// Character shown before the change ([`EMPTY_CHAR`] for inserted columns)
    pub from: char,
    /// Character shown after the change ([`EMPTY_CHAR`] for deleted columns)
    pub to: char,
    pub path: ColumnPath,
}

impl ColumnTransition {
    /// Characters this column displays while animating, first to last
    pub fn frames(&self, planner: &TickerPlanner) -> Vec<char> {
        match self.path {
            ColumnPath::Scroll { list, indices } => {
                let buffer = planner.lists[list].character_buffer();
                indices.steps().map(|i| buffer[i]).collect()
            }
            ColumnPath::Instant if self.from == self.to => vec![self.from],
            ColumnPath::Instant => vec![self.from, self.to],
        }
    }

    #[inline]
    pub fn is_animated(&self) -> bool {
        matches!(self.path, ColumnPath::Scroll { indices, .. } if !indices.is_static())
    }
}

/// Plans whole-text transitions against an ordered set of character lists.
///
/// For every column the first list that supports both characters wins, so
/// list order in configuration matters when lists overlap.
#[derive(Debug, Clone)]
pub struct TickerPlanner {
    lists: Vec<CharacterList>,
    supported: HashSet<char>,
}

impl TickerPlanner {
    pub fn new(lists: Vec<CharacterList>) -> Self {
        let supported = lists
            .iter()
            .flat_map(|list| list.supported_characters())
            .collect();

        Self { lists, supported }
    }

    pub fn lists(&self) -> &[CharacterList] {
        &self.lists
    }

    /// Union of the characters supported by every list
    pub fn supported_characters(&self) -> &HashSet<char> {
        &self.supported
    }

    /// Resolve a single column transition
    pub fn column_path(&self, from: char, to: char) -> ColumnPath {
        self.lists
            .iter()
            .enumerate()
            .find_map(|(i, list)| {
                list.character_indices(from, to)
                    .map(|indices| ColumnPath::Scroll { list: i, indices })
            })
            .unwrap_or(ColumnPath::Instant)
    }

    /// Plan the column-by-column transition from `from` to `to`
    pub fn plan(&self, from: &str, to: &str) -> Vec<ColumnTransition> {
        let source: Vec<char> = from.chars().collect();
        let target: Vec<char> = to.chars().collect();
        let actions = compute_column_actions(&source, &target, &self.supported);

        let mut source_chars = source.into_iter();
        let mut target_chars = target.into_iter();
        let mut columns = Vec::with_capacity(actions.len());

        for action in actions {
            let (start, end) = match action {
                ColumnAction::Insert => (EMPTY_CHAR, target_chars.next().unwrap_or(EMPTY_CHAR)),
                ColumnAction::Delete => (source_chars.next().unwrap_or(EMPTY_CHAR), EMPTY_CHAR),
                ColumnAction::Same => (
                    source_chars.next().unwrap_or(EMPTY_CHAR),
                    target_chars.next().unwrap_or(EMPTY_CHAR),
                ),
            };

            columns.push(ColumnTransition {
                action,
                from: start,
                to: end,
                path: self.column_path(start, end),
            });
        }

        tracing::debug!(
            from = %from,
            to = %to,
            columns = columns.len(),
            animated = columns.iter().filter(|c| c.is_animated()).count(),
            "Planned ticker transition"
        );

        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner() -> TickerPlanner {
        TickerPlanner::new(vec![CharacterList::number(), CharacterList::alphabet()])
    }

    #[test]
    fn test_column_path_uses_first_supporting_list() {
        let planner = planner();
        assert_eq!(
            planner.column_path('9', '0'),
            ColumnPath::Scroll {
                list: 0,
                indices: AnimationCharacterIndices::new(10, 11)
            }
        );
        assert!(matches!(
            planner.column_path('a', 'c'),
            ColumnPath::Scroll { list: 1, .. }
        ));
    }

    #[test]
    fn test_column_path_falls_back_to_instant() {
        let planner = planner();
        assert_eq!(planner.column_path('1', 'a'), ColumnPath::Instant);
        assert_eq!(planner.column_path('.', ','), ColumnPath::Instant);
    }

    #[test]
    fn test_empty_char_supported_by_any_list() {
        let planner = planner();
        assert_eq!(
            planner.column_path(EMPTY_CHAR, EMPTY_CHAR),
            ColumnPath::Scroll {
                list: 0,
                indices: AnimationCharacterIndices::new(0, 0)
            }
        );
    }

    #[test]
    fn test_plan_price_change() {
        let planner = planner();
        let columns = planner.plan("$9.99", "$10.05");

        let actions: Vec<ColumnAction> = columns.iter().map(|c| c.action).collect();
        assert_eq!(
            actions,
            vec![
                ColumnAction::Same,
                ColumnAction::Insert,
                ColumnAction::Same,
                ColumnAction::Same,
                ColumnAction::Same,
                ColumnAction::Same,
            ]
        );

        assert_eq!(columns[0].path, ColumnPath::Instant);
        assert_eq!(columns[0].frames(&planner), vec!['$']);

        assert_eq!((columns[1].from, columns[1].to), (EMPTY_CHAR, '1'));
        assert_eq!(columns[1].frames(&planner), vec![EMPTY_CHAR, '0', '1']);

        assert_eq!((columns[2].from, columns[2].to), ('9', '0'));
        assert_eq!(columns[2].frames(&planner), vec!['9', '0']);
        assert!(columns[2].is_animated());

        assert!(!columns[3].is_animated());
        // 9 -> 5 is shorter backward than wrapping
        assert_eq!(columns[5].frames(&planner), vec!['9', '8', '7', '6', '5']);
    }

    #[test]
    fn test_plan_deleted_column() {
        let planner = planner();
        let columns = planner.plan("10", "1");
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[1].action, ColumnAction::Delete);
        assert_eq!((columns[1].from, columns[1].to), ('0', EMPTY_CHAR));
        assert_eq!(columns[1].frames(&planner), vec!['0', EMPTY_CHAR]);
    }

    #[test]
    fn test_plan_instant_swap() {
        let planner = TickerPlanner::new(vec![CharacterList::number()]);
        let columns = planner.plan("a", "b");
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].path, ColumnPath::Instant);
        assert_eq!(columns[0].frames(&planner), vec!['a', 'b']);
        assert!(!columns[0].is_animated());
    }

    #[test]
    fn test_plan_serializes() {
        let planner = planner();
        let columns = planner.plan("1", "2");
        let json = serde_json::to_value(&columns).unwrap();
        assert_eq!(json[0]["action"], "same");
        assert_eq!(json[0]["path"]["kind"], "scroll");
        assert_eq!(json[0]["path"]["indices"]["start_index"], 2);
        assert_eq!(json[0]["path"]["indices"]["end_index"], 3);
    }
}
