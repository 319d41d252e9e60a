use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use super::indices::AnimationCharacterIndices;
use super::presets::{ALPHABET_LIST, NUMBER_LIST};
use super::EMPTY_CHAR;
use crate::{Error, Result};

/// Ordered characters a ticker column can scroll through.
///
/// Given "abcde", animating from 'd' to 'b' scrolls 'd', 'c', 'b'. The list is
/// treated as circular: from 'e' to 'a' the column keeps scrolling forward
/// when that is strictly shorter than going back.
///
/// The buffer is always laid out as `EMPTY_CHAR, list, list` so a wrapping
/// animation is a plain forward walk into the second copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterList {
    characters: String,
    num_original_characters: usize,
    character_buffer: Vec<char>,
    character_indices: HashMap<char, usize>,
}

impl CharacterList {
    /// Build a list from its characters.
    ///
    /// # Errors
    /// Returns [`Error::EmptyCharInList`] if `characters` contains
    /// [`EMPTY_CHAR`], which every list supports implicitly.
    pub fn new(characters: &str) -> Result<Self> {
        if characters.contains(EMPTY_CHAR) {
            return Err(Error::EmptyCharInList);
        }

        Ok(Self::build(characters))
    }

    /// The digits `0-9`
    pub fn number() -> Self {
        Self::build(NUMBER_LIST)
    }

    /// Lowercase then uppercase latin letters
    pub fn alphabet() -> Self {
        Self::build(ALPHABET_LIST)
    }

    fn build(characters: &str) -> Self {
        let chars: Vec<char> = characters.chars().collect();
        let length = chars.len();

        // Later duplicates overwrite earlier ones
        let mut character_indices = HashMap::with_capacity(length);
        for (i, &c) in chars.iter().enumerate() {
            character_indices.insert(c, i);
        }

        let mut character_buffer = Vec::with_capacity(length * 2 + 1);
        character_buffer.push(EMPTY_CHAR);
        character_buffer.extend_from_slice(&chars);
        character_buffer.extend_from_slice(&chars);

        tracing::debug!(
            characters = length,
            distinct = character_indices.len(),
            "Built character list"
        );

        Self {
            characters: characters.to_string(),
            num_original_characters: length,
            character_buffer,
            character_indices,
        }
    }

    /// Indices to scroll across when animating from `start` to `end`.
    ///
    /// Returns `None` when either character is neither in the list nor
    /// [`EMPTY_CHAR`]; callers should then swap characters without animating.
    ///
    /// When both characters are real and `end` comes before `start`, the
    /// column wraps forward into the second copy of the list if that is
    /// strictly shorter than scrolling backward. Ties scroll backward.
    /// Transitions to or from [`EMPTY_CHAR`] never wrap.
    pub fn character_indices(&self, start: char, end: char) -> Option<AnimationCharacterIndices> {
        let start_index = self.index_of(start)?;
        let mut end_index = self.index_of(end)?;

        if start != EMPTY_CHAR && end != EMPTY_CHAR && end_index < start_index {
            let non_wrap_distance = start_index - end_index;
            let wrap_distance = self.num_original_characters - start_index + end_index;
            if wrap_distance < non_wrap_distance {
                end_index += self.num_original_characters;
            }
        }

        Some(AnimationCharacterIndices::new(start_index, end_index))
    }

    /// Position of `c` in the character buffer (first copy)
    pub fn index_of(&self, c: char) -> Option<usize> {
        if c == EMPTY_CHAR {
            Some(0)
        } else {
            self.character_indices.get(&c).map(|i| i + 1)
        }
    }

    /// Characters shown while animating from `start` to `end`, both inclusive
    pub fn path(&self, start: char, end: char) -> Option<Vec<char>> {
        let indices = self.character_indices(start, end)?;
        Some(indices.steps().map(|i| self.character_buffer[i]).collect())
    }

    /// Whether `c` can be animated by this list (excluding [`EMPTY_CHAR`])
    #[inline]
    pub fn supports(&self, c: char) -> bool {
        self.character_indices.contains_key(&c)
    }

    pub fn supported_characters(&self) -> HashSet<char> {
        self.character_indices.keys().copied().collect()
    }

    /// The full `EMPTY_CHAR, list, list` buffer, `2 * len() + 1` long
    pub fn character_buffer(&self) -> &[char] {
        &self.character_buffer
    }

    /// Number of characters the list was built from
    #[inline]
    pub fn len(&self) -> usize {
        self.num_original_characters
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_original_characters == 0
    }

    pub fn as_str(&self) -> &str {
        &self.characters
    }
}

impl FromStr for CharacterList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for CharacterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.characters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(list: &CharacterList, start: char, end: char) -> (usize, usize) {
        let result = list.character_indices(start, end).unwrap();
        (result.start_index, result.end_index)
    }

    #[test]
    fn test_buffer_layout() {
        let list = CharacterList::new("abc").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(
            list.character_buffer(),
            &[EMPTY_CHAR, 'a', 'b', 'c', 'a', 'b', 'c']
        );
    }

    #[test]
    fn test_buffer_length() {
        for characters in ["", "x", "0123456789", ALPHABET_LIST, "äöü€"] {
            let list = CharacterList::new(characters).unwrap();
            let count = characters.chars().count();
            assert_eq!(list.character_buffer().len(), 2 * count + 1, "{:?}", characters);
        }
    }

    #[test]
    fn test_rejects_empty_char() {
        assert!(matches!(CharacterList::new("ab\0c"), Err(Error::EmptyCharInList)));
        assert!(matches!(CharacterList::new("\0"), Err(Error::EmptyCharInList)));
        assert!(matches!("01\0".parse::<CharacterList>(), Err(Error::EmptyCharInList)));
    }

    #[test]
    fn test_index_of() {
        let list = CharacterList::number();
        assert_eq!(list.index_of(EMPTY_CHAR), Some(0));
        assert_eq!(list.index_of('0'), Some(1));
        assert_eq!(list.index_of('9'), Some(10));
        assert_eq!(list.index_of('Z'), None);
    }

    #[test]
    fn test_same_character_is_static() {
        let list = CharacterList::number();
        for c in NUMBER_LIST.chars() {
            let result = list.character_indices(c, c).unwrap();
            assert!(result.is_static());
        }
        assert_eq!(indices(&list, EMPTY_CHAR, EMPTY_CHAR), (0, 0));
    }

    #[test]
    fn test_from_empty_char() {
        let list = CharacterList::number();
        for c in NUMBER_LIST.chars() {
            let expected = list.index_of(c).unwrap();
            assert_eq!(indices(&list, EMPTY_CHAR, c), (0, expected));
        }
    }

    #[test]
    fn test_to_empty_char_never_wraps() {
        let list = CharacterList::number();
        assert_eq!(indices(&list, '9', EMPTY_CHAR), (10, 0));
        assert_eq!(indices(&list, '1', EMPTY_CHAR), (2, 0));
    }

    #[test]
    fn test_wraps_when_shorter() {
        let list = CharacterList::number();
        assert_eq!(indices(&list, '9', '0'), (10, 11));
        assert_eq!(indices(&list, '8', '1'), (9, 12));
        assert_eq!(list.character_buffer()[11], '0');
    }

    #[test]
    fn test_forward_without_wrap() {
        let list = CharacterList::number();
        assert_eq!(indices(&list, '2', '7'), (3, 8));
    }

    #[test]
    fn test_tie_scrolls_backward() {
        let list = CharacterList::number();
        assert_eq!(indices(&list, '7', '2'), (8, 3));
    }

    #[test]
    fn test_backward_when_shorter() {
        let list = CharacterList::number();
        assert_eq!(indices(&list, '5', '3'), (6, 4));
    }

    #[test]
    fn test_unsupported_characters() {
        let list = CharacterList::number();
        assert!(list.character_indices('Z', '5').is_none());
        assert!(list.character_indices('5', '.').is_none());
        assert!(list.path('Z', '5').is_none());
    }

    #[test]
    fn test_duplicates_use_last_occurrence() {
        let list = CharacterList::new("abca").unwrap();
        assert_eq!(list.index_of('a'), Some(4));
        assert_eq!(list.supported_characters().len(), 3);
        assert_eq!(list.character_buffer().len(), 9);
    }

    #[test]
    fn test_supported_characters() {
        let list = CharacterList::new("xyz").unwrap();
        let expected: HashSet<char> = ['x', 'y', 'z'].into_iter().collect();
        assert_eq!(list.supported_characters(), expected);
        assert!(list.supports('y'));
        assert!(!list.supports(EMPTY_CHAR));
    }

    #[test]
    fn test_path() {
        let list = CharacterList::number();
        assert_eq!(list.path('2', '5').unwrap(), vec!['2', '3', '4', '5']);
        assert_eq!(list.path('9', '1').unwrap(), vec!['9', '0', '1']);
        assert_eq!(list.path('5', '3').unwrap(), vec!['5', '4', '3']);
        assert_eq!(list.path(EMPTY_CHAR, '1').unwrap(), vec![EMPTY_CHAR, '0', '1']);
    }

    #[test]
    fn test_display_round_trip() {
        let list = CharacterList::alphabet();
        assert_eq!(list.to_string(), ALPHABET_LIST);
        assert_eq!(list.as_str(), ALPHABET_LIST);
        assert!(!list.is_empty());
        assert!(CharacterList::new("").unwrap().is_empty());
    }
}
