//! Character sequences for ticker animations
//!
//! A ticker column animates from one character to another by scrolling through
//! the characters that sit between them in a [`CharacterList`]. This module
//! owns the list model and the index pair it hands out per transition.
//!
//! # Layout
//!
//! - `list` - The character list and its wrap-aware index resolution
//! - `indices` - Start/end index pair returned per transition
//! - `presets` - Built-in character lists (digits, latin letters)
//!
//! # Usage
//!
//! ```
//! use ticker_core::sequence::CharacterList;
//!
//! let list = CharacterList::number();
//! let indices = list.character_indices('9', '0').unwrap();
//! assert_eq!((indices.start_index, indices.end_index), (10, 11));
//! ```

pub mod indices;
pub mod list;
pub mod presets;

pub use indices::{AnimationCharacterIndices, ScrollDirection};
pub use list::CharacterList;
pub use presets::{Preset, ALPHABET_LIST, NUMBER_LIST};

/// Marker for a blank column slot.
///
/// Every [`CharacterList`] supports it implicitly at buffer index 0; it must
/// never be part of the configured characters.
pub const EMPTY_CHAR: char = '\0';
