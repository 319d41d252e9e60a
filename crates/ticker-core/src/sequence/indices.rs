use serde::{Deserialize, Serialize};

/// Which way a column scrolls through its character buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    /// Towards higher buffer indices (possibly into the second copy of the list)
    Forward,
    /// Towards lower buffer indices
    Backward,
    /// Start and end coincide; nothing to animate
    None,
}

/// The slice of a character buffer an animation walks through.
///
/// `end_index` may be smaller than `start_index`, in which case the column
/// scrolls backward. Both indices point into
/// [`CharacterList::character_buffer`](super::CharacterList::character_buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationCharacterIndices {
    pub start_index: usize,
    pub end_index: usize,
}

impl AnimationCharacterIndices {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    /// True when no scrolling is needed
    #[inline]
    pub fn is_static(&self) -> bool {
        self.start_index == self.end_index
    }

    #[inline]
    pub fn direction(&self) -> ScrollDirection {
        use std::cmp::Ordering;

        match self.end_index.cmp(&self.start_index) {
            Ordering::Greater => ScrollDirection::Forward,
            Ordering::Less => ScrollDirection::Backward,
            Ordering::Equal => ScrollDirection::None,
        }
    }

    /// Number of single-character steps between start and end
    #[inline]
    pub fn distance(&self) -> usize {
        self.start_index.abs_diff(self.end_index)
    }

    /// Buffer indices visited from start to end, both inclusive
    pub fn steps(&self) -> Box<dyn Iterator<Item = usize>> {
        if self.end_index >= self.start_index {
            Box::new(self.start_index..=self.end_index)
        } else {
            Box::new((self.end_index..=self.start_index).rev())
        }
    }
}
