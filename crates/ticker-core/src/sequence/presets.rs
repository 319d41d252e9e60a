//! Built-in character lists
//!
//! Named so configuration files can refer to them without spelling out
//! their characters.

use serde::{Deserialize, Serialize};

use super::CharacterList;

pub const NUMBER_LIST: &str = "0123456789";

pub const ALPHABET_LIST: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Number,
    Alphabet,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Number, Preset::Alphabet];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Number => "number",
            Preset::Alphabet => "alphabet",
        }
    }

    pub fn characters(&self) -> &'static str {
        match self {
            Preset::Number => NUMBER_LIST,
            Preset::Alphabet => ALPHABET_LIST,
        }
    }

    /// Look up a preset by its configuration name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
    }

    pub fn character_list(&self) -> CharacterList {
        match self {
            Preset::Number => CharacterList::number(),
            Preset::Alphabet => CharacterList::alphabet(),
        }
    }
}
