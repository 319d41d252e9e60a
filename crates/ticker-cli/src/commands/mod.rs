pub mod indices;
pub mod lists;
pub mod plan;

use anyhow::{bail, Result};

use ticker_core::EMPTY_CHAR;

/// Parse a single-character argument; the empty string means a blank slot
pub fn parse_char(arg: &str) -> Result<char> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(EMPTY_CHAR),
        (Some(c), None) => Ok(c),
        _ => bail!("Expected a single character, got '{}'", arg),
    }
}

pub fn display_char(c: char) -> String {
    if c == EMPTY_CHAR {
        "<empty>".to_string()
    } else {
        format!("'{}'", c)
    }
}

/// Render animation frames on one line, blank slots as `·`
pub fn display_frames(frames: &[char]) -> String {
    frames
        .iter()
        .map(|&c| if c == EMPTY_CHAR { '·' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_char() {
        assert_eq!(parse_char("").unwrap(), EMPTY_CHAR);
        assert_eq!(parse_char("9").unwrap(), '9');
        assert_eq!(parse_char("€").unwrap(), '€');
        assert!(parse_char("12").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(display_char(EMPTY_CHAR), "<empty>");
        assert_eq!(display_char('a'), "'a'");
        assert_eq!(display_frames(&[EMPTY_CHAR, '0', '1']), "·01");
    }
}
