//! Bullet formatter: splits freeform description text into plain lines and
//! runs of `•`-prefixed bullet lines.

use serde::Serialize;

pub const BULLET_MARKER: char = '•';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Block {
    PlainLine(String),
    /// A maximal run of consecutive bullet lines, markers stripped.
    BulletGroup(Vec<String>),
}

pub fn format_description(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut open_group: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if line.trim().starts_with(BULLET_MARKER) {
            open_group.push(strip_marker(line).to_string());
            continue;
        }
        if !open_group.is_empty() {
            blocks.push(Block::BulletGroup(std::mem::take(&mut open_group)));
        }
        if !line.trim().is_empty() {
            blocks.push(Block::PlainLine(line.to_string()));
        }
    }

    if !open_group.is_empty() {
        blocks.push(Block::BulletGroup(open_group));
    }
    blocks
}

fn strip_marker(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == BULLET_MARKER || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(items: &[&str]) -> Block {
        Block::BulletGroup(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_groups_split_by_plain_line() {
        assert_eq!(
            format_description("• a\n• b\nplain\n• c"),
            vec![
                group(&["a", "b"]),
                Block::PlainLine("plain".to_string()),
                group(&["c"]),
            ]
        );
    }

    #[test]
    fn test_empty_text_has_no_blocks() {
        assert!(format_description("").is_empty());
        assert!(format_description("\n  \n").is_empty());
    }

    #[test]
    fn test_blank_lines_dropped_and_close_group() {
        assert_eq!(
            format_description("• a\n\n• b"),
            vec![group(&["a"]), group(&["b"])]
        );
    }

    #[test]
    fn test_indented_marker_and_repeated_markers_stripped() {
        assert_eq!(
            format_description("   •  first\n••second"),
            vec![group(&["first", "second"])]
        );
    }

    #[test]
    fn test_plain_lines_keep_original_text() {
        assert_eq!(
            format_description("  Led a team\nShipped v2"),
            vec![
                Block::PlainLine("  Led a team".to_string()),
                Block::PlainLine("Shipped v2".to_string()),
            ]
        );
    }

    #[test]
    fn test_dash_is_not_a_marker() {
        assert_eq!(
            format_description("- not a bullet"),
            vec![Block::PlainLine("- not a bullet".to_string())]
        );
    }

    #[test]
    fn test_marker_only_line_is_empty_bullet() {
        assert_eq!(format_description("•"), vec![group(&[""])]);
    }
}
