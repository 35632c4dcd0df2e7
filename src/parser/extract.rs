//! Comment block extraction.
//!
//! Documentation lives in `/*# ... */` blocks. Ordinary `/* ... */`
//! comments are left alone, blocks do not nest, and a block that is never
//! closed before end of input is dropped.

use regex::Regex;
use std::sync::LazyLock;

static RE_DOC_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*#(.*?)\*/").unwrap());

/// Lazily yield the body of every documentation block in `input`.
pub fn comment_blocks(input: &str) -> impl Iterator<Item = &str> + '_ {
    RE_DOC_BLOCK
        .captures_iter(input)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_blocks_in_order() {
        let input = "int a; /*# first */ int b;\n/*# second\n line */";
        let blocks: Vec<_> = comment_blocks(input).collect();
        assert_eq!(blocks, vec![" first ", " second\n line "]);
    }

    #[test]
    fn ignores_plain_comments() {
        let input = "/* plain */ /** javadoc */ // line\n/*# doc */";
        let blocks: Vec<_> = comment_blocks(input).collect();
        assert_eq!(blocks, vec![" doc "]);
    }

    #[test]
    fn first_close_marker_ends_block() {
        let input = "/*# outer /*# inner */ tail */";
        let blocks: Vec<_> = comment_blocks(input).collect();
        assert_eq!(blocks, vec![" outer /*# inner "]);
    }

    #[test]
    fn unterminated_block_is_dropped() {
        let input = "/*# closed */ /*# never closed\n@name x";
        let blocks: Vec<_> = comment_blocks(input).collect();
        assert_eq!(blocks, vec![" closed "]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(comment_blocks("").count(), 0);
    }
}
