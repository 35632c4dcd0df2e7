//! `@tag value` parser for a single documentation block.
//!
//! Recognized tags:
//! - `@name <name>` (required; last one wins)
//! - `@variable` marks the element as a variable, any value is ignored
//! - `@param <name> <doc>` one per parameter, kept in source order
//! - `@return <text>` (last one wins)
//!
//! Any other tag is accepted and ignored.

use super::ParseError;
use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

// A tag name runs up to the first space or line break; the rest of the
// line is its value.
static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)@([^ \n]+) *(.*?)$").unwrap());

/// One `@tag value` occurrence, both sides trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Remove comment decoration: each line is trimmed and everything up to
/// and including its first `*` is dropped.
pub fn strip_decoration(block: &str) -> String {
    block
        .split('\n')
        .map(|line| {
            let line = line.trim();
            match line.find('*') {
                Some(pos) => line[pos + 1..].trim(),
                None => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collect every tag in `text`, in source order.
pub fn scan_tags(text: &str) -> Vec<Tag<'_>> {
    RE_TAG
        .captures_iter(text)
        .map(|caps| Tag {
            name: caps.get(1).map_or("", |m| m.as_str().trim()),
            value: caps.get(2).map_or("", |m| m.as_str().trim()),
        })
        .collect()
}

/// Free text before the first `@` anywhere in `text`, trimmed, with each
/// line break turned into a single space.
///
/// The boundary is the first raw `@` character, not the first well-formed
/// tag, so a stray `@` also ends the description.
pub fn description(text: &str) -> String {
    let end = text.find('@').unwrap_or(text.len());
    text[..end].trim().replace('\n', " ")
}

/// Parse one block body (without the `/*#` and `*/` markers) into an Element.
pub fn parse_comment(block: &str) -> Result<Element, ParseError> {
    let text = strip_decoration(block);
    let tags = scan_tags(&text);

    let kind = if tags.iter().any(|t| t.name == "variable") {
        ElementKind::Variable
    } else {
        ElementKind::Function
    };

    let mut element = Element {
        kind,
        description: description(&text),
        ..Default::default()
    };

    for tag in &tags {
        match tag.name {
            "name" => element.name = tag.value.to_string(),
            "return" => element.return_value = tag.value.to_string(),
            "param" => {
                let (name, doc) = tag.value.split_once(' ').unwrap_or((tag.value, ""));
                element.parameters.push(Parameter {
                    name: name.to_string(),
                    doc: doc.to_string(),
                });
            }
            _ => {}
        }
    }

    // Covers both a missing @name and one with nothing after it.
    if element.name.is_empty() {
        return Err(ParseError::MissingNameTag { block: text });
    }

    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, doc: &str) -> Parameter {
        Parameter {
            name: name.to_string(),
            doc: doc.to_string(),
        }
    }

    #[test]
    fn parse_simple_function() {
        let element = parse_comment(" @name foo\n@param x the x value\n@return something ").unwrap();
        assert_eq!(element.name, "foo");
        assert_eq!(element.kind, ElementKind::Function);
        assert_eq!(element.parameters, vec![param("x", "the x value")]);
        assert_eq!(element.return_value, "something");
        assert_eq!(element.description, "");
    }

    #[test]
    fn parse_add_example() {
        let element = parse_comment(
            " @name add\n@param a first number\n@param b second number\n@return the sum ",
        )
        .unwrap();
        assert_eq!(element.kind, ElementKind::Function);
        assert_eq!(element.name, "add");
        assert_eq!(element.description, "");
        assert_eq!(
            element.parameters,
            vec![param("a", "first number"), param("b", "second number")]
        );
        assert_eq!(element.return_value, "the sum");
    }

    #[test]
    fn parse_variable_without_value() {
        let element = parse_comment("\n * Frame counter\n * @variable\n * @name frames\n ").unwrap();
        assert_eq!(element.kind, ElementKind::Variable);
        assert_eq!(element.name, "frames");
        assert_eq!(element.description, "Frame counter");
    }

    #[test]
    fn parse_variable_with_value() {
        let element = parse_comment(" @name speed @variable\n@variable number ").unwrap();
        assert_eq!(element.kind, ElementKind::Variable);
        // "@variable" inside the @name line belongs to the name's value
        assert_eq!(element.name, "speed @variable");
    }

    #[test]
    fn missing_name_is_an_error() {
        let err = parse_comment(" * Does things\n * @param x ").unwrap_err();
        let ParseError::MissingNameTag { block } = err;
        assert_eq!(block, "Does things\n@param x");
    }

    #[test]
    fn empty_name_is_an_error() {
        assert!(parse_comment(" @name\n@return x ").is_err());
    }

    #[test]
    fn params_keep_source_order() {
        let element =
            parse_comment(" @name f\n@param c third\n@param a first\n@param b second ").unwrap();
        let names: Vec<_> = element.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn param_without_doc() {
        let element = parse_comment(" @name f\n@param x\n@param y ").unwrap();
        assert_eq!(element.parameters, vec![param("x", ""), param("y", "")]);
    }

    #[test]
    fn param_splits_on_first_space_only() {
        let element = parse_comment(" @name f\n@param x  padded doc ").unwrap();
        assert_eq!(element.parameters, vec![param("x", " padded doc")]);
    }

    #[test]
    fn last_return_wins() {
        let element = parse_comment(" @name f\n@return one\n@return two ").unwrap();
        assert_eq!(element.return_value, "two");
    }

    #[test]
    fn unknown_tags_are_ignored() {
        let element = parse_comment(" @name f\n@deprecated use g\n@since 1.2 ").unwrap();
        assert_eq!(element.name, "f");
        assert!(element.parameters.is_empty());
        assert_eq!(element.return_value, "");
    }

    #[test]
    fn description_joins_lines() {
        let element =
            parse_comment("\n * Adds two\n * numbers together.\n *\n * @name add\n ").unwrap();
        assert_eq!(element.description, "Adds two numbers together.");
    }

    #[test]
    fn description_replaces_each_line_break() {
        assert_eq!(description("one\n\ntwo\n@name x"), "one  two");
    }

    #[test]
    fn description_stops_at_stray_at_sign() {
        let element = parse_comment(" Mail me at dev@example.com today\n@name f ").unwrap();
        assert_eq!(element.description, "Mail me at dev");
    }

    #[test]
    fn description_without_tags_is_whole_text() {
        assert_eq!(description("  just text\nhere  "), "just text here");
    }

    #[test]
    fn strip_decoration_removes_leading_stars() {
        let text = strip_decoration("\n   * line one\n  ** line two\nplain\n */");
        assert_eq!(text, "\nline one\n* line two\nplain\n/");
    }

    #[test]
    fn decoration_does_not_change_tags() {
        let bare = " Sum\n@name add\n@param a first\n@return total ";
        let starred = "\n * Sum\n * @name add\n * @param a first\n * @return total\n ";
        let bare_text = strip_decoration(bare);
        let starred_text = strip_decoration(starred);
        assert_eq!(scan_tags(&bare_text), scan_tags(&starred_text));
    }

    #[test]
    fn scan_tags_in_order() {
        let tags = scan_tags("@name f\n@param a x\n@variable\n@return  r ");
        assert_eq!(
            tags,
            vec![
                Tag { name: "name", value: "f" },
                Tag { name: "param", value: "a x" },
                Tag { name: "variable", value: "" },
                Tag { name: "return", value: "r" },
            ]
        );
    }

    #[test]
    fn lone_at_sign_is_not_a_tag() {
        assert!(scan_tags("@ name f\nfoo @\n").is_empty());
    }
}
