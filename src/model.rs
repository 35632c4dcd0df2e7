//! Data model for extracted documentation — format-agnostic.

use serde::Serialize;

/// Everything extracted from one run, in order of appearance in the input.
#[derive(Debug, Default, Serialize)]
pub struct Document {
    pub elements: Vec<Element>,
}

/// Whether a documented unit is a function or a variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Function,
    Variable,
}

/// A single documented function or variable.
#[derive(Debug, Default, Serialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// @name
    pub name: String,
    /// Free text before the first tag
    pub description: String,
    /// @return, empty when absent
    #[serde(rename = "return")]
    pub return_value: String,
    /// @param entries in source order
    pub parameters: Vec<Parameter>,
}

/// Parsed @param entry.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub doc: String,
}
