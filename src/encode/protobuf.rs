//! Protobuf encoder — the binary document format consumed by the renderers.
//!
//! Message layout (proto2):
//!
//! ```text
//! enum Type { FUNCTION = 0; VARIABLE = 1; }
//! message Parameter { required string name = 1; required string doc = 2; }
//! message Element {
//!     required Type   type        = 1;
//!     required string name        = 2;
//!     required string description = 3;
//!     required string return      = 4;
//!     repeated Parameter parameters = 5;
//! }
//! message Document { repeated Element elements = 1; }
//! ```
//!
//! Required fields are always written, even when empty.

use crate::encode::Encoder;
use crate::model::{self, ElementKind};
use anyhow::Result;
use prost::Message;

/// Wire-level messages. Kept separate from the model so the schema can
/// evolve without touching the parser.
pub mod wire {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Function = 0,
        Variable = 1,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Parameter {
        #[prost(string, required, tag = "1")]
        pub name: String,
        #[prost(string, required, tag = "2")]
        pub doc: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Element {
        #[prost(enumeration = "Type", required, tag = "1")]
        pub kind: i32,
        #[prost(string, required, tag = "2")]
        pub name: String,
        #[prost(string, required, tag = "3")]
        pub description: String,
        #[prost(string, required, tag = "4")]
        pub return_value: String,
        #[prost(message, repeated, tag = "5")]
        pub parameters: Vec<Parameter>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Document {
        #[prost(message, repeated, tag = "1")]
        pub elements: Vec<Element>,
    }
}

impl From<ElementKind> for wire::Type {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Function => wire::Type::Function,
            ElementKind::Variable => wire::Type::Variable,
        }
    }
}

impl From<&model::Parameter> for wire::Parameter {
    fn from(p: &model::Parameter) -> Self {
        wire::Parameter {
            name: p.name.clone(),
            doc: p.doc.clone(),
        }
    }
}

impl From<&model::Element> for wire::Element {
    fn from(e: &model::Element) -> Self {
        wire::Element {
            kind: wire::Type::from(e.kind) as i32,
            name: e.name.clone(),
            description: e.description.clone(),
            return_value: e.return_value.clone(),
            parameters: e.parameters.iter().map(wire::Parameter::from).collect(),
        }
    }
}

impl From<&model::Document> for wire::Document {
    fn from(d: &model::Document) -> Self {
        wire::Document {
            elements: d.elements.iter().map(wire::Element::from).collect(),
        }
    }
}

pub struct ProtobufEncoder;

impl Encoder for ProtobufEncoder {
    fn encode(&self, doc: &model::Document) -> Result<Vec<u8>> {
        Ok(wire::Document::from(doc).encode_to_vec())
    }

    fn name(&self) -> &str {
        "protobuf"
    }
}
