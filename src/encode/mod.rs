//! Encoder module — trait-based output format dispatch.

pub mod json;
pub mod protobuf;

use crate::model::Document;
use anyhow::{anyhow, Result};

/// Trait for serializing a Document into a specific output format.
pub trait Encoder {
    fn encode(&self, doc: &Document) -> Result<Vec<u8>>;
    fn name(&self) -> &str;
}

/// Create an encoder for the given format name.
pub fn create_encoder(format: &str) -> Result<Box<dyn Encoder>> {
    match format {
        "protobuf" | "pb" => Ok(Box::new(protobuf::ProtobufEncoder)),
        "json" => Ok(Box::new(json::JsonEncoder)),
        _ => Err(anyhow!(
            "unknown format: {}. Use protobuf or json",
            format
        )),
    }
}
