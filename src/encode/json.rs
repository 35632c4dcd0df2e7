//! JSON encoder — human-readable dump of what was extracted.

use crate::encode::Encoder;
use crate::model::Document;
use anyhow::{Context, Result};

pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode(&self, doc: &Document) -> Result<Vec<u8>> {
        let mut out = serde_json::to_vec_pretty(doc).context("failed to encode document as JSON")?;
        out.push(b'\n');
        Ok(out)
    }

    fn name(&self) -> &str {
        "json"
    }
}
