//! Corpus loading and schema validation

use crate::config::CorpusSchema;
use crate::error::SchemaError;
use crate::types::Message;
use std::path::Path;

/// Read and validate the input file
pub fn load_corpus(path: &Path, schema: &CorpusSchema) -> Result<Vec<Message>, SchemaError> {
    let raw = std::fs::read_to_string(path)?;
    parse_corpus(&raw, schema)
}

/// Extract messages from a raw JSON payload.
///
/// Every record must carry a string under `schema.text_field`; the first
/// record that doesn't fails the whole load.
pub fn parse_corpus(raw: &str, schema: &CorpusSchema) -> Result<Vec<Message>, SchemaError> {
    let payload: serde_json::Value = serde_json::from_str(raw)?;

    let records = payload
        .get(&schema.records_key)
        .ok_or_else(|| SchemaError::MissingKey(schema.records_key.clone()))?
        .as_array()
        .ok_or_else(|| SchemaError::NotAList(schema.records_key.clone()))?;

    if records.is_empty() {
        return Err(SchemaError::Empty(schema.records_key.clone()));
    }

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .get(&schema.text_field)
                .and_then(|v| v.as_str())
                .map(|text| Message::new(index, text))
                .ok_or_else(|| SchemaError::MissingField {
                    index,
                    field: schema.text_field.clone(),
                })
        })
        .collect()
}
