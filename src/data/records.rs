//! Creature records from pokemon.txt.
//!
//! A record looks like
//!
//! ```text
//! [1]
//! Name=Bulbasaur
//! InternalName=BULBASAUR
//! Type1=GRASS
//! ...
//! ```
//!
//! The `InternalName=` line is the unique marker. The record begins at the
//! section header two lines above it and ends three lines above the next
//! marker.

use crate::core::utils::{display_type, split_list};
use crate::data::read_lines;
use crate::error::{Result, WikiError};
use std::collections::HashMap;
use std::path::Path;

pub const INTERNAL_NAME_PREFIX: &str = "InternalName=";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    name: String,
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(key.to_string(), value.to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| WikiError::MissingField {
            record: self.name.clone(),
            field: key.to_string(),
        })
    }

    pub fn list(&self, key: &str) -> Result<Vec<&str>> {
        self.require(key).map(split_list)
    }

    pub fn invalid(&self, key: &str) -> WikiError {
        WikiError::InvalidField {
            record: self.name.clone(),
            field: key.to_string(),
            value: self.get(key).unwrap_or_default().to_string(),
        }
    }

    /// Type1 and, when present, Type2 as display names.
    pub fn types(&self) -> Result<Vec<String>> {
        let mut types = vec![display_type(self.require("Type1")?)];
        if let Some(second) = self.get("Type2") {
            let second = display_type(second);
            if !types.contains(&second) {
                types.push(second);
            }
        }
        Ok(types)
    }

    pub fn is_dual_type(&self) -> bool {
        self.types().map(|types| types.len() > 1).unwrap_or(false)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordFile {
    lines: Vec<String>,
}

impl RecordFile {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_lines(read_lines(path)?))
    }

    pub fn extract(&self, internal_name: &str) -> Result<Record> {
        let marker = format!("{INTERNAL_NAME_PREFIX}{internal_name}");
        let marker_idx = self
            .lines
            .iter()
            .position(|line| *line == marker)
            .ok_or_else(|| WikiError::NotFound(internal_name.to_string()))?;

        let start = marker_idx.saturating_sub(2);
        let end = self.lines[marker_idx + 1..]
            .iter()
            .position(|line| line.starts_with(INTERNAL_NAME_PREFIX))
            .map(|offset| (marker_idx + 1 + offset).saturating_sub(2))
            .unwrap_or(self.lines.len());
        // `end` is exclusive: the next marker's own header and Name lines stay out.
        let end = end.max(marker_idx + 1);

        let mut record = Record::new(internal_name);
        for line in &self.lines[start..end] {
            if let Some((key, value)) = line.split_once('=') {
                record.fields.insert(key.trim().to_string(), value.to_string());
            } else if let Some(number) = section_number(line) {
                record
                    .fields
                    .entry("InternalNumber".to_string())
                    .or_insert_with(|| number.to_string());
            }
        }
        tracing::debug!(
            name = internal_name,
            fields = record.fields.len(),
            "extracted record lines {}..{}",
            start,
            end
        );
        Ok(record)
    }

    /// Internal names of every record, in file order.
    pub fn internal_names(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| line.strip_prefix(INTERNAL_NAME_PREFIX))
            .collect()
    }
}

fn section_number(line: &str) -> Option<&str> {
    line.trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|inner| !inner.is_empty())
}
