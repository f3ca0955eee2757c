use crate::app::error::CollectError;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

pub struct OutputGenerator;

impl OutputGenerator {
    /// Renders the mapping as a JSON object with 4-space indentation.
    /// Non-ASCII characters are written as-is, not as `\u` escapes.
    pub fn to_json(files: &IndexMap<String, String>) -> Result<String, CollectError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        files.serialize(&mut ser)?;

        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn write_json(path: &Path, files: &IndexMap<String, String>) -> Result<(), CollectError> {
        let json = Self::to_json(files)?;
        fs::write(path, json).map_err(|source| CollectError::Save {
            path: path.to_path_buf(),
            source,
        })
    }
}
