//! Dataset loader for the question bank.
//!
//! The loader materializes a [`QuestionStore`] from a JSON file. Two layouts
//! are accepted:
//!
//! - a JSON array of record objects, or
//! - JSONL: one record object per line.
//!
//! Each record object carries `category`, `questions`, and `marks` fields.
//! Missing or `null` fields coerce to the empty string, and `marks` values
//! stored as numbers are normalized to their decimal string form: integers
//! render without a fractional part (`5`), floats with one (`5.0`). That
//! normalization is what the marks filter's string-equality contract is
//! built on.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{QbankError, Result};
use crate::store::record::QuestionRecord;
use crate::store::store::QuestionStore;

/// Raw record as it appears in the dataset file, before coercion.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    category: Value,
    #[serde(default)]
    questions: Value,
    #[serde(default)]
    marks: Value,
}

impl RawRecord {
    fn into_record(self) -> QuestionRecord {
        QuestionRecord {
            category: coerce_text(&self.category),
            question_text: coerce_text(&self.questions),
            marks: coerce_text(&self.marks),
        }
    }
}

/// Coerce a raw JSON value to its string form.
///
/// `null`/absent becomes the empty string; numbers keep their decimal
/// rendering (`5` vs `5.0`); everything else uses its JSON display.
fn coerce_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Load a question bank dataset from a JSON or JSONL file.
///
/// Malformed JSONL lines are skipped with a warning rather than aborting
/// the load; a file that yields no records at all is an error.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<QuestionStore> {
    let path = path.as_ref();
    let mut file = File::open(path)?;

    // Sniff the first non-whitespace byte to pick the layout.
    let mut probe = [0u8; 256];
    let read = file.read(&mut probe)?;
    let is_array = probe[..read]
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'[');
    file.seek(SeekFrom::Start(0))?;

    let records = if is_array {
        load_array(file)?
    } else {
        load_jsonl(file, path)?
    };

    if records.is_empty() {
        return Err(QbankError::dataset(format!(
            "no records loaded from {}",
            path.display()
        )));
    }

    debug!(records = records.len(), path = %path.display(), "dataset loaded");
    Ok(QuestionStore::new(records))
}

fn load_array(file: File) -> Result<Vec<QuestionRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_reader(BufReader::new(file))?;
    Ok(raw.into_iter().map(RawRecord::into_record).collect())
}

fn load_jsonl(file: File, path: &Path) -> Result<Vec<QuestionRecord>> {
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<RawRecord>(&line) {
            Ok(raw) => records.push(raw.into_record()),
            Err(e) => {
                warn!(
                    line = line_num + 1,
                    path = %path.display(),
                    error = %e,
                    "skipping malformed dataset line"
                );
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_dataset(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_jsonl() {
        let file = write_dataset(
            r#"{"category": "AI", "questions": "What is a perceptron?", "marks": 5}
{"category": "ML", "questions": "Define overfitting.", "marks": "2"}
"#,
        );

        let store = load_dataset(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].marks, "5");
        assert_eq!(store.records()[1].marks, "2");
    }

    #[test]
    fn test_load_json_array() {
        let file = write_dataset(
            r#"[
  {"category": "AI", "questions": "Explain A* search.", "marks": 10},
  {"category": "AI", "questions": "What is a heuristic?", "marks": 5}
]"#,
        );

        let store = load_dataset(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.categories(), &["AI".to_string()]);
    }

    #[test]
    fn test_blank_coercion() {
        let file = write_dataset(
            r#"{"questions": "Orphan question", "marks": null}
{"category": null, "questions": "Another orphan", "marks": 3}
"#,
        );

        let store = load_dataset(file.path()).unwrap();
        assert_eq!(store.records()[0].category, "");
        assert_eq!(store.records()[0].marks, "");
        assert_eq!(store.records()[1].category, "");
    }

    #[test]
    fn test_marks_number_normalization() {
        // Integer 5 and float 5.0 keep distinct string forms.
        let file = write_dataset(
            r#"{"category": "AI", "questions": "q1", "marks": 5}
{"category": "AI", "questions": "q2", "marks": 5.0}
"#,
        );

        let store = load_dataset(file.path()).unwrap();
        assert_eq!(store.records()[0].marks, "5");
        assert_eq!(store.records()[1].marks, "5.0");
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let file = write_dataset(
            r#"{"category": "AI", "questions": "good", "marks": 5}
this is not json
{"category": "ML", "questions": "also good", "marks": 2}
"#,
        );

        let store = load_dataset(file.path()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_dataset_is_error() {
        let file = write_dataset("\n\n");
        assert!(load_dataset(file.path()).is_err());
    }
}
