/*! Optional expected-output generation.

Sampled records ship with an empty `expected` field. When a
normalization engine is available it can pre-fill those fields, but its
output is provisional and still needs human review, so the record note
is rewritten accordingly.

The engine is an external collaborator behind the [Normalize] trait; its
absence or failure degrades gracefully (fields stay empty).
!*/
use std::io::Write;
use std::process::{Command, Stdio};

use log::warn;

use crate::corpus::{SampleRecord, AUTO_NORMALIZED_NOTE};
use crate::error::Error;

pub trait Normalize {
    fn normalize(&self, text: &str) -> Result<String, Error>;
}

/// Runs an external command as the normalization engine: the input text
/// is written to its stdin, the normalized text read from its stdout.
pub struct CommandNormalizer {
    program: String,
    args: Vec<String>,
}

impl CommandNormalizer {
    /// `command` is split on whitespace: first token is the program,
    /// the rest are arguments.
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        Self {
            program: parts.next().unwrap_or_default(),
            args: parts.collect(),
        }
    }
}

impl Normalize for CommandNormalizer {
    fn normalize(&self, text: &str) -> Result<String, Error> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // stdin handle must be dropped before waiting, or the child
        // blocks on read
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::Custom(format!(
                "normalizer {} exited with {}",
                self.program, output.status
            )));
        }

        let normalized = String::from_utf8_lossy(&output.stdout);
        Ok(normalized.trim_end_matches('\n').to_string())
    }
}

/// Fills every empty `expected` field in place and marks the record as
/// auto-normalized. A failing record keeps its empty field and its
/// original note; the failure is logged, never propagated.
pub fn fill_expected(records: &mut [SampleRecord], normalizer: &dyn Normalize) {
    for record in records.iter_mut().filter(|r| r.expected.is_empty()) {
        match normalizer.normalize(&record.input) {
            Ok(expected) => {
                record.expected = expected;
                record.notes = AUTO_NORMALIZED_NOTE.to_string();
            }
            Err(e) => warn!("normalizer failed on {}: {:?}", record.id, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::AUTO_SAMPLED_NOTE;

    struct Uppercase;
    impl Normalize for Uppercase {
        fn normalize(&self, text: &str) -> Result<String, Error> {
            Ok(text.to_uppercase())
        }
    }

    struct Broken;
    impl Normalize for Broken {
        fn normalize(&self, _text: &str) -> Result<String, Error> {
            Err(Error::Custom("engine unavailable".to_string()))
        }
    }

    fn records() -> Vec<SampleRecord> {
        vec![
            SampleRecord {
                id: "news_001".to_string(),
                input: "abc".to_string(),
                expected: String::new(),
                tags: vec![],
                notes: AUTO_SAMPLED_NOTE.to_string(),
            },
            SampleRecord {
                id: "news_002".to_string(),
                input: "def".to_string(),
                expected: "既有".to_string(),
                tags: vec![],
                notes: "人工填寫".to_string(),
            },
        ]
    }

    #[test]
    fn fills_only_empty_fields() {
        let mut records = records();
        fill_expected(&mut records, &Uppercase);

        assert_eq!(records[0].expected, "ABC");
        assert_eq!(records[0].notes, AUTO_NORMALIZED_NOTE);
        // already-filled record untouched
        assert_eq!(records[1].expected, "既有");
        assert_eq!(records[1].notes, "人工填寫");
    }

    #[test]
    fn failure_leaves_records_untouched() {
        let mut records = records();
        fill_expected(&mut records, &Broken);

        assert_eq!(records[0].expected, "");
        assert_eq!(records[0].notes, AUTO_SAMPLED_NOTE);
    }

    #[test]
    #[cfg(unix)]
    fn command_normalizer_round_trip() {
        let normalizer = CommandNormalizer::new("cat");
        assert_eq!(normalizer.normalize("简体文本").unwrap(), "简体文本");
    }

    #[test]
    #[cfg(unix)]
    fn command_normalizer_reports_failure() {
        let normalizer = CommandNormalizer::new("false");
        assert!(normalizer.normalize("簡體").is_err());
    }
}
