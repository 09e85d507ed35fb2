use super::{StoreError, DELIMITER};
use crate::libs::task::{PlainTask, Task};

const TRUE_TEXT: &str = "True";
const FALSE_TEXT: &str = "False";

/// A value that can be stored as one line of a task file.
pub trait Record: Sized {
    /// Decodes one line with its terminator already removed. `line_number`
    /// is 1-based and only used for error reporting.
    fn decode(line: &str, line_number: usize) -> Result<Self, StoreError>;

    /// Encodes the record without a line terminator.
    fn encode(&self) -> String;

    /// Text matched by search.
    fn description(&self) -> &str;
}

impl Record for Task {
    fn decode(line: &str, line_number: usize) -> Result<Self, StoreError> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        let &[description, priority, completed] = fields.as_slice() else {
            return Err(StoreError::FieldCount {
                line: line_number,
                expected: 3,
                found: fields.len(),
            });
        };

        let priority = priority.trim().parse::<i32>().map_err(|_| StoreError::Priority {
            line: line_number,
            value: priority.to_string(),
        })?;
        // Only the exact truthy text counts; anything else reads as open.
        let completed = completed.trim_end() == TRUE_TEXT;

        Ok(Task {
            description: description.to_string(),
            priority,
            completed,
        })
    }

    fn encode(&self) -> String {
        let completed = if self.completed { TRUE_TEXT } else { FALSE_TEXT };
        format!("{}{d}{}{d}{}", self.description, self.priority, completed, d = DELIMITER)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Record for PlainTask {
    fn decode(line: &str, _line_number: usize) -> Result<Self, StoreError> {
        Ok(PlainTask::new(line))
    }

    fn encode(&self) -> String {
        self.description.clone()
    }

    fn description(&self) -> &str {
        &self.description
    }
}
