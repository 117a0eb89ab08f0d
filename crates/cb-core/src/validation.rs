use crate::error::TaskError;

/// Minimum length of a task's text, in characters.
pub const MIN_TASK_TEXT_LEN: usize = 11;

pub fn validate_task_text(text: &str) -> Result<(), TaskError> {
    if text.chars().count() < MIN_TASK_TEXT_LEN {
        return Err(TaskError::TooShortText);
    }
    Ok(())
}
