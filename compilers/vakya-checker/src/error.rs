use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Shown to the user as "please enter a sentence".
    #[error("please enter a sentence")]
    EmptySentence,
}

/// Rejects input that is empty after trimming; returns the trimmed sentence.
pub fn validate_sentence(input: &str) -> Result<&str, CheckError> {
    let sentence = input.trim();
    if sentence.is_empty() {
        return Err(CheckError::EmptySentence);
    }
    Ok(sentence)
}
