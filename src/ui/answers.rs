//! Answer checking.
//!
//! # Responsibilities
//! - Judge each input against its authored expectation
//! - Combine per-input results with AND semantics
//!
//! # Design Decisions
//! - Tick-box expectations are the authored strings "1" (must be ticked)
//!   and "0" (must not be); anything else never passes
//! - Text answers compare by exact string equality
//! - An empty input set is vacuously correct

/// One answerable input on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerInput {
    /// Checkbox or radio; `expected` is the authored "1"/"0" value.
    Choice { expected: String, checked: bool },
    /// Free-text field with its expected-answer attribute.
    Text { expected: String, value: String },
}

impl AnswerInput {
    fn is_correct(&self) -> bool {
        match self {
            AnswerInput::Choice { expected, checked } => {
                (expected == "1" && *checked) || (expected == "0" && !*checked)
            }
            AnswerInput::Text { expected, value } => expected == value,
        }
    }
}

/// Outcome of checking every input on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerVerdict {
    Correct,
    Wrong,
}

impl AnswerVerdict {
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerVerdict::Correct)
    }
}

/// AND across all inputs.
pub fn check_answers(inputs: &[AnswerInput]) -> AnswerVerdict {
    if inputs.iter().all(AnswerInput::is_correct) {
        AnswerVerdict::Correct
    } else {
        AnswerVerdict::Wrong
    }
}
