//! Question and question bank types

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Most answers a question may have; answers are lettered `A` to `Z`.
pub const MAX_ANSWERS: usize = 26;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// The question text.
    pub question: String,
    /// Optional context shown above the question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional illustration URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Answer choices, in display order.
    pub answers: Vec<String>,
    /// Index into `answers` of the correct choice.
    pub correct_index: usize,
}

impl QuizQuestion {
    /// Creates a question with no description or image.
    #[must_use]
    pub fn new<I, S>(question: impl Into<String>, answers: I, correct_index: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            description: None,
            image: None,
            answers: answers.into_iter().map(Into::into).collect(),
            correct_index,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the text of the correct answer.
    #[must_use]
    pub fn correct_answer(&self) -> &str {
        self.answers
            .get(self.correct_index)
            .map_or("", String::as_str)
    }

    /// Checks that the correct index points at an answer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuestion` if there are no answers, more than
    /// [`MAX_ANSWERS`], or the index is out of range.
    pub fn validate(&self) -> DomainResult<()> {
        if self.answers.len() > MAX_ANSWERS {
            return Err(DomainError::InvalidQuestion(format!(
                "'{}' has {} answers, at most {MAX_ANSWERS} are allowed",
                self.question,
                self.answers.len()
            )));
        }
        if self.correct_index >= self.answers.len() {
            return Err(DomainError::InvalidQuestion(format!(
                "'{}' has {} answers but correct index {}",
                self.question,
                self.answers.len(),
                self.correct_index
            )));
        }
        Ok(())
    }
}

/// An ordered, non-empty set of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    /// Builds a bank from questions.
    ///
    /// # Errors
    ///
    /// Returns `EmptyQuestionBank` if `questions` is empty, or
    /// `InvalidQuestion` if any question fails validation.
    pub fn new(questions: Vec<QuizQuestion>) -> DomainResult<Self> {
        if questions.is_empty() {
            return Err(DomainError::EmptyQuestionBank);
        }
        questions.iter().try_for_each(QuizQuestion::validate)?;
        Ok(Self { questions })
    }

    /// The questions in order.
    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; a bank is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The built-in science question set.
    #[must_use]
    pub fn builtin() -> Self {
        let questions = vec![
            QuizQuestion::new(
                "What is the chemical symbol for gold?",
                ["Ag", "Au", "Gd", "Go"],
                1,
            ),
            QuizQuestion::new(
                "Which planet is known as the Red Planet?",
                ["Venus", "Jupiter", "Mars", "Mercury"],
                2,
            ),
            QuizQuestion::new(
                "What is the powerhouse of the cell?",
                ["Nucleus", "Ribosome", "Golgi apparatus", "Mitochondria"],
                3,
            )
            .with_description("Cell biology"),
            QuizQuestion::new(
                "What is the SI unit of force?",
                ["Newton", "Joule", "Watt", "Pascal"],
                0,
            ),
            QuizQuestion::new(
                "Which gas do plants absorb from the atmosphere for photosynthesis?",
                ["Oxygen", "Nitrogen", "Carbon dioxide", "Hydrogen"],
                2,
            ),
        ];
        Self { questions }
    }
}
