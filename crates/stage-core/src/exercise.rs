//! Question/answer interaction collaborator.

/// A generated question with its expected numeric answer.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub answer: f64,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: f64) -> Self {
        Self {
            prompt: prompt.into(),
            answer,
        }
    }
}

/// Host side of a multi-step exercise.
///
/// The exercise action asks the host for questions one at a time, hands the
/// prompt to the input surface via [`focus_input`](ExerciseHost::focus_input),
/// and then polls [`poll_answer`](ExerciseHost::poll_answer) once per tick
/// until the learner commits a number. Grading stays in the action; the host
/// only presents and collects.
pub trait ExerciseHost: Send + Sync {
    /// Produce the next question, or `None` if the host has run dry.
    fn next_question(&mut self) -> Option<Question>;

    /// Point the input surface at the current question.
    fn focus_input(&mut self, prompt: &str);

    /// The learner's committed answer, if one arrived since the last poll.
    fn poll_answer(&mut self) -> Option<f64>;

    /// Outcome of one trial, for the host to display or record.
    fn report(&mut self, question: &Question, given: f64, correct: bool);
}

/// Host with no questions. Default for stages that never run exercises;
/// an exercise action stepped against it fails on its first question.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoExercises;

impl ExerciseHost for NoExercises {
    fn next_question(&mut self) -> Option<Question> {
        None
    }

    fn focus_input(&mut self, _prompt: &str) {}

    fn poll_answer(&mut self) -> Option<f64> {
        None
    }

    fn report(&mut self, _question: &Question, _given: f64, _correct: bool) {}
}
