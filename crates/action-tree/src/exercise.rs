//! Multi-trial question/answer leaf action.

use stage_core::{Question, Stage};

use crate::{Action, Step, StepError};

/// Phase of the current trial.
#[derive(Debug, Clone)]
enum Phase {
    /// Ready to fetch and present the next question.
    Ask,
    /// Question presented; waiting for the learner's answer.
    Await(Question),
}

/// Runs `trials` question/answer rounds against the stage's exercise host.
///
/// Per trial: fetch a question from the host, focus the input surface on
/// its prompt, then yield once per tick until the host reports a committed
/// numeric answer. The answer is graded here and the outcome reported back
/// to the host for display. After the last trial the action completes with
/// a `"exercise end correct/trials"` summary one extra resumption later,
/// the same cadence as every other leaf.
#[derive(Debug, Clone)]
pub struct ExerciseAction {
    trials: u64,
    phase: Phase,
    answered: u64,
    correct: u64,
    finished: bool,
}

impl ExerciseAction {
    pub const KIND: &'static str = "exercise";

    pub fn new(trials: u64) -> Self {
        Self {
            trials,
            phase: Phase::Ask,
            answered: 0,
            correct: 0,
            finished: false,
        }
    }
}

impl Action for ExerciseAction {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn finished(&self) -> bool {
        self.finished
    }

    fn reset(&mut self) {
        self.phase = Phase::Ask;
        self.answered = 0;
        self.correct = 0;
        self.finished = false;
    }

    fn step(&mut self, stage: &mut Stage) -> Result<Step, StepError> {
        assert!(!self.finished, "exercise resumed after completion");

        match std::mem::replace(&mut self.phase, Phase::Ask) {
            Phase::Ask => {
                if self.answered == self.trials {
                    self.finished = true;
                    return Ok(Step::Done(Some(format!(
                        "exercise end {}/{}",
                        self.correct, self.trials
                    ))));
                }

                let question = stage.exercises().next_question().ok_or(
                    StepError::QuestionsExhausted {
                        asked: self.answered,
                        wanted: self.trials,
                    },
                )?;
                stage.exercises().focus_input(&question.prompt);

                let note = format!(
                    "question {}/{}: {}",
                    self.answered + 1,
                    self.trials,
                    question.prompt
                );
                self.phase = Phase::Await(question);
                Ok(Step::note(note))
            }
            Phase::Await(question) => match stage.exercises().poll_answer() {
                None => {
                    self.phase = Phase::Await(question);
                    Ok(Step::quiet())
                }
                Some(given) => {
                    let correct = given == question.answer;
                    stage.exercises().report(&question, given, correct);

                    self.answered += 1;
                    let note = if correct {
                        self.correct += 1;
                        format!("ok {} = {}", question.prompt, given)
                    } else {
                        format!("ng {} expected {} got {}", question.prompt, question.answer, given)
                    };
                    // phase is already back to Ask for the next trial
                    Ok(Step::note(note))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use stage_core::ExerciseHost;

    use super::*;

    /// Host with canned questions and answers arriving after a delay.
    struct ScriptedHost {
        questions: VecDeque<Question>,
        answers: VecDeque<f64>,
        /// Polls to swallow before each answer arrives.
        delay: usize,
        polls: usize,
        reports: Vec<(String, f64, bool)>,
    }

    impl ScriptedHost {
        fn new(
            questions: Vec<Question>,
            answers: Vec<f64>,
            delay: usize,
        ) -> Self {
            Self {
                questions: questions.into(),
                answers: answers.into(),
                delay,
                polls: 0,
                reports: Vec::new(),
            }
        }
    }

    impl ExerciseHost for ScriptedHost {
        fn next_question(&mut self) -> Option<Question> {
            self.questions.pop_front()
        }

        fn focus_input(&mut self, _prompt: &str) {
            self.polls = 0;
        }

        fn poll_answer(&mut self) -> Option<f64> {
            if self.polls < self.delay {
                self.polls += 1;
                return None;
            }
            self.answers.pop_front()
        }

        fn report(&mut self, question: &Question, given: f64, correct: bool) {
            self.reports.push((question.prompt.clone(), given, correct));
        }
    }

    fn run_to_done(action: &mut ExerciseAction, stage: &mut Stage) -> Vec<String> {
        let mut notes = Vec::new();
        for _ in 0..100 {
            match action.step(stage).unwrap() {
                Step::Yielded(mut n) => notes.append(&mut n),
                Step::Done(terminal) => {
                    notes.extend(terminal);
                    return notes;
                }
            }
        }
        panic!("exercise did not complete");
    }

    #[test]
    fn grades_each_trial_and_summarizes() {
        let host = ScriptedHost::new(
            vec![Question::new("2 + 3", 5.0), Question::new("4 + 4", 8.0)],
            vec![5.0, 7.0],
            2,
        );
        let mut stage = Stage::builder().exercises(host).build();
        let mut action = ExerciseAction::new(2);

        let notes = run_to_done(&mut action, &mut stage);

        assert_eq!(
            notes,
            vec![
                "question 1/2: 2 + 3".to_owned(),
                "ok 2 + 3 = 5".to_owned(),
                "question 2/2: 4 + 4".to_owned(),
                "ng 4 + 4 expected 8 got 7".to_owned(),
                "exercise end 1/2".to_owned(),
            ]
        );
        assert!(action.finished());
    }

    #[test]
    fn zero_trials_completes_immediately() {
        let mut stage = Stage::builder().build();
        let mut action = ExerciseAction::new(0);

        let step = action.step(&mut stage).unwrap();
        assert_eq!(step, Step::Done(Some("exercise end 0/0".into())));
    }

    #[test]
    fn host_running_dry_is_an_error() {
        let host = ScriptedHost::new(vec![], vec![], 0);
        let mut stage = Stage::builder().exercises(host).build();
        let mut action = ExerciseAction::new(3);

        let err = action.step(&mut stage).unwrap_err();
        assert!(matches!(
            err,
            StepError::QuestionsExhausted { asked: 0, wanted: 3 }
        ));
    }
}
