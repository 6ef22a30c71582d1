//! Self-playing addition drill.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stage_core::{ExerciseHost, Question};

/// Exercise host that generates `a + b` questions and emulates a learner
/// answering them after a short delay.
///
/// Real deployments put an input widget behind [`ExerciseHost`]; this one
/// exists so the demo runs unattended. The emulated learner gets roughly
/// four out of five answers right.
pub struct AdditionDrill {
    rng: StdRng,
    max_addend: u32,
    answer_delay: usize,
    pending: Option<Pending>,
}

struct Pending {
    given: f64,
    polls_left: usize,
}

impl AdditionDrill {
    pub fn new(max_addend: u32, answer_delay: usize) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max_addend,
            answer_delay,
            pending: None,
        }
    }
}

impl ExerciseHost for AdditionDrill {
    fn next_question(&mut self) -> Option<Question> {
        let a = self.rng.gen_range(0..=self.max_addend);
        let b = self.rng.gen_range(0..=self.max_addend);
        let answer = f64::from(a + b);

        // Decide the emulated learner's answer up front, off by one when
        // they "slip".
        let given = if self.rng.gen_bool(0.2) { answer + 1.0 } else { answer };
        self.pending = Some(Pending {
            given,
            polls_left: self.answer_delay,
        });

        Some(Question::new(format!("{a} + {b}"), answer))
    }

    fn focus_input(&mut self, prompt: &str) {
        tracing::info!(target: "client::drill", prompt, "input focused");
    }

    fn poll_answer(&mut self) -> Option<f64> {
        let pending = self.pending.as_mut()?;
        if pending.polls_left > 0 {
            pending.polls_left -= 1;
            return None;
        }
        let given = pending.given;
        self.pending = None;
        Some(given)
    }

    fn report(&mut self, question: &Question, given: f64, correct: bool) {
        if correct {
            tracing::info!(target: "client::drill", prompt = %question.prompt, given, "correct");
        } else {
            tracing::info!(
                target: "client::drill",
                prompt = %question.prompt,
                expected = question.answer,
                given,
                "wrong"
            );
        }
    }
}
