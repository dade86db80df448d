use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    domain::{Candidate, Outcome},
    engine::explore,
};

/// Step counts over every candidate start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Survey {
    /// Steps taken to converge -> number of starts needing that many.
    pub histogram: BTreeMap<usize, usize>,
    /// Starts that hit the step limit first.
    pub unconverged: Vec<u16>,
}

impl Survey {
    pub fn total(&self) -> usize {
        self.histogram.values().sum::<usize>() + self.unconverged.len()
    }

    pub fn max_steps(&self) -> Option<usize> {
        self.histogram.keys().next_back().copied()
    }
}

pub fn survey(max_steps: usize) -> Survey {
    let mut survey = Survey::default();
    for candidate in Candidate::all() {
        let exploration = explore(candidate, max_steps);
        match exploration.outcome {
            Outcome::Converged => *survey.histogram.entry(exploration.steps()).or_default() += 1,
            Outcome::StepLimitReached => survey.unconverged.push(candidate.value()),
        }
    }
    survey
}

#[cfg(test)]
#[path = "tests/survey_tests.rs"]
mod tests;
