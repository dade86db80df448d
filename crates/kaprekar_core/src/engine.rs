use tracing::debug;

use crate::{
    domain::{Candidate, Exploration, Outcome, StepRecord, KAPREKAR_CONSTANT, MAX_CANDIDATE},
    error::ValidationError,
};

/// One application of the digit transform to a value in `0..=9999`.
pub fn kaprekar_step(number: u16) -> StepRecord {
    StepRecord::from_number(number)
}

pub fn explore(start: Candidate, max_steps: usize) -> Exploration {
    explore_with(start, max_steps, |_, _| {})
}

/// Like [`explore`], calling `on_step` with the 1-based step index after every
/// applied transform.
pub fn explore_with<F>(start: Candidate, max_steps: usize, on_step: F) -> Exploration
where
    F: FnMut(usize, &StepRecord),
{
    run(start.value(), max_steps, on_step)
}

/// Runs the transform from an unvalidated value. Repdigits collapse to 0 and
/// stay there until the step limit.
pub fn explore_value(value: u16, max_steps: usize) -> Result<Exploration, ValidationError> {
    if value > MAX_CANDIDATE {
        return Err(ValidationError::WrongDigitCount);
    }
    Ok(run(value, max_steps, |_, _| {}))
}

fn run<F>(start: u16, max_steps: usize, mut on_step: F) -> Exploration
where
    F: FnMut(usize, &StepRecord),
{
    let mut sequence = vec![start];
    let mut current = start;
    let mut steps = 0;

    while steps < max_steps {
        if current == KAPREKAR_CONSTANT {
            break;
        }
        let record = kaprekar_step(current);
        sequence.push(record.result);
        current = record.result;
        steps += 1;
        on_step(steps, &record);
    }

    let outcome = if current == KAPREKAR_CONSTANT {
        Outcome::Converged
    } else {
        Outcome::StepLimitReached
    };
    debug!(start, steps, ?outcome, "exploration finished");

    Exploration {
        start,
        sequence,
        outcome,
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
