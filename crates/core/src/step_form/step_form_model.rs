//! Finite-state machine for a linear multi-step form.

use serde::{Deserialize, Serialize};

/// Display state of one step (or its progress dot).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Active,
    Upcoming,
}

/// Current position in a form with a fixed number of steps.
///
/// Starts at step 0. `next` stops at the last step and `prev` stops at the
/// first; there is no exit transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepForm {
    current: usize,
    step_count: usize,
}

impl StepForm {
    pub fn new(step_count: usize) -> Self {
        Self {
            current: 0,
            step_count,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.step_count
    }

    /// Advances one step. Returns `false` (and does nothing) on the last step.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Goes back one step. Returns `false` (and does nothing) on the first step.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// State of the step or indicator at `index`.
    pub fn state_of(&self, index: usize) -> StepState {
        use std::cmp::Ordering;
        match index.cmp(&self.current) {
            Ordering::Less => StepState::Completed,
            Ordering::Equal => StepState::Active,
            Ordering::Greater => StepState::Upcoming,
        }
    }

    /// States for `count` indicators. Progress dots may not match the
    /// number of steps one to one, so the count is the caller's.
    pub fn states(&self, count: usize) -> Vec<StepState> {
        (0..count).map(|index| self.state_of(index)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_step() {
        let form = StepForm::new(4);
        assert_eq!(form.current(), 0);
        assert!(form.is_first());
        assert!(!form.is_last());
    }

    #[test]
    fn test_next_stops_at_terminal_step() {
        let mut form = StepForm::new(3);
        assert!(form.next());
        assert!(form.next());
        assert_eq!(form.current(), 2);
        assert!(!form.next());
        assert_eq!(form.current(), 2);
    }

    #[test]
    fn test_prev_stops_at_initial_step() {
        let mut form = StepForm::new(3);
        assert!(!form.prev());
        assert_eq!(form.current(), 0);
        form.next();
        assert!(form.prev());
        assert_eq!(form.current(), 0);
    }

    #[test]
    fn test_states_mark_exactly_one_active() {
        let mut form = StepForm::new(5);
        form.next();
        form.next();
        let states = form.states(5);
        assert_eq!(
            states,
            vec![
                StepState::Completed,
                StepState::Completed,
                StepState::Active,
                StepState::Upcoming,
                StepState::Upcoming,
            ]
        );
        assert_eq!(states.iter().filter(|s| **s == StepState::Active).count(), 1);
    }

    #[test]
    fn test_degenerate_forms_never_move() {
        for count in [0, 1] {
            let mut form = StepForm::new(count);
            assert!(!form.next());
            assert!(!form.prev());
            assert_eq!(form.current(), 0);
        }
    }
}
