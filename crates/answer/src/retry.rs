//! Depth bound for the paraphrase-retry path.
//!
//! Depth counts search attempts already spent on a question: 0 for a fresh
//! question, +1 per paraphrase retry. [`MAX_DEPTH`] is the only bound and is
//! checked the same way everywhere:
//! - FAQ and excerpt answers are served while `depth < MAX_DEPTH`
//! - a retry is allowed while `depth + 1 < MAX_DEPTH`
//!
//! With `MAX_DEPTH = 2` a question costs at most two searches.

use serde::Serialize;

/// Maximum number of searches per question.
pub const MAX_DEPTH: u32 = 2;

/// Where a question is in its attempt lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptState {
    /// First search for the original question
    Initial,

    /// Searching with a paraphrased question
    Retried,

    /// No further retry will happen
    Terminal,
}

/// Tracks depth and state for one question.
#[derive(Debug, Clone)]
pub struct RecursionController {
    depth: u32,
    state: AttemptState,
}

impl Default for RecursionController {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl RecursionController {
    /// Start at `depth` (0 for a fresh question). Depths past
    /// [`MAX_DEPTH`] are clamped to it.
    pub fn starting_at(depth: u32) -> Self {
        let depth = depth.min(MAX_DEPTH);
        let state = match depth {
            0 => AttemptState::Initial,
            d if d < MAX_DEPTH => AttemptState::Retried,
            _ => AttemptState::Terminal,
        };
        Self { depth, state }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    /// Whether FAQ and excerpt answers may still be served.
    pub fn within_bound(&self) -> bool {
        self.depth < MAX_DEPTH
    }

    /// Whether another paraphrase retry is allowed.
    pub fn can_retry(&self) -> bool {
        self.state != AttemptState::Terminal && self.depth.saturating_add(1) < MAX_DEPTH
    }

    /// Spend one retry. Returns `false` and becomes terminal when the bound
    /// is exhausted.
    pub fn retry(&mut self) -> bool {
        if !self.can_retry() {
            self.state = AttemptState::Terminal;
            return false;
        }
        self.depth += 1;
        self.state = AttemptState::Retried;
        true
    }

    /// Mark the question as finished.
    pub fn finish(&mut self) {
        self.state = AttemptState::Terminal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_question_allows_one_retry() {
        let mut controller = RecursionController::default();
        assert_eq!(controller.state(), AttemptState::Initial);
        assert!(controller.within_bound());
        assert!(controller.can_retry());

        assert!(controller.retry());
        assert_eq!(controller.depth(), 1);
        assert_eq!(controller.state(), AttemptState::Retried);
        assert!(controller.within_bound());
        assert!(!controller.can_retry());

        assert!(!controller.retry());
        assert_eq!(controller.depth(), 1);
        assert_eq!(controller.state(), AttemptState::Terminal);
    }

    #[test]
    fn test_retry_count_is_bounded_for_any_start() {
        for start in 0..=MAX_DEPTH + 3 {
            let mut controller = RecursionController::starting_at(start);
            let mut retries = 0;
            while controller.retry() {
                retries += 1;
                assert!(retries < MAX_DEPTH, "unbounded retries from depth {}", start);
            }
            assert!(controller.depth() <= MAX_DEPTH);
            assert_eq!(controller.state(), AttemptState::Terminal);
        }
    }

    #[test]
    fn test_depth_at_bound_is_terminal() {
        let controller = RecursionController::starting_at(MAX_DEPTH);
        assert_eq!(controller.state(), AttemptState::Terminal);
        assert!(!controller.within_bound());
        assert!(!controller.can_retry());
    }

    #[test]
    fn test_finish_blocks_retry() {
        let mut controller = RecursionController::default();
        controller.finish();
        assert!(!controller.can_retry());
        assert!(!controller.retry());
        assert_eq!(controller.depth(), 0);
    }

    #[test]
    fn test_depth_past_bound_is_clamped() {
        for start in [MAX_DEPTH + 1, MAX_DEPTH + 5, u32::MAX] {
            let controller = RecursionController::starting_at(start);
            assert_eq!(controller.depth(), MAX_DEPTH);
            assert_eq!(controller.state(), AttemptState::Terminal);
            assert!(!controller.can_retry());
        }
    }
}
