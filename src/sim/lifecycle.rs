//! Frame-loop lifecycle
//!
//! A loop handle moves `Idle -> Running -> Cancelled` exactly once. Restarting
//! an effect means cancelling its handle and creating a fresh one.

/// Lifecycle of one self-rescheduling frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Created, first frame not yet requested
    #[default]
    Idle,
    /// Frames are being requested
    Running,
    /// Stopped for good; pending frames must not reschedule
    Cancelled,
}

impl LoopState {
    /// Idle -> Running. Returns false if the loop was not idle.
    pub fn begin(&mut self) -> bool {
        match self {
            LoopState::Idle => {
                *self = LoopState::Running;
                true
            }
            _ => false,
        }
    }

    /// Any -> Cancelled. Returns false if already cancelled.
    pub fn cancel(&mut self) -> bool {
        if *self == LoopState::Cancelled {
            return false;
        }
        *self = LoopState::Cancelled;
        true
    }

    /// Whether a finished frame should request the next one
    pub fn is_running(&self) -> bool {
        *self == LoopState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_running_cancelled() {
        let mut state = LoopState::default();
        assert_eq!(state, LoopState::Idle);
        assert!(!state.is_running());

        assert!(state.begin());
        assert!(state.is_running());

        assert!(state.cancel());
        assert_eq!(state, LoopState::Cancelled);
        assert!(!state.is_running());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut state = LoopState::Running;
        assert!(state.cancel());
        assert!(!state.cancel());
        assert_eq!(state, LoopState::Cancelled);
    }

    #[test]
    fn test_cancelled_loop_never_restarts() {
        let mut state = LoopState::Idle;
        state.cancel();
        assert!(!state.begin());
        assert!(!state.is_running());
    }

    #[test]
    fn test_begin_twice() {
        let mut state = LoopState::Idle;
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.is_running());
    }
}
