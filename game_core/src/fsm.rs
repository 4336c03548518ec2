//! Session State Machine
//!
//! Idle until the play surface is clicked, then Running for the rest of the
//! page's life. There is no pause and no game over.

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Idle,
    Running,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Activate,
}

/// Result of a state transition
#[derive(Debug, Clone)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Session Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Idle,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Idle, GameAction::Activate) => Some(FsmState::Running),
            // Already running
            (FsmState::Running, GameAction::Activate) => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == FsmState::Running
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), FsmState::Idle);
        assert!(!fsm.is_running());
    }

    #[test]
    fn test_activate_starts_running() {
        let mut fsm = GameFsm::new();
        assert!(fsm.can_transition(GameAction::Activate));
        let result = fsm.transition(GameAction::Activate);
        assert!(result.success);
        assert_eq!(result.from_state, FsmState::Idle);
        assert_eq!(result.to_state, FsmState::Running);
        assert!(fsm.is_running());
    }

    #[test]
    fn test_second_activate_is_rejected() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Activate);
        assert!(!fsm.can_transition(GameAction::Activate));
        let result = fsm.transition(GameAction::Activate);
        assert!(!result.success);
        assert_eq!(result.to_state, FsmState::Running);
        assert_eq!(fsm.state(), FsmState::Running);
    }
}
