//! Two-state swap protocol: the primary is either on screen (possibly after a
//! swap) or hidden with no visible ghost to jump to.

use statig::prelude::*;

/// What a tick observed about the primary after the swap scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapEvent {
    PrimaryOnScreen,
    Swapped,
    NoVisibleGhost,
}

/// Public view of the machine's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapPhase {
    PrimaryVisible,
    PrimaryHidden,
}

#[derive(Debug, Default)]
pub struct SwapMachine;

#[state_machine(initial = "State::primary_visible()", state(derive(Debug, Clone, PartialEq, Eq)))]
impl SwapMachine {
    #[state]
    fn primary_visible(event: &WrapEvent) -> Response<State> {
        match event {
            WrapEvent::NoVisibleGhost => Transition(State::primary_hidden()),
            WrapEvent::PrimaryOnScreen | WrapEvent::Swapped => Handled,
        }
    }

    #[state]
    fn primary_hidden(event: &WrapEvent) -> Response<State> {
        match event {
            WrapEvent::NoVisibleGhost => Handled,
            WrapEvent::PrimaryOnScreen | WrapEvent::Swapped => {
                Transition(State::primary_visible())
            }
        }
    }
}

pub fn phase_of(state: &State) -> WrapPhase {
    match state {
        State::PrimaryVisible { .. } => WrapPhase::PrimaryVisible,
        State::PrimaryHidden { .. } => WrapPhase::PrimaryHidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(sm: &StateMachine<SwapMachine>) -> WrapPhase {
        phase_of(sm.state())
    }

    #[test]
    fn starts_visible() {
        let sm = SwapMachine.state_machine();
        assert_eq!(phase(&sm), WrapPhase::PrimaryVisible);
    }

    #[test]
    fn missing_ghost_hides_primary_until_a_swap() {
        let mut sm = SwapMachine.state_machine();
        sm.handle(&WrapEvent::NoVisibleGhost);
        assert_eq!(phase(&sm), WrapPhase::PrimaryHidden);

        sm.handle(&WrapEvent::NoVisibleGhost);
        assert_eq!(phase(&sm), WrapPhase::PrimaryHidden);

        sm.handle(&WrapEvent::Swapped);
        assert_eq!(phase(&sm), WrapPhase::PrimaryVisible);
    }

    #[test]
    fn hidden_primary_drifting_back_becomes_visible() {
        let mut sm = SwapMachine.state_machine();
        sm.handle(&WrapEvent::NoVisibleGhost);
        sm.handle(&WrapEvent::PrimaryOnScreen);
        assert_eq!(phase(&sm), WrapPhase::PrimaryVisible);
    }
}
