//! Session state machine
//!
//! Transitions are a pure function of the current state and one event. The
//! caller applies the returned [`Transition`] side effects (music, world
//! reset) itself.

use std::fmt;

/// Where the session is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Waiting on the title screen
    TitleScreen,
    /// Simulation running
    InGame,
    /// Simulation frozen, entities kept
    Paused,
    /// Ship destroyed, entities kept
    GameOver,
    /// Terminal
    Closed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::TitleScreen => "title screen",
            SessionState::InGame => "in game",
            SessionState::Paused => "paused",
            SessionState::GameOver => "game over",
            SessionState::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEvent {
    /// Enter released
    Confirm,
    /// Escape released
    Cancel,
    /// Window lost focus
    FocusLost,
    /// Window resized
    Resized,
    /// Window close requested
    CloseRequested,
    /// The ship was destroyed during a tick
    ShipDestroyed,
}

/// Side effect the caller owes for a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Nothing changed
    None,
    /// Title screen to play
    Start,
    /// Play to paused
    Pause,
    /// Paused back to play
    Resume,
    /// Ship lost
    GameOver,
    /// Back to the title screen with a fresh world
    Reset,
    /// Session over
    Close,
}

/// Apply `event` to `state`
pub fn transition(state: SessionState, event: SessionEvent) -> (SessionState, Transition) {
    use SessionEvent as E;
    use SessionState as S;

    match (state, event) {
        (S::Closed, _) => (S::Closed, Transition::None),
        (_, E::CloseRequested) => (S::Closed, Transition::Close),

        (S::TitleScreen, E::Confirm) => (S::InGame, Transition::Start),
        (S::TitleScreen, E::Cancel) => (S::Closed, Transition::Close),

        (S::InGame, E::Cancel | E::FocusLost | E::Resized) => (S::Paused, Transition::Pause),
        (S::InGame, E::ShipDestroyed) => (S::GameOver, Transition::GameOver),

        (S::Paused, E::Confirm) => (S::InGame, Transition::Resume),
        (S::Paused, E::Cancel) => (S::TitleScreen, Transition::Reset),

        (S::GameOver, E::Confirm) => (S::TitleScreen, Transition::Reset),

        (state, _) => (state, Transition::None),
    }
}

/// Owned session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// New session on the title screen
    pub fn new() -> Self {
        Self {
            state: SessionState::TitleScreen,
        }
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the simulation runs this frame
    pub fn simulating(&self) -> bool {
        self.state == SessionState::InGame
    }

    /// Feed one event, returning the side effect to apply
    pub fn handle(&mut self, event: SessionEvent) -> Transition {
        let (next, effect) = transition(self.state, event);
        if next != self.state {
            log::info!("Session: {} -> {} ({event:?})", self.state, next);
        }
        self.state = next;
        effect
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_screen() {
        assert_eq!(transition(SessionState::TitleScreen, SessionEvent::Confirm), (SessionState::InGame, Transition::Start));
        assert_eq!(transition(SessionState::TitleScreen, SessionEvent::Cancel), (SessionState::Closed, Transition::Close));
        assert_eq!(transition(SessionState::TitleScreen, SessionEvent::FocusLost), (SessionState::TitleScreen, Transition::None));
    }

    #[test]
    fn test_in_game_pauses_on_window_events() {
        for event in [SessionEvent::Cancel, SessionEvent::FocusLost, SessionEvent::Resized] {
            assert_eq!(transition(SessionState::InGame, event), (SessionState::Paused, Transition::Pause));
        }
        assert_eq!(transition(SessionState::InGame, SessionEvent::Confirm), (SessionState::InGame, Transition::None));
    }

    #[test]
    fn test_ship_destroyed_only_ends_a_running_game() {
        assert_eq!(transition(SessionState::InGame, SessionEvent::ShipDestroyed), (SessionState::GameOver, Transition::GameOver));
        assert_eq!(transition(SessionState::Paused, SessionEvent::ShipDestroyed), (SessionState::Paused, Transition::None));
        assert_eq!(transition(SessionState::GameOver, SessionEvent::ShipDestroyed), (SessionState::GameOver, Transition::None));
    }

    #[test]
    fn test_paused_and_game_over() {
        assert_eq!(transition(SessionState::Paused, SessionEvent::Confirm), (SessionState::InGame, Transition::Resume));
        assert_eq!(transition(SessionState::Paused, SessionEvent::Cancel), (SessionState::TitleScreen, Transition::Reset));
        assert_eq!(transition(SessionState::GameOver, SessionEvent::Confirm), (SessionState::TitleScreen, Transition::Reset));
        assert_eq!(transition(SessionState::GameOver, SessionEvent::Cancel), (SessionState::GameOver, Transition::None));
    }

    #[test]
    fn test_close_from_anywhere_is_terminal() {
        for state in [SessionState::TitleScreen, SessionState::InGame, SessionState::Paused, SessionState::GameOver] {
            assert_eq!(transition(state, SessionEvent::CloseRequested), (SessionState::Closed, Transition::Close));
        }
        assert_eq!(transition(SessionState::Closed, SessionEvent::Confirm), (SessionState::Closed, Transition::None));
    }

    #[test]
    fn test_session_simulates_only_in_game() {
        let mut session = Session::new();
        assert!(!session.simulating());
        session.handle(SessionEvent::Confirm);
        assert!(session.simulating());
        session.handle(SessionEvent::FocusLost);
        assert!(!session.simulating());
        assert_eq!(session.state(), SessionState::Paused);
    }
}
