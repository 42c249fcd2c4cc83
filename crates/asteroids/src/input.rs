//! Input contract
//!
//! The game polls an [`InputSource`] once per frame for discrete window and
//! menu events, and for the held state of the ship controls.

use std::collections::VecDeque;

/// Menu actions, delivered on key release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKey {
    /// Enter
    Confirm,
    /// Escape
    Cancel,
}

/// Discrete events delivered by the window layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A menu key was released
    KeyReleased(MenuKey),
    /// The window was asked to close
    CloseRequested,
    /// The window lost focus
    FocusLost,
    /// The window was resized
    Resized,
}

/// Ship controls held down this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipControls {
    /// Fire the gun
    pub fire: bool,
    /// Thrust along the heading
    pub thrust_forward: bool,
    /// Thrust against the heading at reduced power
    pub thrust_reverse: bool,
    /// Rotate counter-clockwise
    pub rotate_left: bool,
    /// Rotate clockwise
    pub rotate_right: bool,
}

impl ShipControls {
    /// True when no control is held
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Source of player input, polled once per frame
pub trait InputSource {
    /// Drain the events received since the last poll
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Controls currently held
    fn ship_controls(&self) -> ShipControls;
}

/// One frame of scripted input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedFrame {
    /// Events delivered this frame
    pub events: Vec<InputEvent>,
    /// Controls held this frame
    pub controls: ShipControls,
}

/// Input replayed from a fixed script, one frame per poll
///
/// Used by the headless runner and by tests. Once the script runs out every
/// poll is empty and no control is held.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<ScriptedFrame>,
    current: ShipControls,
}

impl ScriptedInput {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame with only events
    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        self.frames.push_back(ScriptedFrame {
            events: events.into_iter().collect(),
            controls: ShipControls::default(),
        });
        self
    }

    /// Append `frames` frames holding `controls`
    #[must_use]
    pub fn with_controls(mut self, controls: ShipControls, frames: usize) -> Self {
        self.frames.extend(std::iter::repeat(ScriptedFrame { events: Vec::new(), controls }).take(frames));
        self
    }

    /// Append `frames` idle frames
    #[must_use]
    pub fn with_idle(self, frames: usize) -> Self {
        self.with_controls(ShipControls::default(), frames)
    }

    /// Frames left in the script
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        match self.frames.pop_front() {
            Some(frame) => {
                self.current = frame.controls;
                frame.events
            }
            None => {
                self.current = ShipControls::default();
                Vec::new()
            }
        }
    }

    fn ship_controls(&self) -> ShipControls {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_plays_in_order() {
        let thrust = ShipControls { thrust_forward: true, ..Default::default() };
        let mut input = ScriptedInput::new()
            .with_events([InputEvent::KeyReleased(MenuKey::Confirm)])
            .with_controls(thrust, 2);

        assert_eq!(input.poll_events(), vec![InputEvent::KeyReleased(MenuKey::Confirm)]);
        assert!(input.ship_controls().is_idle());

        assert!(input.poll_events().is_empty());
        assert_eq!(input.ship_controls(), thrust);
        input.poll_events();
        assert_eq!(input.remaining(), 0);

        assert!(input.poll_events().is_empty());
        assert!(input.ship_controls().is_idle());
    }
}
