//! Audio and rendering contracts
//!
//! The game never talks to a graphics or audio toolkit directly. It drives
//! these traits, and the binary plugs in whatever backend it has. The
//! headless runner uses [`NullAudio`] and [`LogRenderer`].

use std::collections::{HashMap, VecDeque};

use arcade_engine::foundation::math::Vec2;

use crate::components::ObjectType;
use crate::game_object::GameObject;

/// Sounds the game can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SoundCue {
    /// Title screen music
    TitleMusic,
    /// In-game music
    GameMusic,
    /// Game over music
    EndMusic,
    /// Ship gun sound effect
    ShipGun,
}

impl SoundCue {
    /// Music cues loop; effects play once
    pub fn is_music(self) -> bool {
        !matches!(self, SoundCue::ShipGun)
    }
}

/// Audio backend
pub trait AudioPlayer {
    /// Load `cue` from `path`; returns false if it could not be loaded
    fn load(&mut self, cue: SoundCue, path: &str) -> bool;

    /// Make `cue` loop when played
    fn set_looping(&mut self, cue: SoundCue, looping: bool);

    /// Start `cue` from the beginning
    fn play(&mut self, cue: SoundCue);

    /// Stop `cue`
    fn stop(&mut self, cue: SoundCue);

    /// Set the volume of `cue` in percent
    fn set_volume(&mut self, cue: SoundCue, volume: f32);
}

/// Draw data for one object
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// What is being drawn
    pub object_type: ObjectType,
    /// Position in play-field space
    pub position: Vec2,
    /// Degrees clockwise from up
    pub rotation: f32,
    /// Bounding radius
    pub radius: f32,
    /// Hull outline, for the ship
    pub outline: Option<[Vec2; 3]>,
}

impl From<&GameObject> for Sprite {
    fn from(object: &GameObject) -> Self {
        Self {
            object_type: object.object_type(),
            position: object.position(),
            rotation: object.rotation(),
            radius: object.radius(),
            outline: object.hull_vertices(),
        }
    }
}

/// Rendering backend
pub trait Renderer {
    /// Load the UI font; returns false if it could not be loaded
    fn load_font(&mut self, path: &str) -> bool;

    /// Start a frame
    fn clear(&mut self);

    /// Draw one object
    fn draw_sprite(&mut self, sprite: &Sprite);

    /// Draw centered banner text
    fn draw_banner(&mut self, text: &str);

    /// Finish the frame
    fn present(&mut self);
}

/// Cues kept in the `NullAudio` history
const HISTORY_LIMIT: usize = 64;

/// Audio backend that plays nothing and remembers what it was asked to do
#[derive(Debug, Default)]
pub struct NullAudio {
    playing: HashMap<SoundCue, f32>,
    looping: HashMap<SoundCue, bool>,
    history: VecDeque<SoundCue>,
    /// Cues whose load should fail
    pub missing: Vec<SoundCue>,
}

impl NullAudio {
    /// Create a backend where every load succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `cue` is currently playing
    pub fn is_playing(&self, cue: SoundCue) -> bool {
        self.playing.contains_key(&cue)
    }

    /// Volume of a playing cue
    pub fn volume(&self, cue: SoundCue) -> Option<f32> {
        self.playing.get(&cue).copied()
    }

    /// Whether `cue` is set to loop
    pub fn is_looping(&self, cue: SoundCue) -> bool {
        self.looping.get(&cue).copied().unwrap_or(false)
    }

    /// The most recently started cues, oldest first
    pub fn history(&self) -> impl Iterator<Item = SoundCue> + '_ {
        self.history.iter().copied()
    }
}

impl AudioPlayer for NullAudio {
    fn load(&mut self, cue: SoundCue, path: &str) -> bool {
        let loaded = !self.missing.contains(&cue);
        log::debug!("Audio {cue:?} <- {path}: {}", if loaded { "ok" } else { "missing" });
        loaded
    }

    fn set_looping(&mut self, cue: SoundCue, looping: bool) {
        self.looping.insert(cue, looping);
    }

    fn play(&mut self, cue: SoundCue) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(cue);
        // One-shot effects end on their own
        if cue.is_music() {
            let volume = self.playing.get(&cue).copied().unwrap_or(100.0);
            self.playing.insert(cue, volume);
        }
    }

    fn stop(&mut self, cue: SoundCue) {
        self.playing.remove(&cue);
    }

    fn set_volume(&mut self, cue: SoundCue, volume: f32) {
        if let Some(current) = self.playing.get_mut(&cue) {
            *current = volume;
        }
    }
}

/// Renderer that logs frames instead of drawing them
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    last_sprites: usize,
    last_banner: Option<String>,
    /// Fail font loading
    pub font_missing: bool,
}

impl LogRenderer {
    /// Create a renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Sprites drawn in the last presented frame
    pub fn last_sprite_count(&self) -> usize {
        self.last_sprites
    }

    /// Banner drawn in the last presented frame
    pub fn last_banner(&self) -> Option<&str> {
        self.last_banner.as_deref()
    }
}

impl Renderer for LogRenderer {
    fn load_font(&mut self, path: &str) -> bool {
        log::debug!("Font <- {path}");
        !self.font_missing
    }

    fn clear(&mut self) {
        self.last_sprites = 0;
        self.last_banner = None;
    }

    fn draw_sprite(&mut self, sprite: &Sprite) {
        log::trace!("{:?} at ({:.1}, {:.1})", sprite.object_type, sprite.position.x, sprite.position.y);
        self.last_sprites += 1;
    }

    fn draw_banner(&mut self, text: &str) {
        self.last_banner = Some(text.to_string());
    }

    fn present(&mut self) {
        self.frames += 1;
        if let Some(banner) = &self.last_banner {
            log::trace!("Frame {}: {banner}", self.frames);
        } else {
            log::trace!("Frame {}: {} sprite(s)", self.frames, self.last_sprites);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_audio_history_is_bounded() {
        let mut audio = NullAudio::new();
        audio.play(SoundCue::GameMusic);
        for _ in 0..HISTORY_LIMIT * 3 {
            audio.play(SoundCue::ShipGun);
        }

        assert_eq!(audio.history().count(), HISTORY_LIMIT);
        assert!(audio.history().all(|cue| cue == SoundCue::ShipGun));
        assert!(audio.is_playing(SoundCue::GameMusic));
    }
}
