//! Top-level game driver
//!
//! [`Game`] ties the session state machine to the world and to the audio and
//! render collaborators. One frame is `process_input`, `update`, `render`.

use arcade_engine::foundation::time::clamp_delta;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::input::{InputEvent, InputSource, MenuKey};
use crate::platform::{AudioPlayer, Renderer, SoundCue, Sprite};
use crate::session::{Session, SessionEvent, SessionState, Transition};
use crate::world::{GameWorld, TickReport};

/// Banner shown instead of the play-field once the ship is lost
pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// Game music volume while paused, in percent
const PAUSED_VOLUME: f32 = 25.0;

/// Full volume, in percent
const FULL_VOLUME: f32 = 100.0;

/// The whole game: session, world and collaborators
pub struct Game {
    session: Session,
    world: GameWorld,
    audio: Box<dyn AudioPlayer>,
    running: bool,
}

impl Game {
    /// Create a game seeded from the OS
    pub fn new(config: GameConfig, audio: Box<dyn AudioPlayer>) -> Self {
        Self::with_rng(config, audio, StdRng::from_entropy())
    }

    /// Create a game with a fixed random source
    pub fn with_rng(config: GameConfig, audio: Box<dyn AudioPlayer>, rng: StdRng) -> Self {
        Self {
            session: Session::new(),
            world: GameWorld::new(config, rng),
            audio,
            running: true,
        }
    }

    /// Load every sound and the font, then start the title music
    ///
    /// All resources are attempted; any failure fails the whole step.
    pub fn load_resources(&mut self, renderer: &mut dyn Renderer) -> Result<(), GameError> {
        let resources = self.world.config().resources.clone();
        let sounds = [
            (SoundCue::TitleMusic, &resources.title_music),
            (SoundCue::GameMusic, &resources.game_music),
            (SoundCue::EndMusic, &resources.end_music),
            (SoundCue::ShipGun, &resources.ship_gun_sfx),
        ];

        let mut all_loaded = true;
        for (cue, path) in sounds {
            all_loaded &= self.audio.load(cue, path);
        }
        all_loaded &= renderer.load_font(&resources.font);

        if !all_loaded {
            log::error!("Failed to load resources");
            return Err(GameError::ResourceLoad);
        }

        for cue in [SoundCue::TitleMusic, SoundCue::GameMusic, SoundCue::EndMusic] {
            self.audio.set_looping(cue, true);
        }
        self.audio.play(SoundCue::TitleMusic);
        log::info!("Resources loaded");
        Ok(())
    }

    /// Whether the game loop should keep running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// The simulated world
    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// The simulated world, for direct manipulation
    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// Drain window and menu events, then feed held controls to the ship while in game
    pub fn process_input(&mut self, input: &mut dyn InputSource) {
        for event in input.poll_events() {
            let event = match event {
                InputEvent::KeyReleased(MenuKey::Confirm) => SessionEvent::Confirm,
                InputEvent::KeyReleased(MenuKey::Cancel) => SessionEvent::Cancel,
                InputEvent::CloseRequested => SessionEvent::CloseRequested,
                InputEvent::FocusLost => SessionEvent::FocusLost,
                InputEvent::Resized => SessionEvent::Resized,
            };
            self.handle_event(event);
        }

        if self.session.simulating() && self.world.apply_controls(&input.ship_controls()) {
            self.audio.play(SoundCue::ShipGun);
        }
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Does nothing outside of [`SessionState::InGame`]. Returns the tick report
    /// when the world advanced.
    pub fn update(&mut self, dt: f32) -> Option<TickReport> {
        if !self.session.simulating() {
            return None;
        }
        let dt = clamp_delta(dt, self.world.config().gameplay.max_frame_delta);
        let report = self.world.tick(dt);
        if report.ship_destroyed {
            self.handle_event(SessionEvent::ShipDestroyed);
        }
        Some(report)
    }

    /// Draw the current frame
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.clear();
        if self.session.state() == SessionState::GameOver {
            renderer.draw_banner(GAME_OVER_TEXT);
        } else {
            for object in self.world.objects() {
                renderer.draw_sprite(&Sprite::from(object));
            }
        }
        renderer.present();
    }

    /// Feed one event to the session and apply the resulting side effects
    pub fn handle_event(&mut self, event: SessionEvent) {
        match self.session.handle(event) {
            Transition::None => {}
            Transition::Start => {
                self.audio.stop(SoundCue::TitleMusic);
                self.audio.play(SoundCue::GameMusic);
                self.audio.set_volume(SoundCue::GameMusic, FULL_VOLUME);
            }
            Transition::Pause => self.audio.set_volume(SoundCue::GameMusic, PAUSED_VOLUME),
            Transition::Resume => self.audio.set_volume(SoundCue::GameMusic, FULL_VOLUME),
            Transition::GameOver => {
                self.audio.stop(SoundCue::GameMusic);
                self.audio.play(SoundCue::EndMusic);
            }
            Transition::Reset => {
                self.audio.stop(SoundCue::GameMusic);
                self.audio.stop(SoundCue::EndMusic);
                self.audio.play(SoundCue::TitleMusic);
                self.world.reset();
            }
            Transition::Close => {
                for cue in [SoundCue::TitleMusic, SoundCue::GameMusic, SoundCue::EndMusic] {
                    self.audio.stop(cue);
                }
                self.running = false;
            }
        }
    }
}
