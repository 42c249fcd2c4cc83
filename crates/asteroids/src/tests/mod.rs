//! Scenario tests that drive the world and the game through whole ticks

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::game::Game;
use crate::platform::{AudioPlayer, NullAudio, SoundCue};
use crate::world::GameWorld;


/// Seed shared by every scenario
const SEED: u64 = 0x5EED;

/// One simulated frame at 60 Hz
const FRAME: f32 = 1.0 / 60.0;

/// Audio backend the test keeps a handle on after handing it to a [`Game`]
#[derive(Debug, Clone, Default)]
struct SharedAudio(Rc<RefCell<NullAudio>>);

impl AudioPlayer for SharedAudio {
    fn load(&mut self, cue: SoundCue, path: &str) -> bool {
        self.0.borrow_mut().load(cue, path)
    }

    fn set_looping(&mut self, cue: SoundCue, looping: bool) {
        self.0.borrow_mut().set_looping(cue, looping);
    }

    fn play(&mut self, cue: SoundCue) {
        self.0.borrow_mut().play(cue);
    }

    fn stop(&mut self, cue: SoundCue) {
        self.0.borrow_mut().stop(cue);
    }

    fn set_volume(&mut self, cue: SoundCue, volume: f32) {
        self.0.borrow_mut().set_volume(cue, volume);
    }
}

/// Config with no starting asteroids, for hand-placed scenarios
fn empty_field_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.gameplay.starting_asteroids = 0;
    config
}

fn seeded_world(config: GameConfig) -> GameWorld {
    GameWorld::new(config, StdRng::seed_from_u64(SEED))
}

fn seeded_game(config: GameConfig) -> (Game, SharedAudio) {
    let audio = SharedAudio::default();
    let game = Game::with_rng(config, Box::new(audio.clone()), StdRng::seed_from_u64(SEED));
    (game, audio)
}
