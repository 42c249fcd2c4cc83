//! Headless asteroids runner
//!
//! Plays a short scripted session against the null audio and logging
//! renderer backends. Pass a TOML or RON config path as the first argument
//! to override the defaults; set `RUST_LOG=debug` to watch the lifecycle.

use std::path::PathBuf;
use std::process::ExitCode;

use arcade_engine::foundation::logging;
use arcade_engine::foundation::time::Timer;
use asteroids::input::{InputEvent, MenuKey, ScriptedInput, ShipControls};
use asteroids::platform::{LogRenderer, NullAudio};
use asteroids::{Game, GameConfig};

/// Frames simulated before the script asks the window to close
const SCRIPT_FRAMES: usize = 600;

fn script() -> ScriptedInput {
    let fly_and_fire = ShipControls {
        fire: true,
        thrust_forward: true,
        rotate_right: true,
        ..Default::default()
    };
    let turn_and_fire = ShipControls {
        fire: true,
        rotate_left: true,
        ..Default::default()
    };

    ScriptedInput::new()
        .with_events([InputEvent::KeyReleased(MenuKey::Confirm)])
        .with_controls(fly_and_fire, SCRIPT_FRAMES / 3)
        .with_controls(turn_and_fire, SCRIPT_FRAMES / 3)
        .with_idle(SCRIPT_FRAMES / 3)
        .with_events([InputEvent::CloseRequested])
}

fn main() -> ExitCode {
    logging::init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref());
    let timestep = config.gameplay.physics_timestep;
    let mut timer = Timer::new(config.gameplay.max_frame_delta);

    let mut renderer = LogRenderer::new();
    let mut game = Game::new(config, Box::new(NullAudio::new()));

    if let Err(e) = game.load_resources(&mut renderer) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }

    let mut input = script();
    // Scripted frames step at the physics rate; the timer only measures throughput
    while game.is_running() {
        timer.tick();
        game.process_input(&mut input);
        game.update(timestep);
        game.render(&mut renderer);
    }

    log::info!(
        "Session ended after {} frame(s) ({:.0} fps) in state {} with {} object(s) alive",
        timer.frame_count(),
        timer.average_fps(),
        game.state(),
        game.world().len()
    );
    ExitCode::SUCCESS
}
