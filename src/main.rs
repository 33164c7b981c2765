//! Rock Dodge entry point
//!
//! Drawing is left to a host frontend; the native binary runs a headless
//! session in idle/demo mode and reports how the autopilot fared.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use rock_dodge::renderer::{shapes, vertex};
    use rock_dodge::sim::{GameEvent, Key};
    use rock_dodge::{Error, Game, GameConfig, Result};

    /// Environment variable fixing the RNG seed
    const SEED_ENV: &str = "ROCK_DODGE_SEED";
    /// Environment variable setting the session length in ticks
    const TICKS_ENV: &str = "ROCK_DODGE_TICKS";
    /// Environment variable with comma-separated key names pressed before the first tick
    const KEYS_ENV: &str = "ROCK_DODGE_KEYS";
    /// One minute at ~60 Hz
    const DEFAULT_TICKS: u64 = 60 * 60;

    fn env_u64(name: &str) -> Result<Option<u64>> {
        match std::env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| Error::InvalidConfig(format!("{name} must be an unsigned integer"))),
            Err(_) => Ok(None),
        }
    }

    /// Queue the scripted opening presses, e.g. `ROCK_DODGE_KEYS="+,+,ArrowLeft"`
    fn queue_opening_keys(game: &mut Game) {
        let Ok(names) = std::env::var(KEYS_ENV) else {
            return;
        };
        for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let (key, modifiers) = Key::from_name(name);
            if key == Key::Other {
                log::warn!("Ignoring unknown key name: {}", name);
                continue;
            }
            game.key_pressed(key, modifiers);
        }
    }

    pub fn run() -> Result<()> {
        let config = GameConfig::from_env()?;
        let seed = match env_u64(SEED_ENV)? {
            Some(seed) => seed,
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default(),
        };
        let ticks = env_u64(TICKS_ENV)?.unwrap_or(DEFAULT_TICKS);

        let mut game = Game::new(config, seed);
        game.set_autopilot(true);
        queue_opening_keys(&mut game);

        let mut crashes = 0u32;
        let mut dodged = 0u32;
        let mut spawned = 0u32;
        for _ in 0..ticks {
            for event in game.step() {
                match event {
                    GameEvent::Collision { .. } => crashes += 1,
                    GameEvent::Dodged { .. } => dodged += 1,
                    GameEvent::Spawned { .. } => spawned += 1,
                    GameEvent::Restarted => {}
                }
            }
        }

        // What a GPU host would upload for the last frame
        let frame = game.frame();
        let mut vertices = frame.vertices();
        shapes::to_clip_space(&mut vertices, frame.width, frame.height);
        let upload = vertex::as_bytes(&vertices);

        println!("Rock Dodge headless session (seed {seed})");
        println!("  ticks:   {ticks}");
        println!("  rocks:   {spawned} spawned, {dodged} dodged");
        println!("  crashes: {crashes}");
        println!(
            "  final:   {:?}, {} rocks on screen, speed {}",
            frame.mode,
            frame.obstacles.len(),
            frame.speed
        );
        println!(
            "  frame:   {} vertices, {} bytes",
            vertices.len(),
            upload.len()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), rock_dodge::Error> {
    env_logger::init();
    log::info!("Rock Dodge (native) starting...");

    headless::run().inspect_err(|e| log::error!("{}", e))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `rock_dodge::Game` directly
}
