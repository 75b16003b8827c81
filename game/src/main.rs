use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::core::audio::RaylibAudio;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vlk3d_engine::{EngineConfig, GameState, Outcome};

mod input;
mod raylib_host;

use raylib_host::{RaylibCanvas, Speaker, TextureBank};

/// Grid-based first-person shooter
#[derive(Parser, Debug)]
#[command(name = "vlk3d", version)]
struct Args {
    /// Level file to play
    #[arg(long, default_value = "levels/level1.txt")]
    level: PathBuf,

    /// JSON engine configuration; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding `textures/` and `sounds/`
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if args.print_config {
        let json = config.to_json_bytes()?;
        println!("{}", String::from_utf8_lossy(&json));
        return Ok(());
    }

    let mut game = GameState::load(&args.level, config)
        .with_context(|| format!("failed to load level {}", args.level.display()))?;

    let (mut rl, thread) = raylib::init()
        .size(game.config().screen_width, game.config().screen_height)
        .title("vlk3d")
        .build();
    rl.set_target_fps(60);
    rl.set_exit_key(None);

    let textures = TextureBank::load(&mut rl, &thread, &args.assets.join("textures"))?;
    let audio = match RaylibAudio::init_audio_device() {
        Ok(audio) => Some(audio),
        Err(err) => {
            warn!("audio unavailable, playing silently: {err}");
            None
        }
    };
    let mut speaker = Speaker::load(audio.as_ref(), &args.assets.join("sounds"));

    let outcome = loop {
        for command in input::poll(&rl) {
            game.handle_command(command);
        }

        let elapsed = rl.get_frame_time();
        let mut canvas = RaylibCanvas::new(rl.begin_drawing(&thread), &textures);
        if let Some(outcome) = game.frame(elapsed, &mut canvas, &mut speaker) {
            break outcome;
        }
    };

    let stats = game.stats();
    info!(?outcome, score = stats.score, lives = stats.lives, "session finished");
    match outcome {
        Outcome::Win => println!("You win! Score: {}", stats.score),
        Outcome::Die => println!("You died. Score: {}", stats.score),
        Outcome::Abort => println!("Bye. Score: {}", stats.score),
    }

    Ok(())
}
