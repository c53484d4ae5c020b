//! Gameplay constants and command-line settings.

use std::path::PathBuf;

use clap::Parser;

// ── World ─────────────────────────────────────────────────────────────────────

/// Logical play-field width in world units.
pub const SCREEN_WIDTH: f32 = 800.0;

/// Logical play-field height in world units.
pub const SCREEN_HEIGHT: f32 = 600.0;

pub const DEFAULT_FPS: u32 = 60;

pub const STAR_COUNT: usize = 100;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: f32 = 20.0;
pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_MAX_HEALTH: u32 = 100;

/// Damage taken when an enemy touches the player.
pub const CONTACT_DAMAGE: u32 = 10;

// ── Sword ─────────────────────────────────────────────────────────────────────

pub const SWORD_COOLDOWN_MS: u64 = 2000;
pub const SWORD_RANGE: f32 = 50.0;
pub const SWORD_DAMAGE: i32 = 50;

// ── Projectiles & pickups ─────────────────────────────────────────────────────

pub const BULLET_SPEED: f32 = 10.0;

/// Half-extent of a bullet's hit box.
pub const BULLET_SIZE: f32 = 5.0;

/// Half-extent of a coin's hit box.
pub const COIN_SIZE: f32 = 8.0;

/// Half-extent of a power-up's hit box.
pub const POWERUP_SIZE: f32 = 10.0;

pub const SHOTGUN_SPREAD: [f32; 3] = [-0.2, 0.0, 0.2];

/// Distance from the player centre at which shotgun pellets are aimed.
pub const SHOTGUN_AIM_DISTANCE: f32 = 100.0;

pub const MACHINE_GUN_INTERVAL_MS: u64 = 100;

pub const POWERUP_SPAWN_INTERVAL_MS: u64 = 10_000;
pub const HEALTH_POWERUP_AMOUNT: u32 = 20;
pub const SPEED_POWERUP_AMOUNT: f32 = 1.0;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_SPEED: f32 = 2.0;
pub const ENEMY_SIZE: f32 = 15.0;
pub const ENEMIES_PER_ROOM: usize = 5;

/// Relative spawn weights of normal, fast, tanky and armored enemies.
pub const ENEMY_KIND_WEIGHTS: [u32; 4] = [5, 3, 2, 1];

// ── Scoring ───────────────────────────────────────────────────────────────────

pub const KILL_SCORE: u32 = 10;
pub const COIN_SCORE: u32 = 5;

// ── Rooms & progression ───────────────────────────────────────────────────────

/// Player centre must be closer than this to a door to walk through it.
pub const DOOR_RADIUS: f32 = 50.0;

/// Distance of exit doors above the bottom edge.
pub const DOOR_BOTTOM_OFFSET: f32 = 50.0;

pub const LEVEL_COMPLETE_PAUSE_MS: u64 = 2000;
pub const GAME_OVER_PAUSE_MS: u64 = 3000;

// ── Waves ─────────────────────────────────────────────────────────────────────

pub const KILLS_PER_WAVE: u32 = 10;
pub const INITIAL_ENEMY_SPAWN_INTERVAL_MS: u64 = 2000;
pub const ENEMY_SPAWN_INTERVAL_STEP_MS: u64 = 200;
pub const MIN_ENEMY_SPAWN_INTERVAL_MS: u64 = 500;

// ── Command line ──────────────────────────────────────────────────────────────

/// Runtime settings supplied on the command line.
#[derive(Parser, Debug, Clone)]
#[command(name = "dungeon_shooter", about = "Top-down room-clearing shooter for the terminal")]
pub struct Settings {
    /// File holding the persisted high score.
    #[arg(long, value_name = "PATH")]
    pub high_score_file: Option<PathBuf>,

    /// Seed for the random number generator (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target frames per second.
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,
}

impl Settings {
    /// Resolved high-score path, falling back to a dotfile in `$HOME`.
    pub fn high_score_path(&self) -> PathBuf {
        self.high_score_file.clone().unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".dungeon_shooter_score")
        })
    }
}
