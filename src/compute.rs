//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! [`GameState`] (plus the frame's input, a millisecond timestamp and, where
//! needed, an RNG handle) and returns a brand-new `GameState`. Side effects are
//! limited to the injected RNG and log output.
//!
//! Timestamps are milliseconds on a monotonic clock that starts at zero when
//! the game starts.

use std::f32::consts::TAU;

use rand::Rng;

use crate::config::{
    CONTACT_DAMAGE, COIN_SCORE, DOOR_RADIUS, ENEMY_SPAWN_INTERVAL_STEP_MS,
    INITIAL_ENEMY_SPAWN_INTERVAL_MS, KILLS_PER_WAVE, KILL_SCORE, MACHINE_GUN_INTERVAL_MS,
    MIN_ENEMY_SPAWN_INTERVAL_MS, POWERUP_SPAWN_INTERVAL_MS, SCREEN_HEIGHT, SCREEN_WIDTH,
    SHOTGUN_AIM_DISTANCE, SHOTGUN_SPREAD, STAR_COUNT, SWORD_DAMAGE, SWORD_RANGE,
};
use crate::entities::{
    distance, Bullet, Coin, Enemy, EnemyKind, Particle, Player, PowerUp, PowerUpKind, Rgb,
    Weapon, ORANGE, PURPLE, RED, YELLOW,
};
use crate::input::{Command, FrameInput};
use crate::room::{pick_enemy_kind, random_enemy_position, Level};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// The boss room was just cleared; the next level is built after a pause.
    LevelComplete,
    GameOver,
}

/// The entire game state. Cloneable so update functions can return a new
/// copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub level: Level,
    /// Bullets and particles belong to the loop, not to any room.
    pub bullets: Vec<Bullet>,
    pub particles: Vec<Particle>,
    /// Background starfield, fixed for the whole game.
    pub stars: Vec<(f32, f32)>,
    pub score: u32,
    /// Best score stored on disk when the game started.
    pub high_score: u32,
    pub status: GameStatus,
    pub paused: bool,
    pub frame: u64,
    pub last_powerup_spawn: u64,
    pub last_machine_gun_time: u64,
    pub wave: u32,
    pub kills_this_wave: u32,
    pub enemy_spawn_interval_ms: u64,
    pub last_enemy_spawn: u64,
}

impl GameState {
    /// Count a kill towards the current wave, escalating when it fills up.
    fn record_wave_kill(&mut self) {
        self.kills_this_wave += 1;
        if self.kills_this_wave >= KILLS_PER_WAVE {
            self.wave += 1;
            self.kills_this_wave = 0;
            self.enemy_spawn_interval_ms = self
                .enemy_spawn_interval_ms
                .saturating_sub(ENEMY_SPAWN_INTERVAL_STEP_MS)
                .max(MIN_ENEMY_SPAWN_INTERVAL_MS);
            log::info!(
                "wave {} reached, reinforcements every {}ms",
                self.wave,
                self.enemy_spawn_interval_ms
            );
        }
    }

    /// Score a dead enemy and drop a coin at its centre.
    fn register_kill(&mut self, enemy: &Enemy) {
        let (cx, cy) = enemy.center();
        self.score += KILL_SCORE;
        self.level.room_mut().coins.push(Coin { x: cx, y: cy });
        self.record_wave_kill();
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

fn screen_center() -> (f32, f32) {
    (SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}

/// Build the initial game state: level 1, player in the middle of the start room.
pub fn init_state(high_score: u32, rng: &mut impl Rng) -> GameState {
    let (px, py) = screen_center();
    let stars = (0..STAR_COUNT)
        .map(|_| {
            (
                rng.gen_range(0..=SCREEN_WIDTH as u32) as f32,
                rng.gen_range(0..=SCREEN_HEIGHT as u32) as f32,
            )
        })
        .collect();
    let level = Level::generate(1, rng);
    log::info!("level {} started", level.number);

    GameState {
        player: Player::new(px, py),
        level,
        bullets: Vec::new(),
        particles: Vec::new(),
        stars,
        score: 0,
        high_score,
        status: GameStatus::Playing,
        paused: false,
        frame: 0,
        last_powerup_spawn: 0,
        last_machine_gun_time: 0,
        wave: 1,
        kills_this_wave: 0,
        enemy_spawn_interval_ms: INITIAL_ENEMY_SPAWN_INTERVAL_MS,
        last_enemy_spawn: 0,
    }
}

/// Replace the finished level with the next one and recentre the player.
/// Health, speed, weapon, score and waves carry over.
pub fn advance_level(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.level = Level::generate(state.level.number + 1, rng);
    let (px, py) = screen_center();
    next.player.x = px;
    next.player.y = py;
    next.status = GameStatus::Playing;
    log::info!("level {} started", next.level.number);
    next
}

// ── Particle bursts ──────────────────────────────────────────────────────────

/// Spray `count` particles from `(x, y)` in random directions.
fn burst(
    particles: &mut Vec<Particle>,
    rng: &mut impl Rng,
    (x, y): (f32, f32),
    count: usize,
    (min_speed, max_speed): (f32, f32),
    color: Rgb,
    lifetime: u32,
) {
    for _ in 0..count {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(min_speed..max_speed);
        particles.push(Particle::new(
            x,
            y,
            angle.cos() * speed,
            angle.sin() * speed,
            color,
            lifetime,
        ));
    }
}

// ── Input-driven state transitions ───────────────────────────────────────────

fn accepts_actions(state: &GameState) -> bool {
    !state.paused && state.status == GameStatus::Playing
}

/// Apply a one-shot command. Fire and sword are ignored while paused or while
/// an overlay is being held on screen; `Quit` is handled by the caller.
pub fn apply_command(
    state: &GameState,
    command: Command,
    aim: (f32, f32),
    now_ms: u64,
    rng: &mut impl Rng,
) -> GameState {
    match command {
        Command::CycleWeapon => {
            let mut next = state.clone();
            next.player.cycle_weapon();
            log::debug!("weapon switched to {}", next.player.weapon.name());
            next
        }
        Command::TogglePause => {
            let mut next = state.clone();
            next.paused = !next.paused;
            log::debug!("paused: {}", next.paused);
            next
        }
        Command::Sword => sword_slash(state, now_ms, rng),
        Command::Fire => fire(state, aim, rng),
        Command::Quit => state.clone(),
    }
}

/// Fire the selected weapon once at `aim`. The machine gun fires from
/// [`tick`] while the button is held, so a click does nothing for it.
pub fn fire(state: &GameState, aim: (f32, f32), rng: &mut impl Rng) -> GameState {
    if !accepts_actions(state) {
        return state.clone();
    }
    let mut next = state.clone();
    let origin = next.player.center();
    let (ox, oy) = origin;
    let weapon = next.player.weapon;

    match weapon {
        Weapon::Pistol => {
            next.bullets.push(Bullet::new(ox, oy, aim.0, aim.1, weapon.damage()));
            burst(&mut next.particles, rng, origin, 5, (0.5, 2.0), YELLOW, 20);
        }
        Weapon::Shotgun => {
            let base = (aim.1 - oy).atan2(aim.0 - ox);
            for offset in SHOTGUN_SPREAD {
                let angle = base + offset;
                let tx = ox + angle.cos() * SHOTGUN_AIM_DISTANCE;
                let ty = oy + angle.sin() * SHOTGUN_AIM_DISTANCE;
                next.bullets.push(Bullet::new(ox, oy, tx, ty, weapon.damage()));
            }
            burst(&mut next.particles, rng, origin, 10, (1.0, 3.0), ORANGE, 30);
        }
        Weapon::MachineGun => {}
        Weapon::Sniper => {
            next.bullets.push(Bullet::new(ox, oy, aim.0, aim.1, weapon.damage()));
            burst(&mut next.particles, rng, origin, 3, (0.5, 1.5), PURPLE, 40);
        }
    }
    next
}

/// Melee slash around the player. Silently ignored during the cooldown.
pub fn sword_slash(state: &GameState, now_ms: u64, rng: &mut impl Rng) -> GameState {
    if !accepts_actions(state) || !state.player.sword_ready(now_ms) {
        return state.clone();
    }
    let mut next = state.clone();
    next.player.last_sword_time = now_ms;
    let (px, py) = next.player.center();

    let mut killed: Vec<usize> = Vec::new();
    for (ei, enemy) in next.level.room_mut().enemies.iter_mut().enumerate() {
        let (ex, ey) = enemy.center();
        if distance(px, py, ex, ey) < SWORD_RANGE {
            enemy.health -= SWORD_DAMAGE;
            if enemy.health <= 0 {
                killed.push(ei);
            }
        }
    }

    let dead = compact(&mut next.level.room_mut().enemies, &killed);
    for enemy in &dead {
        next.register_kill(enemy);
    }
    log::debug!("sword slash killed {} enemies", dead.len());

    burst(&mut next.particles, rng, (px, py), 10, (1.0, 3.0), ORANGE, 30);
    next
}

/// Remove the entries at `indices` (ascending, unique) and return them in order.
fn compact<T>(items: &mut Vec<T>, indices: &[usize]) -> Vec<T> {
    let mut removed = Vec::with_capacity(indices.len());
    for &i in indices.iter().rev() {
        removed.push(items.remove(i));
    }
    removed.reverse();
    removed
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame. All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Nothing changes while paused or while a level-complete or game-over
/// overlay is showing.
pub fn tick(
    state: &GameState,
    input: &FrameInput,
    now_ms: u64,
    rng: &mut impl Rng,
) -> GameState {
    if !accepts_actions(state) {
        return state.clone();
    }
    let mut next = state.clone();
    next.frame += 1;

    // ── 1. Player movement ───────────────────────────────────────────────────
    next.player.step(&input.movement);

    // ── 2. Periodic power-up ─────────────────────────────────────────────────
    if now_ms.saturating_sub(next.last_powerup_spawn) > POWERUP_SPAWN_INTERVAL_MS {
        let x = rng.gen_range(0..=SCREEN_WIDTH as u32) as f32;
        let y = rng.gen_range(0..=SCREEN_HEIGHT as u32) as f32;
        let kind = if rng.gen_bool(0.5) {
            PowerUpKind::Health
        } else {
            PowerUpKind::Speed
        };
        next.level.room_mut().powerups.push(PowerUp { x, y, kind });
        next.last_powerup_spawn = now_ms;
    }

    // ── 3. Wave reinforcements ───────────────────────────────────────────────
    spawn_reinforcement(&mut next, now_ms, rng);

    // ── 4. Enemies pursue the player; contact is a suicide attack ────────────
    let (px, py) = next.player.center();
    let player_box = next.player.bounds();
    let mut rammed: Vec<usize> = Vec::new();
    for (ei, enemy) in next.level.room_mut().enemies.iter_mut().enumerate() {
        enemy.move_towards(px, py);
        if enemy.bounds().overlaps(&player_box) {
            rammed.push(ei);
        }
    }
    compact(&mut next.level.room_mut().enemies, &rammed);
    for _ in &rammed {
        next.player.take_damage(CONTACT_DAMAGE);
    }
    if next.player.is_dead() {
        next.status = GameStatus::GameOver;
        log::info!("player died on level {} with score {}", next.level.number, next.score);
        return next;
    }

    // ── 5. Bullets move and hit enemies ──────────────────────────────────────
    resolve_bullets(&mut next, rng);

    // ── 6. Machine gun, rate limited while the button is held ────────────────
    if next.player.weapon == Weapon::MachineGun
        && input.fire_held
        && now_ms.saturating_sub(next.last_machine_gun_time) > MACHINE_GUN_INTERVAL_MS
    {
        let origin = next.player.center();
        next.bullets.push(Bullet::new(
            origin.0,
            origin.1,
            input.aim.0,
            input.aim.1,
            Weapon::MachineGun.damage(),
        ));
        next.last_machine_gun_time = now_ms;
        burst(&mut next.particles, rng, origin, 3, (0.5, 1.5), RED, 15);
    }

    // ── 7. Pickups ───────────────────────────────────────────────────────────
    collect_pickups(&mut next);

    // ── 8. Room clear and door transitions ───────────────────────────────────
    update_room(&mut next, now_ms);

    // ── 9. Particles ─────────────────────────────────────────────────────────
    for particle in next.particles.iter_mut() {
        particle.update();
    }
    next.particles.retain(|p| !p.is_expired());

    next
}

fn spawn_reinforcement(state: &mut GameState, now_ms: u64, rng: &mut impl Rng) {
    let allowance = state.wave.saturating_sub(1);
    let due = now_ms.saturating_sub(state.last_enemy_spawn) > state.enemy_spawn_interval_ms;
    let room = state.level.room();
    if !due
        || !room.accepts_reinforcements()
        || room.enemies.is_empty()
        || room.reinforcements >= allowance
    {
        return;
    }
    let (x, y) = random_enemy_position(rng);
    let kind = pick_enemy_kind(rng);
    let room = state.level.room_mut();
    room.enemies.push(Enemy::new(x, y, kind));
    room.reinforcements += 1;
    state.last_enemy_spawn = now_ms;
    log::debug!("reinforcement {:?} entered room {}", kind, room.id);
}

/// Move every bullet, drop those that left the screen, and apply hits.
/// Removals are collected during the scan and applied afterwards.
fn resolve_bullets(state: &mut GameState, rng: &mut impl Rng) {
    let mut spent: Vec<usize> = Vec::new();
    let mut killed: Vec<usize> = Vec::new();

    {
        let enemies = &mut state.level.room_mut().enemies;
        for (bi, bullet) in state.bullets.iter_mut().enumerate() {
            bullet.step();
            if bullet.is_off_screen() {
                spent.push(bi);
                continue;
            }
            let bullet_box = bullet.bounds();
            let target = enemies
                .iter()
                .enumerate()
                .find(|(ei, e)| !killed.contains(ei) && e.bounds().overlaps(&bullet_box))
                .map(|(ei, _)| ei);
            if let Some(ei) = target {
                spent.push(bi);
                enemies[ei].health -= bullet.damage;
                if enemies[ei].health <= 0 {
                    killed.push(ei);
                }
            }
        }
    }

    compact(&mut state.bullets, &spent);

    killed.sort_unstable();
    let dead = compact(&mut state.level.room_mut().enemies, &killed);
    for enemy in &dead {
        state.register_kill(enemy);
        burst(
            &mut state.particles,
            rng,
            enemy.center(),
            enemy.kind.explosion_particles(),
            (1.0, 4.0),
            ORANGE,
            40,
        );
        if enemy.kind == EnemyKind::Boss {
            log::info!("boss of level {} destroyed", state.level.number);
        }
    }
}

fn collect_pickups(state: &mut GameState) {
    let player_box = state.player.bounds();
    let room = state.level.room_mut();

    let before = room.coins.len();
    room.coins.retain(|c| !c.bounds().overlaps(&player_box));
    let coins = (before - room.coins.len()) as u32;

    let (taken, kept): (Vec<PowerUp>, Vec<PowerUp>) = room
        .powerups
        .drain(..)
        .partition(|p| p.bounds().overlaps(&player_box));
    room.powerups = kept;

    state.score += coins * COIN_SCORE;
    for powerup in &taken {
        powerup.apply(&mut state.player);
        log::debug!("picked up {:?} power-up", powerup.kind);
    }
}

fn update_room(state: &mut GameState, now_ms: u64) {
    if state.level.room().cleared {
        let (px, py) = state.player.center();
        let door = state
            .level
            .room()
            .doors
            .iter()
            .find(|d| distance(px, py, d.x, d.y) < DOOR_RADIUS)
            .copied();
        if let Some(door) = door {
            if state.level.enter(door.target) {
                let (cx, cy) = screen_center();
                state.player.x = cx;
                state.player.y = cy;
                state.last_enemy_spawn = now_ms;
                log::info!(
                    "entered room {} of level {}",
                    door.target,
                    state.level.number
                );
            }
        }
    } else if state.level.room_mut().check_cleared() {
        log::info!("room {} cleared", state.level.room().id);
        if state.level.room().is_boss() {
            state.status = GameStatus::LevelComplete;
            log::info!("level {} complete", state.level.number);
        }
    }
}
