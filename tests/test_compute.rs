use dungeon_shooter::compute::*;
use dungeon_shooter::config::*;
use dungeon_shooter::entities::*;
use dungeon_shooter::input::{Command, FrameInput};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn make_state() -> GameState {
    init_state(0, &mut seeded_rng())
}

/// State standing in the combat room with the given enemies.
fn combat_state(enemies: Vec<Enemy>) -> GameState {
    let mut s = make_state();
    s.level.enter(1);
    s.level.room_mut().enemies = enemies;
    s
}

/// Direction of travel in radians.
fn heading(bullet: &Bullet) -> f32 {
    bullet.dy.atan2(bullet.dx)
}

fn idle() -> FrameInput {
    FrameInput::default()
}

// ── init_state / advance_level ───────────────────────────────────────────────

#[test]
fn init_state_starts_in_level_one_start_room() {
    let s = init_state(250, &mut seeded_rng());
    assert_eq!(s.level.number, 1);
    assert_eq!(s.level.current_room, 0);
    assert_eq!((s.player.x, s.player.y), (SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0));
    assert_eq!(s.player.health, PLAYER_MAX_HEALTH);
    assert_eq!(s.player.weapon, Weapon::Pistol);
    assert_eq!(s.high_score, 250);
    assert_eq!(s.score, 0);
    assert_eq!(s.wave, 1);
    assert_eq!(s.kills_this_wave, 0);
    assert_eq!(s.stars.len(), STAR_COUNT);
    assert_eq!(s.status, GameStatus::Playing);
    assert!(!s.paused);
}

#[test]
fn advance_level_builds_next_level_and_keeps_progress() {
    let mut s = make_state();
    s.level.enter(2);
    s.status = GameStatus::LevelComplete;
    s.score = 70;
    s.player.x = 10.0;
    s.player.health = 40;
    s.player.weapon = Weapon::Sniper;

    let s2 = advance_level(&s, &mut seeded_rng());
    assert_eq!(s2.level.number, 2);
    assert_eq!(s2.level.current_room, 0);
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!((s2.player.x, s2.player.y), (SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0));
    assert_eq!(s2.score, 70);
    assert_eq!(s2.player.health, 40);
    assert_eq!(s2.player.weapon, Weapon::Sniper);
}

// ── tick gating ──────────────────────────────────────────────────────────────

#[test]
fn tick_does_nothing_while_paused() {
    let mut s = combat_state(vec![Enemy::new(100.0, 100.0, EnemyKind::Normal)]);
    s.paused = true;
    let moving = FrameInput {
        movement: Movement { left: true, ..Default::default() },
        ..idle()
    };
    let s2 = tick(&s, &moving, 50_000, &mut seeded_rng());
    assert_eq!(s2.frame, s.frame);
    assert_eq!(s2.player, s.player);
    assert_eq!(s2.level.room().enemies, s.level.room().enemies);
    assert!(s2.level.room().powerups.is_empty());
}

#[test]
fn tick_does_nothing_during_level_complete() {
    let mut s = make_state();
    s.status = GameStatus::LevelComplete;
    let s2 = tick(&s, &idle(), 50_000, &mut seeded_rng());
    assert_eq!(s2.frame, s.frame);
    assert_eq!(s2.status, GameStatus::LevelComplete);
}

#[test]
fn tick_does_not_mutate_original() {
    let s = combat_state(vec![Enemy::new(100.0, 100.0, EnemyKind::Normal)]);
    let _ = tick(&s, &idle(), 1000, &mut seeded_rng());
    assert_eq!(s.frame, 0);
    assert_eq!((s.level.room().enemies[0].x, s.level.room().enemies[0].y), (100.0, 100.0));
}

#[test]
fn tick_moves_player() {
    let s = make_state();
    let input = FrameInput {
        movement: Movement { right: true, down: true, ..Default::default() },
        ..idle()
    };
    let s2 = tick(&s, &input, 16, &mut seeded_rng());
    assert_eq!((s2.player.x, s2.player.y), (405.0, 305.0));
    assert_eq!(s2.frame, 1);
}

// ── Enemies ──────────────────────────────────────────────────────────────────

#[test]
fn enemies_pursue_player() {
    let s = combat_state(vec![Enemy::new(100.0, 300.0, EnemyKind::Normal)]);
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    let e = &s2.level.room().enemies[0];
    assert!(e.x > 100.0);
}

#[test]
fn enemy_contact_damages_player_and_removes_enemy() {
    let s = combat_state(vec![
        Enemy::new(395.0, 295.0, EnemyKind::Normal),
        Enemy::new(100.0, 100.0, EnemyKind::Normal),
    ]);
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.player.health, PLAYER_MAX_HEALTH - CONTACT_DAMAGE);
    assert_eq!(s2.level.room().enemies.len(), 1);
    assert_eq!(s2.score, 0);
    assert!(s2.level.room().coins.is_empty());
    assert_eq!(s2.status, GameStatus::Playing);
}

#[test]
fn lethal_contact_ends_the_game() {
    let mut s = combat_state(vec![Enemy::new(395.0, 295.0, EnemyKind::Fast)]);
    s.player.health = CONTACT_DAMAGE;
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.player.health, 0);
    assert_eq!(s2.status, GameStatus::GameOver);
    let s3 = tick(&s2, &idle(), 32, &mut seeded_rng());
    assert_eq!(s3.frame, s2.frame);
}

// ── Bullets ──────────────────────────────────────────────────────────────────

#[test]
fn bullet_kill_scores_drops_coin_and_explodes() {
    let mut s = combat_state(vec![Enemy::new(200.0, 200.0, EnemyKind::Normal)]);
    s.bullets.push(Bullet::new(190.0, 207.0, 300.0, 207.0, 10));
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.bullets.is_empty());
    assert!(s2.level.room().enemies.is_empty());
    assert_eq!(s2.score, KILL_SCORE);
    assert_eq!(s2.level.room().coins.len(), 1);
    assert_eq!(s2.particles.len(), EnemyKind::Normal.explosion_particles());
    assert_eq!(s2.kills_this_wave, 1);
}

#[test]
fn boss_death_emits_bigger_explosion() {
    let mut s = make_state();
    s.level.enter(2);
    s.level.room_mut().enemies[0].health = 1;
    let (bx, by) = s.level.room().enemies[0].center();
    s.bullets.push(Bullet::new(bx, by, bx, by, 10));
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.level.room().enemies.is_empty());
    assert_eq!(s2.particles.len(), EnemyKind::Boss.explosion_particles());
}

#[test]
fn non_lethal_hit_consumes_bullet_without_score() {
    let mut s = make_state();
    s.level.enter(2);
    let (bx, by) = s.level.room().enemies[0].center();
    s.bullets.push(Bullet::new(bx, by, bx, by, 5));
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.bullets.is_empty());
    assert_eq!(s2.level.room().enemies[0].health, EnemyKind::Boss.max_health() - 5);
    assert_eq!(s2.score, 0);
    assert!(s2.particles.is_empty());
}

#[test]
fn bullet_hits_only_one_enemy() {
    let mut s = combat_state(vec![
        Enemy::new(200.0, 200.0, EnemyKind::Normal),
        Enemy::new(200.0, 200.0, EnemyKind::Normal),
    ]);
    let (cx, cy) = s.level.room().enemies[0].center();
    s.bullets.push(Bullet::new(cx, cy, cx, cy, 10));
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.level.room().enemies.len(), 1);
    assert_eq!(s2.score, KILL_SCORE);
}

#[test]
fn off_screen_bullet_is_removed() {
    let mut s = make_state();
    s.bullets.push(Bullet::new(5.0, 300.0, 0.0, 300.0, 10));
    s.bullets.push(Bullet::new(100.0, 300.0, 0.0, 300.0, 10));
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].x, 90.0);
}

#[test]
fn stationary_bullet_stays_forever() {
    let mut s = make_state();
    s.bullets.push(Bullet::new(50.0, 50.0, 50.0, 50.0, 10));
    for frame in 1..=200u64 {
        s = tick(&s, &idle(), frame * 16, &mut seeded_rng());
    }
    assert_eq!(s.bullets.len(), 1);
    assert_eq!((s.bullets[0].x, s.bullets[0].y), (50.0, 50.0));
}

// ── Pickups ──────────────────────────────────────────────────────────────────

#[test]
fn coin_pickup_adds_five() {
    let mut s = make_state();
    let (px, py) = s.player.center();
    s.level.room_mut().coins.push(Coin { x: px, y: py });
    s.level.room_mut().coins.push(Coin { x: 50.0, y: 50.0 });
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.score, COIN_SCORE);
    assert_eq!(s2.level.room().coins.len(), 1);
}

#[test]
fn kill_then_coin_scores_fifteen() {
    let mut s = combat_state(vec![Enemy::new(200.0, 200.0, EnemyKind::Normal)]);
    s.bullets.push(Bullet::new(190.0, 207.0, 300.0, 207.0, 10));
    let mut s = tick(&s, &idle(), 16, &mut seeded_rng());
    let coin = s.level.room().coins[0].clone();
    s.player.x = coin.x - PLAYER_SIZE / 2.0;
    s.player.y = coin.y - PLAYER_SIZE / 2.0;
    let s2 = tick(&s, &idle(), 32, &mut seeded_rng());
    assert_eq!(s2.score, KILL_SCORE + COIN_SCORE);
    assert!(s2.level.room().coins.is_empty());
}

#[test]
fn powerup_pickup_applies_effect() {
    let mut s = make_state();
    s.player.health = 50;
    let (px, py) = s.player.center();
    s.level.room_mut().powerups.push(PowerUp { x: px, y: py, kind: PowerUpKind::Health });
    s.level.room_mut().powerups.push(PowerUp { x: px + 5.0, y: py, kind: PowerUpKind::Speed });
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.player.health, 70);
    assert_eq!(s2.player.speed, PLAYER_SPEED + SPEED_POWERUP_AMOUNT);
    assert!(s2.level.room().powerups.is_empty());
}

#[test]
fn powerup_spawns_every_ten_seconds() {
    let mut s = make_state();
    s.player.health = 50;
    let s2 = tick(&s, &idle(), POWERUP_SPAWN_INTERVAL_MS, &mut seeded_rng());
    assert!(s2.level.room().powerups.is_empty());
    assert_eq!(s2.last_powerup_spawn, 0);

    let now = POWERUP_SPAWN_INTERVAL_MS + 1;
    let s3 = tick(&s2, &idle(), now, &mut seeded_rng());
    assert_eq!(s3.last_powerup_spawn, now);
    let picked_up = s3.player.health > 50 || s3.player.speed > PLAYER_SPEED;
    assert!(s3.level.room().powerups.len() == 1 || picked_up);

    let s4 = tick(&s3, &idle(), now + 5000, &mut seeded_rng());
    assert_eq!(s4.last_powerup_spawn, now);
}

// ── Rooms & levels ───────────────────────────────────────────────────────────

fn stand_on_first_door(s: &mut GameState) {
    let door = s.level.room().doors[0];
    s.player.x = door.x - PLAYER_SIZE / 2.0;
    s.player.y = door.y - PLAYER_SIZE / 2.0;
}

#[test]
fn empty_start_room_clears_then_door_leads_on() {
    let mut s = make_state();
    stand_on_first_door(&mut s);
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.level.room().cleared);
    assert_eq!(s2.level.current_room, 0);

    let s3 = tick(&s2, &idle(), 32, &mut seeded_rng());
    assert_eq!(s3.level.current_room, 1);
    assert_eq!((s3.player.x, s3.player.y), (SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0));
    assert_eq!(s3.level.room().enemies.len(), ENEMIES_PER_ROOM);
    assert_eq!(s3.status, GameStatus::Playing);
}

#[test]
fn door_is_locked_until_room_is_cleared() {
    let mut s = combat_state(vec![Enemy::new(100.0, 100.0, EnemyKind::Armored)]);
    stand_on_first_door(&mut s);
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.level.current_room, 1);
    assert!(!s2.level.room().cleared);
}

#[test]
fn door_needs_player_within_radius() {
    let mut s = make_state();
    s.level.room_mut().cleared = true;
    let door = s.level.room().doors[0];
    s.player.x = door.x - PLAYER_SIZE / 2.0;
    s.player.y = door.y - PLAYER_SIZE / 2.0 - DOOR_RADIUS - 1.0;
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert_eq!(s2.level.current_room, 0);
}

#[test]
fn clearing_combat_room_keeps_playing() {
    let s = combat_state(Vec::new());
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.level.room().cleared);
    assert_eq!(s2.status, GameStatus::Playing);
}

#[test]
fn clearing_boss_room_completes_level() {
    let mut s = make_state();
    s.level.enter(2);
    s.level.room_mut().enemies.clear();
    let s2 = tick(&s, &idle(), 16, &mut seeded_rng());
    assert!(s2.level.room().cleared);
    assert_eq!(s2.status, GameStatus::LevelComplete);
}

// ── Weapons ──────────────────────────────────────────────────────────────────

#[test]
fn pistol_fires_one_bullet_with_muzzle_flash() {
    let s = make_state();
    let s2 = fire(&s, (600.0, 310.0), &mut seeded_rng());
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].damage, 10);
    assert!((s2.bullets[0].dx - BULLET_SPEED).abs() < 1e-5);
    assert_eq!(s2.particles.len(), 5);
}

#[test]
fn shotgun_fires_three_spread_pellets() {
    let mut s = make_state();
    s.player.weapon = Weapon::Shotgun;
    let (cx, cy) = s.player.center();
    let aim = (cx + 100.0, cy + 100.0);
    let base = (aim.1 - cy).atan2(aim.0 - cx);

    let s2 = fire(&s, aim, &mut seeded_rng());
    assert_eq!(s2.bullets.len(), 3);
    for (bullet, offset) in s2.bullets.iter().zip(SHOTGUN_SPREAD) {
        assert_eq!(bullet.damage, 5);
        assert!(
            (heading(bullet) - (base + offset)).abs() < 1e-4,
            "heading {} expected {}",
            heading(bullet),
            base + offset
        );
    }
    assert_eq!(s2.particles.len(), 10);
}

#[test]
fn sniper_fires_heavy_bullet() {
    let mut s = make_state();
    s.player.weapon = Weapon::Sniper;
    let s2 = fire(&s, (0.0, 0.0), &mut seeded_rng());
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].damage, 50);
    assert_eq!(s2.particles.len(), 3);
    assert!(s2.particles.iter().all(|p| p.lifetime == 40));
}

#[test]
fn machine_gun_click_fires_nothing() {
    let mut s = make_state();
    s.player.weapon = Weapon::MachineGun;
    let s2 = fire(&s, (0.0, 0.0), &mut seeded_rng());
    assert!(s2.bullets.is_empty());
}

#[test]
fn firing_is_ignored_while_paused() {
    let mut s = make_state();
    s.paused = true;
    let s2 = fire(&s, (0.0, 0.0), &mut seeded_rng());
    assert!(s2.bullets.is_empty());
}

/// Hold the trigger with the aim on the player so bullets never leave the
/// screen, and record each time the machine gun fires.
fn hold_machine_gun(step_ms: u64, duration_ms: u64) -> Vec<u64> {
    let mut s = make_state();
    s.player.weapon = Weapon::MachineGun;
    let input = FrameInput {
        fire_held: true,
        aim: s.player.center(),
        ..idle()
    };
    let mut rng = seeded_rng();
    let mut fired = Vec::new();
    let mut now = 0;
    while now <= duration_ms {
        let before = s.bullets.len();
        s = tick(&s, &input, now, &mut rng);
        if s.bullets.len() > before {
            fired.push(now);
        }
        now += step_ms;
    }
    fired
}

#[test]
fn machine_gun_is_rate_limited() {
    for step in [1, 16, 33, 250] {
        let fired = hold_machine_gun(step, 2000);
        assert!(!fired.is_empty());
        assert!(fired.len() as u64 <= 2000 / MACHINE_GUN_INTERVAL_MS);
        for pair in fired.windows(2) {
            assert!(pair[1] - pair[0] > MACHINE_GUN_INTERVAL_MS, "step {}", step);
        }
    }
}

#[test]
fn machine_gun_needs_button_held() {
    let mut s = make_state();
    s.player.weapon = Weapon::MachineGun;
    let s2 = tick(&s, &idle(), 5000, &mut seeded_rng());
    assert!(s2.bullets.is_empty());
}

// ── Commands ─────────────────────────────────────────────────────────────────

#[test]
fn weapon_cycle_and_pause_work_while_paused() {
    let s = make_state();
    let s = apply_command(&s, Command::TogglePause, (0.0, 0.0), 0, &mut seeded_rng());
    assert!(s.paused);
    let s = apply_command(&s, Command::CycleWeapon, (0.0, 0.0), 0, &mut seeded_rng());
    assert_eq!(s.player.weapon, Weapon::Shotgun);
    let s = apply_command(&s, Command::TogglePause, (0.0, 0.0), 0, &mut seeded_rng());
    assert!(!s.paused);
}

#[test]
fn fire_command_uses_aim() {
    let s = make_state();
    let s2 = apply_command(&s, Command::Fire, (410.0, 0.0), 0, &mut seeded_rng());
    assert_eq!(s2.bullets.len(), 1);
    assert!((s2.bullets[0].dy + BULLET_SPEED).abs() < 1e-5);
}

// ── Sword ────────────────────────────────────────────────────────────────────

#[test]
fn sword_kills_nearby_enemies_only() {
    let s = combat_state(vec![
        Enemy::new(420.0, 300.0, EnemyKind::Armored),
        Enemy::new(100.0, 100.0, EnemyKind::Normal),
    ]);
    let s2 = sword_slash(&s, 5000, &mut seeded_rng());
    assert_eq!(s2.level.room().enemies.len(), 1);
    assert_eq!(s2.level.room().enemies[0].x, 100.0);
    assert_eq!(s2.score, KILL_SCORE);
    assert_eq!(s2.level.room().coins.len(), 1);
    assert_eq!(s2.player.last_sword_time, 5000);
    assert_eq!(s2.particles.len(), 10);
}

#[test]
fn sword_respects_cooldown() {
    let s = combat_state(vec![Enemy::new(100.0, 100.0, EnemyKind::Normal)]);
    let s2 = sword_slash(&s, 5000, &mut seeded_rng());
    assert_eq!(s2.player.last_sword_time, 5000);

    let mut s3 = s2.clone();
    s3.level.room_mut().enemies = vec![Enemy::new(420.0, 300.0, EnemyKind::Normal)];
    let s4 = sword_slash(&s3, 5000 + SWORD_COOLDOWN_MS, &mut seeded_rng());
    assert_eq!(s4.level.room().enemies.len(), 1);
    assert_eq!(s4.player.last_sword_time, 5000);
    assert_eq!(s4.particles.len(), s3.particles.len());

    let s5 = sword_slash(&s3, 5001 + SWORD_COOLDOWN_MS, &mut seeded_rng());
    assert!(s5.level.room().enemies.is_empty());
}

#[test]
fn sword_command_through_apply_command() {
    let s = combat_state(vec![Enemy::new(420.0, 300.0, EnemyKind::Tanky)]);
    let s2 = apply_command(&s, Command::Sword, (0.0, 0.0), 3000, &mut seeded_rng());
    assert!(s2.level.room().enemies.is_empty());
}

// ── Waves ────────────────────────────────────────────────────────────────────

#[test]
fn tenth_kill_advances_wave() {
    let mut s = combat_state(vec![Enemy::new(420.0, 300.0, EnemyKind::Normal)]);
    s.kills_this_wave = KILLS_PER_WAVE - 1;
    let s2 = sword_slash(&s, 5000, &mut seeded_rng());
    assert_eq!(s2.wave, 2);
    assert_eq!(s2.kills_this_wave, 0);
    assert_eq!(
        s2.enemy_spawn_interval_ms,
        INITIAL_ENEMY_SPAWN_INTERVAL_MS - ENEMY_SPAWN_INTERVAL_STEP_MS
    );
}

#[test]
fn spawn_interval_is_floored() {
    let mut s = combat_state(vec![Enemy::new(420.0, 300.0, EnemyKind::Normal)]);
    s.kills_this_wave = KILLS_PER_WAVE - 1;
    s.enemy_spawn_interval_ms = MIN_ENEMY_SPAWN_INTERVAL_MS + 100;
    let s2 = sword_slash(&s, 5000, &mut seeded_rng());
    assert_eq!(s2.enemy_spawn_interval_ms, MIN_ENEMY_SPAWN_INTERVAL_MS);
}

#[test]
fn no_reinforcements_in_first_wave() {
    let mut s = combat_state(vec![Enemy::new(700.0, 500.0, EnemyKind::Armored)]);
    s.player.x = 0.0;
    s.player.y = 0.0;
    let s2 = tick(&s, &idle(), 5000, &mut seeded_rng());
    assert_eq!(s2.level.room().enemies.len(), 1);
}

#[test]
fn later_waves_send_limited_reinforcements() {
    let mut s = combat_state(vec![Enemy::new(700.0, 500.0, EnemyKind::Armored)]);
    s.player.x = 0.0;
    s.player.y = 0.0;
    s.wave = 2;

    let s2 = tick(&s, &idle(), 5000, &mut seeded_rng());
    assert_eq!(s2.level.room().enemies.len(), 2);
    assert_eq!(s2.level.room().reinforcements, 1);
    assert_eq!(s2.last_enemy_spawn, 5000);

    let s3 = tick(&s2, &idle(), 9000, &mut seeded_rng());
    assert_eq!(s3.level.room().enemies.len(), 2);
}

#[test]
fn reinforcements_wait_for_the_spawn_interval() {
    let mut s = combat_state(vec![Enemy::new(700.0, 500.0, EnemyKind::Armored)]);
    s.player.x = 0.0;
    s.player.y = 0.0;
    s.wave = 4;

    let s2 = tick(&s, &idle(), 5000, &mut seeded_rng());
    assert_eq!(s2.level.room().enemies.len(), 2);

    let s3 = tick(&s2, &idle(), 5100, &mut seeded_rng());
    assert_eq!(s3.level.room().enemies.len(), 2);

    let s4 = tick(&s3, &idle(), 7001, &mut seeded_rng());
    assert_eq!(s4.level.room().enemies.len(), 3);
    assert_eq!(s4.last_enemy_spawn, 7001);

    // A sword kill completes the wave and shortens the interval.
    let mut s5 = s4.clone();
    s5.kills_this_wave = KILLS_PER_WAVE - 1;
    s5.level
        .room_mut()
        .enemies
        .push(Enemy::new(20.0, 20.0, EnemyKind::Normal));
    let s6 = sword_slash(&s5, 7100, &mut seeded_rng());
    assert_eq!(s6.wave, 5);
    assert_eq!(
        s6.enemy_spawn_interval_ms,
        INITIAL_ENEMY_SPAWN_INTERVAL_MS - ENEMY_SPAWN_INTERVAL_STEP_MS
    );
    assert_eq!(s6.level.room().enemies.len(), 3);

    // 1899ms since the last spawn: too early for the old interval, due for the new one.
    let s7 = tick(&s6, &idle(), 8900, &mut seeded_rng());
    assert_eq!(s7.level.room().enemies.len(), 4);
    assert_eq!(s7.level.room().reinforcements, 3);
}

#[test]
fn boss_room_gets_no_reinforcements() {
    let mut s = make_state();
    s.level.enter(2);
    s.player.x = 0.0;
    s.player.y = 500.0;
    s.wave = 5;
    let s2 = tick(&s, &idle(), 5000, &mut seeded_rng());
    assert_eq!(s2.level.room().enemies.len(), 1);
}
