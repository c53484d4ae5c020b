//! Game entity types with their per-type attribute tables and movement.
//!
//! Positions are world units with `(0, 0)` at the top-left of the play field.
//! Player and enemy positions are the top-left corner of their bounding box;
//! bullets, coins, power-ups and particles are positioned by their centre.

use crate::config::{
    BULLET_SIZE, BULLET_SPEED, COIN_SIZE, ENEMY_SIZE, ENEMY_SPEED, HEALTH_POWERUP_AMOUNT,
    PLAYER_MAX_HEALTH, PLAYER_SIZE, PLAYER_SPEED, POWERUP_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH,
    SPEED_POWERUP_AMOUNT, SWORD_COOLDOWN_MS,
};

/// 24-bit colour, converted to a terminal colour by the renderer.
pub type Rgb = (u8, u8, u8);

pub const WHITE: Rgb = (255, 255, 255);
pub const RED: Rgb = (255, 0, 0);
pub const GREEN: Rgb = (0, 255, 0);
pub const BLUE: Rgb = (0, 0, 255);
pub const YELLOW: Rgb = (255, 255, 0);
pub const PURPLE: Rgb = (128, 0, 128);
pub const ORANGE: Rgb = (255, 165, 0);

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of half-extent `half` around a centre point.
    pub fn around(cx: f32, cy: f32, half: f32) -> Self {
        Self::new(cx - half, cy - half, half * 2.0, half * 2.0)
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

pub fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = bx - ax;
    let dy = by - ay;
    (dx * dx + dy * dy).sqrt()
}

/// Unit vector from `a` towards `b`, or `(0, 0)` when the points coincide.
pub fn direction(ax: f32, ay: f32, bx: f32, by: f32) -> (f32, f32) {
    let dist = distance(ax, ay, bx, by);
    if dist > 0.0 {
        ((bx - ax) / dist, (by - ay) / dist)
    } else {
        (0.0, 0.0)
    }
}

// ── Weapons ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weapon {
    Pistol,
    Shotgun,
    MachineGun,
    Sniper,
}

impl Weapon {
    pub const ALL: [Weapon; 4] = [
        Weapon::Pistol,
        Weapon::Shotgun,
        Weapon::MachineGun,
        Weapon::Sniper,
    ];

    /// The next weapon in the fixed cycle, wrapping after the sniper.
    pub fn next(self) -> Weapon {
        Weapon::ALL[(self.index() + 1) % Weapon::ALL.len()]
    }

    pub fn index(self) -> usize {
        match self {
            Weapon::Pistol => 0,
            Weapon::Shotgun => 1,
            Weapon::MachineGun => 2,
            Weapon::Sniper => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weapon::Pistol => "Pistol",
            Weapon::Shotgun => "Shotgun",
            Weapon::MachineGun => "Machine Gun",
            Weapon::Sniper => "Sniper",
        }
    }

    /// Damage dealt by each bullet this weapon fires.
    pub fn damage(self) -> i32 {
        match self {
            Weapon::Pistol => 10,
            Weapon::Shotgun => 5,
            Weapon::MachineGun => 5,
            Weapon::Sniper => 50,
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Directions held during one frame. Opposite directions cancel out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub health: u32,
    pub max_health: u32,
    pub speed: f32,
    pub weapon: Weapon,
    /// Timestamp (ms) of the last successful sword slash.
    pub last_sword_time: u64,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            speed: PLAYER_SPEED,
            weapon: Weapon::Pistol,
            last_sword_time: 0,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + PLAYER_SIZE / 2.0, self.y + PLAYER_SIZE / 2.0)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Apply one frame of movement, then clamp into the play field.
    ///
    /// Diagonals are not normalised, so they cover √2 times the distance.
    pub fn step(&mut self, movement: &Movement) {
        if movement.left {
            self.x -= self.speed;
        }
        if movement.right {
            self.x += self.speed;
        }
        if movement.up {
            self.y -= self.speed;
        }
        if movement.down {
            self.y += self.speed;
        }
        self.x = self.x.clamp(0.0, SCREEN_WIDTH - PLAYER_SIZE);
        self.y = self.y.clamp(0.0, SCREEN_HEIGHT - PLAYER_SIZE);
    }

    pub fn cycle_weapon(&mut self) {
        self.weapon = self.weapon.next();
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub fn sword_ready(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_sword_time) > SWORD_COOLDOWN_MS
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(self.max_health);
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Normal,
    Fast,
    Tanky,
    Armored,
    Boss,
}

impl EnemyKind {
    /// Kinds that appear in ordinary enemy rooms, in weight-table order.
    pub const REGULAR: [EnemyKind; 4] = [
        EnemyKind::Normal,
        EnemyKind::Fast,
        EnemyKind::Tanky,
        EnemyKind::Armored,
    ];

    pub fn speed(self) -> f32 {
        ENEMY_SPEED
            * match self {
                EnemyKind::Normal => 1.0,
                EnemyKind::Fast => 1.5,
                EnemyKind::Tanky => 0.7,
                EnemyKind::Armored => 0.5,
                EnemyKind::Boss => 0.3,
            }
    }

    pub fn size(self) -> f32 {
        match self {
            EnemyKind::Normal => ENEMY_SIZE,
            EnemyKind::Fast => ENEMY_SIZE - 3.0,
            EnemyKind::Tanky => ENEMY_SIZE + 5.0,
            EnemyKind::Armored => ENEMY_SIZE + 3.0,
            EnemyKind::Boss => ENEMY_SIZE + 10.0,
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            EnemyKind::Normal => RED,
            EnemyKind::Fast => (255, 100, 100),
            EnemyKind::Tanky => GREEN,
            EnemyKind::Armored => (100, 100, 100),
            EnemyKind::Boss => PURPLE,
        }
    }

    pub fn max_health(self) -> i32 {
        match self {
            EnemyKind::Normal | EnemyKind::Fast => 1,
            EnemyKind::Tanky => 2,
            EnemyKind::Armored => 3,
            EnemyKind::Boss => 10,
        }
    }

    /// Number of particles in the death explosion.
    pub fn explosion_particles(self) -> usize {
        match self {
            EnemyKind::Boss => 20,
            _ => 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
    pub health: i32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, kind: EnemyKind) -> Self {
        Self {
            x,
            y,
            kind,
            health: kind.max_health(),
        }
    }

    pub fn size(&self) -> f32 {
        self.kind.size()
    }

    pub fn center(&self) -> (f32, f32) {
        let half = self.size() / 2.0;
        (self.x + half, self.y + half)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.size(), self.size())
    }

    /// Remaining health as a fraction of the kind's maximum, for health bars.
    pub fn health_fraction(&self) -> f32 {
        (self.health.max(0) as f32 / self.kind.max_health() as f32).min(1.0)
    }

    /// Step towards `target` at the kind's speed. No movement at zero distance.
    pub fn move_towards(&mut self, target_x: f32, target_y: f32) {
        let (cx, cy) = self.center();
        let (ux, uy) = direction(cx, cy, target_x, target_y);
        let speed = self.kind.speed();
        self.x += ux * speed;
        self.y += uy * speed;
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub damage: i32,
}

impl Bullet {
    /// Bullet travelling from `(x, y)` towards the aim point at constant
    /// speed. Aiming at the origin itself yields a stationary bullet.
    pub fn new(x: f32, y: f32, target_x: f32, target_y: f32, damage: i32) -> Self {
        let (ux, uy) = direction(x, y, target_x, target_y);
        Self {
            x,
            y,
            dx: ux * BULLET_SPEED,
            dy: uy * BULLET_SPEED,
            damage,
        }
    }

    pub fn step(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }

    pub fn is_off_screen(&self) -> bool {
        self.x < 0.0 || self.x > SCREEN_WIDTH || self.y < 0.0 || self.y > SCREEN_HEIGHT
    }

    pub fn bounds(&self) -> Rect {
        Rect::around(self.x, self.y, BULLET_SIZE)
    }
}

// ── Pickups ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
}

impl Coin {
    pub fn bounds(&self) -> Rect {
        Rect::around(self.x, self.y, COIN_SIZE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    Health,
    Speed,
}

impl PowerUpKind {
    pub fn color(self) -> Rgb {
        match self {
            PowerUpKind::Health => GREEN,
            PowerUpKind::Speed => BLUE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn bounds(&self) -> Rect {
        Rect::around(self.x, self.y, POWERUP_SIZE)
    }

    /// Heal, or permanently raise the player's speed.
    pub fn apply(&self, player: &mut Player) {
        match self.kind {
            PowerUpKind::Health => player.heal(HEALTH_POWERUP_AMOUNT),
            PowerUpKind::Speed => player.speed += SPEED_POWERUP_AMOUNT,
        }
    }
}

// ── Particles ─────────────────────────────────────────────────────────────────

/// Cosmetic spark. Lifetime and age are counted in frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub color: Rgb,
    pub lifetime: u32,
    pub age: u32,
}

impl Particle {
    pub fn new(x: f32, y: f32, dx: f32, dy: f32, color: Rgb, lifetime: u32) -> Self {
        Self {
            x,
            y,
            dx,
            dy,
            color,
            lifetime,
            age: 0,
        }
    }

    pub fn update(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
        self.age += 1;
    }

    pub fn is_expired(&self) -> bool {
        self.age > self.lifetime
    }

    /// Opacity in `[0, 1]`, fading linearly with age.
    pub fn alpha(&self) -> f32 {
        if self.lifetime == 0 || self.age >= self.lifetime {
            0.0
        } else {
            1.0 - self.age as f32 / self.lifetime as f32
        }
    }
}

// ── Doors ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Door {
    pub x: f32,
    pub y: f32,
    /// Index of the room this door leads to within the level.
    pub target: usize,
}
