//! Rooms and the levels that chain them together.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::config::{
    DOOR_BOTTOM_OFFSET, ENEMIES_PER_ROOM, ENEMY_KIND_WEIGHTS, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::entities::{Coin, Door, Enemy, EnemyKind, PowerUp};

/// Rooms in every level, in traversal order.
pub const ROOMS_PER_LEVEL: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomKind {
    Start,
    Combat,
    Boss,
}

#[derive(Clone, Debug)]
pub struct Room {
    pub id: usize,
    pub kind: RoomKind,
    pub width: f32,
    pub height: f32,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub powerups: Vec<PowerUp>,
    pub doors: Vec<Door>,
    /// Set once the enemy list empties; never reset for this room instance.
    pub cleared: bool,
    /// Wave reinforcements already sent into this room.
    pub reinforcements: u32,
}

impl Room {
    pub fn new(id: usize, kind: RoomKind, enemies: Vec<Enemy>, doors: Vec<Door>) -> Self {
        Self {
            id,
            kind,
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            enemies,
            coins: Vec::new(),
            powerups: Vec::new(),
            doors,
            cleared: false,
            reinforcements: 0,
        }
    }

    pub fn is_boss(&self) -> bool {
        self.kind == RoomKind::Boss
    }

    /// Mark the room cleared if its enemies are gone. Returns `true` only on
    /// the frame the room becomes cleared.
    pub fn check_cleared(&mut self) -> bool {
        if !self.cleared && self.enemies.is_empty() {
            self.cleared = true;
            return true;
        }
        false
    }

    /// Whether wave reinforcements may be sent in.
    pub fn accepts_reinforcements(&self) -> bool {
        self.kind == RoomKind::Combat && !self.cleared
    }
}

/// Draw a regular enemy kind using the 5:3:2:1 weight table.
pub fn pick_enemy_kind(rng: &mut impl Rng) -> EnemyKind {
    match WeightedIndex::new(&ENEMY_KIND_WEIGHTS) {
        Ok(weights) => EnemyKind::REGULAR[weights.sample(rng)],
        Err(err) => {
            log::warn!("bad enemy weight table: {}", err);
            EnemyKind::Normal
        }
    }
}

/// Random interior spawn point for a regular enemy.
pub fn random_enemy_position(rng: &mut impl Rng) -> (f32, f32) {
    (
        rng.gen_range(100..=700) as f32,
        rng.gen_range(100..=500) as f32,
    )
}

fn exit_door(target: usize) -> Door {
    Door {
        x: SCREEN_WIDTH / 2.0,
        y: SCREEN_HEIGHT - DOOR_BOTTOM_OFFSET,
        target,
    }
}

#[derive(Clone, Debug)]
pub struct Level {
    pub number: u32,
    pub rooms: Vec<Room>,
    pub current_room: usize,
}

impl Level {
    /// Build the fixed three-room layout: an empty start room, a room of
    /// randomly placed regular enemies, and a boss room with no exit.
    pub fn generate(number: u32, rng: &mut impl Rng) -> Self {
        let boss_id = ROOMS_PER_LEVEL - 1;
        let start = Room::new(0, RoomKind::Start, Vec::new(), vec![exit_door(1)]);

        let enemies = (0..ENEMIES_PER_ROOM)
            .map(|_| {
                let (x, y) = random_enemy_position(rng);
                Enemy::new(x, y, pick_enemy_kind(rng))
            })
            .collect();
        let combat = Room::new(1, RoomKind::Combat, enemies, vec![exit_door(boss_id)]);

        let boss = Room::new(
            boss_id,
            RoomKind::Boss,
            vec![Enemy::new(SCREEN_WIDTH / 2.0, 100.0, EnemyKind::Boss)],
            Vec::new(),
        );

        Self {
            number,
            rooms: vec![start, combat, boss],
            current_room: 0,
        }
    }

    pub fn room(&self) -> &Room {
        &self.rooms[self.current_room]
    }

    pub fn room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.current_room]
    }

    /// Switch the active room. Unknown ids are ignored.
    pub fn enter(&mut self, room_id: usize) -> bool {
        if room_id < self.rooms.len() {
            self.current_room = room_id;
            true
        } else {
            false
        }
    }
}
