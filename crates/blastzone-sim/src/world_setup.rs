//! Entity spawn factories for setting up the simulation world.
//!
//! Each entity kind is a component bundle. Shared data such as `Bounds` and
//! `CollisionMemory` is attached to whichever kinds need it.

use hecs::{Entity, World};
use tracing::info;

use blastzone_core::components::*;
use blastzone_core::config::GameRules;
use blastzone_core::enums::{EntityKind, FuseKind};
use blastzone_core::types::{Bounds, Velocity};

use crate::level::{Cell, LevelGrid};
use crate::session::Session;

/// Pack an entity id into its serializable form.
pub fn entity_ref(entity: Entity) -> EntityRef {
    EntityRef(entity.to_bits().get())
}

/// Spawn every entity a level describes and return the session tracking them.
pub fn populate(world: &mut World, grid: &LevelGrid, rules: &GameRules) -> Session {
    spawn_background(world, grid.width(), grid.height(), rules);

    let mut player = None;
    let mut hostiles = Vec::new();
    let (ox, oy) = rules.origin;

    for (row, col, cell) in grid.cells() {
        let x = ox + col as i32 * rules.tile_size;
        let y = oy + row as i32 * rules.tile_size;
        match cell {
            Cell::Floor => {}
            Cell::Wall => {
                spawn_block(world, x, y, rules.tile_size, false);
            }
            Cell::Crate => {
                spawn_block(world, x, y, rules.tile_size, true);
            }
            Cell::PlayerSpawn => {
                player = Some(spawn_player(world, x, y, rules));
            }
            Cell::EnemySpawn => {
                let (vx, vy) = rules.enemy_spawn_velocity(hostiles.len());
                hostiles.push(spawn_enemy(world, x, y, Velocity::new(vx, vy), rules));
            }
        }
    }

    // The grid guarantees exactly one player spawn; fall back to its recorded cell.
    let player = player.unwrap_or_else(|| {
        let (row, col) = grid.player_spawn();
        spawn_player(
            world,
            ox + col as i32 * rules.tile_size,
            oy + row as i32 * rules.tile_size,
            rules,
        )
    });

    info!(
        width = grid.width(),
        height = grid.height(),
        enemies = hostiles.len(),
        entities = world.len(),
        "level_populated"
    );

    Session::new(player, hostiles)
}

/// Static background covering the whole grid. Drawn only.
pub fn spawn_background(world: &mut World, cols: usize, rows: usize, rules: &GameRules) -> Entity {
    let (ox, oy) = rules.origin;
    world.spawn((
        EntityKind::Tile,
        Bounds::new(
            ox,
            oy,
            cols as i32 * rules.tile_size,
            rows as i32 * rules.tile_size,
        ),
    ))
}

/// Wall (`destroyable = false`) or breakable crate.
pub fn spawn_block(world: &mut World, x: i32, y: i32, size: i32, destroyable: bool) -> Entity {
    world.spawn((
        EntityKind::Block,
        Bounds::cell(x, y, size),
        CollisionMemory {
            last_safe_x: x,
            last_safe_y: y,
        },
        DestroyState {
            alive: true,
            destroyable,
            owner: None,
        },
    ))
}

/// The input-driven player actor.
pub fn spawn_player(world: &mut World, x: i32, y: i32, rules: &GameRules) -> Entity {
    world.spawn((
        EntityKind::Player,
        Bounds::cell(x, y, rules.tile_size),
        Velocity::ZERO,
        CollisionMemory {
            last_safe_x: x,
            last_safe_y: y,
        },
        DestroyState {
            alive: true,
            destroyable: true,
            owner: None,
        },
        PlayerStats {
            max_bombs: rules.max_bombs,
            max_range: rules.max_range,
            is_ai_controlled: false,
        },
        ControlInput::default(),
    ))
}

/// A wandering hostile actor drifting at `velocity` until redirected.
pub fn spawn_enemy(
    world: &mut World,
    x: i32,
    y: i32,
    velocity: Velocity,
    rules: &GameRules,
) -> Entity {
    world.spawn((
        EntityKind::Enemy,
        Bounds::cell(x, y, rules.tile_size),
        velocity,
        CollisionMemory {
            last_safe_x: x,
            last_safe_y: y,
        },
        DestroyState {
            alive: true,
            destroyable: true,
            owner: None,
        },
        PlayerStats {
            max_bombs: 0,
            max_range: 0,
            is_ai_controlled: true,
        },
        AiState {
            candidate_directions: rules.enemy_directions(),
            needs_redirect: false,
            blocked_at: None,
        },
    ))
}

/// A lit bomb. Carries `CollisionMemory` so blasts and actors collide with it.
pub fn spawn_bomb(
    world: &mut World,
    x: i32,
    y: i32,
    owner: Entity,
    radius: u32,
    now_secs: f64,
    rules: &GameRules,
) -> Entity {
    world.spawn((
        EntityKind::Bomb,
        Bounds::cell(x, y, rules.tile_size),
        CollisionMemory {
            last_safe_x: x,
            last_safe_y: y,
        },
        DestroyState {
            alive: true,
            destroyable: true,
            owner: Some(entity_ref(owner)),
        },
        FuseTimer {
            start_secs: now_secs,
            delta_secs: rules.bomb_fuse_secs,
            kind: FuseKind::Explode { radius },
        },
    ))
}

/// One cell of an explosion. Self-deletes when its short fuse runs out.
pub fn spawn_blast_cell(
    world: &mut World,
    x: i32,
    y: i32,
    owner: Option<EntityRef>,
    now_secs: f64,
    rules: &GameRules,
) -> Entity {
    world.spawn((
        EntityKind::BlastCell,
        Bounds::cell(x, y, rules.tile_size),
        DestroyState {
            alive: true,
            destroyable: true,
            owner,
        },
        FuseTimer {
            start_secs: now_secs,
            delta_secs: rules.blast_lifetime_secs,
            kind: FuseKind::SelfDelete,
        },
        AnimationState {
            current_frame: 0,
            frame_count: rules.blast_frame_count,
            previous_secs: now_secs,
            frame_delta_secs: rules.blast_frame_delta_secs(),
        },
    ))
}
