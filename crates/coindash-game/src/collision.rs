//! Collision dispatch: collision events to game-state transitions
//!
//! Only pairs involving the player matter. The non-player participant's
//! category selects the response; everything else passes through silently.

use crate::entity::EntityKind;
use crate::registry::EntityRegistry;
use crate::state::{GameState, LivesDisplay};
use coindash_physics::PhysicsWorld;
use coindash_runtime::GameEvent;

/// Resolve one tick's worth of collision events.
///
/// There is no debounce: every dispatched Player/Boulder event costs a life
/// on its own.
pub fn dispatch(
    events: &[GameEvent],
    physics: &mut PhysicsWorld,
    registry: &mut EntityRegistry,
    state: &mut GameState,
    display: &mut dyn LivesDisplay,
) {
    for event in events {
        let GameEvent::CollisionStarted { entity_a, entity_b } = event else {
            continue;
        };
        let Some(other) = registry.other_of_player(*entity_a, *entity_b) else {
            continue;
        };

        match other.kind {
            EntityKind::Ground => {
                log::debug!("player hit the ground");
                state.grounded = true;
            }
            EntityKind::Boulder => {
                log::debug!("player hit a boulder");
                state.lose_life();
                display.update_lives(state.lives, state.score);
                if state.over {
                    log::info!("game over, final score {}", state.score);
                }
            }
            EntityKind::Coin => {
                log::debug!("player hit the coin");
                state.add_score();
                if let Some(coin) = registry.take_coin() {
                    physics.remove_rigid_body(coin.body);
                }
                display.update_lives(state.lives, state.score);
            }
            // Walls and the player's own category have no response
            EntityKind::Wall | EntityKind::Player => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena;
    use crate::spawn::SpawnManager;
    use coindash_core::EntityId;

    /// Display sink that records every refresh
    #[derive(Default)]
    struct RecordingDisplay {
        updates: Vec<(u32, u32)>,
    }

    impl LivesDisplay for RecordingDisplay {
        fn update_lives(&mut self, lives: u32, score: u32) {
            self.updates.push((lives, score));
        }
    }

    struct Fixture {
        physics: PhysicsWorld,
        registry: EntityRegistry,
        state: GameState,
        display: RecordingDisplay,
    }

    impl Fixture {
        fn new() -> Self {
            let mut physics = PhysicsWorld::new();
            let mut registry = arena::build(&mut physics);
            SpawnManager::with_seed(3)
                .check_spawns(&mut physics, &mut registry)
                .unwrap();
            Self {
                physics,
                registry,
                state: GameState::new(),
                display: RecordingDisplay::default(),
            }
        }

        fn collide_player_with(&mut self, other: EntityId) {
            let events = vec![GameEvent::CollisionStarted {
                entity_a: self.registry.player().id,
                entity_b: other,
            }];
            dispatch(
                &events,
                &mut self.physics,
                &mut self.registry,
                &mut self.state,
                &mut self.display,
            );
        }
    }

    #[test]
    fn test_ground_contact_sets_grounded() {
        let mut fx = Fixture::new();
        assert!(!fx.state.grounded);

        let ground_id = fx.registry.ground().id;
        fx.collide_player_with(ground_id);
        assert!(fx.state.grounded);

        // Resting contact redelivers the event; setting grounded is idempotent
        fx.collide_player_with(ground_id);
        assert!(fx.state.grounded);
        assert!(fx.display.updates.is_empty());
    }

    #[test]
    fn test_coin_pickup_scores_and_despawns() {
        let mut fx = Fixture::new();
        let coin_id = fx.registry.coin().unwrap().id;
        let bodies_before = fx.physics.rigid_body_set.len();

        fx.collide_player_with(coin_id);

        assert_eq!(fx.state.score, 1);
        assert!(fx.registry.coin().is_none());
        assert_eq!(fx.physics.rigid_body_set.len(), bodies_before - 1);
        // The lives widget is refreshed on pickup too
        assert_eq!(fx.display.updates, vec![(1, 1)]);
    }

    #[test]
    fn test_boulder_hit_costs_a_life_per_event() {
        let mut fx = Fixture::new();
        fx.state.lives = 3;
        let boulder_id = fx.registry.boulders().next().unwrap().id;

        // Sustained contact redelivers events; each one costs a life
        fx.collide_player_with(boulder_id);
        fx.collide_player_with(boulder_id);
        assert_eq!(fx.state.lives, 1);
        assert!(!fx.state.over);

        fx.collide_player_with(boulder_id);
        assert_eq!(fx.state.lives, 0);
        assert!(fx.state.over);

        // Saturates at zero once the game is over
        fx.collide_player_with(boulder_id);
        assert_eq!(fx.state.lives, 0);
    }

    #[test]
    fn test_unmatched_pairs_are_ignored() {
        let mut fx = Fixture::new();
        let boulder_id = fx.registry.boulders().next().unwrap().id;
        let coin_id = fx.registry.coin().unwrap().id;

        // Boulder-coin contact involves no player
        let events = vec![GameEvent::CollisionStarted {
            entity_a: boulder_id,
            entity_b: coin_id,
        }];
        dispatch(
            &events,
            &mut fx.physics,
            &mut fx.registry,
            &mut fx.state,
            &mut fx.display,
        );

        assert_eq!(fx.state, GameState::new());
        assert!(fx.registry.coin().is_some());
        assert!(fx.display.updates.is_empty());
    }

    #[test]
    fn test_collision_ended_events_are_ignored() {
        let mut fx = Fixture::new();
        let boulder_id = fx.registry.boulders().next().unwrap().id;

        let events = vec![GameEvent::CollisionEnded {
            entity_a: fx.registry.player().id,
            entity_b: boulder_id,
        }];
        dispatch(
            &events,
            &mut fx.physics,
            &mut fx.registry,
            &mut fx.state,
            &mut fx.display,
        );

        assert_eq!(fx.state.lives, 1);
    }

    #[test]
    fn test_coin_then_boulder_then_coin_respawn() {
        let mut fx = Fixture::new();
        let coin_id = fx.registry.coin().unwrap().id;

        fx.collide_player_with(coin_id);
        assert_eq!(fx.state.score, 1);
        assert!(fx.registry.coin().is_none());

        let boulder_id = fx.registry.boulders().next().unwrap().id;
        fx.collide_player_with(boulder_id);
        assert_eq!(fx.state.lives, 0);

        // A fresh coin appears on the next spawn check
        SpawnManager::with_seed(11)
            .spawn_coin(&mut fx.physics, &mut fx.registry)
            .unwrap();
        let respawned = fx.registry.coin().unwrap();
        assert_ne!(respawned.id, coin_id);
    }
}
