//! Enemy decision policy against scripted randomness.

use duel_core::{
    CombatResolver, Combatant, Enemy, PcgRng, Player, Position, ScriptedRng, ShotKind, Step,
    TerrainGrid,
};
use duel_runtime::{EnemyPolicy, TurnAction};

fn arena() -> TerrainGrid {
    TerrainGrid::from_rows(&[
        "##############",
        "#............#",
        "#............#",
        "#.....#......#",
        "#.....#......#",
        "#.....#......#",
        "#............#",
        "##############",
    ])
    .unwrap()
}

#[test]
fn boxed_in_enemy_always_waits() {
    let grid = TerrainGrid::from_rows(&[
        "#######",
        "#.....#",
        "#.###.#",
        "#.#.#.#",
        "#.###.#",
        "#.....#",
        "#######",
    ])
    .unwrap();
    let resolver = CombatResolver::default();
    let mut policy = EnemyPolicy::default();

    for seed in 0..50 {
        let mut enemy = Enemy::new(Position::new(3, 3), 100);
        let mut player = Player::new(Position::new(1, 1), 100);
        let mut rng = PcgRng::seeded(seed);
        let result = policy.take_turn(&mut enemy, &mut player, &grid, &resolver, &mut rng);

        assert_eq!(result.action, TurnAction::Wait);
        assert_eq!(enemy.position(), Position::new(3, 3));
        assert!(result.message.starts_with("Bandit "));
        assert_eq!(player.hp(), 100);
    }
}

#[test]
fn out_of_range_opponent_is_never_shot() {
    let grid = TerrainGrid::new(40, 6).unwrap();
    let resolver = CombatResolver::default();
    let mut policy = EnemyPolicy::default();
    policy.set_aggression(1.0);

    let mut enemy = Enemy::new(Position::new(30, 3), 100);
    let mut player = Player::new(Position::new(2, 3), 100);
    assert!(grid.has_line_of_sight(enemy.position(), player.position()));

    // Every float would pass a shoot roll.
    let mut rng = ScriptedRng::new().with_fallback_float(0.0);
    let result = policy.take_turn(&mut enemy, &mut player, &grid, &resolver, &mut rng);

    assert_eq!(result.action, TurnAction::Move(Step::WEST));
    assert_eq!(result.message, "Bandit moves closer...");
    assert_eq!(rng.total_draws(), 0);
}

#[test]
fn hidden_opponent_is_never_shot() {
    let grid = arena();
    let resolver = CombatResolver::default();
    let mut policy = EnemyPolicy::default();
    policy.set_aggression(1.0);

    let mut enemy = Enemy::new(Position::new(4, 4), 100);
    let mut player = Player::new(Position::new(8, 4), 100);
    assert!(!grid.has_line_of_sight(enemy.position(), player.position()));

    let mut rng = ScriptedRng::new().with_fallback_float(0.0);
    let result = policy.take_turn(&mut enemy, &mut player, &grid, &resolver, &mut rng);

    assert!(matches!(result.action, TurnAction::Move(_)));
    assert_eq!(rng.float_draws(), 0);
    assert_eq!(policy.last_known_opponent(), None);
}

#[test]
fn close_visible_opponent_is_shot_when_the_roll_passes() {
    let grid = arena();
    let resolver = CombatResolver::default();
    let mut policy = EnemyPolicy::default();

    let mut enemy = Enemy::new(Position::new(2, 1), 100);
    let mut player = Player::new(Position::new(7, 1), 100);

    // 0.7 aggression + 0.2 close-range bonus; then accuracy, then damage.
    let mut rng = ScriptedRng::new().with_floats([0.89, 0.0]).with_ints([25]);
    let result = policy.take_turn(&mut enemy, &mut player, &grid, &resolver, &mut rng);

    let TurnAction::Shoot(shot) = &result.action else {
        panic!("expected a shot, got {:?}", result.action);
    };
    assert_eq!(shot.kind, ShotKind::Hit);
    assert_eq!(player.hp(), 75);
    assert_eq!(result.message, "Bandit's Pistol hits Player for 25 damage!");
}

#[test]
fn failed_roll_falls_through_to_movement() {
    let grid = arena();
    let resolver = CombatResolver::default();
    let mut policy = EnemyPolicy::default();

    // Distance 10 is outside the close-range band, so the chance is 0.7.
    let mut enemy = Enemy::new(Position::new(12, 1), 100);
    let mut player = Player::new(Position::new(2, 1), 100);
    let mut rng = ScriptedRng::new().with_floats([0.75]);
    let result = policy.take_turn(&mut enemy, &mut player, &grid, &resolver, &mut rng);

    assert_eq!(result.action, TurnAction::Move(Step::WEST));
    assert_eq!(enemy.position(), Position::new(11, 1));
    assert_eq!(rng.float_draws(), 1);
}

#[test]
fn lost_opponent_is_tracked_by_memory() {
    let grid = arena();
    let resolver = CombatResolver::default();
    let mut policy = EnemyPolicy::default();

    let mut enemy = Enemy::new(Position::new(3, 4), 100);
    let mut player = Player::new(Position::new(9, 1), 100);
    assert!(grid.has_line_of_sight(enemy.position(), player.position()));

    let mut rng = ScriptedRng::new().with_floats([0.99]);
    let first = policy.take_turn(&mut enemy, &mut player, &grid, &resolver, &mut rng);
    assert_eq!(first.action, TurnAction::Move(Step::new(1, -1)));
    assert_eq!(policy.last_known_opponent(), Some(Position::new(9, 1)));

    // The player slips behind the wall.
    player.set_position(Position::new(9, 5));
    assert!(!grid.has_line_of_sight(enemy.position(), player.position()));

    let mut rng = ScriptedRng::new();
    let second = policy.take_turn(&mut enemy, &mut player, &grid, &resolver, &mut rng);
    assert_eq!(second.action, TurnAction::Move(Step::new(1, -1)));
    assert_eq!(enemy.position(), Position::new(5, 2));
    assert_eq!(policy.last_known_opponent(), Some(Position::new(9, 1)));
}

#[test]
fn opponent_cell_does_not_block_the_advance() {
    let grid = arena();
    let resolver = CombatResolver::default();
    let mut policy = EnemyPolicy::default();

    let mut enemy = Enemy::new(Position::new(3, 2), 100);
    let mut player = Player::new(Position::new(4, 2), 100);
    let mut rng = ScriptedRng::new().with_floats([0.99]);
    let result = policy.take_turn(&mut enemy, &mut player, &grid, &resolver, &mut rng);

    assert_eq!(result.action, TurnAction::Move(Step::EAST));
    assert_eq!(result.message, "Bandit moves closer...");
    assert_eq!(enemy.position(), player.position());
    assert_eq!(rng.total_draws(), 1);
}

#[test]
fn standing_on_the_remembered_cell_is_a_zero_step() {
    let grid = arena();
    let resolver = CombatResolver::default();
    let mut policy = EnemyPolicy::default();

    let mut enemy = Enemy::new(Position::new(9, 2), 100);
    let mut player = Player::new(Position::new(9, 4), 100);
    let mut rng = ScriptedRng::new().with_floats([0.99]);
    policy.take_turn(&mut enemy, &mut player, &grid, &resolver, &mut rng);
    assert_eq!(policy.last_known_opponent(), Some(Position::new(9, 4)));

    // The enemy reaches the remembered cell while the player hides.
    enemy.set_position(Position::new(9, 4));
    player.set_position(Position::new(4, 4));
    assert!(!grid.has_line_of_sight(enemy.position(), player.position()));

    let mut rng = ScriptedRng::new();
    let result = policy.take_turn(&mut enemy, &mut player, &grid, &resolver, &mut rng);

    assert_eq!(result.action, TurnAction::Move(Step::NONE));
    assert_eq!(result.message, "Bandit moves closer...");
    assert_eq!(enemy.position(), Position::new(9, 4));
    assert_eq!(rng.total_draws(), 0);
}

#[test]
fn dead_enemy_reports_dead_without_drawing() {
    let grid = arena();
    let resolver = CombatResolver::default();
    let mut policy = EnemyPolicy::default();

    let mut enemy = Enemy::new(Position::new(3, 2), 100);
    enemy.take_damage(100);
    let mut player = Player::new(Position::new(6, 2), 100);
    let mut rng = ScriptedRng::new();
    let result = policy.take_turn(&mut enemy, &mut player, &grid, &resolver, &mut rng);

    assert_eq!(result.action, TurnAction::Dead);
    assert!(result.message.is_empty());
    assert_eq!(rng.total_draws(), 0);
    assert_eq!(policy.last_known_opponent(), None);
}
