//! Headless duel orchestration.
//!
//! A [`Session`] owns the terrain, both combatants, the enemy policy and the
//! random source, and walks through these phases:
//!
//! ```text
//! ChoosingBonus -> ChoosingWeapon -> Dueling -> Over { winner }
//! ```
//!
//! Every consumed player action is followed by the enemy's reaction unless
//! the player's shot ended the duel. A move into blocked terrain or onto the
//! enemy consumes nothing.

use duel_core::{
    BonusId, CombatResolver, Combatant, Enemy, GameConfig, MapGenerator, ModifierSet, Player,
    Position, RngOracle, ShotOutcome, SpawnError, Step, TerrainGrid, WeaponId, WeaponProfile,
};
use tracing::{debug, info, warn};

use crate::error::{Result, SessionError};
use crate::providers::{EnemyPolicy, TurnResult};

/// Which combatant won.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    ChoosingBonus,
    ChoosingWeapon,
    Dueling,
    Over { winner: Side },
}

/// What the player's input amounted to.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerAction {
    Moved(Step),
    /// Terrain or the enemy was in the way; no turn passed.
    Blocked(Step),
    Shot(ShotOutcome),
}

/// Result of one player input.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    pub player: PlayerAction,
    /// The enemy's reaction, if a turn passed and the enemy was alive.
    pub enemy: Option<TurnResult>,
    /// Set when this input ended the duel.
    pub winner: Option<Side>,
}

impl TurnReport {
    pub fn consumed_turn(&self) -> bool {
        !matches!(self.player, PlayerAction::Blocked(_))
    }

    /// Display lines in the order the events happened.
    pub fn messages(&self) -> Vec<&str> {
        let mut lines = Vec::with_capacity(2);
        if let PlayerAction::Shot(shot) = &self.player {
            lines.push(shot.message.as_str());
        }
        if let Some(enemy) = &self.enemy
            && !enemy.message.is_empty()
        {
            lines.push(enemy.message.as_str());
        }
        lines
    }
}

/// One duel from bonus selection to game over.
#[derive(Debug)]
pub struct Session<R> {
    config: GameConfig,
    generator: MapGenerator,
    resolver: CombatResolver,
    rng: R,
    grid: TerrainGrid,
    player: Player,
    enemy: Enemy,
    policy: EnemyPolicy,
    weapon: WeaponProfile,
    phase: Phase,
    turn: u32,
}

impl<R: RngOracle> Session<R> {
    /// Generates terrain and spawns both combatants.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self> {
        let generator = MapGenerator::new(config.generation);
        let (grid, player, enemy) = build_world(&config, &generator, &mut rng)?;
        let policy = EnemyPolicy::new(config.ai);
        let resolver = CombatResolver::new(config.combat);

        info!(
            width = grid.width(),
            height = grid.height(),
            player = %player.position(),
            enemy = %enemy.position(),
            "session ready"
        );

        Ok(Self {
            config,
            generator,
            resolver,
            rng,
            grid,
            player,
            enemy,
            policy,
            weapon: WeaponProfile::default(),
            phase: Phase::ChoosingBonus,
            turn: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn policy(&self) -> &EnemyPolicy {
        &self.policy
    }

    pub fn weapon(&self) -> &WeaponProfile {
        &self.weapon
    }

    /// Player actions that consumed a turn so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    pub fn select_bonus(&mut self, bonus: BonusId) -> Result<()> {
        self.expect_phase(Phase::ChoosingBonus, "choose a bonus")?;
        self.player.equip(ModifierSet::from_bonus(bonus));
        self.advance(Phase::ChoosingWeapon);
        info!(%bonus, hp = self.player.hp(), "bonus selected");
        Ok(())
    }

    pub fn select_weapon(&mut self, weapon: WeaponId) -> Result<()> {
        self.equip_weapon(weapon.profile())
    }

    /// Picks any validated profile, e.g. one loaded from a catalog.
    pub fn equip_weapon(&mut self, weapon: WeaponProfile) -> Result<()> {
        self.expect_phase(Phase::ChoosingWeapon, "choose a weapon")?;
        info!(weapon = weapon.name(), "weapon selected");
        self.weapon = weapon;
        self.advance(Phase::Dueling);
        Ok(())
    }

    /// Steps the player one tile. Blocked moves consume no turn.
    pub fn player_move(&mut self, step: Step) -> Result<TurnReport> {
        self.expect_dueling()?;

        let destination = self.player.position().offset(step);
        if step.is_none()
            || self.grid.blocks_movement(destination)
            || destination == self.enemy.position()
        {
            debug!(%destination, "player move blocked");
            return Ok(TurnReport {
                player: PlayerAction::Blocked(step),
                enemy: None,
                winner: None,
            });
        }

        self.player.set_position(destination);
        Ok(self.finish_turn(PlayerAction::Moved(step)))
    }

    /// Fires the selected weapon at the enemy.
    pub fn player_shoot(&mut self) -> Result<TurnReport> {
        self.expect_dueling()?;

        let modifiers = self.player.modifiers().copied();
        let shot = self.resolver.resolve(
            &self.player,
            &mut self.enemy,
            &self.grid,
            &self.weapon,
            modifiers.as_ref(),
            &mut self.rng,
        );
        if shot.target_died {
            info!(enemy = self.enemy.name(), "enemy down");
        }
        Ok(self.finish_turn(PlayerAction::Shot(shot)))
    }

    /// Rebuilds terrain, combatants and policy; back to bonus selection.
    pub fn restart(&mut self) -> Result<()> {
        let (grid, player, enemy) = build_world(&self.config, &self.generator, &mut self.rng)?;
        self.grid = grid;
        self.player = player;
        self.enemy = enemy;
        self.policy = EnemyPolicy::new(self.config.ai);
        self.weapon = WeaponProfile::default();
        self.turn = 0;
        self.advance(Phase::ChoosingBonus);
        Ok(())
    }

    /// Terrain with both combatants drawn over it. The dead are not drawn.
    pub fn render(&self) -> String {
        let width = self.grid.width() as usize + 1;
        let mut cells: Vec<char> = self.grid.render().chars().collect();
        let combatants: [&dyn Combatant; 2] = [&self.enemy, &self.player];
        for combatant in combatants {
            let Position { x, y } = combatant.position();
            if combatant.is_alive() && self.grid.is_in_bounds(combatant.position()) {
                cells[y as usize * width + x as usize] = combatant.glyph();
            }
        }
        cells.into_iter().collect()
    }

    fn finish_turn(&mut self, player: PlayerAction) -> TurnReport {
        self.turn += 1;

        let enemy = if self.enemy.is_alive() {
            Some(self.policy.take_turn(
                &mut self.enemy,
                &mut self.player,
                &self.grid,
                &self.resolver,
                &mut self.rng,
            ))
        } else {
            None
        };

        let winner = if !self.enemy.is_alive() {
            Some(Side::Player)
        } else if !self.player.is_alive() {
            info!("player down");
            Some(Side::Enemy)
        } else {
            None
        };
        if let Some(winner) = winner {
            self.advance(Phase::Over { winner });
        }

        debug!(
            turn = self.turn,
            player_hp = self.player.hp(),
            enemy_hp = self.enemy.hp(),
            "turn complete"
        );
        TurnReport {
            player,
            enemy,
            winner,
        }
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else if self.is_over() {
            Err(SessionError::DuelOver)
        } else {
            Err(SessionError::WrongPhase {
                action,
                actual: self.phase,
            })
        }
    }

    fn expect_dueling(&self) -> Result<()> {
        self.expect_phase(Phase::Dueling, "act")
    }

    fn advance(&mut self, next: Phase) {
        info!(from = ?self.phase, to = ?next, "phase change");
        self.phase = next;
    }
}

/// Generates a map and places both combatants.
fn build_world<R>(
    config: &GameConfig,
    generator: &MapGenerator,
    rng: &mut R,
) -> Result<(TerrainGrid, Player, Enemy)>
where
    R: RngOracle + ?Sized,
{
    let grid = generator.generate(config.map_width, config.map_height, rng)?;

    let (player_at, enemy_at) = grid
        .find_spawn_pair(config.spawn_separation, rng)
        .map_err(|err| {
            warn!(%err, "terrain cannot host both combatants");
            match err {
                SpawnError::NotEnoughOpenCells { found } => SessionError::NoSpawn { found },
            }
        })?;

    Ok((
        grid,
        Player::new(player_at, config.player_max_hp),
        Enemy::new(enemy_at, config.enemy_max_hp),
    ))
}
