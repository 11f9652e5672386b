use alloc::vec::Vec;
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    ai,
    common::{GameError, Side},
    config::{validate_fleet, GameConfig},
    grid::{FleetCell, FleetGrid, ViewCell, ViewGrid},
    placement,
    shot::{self, ShotOutcome},
};

/// Whose move it is, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    PlayerTurn,
    ComputerTurn,
    PlayerWon,
    ComputerWon,
    /// The acting side had no coordinate left to shoot.
    Exhausted,
}

impl TurnState {
    /// `true` for states that accept no further shots.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TurnState::PlayerWon | TurnState::ComputerWon | TurnState::Exhausted
        )
    }

    /// Side expected to shoot next, if any.
    pub fn active_side(self) -> Option<Side> {
        match self {
            TurnState::PlayerTurn => Some(Side::Player),
            TurnState::ComputerTurn => Some(Side::Computer),
            _ => None,
        }
    }

    fn turn_of(side: Side) -> TurnState {
        match side {
            Side::Player => TurnState::PlayerTurn,
            Side::Computer => TurnState::ComputerTurn,
        }
    }

    fn won_by(side: Side) -> TurnState {
        match side {
            Side::Player => TurnState::PlayerWon,
            Side::Computer => TurnState::ComputerWon,
        }
    }
}

/// Result of a single shot as seen by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
    /// Turn state after the shot was applied.
    pub turn_state: TurnState,
}

impl ShotReport {
    pub fn accepted(&self) -> bool {
        self.outcome.accepted()
    }
}

/// What a call to [`GameEngine::computer_step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerMove {
    Shot(ShotReport),
    /// No unshot coordinate remained; the game is now [`TurnState::Exhausted`].
    NoCandidate,
}

/// Snapshot of every grid and the turn state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub player_fleet: FleetGrid,
    pub computer_fleet: FleetGrid,
    /// The player's record of shots at the computer's fleet.
    pub player_view: ViewGrid,
    /// The computer's record of shots at the player's fleet.
    pub computer_view: ViewGrid,
    pub turn: TurnState,
    /// Placement retry bound used by later resets.
    pub max_attempts: usize,
}

/// Core game logic: both fleets, both shot records and the turn state.
///
/// The engine owns its random source, which is consumed in order by fleet
/// placement and by the computer's shot choice.
pub struct GameEngine<R: Rng = SmallRng> {
    player_fleet: FleetGrid,
    computer_fleet: FleetGrid,
    player_view: ViewGrid,
    computer_view: ViewGrid,
    turn: TurnState,
    max_attempts: usize,
    rng: R,
}

impl GameEngine<SmallRng> {
    /// Standard game with a seeded `SmallRng`.
    pub fn seeded(seed: u64) -> Result<Self, GameError> {
        Self::new(&GameConfig::default(), SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine and start a game with fresh random fleets.
    pub fn new(config: &GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let mut engine = Self {
            player_fleet: FleetGrid::new(config.size),
            computer_fleet: FleetGrid::new(config.size),
            player_view: ViewGrid::new(config.size),
            computer_view: ViewGrid::new(config.size),
            turn: TurnState::PlayerTurn,
            max_attempts: config.max_attempts,
            rng,
        };
        engine.start_game(&config.fleet)?;
        Ok(engine)
    }

    /// Place both fleets, clear both views and hand the first turn to the player.
    ///
    /// On error the previous game is left exactly as it was.
    pub fn start_game(&mut self, ship_lengths: &[usize]) -> Result<(), GameError> {
        let size = self.size();
        validate_fleet(size, ship_lengths)?;
        let mut player_fleet = FleetGrid::new(size);
        let mut computer_fleet = FleetGrid::new(size);
        placement::place_fleet(&mut player_fleet, ship_lengths, &mut self.rng, self.max_attempts)?;
        placement::place_fleet(
            &mut computer_fleet,
            ship_lengths,
            &mut self.rng,
            self.max_attempts,
        )?;
        self.player_fleet = player_fleet;
        self.computer_fleet = computer_fleet;
        self.player_view = ViewGrid::new(size);
        self.computer_view = ViewGrid::new(size);
        self.turn = TurnState::PlayerTurn;
        info!(
            "game started on {}x{} grid with fleet {:?}",
            size, size, ship_lengths
        );
        Ok(())
    }

    /// Same as [`start_game`](Self::start_game).
    pub fn reset(&mut self, ship_lengths: &[usize]) -> Result<(), GameError> {
        self.start_game(ship_lengths)
    }

    /// Fire at the computer's fleet. Only valid during [`TurnState::PlayerTurn`].
    ///
    /// A repeated coordinate is reported as [`ShotOutcome::AlreadyShot`] and
    /// leaves the turn unchanged.
    pub fn submit_player_shot(&mut self, row: usize, col: usize) -> Result<ShotReport, GameError> {
        if self.turn != TurnState::PlayerTurn {
            warn!("player shot rejected in state {:?}", self.turn);
            return Err(GameError::InvalidOperation { state: self.turn });
        }
        if !self.player_view.in_bounds(row, col) {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        if self.player_view.unknown_cells().is_empty() {
            self.turn = TurnState::Exhausted;
            info!("player has no coordinates left to shoot");
            return Ok(ShotReport {
                row,
                col,
                outcome: ShotOutcome::AlreadyShot,
                turn_state: self.turn,
            });
        }
        let outcome = shot::apply_shot(&mut self.computer_fleet, &mut self.player_view, row, col)?;
        self.advance(Side::Player, outcome);
        Ok(ShotReport {
            row,
            col,
            outcome,
            turn_state: self.turn,
        })
    }

    /// Let the computer take exactly one shot. Only valid during
    /// [`TurnState::ComputerTurn`]; callers repeat it while the turn lasts.
    pub fn computer_step(&mut self) -> Result<ComputerMove, GameError> {
        if self.turn != TurnState::ComputerTurn {
            warn!("computer step rejected in state {:?}", self.turn);
            return Err(GameError::InvalidOperation { state: self.turn });
        }
        let Some((row, col)) = ai::choose_shot(&self.computer_view, &mut self.rng) else {
            self.turn = TurnState::Exhausted;
            info!("computer has no coordinates left to shoot");
            return Ok(ComputerMove::NoCandidate);
        };
        let outcome = shot::apply_shot(&mut self.player_fleet, &mut self.computer_view, row, col)?;
        self.advance(Side::Computer, outcome);
        Ok(ComputerMove::Shot(ShotReport {
            row,
            col,
            outcome,
            turn_state: self.turn,
        }))
    }

    /// Win check first, then the hit-continuation rule.
    fn advance(&mut self, shooter: Side, outcome: ShotOutcome) {
        if !outcome.accepted() {
            return;
        }
        if self.fleet_grid(shooter.opponent()).is_sunk() {
            self.turn = TurnState::won_by(shooter);
            info!("{:?} sank the whole fleet", shooter);
            return;
        }
        if outcome == ShotOutcome::Miss {
            self.turn = TurnState::turn_of(shooter.opponent());
        }
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    pub fn size(&self) -> usize {
        self.player_fleet.size()
    }

    /// Fleet grid belonging to `side`.
    pub fn fleet_grid(&self, side: Side) -> &FleetGrid {
        match side {
            Side::Player => &self.player_fleet,
            Side::Computer => &self.computer_fleet,
        }
    }

    /// Shot record kept by `side` about its opponent.
    pub fn view_grid(&self, side: Side) -> &ViewGrid {
        match side {
            Side::Player => &self.player_view,
            Side::Computer => &self.computer_view,
        }
    }

    /// Unhit ship cells left in `side`'s fleet.
    pub fn ship_cells_remaining(&self, side: Side) -> usize {
        self.fleet_grid(side).ships_remaining()
    }

    /// Accepted shots fired by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.view_grid(side).shots()
    }

    /// Generate a snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            player_fleet: self.player_fleet.clone(),
            computer_fleet: self.computer_fleet.clone(),
            player_view: self.player_view.clone(),
            computer_view: self.computer_view.clone(),
            turn: self.turn,
            max_attempts: self.max_attempts,
        }
    }

    /// Restore an engine from a snapshot after checking that every grid is
    /// well formed, every view agrees with the fleet it describes and the turn
    /// state matches the fleets.
    pub fn from_state(state: GameState, rng: R) -> Result<Self, GameError> {
        let size = state.player_fleet.size();
        if [
            state.computer_fleet.size(),
            state.player_view.size(),
            state.computer_view.size(),
        ]
        .iter()
        .any(|&s| s != size)
        {
            return Err(GameError::InconsistentState("grid sizes differ"));
        }
        if !(state.player_fleet.is_well_formed()
            && state.computer_fleet.is_well_formed()
            && state.player_view.is_well_formed()
            && state.computer_view.is_well_formed())
        {
            return Err(GameError::InconsistentState("grid cell count differs from size"));
        }
        if state.max_attempts == 0 {
            return Err(GameError::InconsistentState("placement attempts must be positive"));
        }
        check_view(&state.computer_fleet, &state.player_view)?;
        check_view(&state.player_fleet, &state.computer_view)?;
        check_turn(&state)?;
        Ok(Self {
            player_fleet: state.player_fleet,
            computer_fleet: state.computer_fleet,
            player_view: state.player_view,
            computer_view: state.computer_view,
            turn: state.turn,
            max_attempts: state.max_attempts,
            rng,
        })
    }

    /// Coordinates of the computer's ships not hit yet.
    pub fn hidden_ships(&self) -> Vec<(usize, usize)> {
        self.computer_fleet.positions(FleetCell::Ship)
    }
}

/// A side has won only once the other fleet is sunk, and play continues only
/// while both fleets still float.
fn check_turn(state: &GameState) -> Result<(), GameError> {
    let player_sunk = state.player_fleet.is_sunk();
    let computer_sunk = state.computer_fleet.is_sunk();
    match state.turn {
        TurnState::PlayerTurn | TurnState::ComputerTurn if player_sunk || computer_sunk => {
            Err(GameError::InconsistentState("game in progress with a sunk fleet"))
        }
        TurnState::PlayerWon if !computer_sunk || player_sunk => {
            Err(GameError::InconsistentState("player won without sinking the fleet"))
        }
        TurnState::ComputerWon if !player_sunk || computer_sunk => {
            Err(GameError::InconsistentState("computer won without sinking the fleet"))
        }
        _ => Ok(()),
    }
}

/// A view cell is `Hit` exactly where the fleet cell is `Hit`, and `Miss` only
/// over open water.
fn check_view(fleet: &FleetGrid, view: &ViewGrid) -> Result<(), GameError> {
    for ((_, _, f), (_, _, v)) in fleet.iter().zip(view.iter()) {
        match (f, v) {
            (FleetCell::Hit, ViewCell::Hit)
            | (FleetCell::Empty, ViewCell::Miss)
            | (FleetCell::Empty, ViewCell::Empty)
            | (FleetCell::Ship, ViewCell::Empty) => {}
            (FleetCell::Hit, _) => {
                return Err(GameError::InconsistentState("fleet hit missing from view"))
            }
            (_, ViewCell::Hit) => {
                return Err(GameError::InconsistentState("view hit over an unhit cell"))
            }
            (FleetCell::Ship, ViewCell::Miss) => {
                return Err(GameError::InconsistentState("view miss over a ship"))
            }
        }
    }
    Ok(())
}
