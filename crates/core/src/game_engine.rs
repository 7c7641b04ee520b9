//! Game engine module - owns the grid, the active piece and the fall timer
//!
//! One call to [`GameEngine::update`] is one discrete step: every queued intent is
//! applied in order, then elapsed time feeds the fall timer. Every move is applied
//! to the piece first and reverted if the grid reports a collision; a collision is
//! ordinary control flow, never an error.
//!
//! Only the automatic fall locks a piece. A soft drop that cannot move simply does
//! nothing.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::{pick_shape, RandomSource, SimpleRng};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::*;

/// Session parameters, fixed for the lifetime of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub fall_interval_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
        }
    }
}

/// Emitted each time a piece locks (consumed by the session log).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: ShapeKind,
    pub x: i16,
    pub y: i16,
    pub rows_cleared: u32,
    /// The replacement piece could not be placed.
    pub game_over: bool,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameEngine<R: RandomSource = SimpleRng> {
    grid: Grid,
    active: Option<Piece>,
    status: GameStatus,
    fall_timer_ms: u32,
    config: EngineConfig,
    rng: R,
    /// Successful spawns, including the first piece.
    pieces_spawned: u32,
    /// Total rows removed this session. Display only.
    rows_cleared: u32,
    last_event: Option<LockEvent>,
}

impl GameEngine<SimpleRng> {
    /// Standard 10x20 game with a seeded RNG
    pub fn with_seed(seed: u32) -> Self {
        Self::new(EngineConfig::default(), SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create a game and spawn the first piece.
    ///
    /// If the first piece does not fit (a grid narrower than the shape), the
    /// engine starts in `GameOver`.
    pub fn new(config: EngineConfig, rng: R) -> Self {
        let mut engine = Self {
            grid: Grid::new(config.grid_width, config.grid_height),
            active: None,
            status: GameStatus::Running,
            fall_timer_ms: 0,
            config,
            rng,
            pieces_spawned: 0,
            rows_cleared: 0,
            last_event: None,
        };
        engine.spawn_piece();
        engine
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for staging scenarios (tests, replays).
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Replace the active piece, for staging scenarios. Ignored after game over.
    pub fn set_piece(&mut self, piece: Piece) {
        if self.status.is_running() {
            self.active = Some(piece);
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Take the most recent lock event, if any.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Run one update step: all intents in arrival order, then the fall timer.
    ///
    /// Returns true if the piece or grid changed. Does nothing once the game is over.
    pub fn update(&mut self, elapsed_ms: u32, actions: &[GameAction]) -> bool {
        if !self.status.is_running() {
            return false;
        }

        let mut changed = false;
        for &action in actions {
            changed |= self.apply_action(action);
        }
        changed |= self.advance_fall_timer(elapsed_ms);
        changed
    }

    /// Apply one input intent. Returns true if the piece moved or rotated.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.status.is_running() {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        match action {
            GameAction::MoveLeft => translate_or_revert(piece, &self.grid, -1, 0),
            GameAction::MoveRight => translate_or_revert(piece, &self.grid, 1, 0),
            GameAction::SoftDrop => translate_or_revert(piece, &self.grid, 0, 1),
            GameAction::Rotate => rotate_or_revert(piece, &self.grid),
        }
    }

    /// Accumulate elapsed time and take one fall step once the interval is reached.
    ///
    /// Returns true if a fall step ran.
    pub fn advance_fall_timer(&mut self, elapsed_ms: u32) -> bool {
        if !self.status.is_running() {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.config.fall_interval_ms {
            return false;
        }

        self.fall_timer_ms = 0;
        self.step_down();
        true
    }

    /// Move the active piece down one row, locking it if it cannot move.
    ///
    /// On lock: write the piece into the grid, clear full rows, spawn the next
    /// piece, and end the game if that piece collides. Returns true if the piece
    /// locked.
    pub fn step_down(&mut self) -> bool {
        if !self.status.is_running() {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        if translate_or_revert(piece, &self.grid, 0, 1) {
            return false;
        }

        let landed = *piece;
        self.lock(landed);
        true
    }

    fn lock(&mut self, piece: Piece) {
        self.grid.lock_piece(&piece);
        let cleared = self.grid.clear_full_rows() as u32;
        self.rows_cleared = self.rows_cleared.saturating_add(cleared);

        let spawned = self.spawn_piece();

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
            rows_cleared: cleared,
            game_over: !spawned,
        });
    }

    /// Spawn a random piece at the top. Ends the game if it collides immediately.
    fn spawn_piece(&mut self) -> bool {
        let kind = pick_shape(&mut self.rng);
        let piece = Piece::spawn(kind, self.grid.width());

        if self.grid.collides(&piece) {
            self.active = None;
            self.status = GameStatus::GameOver;
            return false;
        }

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.piece = self.active.map(PieceSnapshot::from);
        out.status = self.status;
        out.pieces_spawned = self.pieces_spawned;
        out.rows_cleared = self.rows_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameEngine<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

fn translate_or_revert(piece: &mut Piece, grid: &Grid, dx: i16, dy: i16) -> bool {
    piece.translate(dx, dy);
    if grid.collides(piece) {
        piece.translate(-dx, -dy);
        return false;
    }
    true
}

fn rotate_or_revert(piece: &mut Piece, grid: &Grid) -> bool {
    let previous = piece.rotate_clockwise();
    if grid.collides(piece) {
        piece.restore_shape(previous);
        return false;
    }
    true
}
