use tracing::{debug, info};

use super::board::{Board, Cell, WinningLine};
use super::Player;
use crate::config::BoardConfig;
use crate::error::MoveError;

/// Where a game stands. `Won` and `Draw` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Player, line: WinningLine },
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    /// Status right after the piece landed
    pub status: GameStatus,
}

/// Rules engine for a single game.
///
/// Owns the board and is the only thing that mutates it. Every change goes
/// through [`Engine::apply_move`] (or its boolean form
/// [`Engine::attempt_move`]); a new game means constructing a new engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    moves_played: usize,
}

impl Engine {
    /// Create an empty `rows x columns` game with Red to move.
    ///
    /// Dimensions are not checked here; see [`BoardConfig::validate`].
    pub fn new(rows: usize, columns: usize) -> Self {
        Engine {
            board: Board::new(rows, columns),
            current_player: Player::Red, // Red starts
            status: GameStatus::InProgress,
            moves_played: 0,
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.rows, config.columns)
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Returns `true` iff a piece was placed, including a move that ends the
    /// game. Out-of-range columns (negative ones included), full columns and
    /// moves after the game ended return `false` and change nothing.
    pub fn attempt_move<C: TryInto<usize>>(&mut self, column: C) -> bool {
        self.apply_move(column).is_ok()
    }

    /// Like [`Engine::attempt_move`] but reports where the piece landed or
    /// why the move was rejected.
    ///
    /// After a winning move the current player stays on the winner. After a
    /// drawing move it keeps its pre-move value. Otherwise the turn passes.
    pub fn apply_move<C: TryInto<usize>>(&mut self, column: C) -> Result<Placement, MoveError> {
        self.place(column)
            .inspect_err(|err| debug!(%err, "move rejected"))
    }

    fn place<C: TryInto<usize>>(&mut self, column: C) -> Result<Placement, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let columns = self.board.cols();
        let column = column
            .try_into()
            .ok()
            .filter(|&col| col < columns)
            .ok_or(MoveError::InvalidColumn { columns })?;

        let player = self.current_player;
        let row = self.board.drop_piece(column, player)?;
        self.moves_played += 1;
        debug!(%player, row, column, "piece placed");

        if let Some(line) = self.board.winning_line_through(row, column) {
            self.status = GameStatus::Won {
                winner: player,
                line,
            };
            info!(winner = %player, moves = self.moves_played, "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!(moves = self.moves_played, "game drawn");
        } else {
            self.current_player = player.other();
        }

        Ok(Placement {
            row,
            column,
            player,
            status: self.status,
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at (row, col), `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Player to move while the game runs; the winner once it is won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// The completed line, only present after a win
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match &self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn columns(&self) -> usize {
        self.board.cols()
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }
}
