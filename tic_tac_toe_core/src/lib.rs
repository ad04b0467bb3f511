//! Tic-tac-toe game state for a single session: the 3x3 board, whose turn it
//! is, round outcome and the running score across rounds.
//!
//! Front ends feed cell indices (row-major, 0..=8) into
//! [`GameEngine::apply_move`] and render from the returned [`MoveResult`].
//!
//! ```
//! use tic_tac_toe_core::{GameEngine, Player, RoundStatus};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.apply_move(cell);
//! }
//! assert_eq!(engine.status(), RoundStatus::Won(Player::X));
//! assert_eq!(engine.scores().x, 1);
//! ```

pub mod game;

pub use game::{
    check_outcome, winning_line, Board, GameEngine, MoveRejection, MoveResult, Player,
    RoundStatus, ScoreBoard, WinLine, CELL_COUNT, WIN_LINES,
};
