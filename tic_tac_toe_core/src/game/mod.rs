pub mod engine;
pub mod models;
pub mod rules;

pub use engine::{GameEngine, MoveRejection};
pub use models::{Board, MoveResult, Player, RoundStatus, ScoreBoard, WinLine, CELL_COUNT};
pub use rules::{check_outcome, winning_line, WIN_LINES};
