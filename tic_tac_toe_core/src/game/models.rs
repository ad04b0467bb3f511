use serde::{Deserialize, Serialize};
use std::fmt;

use super::engine::MoveRejection;

pub const CELL_COUNT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Player {
    #[default]
    X,
    O,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Nine cells in row-major order, `None` meaning empty.
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` both for an empty cell and for an index past the board.
    pub fn get(&self, cell: usize) -> Option<Player> {
        self.cells.get(cell).copied().flatten()
    }

    pub fn is_empty_cell(&self, cell: usize) -> bool {
        cell < CELL_COUNT && self.cells[cell].is_none()
    }

    pub fn cells(&self) -> &[Option<Player>; CELL_COUNT] {
        &self.cells
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub(crate) fn place(&mut self, cell: usize, player: Player) {
        self.cells[cell] = Some(player);
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "---------")?;
            }
            let marks: Vec<String> = cells
                .iter()
                .map(|cell| cell.map_or_else(|| " ".to_string(), |p| p.to_string()))
                .collect();
            writeln!(f, "{}", marks.join(" | "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    InProgress,
    Won(Player),
    Drawn,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }

    /// Banner text for this status; `current` is only used while in progress.
    pub fn message(self, current: Player) -> String {
        match self {
            RoundStatus::InProgress => format!("{}'s turn", current),
            RoundStatus::Won(winner) => format!("{} wins!", winner),
            RoundStatus::Drawn => "Draw!".to_string(),
        }
    }
}

/// Three cell indices forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine(pub [usize; 3]);

impl WinLine {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.0.contains(&cell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub x: u32,
    pub o: u32,
    pub draws: u32,
}

impl ScoreBoard {
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Counts a finished round. Returns false (and changes nothing) for
    /// `InProgress`.
    pub(crate) fn record(&mut self, status: RoundStatus) -> bool {
        match status {
            RoundStatus::Won(Player::X) => self.x = self.x.saturating_add(1),
            RoundStatus::Won(Player::O) => self.o = self.o.saturating_add(1),
            RoundStatus::Drawn => self.draws = self.draws.saturating_add(1),
            RoundStatus::InProgress => return false,
        }
        true
    }

    pub(crate) fn reset(&mut self) {
        *self = ScoreBoard::default();
    }
}

/// What a caller needs to re-render after `apply_move`.
///
/// `cell` and `player` are set only for accepted moves. `score_changed` is
/// true exactly when this move finished the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub accepted: bool,
    pub cell: Option<usize>,
    pub player: Option<Player>,
    pub board: Board,
    pub current_player: Player,
    pub status: RoundStatus,
    pub win_line: Option<WinLine>,
    pub scores: ScoreBoard,
    pub score_changed: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rejection: Option<MoveRejection>,
}

impl MoveResult {
    pub fn message(&self) -> String {
        self.status.message(self.current_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_other() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other(), Player::X);
    }

    #[test]
    fn test_board_get_out_of_range() {
        let mut board = Board::new();
        board.place(8, Player::O);
        assert_eq!(board.get(8), Some(Player::O));
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty_cell(8));
        assert!(!board.is_empty_cell(9));
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.place(0, Player::X);
        board.place(4, Player::O);
        let text = board.to_string();
        assert_eq!(text, "X |   |  \n---------\n  | O |  \n---------\n  |   |  \n");
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(RoundStatus::InProgress.message(Player::O), "O's turn");
        assert_eq!(RoundStatus::Won(Player::X).message(Player::X), "X wins!");
        assert_eq!(RoundStatus::Drawn.message(Player::X), "Draw!");
    }

    #[test]
    fn test_score_record() {
        let mut scores = ScoreBoard::default();
        assert!(!scores.record(RoundStatus::InProgress));
        assert!(scores.record(RoundStatus::Won(Player::O)));
        assert!(scores.record(RoundStatus::Drawn));
        assert_eq!(scores, ScoreBoard { x: 0, o: 1, draws: 1 });
        assert_eq!(scores.wins(Player::O), 1);

        scores.reset();
        assert_eq!(scores, ScoreBoard::default());
    }

    #[test]
    fn test_score_record_saturates() {
        let mut scores = ScoreBoard {
            x: u32::MAX,
            o: u32::MAX,
            draws: u32::MAX,
        };
        assert!(scores.record(RoundStatus::Won(Player::X)));
        assert!(scores.record(RoundStatus::Won(Player::O)));
        assert!(scores.record(RoundStatus::Drawn));
        assert_eq!(scores.wins(Player::X), u32::MAX);
        assert_eq!(scores.wins(Player::O), u32::MAX);
        assert_eq!(scores.draws, u32::MAX);
    }

    #[test]
    fn test_player_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Player::X).unwrap(), "\"X\"");
        let status: RoundStatus = serde_json::from_str("{\"Won\":\"O\"}").unwrap();
        assert_eq!(status, RoundStatus::Won(Player::O));
    }
}
