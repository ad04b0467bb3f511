use tic_tac_toe_core::{Player, RoundStatus, ScoreBoard, CELL_COUNT};

/// Keyboard focus movement across the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    fn offset(self) -> isize {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
            Direction::Down => 3,
            Direction::Up => -3,
        }
    }

    /// Moves through the nine cells as one ring, so Right from 8 lands on 0
    /// and Up from 1 lands on 7.
    pub fn step(self, from: usize) -> usize {
        let ring = CELL_COUNT as isize;
        (from as isize + self.offset()).rem_euclid(ring) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellView {
    pub mark: Option<Player>,
    pub playable: bool,
    pub highlighted: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub cells: [CellView; CELL_COUNT],
    pub current_player: Player,
    pub status: RoundStatus,
    pub banner: String,
    pub scores: ScoreBoard,
}
