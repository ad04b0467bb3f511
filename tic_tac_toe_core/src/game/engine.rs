use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::models::{Board, MoveResult, Player, RoundStatus, ScoreBoard, WinLine, CELL_COUNT};
use super::rules::check_outcome;

/// Why `apply_move` left the game untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("round is already over")]
    RoundOver,

    #[error("cell {0} is outside the board")]
    OutOfRange(usize),

    #[error("cell {0} is already taken")]
    CellTaken(usize),
}

/// One session's worth of tic-tac-toe: the current round plus the running
/// score. Each window or session owns its own engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    board: Board,
    current: Player,
    status: RoundStatus,
    win_line: Option<WinLine>,
    scores: ScoreBoard,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // Clears the board for a new round; scores carry over.
    pub fn start_round(&mut self) {
        self.board.clear();
        self.current = Player::X;
        self.status = RoundStatus::InProgress;
        self.win_line = None;

        debug!("Round started. Scores: {:?}", self.scores);
    }

    pub fn apply_move(&mut self, cell: usize) -> MoveResult {
        if let Err(rejection) = self.validate(cell) {
            debug!("Move rejected: {}", rejection);
            return self.result(None, Some(rejection), false);
        }

        let player = self.current;
        self.board.place(cell, player);

        let (status, line) = check_outcome(&self.board);
        self.status = status;
        self.win_line = line;

        let score_changed = self.scores.record(status);
        match status {
            RoundStatus::Won(winner) => {
                info!("Round over: {} wins on {:?}. Scores: {:?}", winner, line, self.scores);
            }
            RoundStatus::Drawn => {
                info!("Round over: draw. Scores: {:?}", self.scores);
            }
            RoundStatus::InProgress => {
                self.current = player.other();
                debug!("{} took cell {}. Now it's {}'s turn.", player, cell, self.current);
            }
        }

        self.result(Some((cell, player)), None, score_changed)
    }

    pub fn reset_scores(&mut self) -> ScoreBoard {
        self.scores.reset();
        info!("Scores reset.");
        self.scores
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    pub fn moves_played(&self) -> usize {
        self.board.filled_count()
    }

    /// Full state for an initial render or a resync. Not a move, so
    /// `accepted` is false and `cell`/`player` are empty.
    pub fn snapshot(&self) -> MoveResult {
        self.result(None, None, false)
    }

    fn validate(&self, cell: usize) -> Result<(), MoveRejection> {
        if self.status.is_over() {
            return Err(MoveRejection::RoundOver);
        }
        if cell >= CELL_COUNT {
            return Err(MoveRejection::OutOfRange(cell));
        }
        if !self.board.is_empty_cell(cell) {
            return Err(MoveRejection::CellTaken(cell));
        }
        Ok(())
    }

    fn result(
        &self,
        placed: Option<(usize, Player)>,
        rejection: Option<MoveRejection>,
        score_changed: bool,
    ) -> MoveResult {
        MoveResult {
            accepted: placed.is_some(),
            cell: placed.map(|(cell, _)| cell),
            player: placed.map(|(_, player)| player),
            board: self.board,
            current_player: self.current,
            status: self.status,
            win_line: self.win_line,
            scores: self.scores,
            score_changed,
            rejection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, cells: &[usize]) -> MoveResult {
        let mut last = engine.snapshot();
        for &cell in cells {
            last = engine.apply_move(cell);
            assert!(last.accepted, "move {} rejected: {:?}", cell, last.rejection);
        }
        last
    }

    #[test]
    fn test_new_engine_state() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.status(), RoundStatus::InProgress);
        assert_eq!(engine.scores(), ScoreBoard::default());
        assert_eq!(engine.moves_played(), 0);
        assert_eq!(engine.win_line(), None);
    }

    #[test]
    fn test_accepted_move_toggles_player() {
        let mut engine = GameEngine::new();
        let result = engine.apply_move(4);

        assert!(result.accepted);
        assert_eq!(result.cell, Some(4));
        assert_eq!(result.player, Some(Player::X));
        assert_eq!(result.current_player, Player::O);
        assert_eq!(result.board.get(4), Some(Player::X));
        assert!(!result.score_changed);
        assert_eq!(result.message(), "O's turn");
    }

    #[test]
    fn test_rejections() {
        let mut engine = GameEngine::new();
        engine.apply_move(0);

        let taken = engine.apply_move(0);
        assert!(!taken.accepted);
        assert_eq!(taken.rejection, Some(MoveRejection::CellTaken(0)));
        assert_eq!(taken.cell, None);

        let outside = engine.apply_move(9);
        assert_eq!(outside.rejection, Some(MoveRejection::OutOfRange(9)));
        assert_eq!(engine.current_player(), Player::O);
        assert_eq!(engine.moves_played(), 1);
    }

    #[test]
    fn test_win_keeps_winner_as_current() {
        let mut engine = GameEngine::new();
        let result = play(&mut engine, &[0, 3, 1, 4, 2]);

        assert_eq!(result.status, RoundStatus::Won(Player::X));
        assert_eq!(result.current_player, Player::X);
        assert_eq!(result.win_line, Some(WinLine([0, 1, 2])));
        assert!(result.score_changed);
        assert_eq!(result.message(), "X wins!");

        let after = engine.apply_move(8);
        assert_eq!(after.rejection, Some(MoveRejection::RoundOver));
        assert_eq!(after.win_line, Some(WinLine([0, 1, 2])));
    }

    #[test]
    fn test_start_round_clears_win_line() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        engine.start_round();

        assert_eq!(engine.win_line(), None);
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.scores().x, 1);
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(MoveRejection::CellTaken(3).to_string(), "cell 3 is already taken");
        assert_eq!(MoveRejection::OutOfRange(12).to_string(), "cell 12 is outside the board");
        assert_eq!(MoveRejection::RoundOver.to_string(), "round is already over");
    }
}
