use crate::game_service::model::{BoardView, CellView, Direction};

use tic_tac_toe_core::{GameEngine, MoveResult, CELL_COUNT};
use tracing::{debug, info};

/// Hot-seat session: one engine, the latest render state and keyboard focus.
pub struct GameService {
    engine: GameEngine,
    last: MoveResult,
    focus: usize,
}

impl Default for GameService {
    fn default() -> Self {
        let engine = GameEngine::new();
        let last = engine.snapshot();
        Self {
            engine,
            last,
            focus: 0,
        }
    }
}

impl GameService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the move was accepted. Rejections leave the view as is.
    pub fn play(&mut self, cell: usize) -> bool {
        let result = self.engine.apply_move(cell);

        if !result.accepted {
            if let Some(reason) = result.rejection {
                debug!("Ignoring click on cell {}: {}", cell, reason);
            }
            return false;
        }

        match serde_json::to_string(&result) {
            Ok(json) => debug!("Move applied: {}", json),
            Err(e) => debug!("Move applied (unserializable result: {})", e),
        }
        if result.score_changed {
            info!("{} Scores: {:?}", result.message(), result.scores);
            debug!("Final board:\n{}", result.board);
        }

        self.last = result;
        true
    }

    pub fn play_focused(&mut self) -> bool {
        self.play(self.focus)
    }

    pub fn restart(&mut self) {
        self.engine.start_round();
        self.last = self.engine.snapshot();
        info!("Round restarted.");
    }

    pub fn reset_all(&mut self) {
        let scores = self.engine.reset_scores();
        self.engine.start_round();
        self.last = self.engine.snapshot();
        info!("Scores and board reset: {:?}", scores);
    }

    pub fn move_focus(&mut self, direction: Direction) {
        self.focus = direction.step(self.focus);
    }

    /// Moves keyboard focus onto `cell`. Out-of-range cells are ignored.
    pub fn set_focus(&mut self, cell: usize) {
        if cell < CELL_COUNT {
            self.focus = cell;
        }
    }

    pub fn view(&self) -> BoardView {
        let last = &self.last;
        let round_over = last.status.is_over();

        let mut cells = [CellView::default(); CELL_COUNT];
        for (i, (cell, &mark)) in cells.iter_mut().zip(last.board.cells()).enumerate() {
            *cell = CellView {
                mark,
                playable: !round_over && mark.is_none(),
                highlighted: last.win_line.is_some_and(|line| line.contains(i)),
                focused: i == self.focus,
            };
        }

        BoardView {
            cells,
            current_player: last.current_player,
            status: last.status,
            banner: last.message(),
            scores: last.scores,
        }
    }
}
