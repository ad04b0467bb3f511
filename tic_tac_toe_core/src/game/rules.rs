use super::models::{Board, Player, RoundStatus, WinLine};

/// Rows top-to-bottom, columns left-to-right, then the down and up diagonals.
/// Outcome reporting depends on this order.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// First line in `WIN_LINES` order held entirely by one player.
pub fn winning_line(board: &Board) -> Option<(Player, WinLine)> {
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match board.get(a) {
            Some(player) if board.get(b) == Some(player) && board.get(c) == Some(player) => {
                Some((player, *line))
            }
            _ => None,
        }
    })
}

/// Lines first, then fullness.
pub fn check_outcome(board: &Board) -> (RoundStatus, Option<WinLine>) {
    if let Some((player, line)) = winning_line(board) {
        return (RoundStatus::Won(player), Some(line));
    }
    if board.is_full() {
        (RoundStatus::Drawn, None)
    } else {
        (RoundStatus::InProgress, None)
    }
}
