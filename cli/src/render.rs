use std::fmt::Write;

use minekeeper_core::{CellView, Outcome, Snapshot};

use crate::timer::format_seconds;

pub(crate) const fn cell_char(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Mine => '*',
        CellView::FlaggedMine => 'X',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => (b'0' + count) as char,
    }
}

/// Draws the grid with zero-based row and column headers.
pub(crate) fn render_board(snapshot: &Snapshot) -> String {
    let (_, cols) = snapshot.size;
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..cols {
        let _ = write!(out, "{:>3}", col);
    }
    out.push('\n');

    for (row, cells) in snapshot.rows().enumerate() {
        let _ = write!(out, "{:>3}", row);
        for view in cells {
            let _ = write!(out, "{:>3}", cell_char(view));
        }
        out.push('\n');
    }
    out
}

pub(crate) fn render_status(snapshot: &Snapshot, elapsed_secs: u64) -> String {
    let mut status = format!(
        "Score {} | Flags {}/{} | Time {}",
        snapshot.score,
        snapshot.flags_count,
        snapshot.mine_count,
        format_seconds(elapsed_secs)
    );
    match snapshot.outcome {
        Outcome::InProgress => {}
        Outcome::Won => status.push_str("\nYou Win!"),
        Outcome::Lost => status.push_str("\nGame Over"),
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use minekeeper_core::{FixedMinePlacer, GameConfig, GameSession};

    fn snapshot_after_reveal() -> Snapshot {
        let mut game = GameSession::with_placer(
            GameConfig::new((3, 4), 1),
            FixedMinePlacer::new([(2, 3)]),
        )
        .unwrap();
        game.reveal((0, 0)).unwrap();
        game.snapshot()
    }

    #[test]
    fn characters_cover_every_view() {
        assert_eq!(cell_char(CellView::Hidden), '#');
        assert_eq!(cell_char(CellView::Flagged), 'F');
        assert_eq!(cell_char(CellView::Mine), '*');
        assert_eq!(cell_char(CellView::FlaggedMine), 'X');
        assert_eq!(cell_char(CellView::Revealed(0)), '.');
        assert_eq!(cell_char(CellView::Revealed(8)), '8');
    }

    #[test]
    fn board_has_headers_and_rows() {
        let board = render_board(&snapshot_after_reveal());
        let lines: Vec<_> = board.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "     0  1  2  3");
        assert_eq!(lines[1], "  0  .  .  .  .");
        assert_eq!(lines[2], "  1  .  .  1  1");
        assert_eq!(lines[3], "  2  .  .  1  #");
    }

    #[test]
    fn status_reports_outcome() {
        let status = render_status(&snapshot_after_reveal(), 61);
        assert_eq!(status, "Score 11 | Flags 0/1 | Time 01:01\nYou Win!");
    }
}
