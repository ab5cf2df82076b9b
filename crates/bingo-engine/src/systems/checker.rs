use crate::api::types::{NearWin, WinningLine};
use crate::core::card::{BingoCard, GRID_SIZE};

/// The 12 lines in their fixed evaluation order:
/// rows 0-4, columns 0-4, main diagonal, anti-diagonal.
pub fn all_lines() -> impl Iterator<Item = WinningLine> {
    (0..GRID_SIZE)
        .map(WinningLine::Row)
        .chain((0..GRID_SIZE).map(WinningLine::Col))
        .chain([WinningLine::Diag(0), WinningLine::Diag(1)])
}

/// The grid cells a line runs through.
pub fn line_cells(line: WinningLine) -> [(usize, usize); GRID_SIZE] {
    let mut cells = [(0, 0); GRID_SIZE];
    for (i, cell) in cells.iter_mut().enumerate() {
        *cell = match line {
            WinningLine::Row(r) => (r, i),
            WinningLine::Col(c) => (i, c),
            WinningLine::Diag(0) => (i, i),
            WinningLine::Diag(_) => (i, GRID_SIZE - 1 - i),
        };
    }
    cells
}

fn filled(card: &BingoCard, row: usize, col: usize) -> bool {
    card.square(row, col).map_or(false, |sq| sq.is_filled)
}

/// First fully-filled line under the fixed order, or None.
/// The free space counts as filled here, so lines through the center
/// need only their four real squares.
pub fn check_for_bingo(card: &BingoCard) -> Option<WinningLine> {
    all_lines().find(|&line| {
        line_cells(line)
            .iter()
            .all(|&(row, col)| filled(card, row, col))
    })
}

/// Any line with exactly one unfilled square. Advisory only, so the
/// first qualifying line in evaluation order is as good as any.
pub fn closest_to_win(card: &BingoCard) -> Option<NearWin> {
    all_lines()
        .find(|&line| {
            line_cells(line)
                .iter()
                .filter(|&&(row, col)| !filled(card, row, col))
                .count()
                == 1
        })
        .map(|line| NearWin { line, needed: 1 })
}

/// Total filled squares including the free space. Always recomputed
/// from the full grid so it cannot drift from ground truth.
pub fn count_filled(card: &BingoCard) -> usize {
    card.iter_squares().filter(|(_, _, sq)| sq.is_filled).count()
}
