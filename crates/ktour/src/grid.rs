//! Text rendering of a solved board.
//!
//! Each board row becomes one line and each cell holds the 1-indexed step
//! at which the knight visits it.

use knightstour::{Square, Tour};

/// Separator between adjacent cells.
const CELL_GAP: &str = "  ";

/// Number of decimal digits needed to print `n`.
fn digits(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Render a `width`×`height` grid, looking up each cell's 0-based step with
/// `step_at`.
///
/// Steps print 1-indexed and zero-padded to the width of the largest step.
/// Cells without a step print as dashes.
pub fn render(width: u32, height: u32, step_at: impl Fn(Square) -> Option<u32>) -> String {
    let pad = digits(width.saturating_mul(height));
    let mut out = String::new();
    for y in 0..height as i32 {
        let row: Vec<String> = (0..width as i32)
            .map(|x| match step_at(Square::new(x, y)) {
                Some(step) => format!("{:0pad$}", step + 1),
                None => "-".repeat(pad),
            })
            .collect();
        out.push_str(&row.join(CELL_GAP));
        out.push('\n');
    }
    out
}

/// Render the last tour found by `tour`.
pub fn render_tour(tour: &Tour) -> String {
    render(tour.width(), tour.height(), |square| tour.step_order(square))
}
