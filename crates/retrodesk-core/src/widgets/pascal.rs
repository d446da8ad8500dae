//! Pascal's triangle and the hexagon board that reveals it.

use serde::{Deserialize, Serialize};

pub const MAX_HEIGHT: u8 = 15;

/// Delay between successive diagonals of the reveal.
pub const REVEAL_STEP_MS: u64 = 300;

/// Length of each cell's pop-in.
pub const POP_IN_MS: u64 = 500;

/// Rows `0..=height` of the triangle, each built from adjacent sums of the
/// row above.
pub fn pascal(height: usize) -> Vec<Vec<u64>> {
    let mut rows: Vec<Vec<u64>> = vec![vec![1]];

    for _ in 0..height {
        let Some(last) = rows.last() else { break };
        let mut next = Vec::with_capacity(last.len() + 1);
        next.push(1);
        next.extend(last.windows(2).map(|pair| pair[0] + pair[1]));
        next.push(1);
        rows.push(next);
    }

    rows
}

/// Animation timing for one revealed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealCell {
    pub row: usize,
    pub col: usize,
    pub value: u64,
    pub delay_ms: u64,
    pub duration_ms: u64,
}

/// Cell (r, c) starts after `(r + c) * REVEAL_STEP_MS`.
pub fn reveal_schedule(rows: &[Vec<u64>]) -> Vec<RevealCell> {
    rows.iter()
        .enumerate()
        .flat_map(|(row, values)| {
            values.iter().enumerate().map(move |(col, &value)| RevealCell {
                row,
                col,
                value,
                delay_ms: (row + col) as u64 * REVEAL_STEP_MS,
                duration_ms: POP_IN_MS,
            })
        })
        .collect()
}

/// Height picker plus the generated triangle.
///
/// The picker is only live while the board is empty; once a triangle is
/// shown, only [`PascalBoard::reset`] does anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PascalBoard {
    height: u8,
    rows: Vec<Vec<u64>>,
}

impl PascalBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    pub fn is_generated(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Returns false at the upper bound or while a triangle is shown.
    pub fn increment(&mut self) -> bool {
        if self.is_generated() || self.height >= MAX_HEIGHT {
            return false;
        }
        self.height += 1;
        true
    }

    /// Returns false at zero or while a triangle is shown.
    pub fn decrement(&mut self) -> bool {
        if self.is_generated() || self.height == 0 {
            return false;
        }
        self.height -= 1;
        true
    }

    /// Builds the triangle for the picked height and resets the picker.
    pub fn generate(&mut self) -> bool {
        if self.is_generated() {
            return false;
        }
        self.rows = pascal(usize::from(self.height));
        self.height = 0;
        true
    }

    pub fn reset(&mut self) {
        self.rows.clear();
        self.height = 0;
    }

    pub fn reveal(&self) -> Vec<RevealCell> {
        reveal_schedule(&self.rows)
    }

    /// Time until the last cell has fully appeared.
    pub fn reveal_duration_ms(&self) -> u64 {
        self.reveal()
            .iter()
            .map(|cell| cell.delay_ms + cell.duration_ms)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_triangles() {
        assert_eq!(pascal(0), vec![vec![1]]);
        assert_eq!(pascal(1), vec![vec![1], vec![1, 1]]);
        assert_eq!(pascal(2), vec![vec![1], vec![1, 1], vec![1, 2, 1]]);
    }

    #[test]
    fn test_max_height_row() {
        let rows = pascal(usize::from(MAX_HEIGHT));
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[15][7], 6435);
        assert_eq!(rows[15].iter().sum::<u64>(), 1 << 15);
    }

    #[test]
    fn test_reveal_delays_follow_diagonals() {
        let cells = reveal_schedule(&pascal(2));
        let delays: Vec<u64> = cells.iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![0, 300, 600, 600, 900, 1200]);
        assert!(cells.iter().all(|c| c.duration_ms == POP_IN_MS));
    }

    #[test]
    fn test_picker_bounds() {
        let mut board = PascalBoard::new();
        assert!(!board.decrement());
        for _ in 0..MAX_HEIGHT {
            assert!(board.increment());
        }
        assert!(!board.increment());
        assert_eq!(board.height(), MAX_HEIGHT);
    }

    #[test]
    fn test_generate_resets_height_and_locks_picker() {
        let mut board = PascalBoard::new();
        board.increment();
        board.increment();

        assert!(board.generate());
        assert_eq!(board.rows().len(), 3);
        assert_eq!(board.height(), 0);

        assert!(!board.increment());
        assert!(!board.generate());
        assert_eq!(board.reveal_duration_ms(), 1700);

        board.reset();
        assert!(!board.is_generated());
        assert!(board.increment());
    }
}
