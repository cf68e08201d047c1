//! Visit order of each square along the tour.

use crate::{
    board::Board,
    error::{Error, Result},
    square::Square,
};

/// Maps every square to the step at which the knight visited it.
///
/// After a successful search the recorded steps form a bijection onto
/// `0..area`. After a failed search the contents are meaningless: entries
/// written by abandoned branches are never cleaned up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOrder {
    /// Row-major step per square; `None` until first recorded.
    steps: Vec<Option<u32>>,
}

impl StepOrder {
    /// An empty recorder sized for `board`.
    pub fn new(board: &Board) -> Self {
        Self {
            steps: vec![None; board.area() as usize],
        }
    }

    /// Forget every recorded step.
    pub fn clear(&mut self) {
        self.steps.fill(None);
    }

    /// Record that `square` is visited at `step`.
    pub fn record(&mut self, board: &Board, square: Square, step: u32) -> Result<()> {
        let area = board.area();
        if step >= area {
            return Err(Error::StepOutOfRange { step, area });
        }
        let idx = board.index(square).ok_or(Error::OffBoard {
            square,
            width: board.width(),
            height: board.height(),
        })?;
        self.steps[idx] = Some(step);
        Ok(())
    }

    /// The step recorded for `square`, if any.
    pub fn get(&self, board: &Board, square: Square) -> Option<u32> {
        board.index(square).and_then(|idx| self.steps[idx])
    }

    /// Squares ordered by their recorded step.
    ///
    /// Returns `None` unless every square holds a distinct step, which is
    /// only guaranteed after a successful search.
    pub fn path(&self, board: &Board) -> Option<Vec<Square>> {
        let mut path: Vec<Option<Square>> = vec![None; self.steps.len()];
        for (square, &step) in board.squares().zip(&self.steps) {
            let slot = path.get_mut(step? as usize)?;
            if slot.replace(square).is_some() {
                return None;
            }
        }
        path.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_lookup() -> Result<()> {
        let board = Board::new(3, 2)?;
        let mut steps = StepOrder::new(&board);
        let s = Square::new(2, 1);
        assert_eq!(steps.get(&board, s), None);
        steps.record(&board, s, 5)?;
        assert_eq!(steps.get(&board, s), Some(5));
        steps.record(&board, s, 2)?;
        assert_eq!(steps.get(&board, s), Some(2));
        assert_eq!(steps.get(&board, Square::new(3, 1)), None);
        steps.clear();
        assert_eq!(steps.get(&board, s), None);
        Ok(())
    }

    #[test]
    fn step_overflow_is_an_error() -> Result<()> {
        let board = Board::new(2, 2)?;
        let mut steps = StepOrder::new(&board);
        assert_eq!(
            steps.record(&board, Square::new(0, 0), 4),
            Err(Error::StepOutOfRange { step: 4, area: 4 })
        );
        assert!(matches!(
            steps.record(&board, Square::new(2, 0), 1),
            Err(Error::OffBoard { .. })
        ));
        Ok(())
    }

    #[test]
    fn path_requires_a_bijection() -> Result<()> {
        let board = Board::new(2, 1)?;
        let mut steps = StepOrder::new(&board);
        assert_eq!(steps.path(&board), None);

        steps.record(&board, Square::new(0, 0), 1)?;
        assert_eq!(steps.path(&board), None);

        steps.record(&board, Square::new(1, 0), 1)?;
        assert_eq!(steps.path(&board), None, "duplicate steps");

        steps.record(&board, Square::new(1, 0), 0)?;
        assert_eq!(
            steps.path(&board),
            Some(vec![Square::new(1, 0), Square::new(0, 0)])
        );
        Ok(())
    }
}
