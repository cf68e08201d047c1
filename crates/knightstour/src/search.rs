//! Depth-first backtracking over knight moves.
//!
//! Each node marks its square, records the step, and either checks the
//! finishing condition (last square) or tries its ranked candidates in
//! order. A node that runs out of candidates unmarks its square and reports
//! failure to its parent. The first complete path wins; nothing else is
//! explored after it.

use log::trace;
use smallvec::SmallVec;

use crate::{
    board::Board,
    error::Result,
    moves::{self, Rotation},
    rank::{self, Candidate},
    square::Square,
    steps::StepOrder,
};

/// Where the backtracking state lives.
///
/// Both engines visit nodes in exactly the same order and therefore find
/// the same tour; they differ only in how deep a path they can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Engine {
    /// Native recursion, one call frame per square on the path.
    Recursive,
    /// An explicit, heap-allocated stack of search frames.
    Stack,
}

impl Engine {
    /// Largest board area searched with [`Engine::Recursive`] by default.
    pub const RECURSION_LIMIT: u32 = 1024;

    /// The default engine for a board with `area` squares.
    pub fn for_area(area: u32) -> Self {
        if area <= Self::RECURSION_LIMIT {
            Self::Recursive
        } else {
            Self::Stack
        }
    }
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Squares entered, including the start.
    pub nodes: u64,
    /// Squares unmarked again after a dead end.
    pub backtracks: u64,
}

/// A node whose candidates are still being tried.
#[derive(Debug)]
struct Frame {
    /// Square this node occupies.
    square: Square,
    /// Ranked next squares.
    candidates: SmallVec<[Candidate; 8]>,
    /// Index of the next candidate to try.
    cursor: usize,
}

impl Frame {
    /// Advance to the next untried candidate.
    fn next_candidate(&mut self) -> Option<Square> {
        let candidate = self.candidates.get(self.cursor)?;
        self.cursor += 1;
        Some(candidate.square)
    }
}

/// Result of entering a square.
#[derive(Debug)]
enum Entered {
    /// The square completed the tour.
    Solved,
    /// The square was the last one but failed the closing check; it has
    /// already been unmarked.
    DeadEnd,
    /// An interior node with candidates to explore.
    Open(Frame),
}

/// One search over a board and step recorder it borrows exclusively.
#[derive(Debug)]
pub struct Search<'a> {
    /// Visited grid, mutated in place.
    board: &'a mut Board,
    /// Step recorder, mutated in place.
    steps: &'a mut StepOrder,
    /// Square the final move must reach, for closed tours.
    target: Option<Square>,
    /// Enumeration order for candidate moves.
    rotation: Rotation,
    /// Counters.
    stats: SearchStats,
}

impl<'a> Search<'a> {
    /// Prepare a search. `target` is `None` for an open tour and the square
    /// the tour must close on otherwise.
    pub fn new(
        board: &'a mut Board,
        steps: &'a mut StepOrder,
        target: Option<Square>,
        rotation: Rotation,
    ) -> Self {
        Self {
            board,
            steps,
            target,
            rotation,
            stats: SearchStats::default(),
        }
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search for a tour from `start`. Returns `Ok(true)` with the board and
    /// steps holding the tour, or `Ok(false)` with the board fully unmarked.
    pub fn run(&mut self, engine: Engine, start: Square) -> Result<bool> {
        match engine {
            Engine::Recursive => self.descend(start, 0),
            Engine::Stack => {
                trace!(
                    "using explicit stack for {}x{} board",
                    self.board.width(),
                    self.board.height()
                );
                self.iterate(start)
            }
        }
    }

    /// Mark and record `square`, then either settle the last step or rank
    /// the candidates for the next one.
    fn enter(&mut self, square: Square, step: u32) -> Result<Entered> {
        self.stats.nodes += 1;
        self.board.set_visited(square, true);
        self.steps.record(self.board, square, step)?;

        if step + 1 == self.board.area() {
            if self.closes_at(square) {
                return Ok(Entered::Solved);
            }
            self.leave(square);
            return Ok(Entered::DeadEnd);
        }

        Ok(Entered::Open(Frame {
            square,
            candidates: rank::ranked_candidates(self.board, square, self.rotation),
            cursor: 0,
        }))
    }

    /// Backtrack out of `square`.
    fn leave(&mut self, square: Square) {
        self.board.set_visited(square, false);
        self.stats.backtracks += 1;
    }

    /// Can a tour ending on `square` satisfy the target?
    fn closes_at(&self, square: Square) -> bool {
        self.target.is_none_or(|target| {
            moves::destinations(square, Rotation::CANONICAL).contains(&target)
        })
    }

    /// Recursive engine.
    fn descend(&mut self, square: Square, step: u32) -> Result<bool> {
        let mut frame = match self.enter(square, step)? {
            Entered::Solved => return Ok(true),
            Entered::DeadEnd => return Ok(false),
            Entered::Open(frame) => frame,
        };
        while let Some(next) = frame.next_candidate() {
            if self.descend(next, step + 1)? {
                return Ok(true);
            }
        }
        self.leave(square);
        Ok(false)
    }

    /// Explicit-stack engine.
    fn iterate(&mut self, start: Square) -> Result<bool> {
        let mut stack: Vec<Frame> = Vec::with_capacity(self.board.area() as usize);
        match self.enter(start, 0)? {
            Entered::Solved => return Ok(true),
            Entered::DeadEnd => return Ok(false),
            Entered::Open(frame) => stack.push(frame),
        }

        while let Some(frame) = stack.last_mut() {
            let Some(next) = frame.next_candidate() else {
                let square = frame.square;
                stack.pop();
                self.leave(square);
                continue;
            };
            // The new square sits one below the deepest frame.
            let step = stack.len() as u32;
            match self.enter(next, step)? {
                Entered::Solved => return Ok(true),
                Entered::DeadEnd => {}
                Entered::Open(frame) => stack.push(frame),
            }
        }
        Ok(false)
    }
}
