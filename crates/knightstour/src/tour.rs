//! Board configuration, tour runs and result lookup.

use std::fmt;

use log::{debug, info};

use crate::{
    board::Board,
    error::{Error, Result},
    feasibility::{self, Obstruction},
    moves::Rotation,
    search::{Engine, Search, SearchStats},
    square::Square,
    steps::StepOrder,
};

/// Whether the tour must return to its start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TourKind {
    /// Any finishing square is acceptable.
    Open,
    /// The last square must be a knight move away from the start.
    Closed,
}

impl fmt::Display for TourKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Closed => "closed",
        })
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A tour was found and can be read back.
    Solved,
    /// A feasibility gate proved no tour exists; nothing was searched.
    Infeasible(Obstruction),
    /// The search explored every ranked branch without finding a tour.
    Exhausted,
}

impl Outcome {
    /// Did the run produce a tour?
    pub fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// A board together with the state of its most recent run.
///
/// ```
/// use knightstour::{Square, Tour};
///
/// let mut tour = Tour::new(5, 5)?;
/// assert!(tour.run_open(Square::new(0, 0))?);
/// assert_eq!(tour.step_order(Square::new(0, 0)), Some(0));
/// # Ok::<(), knightstour::error::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Tour {
    /// Visited grid.
    board: Board,
    /// Visit order per square.
    steps: StepOrder,
    /// Candidate enumeration order.
    rotation: Rotation,
    /// Engine override; chosen from the board area when unset.
    engine: Option<Engine>,
    /// Counters from the last run.
    stats: SearchStats,
    /// Whether the last run found a tour.
    solved: bool,
}

impl Tour {
    /// Configure a `width`×`height` board with cleared state.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let board = Board::new(width, height)?;
        let steps = StepOrder::new(&board);
        Ok(Self {
            board,
            steps,
            rotation: Rotation::CANONICAL,
            engine: None,
            stats: SearchStats::default(),
            solved: false,
        })
    }

    /// Use `rotation` for candidate enumeration.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Force a particular search engine.
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Board width.
    pub fn width(&self) -> u32 {
        self.board.width()
    }

    /// Board height.
    pub fn height(&self) -> u32 {
        self.board.height()
    }

    /// Engine used by the next run.
    pub fn engine(&self) -> Engine {
        self.engine
            .unwrap_or_else(|| Engine::for_area(self.board.area()))
    }

    /// Rotation used by the next run.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Clear the board, the recorded steps and the counters.
    ///
    /// Every run calls this first, so an explicit call is only needed to
    /// discard a previous result.
    pub fn reset(&mut self) {
        self.board.clear();
        self.steps.clear();
        self.stats = SearchStats::default();
        self.solved = false;
    }

    /// Search for an open tour from `start`.
    pub fn run_open(&mut self, start: Square) -> Result<bool> {
        Ok(self.run(TourKind::Open, start)?.is_solved())
    }

    /// Search for a closed tour from `start`.
    pub fn run_closed(&mut self, start: Square) -> Result<bool> {
        Ok(self.run(TourKind::Closed, start)?.is_solved())
    }

    /// Check feasibility, then search. Fails only for a start square that
    /// lies off the board.
    pub fn run(&mut self, kind: TourKind, start: Square) -> Result<Outcome> {
        let (width, height) = (self.width(), self.height());
        if !self.board.contains(start) {
            return Err(Error::OffBoard {
                square: start,
                width,
                height,
            });
        }
        self.reset();

        let obstruction = match kind {
            TourKind::Open => feasibility::open_tour(width, height, start),
            TourKind::Closed => feasibility::closed_tour(width, height),
        };
        if let Some(obstruction) = obstruction {
            info!("no {kind} tour on {width}x{height} from {start}: {obstruction}");
            return Ok(Outcome::Infeasible(obstruction));
        }

        let engine = self.engine();
        debug!(
            "searching {kind} tour on {width}x{height} from {start} (rotation {}, {engine:?})",
            self.rotation
        );
        let target = match kind {
            TourKind::Open => None,
            TourKind::Closed => Some(start),
        };
        let mut search = Search::new(&mut self.board, &mut self.steps, target, self.rotation);
        let found = search.run(engine, start);
        self.stats = search.stats();
        self.solved = found?;

        debug!(
            "{kind} tour on {width}x{height} {} after {} nodes ({} backtracks)",
            if self.solved { "found" } else { "exhausted" },
            self.stats.nodes,
            self.stats.backtracks
        );
        Ok(if self.solved {
            Outcome::Solved
        } else {
            Outcome::Exhausted
        })
    }

    /// Did the last run find a tour?
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The 0-based visit order of `square` in the last tour found.
    ///
    /// `None` before a successful run or for squares off the board.
    pub fn step_order(&self, square: Square) -> Option<u32> {
        if !self.solved {
            return None;
        }
        self.steps.get(&self.board, square)
    }

    /// The squares of the last tour found, in visit order.
    pub fn path(&self) -> Option<Vec<Square>> {
        if !self.solved {
            return None;
        }
        self.steps.path(&self.board)
    }

    /// Counters from the last run; all zero when a gate rejected it.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
