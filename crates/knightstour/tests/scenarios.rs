//! Integration tests for concrete boards and the feasibility gates.
#[cfg(test)]
mod tests {
    use knightstour::{
        Engine, Outcome, Square, Tour, TourKind, error, feasibility::Obstruction,
        moves::is_knight_move,
    };

    /// Check that a solved tour's step orders are a permutation of
    /// `0..area` and that consecutive steps are knight moves apart.
    fn assert_valid_tour(tour: &Tour, start: Square, kind: TourKind) {
        let (w, h) = (tour.width() as i32, tour.height() as i32);
        let area = (w * h) as usize;
        let mut by_step = vec![None; area];
        for y in 0..h {
            for x in 0..w {
                let sq = Square::new(x, y);
                let step = tour.step_order(sq).expect("every square has a step") as usize;
                assert!(step < area, "step {step} out of range");
                assert!(by_step[step].replace(sq).is_none(), "step {step} repeated");
            }
        }
        let path: Vec<Square> = by_step.into_iter().map(|s| s.expect("step")).collect();
        assert_eq!(path[0], start);
        for pair in path.windows(2) {
            assert!(
                is_knight_move(pair[0], pair[1]),
                "{} -> {} is not a knight move",
                pair[0],
                pair[1]
            );
        }
        if kind == TourKind::Closed {
            assert!(
                is_knight_move(path[area - 1], start),
                "closed tour does not return to {start}"
            );
        }
        assert_eq!(tour.path(), Some(path));
    }

    macro_rules! tour_tests {
        ($(($kind:ident, $w:expr, $h:expr, $x:expr, $y:expr)),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<$kind:lower _ $w x $h _from_ $x _ $y>]() -> error::Result<()> {
                        let start = Square::new($x, $y);
                        let mut tour = Tour::new($w, $h)?;
                        let outcome = tour.run(TourKind::$kind, start)?;
                        assert_eq!(outcome, Outcome::Solved);
                        assert_valid_tour(&tour, start, TourKind::$kind);
                        Ok(())
                    }
                }
            )*
        };
    }

    tour_tests! {
        (Open, 1, 1, 0, 0),
        (Open, 5, 5, 0, 0),
        (Open, 5, 5, 2, 2),
        (Open, 3, 4, 0, 0),
        (Open, 6, 6, 0, 0),
        (Open, 7, 7, 0, 0),
        (Open, 8, 8, 0, 0),
        (Open, 8, 8, 3, 4),
        (Open, 10, 10, 0, 0),
        (Open, 12, 9, 0, 0),
        (Closed, 6, 6, 0, 1),
        (Closed, 6, 6, 2, 3),
        (Closed, 8, 8, 0, 1),
        (Closed, 6, 8, 0, 2),
        (Closed, 3, 10, 0, 2),
        (Closed, 10, 10, 0, 3),
    }

    /// The corner start needs deep backtracking before Warnsdorff's order
    /// finds a closing path.
    #[test]
    fn closed_6x6_from_corner() -> error::Result<()> {
        let start = Square::new(0, 0);
        let mut tour = Tour::new(6, 6)?;
        assert!(tour.run_closed(start)?);
        assert_valid_tour(&tour, start, TourKind::Closed);
        assert!(tour.stats().backtracks > 0);
        Ok(())
    }

    #[test]
    fn single_square_step_order() -> error::Result<()> {
        let mut tour = Tour::new(1, 1)?;
        assert!(tour.run_open(Square::new(0, 0))?);
        assert_eq!(tour.step_order(Square::new(0, 0)), Some(0));
        Ok(())
    }

    #[test]
    fn open_gate_never_searches() -> error::Result<()> {
        for w in (1..=9).step_by(2) {
            for h in (1..=9).step_by(2) {
                let mut tour = Tour::new(w, h)?;
                for y in 0..h as i32 {
                    for x in 0..w as i32 {
                        if (x + y) % 2 == 0 {
                            continue;
                        }
                        let outcome = tour.run(TourKind::Open, Square::new(x, y))?;
                        assert_eq!(outcome, Outcome::Infeasible(Obstruction::ColorParity));
                        assert_eq!(tour.stats().nodes, 0, "{w}x{h} from ({x}, {y})");
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn closed_gate_never_searches() -> error::Result<()> {
        let mut boards = vec![(3, 4), (4, 3), (3, 6), (6, 3), (3, 8), (8, 3), (3, 3), (5, 7)];
        for side in [1, 2, 4] {
            for other in 1..=10 {
                boards.push((side, other));
                boards.push((other, side));
            }
        }
        for (w, h) in boards {
            let mut tour = Tour::new(w, h)?;
            assert!(!tour.run_closed(Square::new(0, 0))?, "{w}x{h}");
            assert_eq!(tour.stats().nodes, 0, "{w}x{h}");
            assert!(matches!(
                tour.run(TourKind::Closed, Square::new(0, 0))?,
                Outcome::Infeasible(_)
            ));
        }
        Ok(())
    }

    #[test]
    fn small_boards_without_closed_tours() -> error::Result<()> {
        for (w, h, x, y) in [(3, 3, 0, 0), (3, 3, 1, 1), (3, 3, 2, 1), (4, 4, 0, 0), (4, 4, 2, 1)] {
            let mut tour = Tour::new(w, h)?;
            assert!(!tour.run_closed(Square::new(x, y))?);
        }
        Ok(())
    }

    #[test]
    fn boards_without_open_tours_exhaust() -> error::Result<()> {
        for (w, h) in [(2, 2), (4, 4), (1, 5)] {
            let mut tour = Tour::new(w, h)?;
            assert_eq!(
                tour.run(TourKind::Open, Square::new(0, 0))?,
                Outcome::Exhausted,
                "{w}x{h}"
            );
            assert!(tour.stats().nodes > 0);
        }
        Ok(())
    }

    #[test]
    fn large_board_uses_explicit_stack() -> error::Result<()> {
        let start = Square::new(0, 0);
        let mut tour = Tour::new(25, 25)?.with_engine(Engine::Stack);
        assert!(tour.run_open(start)?);
        assert_valid_tour(&tour, start, TourKind::Open);

        let mut recursive = Tour::new(25, 25)?.with_engine(Engine::Recursive);
        assert!(recursive.run_open(start)?);
        assert_eq!(recursive.path(), tour.path());
        Ok(())
    }

    #[test]
    fn find_tour_shortcut() -> error::Result<()> {
        let path = knightstour::find_tour(5, 5, Square::new(0, 0), TourKind::Open)?;
        assert_eq!(path.map(|p| p.len()), Some(25));
        assert_eq!(
            knightstour::find_tour(3, 3, Square::new(0, 0), TourKind::Closed)?,
            None
        );
        assert!(knightstour::find_tour(3, 3, Square::new(3, 0), TourKind::Open).is_err());
        Ok(())
    }
}
