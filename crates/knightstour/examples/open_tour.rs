//! Minimal example: find an open tour on a 5x5 board and print its path.

use std::error::Error;

use knightstour::{Square, Tour};

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    let mut tour = Tour::new(5, 5)?;
    let start = Square::new(0, 0);

    if tour.run_open(start)? {
        println!("Found a tour after {} nodes", tour.stats().nodes);
        for (step, square) in tour.path().unwrap_or_default().iter().enumerate() {
            println!("{step:2}: {square}");
        }
        assert_eq!(tour.step_order(start), Some(0));
    } else {
        println!("No tour from {start}");
    }
    // snips-end: example

    Ok(())
}
