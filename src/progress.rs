use std::{
    io::{self, Write},
    time::Instant,
};


const PB_WIDTH: usize = 60;
const REDRAW_MSK: u64 = 1023;

/// Tracks evaluation progress through a route and draws a progress bar.
#[derive(Copy, Clone, Debug)]
pub struct Progress {
    total:  u64,     // Planets on the route
    time:   Instant, // Start of evaluation
    quiet:  bool,    // Don't draw anything
}
impl Progress {
    pub fn new(total: u64, quiet: bool) -> Progress {
        Progress {
            total,
            time: Instant::now(),
            quiet,
        }
    }

    /// Redraw the bar every 1024 planets.
    pub fn update(&self, visited: u64) {
        if !self.quiet && visited & REDRAW_MSK == 0 {
            self.print_bar(visited);
        }
    }

    fn print_bar(&self, visited: u64) {
        print!("\r{}", bar(visited, self.total));
        // A failed flush only delays the redraw
        let _ = io::stdout().flush();
    }

    /// Draw the final state of the bar and end its line.
    pub fn finish(&self, visited: u64) {
        if !self.quiet {
            self.print_bar(visited);
            println!(" (Time elapsed: {:.2?})", self.time.elapsed());
        }
    }
}

/// Render a bar such as " 50% [||||      ]".
pub fn bar(visited: u64, total: u64) -> String {
    let fraction = if total == 0 { 1.0 } else { (visited as f64 / total as f64).min(1.0) };
    let fill = (fraction * PB_WIDTH as f64) as usize;
    format!("{:3}% [{}{}]",
        (fraction * 100.0) as u32,
        "|".repeat(fill),
        " ".repeat(PB_WIDTH - fill))
}
