use std::fmt;

use crate::formatting::fmt_sig;


/// Running accuracy statistics for one route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreAccumulator {
    total:    u64, // Planets on the route, fixed at load time
    visited:  u64, // Planets processed so far
    correct:  u64, // Correct final predictions so far
}
impl ScoreAccumulator {
    pub fn new(total: u64) -> ScoreAccumulator {
        ScoreAccumulator { total, visited: 0, correct: 0 }
    }

    /// Count one visited planet and whether Robo got it right.
    pub fn record(&mut self, prediction: bool, outcome: bool) {
        self.visited += 1;
        self.correct += (prediction == outcome) as u64;
    }

    pub fn visited(&self) -> u64 {
        self.visited
    }

    /// Freeze the statistics.
    pub fn finish(self) -> Report {
        Report {
            total:    self.total,
            visited:  self.visited,
            correct:  self.correct,
        }
    }
}

/// Final statistics of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub total:    u64,
    pub visited:  u64,
    pub correct:  u64,
}
impl Report {
    /// Percentage of correct predictions over the whole route.
    ///
    /// The denominator is the route's total planet count, not the number of
    /// planets visited, so a run cut short by a bad record scores lower.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }
}
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total number of planets visited {}", self.visited)?;
        write!(f, "Prediction accuracy {}%", fmt_sig(self.accuracy(), 4))
    }
}
