use std::{
    cell::Cell,
    fmt,
    rc::Rc,
};

use crate::formatting::fmt_per_planet;


pub const ADDITIVE_OP_COST:        u64 = 3;
pub const MULTIPLICATIVE_OP_COST:  u64 = 7;
pub const BITWISE_OP_COST:         u64 = 1;

pub type SharedCostMeter = Rc<CostMeter>;

/// Operation classes a predictor is charged for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Additive,       // add, sub, compare
    Multiplicative, // mul, div, rem
    Bitwise,        // and, or, xor, shifts
}

/// Counts the operations a Robo predictor performs while metering is
/// enabled. The evaluation loop enables it only around the predictor's
/// own calls, so work done by the spaceship computer is never charged.
#[derive(Debug, Default)]
pub struct CostMeter {
    enabled:         Cell<bool>,
    additive:        Cell<u64>,
    multiplicative:  Cell<u64>,
    bitwise:         Cell<u64>,
}
impl CostMeter {
    pub fn new() -> CostMeter {
        CostMeter::default()
    }

    pub fn shared() -> SharedCostMeter {
        Rc::new(CostMeter::new())
    }

    pub fn enable(&self) {
        self.enabled.set(true);
    }

    pub fn disable(&self) {
        self.enabled.set(false);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Charge `n` operations of class `op`. Ignored while disabled.
    pub fn charge(&self, op: Op, n: u64) {
        if !self.enabled.get() {
            return;
        }
        let counter = match op {
            Op::Additive       => &self.additive,
            Op::Multiplicative => &self.multiplicative,
            Op::Bitwise        => &self.bitwise,
        };
        counter.set(counter.get() + n);
    }

    pub fn counts(&self) -> OpCounts {
        OpCounts {
            additive:        self.additive.get(),
            multiplicative:  self.multiplicative.get(),
            bitwise:         self.bitwise.get(),
        }
    }
}

/// Snapshot of a CostMeter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub additive:        u64,
    pub multiplicative:  u64,
    pub bitwise:         u64,
}
impl OpCounts {
    /// Weighted computational cost.
    pub fn metric(&self) -> u64 {
        self.additive * ADDITIVE_OP_COST
        + self.multiplicative * MULTIPLICATIVE_OP_COST
        + self.bitwise * BITWISE_OP_COST
    }

    /// Pair with a planet count for per-planet reporting.
    pub fn per_planet(self, planets: u64) -> CostReport {
        CostReport { counts: self, planets }
    }
}

pub struct CostReport {
    counts:   OpCounts,
    planets:  u64,
}
impl fmt::Display for CostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counts;
        writeln!(f, "Number of additive instructions: {} ({} per planet)",
            c.additive, fmt_per_planet(c.additive, self.planets))?;
        writeln!(f, "Number of multiplicative instructions: {} ({} per planet)",
            c.multiplicative, fmt_per_planet(c.multiplicative, self.planets))?;
        writeln!(f, "Number of bitwise instructions: {} ({} per planet)",
            c.bitwise, fmt_per_planet(c.bitwise, self.planets))?;
        write!(f, "Metric of computational cost: {} ({} per planet)",
            c.metric(), fmt_per_planet(c.metric(), self.planets))
    }
}
