use clap::ValueEnum;

use crate::cost::{Op, SharedCostMeter};


/// Upper bound on the memory a Robo predictor may keep between planets.
pub const ROBO_MEMORY_LIMIT: usize = 64 * 1024;

/// The prediction algorithm under evaluation.
///
/// For every planet the evaluation loop calls predict() and then observe()
/// with the same planet ID before moving on, so an implementation may carry
/// state from one call to the other.
pub trait RoboPredictor {
    /// Predict the time-of-day on the next planet given the spaceship
    /// computer's suggestion and, for atlas routes, the planet's group tag.
    fn predict(&mut self, planet_id: u64, hint: bool, group_tag: Option<u16>) -> bool;

    /// Learn the actual time-of-day on the planet just predicted.
    fn observe(&mut self, planet_id: u64, time_of_day: bool);
}
impl<P: RoboPredictor + ?Sized> RoboPredictor for Box<P> {
    fn predict(&mut self, planet_id: u64, hint: bool, group_tag: Option<u16>) -> bool {
        (**self).predict(planet_id, hint, group_tag)
    }
    fn observe(&mut self, planet_id: u64, time_of_day: bool) {
        (**self).observe(planet_id, time_of_day)
    }
}

/// Built-in predictors selectable from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PredictorKind {
    /// Always follow the spaceship computer
    #[default]
    FollowHint,
    /// Per planet and group counters, falling back to the spaceship computer
    GroupBimodal,
}
impl PredictorKind {
    pub fn build(self, meter: SharedCostMeter) -> Box<dyn RoboPredictor> {
        match self {
            PredictorKind::FollowHint   => Box::new(FollowHint),
            PredictorKind::GroupBimodal => Box::new(GroupBimodal::new(meter)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PredictorKind::FollowHint   => "Follow hint",
            PredictorKind::GroupBimodal => "Group bimodal",
        }
    }
}

// Follow Hint ---------------------------------------------------------------------------------------------------------------- Follow Hint
/// Returns the spaceship computer's suggestion and learns nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct FollowHint;

impl RoboPredictor for FollowHint {
    fn predict(&mut self, _planet_id: u64, hint: bool, _group_tag: Option<u16>) -> bool {
        hint
    }
    fn observe(&mut self, _planet_id: u64, _time_of_day: bool) {}
}
// ----------------------------------------------------------------------------------------------------------------------------------------

// Group Bimodal ------------------------------------------------------------------------------------------------------------ Group Bimodal
const SLOTS: usize = 1 << 15;
const SLOT_MSK: u64 = (SLOTS as u64) - 1;
const WEAK_NIGHT: u8 = 1;
const STRONG_DAY: u8 = 3;

struct GroupMemory {
    counters: [u8; SLOTS], // 2 bit counters, 0 and 3 are trusted over the hint
}
const _: () = assert!(std::mem::size_of::<GroupMemory>() <= ROBO_MEMORY_LIMIT);

/// A table of 2 bit counters indexed by planet ID hashed with its group tag.
/// Only a saturated counter overrides the spaceship computer.
pub struct GroupBimodal {
    mem:    Box<GroupMemory>,
    slot:   usize,           // Slot used by the last prediction
    meter:  SharedCostMeter,
}
impl GroupBimodal {
    pub fn new(meter: SharedCostMeter) -> GroupBimodal {
        GroupBimodal {
            mem:   Box::new(GroupMemory { counters: [WEAK_NIGHT; SLOTS] }),
            slot:  0,
            meter,
        }
    }
}
impl RoboPredictor for GroupBimodal {
    fn predict(&mut self, planet_id: u64, hint: bool, group_tag: Option<u16>) -> bool {
        let group = group_tag.unwrap_or(0) as u64;
        self.slot = ((planet_id ^ group.wrapping_mul(0x9E37)) & SLOT_MSK) as usize;
        self.meter.charge(Op::Multiplicative, 1);
        self.meter.charge(Op::Bitwise, 2);

        let c = self.mem.counters[self.slot];
        self.meter.charge(Op::Additive, 2);
        match c {
            0          => false,
            STRONG_DAY => true,
            _          => hint,
        }
    }

    fn observe(&mut self, _planet_id: u64, time_of_day: bool) {
        let c = &mut self.mem.counters[self.slot];
        if time_of_day && *c < STRONG_DAY {
            *c += 1;
        }
        else if !time_of_day && *c > 0 {
            *c -= 1;
        }
        self.meter.charge(Op::Additive, 2);
    }
}
// ----------------------------------------------------------------------------------------------------------------------------------------
