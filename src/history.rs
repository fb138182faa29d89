/// # History Predictor
///
/// The spaceship computer's predictor. A cascade of tagged tables, each
/// entry holding a tag and a 2 bit confidence counter, addressed by the
/// planet id perturbed with bits of a global history register. Table k
/// holds 4096 >> k entries and mixes in the low 2^k history bits; table 0
/// uses the id alone. Only one table is active by default, so the history
/// register has no effect on addressing unless more tables are requested.
///
/// A lookup scans the tables in order and the first tag match provides
/// the prediction (confidence >= 2 means DAY). A miss predicts NIGHT.
///
/// On update a miss allocates in table 0. A hit that predicted correctly
/// trains its counter toward the outcome. A hit that mispredicted allocates
/// in the next table, or trains in place if it was already the last one.

/// Number of entries in table 0.
pub const MAX_HISTORY_TABLE_SIZE: usize = 4096;
/// Number of tables in the default configuration.
pub const NUM_HISTORY_TABLES: usize = 1;
/// Significant bits in a tag.
pub const TAG_LENGTH: u32 = 12;
/// Saturation point of a confidence counter.
pub const MAX_CONFIDENCE: u8 = 3;

const TAG_MASK: u64 = (1 << TAG_LENGTH) - 1;
const THRESHOLD: u8 = (MAX_CONFIDENCE + 1) / 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableEntry {
    pub tag:         u64, // Low TAG_LENGTH bits of the perturbed id
    pub confidence:  u8,  // Saturating counter (0..=MAX_CONFIDENCE)
}
impl TableEntry {
    /// Fresh entry for a newly allocated slot.
    fn allocate(tag: u64, outcome: bool) -> TableEntry {
        TableEntry {
            tag,
            confidence: if outcome { 2 } else { 1 },
        }
    }

    /// Move the counter one step toward the outcome, saturating at the bounds.
    fn train(&mut self, outcome: bool) {
        if outcome && self.confidence < MAX_CONFIDENCE {
            self.confidence += 1;
        }
        else if !outcome && self.confidence > 0 {
            self.confidence -= 1;
        }
    }
}

/// Result of the most recent predict() call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Lookup {
    planet:  u64,                  // Planet the lookup was made for
    hit:     Option<(usize, bool)>, // Table that matched and what it predicted
}

pub struct HistoryPredictor {
    tables:  Vec<Vec<TableEntry>>, // Tagged tables, table k has MAX_HISTORY_TABLE_SIZE >> k entries
    ghist:   u64,                  // Recent outcomes, most recent in bit 0
    last:    Option<Lookup>,       // Single slot memo consumed by the next update()
}
impl HistoryPredictor {
    /// Create a predictor with the default single table.
    pub fn new() -> HistoryPredictor {
        HistoryPredictor::with_tables(NUM_HISTORY_TABLES)
    }

    /// Create a predictor with a cascade of `n` tables of halving size.
    pub fn with_tables(n: usize) -> HistoryPredictor {
        assert!(n >= 1);
        assert!(
            MAX_HISTORY_TABLE_SIZE.checked_shr((n - 1) as u32).unwrap_or(0) > 0,
            "too many history tables: {}", n
        );
        HistoryPredictor {
            tables: (0..n)
                    .map(|k| vec![TableEntry::default(); MAX_HISTORY_TABLE_SIZE >> k])
                    .collect(),
            ghist:  0,
            last:   None,
        }
    }

    /// History bits mixed into the id for table k.
    fn history_mask(k: usize) -> u64 {
        if k == 0 {
            return 0;
        }
        match 1u32.checked_shl(k as u32) {
            Some(bits) if bits < 64 => (1 << bits) - 1,
            _ => u64::MAX,
        }
    }

    /// Index and tag of `planet` in table k for the current history register.
    pub fn index_and_tag(&self, planet: u64, k: usize) -> (usize, u64) {
        let perturbed = planet ^ (self.ghist & HistoryPredictor::history_mask(k));
        let index = (perturbed % self.tables[k].len() as u64) as usize;
        (index, perturbed & TAG_MASK)
    }

    /// Predict the time-of-day on planet `planet`.
    ///
    /// Only the memo is modified. It must be followed by exactly one
    /// update() for the same planet before the next predict().
    pub fn predict(&mut self, planet: u64) -> bool {
        let hit = (0..self.tables.len()).find_map(|k| {
            let (i, tag) = self.index_and_tag(planet, k);
            let entry = self.tables[k][i];
            (entry.tag == tag).then(|| (k, entry.confidence >= THRESHOLD))
        });
        self.last = Some(Lookup { planet, hit });
        hit.map_or(false, |(_, pr)| pr)
    }

    /// Record the actual time-of-day on planet `planet`.
    pub fn update(&mut self, planet: u64, outcome: bool) {
        if let Some(last) = self.last {
            debug_assert_eq!(last.planet, planet, "update() without a matching predict()");
        }

        // Addressing uses the register as it was at predict time
        let slots = (0..self.tables.len())
            .map(|k| self.index_and_tag(planet, k))
            .collect::<Vec<(usize, u64)>>();

        self.ghist = (self.ghist << 1) | outcome as u64;

        match self.last.and_then(|last| last.hit) {
            None => {
                let (i, tag) = slots[0];
                self.tables[0][i] = TableEntry::allocate(tag, outcome);
            }
            Some((k, pr)) if pr == outcome => {
                let (i, _) = slots[k];
                self.tables[k][i].train(outcome);
            }
            Some((k, _)) => {
                if k + 1 < self.tables.len() {
                    let (i, tag) = slots[k + 1];
                    self.tables[k + 1][i] = TableEntry::allocate(tag, outcome);
                }
                else {
                    let (i, _) = slots[k];
                    self.tables[k][i].train(outcome);
                }
            }
        }
    }

    pub fn history(&self) -> u64 {
        self.ghist
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn entry(&self, k: usize, index: usize) -> TableEntry {
        self.tables[k][index]
    }

    /// All entries of table k.
    pub fn table(&self, k: usize) -> &[TableEntry] {
        &self.tables[k]
    }
}
impl Default for HistoryPredictor {
    fn default() -> Self {
        Self::new()
    }
}
