use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use clap::ValueEnum;

use crate::error::{RecordError, RouteError};


/// Largest group tag an atlas route may carry (10 bits).
pub const GROUP_TAG_MAX: u64 = 1023;

/// One stop on a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Planet {
    pub id:           u64,         // Planet ID, not unique or ordered
    pub time_of_day:  bool,        // DAY = true, NIGHT = false
    pub group_tag:    Option<u16>, // Only present in atlas routes
}

/// Route file layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RouteFormat {
    /// <id>\t<DAY|NIGHT>
    #[default]
    Route,
    /// <id>\t<DAY|NIGHT>\t<group tag>
    Atlas,
}
impl RouteFormat {
    /// Number of tab separated fields in a record.
    pub fn fields(self) -> usize {
        match self {
            RouteFormat::Route => 2,
            RouteFormat::Atlas => 3,
        }
    }
}

/// A forward-only sequence of planets.
pub trait EventSource {
    /// Number of planets the route claims to hold, fixed when it was opened.
    fn total(&self) -> u64;

    /// Read the next planet. Ok(None) marks the end of the route.
    fn next_planet(&mut self) -> Result<Option<Planet>, RouteError>;
}

pub fn parse_time_of_day(s: &str) -> Result<bool, RecordError> {
    match s {
        "DAY"   => Ok(true),
        "NIGHT" => Ok(false),
        _ => Err(RecordError::InvalidTimeOfDay(s.to_string())),
    }
}

fn parse_planet_id(s: &str) -> Result<u64, RecordError> {
    s.trim().parse::<u64>()
        .map_err(|_| RecordError::InvalidPlanetId(s.to_string()))
}

fn parse_group_tag(s: &str) -> Result<u16, RecordError> {
    let tag = s.trim().parse::<u64>()
        .map_err(|_| RecordError::InvalidGroupTag(s.to_string()))?;
    if tag > GROUP_TAG_MAX {
        return Err(RecordError::GroupTagOutOfRange(tag));
    }
    Ok(tag as u16)
}

/// Parse a single record (without line terminator).
///
/// Everything after the last expected tab belongs to the final field, so a
/// three field line read as a plain route fails on its time-of-day.
pub fn parse_record(line: &str, format: RouteFormat) -> Result<Planet, RecordError> {
    let expected = format.fields();
    let fields = line.splitn(expected, '\t').collect::<Vec<&str>>();
    if fields.len() < expected {
        return Err(RecordError::MissingField { expected, found: fields.len() });
    }

    let id = parse_planet_id(fields[0])?;
    let time_of_day = parse_time_of_day(fields[1])?;
    let group_tag = match format {
        RouteFormat::Route => None,
        RouteFormat::Atlas => Some(parse_group_tag(fields[2])?),
    };
    Ok(Planet { id, time_of_day, group_tag })
}

/// A route read line by line from a tab separated text source.
pub struct Route<R> {
    reader:  R,           // Positioned after the header line
    format:  RouteFormat, // Record layout
    total:   u64,         // Line count minus header
    read:    u64,         // Records successfully parsed so far
    line:    String,      // Reused line buffer
}
impl Route<BufReader<File>> {
    /// Open a route file, count its planets, and skip the header line.
    pub fn open(path: &Path, format: RouteFormat) -> Result<Self, RouteError> {
        let unreadable = |source: io::Error| RouteError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        };

        // A directory opens fine but fails every read, so errors must end the count
        let mut lines = 0u64;
        for chunk in BufReader::new(File::open(path).map_err(unreadable)?).split(b'\n') {
            chunk.map_err(unreadable)?;
            lines += 1;
        }

        let reader = BufReader::new(File::open(path).map_err(unreadable)?);
        Route::new(reader, lines.saturating_sub(1), format).map_err(unreadable)
    }
}
impl<R: BufRead> Route<R> {
    /// Wrap a reader still positioned at the header line.
    pub fn new(mut reader: R, total: u64, format: RouteFormat) -> io::Result<Self> {
        let mut header = Vec::new();
        reader.read_until(b'\n', &mut header)?;
        Ok(Route {
            reader,
            format,
            total,
            read: 0,
            line: String::new(),
        })
    }
}
impl<R: BufRead> EventSource for Route<R> {
    fn total(&self) -> u64 {
        self.total
    }

    fn next_planet(&mut self) -> Result<Option<Planet>, RouteError> {
        let planet = self.read + 1;
        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => return Ok(None),
            Ok(_) => {},
            Err(source) => return Err(RouteError::Read { planet, source }),
        }

        let record = self.line.trim_end_matches(&['\n', '\r'][..]);
        let next = parse_record(record, self.format)
            .map_err(|cause| RouteError::MalformedRecord { planet, cause })?;
        self.read += 1;
        Ok(Some(next))
    }
}
