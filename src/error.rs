use std::{
    io,
    path::PathBuf,
};

use thiserror::Error;


/// Problems with the command line.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Cli(#[from] clap::Error),
}

/// Why a single route record could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected {expected} tab separated fields, found {found}")]
    MissingField { expected: usize, found: usize },

    #[error("could not parse planet ID '{0}'")]
    InvalidPlanetId(String),

    #[error("could not parse time-of-day, received time-of-day '{0}'")]
    InvalidTimeOfDay(String),

    #[error("could not parse group tag '{0}'")]
    InvalidGroupTag(String),

    #[error("group tag {0} is outside of the allowed range (0..=1023)")]
    GroupTagOutOfRange(u64),
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("could not open route file {path}: {source}")]
    InputUnreadable {
        path:    PathBuf,
        source:  io::Error,
    },

    #[error("malformed record while processing planet number {planet}: {cause}")]
    MalformedRecord {
        planet:  u64,
        cause:   RecordError,
    },

    #[error("failed reading planet number {planet}: {source}")]
    Read {
        planet:  u64,
        source:  io::Error,
    },
}
