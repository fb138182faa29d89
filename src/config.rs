use std::{
    fmt,
    path::PathBuf,
};

use clap::Parser;

use crate::{
    error::ConfigError,
    robo::PredictorKind,
    route::RouteFormat,
};


const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command line interface.
#[derive(Parser, Debug)]
#[command(name = "daynight")]
#[command(about = "Evaluate a time-of-day prediction algorithm against a route of planets")]
#[command(version)]
struct Cli {
    /// Path to the input file with the route
    #[arg(short, long)]
    route: PathBuf,

    /// Route file layout
    #[arg(short, long, value_enum, default_value_t = RouteFormat::Route)]
    format: RouteFormat,

    /// Prediction algorithm to evaluate
    #[arg(long, value_enum, default_value_t = PredictorKind::FollowHint)]
    predictor: PredictorKind,

    /// Enable verbose output during evaluation
    #[arg(short, long)]
    verbose: bool,

    /// Disable evaluation progress bar
    #[arg(short = 'p', long)]
    without_progress_bar: bool,
}

/// User defined configuration settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub route:      PathBuf,       // Route file to evaluate against
    pub format:     RouteFormat,   // Two field route or three field atlas
    pub predictor:  PredictorKind, // Built-in Robo predictor
    pub verbose:    bool,          // Log every visited planet
    pub progress:   bool,          // Draw a progress bar (ignored when verbose)
}
impl Config {
    /// Create a new Config from command line arguments, including the
    /// program name.
    pub fn new<I, T>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        Ok(Config {
            route:      cli.route,
            format:     cli.format,
            predictor:  cli.predictor,
            verbose:    cli.verbose,
            progress:   !cli.without_progress_bar,
        })
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "
            \rDaynight v{VERSION}
            \r=============================================================
            \r Route:      {}
            \r Format:     {}
            \r Predictor:  {}
            \r=============================================================\n",
            self.route.display(),
            match self.format {
                RouteFormat::Route => "Route (ID, time-of-day)",
                RouteFormat::Atlas => "Atlas (ID, time-of-day, group tag)",
            },
            self.predictor.name(),
        )
    }
}
impl Default for Config {
    fn default() -> Config {
        Config {
            route:      PathBuf::new(),
            format:     RouteFormat::default(),
            predictor:  PredictorKind::default(),
            verbose:    false,
            progress:   true,
        }
    }
}
