mod formatting;
mod progress;
pub mod config;
pub mod cost;
pub mod error;
pub mod evaluate;
pub mod history;
pub mod robo;
pub mod route;
pub mod score;

use std::path::PathBuf;

use crate::{
    config::Config,
    cost::CostMeter,
    error::RouteError,
    evaluate::{Evaluation, Evaluator},
    robo::PredictorKind,
    route::{Route, RouteFormat},
};

pub use crate::{
    history::HistoryPredictor,
    robo::RoboPredictor,
    route::{EventSource, Planet},
    score::Report,
};


/// Daynight API. Evaluates a time-of-day predictor against a route file,
/// configured using method chaining syntax or by supplying an existing Config.
#[derive(Clone, Debug)]
pub struct Playground {
    cfg: Config,
}
impl Playground {
    /// Create a new Playground with the default Config.
    pub fn new() -> Playground {
        Playground { cfg: Config::default() }
    }

    /// Create a Playground with an existing Config.
    pub fn new_with_cfg(cfg: Config) -> Playground {
        Playground { cfg }
    }

    /// Log every visited planet.
    pub fn verbose(&mut self) -> &mut Self {
        self.cfg.verbose = true;
        &mut *self
    }

    /// Don't draw a progress bar.
    pub fn without_progress_bar(&mut self) -> &mut Self {
        self.cfg.progress = false;
        &mut *self
    }

    /// Choose the route file layout.
    pub fn format(&mut self, format: RouteFormat) -> &mut Self {
        self.cfg.format = format;
        &mut *self
    }

    /// Choose a built-in predictor.
    pub fn predictor(&mut self, kind: PredictorKind) -> &mut Self {
        self.cfg.predictor = kind;
        &mut *self
    }

    /// Choose the route file.
    pub fn route(&mut self, path: &str) -> &mut Self {
        self.cfg.route = PathBuf::from(path);
        &mut *self
    }

    /// Evaluate the configured built-in predictor.
    pub fn evaluate(&self) -> Result<Evaluation, RouteError> {
        let meter = CostMeter::shared();
        let robo = self.cfg.predictor.build(meter.clone());
        self.evaluate_with(robo, meter)
    }

    /// Evaluate a caller supplied predictor. `meter` should be the meter
    /// the predictor charges its operations to.
    pub fn evaluate_with<P: RoboPredictor>(
        &self,
        robo: P,
        meter: cost::SharedCostMeter,
    ) -> Result<Evaluation, RouteError> {
        let mut route = Route::open(&self.cfg.route, self.cfg.format)?;
        let mut evaluator = Evaluator::new(robo, meter)
            .verbose(self.cfg.verbose)
            .progress_bar(self.cfg.progress);
        Ok(evaluator.run(&mut route))
    }

    /// Evaluate and print the banner, accuracy, and cost statistics.
    pub fn run(&self) -> Result<Evaluation, RouteError> {
        print!("{}", self.cfg);
        println!("Loading Robo's route for evaluation from {} file...", self.cfg.route.display());
        println!("Starting evaluation of Robo's prediction algorithm...");

        let evaluation = self.evaluate()?;
        println!();
        println!("{}", evaluation.report);
        println!("{}", evaluation.costs.per_planet(evaluation.report.total));
        Ok(evaluation)
    }
}
impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}
