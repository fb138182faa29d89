use tracing::{debug, error, info};

use crate::{
    cost::{OpCounts, SharedCostMeter},
    error::RouteError,
    history::HistoryPredictor,
    progress::Progress,
    robo::RoboPredictor,
    route::{EventSource, Planet},
    score::{Report, ScoreAccumulator},
};


/// Result of evaluating a predictor over one route.
#[derive(Debug)]
pub struct Evaluation {
    pub report:      Report,             // Accuracy statistics
    pub costs:       OpCounts,           // Operations charged by the predictor
    pub stopped_by:  Option<RouteError>, // Record that ended the run early, if any
}
impl Evaluation {
    pub fn completed(&self) -> bool {
        self.stopped_by.is_none()
    }
}

/// Drives planets from a route through the spaceship computer and a Robo
/// predictor, one at a time, and scores the predictor.
pub struct Evaluator<P> {
    computer:  HistoryPredictor, // Spaceship computer providing hints
    robo:      P,                // Predictor under evaluation
    meter:     SharedCostMeter,  // Shared with the predictor
    verbose:   bool,             // Log every planet
    bar:       bool,             // Draw a progress bar when not verbose
}
impl<P: RoboPredictor> Evaluator<P> {
    pub fn new(robo: P, meter: SharedCostMeter) -> Evaluator<P> {
        Evaluator {
            computer:  HistoryPredictor::new(),
            robo,
            meter,
            verbose:   false,
            bar:       false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn progress_bar(mut self, bar: bool) -> Self {
        self.bar = bar;
        self
    }

    pub fn computer(&self) -> &HistoryPredictor {
        &self.computer
    }

    pub fn robo(&self) -> &P {
        &self.robo
    }

    /// Process a single planet and return Robo's prediction for it.
    pub fn visit(&mut self, planet: &Planet) -> bool {
        let hint = self.computer.predict(planet.id);

        self.meter.enable();
        let prediction = self.robo.predict(planet.id, hint, planet.group_tag);
        self.robo.observe(planet.id, planet.time_of_day);
        self.meter.disable();

        self.computer.update(planet.id, planet.time_of_day);
        prediction
    }

    /// Evaluate the predictor over every planet left in `route`.
    ///
    /// A malformed record ends the run. Statistics gathered up to that
    /// point are kept and the error is returned alongside them.
    pub fn run<S: EventSource + ?Sized>(&mut self, route: &mut S) -> Evaluation {
        let mut score = ScoreAccumulator::new(route.total());
        let progress = Progress::new(route.total(), self.verbose || !self.bar);
        info!(planets = route.total(), "starting evaluation");

        let stopped_by = loop {
            let planet = match route.next_planet() {
                Ok(Some(planet)) => planet,
                Ok(None) => break None,
                Err(e) => {
                    error!("{}", e);
                    break Some(e);
                }
            };

            let prediction = self.visit(&planet);
            score.record(prediction, planet.time_of_day);

            if self.verbose {
                debug!(
                    planet = planet.id,
                    predicted = prediction,
                    actual = planet.time_of_day,
                    "visited planet"
                );
            }
            progress.update(score.visited());
        };
        progress.finish(score.visited());

        let report = score.finish();
        info!(visited = report.visited, correct = report.correct, "evaluation finished");
        Evaluation {
            report,
            costs: self.meter.counts(),
            stopped_by,
        }
    }
}
