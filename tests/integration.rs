use std::{fs, io::Write, path::Path};

use daynight::{
    Playground, RoboPredictor,
    cost::CostMeter,
    error::{RecordError, RouteError},
    robo::PredictorKind,
    route::RouteFormat,
};
use tempfile::NamedTempFile;

fn write_route(header: &str, lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", header).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

fn playground(path: &Path) -> Playground {
    let mut pg = Playground::new();
    pg.route(path.to_str().unwrap()).without_progress_bar();
    pg
}

/// Always predicts DAY.
struct Daylight;
impl RoboPredictor for Daylight {
    fn predict(&mut self, _planet_id: u64, _hint: bool, _group_tag: Option<u16>) -> bool {
        true
    }
    fn observe(&mut self, _planet_id: u64, _time_of_day: bool) {}
}

#[test]
fn all_day_route() {
    let lines = (0..10).map(|_| "7\tDAY".to_string()).collect::<Vec<String>>();
    let file = write_route("PlanetID\tTimeOfDay", &lines);

    // Following the hint misses only the first, unseen, planet
    let result = playground(file.path()).evaluate().unwrap();
    assert!(result.completed());
    assert_eq!(result.report.total, 10);
    assert_eq!(result.report.visited, 10);
    assert_eq!(result.report.correct, 9);
    assert!((result.report.accuracy() - 90.0).abs() < 1e-9);

    let result = playground(file.path())
        .evaluate_with(Daylight, CostMeter::shared())
        .unwrap();
    assert!((result.report.accuracy() - 100.0).abs() < 1e-9);
}

#[test]
fn corrupted_route_keeps_partial_statistics() {
    let mut lines = (0..10).map(|_| "7\tDAY".to_string()).collect::<Vec<String>>();
    lines[4] = "7\tMORNING".to_string();
    let file = write_route("PlanetID\tTimeOfDay", &lines);

    let result = playground(file.path()).evaluate().unwrap();
    assert_eq!(result.report.visited, 4);
    assert_eq!(result.report.correct, 3);
    // Denominator is the route total, not the planets visited
    assert!((result.report.accuracy() - 30.0).abs() < 1e-9);
    match result.stopped_by {
        Some(RouteError::MalformedRecord { planet, cause }) => {
            assert_eq!(planet, 5);
            assert_eq!(cause, RecordError::InvalidTimeOfDay("MORNING".to_string()));
        }
        other => panic!("expected malformed record, got {:?}", other),
    }

    let result = playground(file.path())
        .evaluate_with(Daylight, CostMeter::shared())
        .unwrap();
    assert!((result.report.accuracy() - 40.0).abs() < 1e-9);
}

#[test]
fn atlas_group_tag_boundary() {
    let lines = vec![
        "1\tDAY\t1023".to_string(),
        "2\tNIGHT\t1024".to_string(),
        "3\tDAY\t5".to_string(),
    ];
    let file = write_route("PlanetID\tTimeOfDay\tGroupTag", &lines);

    let result = playground(file.path()).format(RouteFormat::Atlas).evaluate().unwrap();
    assert_eq!(result.report.visited, 1);
    assert_eq!(result.report.total, 3);
    assert!(matches!(
        result.stopped_by,
        Some(RouteError::MalformedRecord { planet: 2, cause: RecordError::GroupTagOutOfRange(1024) })
    ));
}

#[test]
fn missing_route_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_route.txt");
    match playground(&path).evaluate() {
        Err(RouteError::InputUnreadable { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected unreadable input, got {:?}", other),
    }
}

#[test]
fn directory_as_route_file() {
    let dir = tempfile::tempdir().unwrap();
    match playground(dir.path()).evaluate() {
        Err(RouteError::InputUnreadable { path, .. }) => assert_eq!(path, dir.path()),
        other => panic!("expected unreadable input, got {:?}", other),
    }
}

#[test]
fn header_only_route() {
    let file = write_route("PlanetID\tTimeOfDay", &[]);
    let result = playground(file.path()).evaluate().unwrap();
    assert_eq!(result.report.total, 0);
    assert_eq!(result.report.visited, 0);
    assert_eq!(result.report.accuracy(), 0.0);
}

#[test]
fn random_atlas_route() {
    fastrand::seed(1);
    let lines = (0..5000)
        .map(|_| format!("{}\t{}\t{}",
            fastrand::u64(0..300),
            if fastrand::bool() { "DAY" } else { "NIGHT" },
            fastrand::u16(0..1024)))
        .collect::<Vec<String>>();
    let file = write_route("PlanetID\tTimeOfDay\tGroupTag", &lines);

    let mut pg = playground(file.path());
    pg.format(RouteFormat::Atlas).predictor(PredictorKind::GroupBimodal);
    let first = pg.evaluate().unwrap();
    let second = pg.evaluate().unwrap();

    assert!(first.completed());
    assert_eq!(first.report.visited, 5000);
    assert!(first.report.correct <= first.report.visited);
    assert_eq!(first.report, second.report);
    assert_eq!(first.costs, second.costs);
    assert!(first.costs.metric() > 0);
}

#[test]
fn follow_hint_costs_nothing() {
    let lines = vec!["1\tDAY".to_string(), "1\tNIGHT".to_string()];
    let file = write_route("PlanetID\tTimeOfDay", &lines);
    let result = playground(file.path()).evaluate().unwrap();
    assert_eq!(result.costs.metric(), 0);
}

#[test]
fn run_prints_and_returns_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("route.txt");
    fs::write(&path, "PlanetID\tTimeOfDay\n1\tNIGHT\n1\tNIGHT\n").unwrap();

    let result = playground(&path).run().unwrap();
    // Unseen planet predicts NIGHT, then the allocated NIGHT entry does too
    assert_eq!(result.report.correct, 2);
}
