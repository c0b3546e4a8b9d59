use avt::{
    shellstar, HexVector, NoShotReason, ShellstarConfig, ShellstarOutcome,
};

fn vector(s: &str) -> HexVector {
    s.parse().unwrap()
}

fn run(
    to_target: &str,
    crossing: &str,
    config: ShellstarConfig,
) -> ShellstarOutcome {
    shellstar(vector(to_target), vector(crossing), &config).unwrap()
}

#[test]
fn test_run_away() {
    let outcome = run("6a", "26a", ShellstarConfig::new(24.0));
    assert_eq!(outcome, ShellstarOutcome::NoShot(NoShotReason::Diverging));
    assert_eq!(outcome.to_string(), "No Shot");
}

#[test]
fn test_standstill() {
    let expected = [
        "   +++",
        "F (D/E) C",
        "   ---",
        ">2/6 to evade",
        "+0 17",
        "+1 14",
        "+2 11",
        "+3 8",
        "+4 5",
        "+5 2",
        "+6 HIT",
        "RoC: 3",
    ];
    let outcome = run("13A 5B 4-", "", ShellstarConfig::new(24.0));
    assert_eq!(outcome.to_string(), expected.join("\n"));

    let report = outcome.report().unwrap();
    assert_eq!(report.segments_elapsed, 6);
    assert_eq!(report.trace.len(), 7);
    assert!(report.trace.last().unwrap().is_hit());
}

#[test]
fn test_orthogonal() {
    let expected = [
        "   +++",
        "E (C/D) B",
        "   ---",
        ">1/5 to evade",
        "0:4 13",
        "0:5 10",
        "0:6 7",
        "0:7 4",
        "0:8 1",
        "1:1 HIT",
        "RoC: 3",
    ];
    let outcome =
        run("13A", "3E 3F", ShellstarConfig::new(24.0).launched_in(4));
    assert_eq!(outcome.to_string(), expected.join("\n"));
}

#[test]
fn test_slow_closure() {
    let expected = [
        "     D++",
        "B/C (A+) E/F",
        "     A--",
        ">2/8 to evade",
        "0:8 8",
        "1:1 8",
        "1:2 7",
        "1:3 6",
        "1:4 5",
        "1:5 3",
        "1:6 3",
        "1:7 1",
        "1:8 1",
        "2:1 0",
        "2:2 HIT",
        "RoC: 1",
    ];
    let outcome = run(
        "4D 1E 7-",
        "12D 4C 9-",
        ShellstarConfig::new(24.0).launched_in(8),
    );
    assert_eq!(outcome.to_string(), expected.join("\n"));
}

#[test]
fn test_vertical_impact_window() {
    let expected = [
        "(---)",
        "Evade in Amber Ring",
        ">1/3 to evade",
        "+0 8",
        "+1 5",
        "+2 2",
        "+3 HIT",
        "RoC: 3",
    ];
    let outcome = run("4D 1E 7+", "12A 3C", ShellstarConfig::new(20.0));
    assert_eq!(outcome.to_string(), expected.join("\n"));
}

#[test]
fn test_zero_muzzle_velocity_never_closes() {
    let outcome = run("10B", "", ShellstarConfig::new(0.0));
    assert_eq!(outcome, ShellstarOutcome::NoShot(NoShotReason::FlightLimit));
}

#[test]
fn test_slow_projectile_negligible_closure() {
    // Closes on a still target, but at 0.1 hexes per turn
    let outcome = run("1A", "", ShellstarConfig::new(0.1));
    assert_eq!(
        outcome,
        ShellstarOutcome::NoShot(NoShotReason::NegligibleClosure)
    );
    assert_eq!(outcome.to_string(), "No Shot");
    assert!(outcome.report().is_none());
}
