use assert_approx_eq::assert_approx_eq;
use avt::{movement_report, HexVector, SIN_60};

fn vector(s: &str) -> HexVector {
    s.parse().unwrap()
}

fn grid(s: &str) -> String {
    vector(s).movement_grid().to_string()
}

#[test]
fn test_grid_three_components() {
    let expected = [
        " |B|C|+|",
        " |0|0|0|",
        "1|*| | |",
        "2| |*|*|",
        "3|*|*| |",
        "4|*| |*|",
        "5| |*| |",
        "6|*|*| |",
        "7|*| |*|",
        "8|*|*| |",
    ];
    assert_eq!(grid("6B 5C 3+"), expected.join("\n"));
}

#[test]
fn test_grid_horizontal_and_vertical() {
    let expected = [
        " |A| |-|",
        " |1| |0|",
        "1| | |*|",
        "2|*| | |",
        "3| | | |",
        "4|*| | |",
        "5|*| | |",
        "6| | | |",
        "7|*| | |",
        "8|*| | |",
    ];
    assert_eq!(grid("13A 1-"), expected.join("\n"));
}

#[test]
fn test_grid_vertical_only() {
    let expected = [
        " | | |-|",
        " | | |1|",
        "1| | | |",
        "2| | | |",
        "3| | | |",
        "4| | | |",
        "5| | | |",
        "6| | | |",
        "7| | | |",
        "8| | | |",
    ];
    assert_eq!(grid("8-"), expected.join("\n"));
}

#[test]
fn test_grid_horizontal_only() {
    let expected = [
        " |F| | |",
        " |0| | |",
        "1| | | |",
        "2|*| | |",
        "3|*| | |",
        "4|*| | |",
        "5|*| | |",
        "6|*| | |",
        "7|*| | |",
        "8|*| | |",
    ];
    assert_eq!(grid("7F"), expected.join("\n"));
}

#[test]
fn test_grid_opposites() {
    let v = vector("6F 3D 1-");
    assert_eq!(v.to_string(), "3E 3F 1-");
    let expected = [
        " |E|F|-|",
        " |0|0|0|",
        "1| | |*|",
        "2|*| | |",
        "3| |*| |",
        "4|*| | |",
        "5| | | |",
        "6| |*| |",
        "7|*| | |",
        "8| |*| |",
    ];
    assert_eq!(v.movement_grid().to_string(), expected.join("\n"));
}

#[test]
fn test_grid_three_horizontal() {
    let v = vector("6F 3D 1A");
    assert_eq!(v.to_string(), "4F 2E");
    let expected = [
        " |F|E| |",
        " |0|0| |",
        "1| | | |",
        "2|*| | |",
        "3|*| | |",
        "4| |*| |",
        "5| | | |",
        "6|*| | |",
        "7|*| | |",
        "8| |*| |",
    ];
    assert_eq!(v.movement_grid().to_string(), expected.join("\n"));
}

#[test]
fn test_grid_everything_cancels() {
    assert_eq!(grid("14F 14D 14A 14B 14C 14E 6- 6+"), "STILL");
}

#[test]
fn test_movement_report() {
    let expected = [
        "4F 2E 7+",
        "",
        " |F|E|+|",
        " |0|0|0|",
        "1| | |*|",
        "2|*| |*|",
        "3|*| |*|",
        "4| |*|*|",
        "5| | |*|",
        "6|*| |*|",
        "7|*| |*|",
        "8| |*| |",
    ];
    assert_eq!(movement_report("9+ 6F 3D 1A 2-").unwrap(), expected.join("\n"));
}

#[test]
fn test_canonical_form_is_fixed_point() {
    let inputs = [
        "14F 3B 6+ 10D 2- 4A 2C",
        "4F 3B 1D",
        "22E 8B",
        "18d 12c",
        "9+ 6F 3D 1A 2-",
        "1A 1B 1C 1D 1E 1F",
        "4F 4C",
        "",
    ];
    for input in &inputs {
        let v = vector(input);
        let canonical = v.to_string();
        let reparsed = vector(&canonical);
        assert_eq!(reparsed, v, "{}", input);
        assert_eq!(reparsed.to_string(), canonical, "{}", input);
    }
}

#[test]
fn test_canonical_directions_adjacent() {
    // Sweep a block of vectors; canonical form never uses more than two
    // horizontal directions, and never two that aren't neighbors
    for u in -10..=10 {
        for v in -10..=10 {
            let magnitudes = HexVector::from_uvz(u, v, 0).magnitudes();
            let horizontal = magnitudes
                .nonzero()
                .map(|(direction, _)| direction.index())
                .collect::<Vec<_>>();
            assert!(horizontal.len() <= 2, "({}, {})", u, v);
            if let [a, b] = horizontal[..] {
                let gap = (b + 6 - a) % 6;
                assert!(gap == 1 || gap == 5, "({}, {})", u, v);
            }
        }
    }
}

#[test]
fn test_to_cartesian() {
    let c = HexVector::ZERO.to_cartesian();
    assert_eq!((c.x, c.y, c.z), (0.0, 0.0, 0.0));

    let c = vector("3f 7a 2+").to_cartesian();
    assert_approx_eq!(c.x, -3.0 * SIN_60);
    assert_approx_eq!(c.y, 8.5);
    assert_approx_eq!(c.z, 2.0);
}

#[test]
fn test_cartesian_magnitude_matches_projection() {
    for s in &["8C 5D 12+", "6F 3E 4+", "13A 5B 4-", "22E"] {
        let v = vector(s);
        assert_approx_eq!(v.cartesian_magnitude(), v.to_cartesian().norm());
    }
}
