// patterns.rs - Named seed patterns, as (row, column) offsets from an origin

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "LWSS",
        cells: &[(0, 1), (0, 4), (1, 0), (2, 0), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3)],
    },
];

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridEngine;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(find("r-PENTOMINO").map(|p| p.name), Some("R-pentomino"));
        assert!(find("gosper").is_none());
    }

    #[test]
    fn glider_returns_shifted_after_four_generations() {
        let mut engine = GridEngine::new(8, 8).unwrap();
        engine.stamp(find("glider").unwrap(), 1, 1);
        let mut shifted = GridEngine::new(8, 8).unwrap();
        shifted.stamp(find("glider").unwrap(), 2, 2);

        for _ in 0..4 {
            engine.step();
        }

        assert_eq!(engine.population(), 5);
        for row in 0..8 {
            assert_eq!(engine.row(row), shifted.row(row), "row {row}");
        }
    }

    #[test]
    fn oscillators_have_period_two() {
        for name in ["Blinker", "Toad", "Beacon"] {
            let mut engine = GridEngine::new(10, 10).unwrap();
            engine.stamp(find(name).unwrap(), 3, 3);
            let start = engine.fingerprint();

            engine.step();
            assert_ne!(engine.fingerprint(), start, "{name} did not change");
            engine.step();
            assert_eq!(engine.fingerprint(), start, "{name} did not return");
        }
    }

    #[test]
    fn stamp_wraps_around_edges() {
        let mut engine = GridEngine::new(4, 4).unwrap();
        engine.stamp(find("block").unwrap(), 3, 3);
        assert!(engine.cell(3, 3));
        assert!(engine.cell(0, 0));
        assert!(engine.cell(3, 0));
        assert!(engine.cell(0, 3));
        assert_eq!(engine.population(), 4);
    }
}
