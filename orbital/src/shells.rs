//! Nested signed isosurfaces of a sampled orbital field.
//!
//! The outermost level is the largest |psi| on the grid; each further level
//! is ten times smaller, down to 1% of the outermost one. Every level is
//! contoured twice, once at +level (red) and once at -level (blue).

use crate::grid::ScalarGrid;
use crate::isosurface::{extract, Mesh};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ratio between successive levels.
pub const LADDER_RATIO: f64 = 10.0;
/// Levels stop once they drop to this fraction of the outer level.
pub const LADDER_FLOOR: f64 = 0.01;

/// Sign of the wavefunction lobe a surface belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Positive,
    Negative,
}

impl Phase {
    pub fn sign(&self) -> f64 {
        match self {
            Phase::Positive => 1.0,
            Phase::Negative => -1.0,
        }
    }

    pub fn color_tag(&self) -> &'static str {
        match self {
            Phase::Positive => "red",
            Phase::Negative => "blue",
        }
    }

    pub fn display_color(&self) -> &'static str {
        match self {
            Phase::Positive => "#FF3333",
            Phase::Negative => "#1976D2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    Outer,
    Subshell,
}

impl Shell {
    pub fn from_level_index(index: usize) -> Self {
        if index == 0 {
            Shell::Outer
        } else {
            Shell::Subshell
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            Shell::Outer => 0.7,
            Shell::Subshell => 0.4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shell::Outer => "outer",
            Shell::Subshell => "subshell",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Isosurface {
    /// Signed contour value.
    pub level: f64,
    pub phase: Phase,
    pub shell: Shell,
    pub mesh: Mesh,
}

impl Isosurface {
    pub fn color_tag(&self) -> &'static str {
        self.phase.color_tag()
    }

    pub fn opacity(&self) -> f64 {
        self.shell.opacity()
    }
}

/// Strictly decreasing levels, starting at `outer_level`.
pub fn level_ladder(outer_level: f64) -> Vec<f64> {
    if !(outer_level.is_finite() && outer_level > 0.0) {
        return Vec::new();
    }

    let floor = LADDER_FLOOR * outer_level;
    let mut levels = vec![outer_level];
    let mut level = outer_level / LADDER_RATIO;
    // the relative slack keeps a level sitting exactly on the floor out
    while level > floor * (1.0 + 1e-9) {
        levels.push(level);
        level /= LADDER_RATIO;
    }
    levels
}

/// Contour every ladder level at both signs, dropping empty surfaces.
pub fn extract_shells(grid: &ScalarGrid) -> Vec<Isosurface> {
    let levels = level_ladder(grid.max_abs());
    let mut surfaces = Vec::with_capacity(levels.len() * 2);

    for (i, level) in levels.iter().enumerate() {
        for phase in [Phase::Positive, Phase::Negative] {
            let signed = phase.sign() * level;
            let mesh = extract(grid, signed);
            if mesh.is_empty() {
                debug!("level {:+.6e} has no crossing, skipped", signed);
                continue;
            }
            debug!(
                "level {:+.6e}: {} points, {} triangles",
                signed,
                mesh.n_points(),
                mesh.n_triangles()
            );
            surfaces.push(Isosurface {
                level: signed,
                phase,
                shell: Shell::from_level_index(i),
                mesh,
            });
        }
    }

    surfaces
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ladder_stops_at_one_percent() {
        let levels = level_ladder(1.0);
        assert_eq!(levels.len(), 2);
        assert_relative_eq!(levels[0], 1.0);
        assert_relative_eq!(levels[1], 0.1);

        for outer in [3.7, 0.0125, 42.0] {
            let levels = level_ladder(outer);
            assert_eq!(levels.len(), 2);
            for pair in levels.windows(2) {
                assert!(pair[1] < pair[0]);
                assert_relative_eq!(pair[0] / pair[1], LADDER_RATIO, epsilon = 1e-12);
            }
            assert!(levels.iter().all(|&l| l > LADDER_FLOOR * outer));
        }
    }

    #[test]
    fn test_ladder_of_zero_field_is_empty() {
        assert!(level_ladder(0.0).is_empty());
        assert!(level_ladder(f64::NAN).is_empty());
    }

    #[test]
    fn test_tags() {
        assert_eq!(Shell::from_level_index(0), Shell::Outer);
        assert_eq!(Shell::from_level_index(3), Shell::Subshell);
        assert_relative_eq!(Shell::Outer.opacity(), 0.7);
        assert_relative_eq!(Shell::Subshell.opacity(), 0.4);
        assert_eq!(Phase::Positive.color_tag(), "red");
        assert_eq!(Phase::Negative.color_tag(), "blue");
    }

    #[test]
    fn test_odd_field_has_both_phases() {
        let grid = ScalarGrid::sample(21, 2.0, |p| p.x * (-p.norm_squared()).exp());
        let surfaces = extract_shells(&grid);
        assert!(surfaces.iter().any(|s| s.phase == Phase::Positive));
        assert!(surfaces.iter().any(|s| s.phase == Phase::Negative));
        for s in &surfaces {
            assert_eq!(s.level.signum(), s.phase.sign());
        }
    }
}
