//! Tint selection for new planes.

use config::constants::PLANE_COLORS;

/// Palette color for the plane that brought the population to `population`.
///
/// # Examples
/// ```
/// use plane_visualizer::palette::tint_for;
/// assert_eq!(tint_for(1), tint_for(16));
/// ```
pub fn tint_for(population: usize) -> [f32; 4] {
    PLANE_COLORS[population % PLANE_COLORS.len()]
}
