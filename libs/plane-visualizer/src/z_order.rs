//! # Draw Order
//!
//! Stacked horizontal planes z-fight when drawn in arbitrary order. Planes are
//! ranked by world height so lower planes are drawn first.

use ar_interface::PlaneId;

/// Ranks planes by ascending height: the lowest plane gets `n - 1`, the
/// highest `0`. Equal heights are ordered by id so ranks are stable.
///
/// # Example
///
/// ```rust
/// use ar_interface::PlaneId;
/// use plane_visualizer::z_order::draw_order_ranks;
///
/// let (floor, table) = (PlaneId::new_v4(), PlaneId::new_v4());
/// let ranks = draw_order_ranks(&[(table, 0.8), (floor, 0.0)]);
/// assert_eq!(ranks, vec![(floor, 1), (table, 0)]);
/// ```
pub fn draw_order_ranks(heights: &[(PlaneId, f32)]) -> Vec<(PlaneId, i32)> {
    let mut sorted = heights.to_vec();
    sorted.sort_by(|(id_a, a), (id_b, b)| a.total_cmp(b).then_with(|| id_a.cmp(id_b)));

    let count = sorted.len() as i32;
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, (id, _))| (id, count - 1 - index as i32))
        .collect()
}
