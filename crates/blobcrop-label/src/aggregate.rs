//! Second pass - grouping pixels by canonical root
//!
//! After the scan pass the grid holds provisional labels. This pass
//! resolves every non-zero cell to its representative and collects pixel
//! coordinates per component.

use crate::disjoint::LabelArena;
use crate::grid::LabelGrid;
use std::collections::HashMap;

/// Group all labeled pixels by their canonical root.
///
/// Returns a map from representative label to the component's pixel
/// coordinates in scan order. Every non-background pixel appears in
/// exactly one list.
pub fn collect_components(
    grid: &LabelGrid,
    arena: &mut LabelArena,
) -> HashMap<u32, Vec<(u32, u32)>> {
    let mut components: HashMap<u32, Vec<(u32, u32)>> = HashMap::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let label = grid.get_unchecked(x, y);
            if label == 0 {
                continue;
            }
            let root = arena.find(label);
            components.entry(root).or_default().push((x, y));
        }
    }

    components
}
