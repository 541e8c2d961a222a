//! Spatial validation for building placement
//!
//! A footprint is accepted when its bounding circle keeps clear of the pond
//! and its buffered rectangle does not overlap any other buffered building.

use super::types::{Building, Footprint, PlanPoint, PLACEMENT_BUFFER, POND_RADIUS};

/// Center of the generated pond for a layout
pub fn pond_center(layout_size: i32) -> PlanPoint {
    let half = layout_size as f32 / 2.0;
    PlanPoint::new(half, half)
}

/// Whether the footprint's bounding circle stays `PLACEMENT_BUFFER` clear of the pond
pub fn clears_pond(footprint: &Footprint, layout_size: i32) -> bool {
    let min_safe_distance = POND_RADIUS as f32 + PLACEMENT_BUFFER;
    let dist_to_pond_center = footprint.center().distance(&pond_center(layout_size));
    dist_to_pond_center >= min_safe_distance + footprint.bounding_radius()
}

/// Whether the two footprints collide once both are grown by `PLACEMENT_BUFFER`
pub fn footprints_conflict(a: &Footprint, b: &Footprint) -> bool {
    a.expanded(PLACEMENT_BUFFER)
        .overlaps(&b.expanded(PLACEMENT_BUFFER))
}

/// Full placement check of a candidate footprint against the pond and `others`
pub fn is_valid_footprint<'a>(
    candidate: &Footprint,
    others: impl IntoIterator<Item = &'a Building>,
    layout_size: i32,
) -> bool {
    if !clears_pond(candidate, layout_size) {
        return false;
    }

    others
        .into_iter()
        .all(|building| !footprints_conflict(candidate, &building.footprint()))
}
