//! Radial layout: expand position specs around the circle and skip
//! positions already claimed by an earlier group in the same ring.
//!
//! Occlusion is exact: a position is "the same" only when the two f64
//! values are bit-identical, which holds whenever both groups derive the
//! fraction the same way (i/12 and 5i/60 both round to the same double).
//! This is what lets a face say "every 12th position gets a big marker,
//! every 60th a small one" without double-drawing the coincidences.

use std::collections::HashSet;
use std::f64::consts::{FRAC_PI_2, TAU};

use super::shapes::Marker;
use crate::resolve::{ResolvedGroup, ResolvedPositions};

/// Angle for a fractional position. Fraction 0 is twelve o'clock and
/// increasing fractions move clockwise.
pub fn position_angle(position: f64) -> f64 {
    position * TAU - FRAC_PI_2
}

/// Expand a position spec into fractions, in deterministic order
/// (ascending i for Count/Arc, declaration order for Explicit).
pub fn expand_positions(spec: &ResolvedPositions) -> Vec<f64> {
    match spec {
        ResolvedPositions::Count(n) => (0..*n).map(|i| i as f64 / *n as f64).collect(),
        ResolvedPositions::Explicit(fractions) => fractions.clone(),
        ResolvedPositions::Arc { count, start, end } => (0..=*count)
            .map(|i| i as f64 / *count as f64)
            .filter(|f| arc_contains(*f, *start, *end))
            .collect(),
    }
}

/// Arc membership on the unit circle; the arc may cross twelve o'clock.
fn arc_contains(fraction: f64, start: f64, end: f64) -> bool {
    let f = normalize(fraction);
    let s = normalize(start);
    let e = normalize(end);
    if close(f, s) || close(f, e) {
        return true;
    }
    if s > e {
        // crosses zero
        s <= f || f <= e
    } else {
        s <= f && f <= e
    }
}

/// Reduce a fraction into [0, 1).
fn normalize(fraction: f64) -> f64 {
    let mut f = fraction;
    if f <= -1.0 || f >= 1.0 {
        f %= 1.0;
    }
    if f < 0.0 {
        f += 1.0;
    }
    f
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Render one ring's groups at the given cumulative offset, appending the
/// markup fragments in group-then-position order.
pub fn layout_ring(offset: f64, groups: &[ResolvedGroup], out: &mut String) {
    let mut filled: HashSet<u64> = HashSet::new();

    for group in groups {
        for position in expand_positions(&group.positions) {
            if !filled.insert(position.to_bits()) {
                crate::log::debug!(position, "position occluded by earlier group");
                continue;
            }
            group.marker.emit(position_angle(position), offset, out);
        }
    }
}
