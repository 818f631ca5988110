//! Marker renderers: map a polar placement to one markup fragment.
//!
//! Each marker is a pure function of (angle, ring offset). Radii shrink
//! inward from the rim: a marker's anchor radius is `RIM - offset`, and its
//! length extends toward the center.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use super::svg;
use crate::errors::Error;
use crate::types::ShapeKind;

/// Dial radius before any ring offset is applied.
pub const RIM: f64 = 100.0;

fn radial_point(angle: f64, r: f64) -> DVec2 {
    dvec2(angle.cos() * r, angle.sin() * r)
}

/// Unit vector perpendicular to the radial direction at `angle`.
fn perp(angle: f64) -> DVec2 {
    dvec2(-angle.sin(), angle.cos())
}

/// Common behavior for all markers.
#[enum_dispatch]
pub trait Marker {
    /// Append the markup for one placement at `angle` on the ring at
    /// cumulative `offset`.
    fn emit(&self, angle: f64, offset: f64, out: &mut String);
}

/// Radial tick between radii `RIM - offset` and `RIM - offset - length`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub length: f64,
    pub width: f64,
}

impl Marker for Line {
    fn emit(&self, angle: f64, offset: f64, out: &mut String) {
        let ro = RIM - offset;
        let outer = radial_point(angle, ro);
        let inner = radial_point(angle, ro - self.length);
        svg::line(outer, inner, self.width, out);
    }
}

/// Filled dot tangent to the ring from the inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub diameter: f64,
}

impl Marker for Circle {
    fn emit(&self, angle: f64, offset: f64, out: &mut String) {
        let ro = RIM - offset;
        let center = radial_point(angle, ro - self.diameter / 2.0);
        svg::circle(center, self.diameter / 2.0, out);
    }
}

/// Base at the rim, apex pointing toward the center.
///
/// The apex is the single point nearer the center; this inverted-looking
/// geometry is the intended visual design, not a bug.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub length: f64,
    pub width: f64,
}

impl Marker for Triangle {
    fn emit(&self, angle: f64, offset: f64, out: &mut String) {
        let ro = RIM - offset;
        let half_base = perp(angle) * (self.width / 2.0);
        let rim = radial_point(angle, ro);
        let apex = radial_point(angle, ro - self.length);
        svg::polygon(rim + half_base, rim - half_base, apex, out);
    }
}

/// Apex at the rim, base pointing toward the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpsideTriangle {
    pub length: f64,
    pub width: f64,
}

impl Marker for UpsideTriangle {
    fn emit(&self, angle: f64, offset: f64, out: &mut String) {
        let ro = RIM - offset;
        let half_base = perp(angle) * (self.width / 2.0);
        let apex = radial_point(angle, ro);
        let base = radial_point(angle, ro - self.length);
        svg::polygon(apex, base + half_base, base - half_base, out);
    }
}

/// A tick with equal length and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Marker for Square {
    fn emit(&self, angle: f64, offset: f64, out: &mut String) {
        Line {
            length: self.side,
            width: self.side,
        }
        .emit(angle, offset, out);
    }
}

/// Two parallel ticks, displaced `width/2 * (1 + separation)` to either
/// side of the radial direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoLines {
    pub length: f64,
    pub width: f64,
    pub separation: f64,
}

impl Marker for TwoLines {
    fn emit(&self, angle: f64, offset: f64, out: &mut String) {
        let ro = RIM - offset;
        let inner = radial_point(angle, ro - self.length);
        let outer = radial_point(angle, ro);
        let factor = self.width / 2.0 * (1.0 + self.separation);
        // Displacement uses (sin, cos), mirroring the radial direction
        let d = dvec2(angle.sin(), angle.cos()) * factor;
        svg::line(inner + d, outer + d, self.width, out);
        svg::line(inner - d, outer - d, self.width, out);
    }
}

/// All marker kinds, dispatched without boxing.
#[enum_dispatch(Marker)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerEnum {
    Line,
    Circle,
    Triangle,
    UpsideTriangle,
    Square,
    TwoLines,
}

impl MarkerEnum {
    /// Build a marker from a shape kind and its resolved arguments,
    /// validating arity.
    pub fn build(kind: ShapeKind, args: &[f64]) -> Result<MarkerEnum, Error> {
        let expected = match kind {
            ShapeKind::Circle | ShapeKind::Square => 1,
            ShapeKind::Line | ShapeKind::Triangle | ShapeKind::UpsideTriangle => 2,
            ShapeKind::TwoLines => 3,
        };
        if args.len() != expected {
            return Err(Error::WrongArgCount {
                shape: kind.name(),
                expected,
                got: args.len(),
            });
        }

        Ok(match kind {
            ShapeKind::Line => Line {
                length: args[0],
                width: args[1],
            }
            .into(),
            ShapeKind::Circle => Circle { diameter: args[0] }.into(),
            ShapeKind::Triangle => Triangle {
                length: args[0],
                width: args[1],
            }
            .into(),
            ShapeKind::UpsideTriangle => UpsideTriangle {
                length: args[0],
                width: args[1],
            }
            .into(),
            ShapeKind::Square => Square { side: args[0] }.into(),
            ShapeKind::TwoLines => TwoLines {
                length: args[0],
                width: args[1],
                separation: args[2],
            }
            .into(),
        })
    }
}
