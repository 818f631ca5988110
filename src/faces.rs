//! The shipped face designs.
//!
//! These are plain data: each face is a constant dictionary plus its ring
//! table. The dictionaries keep shape dimensions DRY - a tick length
//! declared once as `a_len` can be reused and scaled (`"a_width * 1.5"`)
//! across groups.

use crate::types::{ConstantDict, ElementGroup, PositionSpec, Ring, ShapeKind, WatchDef};

/// Chronograph-style dial: minute and quarter-minute tick rings plus two
/// small dots flanking twelve o'clock.
pub fn speedmaster() -> WatchDef {
    WatchDef::new(
        ConstantDict::new()
            .with("a_len", 2.0)
            .with("a_width", 0.5)
            .with("b_off", 2.0)
            .with("b_len", 23.0)
            .with("c_diameter", 3.0),
        vec![
            Ring::new(
                1.0,
                vec![
                    ElementGroup::new(
                        PositionSpec::Count(12),
                        ShapeKind::Line,
                        vec!["a_len".into(), "a_width * 1.5".into()],
                    ),
                    ElementGroup::new(
                        PositionSpec::Count(60),
                        ShapeKind::Line,
                        vec![11.0.into(), "a_width".into()],
                    ),
                    ElementGroup::new(
                        PositionSpec::Count(240),
                        ShapeKind::Line,
                        vec!["a_len".into(), "a_width".into()],
                    ),
                ],
            ),
            Ring::new(
                "a_len + b_off",
                vec![ElementGroup::new(
                    PositionSpec::Count(12),
                    ShapeKind::Line,
                    vec!["b_len".into(), 5.0.into()],
                )],
            ),
            Ring::new(
                "b_len - c_diameter",
                vec![ElementGroup::new(
                    PositionSpec::Explicit(vec!["1/60".into(), "-1/60".into()]),
                    ShapeKind::Circle,
                    vec!["c_diameter".into()],
                )],
            ),
        ],
    )
}

/// Diver-style dial: hour and minute ticks, a triangle at twelve, bars at
/// the quarters and dots on the remaining hours.
pub fn submariner() -> WatchDef {
    WatchDef::new(
        ConstantDict::new()
            .with("a_len", 3.0)
            .with("a_width", 0.75)
            .with("b_off", 2.0)
            .with("b_len", 30.0)
            .with("c_diameter", 3.0),
        vec![
            Ring::new(
                1.0,
                vec![
                    ElementGroup::new(
                        PositionSpec::Count(12),
                        ShapeKind::Line,
                        vec!["a_len".into(), "a_width * 1.5".into()],
                    ),
                    ElementGroup::new(
                        PositionSpec::Count(60),
                        ShapeKind::Line,
                        vec!["a_len".into(), "a_width".into()],
                    ),
                ],
            ),
            Ring::new(
                "a_len + b_off",
                vec![
                    ElementGroup::new(
                        PositionSpec::Count(1),
                        ShapeKind::Triangle,
                        vec!["b_len".into(), "b_len * 0.7".into()],
                    ),
                    ElementGroup::new(
                        PositionSpec::Count(4),
                        ShapeKind::Line,
                        vec!["b_len".into(), "b_len / 3".into()],
                    ),
                    ElementGroup::new(
                        PositionSpec::Count(12),
                        ShapeKind::Circle,
                        vec!["b_len * 0.55".into()],
                    ),
                ],
            ),
        ],
    )
}
