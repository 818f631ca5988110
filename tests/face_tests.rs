//! Integration tests over whole watch definitions.

use dialface::{
    ConstantDict, ElementGroup, Error, PositionSpec, Ring, ShapeKind, WatchDef, faces, render,
};

const HEADER: &str =
    "<html>\n<svg height=300px width=300px>\n<g transform=\"translate(150, 150), scale(0.75)\")>\n";
const FOOTER: &str = "\n</g>\n</svg>\n</html>";

#[test]
fn document_frame() {
    let svg = render(&faces::submariner()).unwrap();
    assert!(svg.starts_with(HEADER));
    assert!(svg.ends_with(FOOTER));
}

#[test]
fn empty_face_is_just_the_frame() {
    let svg = render(&WatchDef::new(ConstantDict::new(), vec![])).unwrap();
    insta::assert_snapshot!(svg, @r#"
<html>
<svg height=300px width=300px>
<g transform="translate(150, 150), scale(0.75)")>

</g>
</svg>
</html>
"#);
}

#[test]
fn single_marker_at_quarter_turn() {
    // Fraction 1/4 maps to angle 0, where cos/sin are exactly 1/0, so the
    // whole document is exactly representable.
    let face = WatchDef::new(
        ConstantDict::new(),
        vec![Ring::new(
            0.0,
            vec![ElementGroup::new(
                PositionSpec::Explicit(vec!["1/4".into()]),
                ShapeKind::Circle,
                vec![4.0.into()],
            )],
        )],
    );
    let svg = render(&face).unwrap();
    insta::assert_snapshot!(svg, @r#"
<html>
<svg height=300px width=300px>
<g transform="translate(150, 150), scale(0.75)")>
<circle cx=98 cy=0 r=2 style="stroke-width: 0; fill: rgb(0, 0, 0);"></circle>
</g>
</svg>
</html>
"#);
}

#[test]
fn submariner_element_counts() {
    let svg = render(&faces::submariner()).unwrap();
    // Ring 1: 12 hour ticks + 48 minute ticks (the 12 coincidences are
    // claimed by the hour group). Ring 2: triangle at twelve, bars at the
    // remaining quarters, dots on the remaining hours.
    assert_eq!(svg.matches("<line ").count(), 63);
    assert_eq!(svg.matches("<circle ").count(), 8);
    assert_eq!(svg.matches("<polygon ").count(), 1);
}

#[test]
fn submariner_occlusion_attribution() {
    let svg = render(&faces::submariner()).unwrap();
    // Hour ticks are a_width * 1.5 wide, minute ticks a_width wide.
    assert_eq!(svg.matches("stroke-width:1.125;").count(), 12);
    assert_eq!(svg.matches("stroke-width:0.75;").count(), 48);
}

#[test]
fn speedmaster_element_counts() {
    let svg = render(&faces::speedmaster()).unwrap();
    // Ring 1: 12 + 48 + 180 ticks; ring 2: 12 bars; ring 3: 2 dots.
    assert_eq!(svg.matches("<line ").count(), 252);
    assert_eq!(svg.matches("<circle ").count(), 2);
    assert_eq!(svg.matches("<polygon ").count(), 0);
}

#[test]
fn rendering_is_idempotent() {
    let first = render(&faces::speedmaster()).unwrap();
    let second = render(&faces::speedmaster()).unwrap();
    assert_eq!(first, second);

    let first = render(&faces::submariner()).unwrap();
    let second = render(&faces::submariner()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_offset_expression_fails_the_render() {
    let face = WatchDef::new(
        ConstantDict::new(),
        vec![Ring::new("2 == 2", vec![])],
    );
    assert!(matches!(
        render(&face).unwrap_err(),
        Error::UnsupportedExpression { .. }
    ));
}

#[test]
fn unresolved_symbol_fails_the_render() {
    let face = WatchDef::new(
        ConstantDict::new().with("a_len", 3.0),
        vec![Ring::new(
            1.0,
            vec![ElementGroup::new(
                PositionSpec::Count(12),
                ShapeKind::Line,
                // typo: dictionary has a_len, not a_wdith
                vec!["a_len".into(), "a_wdith".into()],
            )],
        )],
    );
    assert!(matches!(
        render(&face).unwrap_err(),
        Error::UnresolvedSymbol { .. }
    ));
}
