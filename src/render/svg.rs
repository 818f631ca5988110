//! Markup fragment writers and the fixed document wrapper.
//!
//! The vocabulary is deliberately small: line, circle and polygon elements
//! inside a single group transform. Coordinates live in an abstract
//! [-100, 100] square; the wrapper scales them by [`BASE_SCALE`] and
//! translates the origin to the center of a 300x300 canvas.

use glam::DVec2;

/// Scale factor the document wrapper applies to dial coordinates.
pub const BASE_SCALE: f64 = 0.75;

pub const FOOTER: &str = "\n</g>\n</svg>\n</html>";

pub fn header() -> String {
    format!(
        "<html>\n<svg height=300px width=300px>\n<g transform=\"translate(150, 150), scale({})\")>\n",
        fmt_num(BASE_SCALE)
    )
}

/// Stroked line from `a` to `b`.
pub fn line(a: DVec2, b: DVec2, width: f64, out: &mut String) {
    out.push_str(&format!(
        "<line x1={} y1={} x2={} y2={} style=\"stroke-width:{}; stroke:#000000\"></line>",
        fmt_num(a.x),
        fmt_num(a.y),
        fmt_num(b.x),
        fmt_num(b.y),
        fmt_num(width)
    ));
}

/// Filled circle, no stroke.
pub fn circle(center: DVec2, radius: f64, out: &mut String) {
    out.push_str(&format!(
        "<circle cx={} cy={} r={} style=\"stroke-width: 0; fill: rgb(0, 0, 0);\"></circle>",
        fmt_num(center.x),
        fmt_num(center.y),
        fmt_num(radius)
    ));
}

/// Filled triangle.
pub fn polygon(p1: DVec2, p2: DVec2, p3: DVec2, out: &mut String) {
    out.push_str(&format!(
        "<polygon points=\"{},{} {},{} {},{}\" />",
        fmt_num(p1.x),
        fmt_num(p1.y),
        fmt_num(p2.x),
        fmt_num(p2.y),
        fmt_num(p3.x),
        fmt_num(p3.y)
    ));
}

/// Format a number like C's %g (6 significant figures, trailing zeros
/// trimmed, scientific notation outside the %g window).
pub(crate) fn fmt_num(value: f64) -> String {
    const SIG_FIGS: i32 = 6;
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;

    // %g switches to scientific notation when the exponent is < -4 or
    // >= the precision
    if magnitude < -4 || magnitude >= SIG_FIGS {
        let mantissa = value / 10f64.powi(magnitude);
        let s = format!("{:.prec$}", mantissa, prec = (SIG_FIGS - 1) as usize);
        let s = s.trim_end_matches('0').trim_end_matches('.');
        return format!("{}e{}", s, magnitude);
    }

    // Round to SIG_FIGS significant figures, then trim
    let scale = 10f64.powi(SIG_FIGS - 1 - magnitude);
    let rounded = (value * scale).round() / scale;
    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}
