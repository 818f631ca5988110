//! Rendering for watch definitions.
//!
//! This module is organized into submodules:
//! - `layout`: radial position expansion and per-ring occlusion
//! - `shapes`: marker renderers (line, circle, triangle, ...)
//! - `svg`: markup fragment writers and the fixed document wrapper

pub mod layout;
pub mod shapes;
pub mod svg;

use crate::errors::Error;
use crate::resolve::resolve_face;
use crate::types::WatchDef;

/// Render a watch definition to a complete markup document.
///
/// Rendering is pure: the same definition always produces byte-identical
/// output.
pub fn render(face: &WatchDef) -> Result<String, Error> {
    let resolved = resolve_face(face)?;

    let mut out = svg::header();
    let mut offset = 0.0;
    for ring in &resolved.rings {
        // Ring offsets are cumulative
        offset += ring.offset;
        crate::log::debug!(offset, groups = ring.groups.len(), "rendering ring");
        layout::layout_ring(offset, &ring.groups, &mut out);
    }
    out.push_str(svg::FOOTER);

    Ok(out)
}
