//! Path-to-mask rasterization
//!
//! Converts display-space selection paths into an output-space binary
//! mask. Brush paths are replayed as round dabs stamped along their
//! flattened segments; lasso paths are scanline-filled as closed
//! polygons. All deposited coverage is unioned, then the surface is
//! binarized so the finished mask contains only pure black and pure
//! white.

use std::cmp::Ordering;

use glam::Vec2;
use tracing::debug;

use crate::constants::{CURVE_TOLERANCE, DAB_SPACING, MIN_DAB_SPACING};
use crate::geometry::flatten_path;
use crate::space::CanvasMapping;
use crate::surface::MaskSurface;
use crate::types::{SelectionMode, SelectionPath};
use crate::validation::validate_path;

/// Rasterize selection paths into a binary mask
///
/// The mask is `mapping.output_width` pixels square. An empty path list
/// yields the all-black "no selection" mask; whether that is acceptable
/// is the caller's decision. Invalid paths are skipped without aborting
/// the rest. The operation is synchronous and deterministic: the same
/// paths and mapping always produce byte-identical output.
pub fn rasterize(paths: &[SelectionPath], mapping: CanvasMapping) -> MaskSurface {
    let size = mapping.output_width.round() as u32;
    let mut surface = MaskSurface::new(size, size);

    if paths.is_empty() {
        debug!("rasterize: no paths, mask stays all-black");
    }

    for (index, path) in paths.iter().enumerate() {
        if let Err(err) = validate_path(path) {
            debug!("rasterize: skipping path {}: {}", index, err);
            continue;
        }
        let path = mapping.transform_path(path);
        match path.mode {
            SelectionMode::Brush { width } => stroke_path(&mut surface, &path, width),
            SelectionMode::Lasso => fill_path(&mut surface, &path),
        }
    }

    surface.binarize();
    surface
}

/// Replay a brush path as round dabs along its flattened polyline
///
/// Round caps and joins fall out of disc stamping: the first dab caps the
/// start, dabs at segment ends cap and join the rest. A single-point path
/// produces one round dot.
fn stroke_path(surface: &mut MaskSurface, path: &SelectionPath, width: f32) {
    let radius = (width * 0.5).max(0.5);
    let polyline = flatten_path(path, CURVE_TOLERANCE);
    let Some(&first) = polyline.first() else {
        return;
    };

    stamp_dab(surface, first, radius);

    let spacing = (radius * DAB_SPACING).max(MIN_DAB_SPACING);
    for window in polyline.windows(2) {
        let (a, b) = (window[0], window[1]);
        let distance = a.distance(b);
        if distance < f32::EPSILON {
            continue;
        }
        let steps = (distance / spacing).ceil() as u32;
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            stamp_dab(surface, a.lerp(b, t), radius);
        }
    }
}

/// Stamp one hard-edged round dab
///
/// Coverage falls from 1.0 inside the disc to 0.0 over a one-pixel
/// fringe; binarization later snaps the fringe to black or white. Dabs
/// wholly or partly outside the surface are clipped by the bounds check.
fn stamp_dab(surface: &mut MaskSurface, center: Vec2, radius: f32) {
    let x_min_f = (center.x - radius - 0.5).floor();
    let y_min_f = (center.y - radius - 0.5).floor();
    let x_max_f = (center.x + radius + 0.5).ceil();
    let y_max_f = (center.y + radius + 0.5).ceil();

    let x_min = (x_min_f.max(0.0) as u32).min(surface.width);
    let y_min = (y_min_f.max(0.0) as u32).min(surface.height);
    let x_max = (x_max_f.max(0.0) as u32).min(surface.width);
    let y_max = (y_max_f.max(0.0) as u32).min(surface.height);

    if x_min >= x_max || y_min >= y_max {
        return;
    }

    for py in y_min..y_max {
        for px in x_min..x_max {
            // Distance from the pixel center
            let dx = (px as f32 + 0.5) - center.x;
            let dy = (py as f32 + 0.5) - center.y;
            let distance = (dx * dx + dy * dy).sqrt();
            let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0);
            if coverage > 0.0 {
                surface.paint_coverage(px, py, coverage);
            }
        }
    }
}

/// Fill a lasso path's interior with the nonzero winding rule
///
/// The flattened polygon is implicitly closed (last vertex back to the
/// first). Degenerate outlines with fewer than three vertices have no
/// interior and contribute nothing.
fn fill_path(surface: &mut MaskSurface, path: &SelectionPath) {
    let polygon = flatten_path(path, CURVE_TOLERANCE);
    if polygon.len() < 3 {
        debug!(
            "fill_path: degenerate outline with {} vertices, nothing to fill",
            polygon.len()
        );
        return;
    }

    let mut min_y = f32::MAX;
    let mut max_y = f32::MIN;
    for p in &polygon {
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let y_start = (min_y.floor().max(0.0) as u32).min(surface.height);
    let y_end = (max_y.ceil().max(0.0) as u32).min(surface.height);

    let mut crossings: Vec<(f32, i32)> = Vec::new();
    for y in y_start..y_end {
        let sample_y = y as f32 + 0.5;
        crossings.clear();

        for i in 0..polygon.len() {
            let a = polygon[i];
            let b = polygon[(i + 1) % polygon.len()];
            if a.y == b.y {
                continue;
            }
            // Half-open span [y0, y1) so shared vertices count once
            let (winding, y0, y1, x0, x1) = if a.y < b.y {
                (1, a.y, b.y, a.x, b.x)
            } else {
                (-1, b.y, a.y, b.x, a.x)
            };
            if sample_y < y0 || sample_y >= y1 {
                continue;
            }
            let t = (sample_y - y0) / (y1 - y0);
            crossings.push((x0 + t * (x1 - x0), winding));
        }

        crossings.sort_by(|l, r| l.0.partial_cmp(&r.0).unwrap_or(Ordering::Equal));

        let mut winding = 0;
        let mut span_start = 0.0;
        for &(x, direction) in &crossings {
            let was_inside = winding != 0;
            winding += direction;
            let now_inside = winding != 0;
            if !was_inside && now_inside {
                span_start = x;
            } else if was_inside && !now_inside {
                fill_span(surface, y, span_start, x);
            }
        }
    }
}

/// Fill the pixels of one row whose centers lie in [x_start, x_end)
fn fill_span(surface: &mut MaskSurface, y: u32, x_start: f32, x_end: f32) {
    let px_start = (x_start - 0.5).ceil().max(0.0) as u32;
    let px_end = ((x_end - 0.5).ceil().max(0.0) as u32).min(surface.width);
    for px in px_start..px_end {
        surface.paint_coverage(px, y, 1.0);
    }
}
