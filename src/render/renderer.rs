//! Depth-map shading into an RGBA pixel buffer
//!
//! Each pixel depends only on its own depth and the shared read-only inputs,
//! so the pass is a data-parallel map over the buffer. Parallel and sequential
//! renders are bit-identical.

use image::{Rgba, RgbaImage};
use rayon::prelude::*;

use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::render::color::lerp_color;
use crate::render::weights::DepthWeight;
use crate::spatial::DepthMap;

/// Row-major, top-left origin RGBA8 image produced by rendering
pub type PixelBuffer = RgbaImage;

const CHANNELS: usize = 4;

/// Clamp a strategy's output into `[0, 1]`; NaN maps to 0
pub fn clamp_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        0.0
    } else {
        weight.clamp(0.0, 1.0)
    }
}

/// Color of a single cell at `depth`
pub fn shade<W: DepthWeight + ?Sized>(
    depth: i64,
    color_a: Rgba<u8>,
    color_b: Rgba<u8>,
    weight: &W,
) -> Rgba<u8> {
    lerp_color(clamp_weight(weight.weight(depth)), color_a, color_b)
}

/// Shade every cell of a completed depth map in parallel
///
/// All workers finish before the buffer is returned.
///
/// # Errors
///
/// Returns an error if the map still holds unvisited cells or its dimensions
/// do not fit an image
pub fn render<W: DepthWeight + ?Sized>(
    depths: &DepthMap,
    color_a: Rgba<u8>,
    color_b: Rgba<u8>,
    weight: &W,
) -> Result<PixelBuffer> {
    let (mut buffer, cells) = prepare(depths)?;

    buffer
        .par_chunks_exact_mut(CHANNELS)
        .zip(cells.par_iter())
        .for_each(|(pixel, &depth)| {
            pixel.copy_from_slice(&shade(depth, color_a, color_b, weight).0);
        });

    Ok(buffer)
}

/// Shade every cell on the calling thread
///
/// # Errors
///
/// Same conditions as [`render`]
pub fn render_sequential<W: DepthWeight + ?Sized>(
    depths: &DepthMap,
    color_a: Rgba<u8>,
    color_b: Rgba<u8>,
    weight: &W,
) -> Result<PixelBuffer> {
    let (mut buffer, cells) = prepare(depths)?;

    for (pixel, &depth) in buffer.chunks_exact_mut(CHANNELS).zip(cells) {
        pixel.copy_from_slice(&shade(depth, color_a, color_b, weight).0);
    }

    Ok(buffer)
}

fn prepare(depths: &DepthMap) -> Result<(PixelBuffer, &[i64])> {
    if !depths.is_complete() {
        return Err(invalid_parameter(
            "depths",
            &"incomplete map",
            &"every cell must be visited before rendering",
        ));
    }

    let width = u32::try_from(depths.width()).map_err(|e| computation_error("render", &e))?;
    let height = u32::try_from(depths.height()).map_err(|e| computation_error("render", &e))?;
    let cells = depths
        .as_array()
        .as_slice()
        .ok_or_else(|| computation_error("render", &"depth map is not row-major"))?;

    Ok((RgbaImage::new(width, height), cells))
}
