#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Pens that measure glyph outlines.
//!
//! The pens in this crate implement [SegmentPen](../penkit_pen/base/trait.SegmentPen.html)
//! and are meant to be driven through a [BasePen](../penkit_pen/base/struct.BasePen.html),
//! which takes care of splitting curves and drawing components. Helpers such as
//! [signed_area](area/fn.signed_area.html) do exactly that for a whole outline.
//!
//! This crate is reexported in [penkit](https://docs.rs/penkit/).

pub extern crate penkit_pen as pen;

pub mod area;
pub mod bounds;

pub use crate::pen::geom;
pub use crate::pen::math;

use crate::pen::{BasePen, DecomposeOptions, GlyphSet, Outline, PenResult, SegmentPen};

/// Draws `outline` into `segments`, failing on missing components.
pub(crate) fn draw_segments<O, S>(
    outline: &O,
    glyph_set: Option<&GlyphSet>,
    segments: S,
) -> PenResult
where
    O: Outline + ?Sized,
    S: SegmentPen,
{
    let options = DecomposeOptions::DEFAULT.with_skip_missing_components(false);
    let mut pen = match glyph_set {
        Some(glyphs) => BasePen::with_glyph_set(segments, glyphs),
        None => BasePen::new(segments),
    }
    .with_options(options);

    outline.draw(&mut pen)
}
