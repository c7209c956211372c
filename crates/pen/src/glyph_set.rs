//! Outlines and the glyph sets components are resolved from.

use std::collections::HashMap;
use std::fmt;

use crate::pen::Pen;
use crate::PenResult;

/// Anything that can describe itself as a sequence of pen calls.
///
/// Implemented by [RecordingPen](../recording/struct.RecordingPen.html) and by closures
/// taking a pen.
pub trait Outline {
    /// Replays the outline into `pen`.
    fn draw(&self, pen: &mut dyn Pen) -> PenResult;
}

impl<F> Outline for F
where
    F: Fn(&mut dyn Pen) -> PenResult,
{
    fn draw(&self, pen: &mut dyn Pen) -> PenResult {
        self(pen)
    }
}

/// Named outlines, used to resolve components.
///
/// Outlines are `Send + Sync` so that a glyph set can be shared by drawing passes
/// running on different threads.
#[derive(Default)]
pub struct GlyphSet {
    outlines: HashMap<String, Box<dyn Outline + Send + Sync>>,
}

impl GlyphSet {
    pub fn new() -> Self {
        GlyphSet::default()
    }

    /// Adds an outline, replacing and returning any previous outline with the same name.
    pub fn insert<O>(
        &mut self,
        name: impl Into<String>,
        outline: O,
    ) -> Option<Box<dyn Outline + Send + Sync>>
    where
        O: Outline + Send + Sync + 'static,
    {
        self.outlines.insert(name.into(), Box::new(outline))
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Outline + Send + Sync)> {
        self.outlines.get(name).map(|outline| &**outline)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.outlines.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Outline + Send + Sync>> {
        self.outlines.remove(name)
    }

    pub fn len(&self) -> usize {
        self.outlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }

    /// The names of the outlines, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.outlines.keys().map(String::as_str)
    }
}

impl fmt::Debug for GlyphSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("GlyphSet").field("names", &names).finish()
    }
}

#[test]
fn glyph_set_lookup() {
    use crate::math::point;
    use crate::recording::{PenCommand, RecordingPen};

    let mut glyphs = GlyphSet::new();
    assert!(glyphs.is_empty());

    let mut bar = RecordingPen::new();
    bar.move_to(point(0.0, 0.0)).unwrap();
    bar.line_to(point(0.0, 10.0)).unwrap();
    bar.end_path().unwrap();

    assert!(glyphs.insert("bar", bar).is_none());
    assert!(glyphs
        .insert("dot", |pen: &mut dyn Pen| -> PenResult {
            pen.move_to(point(0.0, 0.0))?;
            pen.end_path()
        })
        .is_none());

    assert_eq!(glyphs.len(), 2);
    assert!(glyphs.contains("bar"));
    assert!(!glyphs.contains("baz"));
    assert!(glyphs.get("baz").is_none());

    let mut names: Vec<&str> = glyphs.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["bar", "dot"]);
    assert_eq!(format!("{:?}", glyphs), "GlyphSet { names: [\"bar\", \"dot\"] }");

    let mut recorded = RecordingPen::new();
    glyphs.get("dot").unwrap().draw(&mut recorded).unwrap();
    assert_eq!(
        recorded.commands(),
        &[PenCommand::MoveTo(point(0.0, 0.0)), PenCommand::EndPath]
    );

    assert!(glyphs.insert("bar", RecordingPen::new()).is_some());
    assert_eq!(glyphs.len(), 2);
    assert!(glyphs.remove("bar").is_some());
    assert!(!glyphs.contains("bar"));
}

#[test]
fn glyph_set_is_shareable_between_threads() {
    use crate::base::BasePen;
    use crate::math::{point, Transform};
    use crate::recording::{RecordingPen, SegmentEvent};
    use std::sync::Arc;

    let mut bar = RecordingPen::new();
    bar.move_to(point(0.0, 0.0)).unwrap();
    bar.line_to(point(0.0, 10.0)).unwrap();
    bar.end_path().unwrap();

    let mut glyphs = GlyphSet::new();
    glyphs.insert("bar", bar);
    let glyphs = Arc::new(glyphs);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let glyphs = Arc::clone(&glyphs);
            std::thread::spawn(move || {
                let mut pen = BasePen::with_glyph_set(Vec::<SegmentEvent>::new(), &glyphs);
                pen.add_component("bar", &Transform::translation(i as f32, 0.0))
                    .unwrap();
                pen.into_inner()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let events = handle.join().unwrap();
        assert_eq!(events[0], SegmentEvent::MoveTo(point(i as f32, 0.0)));
        assert_eq!(events[1], SegmentEvent::LineTo(point(i as f32, 10.0)));
    }
}
