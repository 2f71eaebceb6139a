//! Scroll progress through the pinned gallery and the values derived from it.
//!
//! The gallery region is `count` screens tall and its inner viewport is sticky, so
//! scrolling the region from its top edge to its bottom edge sweeps progress from
//! 0 to 1. Every image after the first owns one equal segment of that sweep and
//! slides up from 100% to 0% while its segment runs. The dot indicator below the
//! images stretches toward the next dot during the first quarter of a segment and
//! catches up during the remaining three quarters.
//!
//! Nothing here is cached: callers hold a [`ScrollProgress`] and derive offsets and
//! geometry from it on every render.

use thiserror::Error;

pub const DOT_SIZE: f64 = 20.0;
pub const DOT_SPACING: f64 = 40.0;

/// Share of each segment spent stretching toward the next dot.
const STRETCH_SHARE: f64 = 0.25;

/// Normalized position inside the pinned region, always within `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    /// Momentum and rubber-band scrolling overshoot, so the raw value is clamped.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            Self(0.0)
        } else {
            Self(raw.clamp(0.0, 1.0))
        }
    }

    /// Progress for a region whose bounding box starts `top` px from the viewport top.
    /// 0 when the region top meets the viewport top, 1 when the region bottom meets the
    /// viewport bottom.
    pub fn from_region(top: f64, height: f64, viewport_height: f64) -> Self {
        let span = height - viewport_height;
        if span <= 0.0 {
            return Self::new(if top <= 0.0 { 1.0 } else { 0.0 });
        }
        Self::new(-top / span)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("gallery needs at least one image")]
    Empty,
}

/// Position and width of the highlight mark, in px along the dot row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorGeometry {
    pub left: f64,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryLayout {
    count: usize,
    dot_size: f64,
    dot_spacing: f64,
}

impl GalleryLayout {
    pub fn new(count: usize) -> Result<Self, LayoutError> {
        if count == 0 {
            return Err(LayoutError::Empty);
        }
        Ok(Self {
            count,
            dot_size: DOT_SIZE,
            dot_spacing: DOT_SPACING,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn dot_size(&self) -> f64 {
        self.dot_size
    }

    /// Gap between neighbouring dots, edge to edge.
    pub fn dot_gap(&self) -> f64 {
        (self.dot_spacing - self.dot_size).max(0.0)
    }

    pub fn dot_position(&self, index: usize) -> f64 {
        index as f64 * self.dot_spacing
    }

    fn segments(&self) -> usize {
        self.count - 1
    }

    /// Progress bounds `(start, end)` of the segment in which image `index` slides in.
    /// The first image has none.
    pub fn segment(&self, index: usize) -> Option<(f64, f64)> {
        if index == 0 || index >= self.count {
            return None;
        }
        let n = self.segments() as f64;
        Some(((index - 1) as f64 / n, index as f64 / n))
    }

    /// Vertical offset of image `index` as a percentage of its own height.
    /// 100 means fully below the viewport, 0 means in place.
    pub fn image_offset_percent(&self, index: usize, progress: ScrollProgress) -> f64 {
        let Some((start, end)) = self.segment(index) else {
            return 0.0;
        };
        let local = ((progress.value() - start) / (end - start)).clamp(0.0, 1.0);
        (1.0 - local) * 100.0
    }

    pub fn indicator(&self, progress: ScrollProgress) -> IndicatorGeometry {
        let mut geometry = IndicatorGeometry {
            left: self.dot_position(0),
            width: self.dot_size,
        };
        let segments = self.segments();
        if segments == 0 {
            return geometry;
        }

        let v = progress.value();
        let n = segments as f64;
        // Later transitions win at shared boundaries, so `end` of one hands over to
        // `start` of the next without a jump.
        for i in 0..segments {
            let start = i as f64 / n;
            let mid = start + STRETCH_SHARE / n;
            let end = (i + 1) as f64 / n;

            if v >= start && v <= mid {
                let expand = (v - start) / (mid - start);
                geometry = IndicatorGeometry {
                    left: self.dot_position(i),
                    width: self.dot_size + expand * self.dot_spacing,
                };
            } else if v > mid && v <= end {
                let travel = (v - mid) / (end - mid);
                let from = self.dot_position(i);
                let to = self.dot_position(i + 1);
                geometry = IndicatorGeometry {
                    left: from + travel * (to - from),
                    width: self.dot_size + (1.0 - travel) * self.dot_spacing,
                };
            }
        }
        geometry
    }

    /// Index of the image currently settling into place.
    pub fn active_index(&self, progress: ScrollProgress) -> usize {
        let segments = self.segments();
        if segments == 0 {
            return 0;
        }
        let v = progress.value() * segments as f64;
        (v.round() as usize).min(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn p(v: f64) -> ScrollProgress {
        ScrollProgress::new(v)
    }

    fn sweep() -> impl Iterator<Item = f64> {
        (0..=1000).map(|i| i as f64 / 1000.0)
    }

    #[test]
    fn empty_gallery_is_rejected() {
        assert_eq!(GalleryLayout::new(0), Err(LayoutError::Empty));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(p(-0.3).value(), 0.0);
        assert_eq!(p(1.7).value(), 1.0);
        assert_eq!(p(f64::NAN).value(), 0.0);
        assert_eq!(p(0.42).value(), 0.42);
    }

    #[test]
    fn progress_from_region_bounds() {
        // 4 screens of 800px: span is 2400px.
        assert_eq!(ScrollProgress::from_region(0.0, 3200.0, 800.0).value(), 0.0);
        assert_eq!(ScrollProgress::from_region(200.0, 3200.0, 800.0).value(), 0.0);
        assert!((ScrollProgress::from_region(-1200.0, 3200.0, 800.0).value() - 0.5).abs() < EPS);
        assert_eq!(ScrollProgress::from_region(-2400.0, 3200.0, 800.0).value(), 1.0);
        assert_eq!(ScrollProgress::from_region(-9000.0, 3200.0, 800.0).value(), 1.0);
        // Region no taller than the viewport.
        assert_eq!(ScrollProgress::from_region(-1.0, 800.0, 800.0).value(), 1.0);
        assert_eq!(ScrollProgress::from_region(5.0, 800.0, 800.0).value(), 0.0);
    }

    #[test]
    fn first_image_never_moves() {
        for n in 1..=6 {
            let layout = GalleryLayout::new(n).unwrap();
            for v in sweep() {
                assert_eq!(layout.image_offset_percent(0, p(v)), 0.0);
            }
        }
    }

    #[test]
    fn images_slide_in_within_their_segment() {
        for n in 2..=6 {
            let layout = GalleryLayout::new(n).unwrap();
            for i in 1..n {
                let (start, end) = layout.segment(i).unwrap();
                let mut previous = f64::INFINITY;
                for v in sweep() {
                    let y = layout.image_offset_percent(i, p(v));
                    assert!((0.0..=100.0).contains(&y));
                    assert!(y <= previous + EPS, "offset grew at v={v} for image {i}/{n}");
                    if v <= start {
                        assert!((y - 100.0).abs() < EPS);
                    }
                    if v >= end {
                        assert!(y.abs() < EPS);
                    }
                    previous = y;
                }
            }
        }
    }

    #[test]
    fn segments_cover_the_range_once() {
        let layout = GalleryLayout::new(5).unwrap();
        let mut cursor = 0.0;
        for i in 1..5 {
            let (start, end) = layout.segment(i).unwrap();
            assert!((start - cursor).abs() < EPS);
            assert!(end > start);
            cursor = end;
        }
        assert!((cursor - 1.0).abs() < EPS);
        assert_eq!(layout.segment(0), None);
        assert_eq!(layout.segment(5), None);
    }

    #[test]
    fn four_images_at_sixty_percent() {
        let layout = GalleryLayout::new(4).unwrap();
        let v = p(0.6);
        assert_eq!(layout.image_offset_percent(1, v), 0.0);
        let third = layout.image_offset_percent(2, v);
        assert!((third - 20.0).abs() < 1e-6);
        assert_eq!(layout.image_offset_percent(3, v), 100.0);
    }

    #[test]
    fn indicator_stretches_and_settles_each_transition() {
        for n in 2..=6 {
            let layout = GalleryLayout::new(n).unwrap();
            let segs = (n - 1) as f64;
            for i in 0..n - 1 {
                let start = i as f64 / segs;
                let mid = start + 0.25 / segs;
                let end = (i + 1) as f64 / segs;

                let at_start = layout.indicator(p(start));
                assert!((at_start.width - DOT_SIZE).abs() < 1e-6);
                assert!((at_start.left - layout.dot_position(i)).abs() < 1e-6);

                let at_mid = layout.indicator(p(mid));
                assert!((at_mid.width - (DOT_SIZE + DOT_SPACING)).abs() < 1e-6);
                assert!((at_mid.left - layout.dot_position(i)).abs() < 1e-6);

                let at_end = layout.indicator(p(end));
                assert!((at_end.width - DOT_SIZE).abs() < 1e-6);
                assert!((at_end.left - layout.dot_position(i + 1)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn indicator_never_moves_backward() {
        for n in 1..=6 {
            let layout = GalleryLayout::new(n).unwrap();
            let mut previous = f64::NEG_INFINITY;
            for v in sweep() {
                let left = layout.indicator(p(v)).left;
                assert!(left >= previous - EPS, "left went back at v={v} for n={n}");
                previous = left;
            }
        }
    }

    #[test]
    fn indicator_width_stays_in_range() {
        let layout = GalleryLayout::new(4).unwrap();
        for v in sweep() {
            let width = layout.indicator(p(v)).width;
            assert!(width >= DOT_SIZE - EPS && width <= DOT_SIZE + DOT_SPACING + EPS);
        }
    }

    #[test]
    fn single_image_keeps_a_fixed_indicator() {
        let layout = GalleryLayout::new(1).unwrap();
        let expected = IndicatorGeometry { left: 0.0, width: DOT_SIZE };
        for v in sweep() {
            assert_eq!(layout.indicator(p(v)), expected);
            assert_eq!(layout.active_index(p(v)), 0);
        }
    }

    #[test]
    fn dot_row_metrics() {
        let layout = GalleryLayout::new(3).unwrap();
        assert_eq!(layout.dot_gap(), 20.0);
        assert_eq!(layout.dot_position(2), 80.0);
        let at_mid = layout.indicator(p(0.125));
        assert!((at_mid.width - 60.0).abs() < 1e-6);
        assert_eq!(layout.indicator(p(1.0)).left, 80.0);
    }

    #[test]
    fn active_index_tracks_the_nearest_image() {
        let layout = GalleryLayout::new(4).unwrap();
        assert_eq!(layout.active_index(p(0.0)), 0);
        assert_eq!(layout.active_index(p(0.1)), 0);
        assert_eq!(layout.active_index(p(0.3)), 1);
        assert_eq!(layout.active_index(p(0.6)), 2);
        assert_eq!(layout.active_index(p(1.0)), 3);
    }
}
