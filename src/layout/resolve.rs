//! Bounded-iteration overlap relaxation with a deterministic stacked fallback.
//!
//! # Algorithm
//!
//! 1. Sort components by ascending priority (the anchor is implicitly first).
//! 2. Each pass visits every pair in that order. An overlapping pair is
//!    resolved by moving one member vertically:
//!    - anchor pair: the other component is pushed away from the anchor, on
//!      whichever side its center already lies, by the minimum spacing plus
//!      a small buffer;
//!    - otherwise: the component with the larger priority value moves up
//!      until its bottom edge clears the other's top edge by the spacing.
//! 3. Stop after a pass with no overlaps, or after `max_iterations` passes.
//! 4. If overlaps remain, restack every component above the anchor in
//!    current top-to-bottom order. That always succeeds and is reported as
//!    [`LayoutUnresolved`].

use std::cmp::Ordering;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Point, Rect, Size};
use crate::layout::{LayoutComponent, ResolverConfig};
use crate::mode::NumeralMode;

/// The relaxation hit its pass limit and the stacked fallback was used.
///
/// Not an error for callers: the returned layout is still overlap-free.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic, Serialize, Deserialize)]
#[error("layout unresolved after {passes} passes ({overlaps} overlapping pairs left); stacked fallback used")]
#[diagnostic(
    code(polynumeral::layout::unresolved),
    severity(Warning),
    help("Components may appear out of their preferred order. Raise max_iterations or min_spacing.")
)]
pub struct LayoutUnresolved {
    pub passes: u32,
    pub overlaps: usize,
}

/// Final position of one component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: NumeralMode,
    pub center: Point,
    /// `center` relative to the anchor center.
    pub offset: Point,
    pub size: Size,
    pub priority: u8,
}

impl Placement {
    pub fn rect(&self) -> Rect {
        Rect::new(self.center, self.size)
    }
}

/// Output of [`OverlapResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLayout {
    pub anchor: Rect,
    /// Placements in ascending priority order.
    pub placements: Vec<Placement>,
    /// Relaxation passes run.
    pub passes: u32,
    /// Set when the fallback was needed.
    pub unresolved: Option<LayoutUnresolved>,
}

impl ResolvedLayout {
    pub fn get(&self, id: NumeralMode) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == id)
    }

    /// Whether every pair (anchor included) is at least `spacing` apart.
    pub fn is_overlap_free(&self, spacing: f64) -> bool {
        let rects: Vec<Rect> = self.placements.iter().map(Placement::rect).collect();
        count_overlaps(self.anchor, &rects, spacing) == 0
    }
}

/// Count overlapping pairs among `anchor` and `rects`, padding every box by
/// half of `spacing`.
pub fn count_overlaps(anchor: Rect, rects: &[Rect], spacing: f64) -> usize {
    let all: Vec<Rect> = std::iter::once(anchor).chain(rects.iter().copied()).collect();
    let mut overlaps = 0;
    for i in 0..all.len() {
        for j in (i + 1)..all.len() {
            if all[i].overlaps_with_spacing(&all[j], spacing) {
                overlaps += 1;
            }
        }
    }
    overlaps
}

/// Priority-ordered vertical overlap resolver.
#[derive(Debug, Clone, Default)]
pub struct OverlapResolver {
    config: ResolverConfig,
}

impl OverlapResolver {
    /// Create a resolver. Negative or non-finite distances are clamped to 0,
    /// so the fallback stack is always separated by at least the spacing.
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config: config.clamped(),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `candidates` around the fixed `anchor`.
    pub fn resolve(&self, anchor: Rect, candidates: &[LayoutComponent]) -> ResolvedLayout {
        let mut components = candidates.to_vec();
        components.sort_by(|a, b| a.priority.cmp(&b.priority).then(a.id.cmp(&b.id)));

        tracing::debug!(
            components = components.len(),
            spacing = self.config.min_spacing,
            max_iterations = self.config.max_iterations,
            "resolving layout"
        );

        let mut passes = 0;
        let mut settled = false;
        while passes < self.config.max_iterations {
            passes += 1;
            if self.relax_pass(anchor, &mut components) == 0 {
                settled = true;
                break;
            }
        }

        let mut unresolved = None;
        if !settled {
            let rects: Vec<Rect> = components.iter().map(LayoutComponent::rect).collect();
            let overlaps = count_overlaps(anchor, &rects, self.config.min_spacing);
            if overlaps > 0 {
                tracing::warn!(passes, overlaps, "layout unresolved, stacking components");
                self.stack_fallback(anchor, &mut components);
                unresolved = Some(LayoutUnresolved { passes, overlaps });
            }
        }

        tracing::debug!(passes, fallback = unresolved.is_some(), "layout resolved");

        let placements = components
            .iter()
            .map(|c| Placement {
                id: c.id,
                center: c.center,
                offset: c.center.offset_from(anchor.center),
                size: c.size,
                priority: c.priority,
            })
            .collect();

        ResolvedLayout {
            anchor,
            placements,
            passes,
            unresolved,
        }
    }

    /// One pass over all pairs. Returns the number of moves made.
    fn relax_pass(&self, anchor: Rect, components: &mut [LayoutComponent]) -> usize {
        let spacing = self.config.min_spacing;
        let mut moves = 0;

        for component in components.iter_mut() {
            if anchor.overlaps_with_spacing(&component.rect(), spacing) {
                self.push_off_anchor(anchor, component);
                moves += 1;
            }
        }

        for i in 0..components.len() {
            for j in (i + 1)..components.len() {
                let fixed = components[i].rect();
                if fixed.overlaps_with_spacing(&components[j].rect(), spacing) {
                    // Sorted ascending, so `j` has the larger (or equal) priority value.
                    let y = fixed.top() - spacing - components[j].size.height / 2.0;
                    components[j].center.y = y;
                    tracing::trace!(
                        mover = %components[j].id,
                        over = %components[i].id,
                        y,
                        "moved above"
                    );
                    moves += 1;
                }
            }
        }

        moves
    }

    fn push_off_anchor(&self, anchor: Rect, component: &mut LayoutComponent) {
        let clearance = self.config.min_spacing + self.config.clearance_buffer;
        let half = component.size.height / 2.0;
        component.center.y = if component.center.y <= anchor.center.y {
            anchor.top() - clearance - half
        } else {
            anchor.bottom() + clearance + half
        };
        tracing::trace!(mover = %component.id, y = component.center.y, "pushed off anchor");
    }

    /// Stack every component above the anchor, keeping their current
    /// top-to-bottom order.
    fn stack_fallback(&self, anchor: Rect, components: &mut [LayoutComponent]) {
        let gap = self.config.min_spacing + self.config.clearance_buffer;
        let mut order: Vec<usize> = (0..components.len()).collect();
        order.sort_by(|&a, &b| {
            let (ca, cb) = (&components[a], &components[b]);
            ca.center
                .y
                .total_cmp(&cb.center.y)
                .then(ca.priority.cmp(&cb.priority))
                .then(ca.id.cmp(&cb.id))
        });

        // Fill upward from the anchor: the lowest component goes nearest.
        let mut bottom = anchor.top() - gap;
        for &idx in order.iter().rev() {
            let c = &mut components[idx];
            c.center.y = bottom - c.size.height / 2.0;
            bottom = c.center.y - c.size.height / 2.0 - gap;
        }
    }
}

/// Order placements by distance from the anchor center, nearest first.
pub(crate) fn by_distance(anchor: Point) -> impl Fn(&Placement, &Placement) -> Ordering {
    move |a, b| {
        let da = (a.center.y - anchor.y).abs();
        let db = (b.center.y - anchor.y).abs();
        da.total_cmp(&db)
    }
}
