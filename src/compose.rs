//! One render request: encode a number in every enabled mode, size each
//! representation, and resolve their positions around the main numeral.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::geometry::{Point, Rect, Size};
use crate::glyph::GlyphSequence;
use crate::layout::{
    LayoutComponent, LayoutUnresolved, OverlapResolver, Placement, ResolvedLayout, by_distance,
    count_overlaps,
};
use crate::mode::{ModeSet, NumeralMode};
use crate::number::Number;
use crate::quantity::QuantityLayout;

/// What to draw for one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ModeContent {
    Glyphs { sequence: GlyphSequence },
    Quantity { layout: QuantityLayout },
}

/// One mode with its resolved position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedMode {
    pub mode: NumeralMode,
    pub content: ModeContent,
    pub center: Point,
    /// `center` relative to the anchor center.
    pub offset: Point,
    pub size: Size,
}

/// Everything the drawing backend needs for one number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub number: Number,
    /// The main numeral's box. Never moved.
    pub anchor: Rect,
    pub modes: BTreeMap<NumeralMode, RenderedMode>,
    pub passes: u32,
    pub unresolved: Option<LayoutUnresolved>,
}

impl RenderPlan {
    pub fn get(&self, mode: NumeralMode) -> Option<&RenderedMode> {
        self.modes.get(&mode)
    }

    /// Modes ordered by vertical distance from the anchor, nearest first.
    pub fn nearest_first(&self) -> Vec<&RenderedMode> {
        let mut placements: Vec<_> = self
            .modes
            .values()
            .map(|m| Placement {
                id: m.mode,
                center: m.center,
                offset: m.offset,
                size: m.size,
                priority: m.mode.priority(),
            })
            .collect();
        placements.sort_by(by_distance(self.anchor.center));
        placements
            .iter()
            .filter_map(|p| self.modes.get(&p.id))
            .collect()
    }

    /// Whether every pair of boxes, anchor included, is `spacing` apart.
    pub fn is_overlap_free(&self, spacing: f64) -> bool {
        let rects: Vec<Rect> = self
            .modes
            .values()
            .map(|m| Rect::new(m.center, m.size))
            .collect();
        count_overlaps(self.anchor, &rects, spacing) == 0
    }
}

/// Render `number` in every mode of `modes` around `anchor`.
///
/// Seeds are stacked above the anchor one `slot_pitch` apart in stacking
/// order, counting only enabled modes, then handed to the overlap resolver.
/// `viewport` bounds the width of the quantity visualization.
pub fn render_number(
    number: Number,
    modes: &ModeSet,
    anchor: Point,
    viewport: Size,
    config: &RenderConfig,
) -> RenderPlan {
    let anchor_rect = Rect::new(anchor, config.metrics.main_numeral(number));

    let mut contents: BTreeMap<NumeralMode, (ModeContent, Size)> = BTreeMap::new();
    let mut components = Vec::with_capacity(modes.len());
    for (rank, &mode) in modes.iter().enumerate() {
        let (content, size) = match mode.system() {
            Some(system) => {
                let sequence = system.encode(number);
                let size = config.metrics.sequence(&sequence);
                (ModeContent::Glyphs { sequence }, size)
            }
            None => {
                let layout = QuantityLayout::for_number(
                    number,
                    anchor,
                    config.metrics.object_icon,
                    viewport.width,
                    &config.quantity,
                );
                let size = layout.size();
                (ModeContent::Quantity { layout }, size)
            }
        };

        let seed = Point::new(
            anchor.x,
            anchor_rect.top() - config.slot_pitch * (rank + 1) as f64,
        );
        components.push(LayoutComponent::new(mode, seed, size, mode.priority()));
        contents.insert(mode, (content, size));
    }

    tracing::debug!(
        number = number.get(),
        modes = components.len(),
        anchor_x = anchor.x,
        anchor_y = anchor.y,
        "rendering number"
    );

    let resolver = OverlapResolver::new(config.resolver.clone());
    let ResolvedLayout {
        anchor: anchor_rect,
        placements,
        passes,
        unresolved,
    } = resolver.resolve(anchor_rect, &components);

    let modes = placements
        .into_iter()
        .filter_map(|p| {
            let (content, size) = contents.remove(&p.id)?;
            let content = match content {
                ModeContent::Quantity { layout } => ModeContent::Quantity {
                    layout: layout.moved_to(p.center),
                },
                glyphs => glyphs,
            };
            Some((
                p.id,
                RenderedMode {
                    mode: p.id,
                    content,
                    center: p.center,
                    offset: p.offset,
                    size,
                },
            ))
        })
        .collect();

    RenderPlan {
        number,
        anchor: anchor_rect,
        modes,
        passes,
        unresolved,
    }
}
