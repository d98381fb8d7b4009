//! Grid placement, size tiers, and the responsive font-scale table.
//!
//! Everything here is a pure function of a block's spans so the preview and
//! export paths cannot drift apart: tier thresholds and font scales live in
//! one place and are never recomputed ad hoc at a call site.

use std::fmt::Write as _;

use crate::model::Block;

/// Column count of the desktop grid. Column spans are clamped to this.
pub const GRID_COLUMNS: u32 = 9;

/// Font-size ladder shared by every text role, smallest to largest.
const REM_LADDER: [&str; 8] = [
    "0.625rem", "0.75rem", "0.875rem", "1rem", "1.125rem", "1.25rem", "1.5rem", "1.75rem",
];

/// Coarse size bucket derived from a block's spans; drives font scale.
///
/// Totally ordered: `Xs < Sm < Md < Lg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeTier {
    Xs,
    Sm,
    Md,
    Lg,
}

impl SizeTier {
    /// Returns the class-name suffix for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeTier::Xs => "xs",
            SizeTier::Sm => "sm",
            SizeTier::Md => "md",
            SizeTier::Lg => "lg",
        }
    }

    /// All tiers in ascending order.
    pub fn all() -> [SizeTier; 4] {
        [SizeTier::Xs, SizeTier::Sm, SizeTier::Md, SizeTier::Lg]
    }
}

/// Computes the size tier from a block's spans.
///
/// Area thresholds: ≤ 4 ⇒ Xs, ≤ 8 ⇒ Sm, ≤ 12 ⇒ Md, else Lg. The smaller
/// dimension caps the result (min ≤ 1 ⇒ Xs, ≤ 2 ⇒ Sm, ≤ 3 ⇒ Md), so a
/// 1×9 strip stays Xs even though its area says otherwise.
pub fn size_tier(col_span: u32, row_span: u32) -> SizeTier {
    let area = col_span * row_span;
    let by_area = match area {
        0..=4 => SizeTier::Xs,
        5..=8 => SizeTier::Sm,
        9..=12 => SizeTier::Md,
        _ => SizeTier::Lg,
    };
    let cap = match col_span.min(row_span) {
        0 | 1 => SizeTier::Xs,
        2 => SizeTier::Sm,
        3 => SizeTier::Md,
        _ => SizeTier::Lg,
    };
    by_area.min(cap)
}

/// Span-derived shape predicates used by the feed renderer to pick
/// thumbnail count and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockShape {
    pub col_span: u32,
    pub row_span: u32,
}

impl BlockShape {
    /// Reads the shape of a block.
    pub fn of(block: &Block) -> Self {
        Self {
            col_span: block.col_span,
            row_span: block.row_span,
        }
    }

    pub fn is_small(&self) -> bool {
        self.col_span <= 2 && self.row_span <= 2
    }

    pub fn is_wide(&self) -> bool {
        self.col_span > self.row_span
    }

    pub fn is_tall(&self) -> bool {
        self.row_span > self.col_span
    }

    pub fn is_large(&self) -> bool {
        self.col_span >= 3 && self.row_span >= 3
    }
}

/// Emits the CSS grid placement declarations for a block.
///
/// Explicit coordinates produce `start / span n`; otherwise only a span is
/// emitted and dense auto-flow places the block. The column span is clamped
/// to [`GRID_COLUMNS`].
pub fn grid_placement(block: &Block) -> String {
    let col_span = block.col_span.clamp(1, GRID_COLUMNS);
    let row_span = block.row_span.max(1);

    let mut css = String::new();
    match block.grid_column {
        Some(start) => {
            let _ = write!(css, "grid-column: {start} / span {col_span};");
        }
        None => {
            let _ = write!(css, "grid-column: span {col_span};");
        }
    }
    match block.grid_row {
        Some(start) => {
            let _ = write!(css, " grid-row: {start} / span {row_span};");
        }
        None => {
            let _ = write!(css, " grid-row: span {row_span};");
        }
    }
    if let Some(z_index) = block.z_index {
        let _ = write!(css, " z-index: {z_index};");
    }
    css
}

/// Corner rounding as a step function of the smaller span: tiny blocks get
/// nearly-square corners, large blocks more rounding.
pub fn border_radius(block: &Block) -> &'static str {
    match block.col_span.min(block.row_span) {
        0 | 1 => "0.75rem",
        2 => "1rem",
        3 => "1.25rem",
        _ => "1.5rem",
    }
}

/// Visual text roles with tier-scaled font sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Subtitle,
    Body,
    OverlayTitle,
    OverlaySubtitle,
}

impl TextRole {
    /// Returns the class-name segment for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextRole::Title => "title",
            TextRole::Subtitle => "subtitle",
            TextRole::Body => "body",
            TextRole::OverlayTitle => "overlay-title",
            TextRole::OverlaySubtitle => "overlay-subtitle",
        }
    }

    /// All roles, in stylesheet emission order.
    pub fn all() -> [TextRole; 5] {
        [
            TextRole::Title,
            TextRole::Subtitle,
            TextRole::Body,
            TextRole::OverlayTitle,
            TextRole::OverlaySubtitle,
        ]
    }
}

/// Ladder indices per role and tier at the (base, tablet, desktop)
/// breakpoints. Strictly increasing in tier at every breakpoint, which is
/// what makes the tier ordering observable in rendered font sizes.
fn scale_steps(role: TextRole, tier: SizeTier) -> (usize, usize, usize) {
    let base = match role {
        TextRole::Subtitle => 0,
        TextRole::Body | TextRole::OverlaySubtitle => 1,
        TextRole::Title => 2,
        TextRole::OverlayTitle => 3,
    };
    let step = match tier {
        SizeTier::Xs => 0,
        SizeTier::Sm => 1,
        SizeTier::Md => 2,
        SizeTier::Lg => 3,
    };
    (base + step, base + step + 1, base + step + 1)
}

/// Font sizes for a role/tier at the (base, tablet, desktop) breakpoints.
pub fn font_scale(role: TextRole, tier: SizeTier) -> (&'static str, &'static str, &'static str) {
    let (base, tablet, desktop) = scale_steps(role, tier);
    (REM_LADDER[base], REM_LADDER[tablet], REM_LADDER[desktop])
}

/// Returns the stylesheet class for a role at a tier, e.g. `txt-title-md`.
pub fn text_class(role: TextRole, tier: SizeTier) -> String {
    format!("txt-{}-{}", role.as_str(), tier.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    #[test]
    fn test_size_tier_area_thresholds() {
        assert_eq!(size_tier(2, 2), SizeTier::Xs);
        assert_eq!(size_tier(2, 4), SizeTier::Sm);
        assert_eq!(size_tier(3, 4), SizeTier::Md);
        assert_eq!(size_tier(4, 4), SizeTier::Lg);
    }

    #[test]
    fn test_size_tier_min_dimension_cap() {
        // A 1x9 strip has area 9 but stays Xs.
        assert_eq!(size_tier(1, 9), SizeTier::Xs);
        assert_eq!(size_tier(9, 1), SizeTier::Xs);
        // A 2x9 strip has area 18 but caps at Sm.
        assert_eq!(size_tier(2, 9), SizeTier::Sm);
        assert_eq!(size_tier(3, 9), SizeTier::Md);
    }

    #[test]
    fn test_size_tier_is_deterministic_and_ordered() {
        assert_eq!(size_tier(3, 2), size_tier(3, 2));
        assert!(SizeTier::Xs < SizeTier::Sm);
        assert!(SizeTier::Sm < SizeTier::Md);
        assert!(SizeTier::Md < SizeTier::Lg);
    }

    #[test]
    fn test_font_scale_strictly_increases_with_tier() {
        for role in TextRole::all() {
            let mut previous: Option<(usize, usize, usize)> = None;
            for tier in SizeTier::all() {
                let steps = scale_steps(role, tier);
                if let Some(prev) = previous {
                    assert!(steps.0 > prev.0, "{role:?} base scale not increasing");
                    assert!(steps.1 > prev.1, "{role:?} tablet scale not increasing");
                    assert!(steps.2 > prev.2, "{role:?} desktop scale not increasing");
                }
                previous = Some(steps);
            }
        }
    }

    #[test]
    fn test_grid_placement_explicit_and_auto() {
        let pinned = Block::spacer().with_span(2, 3).at(4, 1);
        assert_eq!(
            grid_placement(&pinned),
            "grid-column: 4 / span 2; grid-row: 1 / span 3;"
        );

        let auto = Block::spacer().with_span(2, 1);
        assert_eq!(grid_placement(&auto), "grid-column: span 2; grid-row: span 1;");
    }

    #[test]
    fn test_grid_placement_clamps_column_span() {
        let wide = Block::spacer().with_span(20, 1);
        assert_eq!(
            grid_placement(&wide),
            "grid-column: span 9; grid-row: span 1;"
        );
    }

    #[test]
    fn test_grid_placement_includes_z_index() {
        let raised = Block::spacer().with_span(1, 1).with_z_index(3);
        assert!(grid_placement(&raised).ends_with("z-index: 3;"));
    }

    #[test]
    fn test_border_radius_is_monotonic() {
        let radii: Vec<&str> = (1..=5)
            .map(|n| border_radius(&Block::spacer().with_span(n, n)))
            .collect();
        assert_eq!(radii, ["0.75rem", "1rem", "1.25rem", "1.5rem", "1.5rem"]);
    }

    #[test]
    fn test_block_shape_predicates() {
        let wide = BlockShape {
            col_span: 4,
            row_span: 2,
        };
        assert!(wide.is_wide());
        assert!(!wide.is_tall());
        assert!(!wide.is_large());

        let large = BlockShape {
            col_span: 3,
            row_span: 3,
        };
        assert!(large.is_large());
        assert!(!large.is_small());

        let small = BlockShape {
            col_span: 1,
            row_span: 2,
        };
        assert!(small.is_small());
        assert!(small.is_tall());
    }
}
