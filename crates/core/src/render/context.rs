use std::collections::HashMap;

use crate::layout::GRID_COLUMNS;

/// Which output surface a render is for.
///
/// Both modes share the same block markup; Export additionally emits the
/// `data-*` hydration attributes the runtime script reads, and the document
/// shell links external files instead of inlining them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Preview,
    Export,
}

/// Per-render inputs threaded through the block renderer.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub mode: RenderMode,
    /// Maps an original image reference (e.g. a `data:` URI) to the bundled
    /// relative path it was decoded to. Empty for previews.
    pub resolved_assets: HashMap<String, String>,
    pub grid_columns: u32,
}

impl RenderContext {
    /// Context for the live preview path: everything inline, no assets.
    pub fn preview() -> Self {
        Self {
            mode: RenderMode::Preview,
            resolved_assets: HashMap::new(),
            grid_columns: GRID_COLUMNS,
        }
    }

    /// Context for the export path with the decoded-asset path map.
    pub fn export(resolved_assets: HashMap<String, String>) -> Self {
        Self {
            mode: RenderMode::Export,
            resolved_assets,
            grid_columns: GRID_COLUMNS,
        }
    }

    pub fn is_export(&self) -> bool {
        self.mode == RenderMode::Export
    }

    /// Looks up the bundled path for an image reference, if it was decoded.
    pub fn resolve_asset(&self, reference: &str) -> Option<&str> {
        self.resolved_assets.get(reference).map(String::as_str)
    }
}
