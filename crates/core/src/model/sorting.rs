use super::types::Block;

/// Sorts blocks into document order: ascending `(grid_row, grid_column)`,
/// with auto-placed blocks (no explicit coordinates) after all pinned ones
/// in their original model order.
///
/// CSS grid placement is independent of source order, so this only affects
/// the DOM sequence; it keeps a non-JS or assistive-technology linearization
/// of the page in the intended visual reading order. The sort is stable.
pub fn sort_blocks_for_document(blocks: &[Block]) -> Vec<&Block> {
    let mut sorted: Vec<&Block> = blocks.iter().collect();
    sorted.sort_by_key(|block| {
        (
            block.grid_row.unwrap_or(u32::MAX),
            block.grid_column.unwrap_or(u32::MAX),
        )
    });
    sorted
}
