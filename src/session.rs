use tracing::debug;

use crate::block::{create_block_with, Block};
use crate::collection;
use crate::config::BrandConfig;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A new block is being dragged in from the palette.
    Palette { block_type: String },
    /// An existing block is being moved.
    Reordering { id: String, from: usize },
}

/// Selection, inline editing and drag-and-drop. The session never owns the
/// block sequence: operations that change it take the current one and
/// return the next.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    pub selected_id: Option<String>,
    pub editing_id: Option<String>,
    pub drag: DragState,
    /// Gap index (`0..=len`) the pointer is currently over.
    pub drag_over: Option<usize>,
    brand: BrandConfig,
}

impl EditorSession {
    pub fn new(brand: BrandConfig) -> Self {
        Self {
            brand,
            ..Self::default()
        }
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.selected_id = id.map(str::to_string);
    }

    /// Enter inline editing; the block is selected too.
    pub fn start_editing(&mut self, id: &str) {
        self.selected_id = Some(id.to_string());
        self.editing_id = Some(id.to_string());
    }

    pub fn stop_editing(&mut self) {
        self.editing_id = None;
    }

    pub fn begin_palette_drag(&mut self, block_type: &str) {
        self.drag = DragState::Palette {
            block_type: block_type.to_string(),
        };
        self.drag_over = None;
    }

    /// Start moving block `id`. Ignored when `id` is not in `seq`.
    pub fn begin_reorder(&mut self, seq: &[Block], id: &str) {
        match collection::position(seq, id) {
            Some(from) => {
                self.drag = DragState::Reordering {
                    id: id.to_string(),
                    from,
                };
                self.drag_over = None;
            }
            None => debug!(id, "begin_reorder: no such block"),
        }
    }

    pub fn hover(&mut self, slot: Option<usize>) {
        if self.drag != DragState::Idle {
            self.drag_over = slot;
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
        self.drag_over = None;
    }

    /// Complete the current drag at the hovered slot (end of the sequence when
    /// nothing is hovered) and return the resulting sequence.
    ///
    /// A palette drop inserts the new block(s) and selects the first of them.
    /// A reorder drop applies [`collection::drop_block`]; if the dragged block
    /// has since moved, its current position is used.
    pub fn finish_drop(&mut self, seq: &[Block]) -> Vec<Block> {
        let slot = self.drag_over.unwrap_or(seq.len());
        let drag = std::mem::take(&mut self.drag);
        self.drag_over = None;

        match drag {
            DragState::Idle => seq.to_vec(),
            DragState::Palette { block_type } => {
                let created = create_block_with(&block_type, &self.brand);
                self.selected_id = Some(created.first().id.clone());
                collection::insert(seq, slot, created)
            }
            DragState::Reordering { id, from } => {
                let from = match seq.get(from) {
                    Some(block) if block.id == id => from,
                    _ => match collection::position(seq, &id) {
                        Some(current) => current,
                        None => {
                            debug!(id = %id, "finish_drop: dragged block is gone");
                            return seq.to_vec();
                        }
                    },
                };
                collection::drop_block(seq, from, slot)
            }
        }
    }

    /// Remove block `id`, clearing selection and editing that pointed at it.
    pub fn remove_block(&mut self, seq: &[Block], id: &str) -> Vec<Block> {
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        if self.editing_id.as_deref() == Some(id) {
            self.editing_id = None;
        }
        collection::remove(seq, id)
    }

    /// Duplicate block `id` and select the copy.
    pub fn duplicate_block(&mut self, seq: &[Block], id: &str) -> Vec<Block> {
        let Some(index) = collection::position(seq, id) else {
            debug!(id, "duplicate_block: no such block");
            return seq.to_vec();
        };
        let copy = collection::copy_of(&seq[index]);
        self.selected_id = Some(copy.id.clone());
        collection::insert(seq, index + 1, [copy])
    }
}
