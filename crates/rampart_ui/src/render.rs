//! Frame assembly.
//!
//! Everything drawable is reduced to toolkit-neutral [`RenderCommand`]s,
//! grouped by [`Layer`]. Whatever owns the canvas walks the batches in order
//! and draws them; nothing in this crate touches pixels.
//!
//! ```text
//!   begin_frame ─► set_layer(Effects) ─► push.. ─► set_layer(Overlay) ─► push.. ─► end_frame
//!                                                                                   │
//!                                                  [UIBatch(Effects), UIBatch(Overlay)]
//! ```

use rampart_shared::Vec2;
use tracing::warn;

use crate::layout::Rect;
use crate::style::Color;

/// One primitive draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Area to fill.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Rectangle outline.
    RectOutline {
        /// Area to outline.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f32,
    },
    /// Filled circle: projectiles, trails, circle portraits.
    Circle {
        /// Center.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Circle outline: melee impact rings.
    Ring {
        /// Center.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Stroke width.
        width: f32,
        /// Stroke color.
        color: Color,
    },
    /// Filled triangle: triangle portraits.
    Triangle {
        /// Apex, then base corners.
        points: [Vec2; 3],
        /// Fill color.
        color: Color,
    },
    /// Single line of text, top-left anchored.
    Text {
        /// Content.
        text: String,
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
    },
    /// Restrict following commands to an area.
    PushClip {
        /// Effective clip, already intersected with any enclosing clip.
        bounds: Rect,
    },
    /// Undo the latest [`RenderCommand::PushClip`].
    PopClip,
}

/// Draw order. Later layers draw on top of earlier ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Combat effects over the board.
    #[default]
    Effects,
    /// Panels and other screen-space UI.
    Overlay,
}

impl Layer {
    /// Every layer, bottom to top.
    pub const ALL: [Self; 2] = [Self::Effects, Self::Overlay];

    const fn index(self) -> usize {
        match self {
            Self::Effects => 0,
            Self::Overlay => 1,
        }
    }
}

/// The commands of one layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UIBatch {
    /// Layer the commands belong to.
    pub layer: Layer,
    /// Commands in draw order.
    pub commands: Vec<RenderCommand>,
}

/// Collects one frame of commands.
#[derive(Debug)]
pub struct UIRenderer {
    /// Commands per layer, bottom to top.
    layers: [Vec<RenderCommand>; 2],
    /// Layer new commands go to.
    current: Layer,
    /// Open clips, innermost last.
    clip_stack: Vec<Rect>,
    /// Output of the last `end_frame`.
    batches: Vec<UIBatch>,
}

impl UIRenderer {
    /// Creates an empty renderer drawing to [`Layer::Effects`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            layers: [Vec::with_capacity(256), Vec::with_capacity(64)],
            current: Layer::Effects,
            clip_stack: Vec::with_capacity(8),
            batches: Vec::with_capacity(Layer::ALL.len()),
        }
    }

    /// Discards everything and starts over on [`Layer::Effects`].
    pub fn begin_frame(&mut self) {
        for layer in &mut self.layers {
            layer.clear();
        }
        self.current = Layer::Effects;
        self.clip_stack.clear();
        self.batches.clear();
    }

    /// Directs following commands to `layer`.
    ///
    /// Clips never span layers: any clip left open is closed first.
    pub fn set_layer(&mut self, layer: Layer) {
        if layer != self.current {
            self.close_clips();
            self.current = layer;
        }
    }

    /// Layer new commands go to.
    #[must_use]
    pub const fn layer(&self) -> Layer {
        self.current
    }

    /// Adds a command to the current layer.
    pub fn push(&mut self, command: RenderCommand) {
        self.layers[self.current.index()].push(command);
    }

    /// Adds commands to the current layer.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        self.layers[self.current.index()].extend(commands);
    }

    /// Opens a clip, narrowed to the enclosing clip if there is one.
    pub fn push_clip(&mut self, bounds: Rect) {
        let effective = match self.clip_stack.last() {
            Some(outer) => outer.intersection(&bounds).unwrap_or(Rect::ZERO),
            None => bounds,
        };
        self.clip_stack.push(effective);
        self.push(RenderCommand::PushClip { bounds: effective });
    }

    /// Closes the innermost clip. Does nothing when none is open.
    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_some() {
            self.push(RenderCommand::PopClip);
        }
    }

    /// Innermost open clip.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Finishes the frame: one batch per non-empty layer, bottom to top.
    pub fn end_frame(&mut self) -> &[UIBatch] {
        self.close_clips();

        self.batches.clear();
        for layer in Layer::ALL {
            let commands = std::mem::take(&mut self.layers[layer.index()]);
            if !commands.is_empty() {
                self.batches.push(UIBatch { layer, commands });
            }
        }
        &self.batches
    }

    /// Commands queued this frame, across all layers.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Commands queued this frame on the current layer.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.layers[self.current.index()]
    }

    fn close_clips(&mut self) {
        if !self.clip_stack.is_empty() {
            warn!(open = self.clip_stack.len(), "Closing unbalanced clips");
        }
        while self.clip_stack.pop().is_some() {
            self.push(RenderCommand::PopClip);
        }
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}
