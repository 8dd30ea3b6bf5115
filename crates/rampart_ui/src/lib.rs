//! # RAMPART UI
//!
//! Client-side presentation state for the Rampart board: transient combat
//! effects and the unit inspection panel.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      UI PIPELINE                         │
//! ├─────────────────────────────────────────────────────────┤
//! │  Combat events ─► AnimationScheduler ─► EffectDirective  │
//! │  Snapshots     ─► UnitInfoPanel      ─► PanelView        │
//! │  Detail info   ─┘        │                    │          │
//! │                   StaticInfoCache     PanelProjection    │
//! │                                               ↓          │
//! │                     UIRenderer ◄──── RenderCommand       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here draws pixels or talks to the network. Effects expire on
//! an injected [`Clock`], never on frame count.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod clock;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use animation::{AnimationScheduler, EffectDirective, EffectKind, EffectStyle, VisualEffect};
pub use clock::{Clock, ManualClock, Millis, MonotonicClock};
pub use layout::Rect;
pub use render::{Layer, RenderCommand, UIBatch, UIRenderer};
pub use style::{Color, Palette};
pub use widget::{
    CommandPanelProjection, Ownership, PanelProjection, PanelView, Selection, StaticInfoCache,
    SyncOutcome, UnitCategory, UnitInfoPanel,
};
