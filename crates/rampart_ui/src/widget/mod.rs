//! Unit inspection widgets.
//!
//! The inspection panel is split in three: a state machine that owns the
//! selection and the static-info cache, the view-model it produces, and a
//! projection that turns the view-model into render commands.

mod info_cache;
mod panel_view;
mod projection;
mod unit_panel;

pub use info_cache::StaticInfoCache;
pub use panel_view::{ActionAffordance, Bar, Ownership, PanelView, Portrait, StatRow, UnitCategory};
pub use projection::{CommandPanelProjection, PanelProjection};
pub use unit_panel::{Selection, SyncOutcome, UnitInfoPanel};
