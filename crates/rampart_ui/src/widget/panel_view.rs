//! Inspection panel view-model.
//!
//! Plain data. The state machine writes it, projections read it.

use std::fmt;

use rampart_shared::{EntityId, PlayerId, Shape, UnitSnapshot, WorkerState};

/// What kind of unit is selected, from the viewer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    /// Wave enemy
    Enemy,
    /// Player worker
    Worker,
    /// Player tower
    Tower,
}

impl UnitCategory {
    /// Classifies a unit. Enemy wins over worker.
    #[must_use]
    pub const fn of(unit: &UnitSnapshot) -> Self {
        if unit.is_enemy {
            Self::Enemy
        } else if unit.is_worker {
            Self::Worker
        } else {
            Self::Tower
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Enemy => "Enemy",
            Self::Worker => "Worker",
            Self::Tower => "Tower",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Relationship between a unit and the viewing player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// Owned by the viewer
    Own,
    /// Owned by another player
    Opponent,
    /// Wave enemy
    Enemy,
}

impl Ownership {
    /// Classifies a unit. An unknown viewer owns nothing.
    #[must_use]
    pub fn of(unit: &UnitSnapshot, viewer: Option<PlayerId>) -> Self {
        if unit.is_enemy {
            Self::Enemy
        } else if viewer == Some(unit.owner_id) {
            Self::Own
        } else {
            Self::Opponent
        }
    }
}

/// Portrait: the unit's shape in its ownership color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portrait {
    /// Shape to draw
    pub shape: Shape,
    /// Color style
    pub ownership: Ownership,
}

/// A current/max gauge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bar {
    /// Current value
    pub current: f32,
    /// Maximum value
    pub max: f32,
}

impl Bar {
    /// Creates a gauge.
    #[must_use]
    pub const fn new(current: f32, max: f32) -> Self {
        Self { current, max }
    }

    /// Fill ratio clamped to 0-1. An empty maximum or a non-finite value
    /// reads as 0.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        if self.current.is_finite() && self.max.is_finite() && self.max > 0.0 {
            (self.current / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// `"current/max"`, both rounded.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.current.round(), self.max.round())
    }
}

/// One descriptive attribute row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    /// Attribute name
    pub label: &'static str,
    /// Formatted value
    pub value: String,
}

impl StatRow {
    /// Creates a row.
    #[must_use]
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Visibility and enabled state of a panel action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionAffordance {
    /// The action is offered at all
    pub visible: bool,
    /// The action can be taken right now
    pub enabled: bool,
}

impl ActionAffordance {
    /// Not offered.
    pub const HIDDEN: Self = Self {
        visible: false,
        enabled: false,
    };

    /// True when the action is offered and can be taken.
    #[must_use]
    pub const fn is_available(self) -> bool {
        self.visible && self.enabled
    }
}

/// Everything the inspection panel shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelView {
    /// Panel is shown
    pub visible: bool,
    /// Unit being shown
    pub entity_id: Option<EntityId>,
    /// `"<Shape> <Category>"`
    pub title: String,
    /// Category of the unit
    pub category: Option<UnitCategory>,
    /// Portrait
    pub portrait: Option<Portrait>,
    /// Health gauge
    pub health: Bar,
    /// Mana gauge; `None` hides the row
    pub mana: Option<Bar>,
    /// Worker activity; `None` hides the row
    pub worker_state: Option<WorkerState>,
    /// Descriptive attribute rows, in display order
    pub stats: Vec<StatRow>,
    /// Boss marker
    pub is_boss: bool,
    /// Gold refunded on sell, once known
    pub sell_value: Option<u32>,
    /// Sell button
    pub sell_action: ActionAffordance,
}

impl PanelView {
    /// The panel with nothing selected.
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Health fill ratio.
    #[must_use]
    pub fn health_ratio(&self) -> f32 {
        self.health.ratio()
    }

    /// Mana fill ratio, if the row is visible.
    #[must_use]
    pub fn mana_ratio(&self) -> Option<f32> {
        self.mana.map(|bar| bar.ratio())
    }

    /// True when the mana row is shown.
    #[must_use]
    pub fn mana_visible(&self) -> bool {
        self.mana.is_some()
    }

    /// True when the worker activity row is shown.
    #[must_use]
    pub fn worker_state_visible(&self) -> bool {
        self.worker_state.is_some()
    }

    /// Sell value formatted as gold, e.g. `"75g"`.
    #[must_use]
    pub fn sell_value_label(&self) -> Option<String> {
        self.sell_value.map(|gold| format!("{gold}g"))
    }
}
