//! Unit inspection panel state machine.
//!
//! ```text
//!                select_unit
//!   Unselected ───────────────► Selected(id)
//!        ▲                          │  │
//!        │   clear_selection        │  │ select_unit (other id)
//!        ├──────────────────────────┘  └──────► Selected(other)
//!        │   sync: id absent (despawn)
//!        └──────────────────────────────
//! ```
//!
//! Two kinds of data feed the panel. Dynamic state (health, mana, worker
//! activity) comes with every broadcast and is refreshed in place. Static
//! attributes arrive once per unit through a detail response, are cached, and
//! only reach the panel if they still match the current selection.

use rampart_shared::{EntityId, GamePhase, PlayerId, UnitSnapshot, UnitStaticInfo};
use tracing::{debug, info};

use super::info_cache::StaticInfoCache;
use super::panel_view::{
    ActionAffordance, Bar, Ownership, PanelView, Portrait, StatRow, UnitCategory,
};

/// Selection state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected, panel hidden
    #[default]
    Unselected,
    /// A unit is selected
    Selected(EntityId),
}

impl Selection {
    /// Selected identity, if any.
    #[must_use]
    pub const fn entity_id(self) -> Option<EntityId> {
        match self {
            Self::Unselected => None,
            Self::Selected(id) => Some(id),
        }
    }
}

/// What a dynamic-state sync changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Cache entries dropped because their units left the broadcast
    pub evicted: Vec<EntityId>,
    /// The selected unit, if it despawned during this sync
    pub despawned: Option<EntityId>,
}

/// Selection, static-info cache and the view-model they produce.
#[derive(Debug, Clone, Default)]
pub struct UnitInfoPanel {
    selection: Selection,
    cache: StaticInfoCache,
    view: PanelView,
}

impl UnitInfoPanel {
    /// Creates a hidden panel with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Selected identity, if any.
    #[must_use]
    pub const fn selected_entity_id(&self) -> Option<EntityId> {
        self.selection.entity_id()
    }

    /// What the panel currently shows.
    #[must_use]
    pub const fn view(&self) -> &PanelView {
        &self.view
    }

    /// Read access to the static-info cache.
    #[must_use]
    pub const fn cache(&self) -> &StaticInfoCache {
        &self.cache
    }

    /// Selects `unit`, replacing any prior selection.
    ///
    /// Cached static attributes are shown immediately. Without a cache entry
    /// the stat rows stay empty until [`apply_static_info`](Self::apply_static_info).
    pub fn select_unit(&mut self, unit: &UnitSnapshot, viewer: Option<PlayerId>, phase: GamePhase) {
        let category = UnitCategory::of(unit);
        let ownership = Ownership::of(unit, viewer);

        self.selection = Selection::Selected(unit.id);
        self.view = PanelView {
            visible: true,
            entity_id: Some(unit.id),
            title: format!("{} {}", unit.shape, category),
            category: Some(category),
            portrait: Some(Portrait {
                shape: unit.shape,
                ownership,
            }),
            sell_action: ActionAffordance {
                visible: category == UnitCategory::Tower && ownership == Ownership::Own,
                enabled: phase.allows_selling(),
            },
            ..PanelView::hidden()
        };
        self.refresh_dynamic(unit);

        info!(
            entity_id = unit.id,
            title = %self.view.title,
            cached = self.cache.contains(unit.id),
            "Unit selected"
        );

        if let Some(cached) = self.cache.get(unit.id).cloned() {
            self.render_static(&cached);
        }
    }

    /// Reconciles the panel with a fresh broadcast.
    ///
    /// Drops cache entries for every unit missing from `units`. If the
    /// selected unit is missing the panel closes; otherwise its dynamic state
    /// and the sell gate are refreshed and static attributes are left alone.
    pub fn sync_dynamic_state(&mut self, units: &[UnitSnapshot], phase: GamePhase) -> SyncOutcome {
        let evicted = self.cache.retain_present(units.iter().map(|unit| unit.id));
        if !evicted.is_empty() {
            debug!(count = evicted.len(), "Evicted static info for despawned units");
        }

        let mut outcome = SyncOutcome {
            evicted,
            despawned: None,
        };

        let Selection::Selected(id) = self.selection else {
            return outcome;
        };

        match units.iter().find(|unit| unit.id == id) {
            Some(unit) => {
                self.refresh_dynamic(unit);
                if self.view.sell_action.visible {
                    self.view.sell_action.enabled = phase.allows_selling();
                }
            }
            None => {
                self.cache.evict(id);
                self.hide();
                info!(entity_id = id, "Selected unit despawned");
                outcome.despawned = Some(id);
            }
        }

        outcome
    }

    /// Stores a detail response and shows it if it matches the selection.
    ///
    /// Returns true when the panel was updated.
    pub fn apply_static_info(&mut self, info: UnitStaticInfo) -> bool {
        let id = info.entity_id;
        let current = self.selected_entity_id() == Some(id);

        if current {
            self.render_static(&info);
        } else {
            debug!(
                entity_id = id,
                selected = ?self.selected_entity_id(),
                "Cached stale unit info"
            );
        }

        self.cache.put(info);
        current
    }

    /// Closes the panel. Cached entries stay.
    pub fn clear_selection(&mut self) {
        if let Selection::Selected(id) = self.selection {
            debug!(entity_id = id, "Selection cleared");
        }
        self.hide();
    }

    /// Closes the panel and forgets every cached entry.
    ///
    /// Identities are only unique within one game, so nothing cached may
    /// outlive the session it was received in.
    pub fn reset(&mut self) {
        if !self.cache.is_empty() {
            debug!(count = self.cache.len(), "Dropped static info cache");
        }
        self.cache.clear();
        self.hide();
    }

    /// Identity a sell action would target, when selling is available.
    #[must_use]
    pub fn sell_target(&self) -> Option<EntityId> {
        self.selected_entity_id()
            .filter(|_| self.view.sell_action.is_available())
    }

    /// True when no static attributes are cached for `id`.
    #[must_use]
    pub fn needs_detail(&self, id: EntityId) -> bool {
        !self.cache.contains(id)
    }

    fn hide(&mut self) {
        self.selection = Selection::Unselected;
        self.view = PanelView::hidden();
    }

    fn refresh_dynamic(&mut self, unit: &UnitSnapshot) {
        self.view.health = Bar::new(unit.current_hp, unit.max_hp);
        self.view.mana = unit
            .max_mana
            .map(|max| Bar::new(unit.current_mana.unwrap_or(0.0), max));
        self.view.worker_state = if unit.is_worker {
            unit.worker_state
        } else {
            None
        };
    }

    fn render_static(&mut self, info: &UnitStaticInfo) {
        let mut stats = Vec::with_capacity(5);
        if let Some(damage) = info.attack_damage {
            stats.push(StatRow::new("Damage", damage.to_string()));
        }
        if let Some(rate) = info.attack_rate {
            stats.push(StatRow::new("Rate", format!("{rate:.2}/s")));
        }
        if let Some(range) = info.attack_range {
            stats.push(StatRow::new("Range", range.to_string()));
        }
        if let Some(damage_type) = info.damage_type {
            stats.push(StatRow::new("Type", damage_type.name()));
        }
        if let Some(armor) = info.armor {
            stats.push(StatRow::new("Armor", armor.to_string()));
        }

        self.view.stats = stats;
        self.view.is_boss = info.is_boss;
        if info.sell_value.is_some() {
            self.view.sell_value = info.sell_value;
        }
    }
}
