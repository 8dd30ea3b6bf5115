//! Network protocol types shared between client and server.
//!
//! Everything travels as JSON over the game WebSocket. Server messages are
//! adjacently tagged as `{"type": ..., "data": ...}`, client messages as
//! `{"action": ..., "payload": ...}`. Both sides must agree on these
//! definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Identity of a unit. Stable across snapshots for the same logical unit.
pub type EntityId = u64;

/// Identity of a player. Wave enemies are owned by a negative sentinel id.
pub type PlayerId = i64;

/// Visual shape of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Square
    Square,
    /// Circle
    Circle,
    /// Triangle
    Triangle,
}

impl Shape {
    /// Display name, as the server spells it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Square => "Square",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attack damage category.
///
/// Unrecognised categories decode as [`DamageType::Unknown`] instead of
/// failing the whole message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    /// Plain physical hit (melee)
    PhysicalBasic,
    /// Piercing physical hit (arrows)
    PhysicalPierce,
    /// Magical fire (fireballs)
    FireMagical,
    /// Anything the client does not know about
    #[serde(other)]
    Unknown,
}

impl DamageType {
    /// Returns true for categories delivered by a travelling projectile.
    #[must_use]
    pub const fn is_ranged(self) -> bool {
        matches!(self, Self::FireMagical | Self::PhysicalPierce)
    }

    /// Display name, as the server spells it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PhysicalBasic => "PhysicalBasic",
            Self::PhysicalPierce => "PhysicalPierce",
            Self::FireMagical => "FireMagical",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Round phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players place and sell towers.
    #[default]
    Build,
    /// A wave is running.
    Combat,
    /// A phase this client does not know about.
    #[serde(other)]
    Other,
}

impl GamePhase {
    /// Returns true while towers may be sold.
    #[must_use]
    pub const fn allows_selling(self) -> bool {
        matches!(self, Self::Build)
    }
}

/// What a worker is doing right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerState {
    /// Walking to an ore vein
    MovingToVein,
    /// Mining
    Mining,
    /// Carrying ore back to the cart
    MovingToCart,
}

impl WorkerState {
    /// Label shown in the inspection panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MovingToVein => "MovingToVein",
            Self::Mining => "Mining",
            Self::MovingToCart => "MovingToCart",
        }
    }
}

/// Live, frequently changing attributes of one unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    /// Unit identity
    pub id: EntityId,
    /// Visual shape
    pub shape: Shape,
    /// Board X (pixels, unit center)
    pub x: f32,
    /// Board Y (pixels, unit center)
    pub y: f32,
    /// Owning player
    pub owner_id: PlayerId,
    /// Wave enemy rather than a player unit
    pub is_enemy: bool,
    /// Current health
    pub current_hp: f32,
    /// Maximum health
    pub max_hp: f32,
    /// Worker rather than a tower
    #[serde(default)]
    pub is_worker: bool,
    /// Current mana, if the unit has a mana pool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_mana: Option<f32>,
    /// Maximum mana, if the unit has a mana pool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_mana: Option<f32>,
    /// Worker activity, workers only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_state: Option<WorkerState>,
}

impl UnitSnapshot {
    /// Board position of the unit center.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// A player in the current lobby.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Player identity
    pub id: PlayerId,
    /// Display name
    pub username: String,
    /// Gold available for building
    pub gold: u32,
}

/// Full world state. `units` replaces the previous list; it is not a delta.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateBroadcast {
    /// Every live unit
    pub units: Vec<UnitSnapshot>,
    /// Players in the lobby
    #[serde(default)]
    pub players: Vec<Player>,
    /// Current round phase
    pub phase: GamePhase,
    /// Seconds left in the phase (may dip below zero on the wire)
    pub phase_timer: f32,
}

/// One attack that just happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatEvent {
    /// Attacking unit
    pub attacker_id: EntityId,
    /// Attacked unit
    pub target_id: EntityId,
    /// Damage category of the attack
    pub attack_type: DamageType,
    /// Where the attack starts
    pub start_pos: Vec2,
    /// Where the attack lands
    pub end_pos: Vec2,
}

/// Descriptive attributes of a unit. Fields that do not apply to the unit's
/// kind are absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitStaticInfo {
    /// Unit identity
    pub entity_id: EntityId,
    /// Damage per hit
    #[serde(default)]
    pub attack_damage: Option<f32>,
    /// Attacks per second
    #[serde(default)]
    pub attack_rate: Option<f32>,
    /// Attack range in pixels
    #[serde(default)]
    pub attack_range: Option<f32>,
    /// Damage category
    #[serde(default)]
    pub damage_type: Option<DamageType>,
    /// Armor
    #[serde(default)]
    pub armor: Option<f32>,
    /// Boss wave unit
    #[serde(default)]
    pub is_boss: bool,
    /// Gold refunded on sell
    #[serde(default)]
    pub sell_value: Option<u32>,
}

impl UnitStaticInfo {
    /// Creates an entry with every optional attribute absent.
    #[must_use]
    pub const fn empty(entity_id: EntityId) -> Self {
        Self {
            entity_id,
            attack_damage: None,
            attack_rate: None,
            attack_range: None,
            damage_type: None,
            armor: None,
            is_boss: false,
            sell_value: None,
        }
    }
}

/// A joinable lobby.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbyInfo {
    /// Lobby index
    pub id: usize,
    /// Players currently inside
    pub player_count: usize,
}

/// Messages the server pushes to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    /// Lobby list, sent while not in a game
    LobbyStatus(Vec<LobbyInfo>),
    /// World broadcast
    GameState(GameStateBroadcast),
    /// Attacks since the last batch
    CombatEvents(Vec<CombatEvent>),
    /// Reply to [`ClientMessage::RequestUnitInfo`]
    UnitInfo(UnitStaticInfo),
    /// Identity assigned to this connection
    PlayerId(PlayerId),
    /// Human-readable rejection
    Error(String),
}

impl ServerMessage {
    /// Decodes one message from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not a known message.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Payload of [`ClientMessage::Sell`]: the grid cell holding the tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellMessage {
    /// Grid row
    pub row: u32,
    /// Grid column
    pub col: u32,
}

/// Payload of [`ClientMessage::Place`]: what to build and where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceMessage {
    /// Tower shape to build
    pub shape: Shape,
    /// Grid row
    pub row: u32,
    /// Grid column
    pub col: u32,
}

/// Payload of [`ClientMessage::HireWorker`]. Encodes as `{}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireWorkerRequest {}

/// Payload of [`ClientMessage::RequestUnitInfo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInfoRequest {
    /// Unit to describe
    pub entity_id: EntityId,
}

/// Messages the client sends to the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Join the lobby with this index
    JoinLobby(usize),
    /// Build a tower in an empty cell
    Place(PlaceMessage),
    /// Sell the tower in this cell
    Sell(SellMessage),
    /// Hire one more worker
    HireWorker(HireWorkerRequest),
    /// Ask for a unit's descriptive attributes
    RequestUnitInfo(UnitInfoRequest),
    /// End the build phase early
    SkipToCombat,
    /// Leave the current lobby
    LeaveLobby,
}

impl ClientMessage {
    /// Encodes the message as JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
