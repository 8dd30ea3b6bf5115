//! # Rampart Shared
//!
//! Wire types used by both the game server and the client.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on UI or rendering code. If you need colors
//! or render commands, put them in `rampart_ui`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;
pub mod protocol;

pub use constants::{
    BOARD_WIDTH, GRID_SQUARE_SIZE, MELEE_DURATION_MS, PROJECTILE_DURATION_MS, UNIT_INSET,
};
pub use math::Vec2;
pub use protocol::{
    ClientMessage, CombatEvent, DamageType, EntityId, GamePhase, GameStateBroadcast,
    HireWorkerRequest, LobbyInfo, PlaceMessage, Player, PlayerId, SellMessage, ServerMessage, Shape,
    UnitInfoRequest, UnitSnapshot, UnitStaticInfo, WorkerState,
};
