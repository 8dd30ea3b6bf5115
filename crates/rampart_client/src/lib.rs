//! # RAMPART Client
//!
//! The live state reconciliation layer of the Rampart client: turns the
//! server's broadcast snapshots, combat events and detail responses into
//! effect animations and a consistent unit inspection panel.
//!
//! ## Architecture
//!
//! ```text
//! CLIENT                                        SERVER
//!   |                                              |
//!   |<-- GameState (complete, every change) -------|
//!   |<-- CombatEvents -----------------------------|
//!   |--- requestUnitInfo {entity_id} ------------->|
//!   |<-- UnitInfo (any order, possibly late) ------|
//!   |--- place {shape, row, col} ----------------->| <- Server validates
//!   |--- sell {row, col} ------------------------->| <- Server validates
//!   |                                              |
//! ```
//!
//! The client never decides outcomes. Every broadcast replaces the world
//! view wholesale; a unit missing from one is gone.
//!
//! ## Example
//!
//! ```rust,ignore
//! use rampart_client::{outbound_channel, ClientConfig, GameClient};
//! use rampart_ui::{MonotonicClock, UIRenderer};
//!
//! let (queue, drain) = outbound_channel(256);
//! let mut client = GameClient::new(ClientConfig::default(), MonotonicClock::new(), queue);
//!
//! client.handle_text(&frame_from_socket)?;
//! let batches = client.render_frame(&mut renderer);
//! for json in drain.drain_json()? { socket.send(json); }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod client;
pub mod config;
pub mod error;
pub mod outbound;
pub mod picking;
pub mod replay;

pub use client::{BoardClick, GameClient, Session};
pub use config::{ClientConfig, PanelConfig};
pub use error::{ClientError, ClientResult};
pub use outbound::{outbound_channel, OutboundDrain, OutboundQueue};
pub use replay::{run_replay, ReplayReport, ReplayStep};
