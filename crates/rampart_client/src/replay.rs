//! # Session Replay
//!
//! Drives a [`GameClient`] from a recorded JSON-lines script, one step per
//! line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! {"kind":"join","at_ms":0,"lobby":0}
//! {"kind":"server","at_ms":10,"message":{"type":"PlayerId","data":1}}
//! {"kind":"build_shape","at_ms":400,"shape":"Circle"}
//! {"kind":"click","at_ms":500,"x":90.0,"y":90.0}
//! {"kind":"frame","at_ms":516}
//! ```
//!
//! Time comes from a [`ManualClock`] set to each step's `at_ms`, so a replay
//! renders identically on every run.

use std::io::BufRead;

use rampart_shared::{EntityId, ServerMessage, Shape};
use rampart_ui::{ManualClock, Millis, UIRenderer};
use serde::Deserialize;
use tracing::{debug, info};

use crate::client::GameClient;
use crate::error::{ClientError, ClientResult};
use crate::outbound::OutboundDrain;

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplayStep {
    /// A message from the server.
    Server {
        /// Clock reading for this step.
        at_ms: Millis,
        /// The message.
        message: ServerMessage,
    },
    /// Join a lobby.
    Join {
        /// Clock reading for this step.
        at_ms: Millis,
        /// Lobby index.
        lobby: usize,
    },
    /// Leave the current game.
    Leave {
        /// Clock reading for this step.
        at_ms: Millis,
    },
    /// Board click.
    Click {
        /// Clock reading for this step.
        at_ms: Millis,
        /// Board x.
        x: f32,
        /// Board y.
        y: f32,
    },
    /// Select a unit by identity.
    Select {
        /// Clock reading for this step.
        at_ms: Millis,
        /// Unit to select.
        entity_id: EntityId,
    },
    /// Choose the shape empty-cell clicks build.
    BuildShape {
        /// Clock reading for this step.
        at_ms: Millis,
        /// Tower shape.
        shape: Shape,
    },
    /// Press the hire-worker button.
    HireWorker {
        /// Clock reading for this step.
        at_ms: Millis,
    },
    /// Press the skip-to-combat button.
    SkipToCombat {
        /// Clock reading for this step.
        at_ms: Millis,
    },
    /// Press the sell button.
    Sell {
        /// Clock reading for this step.
        at_ms: Millis,
    },
    /// Render one frame.
    Frame {
        /// Clock reading for this step.
        at_ms: Millis,
    },
}

impl ReplayStep {
    /// Clock reading for this step.
    #[must_use]
    pub const fn at_ms(&self) -> Millis {
        match *self {
            Self::Server { at_ms, .. }
            | Self::Join { at_ms, .. }
            | Self::Leave { at_ms }
            | Self::Click { at_ms, .. }
            | Self::Select { at_ms, .. }
            | Self::BuildShape { at_ms, .. }
            | Self::HireWorker { at_ms }
            | Self::SkipToCombat { at_ms }
            | Self::Sell { at_ms }
            | Self::Frame { at_ms } => at_ms,
        }
    }
}

/// What a replay did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Steps executed.
    pub steps: usize,
    /// Frames rendered.
    pub frames: usize,
    /// Most effects alive in any rendered frame.
    pub peak_effects: usize,
    /// Draw commands in the last rendered frame.
    pub last_frame_commands: usize,
    /// Every message the client queued, as wire JSON, in order.
    pub outbound: Vec<String>,
}

/// Runs a script against `client`.
///
/// The clock never moves backwards: a step stamped earlier than the previous
/// one runs at the previous time.
///
/// # Errors
///
/// Stops at the first unreadable line, malformed step, or failed send.
pub fn run_replay<R: BufRead>(
    reader: R,
    clock: &ManualClock,
    client: &mut GameClient<ManualClock>,
    drain: &OutboundDrain,
) -> ClientResult<ReplayReport> {
    let mut report = ReplayReport::default();
    let mut renderer = UIRenderer::new();
    let mut now: Millis = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let step: ReplayStep = serde_json::from_str(line).map_err(ClientError::Decode)?;
        now = now.max(step.at_ms());
        clock.set(now);
        debug!(at_ms = now, ?step, "Replay step");

        match step {
            ReplayStep::Server { message, .. } => client.handle_message(message),
            ReplayStep::Join { lobby, .. } => client.join_lobby(lobby)?,
            ReplayStep::Leave { .. } => client.leave_session()?,
            ReplayStep::Click { x, y, .. } => {
                client.select_at(x, y)?;
            }
            ReplayStep::Select { entity_id, .. } => {
                client.select_unit(entity_id)?;
            }
            ReplayStep::BuildShape { shape, .. } => client.set_build_shape(shape),
            ReplayStep::HireWorker { .. } => client.hire_worker()?,
            ReplayStep::SkipToCombat { .. } => client.skip_to_combat()?,
            ReplayStep::Sell { .. } => {
                client.invoke_sell()?;
            }
            ReplayStep::Frame { .. } => {
                let batches = client.render_frame(&mut renderer);
                report.last_frame_commands = batches.iter().map(|batch| batch.commands.len()).sum();
                report.frames += 1;
                report.peak_effects = report.peak_effects.max(client.effects().len());
            }
        }

        report.steps += 1;
        report.outbound.extend(drain.drain_json()?);
    }

    info!(
        steps = report.steps,
        frames = report.frames,
        sent = report.outbound.len(),
        "Replay finished"
    );
    Ok(report)
}
