//! # Outbound Queue
//!
//! Client messages waiting for the transport. The driver pushes, the transport
//! (usually another thread owning the socket) drains.
//!
//! ```text
//!   GameClient ──OutboundQueue──► [ bounded channel ] ──OutboundDrain──► transport
//! ```

use crossbeam_channel::{Receiver, Sender, TrySendError};
use rampart_shared::ClientMessage;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Creates a bounded outbound channel holding up to `capacity` messages
/// (at least 1).
#[must_use]
pub fn outbound_channel(capacity: usize) -> (OutboundQueue, OutboundDrain) {
    let capacity = capacity.max(1);
    let (sender, receiver) = crossbeam_channel::bounded(capacity);
    (OutboundQueue { sender, capacity }, OutboundDrain { receiver })
}

/// Sending half, owned by the client driver.
///
/// Sending never blocks: a full queue is reported as an error so a stalled
/// transport cannot freeze input handling.
#[derive(Debug, Clone)]
pub struct OutboundQueue {
    sender: Sender<ClientMessage>,
    capacity: usize,
}

impl OutboundQueue {
    /// Queues a message.
    ///
    /// # Errors
    ///
    /// [`ClientError::OutboundFull`] when the queue is at capacity,
    /// [`ClientError::OutboundClosed`] when every drain has been dropped.
    pub fn send(&self, message: ClientMessage) -> ClientResult<()> {
        debug!(?message, "Queued outbound message");
        self.sender.try_send(message).map_err(|err| match err {
            TrySendError::Full(_) => ClientError::OutboundFull {
                capacity: self.capacity,
            },
            TrySendError::Disconnected(_) => ClientError::OutboundClosed,
        })
    }

    /// Messages currently queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sender.len()
    }

    /// True when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sender.is_empty()
    }

    /// Maximum number of queued messages.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Receiving half, owned by the transport.
#[derive(Debug, Clone)]
pub struct OutboundDrain {
    receiver: Receiver<ClientMessage>,
}

impl OutboundDrain {
    /// Takes the next message, if any.
    #[must_use]
    pub fn try_recv(&self) -> Option<ClientMessage> {
        self.receiver.try_recv().ok()
    }

    /// Takes every queued message, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<ClientMessage> {
        self.receiver.try_iter().collect()
    }

    /// Takes every queued message as wire JSON, oldest first.
    ///
    /// # Errors
    ///
    /// [`ClientError::Encode`] if a message fails to serialize. Messages
    /// drained before the failure are lost.
    pub fn drain_json(&self) -> ClientResult<Vec<String>> {
        self.receiver
            .try_iter()
            .map(|message| message.to_json().map_err(ClientError::Encode))
            .collect()
    }

    /// The underlying receiver, for blocking transports.
    #[must_use]
    pub fn receiver(&self) -> Receiver<ClientMessage> {
        self.receiver.clone()
    }
}
