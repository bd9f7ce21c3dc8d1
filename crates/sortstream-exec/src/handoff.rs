//! Unbuffered handoff between one producer thread and one consumer.
//!
//! `push` returns only after the consumer has taken the value: each value
//! travels with a oneshot receipt that `pull` answers. Both ends block
//! (`blocking_send` / `blocking_recv`); do not use them from inside an async
//! runtime worker. Neither end is `Clone`, so the single-producer/single-consumer
//! discipline is enforced by ownership and push-after-close cannot be written:
//! `close` consumes the sender.

use std::iter::FusedIterator;

use tokio::sync::{mpsc, oneshot};

use sortstream_core::error::{Error, Result};
use sortstream_core::stream::SortedStream;

type Handoff<T> = (T, oneshot::Sender<()>);

/// Create a connected producer/consumer pair.
pub fn handoff<T>() -> (HandoffSender<T>, HandoffStream<T>) {
    let (tx, rx) = mpsc::channel(1);
    (HandoffSender { tx }, HandoffStream { rx })
}

#[derive(Debug)]
pub struct HandoffSender<T> {
    tx: mpsc::Sender<Handoff<T>>,
}

impl<T> HandoffSender<T> {
    /// Hand `item` to the consumer, blocking until the consumer has pulled it.
    ///
    /// Fails with `Error::Disconnected` once the consumer has been dropped,
    /// including while the value was waiting to be taken; the producer should
    /// stop.
    pub fn push(&self, item: T) -> Result<()> {
        let (receipt_tx, receipt_rx) = oneshot::channel();
        self.tx
            .blocking_send((item, receipt_tx))
            .map_err(|_| Error::Disconnected)?;
        receipt_rx.blocking_recv().map_err(|_| Error::Disconnected)
    }

    /// Mark the stream finished; the consumer sees exhaustion on its next pull.
    pub fn close(self) {
        drop(self);
    }

    pub fn is_disconnected(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer end; a `SortedStream` fed by a `HandoffSender`.
#[derive(Debug)]
pub struct HandoffStream<T> {
    rx: mpsc::Receiver<Handoff<T>>,
}

impl<T: Ord> SortedStream for HandoffStream<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let (item, receipt) = self.rx.blocking_recv()?;
        // the producer may have given up already; the value is still ours
        let _ = receipt.send(());
        Some(item)
    }
}

impl<T: Ord> Iterator for HandoffStream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T: Ord> FusedIterator for HandoffStream<T> {}
