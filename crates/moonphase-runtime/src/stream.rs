use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::Stream;
use moonphase_types::StageSnapshot;
use tokio::sync::mpsc;

/// Stage transitions of a [`crate::CalculationRuntime`], in order.
///
/// One item per change of stage or generation. Flag-only updates, such as
/// the animation timer finishing after the result is already visible, are
/// not repeated here. Unlike a `watch` receiver, intermediate transitions
/// are never coalesced. The stream ends when the runtime stops.
pub struct StageStream {
    receiver: mpsc::UnboundedReceiver<StageSnapshot>,
}

impl StageStream {
    pub(crate) fn new(receiver: mpsc::UnboundedReceiver<StageSnapshot>) -> Self {
        Self { receiver }
    }
}

impl Stream for StageStream {
    type Item = StageSnapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
