//! Frame source types and channels feeding video frames into the ruler UI.
//!
//! The core is agnostic to the transport: anything implementing
//! [`FrameSource`] works, whether it wraps a camera, a network stream, or a
//! synthetic generator. The bundled [`channel`] pair lets a producer thread
//! push frames over an mpsc channel; dropping the sink signals end-of-stream,
//! which ends the session cleanly.

use std::sync::mpsc::{Receiver, SendError, Sender, TryRecvError};

/// One decoded video frame: tightly packed RGB8, row-major.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    /// `width * height * 3` bytes.
    pub rgb: Vec<u8>,
}

impl VideoFrame {
    pub fn new(width: u32, height: u32, rgb: Vec<u8>) -> Self {
        debug_assert_eq!(rgb.len(), (width * height * 3) as usize);
        Self { width, height, rgb }
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width, self.height]
    }
}

/// Result of polling a [`FrameSource`] once.
#[derive(Debug)]
pub enum FramePoll {
    /// A new frame is available.
    Frame(VideoFrame),
    /// No new frame yet; keep showing the previous one.
    Pending,
    /// The stream is exhausted. Not an error: the session terminates.
    End,
}

/// Abstract frame-producing collaborator.
///
/// Polled non-blocking from the UI thread once per repaint; implementations
/// must not block.
pub trait FrameSource {
    fn poll_frame(&mut self) -> FramePoll;
}

// ─────────────────────────────────────────────────────────────────────────────
// Channel-backed source
// ─────────────────────────────────────────────────────────────────────────────

/// Producer side of a frame channel. Cheap to clone; the stream ends when all
/// sinks are dropped.
#[derive(Clone)]
pub struct FrameSink {
    tx: Sender<VideoFrame>,
}

impl FrameSink {
    /// Send one frame to the UI. Fails once the receiving side is gone.
    pub fn send(&self, frame: VideoFrame) -> Result<(), SendError<VideoFrame>> {
        self.tx.send(frame)
    }
}

/// Receiver side of a frame channel, usable as a [`FrameSource`].
pub struct ChannelSource {
    rx: Receiver<VideoFrame>,
}

impl FrameSource for ChannelSource {
    fn poll_frame(&mut self) -> FramePoll {
        match self.rx.try_recv() {
            Ok(frame) => FramePoll::Frame(frame),
            Err(TryRecvError::Empty) => FramePoll::Pending,
            Err(TryRecvError::Disconnected) => FramePoll::End,
        }
    }
}

/// Create a connected sink/source pair for feeding frames from another thread.
pub fn channel() -> (FrameSink, ChannelSource) {
    let (tx, rx) = std::sync::mpsc::channel();
    (FrameSink { tx }, ChannelSource { rx })
}
