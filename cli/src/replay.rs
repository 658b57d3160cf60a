use std::io::Write;

use rewind::RewindClient;
use rewind::primitives::decode_stream;
use tracing::debug;

use crate::CliError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    pub messages: usize,
    pub frames: usize,
}

/// Decode a whole capture, then resend it message by message.
///
/// Nothing is sent when the capture does not decode.
pub fn replay<W: Write>(capture: &[u8], viewer: &mut RewindClient<W>) -> Result<ReplayStats, CliError> {
    let messages = decode_stream(capture)?;
    let mut stats = ReplayStats::default();
    for message in &messages {
        viewer.send(message)?;
        stats.messages += 1;
        if message.is_frame_end() {
            stats.frames += 1;
            debug!(frame = stats.frames, "replayed frame");
        }
    }
    Ok(stats)
}

#[cfg(test)]
#[path = "replay_test.rs"]
mod tests;
