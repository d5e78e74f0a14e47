//! Input-capture state machine for the canonical notes buffer.
//!
//! Three input modalities (typed text, uploaded-file markers, live
//! voice-to-text) feed a single buffer. The session is a two-state machine
//! (`Idle` / `Listening`); every transition is total, and calls that arrive
//! in the wrong state are silent no-ops so UI races (double-clicking the
//! record button, late transcript chunks) never become errors.

/// Immutable view of the capture state handed to observers after a
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSnapshot {
    pub buffer: String,
    pub transcript: String,
    pub listening: bool,
}

/// External speech-capture capability.
///
/// The session only needs the push interface: start, stop, and a drain of
/// pending transcript chunks. Recognition internals stay behind this trait.
pub trait SpeechCapture {
    /// Begin producing transcript chunks.
    fn start(&mut self);
    /// Stop producing transcript chunks.
    fn stop(&mut self);
    /// Take the next pending chunk, if any.
    fn poll_chunk(&mut self) -> Option<String>;
}

/// Finite-state controller over the canonical notes text.
///
/// Owns the buffer exclusively; no other component mutates it. The buffer is
/// only appended to at a listening-stop transition or an explicit
/// edit/file-marker event, never by two sources at once.
#[derive(Debug, Default)]
pub struct CaptureSession {
    buffer: String,
    transcript: String,
    listening: bool,
}

impl CaptureSession {
    /// Create an idle session with empty buffer and transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer verbatim (the text area is fully controlled).
    ///
    /// Valid in any state.
    ///
    /// # Returns
    /// `true` when the buffer actually changed.
    pub fn edit(&mut self, text: &str) -> bool {
        if self.buffer == text {
            return false;
        }
        self.buffer = text.to_string();
        tracing::trace!(len = self.buffer.len(), "buffer edited");
        true
    }

    /// Append an uploaded-file marker line to the buffer.
    ///
    /// Valid in any state; does not change `listening`.
    pub fn append_file_marker(&mut self, name: &str) -> bool {
        self.buffer.push_str("\n[Uploaded: ");
        self.buffer.push_str(name);
        self.buffer.push(']');
        tracing::trace!(file = name, "file marker appended");
        true
    }

    /// Enter the listening state, resetting the transcript.
    ///
    /// Idempotent: calling while already listening is a no-op so the
    /// external capture is never re-issued.
    ///
    /// # Returns
    /// `true` when the session transitioned from idle to listening.
    pub fn start_listening(&mut self) -> bool {
        if self.listening {
            return false;
        }
        self.transcript.clear();
        self.listening = true;
        tracing::trace!("listening started");
        true
    }

    /// Append a streamed transcript chunk.
    ///
    /// Driven by the speech capability's callback, not user-initiated.
    /// Ignored while idle.
    pub fn append_transcript_chunk(&mut self, chunk: &str) -> bool {
        if !self.listening || chunk.is_empty() {
            return false;
        }
        self.transcript.push_str(chunk);
        true
    }

    /// Leave the listening state and merge the transcript into the buffer.
    ///
    /// Merge rule: a non-empty transcript is appended as
    /// `buffer + " " + transcript`, with no trimming of either side and no
    /// deduplication. The transcript itself is left intact until the next
    /// [`start_listening`](Self::start_listening). A second stop is a no-op.
    pub fn stop_listening(&mut self) -> bool {
        if !self.listening {
            return false;
        }
        self.listening = false;
        if !self.transcript.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(&self.transcript);
        }
        tracing::trace!(merged = !self.transcript.is_empty(), "listening stopped");
        true
    }

    /// Reset buffer and transcript to empty.
    ///
    /// Clearing only clears text state: an active listening session keeps
    /// running and later chunks land in the now-empty transcript. Clear and
    /// stop are deliberately independent actions.
    ///
    /// # Returns
    /// `true` when either field was non-empty.
    pub fn clear(&mut self) -> bool {
        let changed = !self.buffer.is_empty() || !self.transcript.is_empty();
        self.buffer.clear();
        self.transcript.clear();
        tracing::trace!("session cleared");
        changed
    }

    /// Current canonical buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current uncommitted transcript.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Whether a live capture session is active.
    pub fn listening(&self) -> bool {
        self.listening
    }

    /// Owned `(buffer, transcript, listening)` triple for observers.
    pub fn snapshot(&self) -> CaptureSnapshot {
        CaptureSnapshot {
            buffer: self.buffer.clone(),
            transcript: self.transcript.clone(),
            listening: self.listening,
        }
    }

    /// Drain pending chunks from a speech source into the transcript.
    ///
    /// Convenience for pull-style adapters; chunks are applied in the order
    /// the source yields them.
    pub fn drain_speech(&mut self, source: &mut dyn SpeechCapture) -> usize {
        let mut applied = 0;
        while let Some(chunk) = source.poll_chunk() {
            if self.append_transcript_chunk(&chunk) {
                applied += 1;
            }
        }
        applied
    }
}
