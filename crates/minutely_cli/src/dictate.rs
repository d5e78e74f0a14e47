//! Line-driven dictation source.
//!
//! Stands in for a live speech recognizer: each input line becomes one
//! transcript chunk (with the newline softened to a space), pushed into the
//! capture session while it is listening.

use std::io::BufRead;

use minutely_core::SpeechCapture;

/// Speech source reading chunks from a buffered reader, one per line.
pub struct LineSpeech<R> {
    reader: R,
    active: bool,
}

impl<R: BufRead> LineSpeech<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            active: false,
        }
    }
}

impl<R: BufRead> SpeechCapture for LineSpeech<R> {
    fn start(&mut self) {
        self.active = true;
    }

    fn stop(&mut self) {
        self.active = false;
    }

    fn poll_chunk(&mut self) -> Option<String> {
        if !self.active {
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                    line.push(' ');
                }
                Some(line)
            }
        }
    }
}
