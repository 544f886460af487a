//! ELM327 byte-stream framing.
//!
//! Commands arrive as bytes terminated by a carriage return. Responses go
//! back as one line per output followed by an empty line and the `>` prompt.

use log::warn;

use crate::result::RawResult;

/// Prompt an ELM327 prints when it is ready for the next command
pub const PROMPT: char = '>';

/// Longest command kept, in bytes. Anything past this is discarded.
pub const MAX_COMMAND_LEN: usize = 256;

/// Per-connection line settings.
///
/// These are fixed when the connection is set up. AT commands do not change
/// them, the interpreter keeps no state between commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSettings {
    /// Echo received characters back
    pub echo_enabled: bool,
    /// Add linefeeds after carriage returns
    pub linefeeds_enabled: bool,
}

impl Default for LineSettings {
    fn default() -> Self {
        Self {
            echo_enabled: true,
            linefeeds_enabled: true,
        }
    }
}

impl LineSettings {
    /// Format a line ending based on current settings
    #[must_use]
    pub const fn line_ending(&self) -> &'static str {
        if self.linefeeds_enabled {
            "\r\n"
        } else {
            "\r"
        }
    }

    /// Format a result the way an ELM327 writes it to the wire, ending with
    /// the prompt.
    ///
    /// A failed result is written as the adapter's error text instead of its
    /// outputs.
    #[must_use]
    pub fn frame_result<R: RawResult + ?Sized>(&self, result: &R) -> String {
        let le = self.line_ending();
        let mut framed = String::new();

        if let Some(error) = result.error() {
            framed.push_str(error.elm327_text());
            framed.push_str(le);
        } else {
            for line in result.outputs() {
                framed.push_str(line);
                framed.push_str(le);
            }
        }

        framed.push_str(le);
        framed.push(PROMPT);
        framed
    }
}

/// Collects bytes from a stream into complete commands
#[derive(Debug, Default)]
pub struct CommandReader {
    buffer: Vec<u8>,
    /// Bytes were dropped since the last carriage return
    overflowed: bool,
}

impl CommandReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte.
    ///
    /// Returns the command once a carriage return ends it. Linefeeds are
    /// dropped and surrounding whitespace is trimmed, case is left alone.
    /// Blank lines yield nothing.
    ///
    /// A command longer than [`MAX_COMMAND_LEN`] is cut off and comes out as
    /// an empty string, which no device recognizes.
    pub fn push(&mut self, byte: u8) -> Option<String> {
        match byte {
            b'\r' => {
                let overflowed = std::mem::take(&mut self.overflowed);
                let command = if overflowed {
                    String::new()
                } else {
                    String::from_utf8_lossy(&self.buffer).trim().to_string()
                };
                self.buffer.clear();
                (overflowed || !command.is_empty()).then_some(command)
            }
            b'\n' => None,
            _ if self.buffer.len() >= MAX_COMMAND_LEN => {
                if !self.overflowed {
                    warn!("Command longer than {MAX_COMMAND_LEN} bytes, discarding");
                    self.overflowed = true;
                }
                None
            }
            _ => {
                self.buffer.push(byte);
                None
            }
        }
    }

    /// Feed a chunk of bytes, collecting every command it completes
    pub fn extend(&mut self, bytes: &[u8]) -> Vec<String> {
        bytes.iter().filter_map(|&byte| self.push(byte)).collect()
    }

    /// Bytes received since the last completed command
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }
}
