//! The device seam client code talks to.

use log::trace;

use crate::dispatch::mock_outputs;
use crate::result::{MockResult, RawResult};

/// Anything that can run an AT/OBD command and report what came back
pub trait Device {
    type Result: RawResult;

    fn execute(&self, command: &str) -> Self::Result;
}

/// Hardware-free ELM327 stand-in with fixed responses.
///
/// Stateless: every call depends only on its command, so one instance can be
/// shared across threads freely.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MockDevice;

impl MockDevice {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Device for MockDevice {
    type Result = MockResult;

    fn execute(&self, command: &str) -> MockResult {
        let outputs = mock_outputs(command);
        trace!("Mocked {command:?} -> {outputs:?}");
        MockResult::new(command, outputs)
    }
}
