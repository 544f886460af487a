//! Routes a raw command to the response it would get from a real adapter.

use crate::pids;

/// Select protocol automatically
pub const PROTOCOL_AUTO: &str = "ATSP0";

/// Display the device description
pub const DEVICE_DESCRIPTION: &str = "AT@1";

/// Commands starting with this request mode 01 (current data)
pub const MODE_01_PREFIX: &str = "01";

/// Acknowledgement for a setting that was accepted
pub const OK: &str = "OK";

/// Reply to [`DEVICE_DESCRIPTION`]
pub const DEVICE_ID: &str = "OBDII by elm329@gmail.com";

/// Reply to anything the interpreter does not know
pub const NOT_SUPPORTED: &str = "NOT SUPPORTED";

/// Response lines for a command.
///
/// Rules are tried in order and the first match wins: the two AT commands
/// must match exactly, mode 01 matches by prefix. Never returns an empty
/// list.
#[must_use]
pub fn mock_outputs(command: &str) -> Vec<String> {
    match command {
        PROTOCOL_AUTO => vec![OK.to_string()],
        DEVICE_DESCRIPTION => vec![DEVICE_ID.to_string()],
        _ => match command.strip_prefix(MODE_01_PREFIX) {
            Some(fragment) => pids::lookup(fragment),
            None => vec![NOT_SUPPORTED.to_string()],
        },
    }
}
