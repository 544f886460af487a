//! Mode 01 (current data) responses of the simulated vehicle.
//!
//! The vehicle is a fixed table of canned values, there is no physics model
//! behind it. Every response starts with the mode 01 reply byte (`0x41`) and
//! the requested PID, followed by the PID's payload in the byte width OBD2
//! defines for it.

use crate::dispatch::NOT_SUPPORTED;

/// Mode 01 request byte
pub const MODE_CURRENT_DATA: u8 = 0x01;

/// Reply byte for mode 01: the request mode with `0x40` added
pub const MODE_CURRENT_DATA_RESPONSE: u8 = MODE_CURRENT_DATA + 0x40;

/// One row of the PID table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PidEntry {
    pub pid: u8,
    pub name: &'static str,
    /// Payload following `41 <pid>`
    pub data: &'static [u8],
}

impl PidEntry {
    /// Two uppercase hex digits a request fragment must start with
    #[must_use]
    pub fn key(&self) -> String {
        hex::encode_upper([self.pid])
    }

    /// Whether this PID reports a supported-PID bitmap rather than a value
    #[must_use]
    pub const fn is_support_bitmap(&self) -> bool {
        self.pid % 0x20 == 0
    }

    /// Response line as the device prints it, e.g. `41 0C 0F A0`
    #[must_use]
    pub fn response_line(&self) -> String {
        [MODE_CURRENT_DATA_RESPONSE, self.pid]
            .iter()
            .chain(self.data)
            .map(|byte| hex::encode_upper([*byte]))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const fn entry(pid: u8, name: &'static str, data: &'static [u8]) -> PidEntry {
    PidEntry { pid, name, data }
}

/// Searched in order, first matching key wins.
///
/// Only group `00` claims any support; its bitmap lists exactly the data PIDs
/// below.
static PID_TABLE: [PidEntry; 19] = [
    entry(0x00, "PIDs supported [01 - 20]", &[0x1F, 0xFD, 0x80, 0x02]),
    entry(0x20, "PIDs supported [21 - 40]", &[0x00, 0x00, 0x00, 0x00]),
    entry(0x40, "PIDs supported [41 - 60]", &[0x00, 0x00, 0x00, 0x00]),
    entry(0x60, "PIDs supported [61 - 80]", &[0x00, 0x00, 0x00, 0x00]),
    entry(0x80, "PIDs supported [81 - A0]", &[0x00, 0x00, 0x00, 0x00]),
    entry(0x04, "Calculated engine load", &[0x7F]),
    entry(0x05, "Engine coolant temperature", &[0x64]),
    entry(0x06, "Short term fuel trim, bank 1", &[0x64]),
    entry(0x07, "Long term fuel trim, bank 1", &[0x45]),
    entry(0x08, "Short term fuel trim, bank 2", &[0x66]),
    entry(0x09, "Long term fuel trim, bank 2", &[0x75]),
    entry(0x0A, "Fuel pressure", &[0x80]),
    entry(0x0B, "Intake manifold absolute pressure", &[0x80]),
    entry(0x0C, "Engine RPM", &[0x0F, 0xA0]),
    entry(0x0D, "Vehicle speed", &[0xFF]),
    entry(0x0E, "Timing advance", &[0x80]),
    entry(0x10, "MAF air flow rate", &[0x80, 0x80]),
    entry(0x11, "Throttle position", &[0x80]),
    entry(0x1F, "Run time since engine start", &[0x30, 0xA0]),
];

/// All known PIDs in lookup order
#[must_use]
pub fn entries() -> &'static [PidEntry] {
    &PID_TABLE
}

/// Find the table entry for a request fragment (the command with its mode
/// prefix already removed).
///
/// Matching is by prefix and case-sensitive, so `0C` and `0C01` both hit
/// RPM while `0c` does not.
#[must_use]
pub fn find(fragment: &str) -> Option<&'static PidEntry> {
    let key = fragment.get(..2)?;
    if key.bytes().any(|b| b.is_ascii_lowercase()) {
        return None;
    }

    let mut pid = [0u8; 1];
    hex::decode_to_slice(key, &mut pid).ok()?;
    PID_TABLE.iter().find(|entry| entry.pid == pid[0])
}

/// Response lines for a mode 01 request fragment
#[must_use]
pub fn lookup(fragment: &str) -> Vec<String> {
    find(fragment).map_or_else(
        || vec![NOT_SUPPORTED.to_string()],
        |entry| vec![entry.response_line()],
    )
}
