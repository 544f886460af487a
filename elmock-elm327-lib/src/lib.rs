//! Deterministic ELM327 stand-in for testing OBD2 clients
//!
//! [`MockDevice`] answers AT and mode 01 commands with the canned responses a
//! real adapter would give for a fixed simulated vehicle. It performs no I/O,
//! keeps no state between commands and never fails: anything it does not
//! know gets `NOT SUPPORTED`.
//!
//! ```
//! use elmock_elm327_lib::{Device, MockDevice, RawResult};
//!
//! let result = MockDevice::new().execute("010C");
//! assert_eq!(result.outputs(), ["41 0C 0F A0"]);
//! assert!(!result.failed());
//! ```
//!
//! [`framing`] turns results into the byte stream an adapter writes, for
//! serving the mock over a socket.

pub mod device;
pub mod dispatch;
pub mod error;
pub mod framing;
pub mod pids;
pub mod result;

pub use device::{Device, MockDevice};
pub use error::DeviceError;
pub use framing::{CommandReader, LineSettings};
pub use result::{MockResult, RawResult};
