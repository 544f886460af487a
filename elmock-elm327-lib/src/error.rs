//! Failures a transport can attach to a [`RawResult`](crate::RawResult).
//!
//! [`MockDevice`](crate::MockDevice) never reports one: unknown commands are
//! answered with `NOT SUPPORTED` like a real adapter would. The type is part
//! of the result contract so results from a serial or TCP transport can be
//! handled, and framed, the same way.

/// Why a command got no usable answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// No adapter on the other end of the transport
    NoAdapter,
    /// The adapter stayed silent past the transport's deadline
    NoResponse,
    /// The link dropped while the command was in flight
    ConnectionLost,
    /// Any other transport failure, with the transport's description
    Transport(String),
}

impl std::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAdapter => write!(f, "no ELM327 adapter attached"),
            Self::NoResponse => write!(f, "ELM327 adapter did not answer in time"),
            Self::ConnectionLost => write!(f, "link to the ELM327 adapter was lost"),
            Self::Transport(reason) => write!(f, "transport failure: {reason}"),
        }
    }
}

impl std::error::Error for DeviceError {}

impl DeviceError {
    /// Line an ELM327 prints for the closest matching condition
    #[must_use]
    pub const fn elm327_text(&self) -> &'static str {
        match self {
            Self::NoAdapter => "UNABLE TO CONNECT",
            Self::NoResponse => "NO DATA",
            Self::ConnectionLost => "CAN ERROR",
            Self::Transport(_) => "BUS ERROR",
        }
    }
}
