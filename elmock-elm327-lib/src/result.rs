//! Outcome of running a single command against a device.

use std::time::Duration;

use crate::error::DeviceError;

/// Banner lines wrapped around the command in [`RawResult::format_overview`]
const OVERVIEW_RULE: &str = "=======================================";

/// Raw text output of running a command, plus what is needed to debug it:
/// which input caused which output or error, and how long each phase took.
///
/// Implemented by [`MockResult`] and by results from real transports, so
/// client code can handle both the same way.
pub trait RawResult {
    /// The command exactly as it was sent
    fn input(&self) -> &str;

    /// Response lines in the order the device produced them
    fn outputs(&self) -> &[String];

    fn error(&self) -> Option<&DeviceError>;

    fn write_time(&self) -> Duration;

    fn read_time(&self) -> Duration;

    fn total_time(&self) -> Duration;

    /// Whether the transport reported a failure
    fn failed(&self) -> bool {
        self.error().is_some()
    }

    /// Human-readable banner naming the command that was run.
    ///
    /// Depends only on [`input`](Self::input).
    fn format_overview(&self) -> String {
        format!(
            "{OVERVIEW_RULE}\n Mocked command \"{}\"\n{OVERVIEW_RULE}",
            self.input()
        )
    }
}

/// Result produced by [`MockDevice`](crate::MockDevice).
///
/// Never carries an error and always has at least one output line. All
/// durations are zero because no I/O takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResult {
    input: String,
    outputs: Vec<String>,
    error: Option<DeviceError>,
    write_time: Duration,
    read_time: Duration,
    total_time: Duration,
}

impl MockResult {
    pub(crate) fn new(input: &str, outputs: Vec<String>) -> Self {
        debug_assert!(!outputs.is_empty(), "mock results always carry a line");
        Self {
            input: input.to_string(),
            outputs,
            error: None,
            write_time: Duration::ZERO,
            read_time: Duration::ZERO,
            total_time: Duration::ZERO,
        }
    }
}

impl RawResult for MockResult {
    fn input(&self) -> &str {
        &self.input
    }

    fn outputs(&self) -> &[String] {
        &self.outputs
    }

    fn error(&self) -> Option<&DeviceError> {
        self.error.as_ref()
    }

    fn write_time(&self) -> Duration {
        self.write_time
    }

    fn read_time(&self) -> Duration {
        self.read_time
    }

    fn total_time(&self) -> Duration {
        self.total_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static NO_ADAPTER: DeviceError = DeviceError::NoAdapter;

    /// What a real transport hands back when the adapter is missing
    struct UnreachableResult {
        outputs: Vec<String>,
    }

    impl RawResult for UnreachableResult {
        fn input(&self) -> &str {
            "ATSP0"
        }

        fn outputs(&self) -> &[String] {
            &self.outputs
        }

        fn error(&self) -> Option<&DeviceError> {
            Some(&NO_ADAPTER)
        }

        fn write_time(&self) -> Duration {
            Duration::from_millis(3)
        }

        fn read_time(&self) -> Duration {
            Duration::from_secs(2)
        }

        fn total_time(&self) -> Duration {
            Duration::from_millis(2003)
        }
    }

    #[test]
    fn test_new_result_is_clean() {
        let result = MockResult::new("ATSP0", vec!["OK".to_string()]);
        assert_eq!(result.input(), "ATSP0");
        assert_eq!(result.outputs(), ["OK"]);
        assert!(!result.failed());
        assert!(result.error().is_none());
        assert_eq!(result.write_time(), Duration::ZERO);
        assert_eq!(result.read_time(), Duration::ZERO);
        assert_eq!(result.total_time(), Duration::ZERO);
    }

    #[test]
    fn test_format_overview() {
        let result = MockResult::new("ATSP0", vec!["OK".to_string()]);
        let overview = result.format_overview();

        assert!(overview.contains("ATSP0"));
        let lines: Vec<&str> = overview.lines().collect();
        assert_eq!(
            lines,
            [
                "=======================================",
                " Mocked command \"ATSP0\"",
                "=======================================",
            ]
        );
    }

    #[test]
    fn test_format_overview_ignores_outputs() {
        let a = MockResult::new("0100", vec!["41 00 1F FD 80 02".to_string()]);
        let b = MockResult::new("0100", vec!["NOT SUPPORTED".to_string()]);
        assert_eq!(a.format_overview(), b.format_overview());
    }

    #[test]
    fn test_format_overview_ignores_error_and_timings() {
        let failed = UnreachableResult {
            outputs: vec!["?".to_string()],
        };
        assert!(failed.failed());
        assert_ne!(failed.total_time(), Duration::ZERO);

        let mocked = MockResult::new("ATSP0", vec!["OK".to_string()]);
        assert_eq!(failed.format_overview(), mocked.format_overview());
    }
}
