use alloc::vec::Vec;
use core::fmt;

use crate::Sink;

/// Keeps every write as a separate chunk.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub(crate) writes: Vec<Vec<u8>>,
}

impl RecordingSink {
    pub(crate) fn concat(&self) -> Vec<u8> {
        self.writes.concat()
    }
}

impl Sink for RecordingSink {
    type Error = core::convert::Infallible;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WriteRefused {
    pub(crate) call: usize,
}

impl fmt::Display for WriteRefused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "write #{} refused", self.call)
    }
}

impl core::error::Error for WriteRefused {}

/// Accepts writes until the `fail_on`-th call (1-based), which fails. Every
/// call, including ones after the failure, is counted.
#[derive(Debug)]
pub(crate) struct FailingSink {
    pub(crate) fail_on: usize,
    pub(crate) calls: usize,
    pub(crate) accepted: Vec<u8>,
}

impl FailingSink {
    pub(crate) fn new(fail_on: usize) -> Self {
        Self {
            fail_on,
            calls: 0,
            accepted: Vec::new(),
        }
    }
}

impl Sink for FailingSink {
    type Error = WriteRefused;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.calls += 1;
        if self.calls == self.fail_on {
            return Err(WriteRefused { call: self.calls });
        }
        self.accepted.extend_from_slice(bytes);
        Ok(())
    }
}

/// Number of test cases for property tests.
pub(crate) fn property_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
