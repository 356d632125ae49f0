#![no_main]
use std::convert::Infallible;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use markesc::{Context, Policy, Sink, escape, escape_in, escape_to_vec};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    policy: Policy,
    context: Context,
    bytes: &'a [u8],
}

#[derive(Default)]
struct Recorder(Vec<Vec<u8>>);

impl Sink for Recorder {
    type Error = Infallible;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.0.push(bytes.to_vec());
        Ok(())
    }
}

/// Decode the way the escaper does: one byte per malformed sequence.
fn decode(bytes: &[u8]) -> (char, usize) {
    match bstr::decode_utf8(bytes) {
        (Some(ch), width) => (ch, width),
        (None, _) => (char::REPLACEMENT_CHARACTER, 1),
    }
}

fuzz_target!(|input: Input<'_>| {
    let Input {
        policy,
        context,
        bytes,
    } = input;

    let mut rec = Recorder::default();
    escape(&mut rec, policy, bytes).unwrap();
    let writes = rec.0;

    // 2k + 1 writes, alternating verbatim runs and replacements
    assert_eq!(writes.len() % 2, 1);

    // every input byte is covered exactly once
    let mut pos = 0;
    for (i, chunk) in writes.iter().enumerate() {
        if i % 2 == 0 {
            assert!(bytes[pos..].starts_with(chunk));
            pos += chunk.len();
        } else {
            let (ch, width) = decode(&bytes[pos..]);
            assert_eq!(policy.substitution(ch, width), Some(chunk.as_slice()));
            pos += width;
        }
    }
    assert_eq!(pos, bytes.len());

    let out = writes.concat();
    assert!(std::str::from_utf8(&out).is_ok());
    assert_eq!(out, escape_to_vec(policy, bytes));

    let mut via_context = Vec::<u8>::new();
    escape_in(&mut via_context, context, bytes).unwrap();
    match context.policy() {
        Some(p) => assert_eq!(via_context, escape_to_vec(p, bytes)),
        None => assert!(via_context.is_empty()),
    }
});
