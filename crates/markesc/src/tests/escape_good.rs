use alloc::{vec, vec::Vec};

use rstest::rstest;

use super::utils::RecordingSink;
use crate::{Policy, escape, escape_attribute, escape_text, escape_to_vec};

fn attribute(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    escape_attribute(&mut out, input).unwrap();
    out
}

fn text(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    escape_text(&mut out, input).unwrap();
    out
}

#[rstest]
#[case::empty(b"", b"", b"")]
#[case::plain(b"hello world", b"hello world", b"hello world")]
#[case::amp_lt(b"a&b<c", b"a&amp;b&lt;c", b"a&amp;b&lt;c")]
#[case::quotes(b"\"quote\"", b"&quot;quote&quot;", b"\"quote\"")]
#[case::newline(b"a\nb", b"a&#xA;b", b"a\nb")]
#[case::carriage_return(b"a\rb", b"a&#xD;b", b"a\rb")]
#[case::crlf(b"\r\n", b"&#xD;&#xA;", b"\r\n")]
#[case::tab_kept(b"a\tb", b"a\tb", b"a\tb")]
#[case::gt_and_apos_kept(b"a>b'c", b"a>b'c", b"a>b'c")]
#[case::existing_entity(b"&amp;", b"&amp;amp;", b"&amp;amp;")]
#[case::only_specials(b"&<", b"&amp;&lt;", b"&amp;&lt;")]
#[case::control_char(b"a\x01b", "a\u{FFFD}b".as_bytes(), "a\u{FFFD}b".as_bytes())]
#[case::multibyte("héllo & 中文 < 😀".as_bytes(), "héllo &amp; 中文 &lt; 😀".as_bytes(), "héllo &amp; 中文 &lt; 😀".as_bytes())]
fn escapes(#[case] input: &[u8], #[case] attr_expected: &[u8], #[case] text_expected: &[u8]) {
    assert_eq!(attribute(input), attr_expected);
    assert_eq!(text(input), text_expected);
}

#[test]
fn writes_runs_between_substitutions() {
    let mut sink = RecordingSink::default();
    escape(&mut sink, Policy::Attribute, b"ab&cd\"").unwrap();
    assert_eq!(
        sink.writes,
        vec![
            b"ab".to_vec(),
            b"&amp;".to_vec(),
            b"cd".to_vec(),
            b"&quot;".to_vec(),
            b"".to_vec(),
        ]
    );
}

#[test]
fn adjacent_substitutions_flush_empty_runs() {
    let mut sink = RecordingSink::default();
    escape(&mut sink, Policy::Text, b"&&").unwrap();
    assert_eq!(
        sink.writes,
        vec![
            b"".to_vec(),
            b"&amp;".to_vec(),
            b"".to_vec(),
            b"&amp;".to_vec(),
            b"".to_vec(),
        ]
    );
}

#[rstest]
fn pass_through_input_is_one_write(#[values(Policy::Attribute, Policy::Text)] policy: Policy) {
    let input = "plain text, with tabs\tand ünïcödé ✓".as_bytes();
    let mut sink = RecordingSink::default();
    escape(&mut sink, policy, input).unwrap();
    assert_eq!(sink.writes, vec![input.to_vec()]);
}

#[test]
fn empty_input_still_flushes_once() {
    let mut sink = RecordingSink::default();
    escape(&mut sink, Policy::Attribute, b"").unwrap();
    assert_eq!(sink.writes, vec![Vec::<u8>::new()]);
}

#[test]
fn calls_are_independent() {
    let mut out = Vec::<u8>::new();
    escape_text(&mut out, b"a&").unwrap();
    escape_text(&mut out, b"b").unwrap();
    assert_eq!(out, b"a&amp;b");
    assert_eq!(escape_to_vec(Policy::Text, b"a&b"), out);
}
