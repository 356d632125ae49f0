//! Writes a small XML document to stdout, escaping user-supplied values.
//!
//! Run with `cargo run --example write_element -- 'Tom & "Jerry"' 'a < b'`.
#![allow(missing_docs)]

use std::io::{self, BufWriter, Write};

use markesc::{EscapeError, IoSink, escape_attribute, escape_text};

fn main() -> Result<(), EscapeError<io::Error>> {
    let mut args = std::env::args().skip(1);
    let title = args.next().unwrap_or_else(|| "Fish & \"Chips\"".to_owned());
    let body = args.next().unwrap_or_else(|| "1 < 2\r\nsecond line".to_owned());

    let stdout = io::stdout();
    let mut out = IoSink::new(BufWriter::new(stdout.lock()));

    write_raw(&mut out, b"<note title=\"")?;
    escape_attribute(&mut out, title.as_bytes())?;
    write_raw(&mut out, b"\">")?;
    escape_text(&mut out, body.as_bytes())?;
    write_raw(&mut out, b"</note>\n")?;

    out.get_mut().flush().map_err(EscapeError::SinkWrite)
}

fn write_raw<W: Write>(out: &mut IoSink<W>, bytes: &[u8]) -> Result<(), EscapeError<io::Error>> {
    out.get_mut().write_all(bytes).map_err(EscapeError::SinkWrite)
}
