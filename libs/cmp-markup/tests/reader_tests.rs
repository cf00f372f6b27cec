use std::io::{self, BufRead, BufReader, Cursor, Read};
use trellis_markup::{EntityReader, ENTITY_DTD};

/// Read the whole stream one byte at a time.
fn read_bytewise<R: Read>(mut reader: R) -> Vec<u8> {
    let mut out = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte).expect("read failed") {
            0 => break,
            n => out.extend_from_slice(&byte[..n]),
        }
    }
    out
}

/// Read the whole stream in fixed-size blocks.
fn read_blockwise<R: Read>(mut reader: R, block: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut buf = vec![0u8; block];
    loop {
        match reader.read(&mut buf).expect("read failed") {
            0 => break,
            n => out.extend_from_slice(&buf[..n]),
        }
    }
    out
}

fn expected(content: &str) -> Vec<u8> {
    let mut bytes = ENTITY_DTD.as_bytes().to_vec();
    bytes.extend_from_slice(content.as_bytes());
    bytes
}

#[test]
fn bytewise_reads_yield_prefix_then_content() {
    let content = "<component><attribute name=\"label\"/></component>";
    let reader = EntityReader::new(Cursor::new(content));
    assert_eq!(read_bytewise(reader), expected(content));
}

#[test]
fn blockwise_reads_agree_with_bytewise_reads() {
    let content = "<component>body with &nbsp; and &copy; references</component>";
    let bytewise = read_bytewise(EntityReader::new(Cursor::new(content)));
    for block in [3, 7, 64, 4096] {
        let blockwise = read_blockwise(EntityReader::new(Cursor::new(content)), block);
        assert_eq!(blockwise, bytewise, "block size {block} disagrees");
    }
    assert_eq!(bytewise, expected(content));
}

#[test]
fn read_to_end_yields_prefix_then_content() {
    let content = "abc";
    let mut reader = EntityReader::new(Cursor::new(content));
    let mut out = Vec::new();
    reader.read_to_end(&mut out).expect("read_to_end failed");
    assert_eq!(out, expected(content));
}

#[test]
fn empty_upstream_yields_exactly_the_prefix() {
    let reader = EntityReader::new(Cursor::new(""));
    assert_eq!(read_bytewise(reader), ENTITY_DTD.as_bytes());
}

#[test]
fn eof_is_sticky_after_the_single_swap() {
    let content = "x";
    let mut reader = EntityReader::new(Cursor::new(content));
    let mut out = Vec::new();
    reader.read_to_end(&mut out).expect("read_to_end failed");
    assert_eq!(out, expected(content));

    // Probing past exhaustion must keep returning EOF and must never
    // resurface prefix bytes.
    let mut buf = [0u8; 32];
    for _ in 0..3 {
        assert_eq!(reader.read(&mut buf).expect("read failed"), 0);
    }
}

#[test]
fn prefix_appears_exactly_once() {
    // Content that itself looks like the prefix must not confuse anything.
    let content = format!("{}tail", &*ENTITY_DTD);
    let mut reader = EntityReader::new(Cursor::new(content.clone()));
    let mut out = String::new();
    reader.read_to_string(&mut out).expect("read_to_string failed");
    assert_eq!(out, format!("{}{}", &*ENTITY_DTD, content));
}

#[test]
fn zero_length_reads_do_not_trigger_the_swap() {
    let content = "payload";
    let mut reader = EntityReader::new(Cursor::new(content));
    let mut empty = [0u8; 0];
    assert_eq!(reader.read(&mut empty).expect("read failed"), 0);
    assert_eq!(reader.read(&mut empty).expect("read failed"), 0);
    // The full prefix must still be there afterwards.
    assert_eq!(read_bytewise(reader), expected(content));
}

#[test]
fn bufread_entry_point_serves_the_same_stream() {
    let content = "line one\nline two\n";
    let mut reader = EntityReader::new(Cursor::new(content));
    let mut out = Vec::new();
    loop {
        let n = {
            let chunk = reader.fill_buf().expect("fill_buf failed");
            out.extend_from_slice(chunk);
            chunk.len()
        };
        if n == 0 {
            break;
        }
        reader.consume(n);
    }
    assert_eq!(out, expected(content));
}

#[test]
fn lines_span_the_prefix_boundary() {
    // The DTD ends with a newline; the first upstream line must come out as
    // its own line, not glued onto prefix bytes.
    let content = "first\nsecond";
    let reader = EntityReader::new(Cursor::new(content));
    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>().expect("lines failed");
    assert_eq!(lines.last().map(String::as_str), Some("second"));
    assert_eq!(lines[lines.len() - 2], "first");
}

/// Upstream source that fails on the first read.
struct FailingSource;

impl Read for FailingSource {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "source went away"))
    }
}

#[test]
fn upstream_errors_propagate_unchanged() {
    let mut reader = EntityReader::new(BufReader::new(FailingSource));
    let mut out = Vec::new();
    let err = reader.read_to_end(&mut out).expect_err("error should surface");
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    // Everything served before the failure is exactly the prefix.
    assert_eq!(out, ENTITY_DTD.as_bytes());
}

#[test]
fn into_inner_returns_the_upstream_source() {
    let mut reader = EntityReader::new(Cursor::new("tail"));
    let mut buf = [0u8; 8];
    reader.read(&mut buf).expect("read failed");
    let upstream = reader.into_inner();
    assert_eq!(upstream.position(), 0, "prefix reads must not touch upstream");
}
