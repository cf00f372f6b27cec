//! Streaming reader that prepends the entity DTD to a markup source.

use std::io::{self, BufRead, Cursor, Read};

use crate::entities::ENTITY_DTD;

/// Reader adapter that serves [`ENTITY_DTD`] ahead of the wrapped source.
///
/// A downstream parser sees one continuous stream: the synthetic DTD
/// followed by the source's full content. The prefix is streamed lazily, so
/// arbitrarily large sources are never buffered in full and the wrapped
/// source keeps its own streaming behavior end to end.
///
/// The adapter is stateful and expects a single sequential reader, matching
/// how a streaming parser consumes its input.
pub struct EntityReader<R> {
    // Some while the DTD is still being served; cleared exactly once, the
    // first time the prefix reports end of stream.
    prefix: Option<Cursor<&'static [u8]>>,
    upstream: R,
}

impl<R: BufRead> EntityReader<R> {
    /// Wrap `upstream` so that the entity DTD is read before its content.
    pub fn new(upstream: R) -> Self {
        Self {
            prefix: Some(Cursor::new(ENTITY_DTD.as_bytes())),
            upstream,
        }
    }

    /// Unwraps the adapter, returning the upstream source.
    pub fn into_inner(self) -> R {
        self.upstream
    }

    /// The single fallback point shared by both read entry points: when the
    /// prefix hits end of stream, drop it so every subsequent call reads
    /// upstream directly. End of stream is only ever reported to the caller
    /// once upstream itself is exhausted.
    fn swap_if_prefix_exhausted(&mut self) -> io::Result<()> {
        if let Some(prefix) = &mut self.prefix {
            if prefix.fill_buf()?.is_empty() {
                self.prefix = None;
            }
        }
        Ok(())
    }
}

impl<R: BufRead> Read for EntityReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // A zero-length destination must not be mistaken for prefix EOF.
        if buf.is_empty() {
            return Ok(0);
        }
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl<R: BufRead> BufRead for EntityReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.swap_if_prefix_exhausted()?;
        match &mut self.prefix {
            Some(prefix) => prefix.fill_buf(),
            None => self.upstream.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match &mut self.prefix {
            Some(prefix) => prefix.consume(amt),
            None => self.upstream.consume(amt),
        }
    }
}
