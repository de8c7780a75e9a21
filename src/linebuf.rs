use std::str::Utf8Error;

/// Append-and-scan buffer that reassembles newline-delimited lines out of
/// an arbitrary sequence of byte chunks. Bytes after the last newline stay
/// buffered until a later chunk completes them.
#[derive(Debug, Default)]
pub(crate) struct LineBuffer {
    buf: Vec<u8>,
}

impl LineBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Pops the next complete line, without its newline. Returns `Ok(None)`
    /// when no full line is buffered yet. Only complete lines are decoded,
    /// so a multi-byte character split across chunks never fails here.
    pub(crate) fn next_line(&mut self) -> Result<Option<String>, Utf8Error> {
        let Some(pos) = self.buf.iter().position(|&b| b == b'\n') else {
            return Ok(None);
        };
        let rest = self.buf.split_off(pos + 1);
        let mut line = std::mem::replace(&mut self.buf, rest);
        line.pop();
        let line = core::str::from_utf8(&line)?.to_string();
        Ok(Some(line))
    }
}
