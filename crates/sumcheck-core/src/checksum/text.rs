//! Lossy streaming UTF-8 decoding.
//!
//! Input is decoded as UTF-8 with an optional leading byte-order mark. Bytes
//! that do not decode are dropped. The output is the re-encoded text, i.e. the
//! input minus the BOM and minus every invalid sequence. Incomplete sequences
//! at a chunk boundary are carried over to the next chunk, so the result does
//! not depend on how the input is split.

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Incremental decoder; feed chunks, then call [`LossyUtf8::finish`].
#[derive(Debug)]
pub struct LossyUtf8 {
    pending: Vec<u8>,
    at_start: bool,
}

impl Default for LossyUtf8 {
    fn default() -> Self {
        Self::new()
    }
}

impl LossyUtf8 {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            at_start: true,
        }
    }

    /// Decode a complete buffer in one go.
    pub fn decode_all(mut self, bytes: &[u8]) -> String {
        let mut out = Vec::with_capacity(bytes.len());
        self.feed(bytes, &mut out);
        self.finish(&mut out);
        // Only valid UTF-8 is ever appended.
        String::from_utf8(out).unwrap_or_default()
    }

    /// Decode `input`, appending valid UTF-8 to `out`.
    pub fn feed(&mut self, input: &[u8], out: &mut Vec<u8>) {
        self.pending.extend_from_slice(input);
        if self.at_start {
            if self.pending.len() < BOM.len() && BOM.starts_with(&self.pending) {
                return;
            }
            if self.pending.starts_with(BOM) {
                self.pending.drain(..BOM.len());
            }
            self.at_start = false;
        }
        let consumed = drain_valid(&self.pending, out, false);
        self.pending.drain(..consumed);
    }

    /// Flush at end of input. A trailing incomplete sequence is dropped.
    pub fn finish(&mut self, out: &mut Vec<u8>) {
        self.at_start = false;
        drain_valid(&self.pending, out, true);
        self.pending.clear();
    }
}

/// Decode a complete buffer that starts a stream.
pub fn decode_lossy(bytes: &[u8]) -> String {
    LossyUtf8::new().decode_all(bytes)
}

/// Copy the valid parts of `bytes` to `out`, skipping invalid sequences.
/// Returns how many bytes were consumed; unless `last`, an incomplete
/// sequence at the end is left unconsumed.
fn drain_valid(bytes: &[u8], out: &mut Vec<u8>, last: bool) -> usize {
    let mut consumed = 0;
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(s) => {
                out.extend_from_slice(s.as_bytes());
                return bytes.len();
            }
            Err(e) => {
                let valid = e.valid_up_to();
                out.extend_from_slice(&rest[..valid]);
                match e.error_len() {
                    Some(bad) => {
                        consumed += valid + bad;
                        rest = &rest[valid + bad..];
                    }
                    None if last => return bytes.len(),
                    None => return consumed + valid,
                }
            }
        }
    }
}
