//! RIFF chunk walking.

use byteorder::{ByteOrder, LittleEndian};

/// Size of a chunk header (4-byte id + 4-byte little-endian size).
pub(crate) const CHUNK_HEADER_LEN: usize = 8;

/// One RIFF sub-chunk borrowed from the input buffer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Chunk<'a> {
    /// Four-character chunk id.
    pub id: [u8; 4],
    /// Offset of the chunk header within the file.
    pub offset: usize,
    /// Size recorded in the chunk header.
    pub declared_size: u32,
    /// Chunk body, clamped to the bytes actually present.
    pub body: &'a [u8],
}

impl Chunk<'_> {
    /// True if the header declares more bytes than the buffer holds.
    pub fn is_truncated(&self) -> bool {
        (self.declared_size as usize) > self.body.len()
    }

    /// Printable chunk id for log and error messages.
    pub fn id_lossy(&self) -> String {
        String::from_utf8_lossy(&self.id).into_owned()
    }
}

/// Iterates over the sub-chunks of a RIFF body.
///
/// Chunks are word-aligned: an odd-sized body is followed by one pad byte.
/// Iteration stops when fewer than [`CHUNK_HEADER_LEN`] bytes remain.
pub(crate) struct ChunkIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ChunkIter<'a> {
    /// Starts walking `data` at byte offset `start`.
    pub fn new(data: &'a [u8], start: usize) -> Self {
        Self { data, pos: start }
    }
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.pos;
        if offset.checked_add(CHUNK_HEADER_LEN)? > self.data.len() {
            return None;
        }

        let mut id = [0u8; 4];
        id.copy_from_slice(&self.data[offset..offset + 4]);
        let declared_size = LittleEndian::read_u32(&self.data[offset + 4..offset + 8]);

        let body_start = offset + CHUNK_HEADER_LEN;
        let body_end = body_start
            .saturating_add(declared_size as usize)
            .min(self.data.len());
        let padded = (declared_size as usize).saturating_add(declared_size as usize & 1);

        self.pos = body_start.saturating_add(padded);

        Some(Chunk {
            id,
            offset,
            declared_size,
            body: &self.data[body_start..body_end],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(id);
        out.extend_from_slice(&(body.len() as u32).to_le_bytes());
        out.extend_from_slice(body);
        if body.len() % 2 == 1 {
            out.push(0);
        }
        out
    }

    #[test]
    fn test_walks_chunks_in_order() {
        let mut data = chunk(b"fmt ", &[0u8; 16]);
        data.extend(chunk(b"data", &[1, 2, 3, 4]));

        let ids: Vec<[u8; 4]> = ChunkIter::new(&data, 0).map(|c| c.id).collect();
        assert_eq!(ids, vec![*b"fmt ", *b"data"]);
    }

    #[test]
    fn test_odd_chunk_is_padded() {
        let mut data = chunk(b"LIST", &[9, 9, 9]);
        data.extend(chunk(b"data", &[7, 7]));

        let chunks: Vec<Chunk> = ChunkIter::new(&data, 0).collect();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].body, &[9, 9, 9]);
        assert_eq!(chunks[1].offset, 12);
        assert_eq!(chunks[1].body, &[7, 7]);
    }

    #[test]
    fn test_truncated_body_is_clamped() {
        let mut data = Vec::new();
        data.extend_from_slice(b"data");
        data.extend_from_slice(&100u32.to_le_bytes());
        data.extend_from_slice(&[5, 6, 7]);

        let mut iter = ChunkIter::new(&data, 0);
        let c = iter.next().unwrap();
        assert!(c.is_truncated());
        assert_eq!(c.body, &[5, 6, 7]);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_huge_declared_size_does_not_overflow() {
        let mut data = Vec::new();
        data.extend_from_slice(b"junk");
        data.extend_from_slice(&u32::MAX.to_le_bytes());

        let mut iter = ChunkIter::new(&data, 0);
        let c = iter.next().unwrap();
        assert!(c.body.is_empty());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_short_tail_yields_nothing() {
        let data = [b'R', b'I', b'F'];
        assert!(ChunkIter::new(&data, 0).next().is_none());
    }
}
