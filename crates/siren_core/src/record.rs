//! Materializing a full RIFF record once the scanner has confirmed a marker.

use crate::error::{CoreError, Result};
use crate::scanner::RIFF_MARKER;
use crate::traits::BlockSource;

/// Payload bytes are pulled in steps of this size, so a corrupt length field
/// fails at end-of-source instead of forcing one huge allocation up front.
const READ_STEP: usize = 64 * 1024;

/// A fully assembled record: marker (4) + length field (4, LE) + payload.
///
/// Invariant: `as_bytes().len() == 8 + declared_len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiffRecord {
    bytes: Vec<u8>,
}

impl RiffRecord {
    /// Builds a record around `payload`, encoding its length little-endian.
    pub fn from_payload(payload: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(8 + payload.len());
        bytes.extend_from_slice(RIFF_MARKER);
        bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        bytes.extend_from_slice(payload);
        Self { bytes }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total record size in bytes, header included.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// The length the record declares for its payload.
    pub fn declared_len(&self) -> u32 {
        u32::from_le_bytes([self.bytes[4], self.bytes[5], self.bytes[6], self.bytes[7]])
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes[8..]
    }
}

/// Reads the record body starting at `body_offset` (the byte right after the
/// marker): a 4-byte little-endian length, then exactly that many payload
/// bytes.
///
/// There is no up-front bounds check against the remaining source size; a
/// length field that claims more bytes than the source holds surfaces as
/// [`CoreError::TruncatedRecord`] once the read comes up short. A source that
/// ends inside the length field itself yields [`CoreError::TruncatedLength`].
/// Either way no partial record is ever returned.
pub fn read_record<S: BlockSource>(source: &mut S, body_offset: u64) -> Result<RiffRecord> {
    let mut length_bytes = [0u8; 4];
    let got = fill_exact(source, body_offset, &mut length_bytes)?;
    if got < length_bytes.len() {
        return Err(CoreError::TruncatedLength {
            offset: body_offset,
        });
    }

    let declared = u32::from_le_bytes(length_bytes);
    let marker_offset = body_offset - RIFF_MARKER.len() as u64;

    let mut bytes = Vec::new();
    bytes.extend_from_slice(RIFF_MARKER);
    bytes.extend_from_slice(&length_bytes);

    if declared > 0 {
        let mut step = vec![0u8; READ_STEP.min(declared as usize)];
        let mut remaining = declared as u64;
        let mut offset = body_offset + length_bytes.len() as u64;

        while remaining > 0 {
            let want = remaining.min(step.len() as u64) as usize;
            let got = fill_exact(source, offset, &mut step[..want])?;
            bytes.extend_from_slice(&step[..got]);
            offset += got as u64;
            remaining -= got as u64;

            if got < want {
                return Err(CoreError::TruncatedRecord {
                    offset: marker_offset,
                    declared: declared as u64,
                    available: declared as u64 - remaining,
                });
            }
        }
    }

    Ok(RiffRecord { bytes })
}

/// Fills as much of `buf` as the source can provide starting at `offset`.
/// Returns the number of bytes read; less than `buf.len()` means the source
/// ended.
fn fill_exact<S: BlockSource>(source: &mut S, offset: u64, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = source.read_chunk(offset + filled as u64, &mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MemSource(Vec<u8>);

    impl BlockSource for MemSource {
        fn read_chunk(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize> {
            if offset >= self.0.len() as u64 {
                return Ok(0);
            }
            let start = offset as usize;
            let n = buffer.len().min(self.0.len() - start);
            buffer[..n].copy_from_slice(&self.0[start..start + n]);
            Ok(n)
        }

        fn size(&self) -> u64 {
            self.0.len() as u64
        }
    }

    #[test]
    fn reads_record_after_marker() {
        let payload = [0xDE, 0xAD, 0xBE, 0xEF, 0x01];
        let mut data = vec![0u8; 10];
        data.extend_from_slice(b"RIFF");
        data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        data.extend_from_slice(&payload);
        data.extend_from_slice(&[0u8; 7]);

        let mut source = MemSource(data);
        let record = read_record(&mut source, 14).unwrap();

        assert_eq!(record.len(), 8 + payload.len());
        assert_eq!(record.declared_len(), payload.len() as u32);
        assert_eq!(record.payload(), &payload);
        assert_eq!(&record.as_bytes()[..4], b"RIFF");
    }

    #[test]
    fn zero_length_payload_yields_header_only_record() {
        let mut data = b"RIFF".to_vec();
        data.extend_from_slice(&0u32.to_le_bytes());

        let mut source = MemSource(data);
        let record = read_record(&mut source, 4).unwrap();

        assert_eq!(record.len(), 8);
        assert_eq!(record.declared_len(), 0);
        assert!(record.payload().is_empty());
    }

    #[test]
    fn truncated_length_field_is_an_error() {
        let mut data = b"RIFF".to_vec();
        data.extend_from_slice(&[0x08, 0x00]);

        let mut source = MemSource(data);
        let err = read_record(&mut source, 4).unwrap_err();
        assert!(matches!(err, CoreError::TruncatedLength { offset: 4 }));
    }

    #[test]
    fn short_payload_is_an_error() {
        let mut data = b"RIFF".to_vec();
        data.extend_from_slice(&100u32.to_le_bytes());
        data.extend_from_slice(&[0x55; 20]);

        let mut source = MemSource(data);
        let err = read_record(&mut source, 4).unwrap_err();
        match err {
            CoreError::TruncatedRecord {
                offset,
                declared,
                available,
            } => {
                assert_eq!(offset, 0);
                assert_eq!(declared, 100);
                assert_eq!(available, 20);
            }
            other => panic!("expected TruncatedRecord, got {other:?}"),
        }
    }

    #[test]
    fn from_payload_round_trips_through_accessors() {
        let record = RiffRecord::from_payload(b"atrac3");
        assert_eq!(record.declared_len(), 6);
        assert_eq!(record.payload(), b"atrac3");
        assert_eq!(record.len(), 14);
    }
}
