//! Length-delimited protobuf framing
//!
//! A record file is a plain concatenation of frames, each one a protobuf
//! varint holding the payload length followed by the encoded message. There is
//! no header, so a sequence file can be decoded one frame at a time.

use crate::{Error, Result};
use prost::Message;
use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read, Write};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Maximum encoded size of a 64-bit varint
const MAX_VARINT_LEN: usize = 10;

/// Encode one record as a frame.
pub fn encode_frame<M: Message>(msg: &M) -> Vec<u8> {
    msg.encode_length_delimited_to_vec()
}

/// Append one frame to `writer`.
pub fn write_frame<W: Write, M: Message>(writer: &mut W, msg: &M) -> io::Result<()> {
    writer.write_all(&encode_frame(msg))
}

fn decode_error(path: &Path, reason: impl ToString) -> Error {
    let err = Error::Decode {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };
    log::warn!("{err}");
    err
}

/// Read the varint length prefix of the next frame.
///
/// Returns `None` when the stream ends exactly on a frame boundary.
fn read_delimiter<R: Read>(reader: &mut R, path: &Path) -> Result<Option<usize>> {
    let mut prefix = [0u8; MAX_VARINT_LEN];
    let mut len = 0;

    loop {
        let mut byte = [0u8; 1];
        match reader.read(&mut byte) {
            Ok(0) if len == 0 => return Ok(None),
            Ok(0) => return Err(decode_error(path, "stream ends inside a length prefix")),
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }

        prefix[len] = byte[0];
        len += 1;

        if byte[0] & 0x80 == 0 {
            break;
        }
        if len == MAX_VARINT_LEN {
            return Err(decode_error(path, "length prefix longer than 10 bytes"));
        }
    }

    prost::decode_length_delimiter(&prefix[..len])
        .map(Some)
        .map_err(|e| decode_error(path, e))
}

/// Read and decode the next frame from `reader`.
///
/// `path` is only used to label errors.
pub fn read_frame<M, R>(reader: &mut R, path: &Path) -> Result<Option<M>>
where
    M: Message + Default,
    R: Read,
{
    let Some(length) = read_delimiter(reader, path)? else {
        return Ok(None);
    };

    // Read through `take` so a corrupt length never drives a huge allocation.
    let mut payload = Vec::new();
    reader
        .by_ref()
        .take(length as u64)
        .read_to_end(&mut payload)?;
    if payload.len() != length {
        return Err(decode_error(
            path,
            format!(
                "frame declares {length} bytes but only {} remain",
                payload.len()
            ),
        ));
    }

    log::trace!("Decoded {length}-byte frame from {}", path.display());
    M::decode(payload.as_slice())
        .map(Some)
        .map_err(|e| decode_error(path, e))
}

/// Decode a file that must hold exactly one frame.
pub fn decode_single<M, R>(reader: &mut R, path: &Path) -> Result<M>
where
    M: Message + Default,
    R: Read,
{
    let msg = read_frame(reader, path)?
        .ok_or_else(|| decode_error(path, "expected one record, found none"))?;

    if read_delimiter(reader, path)?.is_some() {
        return Err(decode_error(path, "unexpected data after the single record"));
    }

    Ok(msg)
}

/// Lazy, single-pass iterator over the frames of one record file.
///
/// The file is closed as soon as the last frame has been read or a frame
/// fails to decode; the iterator yields nothing afterwards.
pub struct RecordIter<M> {
    source: Option<(BufReader<File>, PathBuf)>,
    _marker: PhantomData<fn() -> M>,
}

impl<M> RecordIter<M> {
    /// An iterator with no backing file.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            source: None,
            _marker: PhantomData,
        }
    }

    pub fn new(file: File, path: PathBuf, buffer_capacity: usize) -> Self {
        Self {
            source: Some((BufReader::with_capacity(buffer_capacity, file), path)),
            _marker: PhantomData,
        }
    }

    /// Path of the file being decoded, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.source.as_ref().map(|(_, path)| path.as_path())
    }
}

impl<M: Message + Default> RecordIter<M> {
    /// Decode every remaining record, stopping at the first error.
    pub fn read_all(self) -> Result<Vec<M>> {
        self.collect()
    }
}

impl<M: Message + Default> Iterator for RecordIter<M> {
    type Item = Result<M>;

    fn next(&mut self) -> Option<Self::Item> {
        let (reader, path) = self.source.as_mut()?;

        match read_frame(reader, path.as_path()) {
            Ok(Some(msg)) => Some(Ok(msg)),
            Ok(None) => {
                self.source = None;
                None
            }
            Err(e) => {
                self.source = None;
                Some(Err(e))
            }
        }
    }
}

impl<M: Message + Default> FusedIterator for RecordIter<M> {}
