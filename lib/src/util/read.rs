use std::io::{Cursor, Read, Seek, SeekFrom};

use binrw::{BinRead, BinReaderExt, Endian};

use crate::format::error::{DecodeError, DecodeResult};

/// A record with a constant on-disk size.
pub trait FixedRecord: BinRead {
    /// Name used in error messages.
    const NAME: &'static str;
    /// Exact number of bytes one record occupies in the file.
    const WIRE_SIZE: u64;
}

macro_rules! scalar_record {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(impl FixedRecord for $ty {
            const NAME: &'static str = $name;
            const WIRE_SIZE: u64 = std::mem::size_of::<$ty>() as u64;
        })*
    };
}

scalar_record! {
    u16 => "u16",
    i32 => "i32",
    f32 => "f32",
}

/// Checks that decoding `T` consumes exactly `T::WIRE_SIZE` bytes.
///
/// Decodes one record from a zeroed buffer twice the declared size and compares the cursor
/// position afterwards.
pub fn verify_layout<T>() -> DecodeResult<()>
where
    T: FixedRecord,
    for<'a> T::Args<'a>: Default + Clone,
{
    let zeroed = vec![0u8; (T::WIRE_SIZE * 2) as usize + 1];
    let mut cursor = Cursor::new(zeroed.as_slice());
    let actual = match cursor.read_type::<T>(Endian::Little) {
        Ok(_) => cursor.position(),
        // Ran past twice the declared width
        Err(_) => zeroed.len() as u64,
    };
    if actual != T::WIRE_SIZE {
        return Err(DecodeError::InternalLayoutError {
            record: T::NAME,
            expected: T::WIRE_SIZE,
            actual,
        });
    }
    Ok(())
}

/// Sequential little-endian reader over a seekable byte source.
///
/// Every read either yields the full amount requested or fails with
/// [`DecodeError::Truncated`].
pub struct RecordReader<R> {
    inner: R,
    len: u64,
    endian: Endian,
}

impl<R: Read + Seek> RecordReader<R> {
    pub fn new(mut inner: R) -> DecodeResult<Self> {
        let start =
            inner.stream_position().map_err(|source| DecodeError::Stream { offset: 0, source })?;
        let len = inner
            .seek(SeekFrom::End(0))
            .and_then(|len| inner.seek(SeekFrom::Start(start)).map(|_| len))
            .map_err(|source| DecodeError::Stream { offset: start, source })?;
        Ok(Self { inner, len, endian: Endian::Little })
    }

    pub fn position(&mut self) -> u64 {
        // Position was valid when `new` returned and only our reads move it
        self.inner.stream_position().unwrap_or(self.len)
    }

    pub fn remaining(&mut self) -> u64 { self.len.saturating_sub(self.position()) }

    /// Reads exactly `count` raw bytes.
    pub fn read_bytes(&mut self, count: usize, what: &'static str) -> DecodeResult<Vec<u8>> {
        let offset = self.position();
        if self.remaining() < count as u64 {
            return Err(DecodeError::Truncated { what, offset });
        }
        let mut buf = vec![0u8; count];
        self.inner.read_exact(&mut buf).map_err(|source| {
            if source.kind() == std::io::ErrorKind::UnexpectedEof {
                DecodeError::Truncated { what, offset }
            } else {
                DecodeError::Stream { offset, source }
            }
        })?;
        Ok(buf)
    }

    pub fn read_record<T>(&mut self) -> DecodeResult<T>
    where
        T: FixedRecord,
        for<'a> T::Args<'a>: Default + Clone,
    {
        let offset = self.position();
        if self.remaining() < T::WIRE_SIZE {
            return Err(DecodeError::Truncated { what: T::NAME, offset });
        }
        self.inner.read_type(self.endian).map_err(|e| DecodeError::from_binrw(e, T::NAME, offset))
    }

    /// Reads a table of `count` records.
    ///
    /// The whole table must fit in the remaining input before anything is allocated.
    pub fn read_records<T>(&mut self, count: usize) -> DecodeResult<Vec<T>>
    where
        T: FixedRecord,
        for<'a> T::Args<'a>: Default + Clone,
    {
        let offset = self.position();
        let needed = (count as u64).checked_mul(T::WIRE_SIZE);
        if needed.map_or(true, |needed| needed > self.remaining()) {
            return Err(DecodeError::Truncated { what: T::NAME, offset });
        }
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.read_record()?);
        }
        Ok(out)
    }
}
