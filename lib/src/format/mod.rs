pub mod bone;
pub mod error;
pub mod geometry;
pub mod header;
pub mod ik;
pub mod model;
pub mod morph;
pub mod names;

use std::{
    borrow::Cow,
    fmt::{Debug, Formatter},
    io::{Read, Seek},
};

use binrw::{binread, BinRead, BinResult, Endian};
use encoding_rs::SHIFT_JIS;
use serde::{ser, Serializer};
use serde_derive::Serialize;

use crate::util::read::FixedRecord;

#[binread]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[binread]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// Homogeneous point with `w = 1.0`.
    #[inline]
    pub fn to_point(self) -> [f32; 4] { [self.x, self.y, self.z, 1.0] }
}

#[binread]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct ColorRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// NUL-padded legacy (Shift-JIS) text stored in an `N` byte field.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct FixedString<const N: usize>(pub [u8; N]);

impl<const N: usize> FixedString<N> {
    /// Raw bytes up to the first NUL, or the whole field if there is none.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        let len = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        &self.0[..len]
    }

    #[inline]
    pub fn contains(&self, needle: &[u8]) -> bool {
        !needle.is_empty() && self.bytes().windows(needle.len()).any(|w| w == needle)
    }

    /// Shift-JIS decoded text; malformed sequences become U+FFFD.
    pub fn text(&self) -> Cow<'_, str> { SHIFT_JIS.decode_without_bom_handling(self.bytes()).0 }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self { Self([0; N]) }
}

impl<const N: usize> Debug for FixedString<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{:?}", self.text()) }
}

impl<const N: usize> BinRead for FixedString<N> {
    type Args<'a> = ();

    fn read_options<R: Read + Seek>(
        reader: &mut R,
        endian: Endian,
        args: Self::Args<'_>,
    ) -> BinResult<Self> {
        <[u8; N]>::read_options(reader, endian, args).map(Self)
    }
}

impl<const N: usize> FixedRecord for FixedString<N> {
    const NAME: &'static str = "text";
    const WIRE_SIZE: u64 = N as u64;
}

impl<const N: usize> ser::Serialize for FixedString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text())
    }
}
