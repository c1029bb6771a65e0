/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use std::fmt::{Display, Formatter};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Packed 32-bit pixel layouts understood by the converters.
///
/// Names follow memory order on a little-endian machine: `Rgba32` keeps red in the
/// lowest byte, `Bgra32` keeps blue there. The fourth byte is alpha or unused.
pub enum Rgb32Format {
    Rgba32 = 0,
    Bgra32 = 1,
}

impl From<u8> for Rgb32Format {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => Rgb32Format::Rgba32,
            1 => Rgb32Format::Bgra32,
            _ => {
                unimplemented!("Unknown value")
            }
        }
    }
}

impl Display for Rgb32Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rgb32Format::Rgba32 => f.write_str("Rgb32Format::Rgba32"),
            Rgb32Format::Bgra32 => f.write_str("Rgb32Format::Bgra32"),
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Byte order a packed pixel was produced with
pub enum ByteOrder {
    LittleEndian = 0,
    BigEndian = 1,
}

impl ByteOrder {
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::LittleEndian;
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::BigEndian;
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::NATIVE
    }
}

impl From<u8> for ByteOrder {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => ByteOrder::LittleEndian,
            1 => ByteOrder::BigEndian,
            _ => {
                unimplemented!("Unknown value")
            }
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Colour channel of a packed pixel, the fourth byte is never addressed
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl From<u8> for Channel {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => Channel::Red,
            1 => Channel::Green,
            2 => Channel::Blue,
            _ => {
                unimplemented!("Unknown value")
            }
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Red => f.write_str("Channel::Red"),
            Channel::Green => f.write_str("Channel::Green"),
            Channel::Blue => f.write_str("Channel::Blue"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Number of values processed per vector operation.
///
/// `Narrow` lanes carry 16-bit samples and accumulate into 32-bit halves,
/// `Wide` lanes carry 32-bit samples directly. `One` is plain scalar code and is
/// available everywhere.
pub enum LaneWidth {
    One,
    Narrow,
    Wide,
}

impl Display for LaneWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LaneWidth::One => f.write_str("LaneWidth::One"),
            LaneWidth::Narrow => f.write_str("LaneWidth::Narrow"),
            LaneWidth::Wide => f.write_str("LaneWidth::Wide"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// Output level of the converted samples
pub enum YccLevel {
    /// Y, Cb, Cr ∈ [0, 255]
    #[default]
    Sample,
    /// Every component shifted by -128, Y, Cb, Cr ∈ [-128, 127], as consumed by a forward DCT
    Centered,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// Precision setup shared by every conversion strategy.
///
/// `cbcr_add_fraction_bits` keeps that many extra fractional bits in Cb and Cr,
/// so chroma comes out scaled by `1 << cbcr_add_fraction_bits`. Luma is never
/// affected.
pub struct YccOptions {
    pub level: YccLevel,
    pub cbcr_add_fraction_bits: u32,
}

impl YccOptions {
    pub const fn new(level: YccLevel, cbcr_add_fraction_bits: u32) -> Self {
        YccOptions {
            level,
            cbcr_add_fraction_bits,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct YccPixel {
    pub y: i32,
    pub cb: i32,
    pub cr: i32,
}

impl YccPixel {
    #[inline]
    pub const fn new(y: i32, cb: i32, cr: i32) -> Self {
        YccPixel { y, cb, cr }
    }
}
