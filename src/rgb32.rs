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
#![forbid(unsafe_code)]
use crate::ycc_support::{ByteOrder, Channel, Rgb32Format};

const ALPHA_INDEX: u32 = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Describes where red, green and blue live inside a packed 32-bit pixel.
///
/// Semantic byte `index` of the format sits at bit `8 * index` for little-endian
/// producers and at bit `8 * (3 - index)` for big-endian ones.
pub struct Rgb32Layout {
    pub format: Rgb32Format,
    pub byte_order: ByteOrder,
}

impl Rgb32Layout {
    #[inline]
    pub const fn new(format: Rgb32Format, byte_order: ByteOrder) -> Self {
        Rgb32Layout { format, byte_order }
    }

    /// Layout for pixels produced on this machine
    #[inline]
    pub const fn native(format: Rgb32Format) -> Self {
        Rgb32Layout::new(format, ByteOrder::NATIVE)
    }

    #[inline(always)]
    pub const fn channel_index(&self, channel: Channel) -> u32 {
        match self.format {
            Rgb32Format::Rgba32 => match channel {
                Channel::Red => 0,
                Channel::Green => 1,
                Channel::Blue => 2,
            },
            Rgb32Format::Bgra32 => match channel {
                Channel::Red => 2,
                Channel::Green => 1,
                Channel::Blue => 0,
            },
        }
    }

    #[inline(always)]
    const fn shift(&self, index: u32) -> u32 {
        match self.byte_order {
            ByteOrder::LittleEndian => index * 8,
            ByteOrder::BigEndian => (3 - index) * 8,
        }
    }

    #[inline(always)]
    pub const fn channel_shift(&self, channel: Channel) -> u32 {
        self.shift(self.channel_index(channel))
    }

    #[inline(always)]
    pub const fn component(&self, pixel: u32, channel: Channel) -> u8 {
        ((pixel >> self.channel_shift(channel)) & 0xff) as u8
    }

    #[inline(always)]
    pub const fn red(&self, pixel: u32) -> u8 {
        self.component(pixel, Channel::Red)
    }

    #[inline(always)]
    pub const fn green(&self, pixel: u32) -> u8 {
        self.component(pixel, Channel::Green)
    }

    #[inline(always)]
    pub const fn blue(&self, pixel: u32) -> u8 {
        self.component(pixel, Channel::Blue)
    }

    /// Packs components back into a pixel, the alpha byte is always `0xFF`
    #[inline(always)]
    pub const fn pack(&self, r: u8, g: u8, b: u8) -> u32 {
        (0xffu32 << self.shift(ALPHA_INDEX))
            | ((r as u32) << self.channel_shift(Channel::Red))
            | ((g as u32) << self.channel_shift(Channel::Green))
            | ((b as u32) << self.channel_shift(Channel::Blue))
    }
}

/// Extracts one component of a pixel produced with native byte order
#[inline]
pub fn extract_component(pixel: u32, format: Rgb32Format, channel: Channel) -> u8 {
    Rgb32Layout::native(format).component(pixel, channel)
}

/// Packs components into a pixel with native byte order and opaque alpha
#[inline]
pub fn pack_components(r: u8, g: u8, b: u8, format: Rgb32Format) -> u32 {
    Rgb32Layout::native(format).pack(r, g, b)
}
