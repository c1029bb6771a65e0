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
use crate::rgb32::Rgb32Layout;
use crate::ycc_error::{check_cbcr_fraction_bits, check_equal_length, YccError};
use crate::ycc_support::{Rgb32Format, YccLevel, YccOptions, YccPixel};
use crate::ycc_weights::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fixed-point contribution of every 8-bit value of each channel to one output
pub struct YccComponentWeights {
    pub r: [i32; 256],
    pub g: [i32; 256],
    pub b: [i32; 256],
}

impl YccComponentWeights {
    /// Entry `v` holds `w * (v << scale)`, `offset` is folded into the red entries
    fn new(wr: i32, wg: i32, wb: i32, scale: u32, offset: i32) -> Self {
        let mut weights = YccComponentWeights {
            r: [0; 256],
            g: [0; 256],
            b: [0; 256],
        };
        for (v, ((r, g), b)) in weights
            .r
            .iter_mut()
            .zip(weights.g.iter_mut())
            .zip(weights.b.iter_mut())
            .enumerate()
        {
            let v = (v as i32) << scale;
            *r = wr * v + offset;
            *g = wg * v;
            *b = wb * v;
        }
        weights
    }

    #[inline(always)]
    fn sum(&self, r: u8, g: u8, b: u8) -> i32 {
        self.r[r as usize] + self.g[g as usize] + self.b[b as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Lookup tables reproducing the scalar converter bit for bit.
///
/// With extra chroma fraction bits a single pixel converts as a uniform block,
/// see [crate::pixel_to_ycc]. Tables are immutable once built, different options
/// need a new instance.
pub struct Rgb8ToYccTable {
    pub y: YccComponentWeights,
    pub cb: YccComponentWeights,
    pub cr: YccComponentWeights,
    options: YccOptions,
    cbcr_offset: i32,
}

impl Rgb8ToYccTable {
    pub fn new(options: YccOptions) -> Result<Self, YccError> {
        let bits = options.cbcr_add_fraction_bits;
        check_cbcr_fraction_bits(bits)?;
        let y_offset = y_offset(options.level);
        let cbcr_offset = cbcr_offset(options.level, bits);
        log::debug!(
            "Building RGB to YCbCr lookup tables, level {:?}, {} additional CbCr fraction bits",
            options.level,
            bits
        );
        Ok(Rgb8ToYccTable {
            y: YccComponentWeights::new(Y_R_WEIGHT, Y_G_WEIGHT, Y_B_WEIGHT, 0, y_offset),
            cb: YccComponentWeights::new(CB_R_WEIGHT, CB_G_WEIGHT, CB_B_WEIGHT, bits, cbcr_offset),
            cr: YccComponentWeights::new(CR_R_WEIGHT, CR_G_WEIGHT, CR_B_WEIGHT, bits, cbcr_offset),
            options,
            cbcr_offset,
        })
    }

    #[inline]
    pub fn options(&self) -> YccOptions {
        self.options
    }

    #[inline(always)]
    fn cbcr_shift(&self) -> u32 {
        FRACTION_BITS + self.options.cbcr_add_fraction_bits
    }

    #[inline(always)]
    pub fn rgb_to_y(&self, r: u8, g: u8, b: u8) -> i32 {
        self.y.sum(r, g, b) >> FRACTION_BITS
    }

    #[inline(always)]
    pub fn rgb_to_cb(&self, r: u8, g: u8, b: u8) -> i32 {
        self.cb.sum(r, g, b) >> self.cbcr_shift()
    }

    #[inline(always)]
    pub fn rgb_to_cr(&self, r: u8, g: u8, b: u8) -> i32 {
        self.cr.sum(r, g, b) >> self.cbcr_shift()
    }

    /// Same as [Rgb8ToYccTable::rgb_to_cb] with a per-call bias on the accumulator
    #[inline(always)]
    pub fn rgb_to_cb_biased(&self, r: u8, g: u8, b: u8, bias: i32) -> i32 {
        let bias = cbcr_bias_offset(bias, self.options.cbcr_add_fraction_bits);
        self.cb.sum(r, g, b).wrapping_add(bias) >> self.cbcr_shift()
    }

    /// Same as [Rgb8ToYccTable::rgb_to_cr] with a per-call bias on the accumulator
    #[inline(always)]
    pub fn rgb_to_cr_biased(&self, r: u8, g: u8, b: u8, bias: i32) -> i32 {
        let bias = cbcr_bias_offset(bias, self.options.cbcr_add_fraction_bits);
        self.cr.sum(r, g, b).wrapping_add(bias) >> self.cbcr_shift()
    }

    #[inline]
    pub fn convert(&self, pixel: u32, layout: Rgb32Layout) -> YccPixel {
        let (r, g, b) = (layout.red(pixel), layout.green(pixel), layout.blue(pixel));
        YccPixel::new(
            self.rgb_to_y(r, g, b),
            self.rgb_to_cb(r, g, b),
            self.rgb_to_cr(r, g, b),
        )
    }

    #[inline]
    pub fn convert_biased(&self, pixel: u32, layout: Rgb32Layout, bias: i32) -> YccPixel {
        let (r, g, b) = (layout.red(pixel), layout.green(pixel), layout.blue(pixel));
        YccPixel::new(
            self.rgb_to_y(r, g, b),
            self.rgb_to_cb_biased(r, g, b, bias),
            self.rgb_to_cr_biased(r, g, b, bias),
        )
    }

    /// Averaged Cb and Cr of a block of exactly `1 << cbcr_add_fraction_bits` pixels.
    ///
    /// Matches [crate::rgb_to_ycc] fed with the component sums of the block.
    pub fn convert_block(
        &self,
        block: &[u32],
        layout: Rgb32Layout,
        bias: i32,
    ) -> Result<(i32, i32), YccError> {
        let bits = self.options.cbcr_add_fraction_bits;
        check_equal_length(1usize << bits, block.len())?;
        let (mut cb, mut cr) = (0i32, 0i32);
        // Entries carry the block scale, dropping it per pixel is exact
        for &pixel in block.iter() {
            let (r, g, b) = (layout.red(pixel), layout.green(pixel), layout.blue(pixel));
            cb = cb.wrapping_add((self.cb.sum(r, g, b) - self.cbcr_offset) >> bits);
            cr = cr.wrapping_add((self.cr.sum(r, g, b) - self.cbcr_offset) >> bits);
        }
        let offset = self.cbcr_offset.wrapping_add(cbcr_bias_offset(bias, bits));
        Ok((
            cb.wrapping_add(offset) >> self.cbcr_shift(),
            cr.wrapping_add(offset) >> self.cbcr_shift(),
        ))
    }
}

/// Builds sample level tables keeping `cbcr_add_fraction_bits` extra chroma bits
pub fn build_weight_table(cbcr_add_fraction_bits: u32) -> Result<Rgb8ToYccTable, YccError> {
    Rgb8ToYccTable::new(YccOptions::new(YccLevel::Sample, cbcr_add_fraction_bits))
}

/// Converts a packed pixel in native byte order through `table`
#[inline]
pub fn convert_pixel_table(pixel: u32, format: Rgb32Format, table: &Rgb8ToYccTable) -> YccPixel {
    table.convert(pixel, Rgb32Layout::native(format))
}
