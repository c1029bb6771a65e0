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
//! BT.601 full range weights in 16 fractional bits and the rounding offsets
//! shared by the scalar, table and vector converters.
use crate::fixed_point::Fixed16;
use crate::ycc_support::{YccLevel, YccOptions};

pub const FRACTION_BITS: u32 = Fixed16::BITS;

pub const Y_R_WEIGHT: i32 = 19595;
pub const Y_G_WEIGHT: i32 = 38470;
pub const Y_B_WEIGHT: i32 = 7471;

pub const CB_R_WEIGHT: i32 = -11059;
pub const CB_G_WEIGHT: i32 = -21709;
pub const CB_B_WEIGHT: i32 = 32768;

pub const CR_R_WEIGHT: i32 = 32768;
pub const CR_G_WEIGHT: i32 = -27439;
pub const CR_B_WEIGHT: i32 = -5329;

/// Green weight paired with blue in 16-bit lanes
pub const Y_BG_WEIGHT: i32 = 16384;
/// Green weight paired with red in 16-bit lanes
pub const Y_RG_WEIGHT: i32 = Y_G_WEIGHT - Y_BG_WEIGHT;

/// Largest amount of extra chroma precision.
///
/// Component sums over `1 << 6` pixels still fit `i16` lanes and the chroma
/// accumulator stays inside `i32`.
pub const MAX_CBCR_ADD_FRACTION_BITS: u32 = 6;

const ROUNDING: i32 = Fixed16::ONE_HALF - 1;
const CENTER: i32 = Fixed16::from_i32(128);

const _: () = assert!(Y_R_WEIGHT + Y_G_WEIGHT + Y_B_WEIGHT == Fixed16::ONE);
const _: () = assert!(CB_R_WEIGHT + CB_G_WEIGHT + CB_B_WEIGHT == 0);
const _: () = assert!(CR_R_WEIGHT + CR_G_WEIGHT + CR_B_WEIGHT == 0);
const _: () = assert!(Y_R_WEIGHT <= i16::MAX as i32 && Y_RG_WEIGHT <= i16::MAX as i32);
const _: () = assert!(Y_B_WEIGHT <= i16::MAX as i32 && Y_BG_WEIGHT <= i16::MAX as i32);
const _: () = assert!(CB_R_WEIGHT >= i16::MIN as i32 && CB_G_WEIGHT >= i16::MIN as i32);
const _: () = assert!(CR_G_WEIGHT >= i16::MIN as i32 && CR_B_WEIGHT >= i16::MIN as i32);
const _: () = assert!(CB_B_WEIGHT == Fixed16::ONE_HALF && CR_R_WEIGHT == Fixed16::ONE_HALF);
const _: () = assert!((255 << MAX_CBCR_ADD_FRACTION_BITS) <= i16::MAX as i32);
const _: () = assert!(
    cbcr_offset(YccLevel::Sample, MAX_CBCR_ADD_FRACTION_BITS)
        <= i32::MAX - (255 << (MAX_CBCR_ADD_FRACTION_BITS + FRACTION_BITS - 1))
);

#[inline(always)]
pub const fn y_offset(level: YccLevel) -> i32 {
    match level {
        YccLevel::Sample => ROUNDING,
        YccLevel::Centered => ROUNDING - CENTER,
    }
}

/// Chroma rounding offset for component sums over `1 << cbcr_add_fraction_bits` pixels.
///
/// `cbcr_add_fraction_bits` must not exceed [MAX_CBCR_ADD_FRACTION_BITS].
#[inline(always)]
pub const fn cbcr_offset(level: YccLevel, cbcr_add_fraction_bits: u32) -> i32 {
    let shift = FRACTION_BITS + cbcr_add_fraction_bits;
    let rounding = (1 << (shift - 1)) - (1 << cbcr_add_fraction_bits);
    match level {
        YccLevel::Sample => (128 << shift) + rounding,
        YccLevel::Centered => rounding,
    }
}

/// Per-call bias added to the chroma accumulator, only with extra fraction bits
#[inline(always)]
pub const fn cbcr_bias_offset(bias: i32, cbcr_add_fraction_bits: u32) -> i32 {
    if cbcr_add_fraction_bits == 0 {
        0
    } else {
        bias
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Offsets and shifts resolved once per row or batch
pub struct YccRowParams {
    pub(crate) y_offset: i32,
    pub(crate) cbcr_offset: i32,
    /// `FRACTION_BITS + cbcr_add_fraction_bits`
    pub(crate) cbcr_shift: u32,
    pub(crate) block_bits: u32,
}

impl YccRowParams {
    /// `options` must already be validated against [MAX_CBCR_ADD_FRACTION_BITS]
    #[inline]
    pub(crate) const fn new(options: YccOptions, bias: i32) -> Self {
        let a = options.cbcr_add_fraction_bits;
        YccRowParams {
            y_offset: y_offset(options.level),
            cbcr_offset: cbcr_offset(options.level, a).wrapping_add(cbcr_bias_offset(bias, a)),
            cbcr_shift: FRACTION_BITS + a,
            block_bits: a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_are_rounded_bt601() {
        assert_eq!(Fixed16::from_f64(0.299), Y_R_WEIGHT);
        assert_eq!(Fixed16::from_f64(0.587), Y_G_WEIGHT);
        assert_eq!(Fixed16::from_f64(0.114), Y_B_WEIGHT);
        assert_eq!(Fixed16::from_f64(-0.16874), CB_R_WEIGHT);
        assert_eq!(Fixed16::from_f64(-0.33126), CB_G_WEIGHT);
        assert_eq!(Fixed16::from_f64(0.5), CB_B_WEIGHT);
        assert_eq!(Fixed16::from_f64(0.5), CR_R_WEIGHT);
        assert_eq!(Fixed16::from_f64(-0.41869), CR_G_WEIGHT);
        assert_eq!(Fixed16::from_f64(-0.08131), CR_B_WEIGHT);
        assert_eq!(Fixed16::from_f64(0.25), Y_BG_WEIGHT);
        assert_eq!(Y_RG_WEIGHT, 22086);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(y_offset(YccLevel::Sample), 32767);
        assert_eq!(y_offset(YccLevel::Centered), -128 * 65536 + 32767);
        assert_eq!(cbcr_offset(YccLevel::Sample, 0), 128 * 65536 + 32767);
        assert_eq!(cbcr_offset(YccLevel::Centered, 0), 32767);
        assert_eq!(cbcr_offset(YccLevel::Centered, 2), (1 << 17) - 4);
        assert_eq!(cbcr_offset(YccLevel::Sample, 2), (128 << 18) + (1 << 17) - 4);
        assert_eq!(
            cbcr_offset(YccLevel::Sample, MAX_CBCR_ADD_FRACTION_BITS),
            (128 << 22) + (1 << 21) - 64
        );
    }

    #[test]
    fn test_bias_ignored_without_extra_bits() {
        assert_eq!(cbcr_bias_offset(5, 0), 0);
        assert_eq!(cbcr_bias_offset(1, 1), 1);
        assert_eq!(cbcr_bias_offset(-3, 6), -3);
    }

    #[test]
    fn test_row_params() {
        let params = YccRowParams::new(YccOptions::new(YccLevel::Sample, 2), 1);
        assert_eq!(params.y_offset, 32767);
        assert_eq!(params.cbcr_offset, (128 << 18) + (1 << 17) - 4 + 1);
        assert_eq!(params.cbcr_shift, 18);
        assert_eq!(params.block_bits, 2);
        let params = YccRowParams::new(YccOptions::default(), 7);
        assert_eq!(params.cbcr_offset, cbcr_offset(YccLevel::Sample, 0));
        assert_eq!(params.cbcr_shift, 16);
    }
}
