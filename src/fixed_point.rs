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

/// Signed 32-bit fixed-point helper with `FRACTION_BITS` fractional bits.
///
/// Values are plain `i32`, the type only carries the scale. Conversions from `f64`
/// round half away from zero, which is what the colour weights are derived with.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FixedPoint<const FRACTION_BITS: u32>;

impl<const FRACTION_BITS: u32> FixedPoint<FRACTION_BITS> {
    pub const BITS: u32 = FRACTION_BITS;
    pub const ONE: i32 = 1 << FRACTION_BITS;
    pub const ONE_HALF: i32 = 1 << (FRACTION_BITS - 1);

    #[inline(always)]
    pub const fn from_i32(v: i32) -> i32 {
        v << FRACTION_BITS
    }

    /// Truncates toward negative infinity
    #[inline(always)]
    pub const fn to_i32(v: i32) -> i32 {
        v >> FRACTION_BITS
    }

    #[inline]
    pub fn from_f64(v: f64) -> i32 {
        (v * Self::ONE as f64).round() as i32
    }

    #[inline]
    pub fn to_f64(v: i32) -> f64 {
        v as f64 / Self::ONE as f64
    }
}

/// Fixed point representation used by every colour weight in the crate
pub type Fixed16 = FixedPoint<16>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed16_constants() {
        assert_eq!(Fixed16::BITS, 16);
        assert_eq!(Fixed16::ONE, 65536);
        assert_eq!(Fixed16::ONE_HALF, 32768);
    }

    #[test]
    fn test_int_round_trip() {
        for v in [-128, -1, 0, 1, 127, 255, 32767] {
            assert_eq!(Fixed16::to_i32(Fixed16::from_i32(v)), v);
        }
    }

    #[test]
    fn test_from_f64_rounds_half_away_from_zero() {
        assert_eq!(Fixed16::from_f64(0.5), 32768);
        assert_eq!(Fixed16::from_f64(-0.5), -32768);
        assert_eq!(FixedPoint::<1>::from_f64(0.25), 1);
        assert_eq!(FixedPoint::<1>::from_f64(-0.25), -1);
        assert_eq!(FixedPoint::<1>::from_f64(0.2), 0);
    }

    #[test]
    fn test_to_i32_floors_negative_values() {
        assert_eq!(Fixed16::to_i32(-1), -1);
        assert_eq!(Fixed16::to_i32(Fixed16::from_i32(-3) + 1), -3);
    }

    #[test]
    fn test_f64_round_trip() {
        for v in [-2.5f64, -0.75, 0., 0.125, 1., 127.5] {
            assert_eq!(Fixed16::to_f64(Fixed16::from_f64(v)), v);
        }
    }
}
