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
use crate::ycc_support::{Rgb32Format, YccOptions, YccPixel};
use crate::ycc_weights::*;

/// Chroma sums before the final shift, `r`, `g`, `b` may be block sums
#[inline(always)]
pub(crate) fn cbcr_accumulators(r: i32, g: i32, b: i32, params: &YccRowParams) -> (i32, i32) {
    let cb = r
        .wrapping_mul(CB_R_WEIGHT)
        .wrapping_add(g.wrapping_mul(CB_G_WEIGHT))
        .wrapping_add(b.wrapping_mul(CB_B_WEIGHT))
        .wrapping_add(params.cbcr_offset);
    let cr = r
        .wrapping_mul(CR_R_WEIGHT)
        .wrapping_add(g.wrapping_mul(CR_G_WEIGHT))
        .wrapping_add(b.wrapping_mul(CR_B_WEIGHT))
        .wrapping_add(params.cbcr_offset);
    (cb, cr)
}

#[inline(always)]
fn luma(r: i32, g: i32, b: i32, params: &YccRowParams) -> i32 {
    r.wrapping_mul(Y_R_WEIGHT)
        .wrapping_add(g.wrapping_mul(Y_G_WEIGHT))
        .wrapping_add(b.wrapping_mul(Y_B_WEIGHT))
        .wrapping_add(params.y_offset)
        >> FRACTION_BITS
}

#[inline(always)]
pub(crate) fn rgb_to_ycc_impl(r: i32, g: i32, b: i32, params: &YccRowParams) -> YccPixel {
    let (cb, cr) = cbcr_accumulators(r, g, b, params);
    YccPixel::new(
        luma(r, g, b, params),
        cb >> params.cbcr_shift,
        cr >> params.cbcr_shift,
    )
}

/// A single pixel standing for a uniform block of `1 << block_bits` pixels
#[inline(always)]
pub(crate) fn pixel_to_ycc_impl(r: i32, g: i32, b: i32, params: &YccRowParams) -> YccPixel {
    let bits = params.block_bits;
    let (cb, cr) = cbcr_accumulators(r << bits, g << bits, b << bits, params);
    YccPixel::new(
        luma(r, g, b, params),
        cb >> params.cbcr_shift,
        cr >> params.cbcr_shift,
    )
}

/// Luma of an RGB triple in `[0, 255]`
#[inline]
pub fn rgb_to_y(r: u8, g: u8, b: u8) -> i32 {
    (r as i32 * Y_R_WEIGHT + g as i32 * Y_G_WEIGHT + b as i32 * Y_B_WEIGHT
        + y_offset(Default::default()))
        >> FRACTION_BITS
}

/// Blue difference chroma of an RGB triple in `[0, 255]`
#[inline]
pub fn rgb_to_cb(r: u8, g: u8, b: u8) -> i32 {
    (r as i32 * CB_R_WEIGHT + g as i32 * CB_G_WEIGHT + b as i32 * CB_B_WEIGHT
        + cbcr_offset(Default::default(), 0))
        >> FRACTION_BITS
}

/// Red difference chroma of an RGB triple in `[0, 255]`
#[inline]
pub fn rgb_to_cr(r: u8, g: u8, b: u8) -> i32 {
    (r as i32 * CR_R_WEIGHT + g as i32 * CR_G_WEIGHT + b as i32 * CR_B_WEIGHT
        + cbcr_offset(Default::default(), 0))
        >> FRACTION_BITS
}

/// Converts component sums with explicit precision and level.
///
/// With `cbcr_add_fraction_bits = A`, `r`, `g` and `b` are sums over a block of
/// `1 << A` pixels and chroma is descaled by `FRACTION_BITS + A`, giving the block
/// average. `bias` is added to the chroma accumulator before that shift and is
/// ignored when `A == 0`. Luma is computed from the same inputs, so it is only
/// meaningful for a single pixel.
///
/// # Panics
///
/// Panics if `options.cbcr_add_fraction_bits` exceeds [MAX_CBCR_ADD_FRACTION_BITS].
#[inline]
pub fn rgb_to_ycc(r: i32, g: i32, b: i32, options: YccOptions, bias: i32) -> YccPixel {
    assert!(
        options.cbcr_add_fraction_bits <= MAX_CBCR_ADD_FRACTION_BITS,
        "CbCr additional fraction bits must be at most {}",
        MAX_CBCR_ADD_FRACTION_BITS
    );
    rgb_to_ycc_impl(r, g, b, &YccRowParams::new(options, bias))
}

/// Converts one pixel as a uniform block of `1 << cbcr_add_fraction_bits` pixels.
///
/// Without bias the result equals the plain 8-bit conversion, `bias` moves the
/// chroma rounding point in steps of `2^-(FRACTION_BITS + cbcr_add_fraction_bits)`.
///
/// # Panics
///
/// Panics if `options.cbcr_add_fraction_bits` exceeds [MAX_CBCR_ADD_FRACTION_BITS].
#[inline]
pub fn pixel_to_ycc(r: u8, g: u8, b: u8, options: YccOptions, bias: i32) -> YccPixel {
    assert!(
        options.cbcr_add_fraction_bits <= MAX_CBCR_ADD_FRACTION_BITS,
        "CbCr additional fraction bits must be at most {}",
        MAX_CBCR_ADD_FRACTION_BITS
    );
    pixel_to_ycc_impl(
        r as i32,
        g as i32,
        b as i32,
        &YccRowParams::new(options, bias),
    )
}

/// Converts a packed pixel in native byte order into 0..255 YCbCr
#[inline]
pub fn convert_pixel_scalar(pixel: u32, format: Rgb32Format) -> YccPixel {
    let layout = Rgb32Layout::native(format);
    let (r, g, b) = (layout.red(pixel), layout.green(pixel), layout.blue(pixel));
    YccPixel::new(rgb_to_y(r, g, b), rgb_to_cb(r, g, b), rgb_to_cr(r, g, b))
}

/// See [pixel_to_ycc] for `options` and `bias` semantics
#[inline]
pub fn convert_pixel_scalar_with(
    pixel: u32,
    layout: Rgb32Layout,
    options: YccOptions,
    bias: i32,
) -> YccPixel {
    pixel_to_ycc(
        layout.red(pixel),
        layout.green(pixel),
        layout.blue(pixel),
        options,
        bias,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ycc_support::{ByteOrder, YccLevel};
    use rand::Rng;

    fn reference(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
        let (r, g, b) = (r as f64, g as f64, b as f64);
        (
            0.299 * r + 0.587 * g + 0.114 * b,
            -0.16874 * r - 0.33126 * g + 0.5 * b + 128.,
            0.5 * r - 0.41869 * g - 0.08131 * b + 128.,
        )
    }

    fn block_sums(block: &[(u8, u8, u8)]) -> (i32, i32, i32) {
        block.iter().fold((0, 0, 0), |acc, p| {
            (acc.0 + p.0 as i32, acc.1 + p.1 as i32, acc.2 + p.2 as i32)
        })
    }

    #[test]
    fn test_golden_values() {
        for format in [Rgb32Format::Rgba32, Rgb32Format::Bgra32] {
            let layout = Rgb32Layout::native(format);
            assert_eq!(
                convert_pixel_scalar(layout.pack(255, 255, 255), format),
                YccPixel::new(255, 128, 128)
            );
            assert_eq!(
                convert_pixel_scalar(layout.pack(0, 0, 0), format),
                YccPixel::new(0, 128, 128)
            );
            assert_eq!(
                convert_pixel_scalar(layout.pack(255, 0, 0), format),
                YccPixel::new(76, 85, 255)
            );
        }
    }

    #[test]
    fn test_close_to_float_reference() {
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let r = rng.random_range(0..=255u8);
            let g = rng.random_range(0..=255u8);
            let b = rng.random_range(0..=255u8);
            let (fy, fcb, fcr) = reference(r, g, b);
            assert!((rgb_to_y(r, g, b) as f64 - fy).abs() <= 1., "Y for {r} {g} {b}");
            assert!((rgb_to_cb(r, g, b) as f64 - fcb).abs() <= 1., "Cb for {r} {g} {b}");
            assert!((rgb_to_cr(r, g, b) as f64 - fcr).abs() <= 1., "Cr for {r} {g} {b}");
        }
    }

    #[test]
    fn test_range_without_clamping() {
        for r in (0..=255u8).step_by(3) {
            for g in 0..=255u8 {
                for b in (0..=255u8).step_by(3) {
                    let px = pixel_to_ycc(r, g, b, YccOptions::default(), 0);
                    assert!((0..=255).contains(&px.y));
                    assert!((0..=255).contains(&px.cb));
                    assert!((0..=255).contains(&px.cr));
                }
            }
        }
    }

    #[test]
    fn test_options_default_matches_plain_functions() {
        let mut rng = rand::rng();
        for _ in 0..10000 {
            let r = rng.random_range(0..=255u8);
            let g = rng.random_range(0..=255u8);
            let b = rng.random_range(0..=255u8);
            let bias = rng.random_range(-4..=4);
            let expected = YccPixel::new(rgb_to_y(r, g, b), rgb_to_cb(r, g, b), rgb_to_cr(r, g, b));
            assert_eq!(
                rgb_to_ycc(r as i32, g as i32, b as i32, YccOptions::default(), bias),
                expected
            );
            assert_eq!(pixel_to_ycc(r, g, b, YccOptions::default(), bias), expected);
        }
    }

    #[test]
    fn test_centered_level_is_shifted_by_128() {
        for bits in [0, 2, MAX_CBCR_ADD_FRACTION_BITS] {
            let sample_options = YccOptions::new(YccLevel::Sample, bits);
            let centered = YccOptions::new(YccLevel::Centered, bits);
            for r in (0..=255u8).step_by(7) {
                for g in (0..=255u8).step_by(5) {
                    for b in (0..=255u8).step_by(3) {
                        let sample = pixel_to_ycc(r, g, b, sample_options, 0);
                        let px = pixel_to_ycc(r, g, b, centered, 0);
                        assert_eq!(px.y, sample.y - 128);
                        assert_eq!(px.cb, sample.cb - 128);
                        assert_eq!(px.cr, sample.cr - 128);
                    }
                }
            }
        }
    }

    #[test]
    fn test_uniform_block_matches_plain() {
        let mut rng = rand::rng();
        for bits in 1..=MAX_CBCR_ADD_FRACTION_BITS {
            let options = YccOptions::new(YccLevel::Sample, bits);
            for _ in 0..5000 {
                let r = rng.random_range(0..=255u8);
                let g = rng.random_range(0..=255u8);
                let b = rng.random_range(0..=255u8);
                let px = pixel_to_ycc(r, g, b, options, 0);
                assert_eq!(px, rgb_to_ycc(r as i32, g as i32, b as i32, YccOptions::default(), 0));
                let sums = rgb_to_ycc(
                    (r as i32) << bits,
                    (g as i32) << bits,
                    (b as i32) << bits,
                    options,
                    0,
                );
                assert_eq!((sums.cb, sums.cr), (px.cb, px.cr));
            }
        }
    }

    #[test]
    fn test_block_sum_golden_values() {
        let centered = YccOptions::new(YccLevel::Centered, 2);
        let sample = YccOptions::new(YccLevel::Sample, 2);
        let blue = rgb_to_ycc(0, 0, 4 * 255, centered, 0);
        assert_eq!((blue.cb, blue.cr), (127, -21));
        let blue = rgb_to_ycc(0, 0, 4 * 255, sample, 0);
        assert_eq!((blue.cb, blue.cr), (255, 107));
        let block = [(255, 0, 0), (0, 0, 0), (0, 0, 0), (0, 0, 0)];
        let (r, g, b) = block_sums(&block);
        let px = rgb_to_ycc(r, g, b, sample, 0);
        assert_eq!((px.cb, px.cr), (117, 160));
    }

    #[test]
    fn test_block_sum_is_rounded_average() {
        let mut rng = rand::rng();
        for bits in 1..=MAX_CBCR_ADD_FRACTION_BITS {
            let options = YccOptions::new(YccLevel::Sample, bits);
            for _ in 0..2000 {
                let block: Vec<(u8, u8, u8)> = (0..1usize << bits)
                    .map(|_| {
                        (
                            rng.random_range(0..=255u8),
                            rng.random_range(0..=255u8),
                            rng.random_range(0..=255u8),
                        )
                    })
                    .collect();
                let (r, g, b) = block_sums(&block);
                let px = rgb_to_ycc(r, g, b, options, 0);
                let n = block.len() as f64;
                let fcb = block.iter().map(|p| reference(p.0, p.1, p.2).1).sum::<f64>() / n;
                let fcr = block.iter().map(|p| reference(p.0, p.1, p.2).2).sum::<f64>() / n;
                assert!((px.cb as f64 - fcb).abs() <= 1., "Cb for {block:?}");
                assert!((px.cr as f64 - fcr).abs() <= 1., "Cr for {block:?}");
                assert!((0..=255).contains(&px.cb) && (0..=255).contains(&px.cr));
            }
        }
    }

    #[test]
    fn test_bias_moves_accumulator_by_one() {
        let mut rng = rand::rng();
        for bits in 1..=MAX_CBCR_ADD_FRACTION_BITS {
            let options = YccOptions::new(YccLevel::Sample, bits);
            for _ in 0..2000 {
                let r = rng.random_range(0..=(255 << bits));
                let g = rng.random_range(0..=(255 << bits));
                let b = rng.random_range(0..=(255 << bits));
                let bias = rng.random_range(-64..64);
                let base_acc = cbcr_accumulators(r, g, b, &YccRowParams::new(options, bias));
                let next_acc = cbcr_accumulators(r, g, b, &YccRowParams::new(options, bias + 1));
                assert_eq!(next_acc, (base_acc.0 + 1, base_acc.1 + 1));
                let base = rgb_to_ycc(r, g, b, options, bias);
                let next = rgb_to_ycc(r, g, b, options, bias + 1);
                assert_eq!(next.y, base.y);
                assert!(next.cb - base.cb == 0 || next.cb - base.cb == 1);
                assert!(next.cr - base.cr == 0 || next.cr - base.cr == 1);
            }
        }
    }

    #[test]
    fn test_bias_flips_at_rounding_boundary() {
        let options = YccOptions::new(YccLevel::Sample, 2);
        let (r, g, b) = block_sums(&[(10, 200, 30), (12, 198, 34), (9, 201, 29), (11, 205, 31)]);
        let params = YccRowParams::new(options, 0);
        let (acc, _) = cbcr_accumulators(r, g, b, &params);
        let mask = (1 << params.cbcr_shift) - 1;
        let flip = (1 << params.cbcr_shift) - (acc & mask);
        let base = rgb_to_ycc(r, g, b, options, 0);
        assert_eq!(rgb_to_ycc(r, g, b, options, flip - 1).cb, base.cb);
        assert_eq!(rgb_to_ycc(r, g, b, options, flip).cb, base.cb + 1);
    }

    #[test]
    fn test_bias_ignored_without_extra_bits() {
        assert_eq!(
            rgb_to_ycc(12, 34, 56, YccOptions::default(), 100_000),
            rgb_to_ycc(12, 34, 56, YccOptions::default(), 0)
        );
    }

    #[test]
    fn test_foreign_byte_order() {
        let foreign = match ByteOrder::NATIVE {
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
        };
        let layout = Rgb32Layout::new(Rgb32Format::Bgra32, foreign);
        let pixel = layout.pack(255, 0, 0);
        assert_eq!(
            convert_pixel_scalar_with(pixel, layout, YccOptions::default(), 0),
            YccPixel::new(76, 85, 255)
        );
    }

    #[test]
    #[should_panic]
    fn test_too_many_fraction_bits_panics() {
        let _ = rgb_to_ycc(1, 2, 3, YccOptions::new(YccLevel::Sample, 7), 0);
    }
}
