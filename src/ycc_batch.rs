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
use crate::rgb_to_ycc::rgb_to_ycc_impl;
use crate::ycc_error::{check_cbcr_fraction_bits, check_equal_length, YccError};
use crate::ycc_support::{LaneWidth, YccOptions};
use crate::ycc_weights::*;
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Vector primitives over 16-bit lanes accumulating into pairs of 32-bit halves.
///
/// The ordering of the halves produced by [NarrowLanes::mul_add] and
/// [NarrowLanes::extend] must be the one [NarrowLanes::descale] packs back.
pub(crate) trait NarrowLanes {
    type Vector: Copy;
    type Acc: Copy;
    const LANES: usize;

    unsafe fn load(ptr: *const i16) -> Self::Vector;
    unsafe fn store(ptr: *mut i16, v: Self::Vector);
    unsafe fn populate(v: i32) -> Self::Acc;
    /// Sign extends every lane to 32 bits
    unsafe fn extend(v: Self::Vector) -> Self::Acc;
    /// `a * WA + b * WB` widened to 32 bits, both weights must fit `i16`
    unsafe fn mul_add<const WA: i32, const WB: i32>(a: Self::Vector, b: Self::Vector) -> Self::Acc;
    unsafe fn add(a: Self::Acc, b: Self::Acc) -> Self::Acc;
    unsafe fn shl<const N: i32>(a: Self::Acc) -> Self::Acc;
    /// Arithmetic shift right by `n` and saturating narrow to 16 bits
    unsafe fn descale(a: Self::Acc, n: i32) -> Self::Vector;
}

/// Vector primitives over 32-bit lanes
pub(crate) trait WideLanes {
    type Vector: Copy;
    const LANES: usize;

    unsafe fn load(ptr: *const i32) -> Self::Vector;
    unsafe fn store(ptr: *mut i32, v: Self::Vector);
    unsafe fn populate(v: i32) -> Self::Vector;
    unsafe fn mul<const W: i32>(v: Self::Vector) -> Self::Vector;
    unsafe fn add(a: Self::Vector, b: Self::Vector) -> Self::Vector;
    unsafe fn shr(a: Self::Vector, n: i32) -> Self::Vector;
}

/// Converts the longest prefix made of whole vectors, returns processed count
pub(crate) type YccRowFn<T> = unsafe fn(
    r: &[T],
    g: &[T],
    b: &[T],
    y: &mut [T],
    cb: &mut [T],
    cr: &mut [T],
    params: &YccRowParams,
) -> usize;

#[inline(always)]
pub(crate) unsafe fn ycc_narrow_row<L: NarrowLanes>(
    r: &[i16],
    g: &[i16],
    b: &[i16],
    y: &mut [i16],
    cb: &mut [i16],
    cr: &mut [i16],
    params: &YccRowParams,
) -> usize {
    let width = r.len();
    let y_offset = L::populate(params.y_offset);
    let cbcr_offset = L::populate(params.cbcr_offset);
    let cbcr_shift = params.cbcr_shift as i32;

    let mut cx = 0usize;

    while cx + L::LANES <= width {
        let vr = L::load(r.get_unchecked(cx..).as_ptr());
        let vg = L::load(g.get_unchecked(cx..).as_ptr());
        let vb = L::load(b.get_unchecked(cx..).as_ptr());

        let y_acc = L::add(
            L::add(
                L::mul_add::<{ Y_R_WEIGHT }, { Y_RG_WEIGHT }>(vr, vg),
                L::mul_add::<{ Y_B_WEIGHT }, { Y_BG_WEIGHT }>(vb, vg),
            ),
            y_offset,
        );
        let cb_acc = L::add(
            L::add(
                L::mul_add::<{ CB_R_WEIGHT }, { CB_G_WEIGHT }>(vr, vg),
                L::shl::<15>(L::extend(vb)),
            ),
            cbcr_offset,
        );
        let cr_acc = L::add(
            L::add(
                L::mul_add::<{ CR_G_WEIGHT }, { CR_B_WEIGHT }>(vg, vb),
                L::shl::<15>(L::extend(vr)),
            ),
            cbcr_offset,
        );

        L::store(
            y.get_unchecked_mut(cx..).as_mut_ptr(),
            L::descale(y_acc, FRACTION_BITS as i32),
        );
        L::store(
            cb.get_unchecked_mut(cx..).as_mut_ptr(),
            L::descale(cb_acc, cbcr_shift),
        );
        L::store(
            cr.get_unchecked_mut(cx..).as_mut_ptr(),
            L::descale(cr_acc, cbcr_shift),
        );

        cx += L::LANES;
    }

    cx
}

#[inline(always)]
pub(crate) unsafe fn ycc_wide_row<L: WideLanes>(
    r: &[i32],
    g: &[i32],
    b: &[i32],
    y: &mut [i32],
    cb: &mut [i32],
    cr: &mut [i32],
    params: &YccRowParams,
) -> usize {
    let width = r.len();
    let y_offset = L::populate(params.y_offset);
    let cbcr_offset = L::populate(params.cbcr_offset);
    let cbcr_shift = params.cbcr_shift as i32;

    let mut cx = 0usize;

    while cx + L::LANES <= width {
        let vr = L::load(r.get_unchecked(cx..).as_ptr());
        let vg = L::load(g.get_unchecked(cx..).as_ptr());
        let vb = L::load(b.get_unchecked(cx..).as_ptr());

        let y_acc = L::add(
            L::add(
                L::add(L::mul::<{ Y_R_WEIGHT }>(vr), L::mul::<{ Y_G_WEIGHT }>(vg)),
                L::mul::<{ Y_B_WEIGHT }>(vb),
            ),
            y_offset,
        );
        let cb_acc = L::add(
            L::add(
                L::add(L::mul::<{ CB_R_WEIGHT }>(vr), L::mul::<{ CB_G_WEIGHT }>(vg)),
                L::mul::<{ CB_B_WEIGHT }>(vb),
            ),
            cbcr_offset,
        );
        let cr_acc = L::add(
            L::add(
                L::add(L::mul::<{ CR_R_WEIGHT }>(vr), L::mul::<{ CR_G_WEIGHT }>(vg)),
                L::mul::<{ CR_B_WEIGHT }>(vb),
            ),
            cbcr_offset,
        );

        L::store(
            y.get_unchecked_mut(cx..).as_mut_ptr(),
            L::shr(y_acc, FRACTION_BITS as i32),
        );
        L::store(
            cb.get_unchecked_mut(cx..).as_mut_ptr(),
            L::shr(cb_acc, cbcr_shift),
        );
        L::store(
            cr.get_unchecked_mut(cx..).as_mut_ptr(),
            L::shr(cr_acc, cbcr_shift),
        );

        cx += L::LANES;
    }

    cx
}

mod sealed {
    use super::YccRowFn;

    pub trait Sealed: Sized {
        fn vector_row_handler() -> Option<YccRowFn<Self>>;
    }
}

/// Sample type of batch conversion, picks the lane family
pub trait YccSample:
    Copy + Default + Debug + Send + Sync + AsPrimitive<i32> + 'static + sealed::Sealed
{
    /// Vector lane width this sample type is processed with
    const FAMILY: LaneWidth;

    /// Saturating conversion, the same narrowing vector lanes apply
    fn from_i32(v: i32) -> Self;
}

impl YccSample for i16 {
    const FAMILY: LaneWidth = LaneWidth::Narrow;

    #[inline(always)]
    fn from_i32(v: i32) -> Self {
        v.clamp(i16::MIN as i32, i16::MAX as i32) as i16
    }
}

impl YccSample for i32 {
    const FAMILY: LaneWidth = LaneWidth::Wide;

    #[inline(always)]
    fn from_i32(v: i32) -> Self {
        v
    }
}

impl sealed::Sealed for i16 {
    #[allow(unreachable_code)]
    fn vector_row_handler() -> Option<YccRowFn<i16>> {
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        {
            use crate::neon::neon_ycc_narrow_row;
            return Some(neon_ycc_narrow_row);
        }
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            #[cfg(feature = "avx")]
            {
                if std::arch::is_x86_feature_detected!("avx2") {
                    use crate::avx2::avx2_ycc_narrow_row;
                    return Some(avx2_ycc_narrow_row);
                }
            }
            #[cfg(feature = "sse")]
            {
                if std::arch::is_x86_feature_detected!("sse4.1") {
                    use crate::sse::sse_ycc_narrow_row;
                    return Some(sse_ycc_narrow_row);
                }
            }
        }
        None
    }
}

impl sealed::Sealed for i32 {
    #[allow(unreachable_code)]
    fn vector_row_handler() -> Option<YccRowFn<i32>> {
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        {
            use crate::neon::neon_ycc_wide_row;
            return Some(neon_ycc_wide_row);
        }
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            #[cfg(feature = "avx")]
            {
                if std::arch::is_x86_feature_detected!("avx2") {
                    use crate::avx2::avx2_ycc_wide_row;
                    return Some(avx2_ycc_wide_row);
                }
            }
            #[cfg(feature = "sse")]
            {
                if std::arch::is_x86_feature_detected!("sse4.1") {
                    use crate::sse::sse_ycc_wide_row;
                    return Some(sse_ycc_wide_row);
                }
            }
        }
        None
    }
}

/// Lane width one, also finishes the tails vector rows leave
#[inline]
fn ycc_row_no_simd<T: YccSample>(
    r: &[T],
    g: &[T],
    b: &[T],
    y: &mut [T],
    cb: &mut [T],
    cr: &mut [T],
    params: &YccRowParams,
) {
    for (((((&r, &g), &b), y), cb), cr) in r
        .iter()
        .zip(g.iter())
        .zip(b.iter())
        .zip(y.iter_mut())
        .zip(cb.iter_mut())
        .zip(cr.iter_mut())
    {
        let px = rgb_to_ycc_impl(r.as_(), g.as_(), b.as_(), params);
        *y = T::from_i32(px.y);
        *cb = T::from_i32(px.cb);
        *cr = T::from_i32(px.cr);
    }
}

/// Batch converter over planar component slices.
///
/// The vector backend is resolved once here, a converter can be shared between
/// threads afterwards.
#[derive(Clone, Copy)]
pub struct YccBatchConverter<T: YccSample> {
    lanes: LaneWidth,
    options: YccOptions,
    handler: Option<YccRowFn<T>>,
}

impl<T: YccSample> Debug for YccBatchConverter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YccBatchConverter")
            .field("lanes", &self.lanes)
            .field("options", &self.options)
            .finish()
    }
}

impl<T: YccSample> YccBatchConverter<T> {
    /// Requested vector lanes that the CPU can't run fall back to [LaneWidth::One].
    ///
    /// Asking for a lane family the sample type doesn't belong to is an error.
    pub fn new(lanes: LaneWidth, options: YccOptions) -> Result<Self, YccError> {
        check_cbcr_fraction_bits(options.cbcr_add_fraction_bits)?;
        if lanes == LaneWidth::One {
            return Ok(YccBatchConverter {
                lanes,
                options,
                handler: None,
            });
        }
        if lanes != T::FAMILY {
            return Err(YccError::LaneWidthMismatch {
                requested: lanes,
                supported: T::FAMILY,
            });
        }
        let handler = T::vector_row_handler();
        let effective = if handler.is_some() {
            log::debug!("Using vector backend for {}", lanes);
            lanes
        } else {
            log::debug!(
                "{} is not available on this CPU, falling back to {}",
                lanes,
                LaneWidth::One
            );
            LaneWidth::One
        };
        Ok(YccBatchConverter {
            lanes: effective,
            options,
            handler,
        })
    }

    /// Lane width actually used after fallback
    #[inline]
    pub fn lanes(&self) -> LaneWidth {
        self.lanes
    }

    #[inline]
    pub fn options(&self) -> YccOptions {
        self.options
    }

    /// Converts equally sized component slices.
    ///
    /// Inputs are component sums over blocks of `1 << cbcr_add_fraction_bits` pixels,
    /// plain components in `[0, 255]` without extra bits. Cb and Cr come out as block
    /// averages, `bias` is added to their accumulators when extra bits are kept. See
    /// [crate::rgb_to_ycc].
    #[allow(clippy::too_many_arguments)]
    pub fn convert(
        &self,
        r: &[T],
        g: &[T],
        b: &[T],
        y: &mut [T],
        cb: &mut [T],
        cr: &mut [T],
        bias: i32,
    ) -> Result<(), YccError> {
        let width = r.len();
        check_equal_length(width, g.len())?;
        check_equal_length(width, b.len())?;
        check_equal_length(width, y.len())?;
        check_equal_length(width, cb.len())?;
        check_equal_length(width, cr.len())?;

        self.handle_row(r, g, b, y, cb, cr, &YccRowParams::new(self.options, bias));
        Ok(())
    }

    /// All slices must have the length of `r`
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn handle_row(
        &self,
        r: &[T],
        g: &[T],
        b: &[T],
        y: &mut [T],
        cb: &mut [T],
        cr: &mut [T],
        params: &YccRowParams,
    ) {
        let mut cx = 0usize;
        if let Some(handler) = self.handler {
            cx = unsafe { handler(r, g, b, y, cb, cr, params) };
        }

        ycc_row_no_simd(
            &r[cx..],
            &g[cx..],
            &b[cx..],
            &mut y[cx..],
            &mut cb[cx..],
            &mut cr[cx..],
            params,
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YccBatch<T> {
    pub y: Vec<T>,
    pub cb: Vec<T>,
    pub cr: Vec<T>,
}

/// One-shot batch conversion allocating the output planes
pub fn convert_batch<T: YccSample>(
    r: &[T],
    g: &[T],
    b: &[T],
    lanes: LaneWidth,
    options: YccOptions,
    bias: i32,
) -> Result<YccBatch<T>, YccError> {
    let converter = YccBatchConverter::<T>::new(lanes, options)?;
    let mut batch = YccBatch {
        y: vec![T::default(); r.len()],
        cb: vec![T::default(); r.len()],
        cr: vec![T::default(); r.len()],
    };
    converter.convert(r, g, b, &mut batch.y, &mut batch.cb, &mut batch.cr, bias)?;
    Ok(batch)
}
