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
use crate::ycc_batch::{NarrowLanes, WideLanes};
use std::arch::aarch64::*;

pub(crate) struct NeonNarrowLanes;

impl NarrowLanes for NeonNarrowLanes {
    type Vector = int16x8_t;
    type Acc = (int32x4_t, int32x4_t);
    const LANES: usize = 8;

    #[inline(always)]
    unsafe fn load(ptr: *const i16) -> Self::Vector {
        vld1q_s16(ptr)
    }

    #[inline(always)]
    unsafe fn store(ptr: *mut i16, v: Self::Vector) {
        vst1q_s16(ptr, v);
    }

    #[inline(always)]
    unsafe fn populate(v: i32) -> Self::Acc {
        let v = vdupq_n_s32(v);
        (v, v)
    }

    #[inline(always)]
    unsafe fn extend(v: Self::Vector) -> Self::Acc {
        (vmovl_s16(vget_low_s16(v)), vmovl_high_s16(v))
    }

    #[inline(always)]
    unsafe fn mul_add<const WA: i32, const WB: i32>(
        a: Self::Vector,
        b: Self::Vector,
    ) -> Self::Acc {
        let wa = vdupq_n_s16(WA as i16);
        let wb = vdupq_n_s16(WB as i16);
        let lo = vmlal_s16(
            vmull_s16(vget_low_s16(a), vget_low_s16(wa)),
            vget_low_s16(b),
            vget_low_s16(wb),
        );
        let hi = vmlal_high_s16(vmull_high_s16(a, wa), b, wb);
        (lo, hi)
    }

    #[inline(always)]
    unsafe fn add(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        (vaddq_s32(a.0, b.0), vaddq_s32(a.1, b.1))
    }

    #[inline(always)]
    unsafe fn shl<const N: i32>(a: Self::Acc) -> Self::Acc {
        (vshlq_n_s32::<N>(a.0), vshlq_n_s32::<N>(a.1))
    }

    #[inline(always)]
    unsafe fn descale(a: Self::Acc, n: i32) -> Self::Vector {
        let count = vdupq_n_s32(-n);
        vcombine_s16(
            vqmovn_s32(vshlq_s32(a.0, count)),
            vqmovn_s32(vshlq_s32(a.1, count)),
        )
    }
}

pub(crate) struct NeonWideLanes;

impl WideLanes for NeonWideLanes {
    type Vector = int32x4_t;
    const LANES: usize = 4;

    #[inline(always)]
    unsafe fn load(ptr: *const i32) -> Self::Vector {
        vld1q_s32(ptr)
    }

    #[inline(always)]
    unsafe fn store(ptr: *mut i32, v: Self::Vector) {
        vst1q_s32(ptr, v);
    }

    #[inline(always)]
    unsafe fn populate(v: i32) -> Self::Vector {
        vdupq_n_s32(v)
    }

    #[inline(always)]
    unsafe fn mul<const W: i32>(v: Self::Vector) -> Self::Vector {
        vmulq_n_s32(v, W)
    }

    #[inline(always)]
    unsafe fn add(a: Self::Vector, b: Self::Vector) -> Self::Vector {
        vaddq_s32(a, b)
    }

    #[inline(always)]
    unsafe fn shr(a: Self::Vector, n: i32) -> Self::Vector {
        vshlq_s32(a, vdupq_n_s32(-n))
    }
}
