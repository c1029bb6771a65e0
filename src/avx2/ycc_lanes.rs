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
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Unpacks and packs work inside 128-bit halves, so the pair order they produce
/// is restored by `_mm256_packs_epi32` without a cross lane permute.
pub(crate) struct Avx2NarrowLanes;

impl NarrowLanes for Avx2NarrowLanes {
    type Vector = __m256i;
    type Acc = (__m256i, __m256i);
    const LANES: usize = 16;

    #[inline(always)]
    unsafe fn load(ptr: *const i16) -> Self::Vector {
        _mm256_loadu_si256(ptr as *const __m256i)
    }

    #[inline(always)]
    unsafe fn store(ptr: *mut i16, v: Self::Vector) {
        _mm256_storeu_si256(ptr as *mut __m256i, v);
    }

    #[inline(always)]
    unsafe fn populate(v: i32) -> Self::Acc {
        let v = _mm256_set1_epi32(v);
        (v, v)
    }

    #[inline(always)]
    unsafe fn extend(v: Self::Vector) -> Self::Acc {
        (
            _mm256_srai_epi32::<16>(_mm256_unpacklo_epi16(v, v)),
            _mm256_srai_epi32::<16>(_mm256_unpackhi_epi16(v, v)),
        )
    }

    #[inline(always)]
    unsafe fn mul_add<const WA: i32, const WB: i32>(
        a: Self::Vector,
        b: Self::Vector,
    ) -> Self::Acc {
        let weights = _mm256_set1_epi32((((WB as u32) << 16) | (WA as u16 as u32)) as i32);
        (
            _mm256_madd_epi16(_mm256_unpacklo_epi16(a, b), weights),
            _mm256_madd_epi16(_mm256_unpackhi_epi16(a, b), weights),
        )
    }

    #[inline(always)]
    unsafe fn add(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        (_mm256_add_epi32(a.0, b.0), _mm256_add_epi32(a.1, b.1))
    }

    #[inline(always)]
    unsafe fn shl<const N: i32>(a: Self::Acc) -> Self::Acc {
        (_mm256_slli_epi32::<N>(a.0), _mm256_slli_epi32::<N>(a.1))
    }

    #[inline(always)]
    unsafe fn descale(a: Self::Acc, n: i32) -> Self::Vector {
        let count = _mm_cvtsi32_si128(n);
        _mm256_packs_epi32(_mm256_sra_epi32(a.0, count), _mm256_sra_epi32(a.1, count))
    }
}

pub(crate) struct Avx2WideLanes;

impl WideLanes for Avx2WideLanes {
    type Vector = __m256i;
    const LANES: usize = 8;

    #[inline(always)]
    unsafe fn load(ptr: *const i32) -> Self::Vector {
        _mm256_loadu_si256(ptr as *const __m256i)
    }

    #[inline(always)]
    unsafe fn store(ptr: *mut i32, v: Self::Vector) {
        _mm256_storeu_si256(ptr as *mut __m256i, v);
    }

    #[inline(always)]
    unsafe fn populate(v: i32) -> Self::Vector {
        _mm256_set1_epi32(v)
    }

    #[inline(always)]
    unsafe fn mul<const W: i32>(v: Self::Vector) -> Self::Vector {
        _mm256_mullo_epi32(v, _mm256_set1_epi32(W))
    }

    #[inline(always)]
    unsafe fn add(a: Self::Vector, b: Self::Vector) -> Self::Vector {
        _mm256_add_epi32(a, b)
    }

    #[inline(always)]
    unsafe fn shr(a: Self::Vector, n: i32) -> Self::Vector {
        _mm256_sra_epi32(a, _mm_cvtsi32_si128(n))
    }
}
