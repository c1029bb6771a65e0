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
use crate::neon::ycc_lanes::{NeonNarrowLanes, NeonWideLanes};
use crate::ycc_batch::{ycc_narrow_row, ycc_wide_row};
use crate::ycc_weights::YccRowParams;

pub(crate) unsafe fn neon_ycc_narrow_row(
    r: &[i16],
    g: &[i16],
    b: &[i16],
    y: &mut [i16],
    cb: &mut [i16],
    cr: &mut [i16],
    params: &YccRowParams,
) -> usize {
    ycc_narrow_row::<NeonNarrowLanes>(r, g, b, y, cb, cr, params)
}

pub(crate) unsafe fn neon_ycc_wide_row(
    r: &[i32],
    g: &[i32],
    b: &[i32],
    y: &mut [i32],
    cb: &mut [i32],
    cr: &mut [i32],
    params: &YccRowParams,
) -> usize {
    ycc_wide_row::<NeonWideLanes>(r, g, b, y, cb, cr, params)
}
