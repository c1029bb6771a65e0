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

#![no_main]

use libfuzzer_sys::fuzz_target;
use rgb2ycc::{
    convert_batch, rgb_to_ycc, LaneWidth, YccLevel, YccOptions, MAX_CBCR_ADD_FRACTION_BITS,
};

fuzz_target!(|data: (Vec<(u16, u16, u16)>, u8, i32)| {
    let bits = data.1 as u32 % (MAX_CBCR_ADD_FRACTION_BITS + 1);
    let level = if data.1 & 0x80 != 0 {
        YccLevel::Centered
    } else {
        YccLevel::Sample
    };
    let max = (255u16 << bits) + 1;
    let sums = data
        .0
        .iter()
        .map(|p| ((p.0 % max) as i32, (p.1 % max) as i32, (p.2 % max) as i32))
        .collect::<Vec<_>>();
    fuzz_batch(&sums, YccOptions::new(level, bits), data.2);
});

fn fuzz_batch(sums: &[(i32, i32, i32)], options: YccOptions, bias: i32) {
    let r16 = sums.iter().map(|p| p.0 as i16).collect::<Vec<_>>();
    let g16 = sums.iter().map(|p| p.1 as i16).collect::<Vec<_>>();
    let b16 = sums.iter().map(|p| p.2 as i16).collect::<Vec<_>>();
    let r32 = sums.iter().map(|p| p.0).collect::<Vec<_>>();
    let g32 = sums.iter().map(|p| p.1).collect::<Vec<_>>();
    let b32 = sums.iter().map(|p| p.2).collect::<Vec<_>>();

    let narrow = convert_batch(&r16, &g16, &b16, LaneWidth::Narrow, options, bias).unwrap();
    let narrow_one = convert_batch(&r16, &g16, &b16, LaneWidth::One, options, bias).unwrap();
    let wide = convert_batch(&r32, &g32, &b32, LaneWidth::Wide, options, bias).unwrap();

    assert_eq!(narrow, narrow_one);

    for (i, &(r, g, b)) in sums.iter().enumerate() {
        let expected = rgb_to_ycc(r, g, b, options, bias);
        assert_eq!(narrow.y[i] as i32, expected.y);
        assert_eq!(narrow.cb[i] as i32, expected.cb);
        assert_eq!(narrow.cr[i] as i32, expected.cr);
        assert_eq!(wide.y[i], expected.y);
        assert_eq!(wide.cb[i], expected.cb);
        assert_eq!(wide.cr[i], expected.cr);
    }
}
