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
    bgra32_to_ycc444, rgba32_to_ycc444, YccConversionMode, YccLevel, YccOptions,
    YccPlanarImageMut, YccPlaneOptions, MAX_CBCR_ADD_FRACTION_BITS,
};

fuzz_target!(|data: (u8, u8, u8, u32, u8, [i32; 2])| {
    let bits = data.4 as u32 % (MAX_CBCR_ADD_FRACTION_BITS + 1);
    let level = if data.4 & 0x80 != 0 {
        YccLevel::Centered
    } else {
        YccLevel::Sample
    };
    fuzz_ycc_444(
        data.0,
        data.1,
        data.2,
        data.3,
        YccOptions::new(level, bits),
        data.5,
    );
});

fn fuzz_ycc_444(
    i_width: u8,
    i_height: u8,
    padding: u8,
    seed: u32,
    ycc_options: YccOptions,
    row_bias: [i32; 2],
) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let stride = i_width as u32 + (padding % 16) as u32;
    let src = (0..stride as usize * i_height as usize)
        .map(|i| (i as u32).wrapping_mul(2654435761).wrapping_add(seed))
        .collect::<Vec<u32>>();

    let mut rgba_planes = Vec::new();
    let mut bgra_planes = Vec::new();
    for mode in [
        YccConversionMode::Scalar,
        YccConversionMode::Table,
        YccConversionMode::Vector,
    ] {
        let options = YccPlaneOptions {
            mode,
            options: ycc_options,
            row_bias,
            ..Default::default()
        };
        let mut rgba_image = YccPlanarImageMut::<i16>::alloc(i_width as u32, i_height as u32);
        rgba32_to_ycc444(&mut rgba_image, &src, stride, &options).unwrap();
        rgba_planes.push(rgba_image);

        let mut bgra_image = YccPlanarImageMut::<i16>::alloc(i_width as u32, i_height as u32);
        bgra32_to_ycc444(&mut bgra_image, &src, stride, &options).unwrap();
        bgra_planes.push(bgra_image);
    }

    for planes in [&rgba_planes, &bgra_planes] {
        let reference = planes[0].to_fixed();
        for planar_image in planes.iter().skip(1) {
            let fixed = planar_image.to_fixed();
            assert_eq!(reference.y_plane, fixed.y_plane);
            assert_eq!(reference.cb_plane, fixed.cb_plane);
            assert_eq!(reference.cr_plane, fixed.cr_plane);
        }
    }
}
