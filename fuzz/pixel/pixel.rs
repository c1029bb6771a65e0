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
    convert_pixel_scalar_with, ByteOrder, Rgb32Format, Rgb32Layout, Rgb8ToYccTable, YccLevel,
    YccOptions, MAX_CBCR_ADD_FRACTION_BITS,
};

fuzz_target!(|data: (u32, bool, bool, bool, u8, i32)| {
    let format = if data.1 {
        Rgb32Format::Rgba32
    } else {
        Rgb32Format::Bgra32
    };
    let byte_order = if data.2 {
        ByteOrder::LittleEndian
    } else {
        ByteOrder::BigEndian
    };
    let level = if data.3 {
        YccLevel::Sample
    } else {
        YccLevel::Centered
    };
    let bits = data.4 as u32 % (MAX_CBCR_ADD_FRACTION_BITS + 1);
    fuzz_pixel(
        data.0,
        Rgb32Layout::new(format, byte_order),
        YccOptions::new(level, bits),
        data.5,
    );
});

fn fuzz_pixel(pixel: u32, layout: Rgb32Layout, options: YccOptions, bias: i32) {
    let (r, g, b) = (layout.red(pixel), layout.green(pixel), layout.blue(pixel));
    let repacked = layout.pack(r, g, b);
    assert_eq!(
        (layout.red(repacked), layout.green(repacked), layout.blue(repacked)),
        (r, g, b)
    );

    let table = Rgb8ToYccTable::new(options).unwrap();
    let scalar = convert_pixel_scalar_with(pixel, layout, options, bias);
    assert_eq!(scalar, table.convert_biased(pixel, layout, bias));
    assert_eq!(scalar, convert_pixel_scalar_with(repacked, layout, options, bias));

    let block = vec![pixel; 1 << options.cbcr_add_fraction_bits];
    assert_eq!(
        table.convert_block(&block, layout, bias).unwrap(),
        (scalar.cb, scalar.cr)
    );
}
