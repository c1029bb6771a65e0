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
mod support;

use image::{GenericImageView, ImageReader};
use rgb2ycc::{
    rgba32_to_ycc444, ByteOrder, YccConversionMode, YccLevel, YccOptions, YccPlanarImageMut,
    YccPlaneOptions,
};
use std::time::Instant;
use support::{planes_equal, rgba_bytes_to_pixels, save_plane};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./assets/bench.jpg".to_string());
    let img = ImageReader::open(&path).unwrap().decode().unwrap();
    let dimensions = img.dimensions();
    let rgba = img.to_rgba8();
    let pixels = rgba_bytes_to_pixels(rgba.as_raw());

    let mut converted = Vec::new();

    for mode in [
        YccConversionMode::Scalar,
        YccConversionMode::Table,
        YccConversionMode::Vector,
    ] {
        let mut planar_image = YccPlanarImageMut::<i16>::alloc(dimensions.0, dimensions.1);
        let options = YccPlaneOptions {
            mode,
            options: YccOptions::new(YccLevel::Sample, 2),
            row_bias: [0, 1 << 17],
            byte_order: ByteOrder::NATIVE,
        };
        let start_time = Instant::now();
        rgba32_to_ycc444(&mut planar_image, &pixels, dimensions.0, &options).unwrap();
        println!("{:?} conversion time: {:?}", mode, start_time.elapsed());
        converted.push((mode, planar_image));
    }

    let reference = converted[0].1.to_fixed();
    for (mode, planar_image) in converted.iter().skip(1) {
        assert!(
            planes_equal(&reference, &planar_image.to_fixed()),
            "{:?} differs from scalar conversion",
            mode
        );
    }

    save_plane("y.png", reference.y_plane, reference.y_stride, reference.width, reference.height, 0);
    save_plane("cb.png", reference.cb_plane, reference.cb_stride, reference.width, reference.height, 2);
    save_plane("cr.png", reference.cr_plane, reference.cr_stride, reference.width, reference.height, 2);
}
