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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use rgb2ycc::{
    build_weight_table, convert_pixel_scalar, convert_pixel_table, rgba32_to_ycc444,
    LaneWidth, Rgb32Format, YccBatchConverter, YccConversionMode, YccOptions, YccPlanarImageMut,
    YccPlaneOptions,
};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();
    let pixels: Vec<u32> = (0..WIDTH as usize * HEIGHT as usize)
        .map(|_| rng.random::<u32>())
        .collect();

    let table = build_weight_table(0).unwrap();

    c.bench_function("rgb2ycc: scalar pixels", |b| {
        b.iter(|| {
            let mut acc = 0i32;
            for &px in pixels.iter() {
                let ycc = convert_pixel_scalar(px, Rgb32Format::Rgba32);
                acc = acc.wrapping_add(ycc.y + ycc.cb + ycc.cr);
            }
            acc
        })
    });

    c.bench_function("rgb2ycc: table pixels", |b| {
        b.iter(|| {
            let mut acc = 0i32;
            for &px in pixels.iter() {
                let ycc = convert_pixel_table(px, Rgb32Format::Rgba32, &table);
                acc = acc.wrapping_add(ycc.y + ycc.cb + ycc.cr);
            }
            acc
        })
    });

    let r16: Vec<i16> = pixels.iter().map(|&px| (px & 0xff) as i16).collect();
    let g16: Vec<i16> = pixels.iter().map(|&px| ((px >> 8) & 0xff) as i16).collect();
    let b16: Vec<i16> = pixels.iter().map(|&px| ((px >> 16) & 0xff) as i16).collect();
    let mut y16 = vec![0i16; pixels.len()];
    let mut cb16 = vec![0i16; pixels.len()];
    let mut cr16 = vec![0i16; pixels.len()];

    for lanes in [LaneWidth::One, LaneWidth::Narrow] {
        let converter = YccBatchConverter::<i16>::new(lanes, YccOptions::default()).unwrap();
        c.bench_function(&format!("rgb2ycc: i16 batch {}", lanes), |b| {
            b.iter(|| {
                converter
                    .convert(&r16, &g16, &b16, &mut y16, &mut cb16, &mut cr16, 0)
                    .unwrap();
            })
        });
    }

    let r32: Vec<i32> = r16.iter().map(|&v| v as i32).collect();
    let g32: Vec<i32> = g16.iter().map(|&v| v as i32).collect();
    let b32: Vec<i32> = b16.iter().map(|&v| v as i32).collect();
    let mut y32 = vec![0i32; pixels.len()];
    let mut cb32 = vec![0i32; pixels.len()];
    let mut cr32 = vec![0i32; pixels.len()];

    for lanes in [LaneWidth::One, LaneWidth::Wide] {
        let converter = YccBatchConverter::<i32>::new(lanes, YccOptions::default()).unwrap();
        c.bench_function(&format!("rgb2ycc: i32 batch {}", lanes), |b| {
            b.iter(|| {
                converter
                    .convert(&r32, &g32, &b32, &mut y32, &mut cb32, &mut cr32, 0)
                    .unwrap();
            })
        });
    }

    let mut planar_image = YccPlanarImageMut::<i16>::alloc(WIDTH, HEIGHT);

    for mode in [
        YccConversionMode::Scalar,
        YccConversionMode::Table,
        YccConversionMode::Vector,
    ] {
        let options = YccPlaneOptions {
            mode,
            row_bias: [0, 1],
            ..Default::default()
        };
        c.bench_function(&format!("rgb2ycc: RGBA -> YCbCr 444 {:?}", mode), |b| {
            b.iter(|| {
                rgba32_to_ycc444(&mut planar_image, &pixels, WIDTH, &options).unwrap();
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
