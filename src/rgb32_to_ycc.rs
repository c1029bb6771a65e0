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
use crate::images::YccPlanarImageMut;
use crate::rgb32::Rgb32Layout;
use crate::rgb_to_ycc::pixel_to_ycc_impl;
use crate::ycc_batch::YccBatchConverter;
use crate::ycc_error::{check_cbcr_fraction_bits, check_rgb32_source};
use crate::ycc_support::{ByteOrder, LaneWidth, Rgb32Format, YccOptions};
use crate::ycc_table::Rgb8ToYccTable;
use crate::ycc_weights::YccRowParams;
use crate::YccError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// Strategy used to convert each row, all of them produce identical planes
pub enum YccConversionMode {
    Scalar,
    Table,
    #[default]
    Vector,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct YccPlaneOptions {
    pub mode: YccConversionMode,
    pub options: YccOptions,
    /// Chroma accumulator bias for even and odd rows, used with extra fraction bits
    pub row_bias: [i32; 2],
    pub byte_order: ByteOrder,
}

const VECTOR_CHUNK: usize = 64;

enum RowConverter {
    Scalar,
    Table(Box<Rgb8ToYccTable>),
    Vector(YccBatchConverter<i16>),
}

impl RowConverter {
    fn new(mode: YccConversionMode, options: YccOptions) -> Result<Self, YccError> {
        check_cbcr_fraction_bits(options.cbcr_add_fraction_bits)?;
        Ok(match mode {
            YccConversionMode::Scalar => RowConverter::Scalar,
            YccConversionMode::Table => RowConverter::Table(Box::new(Rgb8ToYccTable::new(options)?)),
            YccConversionMode::Vector => {
                RowConverter::Vector(YccBatchConverter::new(LaneWidth::Narrow, options)?)
            }
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn convert_row(
        &self,
        y_dst: &mut [i16],
        cb_dst: &mut [i16],
        cr_dst: &mut [i16],
        src: &[u32],
        layout: Rgb32Layout,
        options: YccOptions,
        bias: i32,
    ) {
        match self {
            RowConverter::Scalar => {
                let params = YccRowParams::new(options, bias);
                for (((y_dst, cb_dst), cr_dst), &pixel) in y_dst
                    .iter_mut()
                    .zip(cb_dst.iter_mut())
                    .zip(cr_dst.iter_mut())
                    .zip(src.iter())
                {
                    let px = pixel_to_ycc_impl(
                        layout.red(pixel) as i32,
                        layout.green(pixel) as i32,
                        layout.blue(pixel) as i32,
                        &params,
                    );
                    *y_dst = px.y as i16;
                    *cb_dst = px.cb as i16;
                    *cr_dst = px.cr as i16;
                }
            }
            RowConverter::Table(table) => {
                for (((y_dst, cb_dst), cr_dst), &pixel) in y_dst
                    .iter_mut()
                    .zip(cb_dst.iter_mut())
                    .zip(cr_dst.iter_mut())
                    .zip(src.iter())
                {
                    let px = table.convert_biased(pixel, layout, bias);
                    *y_dst = px.y as i16;
                    *cb_dst = px.cb as i16;
                    *cr_dst = px.cr as i16;
                }
            }
            RowConverter::Vector(converter) => {
                let params = YccRowParams::new(options, bias);
                let bits = options.cbcr_add_fraction_bits;
                let mut r = [0i16; VECTOR_CHUNK];
                let mut g = [0i16; VECTOR_CHUNK];
                let mut b = [0i16; VECTOR_CHUNK];
                let mut scratch_y = [0i16; VECTOR_CHUNK];
                let mut scratch_cb = [0i16; VECTOR_CHUNK];
                let mut scratch_cr = [0i16; VECTOR_CHUNK];
                for (((y_dst, cb_dst), cr_dst), src) in y_dst
                    .chunks_mut(VECTOR_CHUNK)
                    .zip(cb_dst.chunks_mut(VECTOR_CHUNK))
                    .zip(cr_dst.chunks_mut(VECTOR_CHUNK))
                    .zip(src.chunks(VECTOR_CHUNK))
                {
                    let n = src.len();
                    for (((r, g), b), &pixel) in r
                        .iter_mut()
                        .zip(g.iter_mut())
                        .zip(b.iter_mut())
                        .zip(src.iter())
                    {
                        *r = layout.red(pixel) as i16;
                        *g = layout.green(pixel) as i16;
                        *b = layout.blue(pixel) as i16;
                    }
                    if bits == 0 {
                        converter.handle_row(
                            &r[..n],
                            &g[..n],
                            &b[..n],
                            &mut y_dst[..n],
                            &mut cb_dst[..n],
                            &mut cr_dst[..n],
                            &params,
                        );
                        continue;
                    }
                    // Luma from the pixel, chroma from the pixel repeated over the block
                    converter.handle_row(
                        &r[..n],
                        &g[..n],
                        &b[..n],
                        &mut y_dst[..n],
                        &mut scratch_cb[..n],
                        &mut scratch_cr[..n],
                        &params,
                    );
                    for v in r[..n]
                        .iter_mut()
                        .chain(g[..n].iter_mut())
                        .chain(b[..n].iter_mut())
                    {
                        *v <<= bits;
                    }
                    converter.handle_row(
                        &r[..n],
                        &g[..n],
                        &b[..n],
                        &mut scratch_y[..n],
                        &mut cb_dst[..n],
                        &mut cr_dst[..n],
                        &params,
                    );
                }
            }
        }
    }
}

fn rgb32_to_ycc444<const FORMAT: u8>(
    planar_image: &mut YccPlanarImageMut<i16>,
    src: &[u32],
    src_stride: u32,
    plane_options: &YccPlaneOptions,
) -> Result<(), YccError> {
    let format: Rgb32Format = FORMAT.into();
    planar_image.check_constraints()?;
    check_rgb32_source(src, src_stride, planar_image.width, planar_image.height)?;

    let converter = RowConverter::new(plane_options.mode, plane_options.options)?;
    let layout = Rgb32Layout::new(format, plane_options.byte_order);
    let options = plane_options.options;
    let row_bias = plane_options.row_bias;
    let width = planar_image.width as usize;

    let y_stride = planar_image.y_stride as usize;
    let cb_stride = planar_image.cb_stride as usize;
    let cr_stride = planar_image.cr_stride as usize;
    let y_plane = planar_image.y_plane.borrow_mut();
    let cb_plane = planar_image.cb_plane.borrow_mut();
    let cr_plane = planar_image.cr_plane.borrow_mut();

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = y_plane
            .par_chunks_exact_mut(y_stride)
            .zip(cb_plane.par_chunks_exact_mut(cb_stride))
            .zip(cr_plane.par_chunks_exact_mut(cr_stride))
            .zip(src.par_chunks_exact(src_stride as usize))
            .enumerate();
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = y_plane
            .chunks_exact_mut(y_stride)
            .zip(cb_plane.chunks_exact_mut(cb_stride))
            .zip(cr_plane.chunks_exact_mut(cr_stride))
            .zip(src.chunks_exact(src_stride as usize))
            .enumerate();
    }

    iter.for_each(|(row, (((y_dst, cb_dst), cr_dst), src))| {
        converter.convert_row(
            &mut y_dst[..width],
            &mut cb_dst[..width],
            &mut cr_dst[..width],
            &src[..width],
            layout,
            options,
            row_bias[row & 1],
        );
    });

    Ok(())
}

macro_rules! ycc444_forward {
    ($method: ident, $cn: expr, $name: ident, $stride_name: ident) => {
        #[doc = concat!("Converts `", stringify!($name), "` pixels into full resolution `i16` Y, Cb, Cr planes.")]
        ///
        /// Stride of the source counts pixels per row. Each pixel converts as a uniform
        /// block, see [crate::pixel_to_ycc]. Odd rows receive `row_bias[1]`, even rows
        /// `row_bias[0]`.
        pub fn $method(
            planar_image: &mut YccPlanarImageMut<i16>,
            $name: &[u32],
            $stride_name: u32,
            options: &YccPlaneOptions,
        ) -> Result<(), YccError> {
            rgb32_to_ycc444::<{ $cn as u8 }>(planar_image, $name, $stride_name, options)
        }
    };
}

ycc444_forward!(rgba32_to_ycc444, Rgb32Format::Rgba32, rgba, rgba_stride);
ycc444_forward!(bgra32_to_ycc444, Rgb32Format::Bgra32, bgra, bgra_stride);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::BufferStoreMut;
    use crate::rgb_to_ycc::pixel_to_ycc;
    use crate::ycc_support::YccLevel;
    use crate::ycc_weights::MAX_CBCR_ADD_FRACTION_BITS;
    use rand::Rng;

    fn random_image(width: u32, height: u32, stride: u32, layout: Rgb32Layout) -> Vec<u32> {
        let mut rng = rand::rng();
        let mut src = vec![0u32; stride as usize * height as usize];
        for row in src.chunks_exact_mut(stride as usize) {
            for px in row.iter_mut().take(width as usize) {
                *px = layout.pack(
                    rng.random_range(0..=255u8),
                    rng.random_range(0..=255u8),
                    rng.random_range(0..=255u8),
                );
            }
        }
        src
    }

    fn convert(
        src: &[u32],
        stride: u32,
        width: u32,
        height: u32,
        format: Rgb32Format,
        options: &YccPlaneOptions,
    ) -> YccPlanarImageMut<'static, i16> {
        let mut image = YccPlanarImageMut::<i16>::alloc(width, height);
        match format {
            Rgb32Format::Rgba32 => rgba32_to_ycc444(&mut image, src, stride, options).unwrap(),
            Rgb32Format::Bgra32 => bgra32_to_ycc444(&mut image, src, stride, options).unwrap(),
        }
        image
    }

    #[test]
    fn test_modes_are_identical() {
        let (width, height, stride) = (77u32, 9u32, 83u32);
        for format in [Rgb32Format::Rgba32, Rgb32Format::Bgra32] {
            for byte_order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
                let layout = Rgb32Layout::new(format, byte_order);
                let src = random_image(width, height, stride, layout);
                for bits in [0, 2, MAX_CBCR_ADD_FRACTION_BITS] {
                    for level in [YccLevel::Sample, YccLevel::Centered] {
                        let mut options = YccPlaneOptions {
                            mode: YccConversionMode::Scalar,
                            options: YccOptions::new(level, bits),
                            row_bias: [-(1 << 14), 1 << 16],
                            byte_order,
                        };
                        let scalar = convert(&src, stride, width, height, format, &options);
                        options.mode = YccConversionMode::Table;
                        let table = convert(&src, stride, width, height, format, &options);
                        options.mode = YccConversionMode::Vector;
                        let vector = convert(&src, stride, width, height, format, &options);
                        assert_eq!(scalar.y_plane.borrow(), table.y_plane.borrow());
                        assert_eq!(scalar.cb_plane.borrow(), table.cb_plane.borrow());
                        assert_eq!(scalar.cr_plane.borrow(), table.cr_plane.borrow());
                        assert_eq!(scalar.y_plane.borrow(), vector.y_plane.borrow());
                        assert_eq!(scalar.cb_plane.borrow(), vector.cb_plane.borrow());
                        assert_eq!(scalar.cr_plane.borrow(), vector.cr_plane.borrow());
                    }
                }
            }
        }
    }

    #[test]
    fn test_matches_pixel_converter_with_row_bias() {
        let (width, height) = (33u32, 6u32);
        let layout = Rgb32Layout::native(Rgb32Format::Bgra32);
        let src = random_image(width, height, width, layout);
        let ycc_options = YccOptions::new(YccLevel::Sample, 2);
        let options = YccPlaneOptions {
            mode: YccConversionMode::Vector,
            options: ycc_options,
            row_bias: [0, 3 << 15],
            byte_order: ByteOrder::NATIVE,
        };
        let image = convert(&src, width, width, height, Rgb32Format::Bgra32, &options);
        let fixed = image.to_fixed();
        for row in 0..height as usize {
            for x in 0..width as usize {
                let pixel = src[row * width as usize + x];
                let expected = pixel_to_ycc(
                    layout.red(pixel),
                    layout.green(pixel),
                    layout.blue(pixel),
                    ycc_options,
                    options.row_bias[row & 1],
                );
                let offset = row * fixed.y_stride as usize + x;
                assert_eq!(fixed.y_plane[offset] as i32, expected.y);
                assert_eq!(fixed.cb_plane[offset] as i32, expected.cb);
                assert_eq!(fixed.cr_plane[offset] as i32, expected.cr);
            }
        }
    }

    #[test]
    fn test_extra_bits_without_bias_match_plain() {
        let (width, height) = (70u32, 4u32);
        let layout = Rgb32Layout::native(Rgb32Format::Rgba32);
        let src = random_image(width, height, width, layout);
        for mode in [
            YccConversionMode::Scalar,
            YccConversionMode::Table,
            YccConversionMode::Vector,
        ] {
            let plain = YccPlaneOptions {
                mode,
                ..Default::default()
            };
            let extended = YccPlaneOptions {
                mode,
                options: YccOptions::new(YccLevel::Sample, 2),
                ..Default::default()
            };
            let a = convert(&src, width, width, height, Rgb32Format::Rgba32, &plain);
            let b = convert(&src, width, width, height, Rgb32Format::Rgba32, &extended);
            assert_eq!(a.y_plane.borrow(), b.y_plane.borrow());
            assert_eq!(a.cb_plane.borrow(), b.cb_plane.borrow());
            assert_eq!(a.cr_plane.borrow(), b.cr_plane.borrow());
        }
    }

    #[test]
    fn test_padding_is_untouched() {
        let (width, height) = (10u32, 3u32);
        let layout = Rgb32Layout::native(Rgb32Format::Rgba32);
        let src = random_image(width, height, width, layout);
        let mut y = vec![i16::MIN; 12 * 3];
        let mut cb = vec![i16::MIN; 12 * 3];
        let mut cr = vec![i16::MIN; 12 * 3];
        let mut image = YccPlanarImageMut {
            y_plane: BufferStoreMut::Borrowed(&mut y),
            y_stride: 12,
            cb_plane: BufferStoreMut::Borrowed(&mut cb),
            cb_stride: 12,
            cr_plane: BufferStoreMut::Borrowed(&mut cr),
            cr_stride: 12,
            width,
            height,
        };
        rgba32_to_ycc444(&mut image, &src, width, &YccPlaneOptions::default()).unwrap();
        drop(image);
        for row in 0..height as usize {
            assert_eq!(y[row * 12 + 10], i16::MIN);
            assert_eq!(cb[row * 12 + 11], i16::MIN);
            assert!(y[row * 12..row * 12 + 10].iter().all(|&v| (0..=255).contains(&v)));
        }
    }

    #[test]
    fn test_invalid_source() {
        let mut image = YccPlanarImageMut::<i16>::alloc(8, 8);
        let src = vec![0u32; 8 * 7];
        assert!(matches!(
            rgba32_to_ycc444(&mut image, &src, 8, &YccPlaneOptions::default()),
            Err(YccError::SourceSizeMismatch(_))
        ));
        let src = vec![0u32; 7 * 8];
        assert!(matches!(
            rgba32_to_ycc444(&mut image, &src, 7, &YccPlaneOptions::default()),
            Err(YccError::MinimumSourceSizeMismatch(_))
        ));
    }

    #[test]
    fn test_invalid_options() {
        let mut image = YccPlanarImageMut::<i16>::alloc(4, 4);
        let src = vec![0u32; 16];
        let options = YccPlaneOptions {
            options: YccOptions::new(YccLevel::Sample, MAX_CBCR_ADD_FRACTION_BITS + 1),
            ..Default::default()
        };
        assert!(matches!(
            bgra32_to_ycc444(&mut image, &src, 4, &options),
            Err(YccError::CbCrFractionBitsOutOfRange(_))
        ));
    }
}
