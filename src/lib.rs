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
//! Bit exact fixed-point RGB32 to YCbCr conversion, the colour stage of a JPEG encoder.
//!
//! Three interchangeable strategies are provided, plain scalar arithmetic, 256 entry lookup
//! tables and vectorized batches, and all of them produce identical results for every
//! 8-bit RGB triple.
//!
//! With `cbcr_add_fraction_bits = A` chroma is computed from component sums over blocks of
//! `1 << A` pixels and descaled by `FRACTION_BITS + A`, which yields the block average for
//! chroma subsampling. A per-call bias on the chroma accumulator steers its rounding.
#![cfg_attr(docsrs, feature(doc_cfg))]
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod neon;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
mod sse;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
mod avx2;

mod fixed_point;
mod images;
mod rgb32;
mod rgb32_to_ycc;
mod rgb_to_ycc;
mod ycc_batch;
mod ycc_error;
mod ycc_support;
mod ycc_table;
mod ycc_weights;

pub use fixed_point::{Fixed16, FixedPoint};

pub use ycc_support::ByteOrder;
pub use ycc_support::Channel;
pub use ycc_support::LaneWidth;
pub use ycc_support::Rgb32Format;
pub use ycc_support::YccLevel;
pub use ycc_support::YccOptions;
pub use ycc_support::YccPixel;

pub use ycc_error::MismatchedSize;
pub use ycc_error::YccError;

pub use ycc_weights::{
    cbcr_bias_offset, cbcr_offset, y_offset, CB_B_WEIGHT, CB_G_WEIGHT, CB_R_WEIGHT, CR_B_WEIGHT,
    CR_G_WEIGHT, CR_R_WEIGHT, FRACTION_BITS, MAX_CBCR_ADD_FRACTION_BITS, Y_BG_WEIGHT,
    Y_B_WEIGHT, Y_G_WEIGHT, Y_RG_WEIGHT, Y_R_WEIGHT,
};

pub use rgb32::extract_component;
pub use rgb32::pack_components;
pub use rgb32::Rgb32Layout;

pub use rgb_to_ycc::convert_pixel_scalar;
pub use rgb_to_ycc::convert_pixel_scalar_with;
pub use rgb_to_ycc::pixel_to_ycc;
pub use rgb_to_ycc::rgb_to_cb;
pub use rgb_to_ycc::rgb_to_cr;
pub use rgb_to_ycc::rgb_to_y;
pub use rgb_to_ycc::rgb_to_ycc;

pub use ycc_table::build_weight_table;
pub use ycc_table::convert_pixel_table;
pub use ycc_table::Rgb8ToYccTable;
pub use ycc_table::YccComponentWeights;

pub use ycc_batch::convert_batch;
pub use ycc_batch::YccBatch;
pub use ycc_batch::YccBatchConverter;
pub use ycc_batch::YccSample;

pub use images::{BufferStoreMut, YccPlanarImage, YccPlanarImageMut};

pub use rgb32_to_ycc::bgra32_to_ycc444;
pub use rgb32_to_ycc::rgba32_to_ycc444;
pub use rgb32_to_ycc::{YccConversionMode, YccPlaneOptions};
