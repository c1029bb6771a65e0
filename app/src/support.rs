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
use image::GrayImage;
use rgb2ycc::YccPlanarImage;

/// Image rows are RGBA in memory, which is exactly native `Rgb32Format::Rgba32`
pub(crate) fn rgba_bytes_to_pixels(rgba: &[u8]) -> Vec<u32> {
    rgba.chunks_exact(4)
        .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]))
        .collect()
}

pub(crate) fn planes_equal(a: &YccPlanarImage<i16>, b: &YccPlanarImage<i16>) -> bool {
    a.y_plane == b.y_plane && a.cb_plane == b.cb_plane && a.cr_plane == b.cr_plane
}

/// Drops `extra_bits` of additional chroma precision before storing as 8-bit gray
pub(crate) fn save_plane(
    filename: &str,
    plane: &[i16],
    stride: u32,
    width: u32,
    height: u32,
    extra_bits: u32,
) {
    let mut bytes = Vec::with_capacity(width as usize * height as usize);
    for row in plane.chunks_exact(stride as usize) {
        for &v in row.iter().take(width as usize) {
            bytes.push((v >> extra_bits).clamp(0, 255) as u8);
        }
    }
    let gray = GrayImage::from_raw(width, height, bytes).unwrap();
    gray.save(filename).unwrap();
}
