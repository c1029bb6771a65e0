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
use crate::ycc_support::LaneWidth;
use crate::ycc_weights::MAX_CBCR_ADD_FRACTION_BITS;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum YccError {
    CbCrFractionBitsOutOfRange(u32),
    LaneWidthMismatch {
        requested: LaneWidth,
        supported: LaneWidth,
    },
    LengthMismatch(MismatchedSize),
    PointerOverflow,
    ZeroBaseSize,
    SourceSizeMismatch(MismatchedSize),
    MinimumSourceSizeMismatch(MismatchedSize),
    PlaneSizeMismatch(MismatchedSize),
    PlaneMinimumSizeMismatch(MismatchedSize),
}

impl Display for YccError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YccError::CbCrFractionBitsOutOfRange(bits) => f.write_fmt(format_args!(
                "CbCr additional fraction bits must be at most {}, but it was {}",
                MAX_CBCR_ADD_FRACTION_BITS, bits
            )),
            YccError::LaneWidthMismatch {
                requested,
                supported,
            } => f.write_fmt(format_args!(
                "Lane width {} is not supported by this sample type, use {} or LaneWidth::One",
                requested, supported
            )),
            YccError::LengthMismatch(size) => f.write_fmt(format_args!(
                "All batch slices must have equal length {}, but one was {}",
                size.expected, size.received
            )),
            YccError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YccError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YccError::SourceSizeMismatch(size) => f.write_fmt(format_args!(
                "Source size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YccError::MinimumSourceSizeMismatch(size) => f.write_fmt(format_args!(
                "Source must have size at least {} but it is {}",
                size.expected, size.received
            )),
            YccError::PlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            YccError::PlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for YccError {}

#[inline]
pub(crate) fn check_cbcr_fraction_bits(bits: u32) -> Result<(), YccError> {
    if bits > MAX_CBCR_ADD_FRACTION_BITS {
        return Err(YccError::CbCrFractionBitsOutOfRange(bits));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_equal_length(expected: usize, received: usize) -> Result<(), YccError> {
    if expected != received {
        return Err(YccError::LengthMismatch(MismatchedSize { expected, received }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), YccError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(YccError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_image_size(width: u32, height: u32) -> Result<(), YccError> {
    if width == 0 || height == 0 {
        return Err(YccError::ZeroBaseSize);
    }
    check_overflow_v2(width as usize, height as usize)
}

/// Packed sources are addressed in whole pixels, `stride` counts pixels per row
#[inline]
pub(crate) fn check_rgb32_source(
    arr: &[u32],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YccError> {
    check_overflow_v2(stride as usize, height as usize)?;
    if arr.len() != stride as usize * height as usize {
        return Err(YccError::SourceSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: arr.len(),
        }));
    }
    if stride < width {
        return Err(YccError::MinimumSourceSizeMismatch(MismatchedSize {
            expected: width as usize * height as usize,
            received: stride as usize * height as usize,
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_plane<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YccError> {
    check_overflow_v2(stride as usize, height as usize)?;
    check_overflow_v2(width as usize, height as usize)?;
    if stride < width {
        return Err(YccError::PlaneMinimumSizeMismatch(MismatchedSize {
            expected: width as usize * height as usize,
            received: stride as usize * height as usize,
        }));
    }
    if stride as usize * height as usize != data.len() {
        return Err(YccError::PlaneSizeMismatch(MismatchedSize {
            expected: stride as usize * height as usize,
            received: data.len(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_bits_bounds() {
        assert!(check_cbcr_fraction_bits(0).is_ok());
        assert!(check_cbcr_fraction_bits(MAX_CBCR_ADD_FRACTION_BITS).is_ok());
        assert_eq!(
            check_cbcr_fraction_bits(MAX_CBCR_ADD_FRACTION_BITS + 1),
            Err(YccError::CbCrFractionBitsOutOfRange(
                MAX_CBCR_ADD_FRACTION_BITS + 1
            ))
        );
    }

    #[test]
    fn test_plane_checks() {
        let plane = vec![0i16; 12];
        assert!(check_plane(&plane, 4, 4, 3).is_ok());
        assert!(check_plane(&plane, 6, 5, 2).is_ok());
        assert!(matches!(
            check_plane(&plane, 3, 4, 4),
            Err(YccError::PlaneMinimumSizeMismatch(_))
        ));
        assert!(matches!(
            check_plane(&plane, 4, 4, 4),
            Err(YccError::PlaneSizeMismatch(_))
        ));
    }

    #[test]
    fn test_source_checks() {
        let source = vec![0u32; 20];
        assert!(check_rgb32_source(&source, 5, 4, 4).is_ok());
        assert!(matches!(
            check_rgb32_source(&source, 4, 5, 5),
            Err(YccError::MinimumSourceSizeMismatch(_))
        ));
        assert!(matches!(
            check_rgb32_source(&source, 5, 5, 5),
            Err(YccError::SourceSizeMismatch(_))
        ));
        assert_eq!(check_image_size(0, 4), Err(YccError::ZeroBaseSize));
    }

    #[test]
    fn test_display_mentions_sizes() {
        let error = YccError::LengthMismatch(MismatchedSize {
            expected: 16,
            received: 15,
        });
        let message = error.to_string();
        assert!(message.contains("16"));
        assert!(message.contains("15"));
    }
}
