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
use crate::ycc_error::{check_image_size, check_plane};
use crate::YccError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[derive(Debug, Clone)]
/// Non-mutable full resolution Y, Cb, Cr planes
pub struct YccPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub cb_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub cb_stride: u32,
    pub cr_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub cr_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YccPlanarImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YccError> {
        check_image_size(self.width, self.height)?;
        check_plane(self.y_plane, self.y_stride, self.width, self.height)?;
        check_plane(self.cb_plane, self.cb_stride, self.width, self.height)?;
        check_plane(self.cr_plane, self.cr_stride, self.width, self.height)?;
        Ok(())
    }
}

#[derive(Debug)]
/// Mutable full resolution Y, Cb, Cr planes, the target of plane conversion
pub struct YccPlanarImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub cb_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub cb_stride: u32,
    pub cr_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub cr_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YccPlanarImageMut<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YccError> {
        check_image_size(self.width, self.height)?;
        check_plane(
            self.y_plane.borrow(),
            self.y_stride,
            self.width,
            self.height,
        )?;
        check_plane(
            self.cb_plane.borrow(),
            self.cb_stride,
            self.width,
            self.height,
        )?;
        check_plane(
            self.cr_plane.borrow(),
            self.cr_stride,
            self.width,
            self.height,
        )?;
        Ok(())
    }
}

impl<'a, T> YccPlanarImageMut<'a, T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Allocates tightly packed planes
    pub fn alloc(width: u32, height: u32) -> Self {
        let y_target = vec![T::default(); width as usize * height as usize];
        let cb_target = vec![T::default(); width as usize * height as usize];
        let cr_target = vec![T::default(); width as usize * height as usize];
        Self {
            y_plane: BufferStoreMut::Owned(y_target),
            y_stride: width,
            cb_plane: BufferStoreMut::Owned(cb_target),
            cb_stride: width,
            cr_plane: BufferStoreMut::Owned(cr_target),
            cr_stride: width,
            width,
            height,
        }
    }

    pub fn to_fixed(&'a self) -> YccPlanarImage<'a, T> {
        YccPlanarImage {
            y_plane: self.y_plane.borrow(),
            y_stride: self.y_stride,
            cb_plane: self.cb_plane.borrow(),
            cb_stride: self.cb_stride,
            cr_plane: self.cr_plane.borrow(),
            cr_stride: self.cr_stride,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_valid() {
        let image = YccPlanarImageMut::<i16>::alloc(17, 5);
        assert!(image.check_constraints().is_ok());
        let fixed = image.to_fixed();
        assert_eq!(fixed.y_plane.len(), 17 * 5);
        assert_eq!(fixed.cr_stride, 17);
        assert!(fixed.check_constraints().is_ok());
    }

    #[test]
    fn test_borrowed_planes_with_padding() {
        let mut y = vec![0i16; 20 * 3];
        let mut cb = vec![0i16; 16 * 3];
        let mut cr = vec![0i16; 16 * 3];
        let image = YccPlanarImageMut {
            y_plane: BufferStoreMut::Borrowed(&mut y),
            y_stride: 20,
            cb_plane: BufferStoreMut::Borrowed(&mut cb),
            cb_stride: 16,
            cr_plane: BufferStoreMut::Borrowed(&mut cr),
            cr_stride: 16,
            width: 16,
            height: 3,
        };
        assert!(image.check_constraints().is_ok());
    }

    #[test]
    fn test_zero_sized_image() {
        let image = YccPlanarImageMut::<i16>::alloc(0, 4);
        assert!(matches!(
            image.check_constraints(),
            Err(YccError::ZeroBaseSize)
        ));
    }

    #[test]
    fn test_short_chroma_plane() {
        let mut image = YccPlanarImageMut::<i16>::alloc(8, 8);
        image.cb_plane = BufferStoreMut::Owned(vec![0i16; 8 * 7]);
        assert!(matches!(
            image.check_constraints(),
            Err(YccError::PlaneSizeMismatch(_))
        ));
    }
}
