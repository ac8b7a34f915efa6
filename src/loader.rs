// Copyright 2024 Chris Ridd <chrisridd@mac.com>. All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are
// met:
//
//    * Redistributions of source code must retain the above copyright
// notice, this list of conditions and the following disclaimer.
//    * Redistributions in binary form must reproduce the above
// copyright notice, this list of conditions and the following disclaimer
// in the documentation and/or other materials provided with the
// distribution.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
// "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
// LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR
// A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT
// OWNER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
// SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE,
// DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY
// THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT
// (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::path::Path;

use image::{GenericImageView, ImageError, ImageReader};

use crate::error::BlobError;
use crate::pixels::{PixelBuffer, Resolution};

/// Decode `path` to 8-bit RGB, requiring exactly the `expected` geometry.
pub fn load(path: &Path, expected: Resolution) -> Result<PixelBuffer, BlobError> {
    let decode = |source: ImageError| BlobError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode(ImageError::IoError(e)))?
        .decode()
        .map_err(decode)?;

    let (w, h) = img.dimensions();
    let mismatch = || BlobError::Dimensions {
        path: path.to_path_buf(),
        expected,
        width: w,
        height: h,
    };
    if w as usize != expected.width() || h as usize != expected.height() {
        return Err(mismatch());
    }
    PixelBuffer::new(expected, img.to_rgb8().into_raw()).map_err(|_| mismatch())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs;

    #[test]
    fn loads_exact_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("480.png");
        RgbImage::from_pixel(640, 480, Rgb([1, 2, 3])).save(&path).unwrap();

        let buf = load(&path, Resolution::P480).unwrap();
        assert_eq!(buf.resolution(), Resolution::P480);
        assert_eq!(buf.pixel(479, 639), [1, 2, 3]);
    }

    #[test]
    fn drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("480.png");
        RgbaImage::from_pixel(640, 480, Rgba([9, 8, 7, 128])).save(&path).unwrap();

        let buf = load(&path, Resolution::P480).unwrap();
        assert_eq!(buf.as_bytes().len(), 640 * 480 * 3);
        assert_eq!(buf.pixel(0, 0), [9, 8, 7]);
    }

    #[test]
    fn rejects_wrong_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("720.png");
        RgbImage::new(1281, 720).save(&path).unwrap();

        match load(&path, Resolution::P720) {
            Err(BlobError::Dimensions { width, height, expected, .. }) => {
                assert_eq!((width, height), (1281, 720));
                assert_eq!(expected, Resolution::P720);
            }
            other => panic!("unexpected result {:?}", other.map(|b| b.resolution())),
        }
    }

    #[test]
    fn rejects_garbage_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let garbage = dir.path().join("garbage.png");
        fs::write(&garbage, b"definitely not an image").unwrap();
        assert!(matches!(
            load(&garbage, Resolution::P1080),
            Err(BlobError::Decode { .. })
        ));
        assert!(matches!(
            load(&dir.path().join("missing.png"), Resolution::P1080),
            Err(BlobError::Decode { .. })
        ));
    }
}
