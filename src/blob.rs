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

//! Assemble the blob: four header blocks interleaved with three images.

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::BlobError;
use crate::headers::{HEADER1, HEADER2, HEADER3, HEADER4, HEADERS_LEN};
use crate::loader::load;
use crate::pixels::{PixelBuffer, Resolution};
use crate::resample::{rescale_720, rescale_crop_480};
use crate::swap::swapperize;

/// The bootloader looks for this name; it is always written to the
/// working directory by the command line tool.
pub const BLOB_FILE_NAME: &str = "bmp.blob";

/// Size of every blob this crate produces.
pub const BLOB_LEN: usize = HEADERS_LEN
    + Resolution::P480.byte_len()
    + Resolution::P720.byte_len()
    + Resolution::P1080.byte_len();

/// One write into the blob, for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Header(u8),
    Image(Resolution),
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Header(n) => write!(f, "{} (header{})", BLOB_FILE_NAME, n),
            Section::Image(r) => write!(f, "{} ({} image)", BLOB_FILE_NAME, r.height()),
        }
    }
}

fn put<W: Write>(out: &mut W, section: Section, bytes: &[u8]) -> Result<(), BlobError> {
    out.write_all(bytes)
        .map_err(|source| BlobError::Write { section, source })
}

fn put_image<W: Write>(
    out: &mut W,
    expected: Resolution,
    mut image: PixelBuffer,
) -> Result<(), BlobError> {
    let section = Section::Image(expected);
    if image.resolution() != expected || image.as_bytes().len() != expected.byte_len() {
        return Err(BlobError::Size {
            section,
            expected: expected.byte_len(),
            actual: image.as_bytes().len(),
        });
    }
    swapperize(image.as_bytes_mut(), expected.height(), expected.width());
    put(out, section, image.as_bytes())
}

/// Write the complete blob to `out`.
///
/// Each image is flipped and channel swapped on the way out, and is
/// released as soon as it has been written.
pub fn write_blob<W: Write>(
    out: &mut W,
    i480: PixelBuffer,
    i720: PixelBuffer,
    i1080: PixelBuffer,
) -> Result<(), BlobError> {
    put(out, Section::Header(1), HEADER1)?;
    put(out, Section::Header(2), HEADER2)?;
    put_image(out, Resolution::P480, i480)?;
    put(out, Section::Header(3), HEADER3)?;
    put_image(out, Resolution::P720, i720)?;
    put(out, Section::Header(4), HEADER4)?;
    put_image(out, Resolution::P1080, i1080)?;
    Ok(())
}

/// Create (or truncate) `dest` and write the blob into it.
///
/// A failed write leaves whatever was written so far in place.
pub fn create_blob(
    dest: &Path,
    i480: PixelBuffer,
    i720: PixelBuffer,
    i1080: PixelBuffer,
) -> Result<(), BlobError> {
    let mut file = File::create(dest).map_err(|source| BlobError::Create {
        path: dest.to_path_buf(),
        source,
    })?;
    write_blob(&mut file, i480, i720, i1080)
}

/// Load the inputs, derive any missing sizes from the 1080p image and
/// write the blob to `dest`.
///
/// `smaller` holds the 720p and 480p paths when those are supplied.
/// All inputs are validated before `dest` is touched.
pub fn build_blob(
    i1080: &Path,
    smaller: Option<(&Path, &Path)>,
    dest: &Path,
) -> Result<(), BlobError> {
    let i1080 = load(i1080, Resolution::P1080)?;
    let (i720, i480) = match smaller {
        Some((p720, p480)) => (load(p720, Resolution::P720)?, load(p480, Resolution::P480)?),
        None => (rescale_720(&i1080), rescale_crop_480(&i1080)),
    };
    create_blob(dest, i480, i720, i1080)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Accepts `room` bytes, then reports that nothing more fits.
    struct Cramped {
        room: usize,
        taken: Vec<u8>,
    }

    impl Write for Cramped {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.room - self.taken.len());
            self.taken.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn images() -> (PixelBuffer, PixelBuffer, PixelBuffer) {
        (
            PixelBuffer::filled(Resolution::P480, [1, 2, 3]),
            PixelBuffer::filled(Resolution::P720, [4, 5, 6]),
            PixelBuffer::filled(Resolution::P1080, [7, 8, 9]),
        )
    }

    #[test]
    fn blob_layout() {
        let (i480, i720, i1080) = images();
        let mut out = Vec::new();
        write_blob(&mut out, i480, i720, i1080).unwrap();
        assert_eq!(out.len(), BLOB_LEN);
        assert_eq!(
            BLOB_LEN,
            192 + 54 + 640 * 480 * 3 + 56 + 1280 * 720 * 3 + 54 + 1920 * 1080 * 3
        );

        let mut at = 0;
        for (chunk, fill) in [
            (&HEADER1[..], None),
            (&HEADER2[..], None),
            (&[3u8, 2, 1][..], Some(Resolution::P480)),
            (&HEADER3[..], None),
            (&[6u8, 5, 4][..], Some(Resolution::P720)),
            (&HEADER4[..], None),
            (&[9u8, 8, 7][..], Some(Resolution::P1080)),
        ] {
            match fill {
                None => {
                    assert_eq!(&out[at..at + chunk.len()], chunk);
                    at += chunk.len();
                }
                Some(r) => {
                    let end = at + r.byte_len();
                    assert!(out[at..end].chunks_exact(3).all(|p| p == chunk));
                    at = end;
                }
            }
        }
        assert_eq!(at, out.len());
    }

    #[test]
    fn images_are_flipped() {
        let (mut i480, i720, i1080) = images();
        // mark the top-left pixel; it must land in the first row of the
        // bottom-up output, channel swapped
        let last_row = 479 * 640 * 3;
        i480.as_bytes_mut()[..3].copy_from_slice(&[10, 20, 30]);
        let mut out = Vec::new();
        write_blob(&mut out, i480, i720, i1080).unwrap();
        let base = HEADER1.len() + HEADER2.len();
        assert_eq!(&out[base + last_row..base + last_row + 3], &[30, 20, 10]);
        assert_eq!(&out[base..base + 3], &[3, 2, 1]);
    }

    #[test]
    fn short_write_names_section() {
        let (i480, i720, i1080) = images();
        let mut out = Cramped {
            room: 200,
            taken: Vec::new(),
        };
        match write_blob(&mut out, i480, i720, i1080) {
            Err(BlobError::Write { section, .. }) => assert_eq!(section, Section::Header(2)),
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(out.taken.len(), 200);
    }

    #[test]
    fn wrong_buffer_is_rejected() {
        let (_, i720, i1080) = images();
        let mut out = Vec::new();
        match write_blob(&mut out, i720.clone(), i720, i1080) {
            Err(BlobError::Size {
                section,
                expected,
                actual,
            }) => {
                assert_eq!(section, Section::Image(Resolution::P480));
                assert_eq!(expected, 640 * 480 * 3);
                assert_eq!(actual, 1280 * 720 * 3);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("no-such-dir").join(BLOB_FILE_NAME);
        let (i480, i720, i1080) = images();
        assert!(matches!(
            create_blob(&dest, i480, i720, i1080),
            Err(BlobError::Create { .. })
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn section_names() {
        assert_eq!(Section::Header(3).to_string(), "bmp.blob (header3)");
        assert_eq!(Section::Image(Resolution::P720).to_string(), "bmp.blob (720 image)");
    }
}
