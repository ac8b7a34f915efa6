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

use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

use image::ImageError;

use crate::blob::Section;
use crate::pixels::Resolution;

/// Everything that can stop a blob from being built.
#[derive(Debug)]
pub enum BlobError {
    Decode {
        path: PathBuf,
        source: ImageError,
    },
    Dimensions {
        path: PathBuf,
        expected: Resolution,
        width: u32,
        height: u32,
    },
    Create {
        path: PathBuf,
        source: io::Error,
    },
    Write {
        section: Section,
        source: io::Error,
    },
    Size {
        section: Section,
        expected: usize,
        actual: usize,
    },
}

impl Display for BlobError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BlobError::Decode { path, source } => write!(
                f,
                "{}: could not load image (TGA, JPG and PNG supported): {}",
                path.display(),
                source
            ),
            BlobError::Dimensions {
                path,
                expected,
                width,
                height,
            } => write!(
                f,
                "{}: must be {}, got {}x{} size",
                path.display(),
                expected,
                width,
                height
            ),
            BlobError::Create { path, source } => write!(
                f,
                "Could not create {} (do you have write permission?): {}",
                path.display(),
                source
            ),
            BlobError::Write { section, source } => write!(f, "{}: {}", section, source),
            BlobError::Size {
                section,
                expected,
                actual,
            } => write!(
                f,
                "{}: expected {} bytes, have {}",
                section, expected, actual
            ),
        }
    }
}

impl std::error::Error for BlobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlobError::Decode { source, .. } => Some(source),
            BlobError::Create { source, .. } | BlobError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}
