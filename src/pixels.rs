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

/// Bytes per pixel in every buffer: three interleaved 8-bit channels.
pub const CHANNELS: usize = 3;

/// The three fixed splash geometries the bootloader knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    P1080,
    P720,
    P480,
}

impl Resolution {
    pub const fn width(self) -> usize {
        match self {
            Resolution::P1080 => 1920,
            Resolution::P720 => 1280,
            Resolution::P480 => 640,
        }
    }

    pub const fn height(self) -> usize {
        match self {
            Resolution::P1080 => 1080,
            Resolution::P720 => 720,
            Resolution::P480 => 480,
        }
    }

    /// Size of a pixel buffer at this resolution.
    pub const fn byte_len(self) -> usize {
        self.width() * self.height() * CHANNELS
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

/// Flat, row-major, top-down, 3-channel image data.
///
/// Byte `(row * width + col) * 3 + channel` holds one channel of one pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    resolution: Resolution,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw bytes, returning them back if the length does not fit.
    pub fn new(resolution: Resolution, data: Vec<u8>) -> Result<PixelBuffer, Vec<u8>> {
        if data.len() != resolution.byte_len() {
            return Err(data);
        }
        Ok(PixelBuffer { resolution, data })
    }

    /// A buffer where every pixel is `rgb`.
    pub fn filled(resolution: Resolution, rgb: [u8; 3]) -> PixelBuffer {
        let mut data = Vec::with_capacity(resolution.byte_len());
        for _ in 0..resolution.width() * resolution.height() {
            data.extend_from_slice(&rgb);
        }
        PixelBuffer { resolution, data }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn width(&self) -> usize {
        self.resolution.width()
    }

    pub fn height(&self) -> usize {
        self.resolution.height()
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        let i = (row * self.width() + col) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
