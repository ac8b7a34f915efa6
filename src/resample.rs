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

//! Derive the 720p and 480p splash images from the 1080p one.

use crate::pixels::{PixelBuffer, Resolution, CHANNELS};

/// How target pixels map back onto the source image.
///
/// The source band `crop_x .. width - crop_x` is stretched over the full
/// target width; the full source height always covers the target height.
/// `bias` is added to every sample coordinate. The values used below were
/// tuned by eye on the device and must be kept as they are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleWindow {
    pub target: Resolution,
    pub crop_x: usize,
    pub bias: f32,
}

/// 16:9 to 16:9, whole frame.
pub const FULL_FRAME_720: SampleWindow = SampleWindow {
    target: Resolution::P720,
    crop_x: 0,
    bias: 0.25,
};

/// 16:9 to 4:3, dropping 320 columns off each side of the 1080p source.
pub const CENTER_CROP_480: SampleWindow = SampleWindow {
    target: Resolution::P480,
    crop_x: (1920 - 1280) / 2,
    bias: 0.5,
};

/// Bilinear sample of `src` at the fractional position (`y`, `x`).
fn sample(src: &PixelBuffer, y: f32, x: f32) -> [u8; 3] {
    let (w, h) = (src.width(), src.height());
    let y0 = (y as usize).min(h - 1);
    let x0 = (x as usize).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let x1 = (x0 + 1).min(w - 1);
    let dy = y - y0 as f32;
    let dx = x - x0 as f32;

    let quad = [
        (src.pixel(y0, x0), (1.0 - dy) * (1.0 - dx)),
        (src.pixel(y0, x1), (1.0 - dy) * dx),
        (src.pixel(y1, x0), dy * (1.0 - dx)),
        (src.pixel(y1, x1), dy * dx),
    ];
    let mut out = [0u8; 3];
    for (c, o) in out.iter_mut().enumerate() {
        let v: f32 = quad.iter().map(|(p, weight)| p[c] as f32 * weight).sum();
        *o = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Scale `src` into a freshly allocated buffer described by `window`.
pub fn resample(src: &PixelBuffer, window: &SampleWindow) -> PixelBuffer {
    let target = window.target;
    let span = (src.width() - 2 * window.crop_x) as f32;
    let src_h = src.height() as f32;
    let mut out = PixelBuffer::filled(target, [0, 0, 0]);
    let bytes = out.as_bytes_mut();
    for y in 0..target.height() {
        let sy = y as f32 * src_h / target.height() as f32 + window.bias;
        for x in 0..target.width() {
            let sx = x as f32 * span / target.width() as f32 + window.crop_x as f32 + window.bias;
            let i = (y * target.width() + x) * CHANNELS;
            bytes[i..i + CHANNELS].copy_from_slice(&sample(src, sy, sx));
        }
    }
    out
}

pub fn rescale_720(i1080: &PixelBuffer) -> PixelBuffer {
    resample(i1080, &FULL_FRAME_720)
}

pub fn rescale_crop_480(i1080: &PixelBuffer) -> PixelBuffer {
    resample(i1080, &CENTER_CROP_480)
}
