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

use crate::pixels::CHANNELS;

/// Flip rows bottom-up and swap the red and blue channels in one pass.
///
/// Row `i` is exchanged with row `height - 1 - i`, and as each pixel pair
/// is exchanged channels 0 and 2 trade places. With an odd height the
/// middle row is left untouched. Applying this twice restores the input.
///
/// # Panics
///
/// Panics if `buf` is not exactly `height * width * 3` bytes long.
pub fn swapperize(buf: &mut [u8], height: usize, width: usize) {
    let stride = width * CHANNELS;
    assert_eq!(buf.len(), stride * height);
    for i in 0..height / 2 {
        let (top, bottom) = buf.split_at_mut((height - i - 1) * stride);
        let a = &mut top[i * stride..(i + 1) * stride];
        let b = &mut bottom[..stride];
        for (pa, pb) in a.chunks_exact_mut(CHANNELS).zip(b.chunks_exact_mut(CHANNELS)) {
            let [c0, c1, c2] = [pa[0], pa[1], pa[2]];
            pa[0] = pb[2];
            pa[1] = pb[1];
            pa[2] = pb[0];
            pb[0] = c2;
            pb[1] = c1;
            pb[2] = c0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 7 % 251) as u8).collect()
    }

    #[test]
    fn flips_rows_and_swaps_channels() {
        // 2 rows of 2 pixels
        let mut buf = vec![
            1, 2, 3, 4, 5, 6, //
            7, 8, 9, 10, 11, 12,
        ];
        swapperize(&mut buf, 2, 2);
        assert_eq!(buf, vec![9, 8, 7, 12, 11, 10, 3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn is_an_involution() {
        let original = ramp(6 * 4 * 3);
        let mut buf = original.clone();
        swapperize(&mut buf, 4, 6);
        assert_ne!(buf, original);
        swapperize(&mut buf, 4, 6);
        assert_eq!(buf, original);
    }

    #[test]
    fn full_size_involution() {
        let original = ramp(640 * 480 * 3);
        let mut buf = original.clone();
        swapperize(&mut buf, 480, 640);
        swapperize(&mut buf, 480, 640);
        assert_eq!(buf, original);
    }

    #[test]
    fn odd_height_keeps_middle_row() {
        let original = ramp(3 * 5 * 3);
        let mut buf = original.clone();
        swapperize(&mut buf, 5, 3);
        let middle = 2 * 3 * 3..3 * 3 * 3;
        assert_eq!(buf[middle.clone()], original[middle]);
        assert_eq!(&buf[..3], &[original[38], original[37], original[36]]);
    }

    #[test]
    fn single_row_is_untouched() {
        let original = ramp(8 * 3);
        let mut buf = original.clone();
        swapperize(&mut buf, 1, 8);
        assert_eq!(buf, original);
    }

    #[test]
    #[should_panic]
    fn short_buffer_panics() {
        let mut buf = vec![0u8; 2 * 2 * 3 - 1];
        swapperize(&mut buf, 2, 2);
    }
}
