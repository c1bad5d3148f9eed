//! Bulk word primitives
//!
//! Everything that touches more than a single pixel ends up in one of these
//! three calls. They take bounds-carrying slices, so the word count is the
//! slice length and a span can never run past its buffer.

/// Write `value` into every word of `dst`
#[inline]
pub fn fill_words(dst: &mut [u32], value: u32) {
    // slice::fill lowers to wide stores on every target we care about
    dst.fill(value);
}

/// Copy `src` into `dst` word for word. Both spans must have the same length.
#[inline]
pub fn copy_words(dst: &mut [u32], src: &[u32]) {
    assert_eq!(dst.len(), src.len(), "copy_words: span length mismatch");
    dst.copy_from_slice(src);
}

/// Color-key copy: every word of `src` equal to `key` leaves the matching
/// `dst` word alone, every other word overwrites it.
///
/// On x86_64 this runs 4 lanes per step with SSE2 and finishes the
/// `len % 4` tail with the scalar loop. Both paths give identical results.
pub fn mask_copy_words(dst: &mut [u32], src: &[u32], key: u32) {
    assert_eq!(dst.len(), src.len(), "mask_copy_words: span length mismatch");

    #[cfg(target_arch = "x86_64")]
    {
        let done = mask_copy_sse2(dst, src, key);
        mask_copy_scalar(&mut dst[done..], &src[done..], key);
    }

    #[cfg(not(target_arch = "x86_64"))]
    mask_copy_scalar(dst, src, key);
}

/// Branch-free reference form: `dst = (dst & eq) | (src & !eq)`
#[inline]
fn mask_copy_scalar(dst: &mut [u32], src: &[u32], key: u32) {
    for (d, &s) in dst.iter_mut().zip(src) {
        let eq = if s == key { u32::MAX } else { 0 };
        *d = (*d & eq) | (s & !eq);
    }
}

/// Process the largest multiple-of-4 prefix. Returns the number of words done.
#[cfg(target_arch = "x86_64")]
fn mask_copy_sse2(dst: &mut [u32], src: &[u32], key: u32) -> usize {
    use core::arch::x86_64::{
        __m128i, _mm_and_si128, _mm_andnot_si128, _mm_cmpeq_epi32, _mm_loadu_si128,
        _mm_or_si128, _mm_set1_epi32, _mm_storeu_si128,
    };

    let lanes = dst.len() & !3;

    // Safety: SSE2 is part of the x86_64 baseline. Every access covers
    // words i..i+4 with i + 4 <= lanes <= len of both slices, and the
    // unaligned load/store variants are used throughout.
    unsafe {
        let mask = _mm_set1_epi32(key as i32);
        let dptr = dst.as_mut_ptr();
        let sptr = src.as_ptr();
        let mut i = 0;
        while i < lanes {
            let d = dptr.add(i) as *mut __m128i;
            let s = _mm_loadu_si128(sptr.add(i) as *const __m128i);
            let cmp = _mm_cmpeq_epi32(s, mask);
            let keep = _mm_and_si128(cmp, _mm_loadu_si128(d));
            let take = _mm_andnot_si128(cmp, s);
            _mm_storeu_si128(d, _mm_or_si128(keep, take));
            i += 4;
        }
    }

    lanes
}
