//! SHA-256 bit primitives and the round function.
//!
//! Every addition here is modulo 2^32.

use super::HashState;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Next schedule word from its four predecessors `w[i-16]`, `w[i-15]`,
/// `w[i-7]` and `w[i-2]`.
#[inline(always)]
pub fn schedule_word(w16: u32, w15: u32, w7: u32, w2: u32) -> u32 {
    w16.wrapping_add(small_sigma0(w15))
        .wrapping_add(w7)
        .wrapping_add(small_sigma1(w2))
}

/// One compression round over the working variables `[a, b, c, d, e, f, g, h]`.
#[inline(always)]
pub fn round(v: &mut HashState, k: u32, w: u32) {
    let [a, b, c, d, e, f, g, h] = *v;

    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);

    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    *v = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
}

/// Folds the working variables back into the hash state.
#[inline(always)]
pub fn fold(state: &mut HashState, v: &HashState) {
    for (s, x) in state.iter_mut().zip(v) {
        *s = s.wrapping_add(*x);
    }
}

/// Fused chunk kernel: expands the schedule in a 16-word rolling window
/// inside the round loop instead of materializing all 64 words.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut HashState, mut w: [u32; 16]) {
    let mut v = *state;

    for (i, &k) in super::K256.iter().enumerate() {
        if i >= 16 {
            w[i & 15] = schedule_word(
                w[(i - 16) & 15],
                w[(i - 15) & 15],
                w[(i - 7) & 15],
                w[(i - 2) & 15],
            );
        }

        round(&mut v, k, w[i & 15]);
    }

    fold(state, &v);
}
