//! Message schedule expansion.
//!
//! The first 16 words are the chunk read as big-endian `u32`s; words 16..64
//! are mixed from earlier words with the small sigma functions.

use super::computations::schedule_word;
use super::{CHUNK_LEN, MessageSchedule};

/// Expands one 64-byte chunk into its 64-word message schedule.
pub fn expand(chunk: &[u8; CHUNK_LEN]) -> MessageSchedule {
    let mut w = [0u32; 64];

    for (slot, bytes) in w.iter_mut().zip(chunk.chunks_exact(4)) {
        *slot = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    for i in 16..64 {
        w[i] = schedule_word(w[i - 16], w[i - 15], w[i - 7], w[i - 2]);
    }

    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256::pad;

    fn first_chunk(msg: &[u8]) -> [u8; 64] {
        pad(msg).unwrap()[..64].try_into().unwrap()
    }

    #[test]
    fn empty_message_schedule() {
        let expected = [
            2147483648, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2147483648, 0, 2117632, 0,
            570427392, 0, 84448578, 2147483648, 1476919296, 4235264, 1451269, 1711282176,
            3592562048, 337794312, 3594910044, 3374850048, 3287351444, 676112230, 109604294,
            2742808854, 1904000662, 4274181962, 2813755136, 2165675682, 2561075048, 62000258,
            1562224585, 2975250741, 3286092305, 614207615, 3297584367, 1575308336, 3741240933,
            748767245, 1008022316, 30329261, 369937616, 195877528, 907775968, 3526495142,
            43741191, 1967544444, 133517113, 4161330627, 3704256008, 1581412744, 1153231965,
            996066459,
        ];

        assert_eq!(expand(&first_chunk(b"")), expected);
    }

    #[test]
    fn abc_upper_schedule() {
        let expected = [
            1094861696, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 24, 1094861696, 983040,
            1772124185, 1610613702, 857076218, 25426944, 1187945132, 3267535758, 2652968984,
            1864794538, 254335064, 3289490897, 2024327239, 758282639, 1878924548, 2859021432,
            1034160308, 3987916839, 858236621, 2756660483, 2268060095, 3079286356, 3057658158,
            3090293436, 2529363232, 2137209215, 1745384904, 4207320789, 3927577153, 40024766,
            478833927, 3105315289, 412113274, 325510091, 369381143, 3582318330, 1812658626,
            1738216777, 2045971039, 1268037967, 3455161973, 3785832060, 1248694331, 4272040619,
            2661585251, 1669237636, 3036669893, 4247847033,
        ];

        assert_eq!(expand(&first_chunk(b"ABC")), expected);
    }

    #[test]
    fn leading_words_are_big_endian() {
        let mut chunk = [0u8; 64];
        for (i, b) in chunk.iter_mut().enumerate() {
            *b = i as u8;
        }

        let w = expand(&chunk);

        assert_eq!(w[0], 0x00010203);
        assert_eq!(w[1], 0x04050607);
        assert_eq!(w[15], 0x3c3d3e3f);
    }

    #[test]
    fn expansion_is_pure() {
        let chunk = first_chunk(b"the same chunk twice");
        assert_eq!(expand(&chunk), expand(&chunk));
    }
}
