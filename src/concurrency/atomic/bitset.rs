//! Word-packed atomic bitsets.
//!
//! A dense alternative to `Vec<AtomicBool>` for visited flags: one bit per
//! vertex, and a claim is a single `fetch_or` on the word holding the bit.

use core::sync::atomic::Ordering;

use super::AtomicUsize;

const WORD_BITS: usize = usize::BITS as usize;

/// A word-packed atomic bitset of fixed length.
pub struct AtomicBitset {
    bits: usize,
    words: Box<[AtomicUsize]>,
}

impl AtomicBitset {
    /// Creates a new bitset with `bits` bits, all cleared.
    pub fn new(bits: usize) -> Self {
        let words = (0..bits.div_ceil(WORD_BITS))
            .map(|_| AtomicUsize::new(0))
            .collect();
        Self { bits, words }
    }

    /// Number of bits.
    #[inline]
    pub fn len_bits(&self) -> usize {
        self.bits
    }

    /// Clears all bits.
    ///
    /// Takes `&mut self`: nobody else can be setting bits while this runs.
    pub fn clear_all(&mut self) {
        for w in self.words.iter_mut() {
            #[cfg(not(loom))]
            {
                *w.get_mut() = 0;
            }
            #[cfg(loom)]
            w.with_mut(|v| *v = 0);
        }
    }

    /// Returns whether `bit` is set.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    #[inline]
    pub fn is_set(&self, bit: usize) -> bool {
        assert!(bit < self.bits, "bit {bit} out of range for {} bits", self.bits);
        let (word, mask) = bit_word_mask(bit);
        (self.words[word].load(Ordering::Acquire) & mask) != 0
    }

    /// Sets `bit` and returns `true` iff this call observed it previously cleared.
    ///
    /// The test and the set are one atomic read-modify-write, so across all
    /// concurrent callers at most one sees `true` for a given bit.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    #[inline]
    pub fn test_and_set(&self, bit: usize, order: Ordering) -> bool {
        assert!(bit < self.bits, "bit {bit} out of range for {} bits", self.bits);
        let (word, mask) = bit_word_mask(bit);
        let prev = self.words[word].fetch_or(mask, order);
        (prev & mask) == 0
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words
            .iter()
            .map(|w| w.load(Ordering::Acquire).count_ones() as usize)
            .sum()
    }
}

#[inline(always)]
fn bit_word_mask(bit: usize) -> (usize, usize) {
    (bit / WORD_BITS, 1usize << (bit % WORD_BITS))
}
