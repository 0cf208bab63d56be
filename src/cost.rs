use {
    crate::*,
    std::{collections::HashMap, rc::Rc},
};

/// A pair of consecutive buttons some hand in the chain must travel between
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct KeyPair {
    pub curr: Key,
    pub next: Key,
}

impl KeyPair {
    /// Walks the consecutive pairs implied by a key iterator, with a virtual leading Activate:
    /// every hand in the chain starts at rest on its keypad's `A`.
    pub fn iter_from_keys<I: Iterator<Item = Key>>(iter: I) -> impl Iterator<Item = Self> {
        let mut curr: Key = Key::Activate;

        iter.map(move |next| {
            let key_pair: KeyPair = KeyPair { curr, next };

            curr = next;

            key_pair
        })
    }
}

/// Memoized count of the presses the outermost hand performs to drive a hand `levels` keypads
/// down the chain from one button to the next and press it.
///
/// The memo is keyed on `(pair, levels)` alone: digit pairs only ever occur on the numeric
/// keypad, directional-glyph pairs only on the directional one, and the single shared pair
/// (`A` to `A`) costs the same on both surfaces, so the keypad can be left out of the key. Costs
/// are direction-dependent; `(a, b)` and `(b, a)` are distinct entries with, in general,
/// distinct values.
#[derive(Default)]
pub struct PressCounter {
    paths: PathEnumerator,
    memo: HashMap<(KeyPair, u8), usize>,
}

impl PressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimal outer-hand press count for one button-to-button hop at `levels` remaining
    /// indirection levels.
    ///
    /// At zero levels the outermost hand types `keypad` directly, one press per move, so the
    /// cheapest candidate sequence wins by length. Above that, each candidate sequence is a key
    /// trace on the directional keypad one level up, costed pair by pair one level shallower;
    /// the recursion strictly decreases `levels`, so depth is bounded by the chain length.
    pub fn min_presses(
        &mut self,
        keypad: Keypad,
        pair: KeyPair,
        levels: u8,
    ) -> Result<usize, UnknownButton> {
        let memo_key: (KeyPair, u8) = (pair, levels);

        if !self.memo.contains_key(&memo_key) {
            let sequences: Rc<[Sequence]> =
                self.paths.shortest_paths(keypad, pair.curr, pair.next)?;
            let mut min_presses: usize = usize::MAX;

            for sequence in sequences.iter() {
                let presses: usize = if levels == 0_u8 {
                    sequence.len()
                } else {
                    let mut presses: usize = 0_usize;

                    for pair in KeyPair::iter_from_keys(sequence.keys().iter().copied()) {
                        presses += self.min_presses(Keypad::Directional, pair, levels - 1_u8)?;
                    }

                    presses
                };

                min_presses = min_presses.min(presses);
            }

            self.memo.insert(memo_key, min_presses);
        }

        Ok(self.memo[&memo_key])
    }
}
