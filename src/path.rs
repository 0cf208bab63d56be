use {
    crate::*,
    glam::IVec2,
    std::{collections::HashMap, rc::Rc},
    strum::IntoEnumIterator,
};

/// One complete way to walk a hand from one button to another and press it: zero or more moves
/// followed by exactly one Activate.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Sequence(Vec<Key>);

impl Sequence {
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    /// Total presses the sequence takes, the terminating Activate included
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn manhattan_distance(a: IVec2, b: IVec2) -> i32 {
    let delta: IVec2 = (b - a).abs();

    delta.x + delta.y
}

/// Enumerates *every* minimal-length, gap-avoiding move sequence between two keys of a keypad.
///
/// All minimal paths must be kept, not just one: sequences of equal length here can expand to
/// different press counts one indirection level up, and which one wins can only be discovered by
/// comparing them all.
#[derive(Default)]
pub struct PathEnumerator {
    paths: HashMap<(Keypad, Key, Key), Rc<[Sequence]>>,
}

impl PathEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All shortest paths from `from` to `to`, each terminated with an Activate press.
    ///
    /// `from == to` yields the single sequence `[Activate]`. Results are pure functions of the
    /// static layouts, so they're cached unconditionally.
    pub fn shortest_paths(
        &mut self,
        keypad: Keypad,
        from: Key,
        to: Key,
    ) -> Result<Rc<[Sequence]>, UnknownButton> {
        let cache_key: (Keypad, Key, Key) = (keypad, from, to);

        if !self.paths.contains_key(&cache_key) {
            let start: IVec2 = keypad.key_pos(from)?;
            let end: IVec2 = keypad.key_pos(to)?;
            let mut sequences: Vec<Sequence> = Vec::new();

            Self::search(keypad, start, end, &mut Vec::new(), &mut sequences);
            self.paths.insert(cache_key, sequences.into());
        }

        Ok(self.paths[&cache_key].clone())
    }

    /// Depth-first walk over the keypad, stepping only onto real buttons and only when the step
    /// strictly shrinks the Manhattan distance to `end`. Under that bound every completed path
    /// has exactly the minimal length and no cell can repeat within one candidate path, so no
    /// visited set is needed. The move stack is unwound on backtrack; each branch owns its state.
    fn search(
        keypad: Keypad,
        curr: IVec2,
        end: IVec2,
        moves: &mut Vec<Key>,
        sequences: &mut Vec<Sequence>,
    ) {
        if curr == end {
            let mut keys: Vec<Key> = moves.clone();

            keys.push(Key::Activate);
            sequences.push(Sequence(keys));
        } else {
            for direction in Direction::iter() {
                let next: IVec2 = curr + direction.vec();

                if keypad.key_at(next).is_some()
                    && manhattan_distance(next, end) < manhattan_distance(curr, end)
                {
                    moves.push(Key::from_direction(direction));
                    Self::search(keypad, next, end, moves, sequences);
                    moves.pop();
                }
            }
        }
    }
}
