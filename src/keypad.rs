use {
    crate::*,
    glam::IVec2,
    nom::{combinator::verify, IResult},
    strum::{EnumIter, IntoEnumIterator},
};

define_key! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd)]
    pub enum Key {
        #[default]
        Activate = ACTIVATE = b'A',
        Zero = ZERO = b'0',
        One = ONE = b'1',
        Two = TWO = b'2',
        Three = THREE = b'3',
        Four = FOUR = b'4',
        Five = FIVE = b'5',
        Six = SIX = b'6',
        Seven = SEVEN = b'7',
        Eight = EIGHT = b'8',
        Nine = NINE = b'9',
        Up = UP = b'^',
        Down = DOWN = b'v',
        Left = LEFT = b'<',
        Right = RIGHT = b'>',
    }
}

impl Key {
    pub fn parse_digit<'i>(input: &'i str) -> IResult<&'i str, Self> {
        verify(Self::parse, |key| key.is_digit())(input)
    }

    pub fn parse_activate<'i>(input: &'i str) -> IResult<&'i str, Self> {
        verify(Self::parse, |&key| key == Self::Activate)(input)
    }

    pub fn string_from_iter<I: Iterator<Item = Key>>(iter: I) -> String {
        iter.map(|key| key as u8 as char).collect()
    }

    pub fn try_digit(self) -> Option<u8> {
        match self as u8 {
            Self::ZERO..=Self::NINE => Some(self as u8 - Self::ZERO),
            _ => None,
        }
    }

    pub fn is_digit(self) -> bool {
        self.try_digit().is_some()
    }

    pub const fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::North => Self::Up,
            Direction::East => Self::Right,
            Direction::South => Self::Down,
            Direction::West => Self::Left,
        }
    }
}

/// A key was addressed on a keypad whose surface doesn't hold it
#[derive(Debug, Eq, PartialEq)]
pub struct UnknownButton {
    pub keypad: Keypad,
    pub key: Key,
}

/// One of the two fixed keypad surfaces.
///
/// The numeric keypad is 3 columns by 4 rows, `7 8 9 / 4 5 6 / 1 2 3 / _ 0 A`, with its gap at
/// the bottom left. The directional keypad is 3 columns by 2 rows, `_ ^ A / < v >`, with its gap
/// at the top left. Columns grow rightward, rows grow downward.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Keypad {
    Numeric,
    Directional,
}

impl Keypad {
    /// The one grid cell per surface that holds no button and must never be traversed
    pub const fn gap(self) -> IVec2 {
        match self {
            Self::Numeric => IVec2::new(0_i32, 3_i32),
            Self::Directional => IVec2::ZERO,
        }
    }

    pub fn key_pos(self, key: Key) -> Result<IVec2, UnknownButton> {
        match (self, key) {
            (Self::Numeric, Key::Activate) => Ok(IVec2::new(2_i32, 3_i32)),
            (Self::Numeric, Key::Zero) => Ok(IVec2::new(1_i32, 3_i32)),
            (Self::Numeric, digit) if digit.is_digit() => {
                let index: i32 = digit.try_digit().unwrap() as i32 - 1_i32;

                Ok(IVec2::new(index % 3_i32, 2_i32 - index / 3_i32))
            }
            (Self::Directional, Key::Up) => Ok(IVec2::new(1_i32, 0_i32)),
            (Self::Directional, Key::Activate) => Ok(IVec2::new(2_i32, 0_i32)),
            (Self::Directional, Key::Left) => Ok(IVec2::new(0_i32, 1_i32)),
            (Self::Directional, Key::Down) => Ok(IVec2::new(1_i32, 1_i32)),
            (Self::Directional, Key::Right) => Ok(IVec2::new(2_i32, 1_i32)),
            _ => Err(UnknownButton { keypad: self, key }),
        }
    }

    /// The key under a grid position; `None` is the gap or off the surface entirely
    pub fn key_at(self, pos: IVec2) -> Option<Key> {
        Key::iter().find(|&key| self.key_pos(key) == Ok(pos))
    }

    pub fn holds(self, key: Key) -> bool {
        self.key_pos(key).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::collections::HashSet};

    const KEYPADS: [Keypad; 2_usize] = [Keypad::Numeric, Keypad::Directional];

    #[test]
    fn test_key_pos_is_unique_and_avoids_gap() {
        for keypad in KEYPADS {
            let mut positions: HashSet<IVec2> = HashSet::new();

            for key in Key::iter().filter(|&key| keypad.holds(key)) {
                let pos: IVec2 = keypad.key_pos(key).unwrap();

                assert!(
                    positions.insert(pos),
                    "{keypad:?} maps two keys onto {pos:?}"
                );
                assert_ne!(pos, keypad.gap());
            }

            assert_eq!(
                positions.len(),
                match keypad {
                    Keypad::Numeric => 11_usize,
                    Keypad::Directional => 5_usize,
                }
            );
        }
    }

    #[test]
    fn test_key_at_inverts_key_pos() {
        for keypad in KEYPADS {
            for key in Key::iter().filter(|&key| keypad.holds(key)) {
                assert_eq!(keypad.key_at(keypad.key_pos(key).unwrap()), Some(key));
            }

            assert_eq!(keypad.key_at(keypad.gap()), None);
            assert_eq!(keypad.key_at(IVec2::new(3_i32, 0_i32)), None);
            assert_eq!(keypad.key_at(IVec2::new(-1_i32, 0_i32)), None);
        }
    }

    #[test]
    fn test_layout_positions() {
        assert_eq!(
            Keypad::Numeric.key_pos(Key::Seven),
            Ok(IVec2::new(0_i32, 0_i32))
        );
        assert_eq!(
            Keypad::Numeric.key_pos(Key::Nine),
            Ok(IVec2::new(2_i32, 0_i32))
        );
        assert_eq!(
            Keypad::Numeric.key_pos(Key::One),
            Ok(IVec2::new(0_i32, 2_i32))
        );
        assert_eq!(
            Keypad::Numeric.key_pos(Key::Zero),
            Ok(IVec2::new(1_i32, 3_i32))
        );
        assert_eq!(
            Keypad::Numeric.key_pos(Key::Activate),
            Ok(IVec2::new(2_i32, 3_i32))
        );
        assert_eq!(
            Keypad::Directional.key_pos(Key::Up),
            Ok(IVec2::new(1_i32, 0_i32))
        );
        assert_eq!(
            Keypad::Directional.key_pos(Key::Activate),
            Ok(IVec2::new(2_i32, 0_i32))
        );
        assert_eq!(
            Keypad::Directional.key_pos(Key::Left),
            Ok(IVec2::new(0_i32, 1_i32))
        );
    }

    #[test]
    fn test_unknown_button() {
        assert_eq!(
            Keypad::Directional.key_pos(Key::Seven),
            Err(UnknownButton {
                keypad: Keypad::Directional,
                key: Key::Seven,
            })
        );
        assert_eq!(
            Keypad::Numeric.key_pos(Key::Left),
            Err(UnknownButton {
                keypad: Keypad::Numeric,
                key: Key::Left,
            })
        );
        assert!(KEYPADS
            .into_iter()
            .all(|keypad| keypad.holds(Key::Activate)));
    }

    #[test]
    fn test_try_digit() {
        assert_eq!(Key::Zero.try_digit(), Some(0_u8));
        assert_eq!(Key::Nine.try_digit(), Some(9_u8));
        assert_eq!(Key::Activate.try_digit(), None);
        assert_eq!(Key::Up.try_digit(), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Key::try_from('5'), Ok(Key::Five));
        assert_eq!(Key::try_from('v'), Ok(Key::Down));
        assert_eq!(Key::try_from('x'), Err(()));
        assert_eq!(Key::parse_digit("29A"), Ok(("9A", Key::Two)));
        assert!(Key::parse_digit("A29").is_err());
        assert_eq!(Key::parse_activate("A"), Ok(("", Key::Activate)));
    }
}
