pub use {self::direction::*, clap::Parser};

use {
    memmap::Mmap,
    nom::IResult,
    std::{
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, Utf8Error},
    },
};

/// Arguments for program execution
#[derive(Debug, Parser)]
pub struct Args {
    /// Input file path
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// Directional-keypad hops between the operator and the numeric keypad; both presets (2 and
    /// 25) run when omitted
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=25))]
    pub levels: Option<u8>,

    /// Print per-code press counts and complexities
    #[arg(short, long, default_value_t)]
    pub verbose: bool,
}

impl Args {
    pub const DEFAULT_INPUT_FILE_PATH: &'static str = "input/codes.txt";

    /// Returns the input file path, or the default if the field is empty
    pub fn input_file_path(&self) -> &str {
        if self.input_file_path.is_empty() {
            Self::DEFAULT_INPUT_FILE_PATH
        } else {
            &self.input_file_path
        }
    }

    /// Reads the input file and hands its contents to `I`'s constructor, reporting IO and UTF-8
    /// failures on stderr
    pub fn try_to_intermediate<I: for<'a> From<&'a str>>(&self) -> Option<I> {
        let file_path: &str = self.input_file_path();

        // SAFETY: This isn't truly safe, we're just hoping nobody touches our file before we're
        // done parsing it
        unsafe { open_utf8_file(file_path, |input| input.into()) }.map_or_else(
            |error| {
                eprintln!("Failed to open UTF-8 file \"{file_path}\":\n{error}");

                None
            },
            Some,
        )
    }
}

/// Opens a memory-mapped UTF-8 file at a specified path, and passes in a `&str` over the file to a
/// provided callback function
///
/// # Errors
///
/// This function returns a `Result::Err`-wrapped `std::io::Error` if an error has occurred.
/// Possible causes are:
///
/// * `std::fs::File::open` was unable to open a read-only file at `file_path`
/// * `memmap::Mmap::map` fails to create an `Mmap` instance for the opened file
/// * `std::str::from_utf8` determines the file is not in valid UTF-8 format
///
/// `f` is only executed *iff* an error is not encountered.
///
/// # Safety
///
/// This function uses `Mmap::map`, which is an unsafe function. There is no guarantee that an
/// external process won't modify the file after it is opened as read-only.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}

pub trait Parse: Sized {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self>;
}

/// Defines a `#[repr(u8)]` enum whose variants are ASCII glyphs, along with glyph-based `Parse`
/// and `TryFrom` implementations.
#[macro_export]
macro_rules! define_key {
    {
        #[repr(u8)]
        $(#[$attr:meta])*
        $pub:vis enum $key:ident { $(
            $(#[$variant_attr:meta])*
            $variant:ident = $variant_const:ident = $variant_u8:expr
        ),* $(,)? }
    } => {
        #[repr(u8)]
        $(#[$attr])*
        $pub enum $key { $(
            $(#[$variant_attr])*
            $variant = Self::$variant_const,
        )* }

        impl $key {
            $(
                const $variant_const: u8 = $variant_u8;
            )*
            const STR: &'static str =
                // SAFETY: Trivial
                unsafe { ::std::str::from_utf8_unchecked(&[$(
                    $key::$variant_const,
                )*]) };
        }

        impl Parse for $key {
            fn parse<'i>(input: &'i str) -> ::nom::IResult<&'i str, Self> {
                ::nom::combinator::map(
                    ::nom::character::complete::one_of($key::STR),
                    |value: char| { $key::try_from(value).unwrap() }
                )(input)
            }
        }

        impl TryFrom<u8> for $key {
            type Error = ();

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $(
                        Self::$variant_const => Ok(Self::$variant),
                    )*
                    _ => Err(()),
                }
            }
        }

        impl TryFrom<char> for $key {
            type Error = ();

            fn try_from(value: char) -> Result<Self, Self::Error> {
                (value as u8).try_into()
            }
        }
    }
}

mod direction {
    use {
        glam::IVec2,
        static_assertions::const_assert,
        strum::{EnumCount, EnumIter},
    };

    #[derive(Copy, Clone, Debug, EnumCount, EnumIter, Eq, PartialEq)]
    #[repr(u8)]
    pub enum Direction {
        North,
        East,
        South,
        West,
    }

    const VECS: [IVec2; Direction::COUNT] = [IVec2::NEG_Y, IVec2::X, IVec2::Y, IVec2::NEG_X];

    // A hand on a keypad moves one grid cell at a time in exactly these four directions
    const_assert!(Direction::COUNT == 4_usize);

    impl Direction {
        #[inline]
        pub const fn vec(self) -> IVec2 {
            VECS[self as usize]
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, glam::IVec2, strum::IntoEnumIterator};

    #[test]
    fn test_direction_vecs() {
        assert_eq!(
            Direction::iter().map(Direction::vec).collect::<Vec<IVec2>>(),
            vec![IVec2::NEG_Y, IVec2::X, IVec2::Y, IVec2::NEG_X]
        );
    }
}
