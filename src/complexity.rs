use {
    crate::*,
    nom::{
        combinator::{all_consuming, map},
        error::Error,
        multi::many1,
        sequence::terminated,
        Err, IResult,
    },
    rayon::iter::{IntoParallelRefIterator, ParallelIterator},
};

/// A line that isn't one or more digits followed by the single terminating `A`
#[derive(Debug, PartialEq)]
pub struct InvalidCode<'i>(pub Err<Error<&'i str>>);

/// A door code: one or more digit keys and the terminating Activate press
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Code(Vec<Key>);

impl Code {
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    /// The integer formed by the digits, leading zeroes ignored
    pub fn numeric_part(&self) -> usize {
        self.0[..self.0.len() - 1_usize]
            .iter()
            .fold(0_usize, |numeric_part, key| {
                numeric_part * 10_usize + key.try_digit().unwrap() as usize
            })
    }

    /// Minimal outer-hand press count to type this code through `levels` directional hops
    pub fn presses(&self, counter: &mut PressCounter, levels: u8) -> Result<usize, UnknownButton> {
        let mut presses: usize = 0_usize;

        for pair in KeyPair::iter_from_keys(self.0.iter().copied()) {
            presses += counter.min_presses(Keypad::Numeric, pair, levels)?;
        }

        Ok(presses)
    }

    pub fn complexity(
        &self,
        counter: &mut PressCounter,
        levels: u8,
    ) -> Result<usize, UnknownButton> {
        Ok(self.presses(counter, levels)? * self.numeric_part())
    }
}

impl Parse for Code {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            terminated(many1(Key::parse_digit), Key::parse_activate),
            |mut keys: Vec<Key>| {
                keys.push(Key::Activate);

                Self(keys)
            },
        )(input)
    }
}

impl<'i> TryFrom<&'i str> for Code {
    type Error = InvalidCode<'i>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(all_consuming(Self::parse)(input).map_err(InvalidCode)?.1)
    }
}

/// The codes to type, in order, and the weighted press-count aggregation over them
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct CodeList {
    codes: Vec<Code>,
}

impl CodeList {
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Sum over all codes of minimal press count times numeric part, at `levels` directional
    /// hops, with one memo spanning the whole call. A code whose computation fails is reported
    /// and skipped so the rest still count.
    pub fn complexity_sum(&self, levels: u8) -> usize {
        let mut counter: PressCounter = PressCounter::new();

        self.codes
            .iter()
            .filter_map(|code| {
                code.complexity(&mut counter, levels)
                    .map_err(|error| eprintln!("skipping code: {error:?}"))
                    .ok()
            })
            .sum()
    }

    /// `complexity_sum` fanned out over codes, each worker thread owning its memo. Two workers
    /// recomputing the same entry always agree, so nothing needs locking.
    pub fn par_complexity_sum(&self, levels: u8) -> usize {
        self.codes
            .par_iter()
            .map_init(PressCounter::new, |counter, code| {
                code.complexity(counter, levels)
                    .map_err(|error| eprintln!("skipping code: {error:?}"))
                    .unwrap_or_default()
            })
            .sum()
    }
}

impl From<&str> for CodeList {
    /// One code per line; an invalid line is reported and skipped so it doesn't block the rest
    /// of the list
    fn from(input: &str) -> Self {
        let mut codes: Vec<Code> = Vec::new();

        for line in input.lines() {
            if line.is_empty() {
                continue;
            }

            match Code::try_from(line) {
                Ok(code) => codes.push(code),
                Err(error) => eprintln!("skipping invalid code {line:?}: {error:?}"),
            }
        }

        Self { codes }
    }
}
