use std::cmp::Ordering;

use crate::error::ConvertError;
use crate::tag::AccountTypeTag;

/// 64-bit SteamIDs are always exactly this many decimal digits long.
const ID64_DIGITS: usize = 17;

/// The four textual encodings of a Steam account id.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Encoding {
    /// The standard `STEAM_X:Y:Z` format.
    #[display("SteamID")]
    Standard,

    /// The "Steam3" `[T:1:W]` format.
    #[display("SteamID3")]
    Community,

    /// The plain 32-bit account id.
    #[display("SteamID32")]
    Id32,

    /// The universe-offset 64-bit id.
    #[display("SteamID64")]
    Id64,
}

impl Encoding {
    /// Decides which encoding `input` (trimmed, brackets already stripped)
    /// is in.
    ///
    /// The first character settles everything except the two numeric formats,
    /// which are told apart by length. A digit run longer than 17 characters
    /// fits neither numeric format and is rejected here instead of falling
    /// through to a half-derived result.
    pub fn classify(input: &str) -> Result<Self, ConvertError> {
        let Some(first) = input.chars().next() else {
            return Err(ConvertError::UnrecognizedFormat);
        };

        if first == 'S' {
            return Ok(Self::Standard);
        }

        if AccountTypeTag::from_char(first).is_some() {
            return Ok(Self::Community);
        }

        if !first.is_ascii_digit() {
            return Err(ConvertError::UnrecognizedFormat);
        }

        match input.len().cmp(&ID64_DIGITS) {
            Ordering::Less => Ok(Self::Id32),
            Ordering::Equal => Ok(Self::Id64),
            Ordering::Greater => Err(ConvertError::UnresolvedDigitRun { len: input.len() }),
        }
    }
}
