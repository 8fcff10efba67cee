/* Copyright (C) 2025  the acc-switcher developers
 *
 * This library is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this repository.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Conversions between the textual encodings of [Valve's SteamIDs].
//!
//! A single input string is classified as one of four encodings and the other
//! three are derived from it in one pass:
//!
//! * the standard `STEAM_X:Y:Z` format
//! * the "Steam3" `[U:1:W]` format
//! * the plain 32-bit account id `W`
//! * the 64-bit id `W + 76561197960265728`
//!
//! [Valve's SteamIDs]: https://developer.valvesoftware.com/wiki/SteamID

#[macro_use]
extern crate derive_more;

use std::fmt;
use std::str::FromStr;

mod encoding;
pub use encoding::Encoding;

mod tag;
pub use tag::AccountTypeTag;

mod error;
pub use error::{ConvertError, MalformedPayloadError, MalformedPayloadReason};

/// The difference between a 64-bit SteamID and its 32-bit account id.
///
/// The offset encodes the public universe and the individual account type in
/// the upper bits of the 64-bit id.
pub const UNIVERSE_OFFSET: u64 = 76561197960265728;

/// One account identity, rendered in all four encodings.
///
/// Constructed from a single input string; the field matching the input's own
/// encoding echoes the input, the other three are derived. The record is not
/// meant to be mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Conversion {
    /// The encoding the input was classified as.
    pub encoding: Encoding,

    /// The `STEAM_X:Y:Z` form.
    ///
    /// If the input was in this encoding, its universe digit is kept
    /// verbatim; synthesized values always use `STEAM_0:`.
    pub standard: String,

    /// The `[T:1:W]` form, bracketed exactly once.
    ///
    /// A non-default account type tag survives only when this was the input
    /// encoding; synthesized values always use `U`.
    pub community: String,

    /// The 32-bit account id `W`, as decimal text.
    pub id32: String,

    /// The 64-bit id `W + `[`UNIVERSE_OFFSET`], as decimal text.
    pub id64: String,
}

/// Classifies `input` and derives all four encodings.
///
/// Shorthand for [`Conversion::new`].
pub fn convert(input: &str) -> Result<Conversion, ConvertError> {
    Conversion::new(input)
}

impl Conversion {
    /// Classifies `input` and derives all four encodings.
    ///
    /// The input is trimmed, and a surrounding `[` `]` pair is stripped
    /// before classification. The first character then decides the encoding:
    /// `S` means standard, an account type tag character means Steam3, and a
    /// digit means one of the numeric formats, told apart by digit count
    /// (fewer than 17 is the 32-bit id, exactly 17 the 64-bit id, more than
    /// 17 is an error).
    pub fn new(input: &str) -> Result<Self, ConvertError> {
        let trimmed = input.trim();

        let (text, bracketed) = match (trimmed.starts_with('['), trimmed.ends_with(']')) {
            (false, false) => (trimmed, false),
            (true, true) => (trimmed.trim_start_matches('[').trim_end_matches(']'), true),
            (true, false) | (false, true) => {
                return Err(MalformedPayloadError::new(
                    Encoding::Community,
                    MalformedPayloadReason::InconsistentBrackets,
                )
                .into());
            }
        };

        let encoding = Encoding::classify(text)?;

        // Brackets only ever enclose the Steam3 format.
        if bracketed && encoding != Encoding::Community {
            return Err(ConvertError::UnrecognizedFormat);
        }

        // The 32-bit account id is the pivot every derivation goes through.
        // `id32_echo` keeps the input's own digit run (e.g. leading zeroes)
        // intact where the contract is to echo rather than re-render.
        let mut id32_echo = None;

        let account_id: u64 = match encoding {
            Encoding::Standard => {
                let (y_bit, account_number) = standard_segments(text)?;
                u64::from(account_number) * 2 + u64::from(y_bit)
            }
            Encoding::Community => {
                let payload = community_segments(text)?;
                id32_echo = Some(payload.to_owned());
                u64::from(parse_digits::<u32>(payload, Encoding::Community)?)
            }
            Encoding::Id32 => {
                id32_echo = Some(text.to_owned());
                u64::from(parse_digits::<u32>(text, Encoding::Id32)?)
            }
            Encoding::Id64 => parse_digits::<u64>(text, Encoding::Id64)?
                .checked_sub(UNIVERSE_OFFSET)
                .ok_or(MalformedPayloadError::new(
                    Encoding::Id64,
                    MalformedPayloadReason::BelowUniverseOffset,
                ))?,
        };

        let standard = if encoding == Encoding::Standard {
            text.to_owned()
        } else {
            format!("STEAM_0:{}:{}", account_id % 2, account_id / 2)
        };

        let community = if encoding == Encoding::Community {
            format!("[{text}]")
        } else {
            format!("[{}:1:{account_id}]", AccountTypeTag::DEFAULT.as_char())
        };

        let id32 = id32_echo.unwrap_or_else(|| account_id.to_string());

        let id64 = if encoding == Encoding::Id64 {
            text.to_owned()
        } else {
            (account_id + UNIVERSE_OFFSET).to_string()
        };

        Ok(Self { encoding, standard, community, id32, id64 })
    }
}

/// Splits the standard format into its `Y` bit and account number.
///
/// The universe digit between `STEAM_` and the first `:` is skipped over; it
/// is echoed verbatim in the output and never interpreted.
fn standard_segments(value: &str) -> Result<(u32, u32), ConvertError> {
    let mut segments = value
        .strip_prefix("STEAM_")
        .ok_or(MalformedPayloadError::new(
            Encoding::Standard,
            MalformedPayloadReason::MissingPrefix,
        ))?
        .splitn(3, ':');

    segments.next();

    let y_bit = match segments.next() {
        Some(segment) => parse_digits::<u32>(segment, Encoding::Standard)?,
        None => {
            return Err(MalformedPayloadError::new(
                Encoding::Standard,
                MalformedPayloadReason::MissingSegment { segment: "Y" },
            )
            .into());
        }
    };

    let account_number = match segments.next() {
        Some(segment) => parse_digits::<u32>(segment, Encoding::Standard)?,
        None => {
            return Err(MalformedPayloadError::new(
                Encoding::Standard,
                MalformedPayloadReason::MissingSegment { segment: "Z" },
            )
            .into());
        }
    };

    Ok((y_bit, account_number))
}

/// Validates the Steam3 format (brackets already stripped) and returns its
/// account id segment.
fn community_segments(value: &str) -> Result<&str, ConvertError> {
    let mut segments = value.splitn(3, ':');

    segments
        .next()
        .and_then(AccountTypeTag::from_segment)
        .ok_or(MalformedPayloadError::new(
            Encoding::Community,
            MalformedPayloadReason::InvalidAccountType,
        ))?;

    match segments.next() {
        Some("1") => {}
        Some("") | None => {
            return Err(MalformedPayloadError::new(
                Encoding::Community,
                MalformedPayloadReason::MissingSegment { segment: "1" },
            )
            .into());
        }
        Some(actual) => {
            return Err(MalformedPayloadError::new(
                Encoding::Community,
                MalformedPayloadReason::SecondSegmentNotOne { actual: actual.to_owned() },
            )
            .into());
        }
    }

    segments.next().ok_or_else(|| {
        MalformedPayloadError::new(
            Encoding::Community,
            MalformedPayloadReason::MissingSegment { segment: "account id" },
        )
        .into()
    })
}

fn parse_digits<T>(text: &str, encoding: Encoding) -> Result<T, MalformedPayloadError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    text.parse::<T>()
        .map_err(|error| MalformedPayloadError::new(encoding, error.into()))
}

impl FromStr for Conversion {
    type Err = ConvertError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt,
            "SteamID: {}\nSteamID3: {}\nSteamID32: {}\nSteamID64: {}",
            self.standard, self.community, self.id32, self.id64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_input() {
        let conversion = convert("STEAM_0:0:52161201").unwrap();
        assert_eq!(conversion.encoding, Encoding::Standard);
        assert_eq!(conversion.standard, "STEAM_0:0:52161201");
        assert_eq!(conversion.community, "[U:1:104322402]");
        assert_eq!(conversion.id32, "104322402");
        assert_eq!(conversion.id64, "76561198064588130");
    }

    #[test]
    fn community_input() {
        let conversion = convert("[U:1:104322402]").unwrap();
        assert_eq!(conversion.encoding, Encoding::Community);
        assert_eq!(conversion.community, "[U:1:104322402]");
        assert_eq!(conversion.id32, "104322402");
        assert_eq!(conversion.standard, "STEAM_0:0:52161201");
    }

    #[test]
    fn community_input_without_brackets_is_bracketed_once() {
        let conversion = convert("U:1:104322402").unwrap();
        assert_eq!(conversion.community, "[U:1:104322402]");
    }

    #[test]
    fn id32_input() {
        let conversion = convert("104322402").unwrap();
        assert_eq!(conversion.encoding, Encoding::Id32);
        assert_eq!(conversion.id32, "104322402");
        assert_eq!(conversion.id64, "76561198064588130");
    }

    #[test]
    fn id64_input() {
        let conversion = convert("76561198064588130").unwrap();
        assert_eq!(conversion.encoding, Encoding::Id64);
        assert_eq!(conversion.id64, "76561198064588130");
        assert_eq!(conversion.id32, "104322402");
        assert_eq!(conversion.standard, "STEAM_0:0:52161201");
    }

    #[test]
    fn round_trip_through_every_encoding() {
        let original = convert("104322402").unwrap();

        for output in [&original.standard, &original.community, &original.id64] {
            let back = convert(output).unwrap();
            assert_eq!(back.id32, "104322402");
        }
    }

    #[test]
    fn each_encoding_is_a_fixed_point_of_itself() {
        let standard = convert("STEAM_0:0:52161201").unwrap();
        assert_eq!(standard.standard, "STEAM_0:0:52161201");

        let community = convert("[U:1:104322402]").unwrap();
        assert_eq!(community.community, "[U:1:104322402]");

        let id32 = convert("104322402").unwrap();
        assert_eq!(id32.id32, "104322402");

        let id64 = convert("76561198064588130").unwrap();
        assert_eq!(id64.id64, "76561198064588130");
    }

    #[test]
    fn offset_invariant() {
        let conversion = convert("STEAM_1:1:161178172").unwrap();
        let id32 = conversion.id32.parse::<u64>().unwrap();
        let id64 = conversion.id64.parse::<u64>().unwrap();
        assert_eq!(id64 - id32, UNIVERSE_OFFSET);
    }

    #[test]
    fn parity_invariant() {
        let conversion = convert("76561198064588130").unwrap();
        let mut segments = conversion.standard.trim_start_matches("STEAM_").split(':');
        segments.next();

        let y_bit = segments.next().unwrap().parse::<u64>().unwrap();
        let account_number = segments.next().unwrap().parse::<u64>().unwrap();
        let id32 = conversion.id32.parse::<u64>().unwrap();

        assert_eq!(id32, account_number * 2 + y_bit);
    }

    #[test]
    fn universe_digit_is_echoed_verbatim() {
        let conversion = convert("STEAM_1:1:161178172").unwrap();
        assert_eq!(conversion.standard, "STEAM_1:1:161178172");
        assert_eq!(conversion.id64, "76561198282622073");
    }

    #[test]
    fn non_default_tag_survives_community_input_only() {
        let clan = convert("[g:1:4]").unwrap();
        assert_eq!(clan.community, "[g:1:4]");
        assert_eq!(clan.standard, "STEAM_0:0:2");

        // Converting *into* the Steam3 format always uses the default tag.
        let synthesized = convert("4").unwrap();
        assert_eq!(synthesized.community, "[U:1:4]");
    }

    #[test]
    fn sixteen_digits_classify_as_id32() {
        assert_eq!(Encoding::classify("1234567890123456").unwrap(), Encoding::Id32);
    }

    #[test]
    fn seventeen_digits_classify_as_id64() {
        assert_eq!(Encoding::classify("76561198064588130").unwrap(), Encoding::Id64);
    }

    #[test]
    fn eighteen_digits_are_an_explicit_error() {
        assert!(matches!(
            convert("123456789012345678"),
            Err(ConvertError::UnresolvedDigitRun { len: 18 }),
        ));
    }

    #[test]
    fn empty_input_is_unrecognized() {
        assert!(matches!(convert(""), Err(ConvertError::UnrecognizedFormat)));
    }

    #[test]
    fn garbage_input_is_unrecognized() {
        assert!(matches!(convert("xyz"), Err(ConvertError::UnrecognizedFormat)));
    }

    #[test]
    fn bracketed_numeric_input_is_unrecognized() {
        assert!(matches!(convert("[104322402]"), Err(ConvertError::UnrecognizedFormat)));
    }

    #[test]
    fn inconsistent_brackets_are_malformed() {
        assert!(matches!(convert("[U:1:104322402"), Err(ConvertError::MalformedPayload(_))));
    }

    #[test]
    fn empty_community_payload_is_malformed() {
        assert!(matches!(convert("U:1:"), Err(ConvertError::MalformedPayload(_))));
    }

    #[test]
    fn community_second_segment_must_be_one() {
        assert!(matches!(convert("U:2:104322402"), Err(ConvertError::MalformedPayload(_))));
    }

    #[test]
    fn id64_below_universe_offset_is_malformed() {
        assert!(matches!(convert("10000000000000000"), Err(ConvertError::MalformedPayload(_))));
    }

    #[test]
    fn non_digit_id32_payload_is_malformed() {
        assert!(matches!(convert("1043x2402"), Err(ConvertError::MalformedPayload(_))));
    }

    #[test]
    fn display_prints_all_four_forms() {
        let conversion = convert("STEAM_0:0:52161201").unwrap();
        assert_eq!(
            conversion.to_string(),
            "SteamID: STEAM_0:0:52161201\n\
             SteamID3: [U:1:104322402]\n\
             SteamID32: 104322402\n\
             SteamID64: 76561198064588130",
        );
    }

    #[test]
    fn input_is_trimmed_before_classification() {
        let conversion = convert("  104322402\n").unwrap();
        assert_eq!(conversion.id32, "104322402");
    }
}
