use std::num::ParseIntError;

use crate::Encoding;

/// Why a conversion failed.
///
/// All of these are local, recoverable conditions; the same input will fail
/// the same way on resubmission.
#[derive(Debug, Display, Error, From)]
pub enum ConvertError {
    /// The first character matched none of the leading dispatch rules.
    #[display("input was not recognized as any known SteamID format")]
    UnrecognizedFormat,

    /// A numeric input was too long for the 32-bit format and too long for
    /// the 64-bit format.
    #[display("numeric input with {len} characters is neither a SteamID32 nor a SteamID64")]
    #[from(ignore)]
    UnresolvedDigitRun {
        #[error(ignore)]
        len: usize,
    },

    /// The input classified fine but its payload could not be parsed.
    #[display("{_0}")]
    MalformedPayload(MalformedPayloadError),
}

/// A payload failed to parse mid-derivation.
#[derive(Debug, Display, Error)]
#[display("malformed {encoding} payload: {reason}")]
pub struct MalformedPayloadError {
    encoding: Encoding,

    #[error(source)]
    reason: MalformedPayloadReason,
}

impl MalformedPayloadError {
    pub(crate) const fn new(encoding: Encoding, reason: MalformedPayloadReason) -> Self {
        Self { encoding, reason }
    }

    /// The encoding the input was classified as.
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub const fn reason(&self) -> &MalformedPayloadReason {
        &self.reason
    }
}

#[derive(Debug, Display, Error, From)]
pub enum MalformedPayloadReason {
    #[display("{_0}")]
    ParseInt(ParseIntError),

    #[display("missing `STEAM_` prefix")]
    MissingPrefix,

    #[display("missing `{segment}` segment")]
    #[from(ignore)]
    MissingSegment {
        #[error(ignore)]
        segment: &'static str,
    },

    #[display("account type segment is not a known tag character")]
    InvalidAccountType,

    #[display("second segment should be `1` but was `{actual}`")]
    #[from(ignore)]
    SecondSegmentNotOne {
        #[error(ignore)]
        actual: String,
    },

    #[display("got one of, but not both, opening and closing brackets")]
    InconsistentBrackets,

    #[display("64-bit value is below the universe offset")]
    BelowUniverseOffset,
}
