/// The single-character account type tags that can lead a Steam3 id.
///
/// This mirrors Valve's account type table. `L` is the lobby flavor of chat
/// accounts and gets its own variant so the tag round-trips through
/// [`as_char`].
///
/// [`as_char`]: AccountTypeTag::as_char
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountTypeTag {
    Invalid,
    Individual,
    Multiseat,
    GameServer,
    AnonGameServer,
    Pending,
    ContentServer,
    Clan,
    Chat,
    Lobby,
    AnonUser,
}

impl AccountTypeTag {
    /// The tag used whenever a Steam3 id is synthesized from another
    /// encoding. Tags are not derivable from the numeric encodings, so
    /// individual accounts are assumed.
    pub const DEFAULT: Self = Self::Individual;

    pub const fn as_char(&self) -> char {
        match self {
            Self::Invalid => 'I',
            Self::Individual => 'U',
            Self::Multiseat => 'M',
            Self::GameServer => 'G',
            Self::AnonGameServer => 'A',
            Self::Pending => 'P',
            Self::ContentServer => 'C',
            Self::Clan => 'g',
            Self::Chat => 'T',
            Self::Lobby => 'L',
            Self::AnonUser => 'a',
        }
    }

    pub const fn from_char(value: char) -> Option<Self> {
        match value {
            'I' => Some(Self::Invalid),
            'U' => Some(Self::Individual),
            'M' => Some(Self::Multiseat),
            'G' => Some(Self::GameServer),
            'A' => Some(Self::AnonGameServer),
            'P' => Some(Self::Pending),
            'C' => Some(Self::ContentServer),
            'g' => Some(Self::Clan),
            'T' => Some(Self::Chat),
            'L' => Some(Self::Lobby),
            'a' => Some(Self::AnonUser),
            _ => None,
        }
    }

    /// Parses a full account type segment, which must be exactly one tag
    /// character.
    pub(crate) fn from_segment(segment: &str) -> Option<Self> {
        let mut chars = segment.chars();
        let tag = Self::from_char(chars.next()?)?;
        chars.next().is_none().then_some(tag)
    }
}
