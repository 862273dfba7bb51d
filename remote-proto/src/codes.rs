//! Logical command codes shared by all supported remote protocols.

/// A protocol-independent remote command.
///
/// Discriminants are the stable integer contract callers program against:
/// digits carry their face value (0-9), named buttons start at 128, and
/// [`LogicalCode::Unknown`] is -1.
///
/// `Unknown` means "no recognized command this poll". It is an expected,
/// frequent result in a polling loop, not an error.
///
/// # Example
///
/// ```
/// use remote_proto::LogicalCode;
///
/// assert_eq!(LogicalCode::Four.raw(), 4);
/// assert_eq!(LogicalCode::Up.raw(), 128);
/// assert_eq!(LogicalCode::from_raw(131), Some(LogicalCode::Left));
/// assert_eq!(LogicalCode::from_raw(42), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i16)]
pub enum LogicalCode {
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Up = 128,
    Down = 129,
    Right = 130,
    Left = 131,
    Enter = 132,
    Setup = 133,
    /// Stop/Mode key on the NEC mini remote.
    StopMode = 134,
    Back = 135,
    VolumeMinus = 136,
    VolumePlus = 137,
    PlayPause = 138,
    /// Red-output stick on the Lego handset.
    LeftButton = 139,
    /// Blue-output stick on the Lego handset.
    RightButton = 140,
    Menu = 141,
    /// No recognized command. Sentinel, never a valid command.
    Unknown = -1,
}

impl LogicalCode {
    /// The stable integer value of this code.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i16 {
        self as i16
    }

    /// Look up the code for a raw integer value.
    ///
    /// Returns `None` for integers outside the contract. `from_raw(-1)`
    /// yields `Some(Unknown)`; the sentinel is part of the contract too.
    #[must_use]
    pub const fn from_raw(raw: i16) -> Option<Self> {
        Some(match raw {
            0 => LogicalCode::Zero,
            1 => LogicalCode::One,
            2 => LogicalCode::Two,
            3 => LogicalCode::Three,
            4 => LogicalCode::Four,
            5 => LogicalCode::Five,
            6 => LogicalCode::Six,
            7 => LogicalCode::Seven,
            8 => LogicalCode::Eight,
            9 => LogicalCode::Nine,
            128 => LogicalCode::Up,
            129 => LogicalCode::Down,
            130 => LogicalCode::Right,
            131 => LogicalCode::Left,
            132 => LogicalCode::Enter,
            133 => LogicalCode::Setup,
            134 => LogicalCode::StopMode,
            135 => LogicalCode::Back,
            136 => LogicalCode::VolumeMinus,
            137 => LogicalCode::VolumePlus,
            138 => LogicalCode::PlayPause,
            139 => LogicalCode::LeftButton,
            140 => LogicalCode::RightButton,
            141 => LogicalCode::Menu,
            -1 => LogicalCode::Unknown,
            _ => return None,
        })
    }

    /// The digit value for `Zero..=Nine`, `None` for everything else.
    #[inline]
    #[must_use]
    pub const fn digit(self) -> Option<u8> {
        let raw = self.raw();
        if 0 <= raw && raw <= 9 {
            Some(raw as u8)
        } else {
            None
        }
    }

    /// Whether this is the `Unknown` sentinel.
    #[inline]
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, LogicalCode::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_values() {
        assert_eq!(LogicalCode::Zero.raw(), 0);
        assert_eq!(LogicalCode::Nine.raw(), 9);
        assert_eq!(LogicalCode::Seven.digit(), Some(7));
        assert_eq!(LogicalCode::Up.digit(), None);
        assert_eq!(LogicalCode::Unknown.digit(), None);
    }

    #[test]
    fn test_named_button_values() {
        assert_eq!(LogicalCode::Up.raw(), 128);
        assert_eq!(LogicalCode::Menu.raw(), 141);
        assert_eq!(LogicalCode::Unknown.raw(), -1);
    }

    #[test]
    fn test_from_raw_round_trip() {
        let codes = [
            LogicalCode::Zero,
            LogicalCode::Nine,
            LogicalCode::Up,
            LogicalCode::PlayPause,
            LogicalCode::Menu,
            LogicalCode::Unknown,
        ];
        for code in codes {
            assert_eq!(LogicalCode::from_raw(code.raw()), Some(code));
        }
    }

    #[test]
    fn test_from_raw_outside_contract() {
        assert_eq!(LogicalCode::from_raw(10), None);
        assert_eq!(LogicalCode::from_raw(127), None);
        assert_eq!(LogicalCode::from_raw(142), None);
        assert_eq!(LogicalCode::from_raw(-2), None);
    }

    #[test]
    fn test_is_unknown() {
        assert!(LogicalCode::Unknown.is_unknown());
        assert!(!LogicalCode::Enter.is_unknown());
    }
}
