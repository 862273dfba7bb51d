//! Static key-to-code tables for the supported remotes.
//!
//! Each remote family contributes its own `const` sub-table, so the
//! provenance of every entry stays auditable and a new remote can be added
//! without touching existing entries. [`lookup`] searches their union.
//! All keys are disjoint across sub-tables (asserted in tests); the search
//! order here carries no semantics because classification already routed
//! the frame before a key exists.

use crate::codes::LogicalCode;

/// Adafruit mini remote (extended NEC, address bytes 255, 2).
///
/// Keys are `(frame[2] << 8) | frame[3]` as captured from the handset:
///
/// ```text
/// 1: [255, 2, 247, 8]             63240
/// 2: [255, 2, 119, 136]           30600
/// 3: [255, 2, 183, 72]            46920
/// 4: [255, 2, 215, 40]            55080
/// 5: [255, 2, 87, 168]            22440
/// 6: [255, 2, 151, 104]           38760
/// 7: [255, 2, 231, 24]            59160
/// 8: [255, 2, 103, 152]           26520
/// 9: [255, 2, 167, 88]            42840
/// 0: [255, 2, 207, 48]            53040
/// ^ : [255, 2, 95, 160]           24480
/// v : [255, 2, 79, 176]           20400
/// > : [255, 2, 175, 80]           44880
/// < : [255, 2, 239, 16]           61200
/// Enter: [255, 2, 111, 144]       28560
/// Setup: [255, 2, 223, 32]        57120
/// Stop/Mode: [255, 2, 159, 96]    40800
/// Back: [255, 2, 143, 112]        36720
/// Vol - : [255, 2, 255, 0]        65280
/// Vol + : [255, 2, 191, 64]       48960
/// Play/Pause: [255, 2, 127, 128]  32640
/// ```
pub const NEC_MINI_CODES: &[(u16, LogicalCode)] = &[
    (63240, LogicalCode::One),
    (30600, LogicalCode::Two),
    (46920, LogicalCode::Three),
    (55080, LogicalCode::Four),
    (22440, LogicalCode::Five),
    (38760, LogicalCode::Six),
    (59160, LogicalCode::Seven),
    (26520, LogicalCode::Eight),
    (42840, LogicalCode::Nine),
    (53040, LogicalCode::Zero),
    (24480, LogicalCode::Up),
    (20400, LogicalCode::Down),
    (44880, LogicalCode::Right),
    (61200, LogicalCode::Left),
    (28560, LogicalCode::Enter),
    (57120, LogicalCode::Setup),
    (40800, LogicalCode::StopMode),
    (36720, LogicalCode::Back),
    (65280, LogicalCode::VolumeMinus),
    (48960, LogicalCode::VolumePlus),
    (32640, LogicalCode::PlayPause),
];

/// Apple remotes, both hardware generations.
///
/// Keys are `(frame[2] << 8) | frame[3]`: command byte, then the pairing
/// id byte of the reference handset each table was captured from.
pub const APPLE_CODES: &[(u16, LogicalCode)] = &[
    // First generation (white, A1156), id byte 0x9B
    (0x029B, LogicalCode::Menu),
    (0x049B, LogicalCode::PlayPause),
    (0x079B, LogicalCode::Right),
    (0x089B, LogicalCode::Left),
    (0x0B9B, LogicalCode::Up),
    (0x0D9B, LogicalCode::Down),
    // Second generation (aluminum, A1294), id byte 0xE2; its center
    // select key is distinct from play/pause
    (0x03E2, LogicalCode::Menu),
    (0x06E2, LogicalCode::Right),
    (0x09E2, LogicalCode::Left),
    (0x0AE2, LogicalCode::Up),
    (0x0CE2, LogicalCode::Down),
    (0x5CE2, LogicalCode::Enter),
    (0x5FE2, LogicalCode::PlayPause),
];

/// Lego Power Functions handset, combo-direct mode, all four positions of
/// the channel switch.
///
/// A combo-direct frame is four nibbles: `toggle/escape/channel`,
/// `address/mode` (always 0x1 here), `data` (output B in bits 3-2, output A
/// in bits 1-0, with 01 = forward and 10 = backward), and the check nibble
/// `0xF ^ n1 ^ n2 ^ n3`. Keys are `(frame[1] << 8) | frame[0]` with
/// `frame[0] = n1 << 4 | n2` and `frame[1] = n3 << 4 | n4`.
///
/// Both sticks forward is Up, both backward is Down, opposing sticks turn
/// Left/Right, and a single stick maps to its own button code.
pub const LEGO_CODES: &[(u16, LogicalCode)] = &[
    // Channel 1
    (0x5B01, LogicalCode::Up),
    (0xA401, LogicalCode::Down),
    (0x6801, LogicalCode::Left),
    (0x9701, LogicalCode::Right),
    (0x1F01, LogicalCode::LeftButton),
    (0x4A01, LogicalCode::RightButton),
    // Channel 2
    (0x5A11, LogicalCode::Up),
    (0xA511, LogicalCode::Down),
    (0x6911, LogicalCode::Left),
    (0x9611, LogicalCode::Right),
    (0x1E11, LogicalCode::LeftButton),
    (0x4B11, LogicalCode::RightButton),
    // Channel 3
    (0x5921, LogicalCode::Up),
    (0xA621, LogicalCode::Down),
    (0x6A21, LogicalCode::Left),
    (0x9521, LogicalCode::Right),
    (0x1D21, LogicalCode::LeftButton),
    (0x4821, LogicalCode::RightButton),
    // Channel 4
    (0x5831, LogicalCode::Up),
    (0xA731, LogicalCode::Down),
    (0x6B31, LogicalCode::Left),
    (0x9431, LogicalCode::Right),
    (0x1C31, LogicalCode::LeftButton),
    (0x4931, LogicalCode::RightButton),
];

/// Resolve a lookup key against the union of all sub-tables.
#[must_use]
pub fn lookup(key: u16) -> Option<LogicalCode> {
    NEC_MINI_CODES
        .iter()
        .chain(APPLE_CODES)
        .chain(LEGO_CODES)
        .find(|(k, _)| *k == key)
        .map(|&(_, code)| code)
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_lookup_known_keys() {
        assert_eq!(lookup(53040), Some(LogicalCode::Zero));
        assert_eq!(lookup(24480), Some(LogicalCode::Up));
        assert_eq!(lookup(0x5CE2), Some(LogicalCode::Enter));
        assert_eq!(lookup(0x5B01), Some(LogicalCode::Up));
        assert_eq!(lookup(0x1C31), Some(LogicalCode::LeftButton));
    }

    #[test]
    fn test_lookup_absent_key() {
        assert_eq!(lookup(0x0000), None);
        assert_eq!(lookup(0x1234), None);
    }

    #[test]
    fn test_sub_table_sizes() {
        assert_eq!(NEC_MINI_CODES.len(), 21);
        assert_eq!(APPLE_CODES.len(), 13);
        assert_eq!(LEGO_CODES.len(), 24);
    }

    #[test]
    fn test_keys_disjoint_across_sub_tables() {
        // All protocols share one 16-bit key space; the tables are
        // constructed so no key appears twice anywhere in the union.
        let mut seen = BTreeSet::new();
        for &(key, _) in NEC_MINI_CODES.iter().chain(APPLE_CODES).chain(LEGO_CODES) {
            assert!(seen.insert(key), "duplicate key {key:#06x}");
        }
        assert_eq!(seen.len(), 58);
    }

    #[test]
    fn test_lookup_is_deterministic() {
        // The table is pure data; two scans of the same key agree.
        for &(key, code) in NEC_MINI_CODES.iter().chain(APPLE_CODES).chain(LEGO_CODES) {
            assert_eq!(lookup(key), Some(code));
            assert_eq!(lookup(key), Some(code));
        }
    }

    #[test]
    fn test_lego_check_nibbles() {
        // Every Lego entry carries a valid combo-direct check nibble.
        for &(key, _) in LEGO_CODES {
            let n1 = (key >> 4) & 0xF;
            let n2 = key & 0xF;
            let n3 = (key >> 12) & 0xF;
            let n4 = (key >> 8) & 0xF;
            assert_eq!(n4, 0xF ^ n1 ^ n2 ^ n3, "bad check nibble in {key:#06x}");
            assert_eq!(n2, 0x1, "not a combo-direct frame: {key:#06x}");
        }
    }
}
