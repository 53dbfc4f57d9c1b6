//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const CASTLE_WHITE_SHORT: u8 = 1 << 0;
const CASTLE_WHITE_LONG: u8 = 1 << 1;
const CASTLE_BLACK_SHORT: u8 = 1 << 2;
const CASTLE_BLACK_LONG: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_SHORT | CASTLE_WHITE_LONG | CASTLE_BLACK_SHORT | CASTLE_BLACK_LONG;

/// Castling rights represented as a bitmask.
///
/// Rights can only be removed once a board exists; nothing sets them back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle short and long)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Build from the four independent flags.
    #[must_use]
    pub const fn new(
        white_short: bool,
        white_long: bool,
        black_short: bool,
        black_long: bool,
    ) -> Self {
        let mut bits = 0;
        if white_short {
            bits |= CASTLE_WHITE_SHORT;
        }
        if white_long {
            bits |= CASTLE_WHITE_LONG;
        }
        if black_short {
            bits |= CASTLE_BLACK_SHORT;
        }
        if black_long {
            bits |= CASTLE_BLACK_LONG;
        }
        CastlingRights(bits)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, short: bool) -> bool {
        self.0 & Self::bit_for(color, short) != 0
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, short: bool) {
        self.0 &= !Self::bit_for(color, short);
    }

    /// Remove both rights of a color
    #[inline]
    pub fn remove_all(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    const fn bit_for(color: Color, short: bool) -> u8 {
        match (color, short) {
            (Color::White, true) => CASTLE_WHITE_SHORT,
            (Color::White, false) => CASTLE_WHITE_LONG,
            (Color::Black, true) => CASTLE_BLACK_SHORT,
            (Color::Black, false) => CASTLE_BLACK_LONG,
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::all()
    }
}
