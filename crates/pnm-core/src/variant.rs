/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The two serialization grammars of a color pnm image
use core::fmt::{Display, Formatter};

/// Encoding variant of a color pnm image
///
/// The variant only selects how pixel data is written out,
/// the in-memory representation is the same for both.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum EncodingVariant {
    /// Whitespace separated decimal samples, magic `P3`
    Textual,
    /// Raw bytes, one per sample, magic `P6`
    #[default]
    Binary
}

impl EncodingVariant {
    /// The magic token identifying this variant in a header
    pub const fn magic(self) -> &'static str {
        match self {
            EncodingVariant::Textual => "P3",
            EncodingVariant::Binary => "P6"
        }
    }

    /// Map a header magic token to its variant
    ///
    /// Returns `None` for anything that isn't exactly `P3` or `P6`
    pub fn from_magic(magic: &[u8]) -> Option<EncodingVariant> {
        match magic {
            b"P3" => Some(EncodingVariant::Textual),
            b"P6" => Some(EncodingVariant::Binary),
            _ => None
        }
    }

    pub const fn is_binary(self) -> bool {
        matches!(self, EncodingVariant::Binary)
    }
}

impl Display for EncodingVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.magic())
    }
}
