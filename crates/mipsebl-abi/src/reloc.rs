//! Relocation classification.
//!
//! MIPS64 packs up to three relocation types and a special symbol into the
//! type part of `r_info`:
//!
//! ```text
//! 31       24 23      16 15       8 7        0
//! +----------+----------+----------+----------+
//! |   ssym   |  type3   |  type2   |  type1   |
//! +----------+----------+----------+----------+
//! ```

use crate::constants::{R_MIPS_16, R_MIPS_32, R_MIPS_64};
use crate::types::{ElfClass, ElfType};

/// First (innermost) relocation type of a MIPS64 composed relocation.
#[inline]
#[must_use]
pub const fn elf64_mips_r_type1(r_type: u32) -> u32 {
    r_type & 0xff
}

/// Second relocation type of a MIPS64 composed relocation.
#[inline]
#[must_use]
pub const fn elf64_mips_r_type2(r_type: u32) -> u32 {
    (r_type >> 8) & 0xff
}

/// Third relocation type of a MIPS64 composed relocation.
#[inline]
#[must_use]
pub const fn elf64_mips_r_type3(r_type: u32) -> u32 {
    (r_type >> 16) & 0xff
}

/// Special symbol (`RSS_*`) of a MIPS64 composed relocation.
#[inline]
#[must_use]
pub const fn elf64_mips_r_ssym(r_type: u32) -> u32 {
    (r_type >> 24) & 0xff
}

/// Storage class of the value written by a simple relocation.
///
/// Returns `None` when `r_type` is not a plain store of a fixed-width value,
/// in which case the caller has to apply the relocation itself.
#[must_use]
pub const fn reloc_simple_type(class: ElfClass, r_type: u32) -> Option<ElfType> {
    let r_type = match class {
        ElfClass::Elf64 => elf64_mips_r_type1(r_type),
        ElfClass::Elf32 => r_type,
    };

    match r_type {
        R_MIPS_16 => Some(ElfType::Half),
        R_MIPS_32 => Some(ElfType::Word),
        R_MIPS_64 => Some(ElfType::Xword),
        _ => None,
    }
}
