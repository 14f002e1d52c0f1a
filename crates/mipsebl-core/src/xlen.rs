//! Pointer width types (XLEN).
//!
//! The MIPS o32 and n64 core-dump layouts are the same C structures compiled
//! with a different `unsigned long`; everything width dependent hangs off
//! this trait.

use std::fmt::Debug;

use mipsebl_abi::{ElfClass, ElfType};

/// Marker type for 32-bit MIPS (o32).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mips32;

/// Marker type for 64-bit MIPS (n64).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mips64;

/// Trait for pointer-width-dependent layout.
///
/// Uses marker types (Mips32/Mips64) instead of const generics so layouts
/// can be written once as associated consts.
pub trait Xlen: Copy + Clone + Send + Sync + Default + Debug + 'static {
    /// XLEN value (32 or 64).
    const VALUE: u8;

    /// Bytes per register and per `unsigned long` (4 or 8).
    const REG_BYTES: usize;

    /// Bits per general-purpose register.
    const REG_BITS: u32;

    /// ELF class of objects and cores of this width.
    const CLASS: ElfClass;

    /// ELF type of a C `unsigned long`.
    const ULONG: ElfType;

    /// ELF type of a C `long`.
    const LONG: ElfType;
}

impl Xlen for Mips32 {
    const VALUE: u8 = 32;
    const REG_BYTES: usize = 4;
    const REG_BITS: u32 = 32;
    const CLASS: ElfClass = ElfClass::Elf32;
    const ULONG: ElfType = ElfType::Word;
    const LONG: ElfType = ElfType::Sword;
}

impl Xlen for Mips64 {
    const VALUE: u8 = 64;
    const REG_BYTES: usize = 8;
    const REG_BITS: u32 = 64;
    const CLASS: ElfClass = ElfClass::Elf64;
    const ULONG: ElfType = ElfType::Xword;
    const LONG: ElfType = ElfType::Sxword;
}
