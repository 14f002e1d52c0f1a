//! Shared value types.

use crate::constants::{EI_CLASS, EI_DATA, ELFCLASS32, ELFCLASS64, ELFDATA2LSB, ELFDATA2MSB};

/// Address class of the object being inspected (`e_ident[EI_CLASS]`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElfClass {
    Elf32,
    Elf64,
}

impl ElfClass {
    /// Map a raw `EI_CLASS` byte.
    #[must_use]
    pub const fn from_u8(class: u8) -> Option<Self> {
        match class {
            ELFCLASS32 => Some(Self::Elf32),
            ELFCLASS64 => Some(Self::Elf64),
            _ => None,
        }
    }

    /// Read the class from an `e_ident` array (or any prefix of the file).
    #[must_use]
    pub fn from_ident(ident: &[u8]) -> Option<Self> {
        ident.get(EI_CLASS).copied().and_then(Self::from_u8)
    }

    /// Pointer width in bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Elf32 => 32,
            Self::Elf64 => 64,
        }
    }
}

/// Byte order of the object (`e_ident[EI_DATA]`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// Map a raw `EI_DATA` byte.
    #[must_use]
    pub const fn from_u8(data: u8) -> Option<Self> {
        match data {
            ELFDATA2LSB => Some(Self::Little),
            ELFDATA2MSB => Some(Self::Big),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_ident(ident: &[u8]) -> Option<Self> {
        ident.get(EI_DATA).copied().and_then(Self::from_u8)
    }

    /// Read an unsigned integer of 1, 2, 4 or 8 bytes.
    #[must_use]
    pub fn read(self, bytes: &[u8]) -> Option<u64> {
        let mut buf = [0u8; 8];
        let len = bytes.len();
        if !matches!(len, 1 | 2 | 4 | 8) {
            return None;
        }
        match self {
            Self::Little => {
                buf[..len].copy_from_slice(bytes);
                Some(u64::from_le_bytes(buf))
            }
            Self::Big => {
                buf[8 - len..].copy_from_slice(bytes);
                Some(u64::from_be_bytes(buf))
            }
        }
    }
}

/// ELF data element types.
///
/// Used as the storage class of a relocated value and as the element type of
/// a core-note item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElfType {
    Byte,
    Half,
    Word,
    Sword,
    Xword,
    Sxword,
    Addr,
}

impl ElfType {
    /// Size in bytes of one element for the given class.
    ///
    /// Only `Addr` depends on the class.
    #[must_use]
    pub const fn size(self, class: ElfClass) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word | Self::Sword => 4,
            Self::Xword | Self::Sxword => 8,
            Self::Addr => match class {
                ElfClass::Elf32 => 4,
                ElfClass::Elf64 => 8,
            },
        }
    }

}
