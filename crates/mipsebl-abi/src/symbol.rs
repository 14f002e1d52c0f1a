//! Symbol and section validation hooks.

use thiserror::Error;
use tracing::debug;

use crate::constants::*;

/// Section name resolution errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionNameError {
    #[error("No section header string table")]
    NoStringTable,
    #[error("Section header string table index {0} out of range")]
    StringTableOutOfBounds(usize),
    #[error("Section name offset {offset} out of range in section {shstrndx}")]
    NameOutOfBounds { shstrndx: usize, offset: u32 },
    #[error("Section name at offset {0} is not valid UTF-8")]
    InvalidName(u32),
}

/// Section name lookup, implemented by whatever parsed the ELF container.
pub trait SectionNames {
    /// Index of the section header string table (`e_shstrndx`, resolved
    /// through section 0 for large files).
    ///
    /// # Errors
    ///
    /// Returns an error if the file has no usable string table index.
    fn shstrndx(&self) -> Result<usize, SectionNameError>;

    /// Resolve `sh_name` in string table section `shstrndx`.
    ///
    /// # Errors
    ///
    /// Returns an error if the section or the offset is out of range.
    fn section_name(&self, shstrndx: usize, sh_name: u32) -> Result<&str, SectionNameError>;
}

/// A section header string table held in memory.
#[derive(Clone, Copy, Debug)]
pub struct ShStrTab<'a> {
    index: usize,
    data: &'a [u8],
}

impl<'a> ShStrTab<'a> {
    #[must_use]
    pub const fn new(index: usize, data: &'a [u8]) -> Self {
        Self { index, data }
    }
}

impl SectionNames for ShStrTab<'_> {
    fn shstrndx(&self) -> Result<usize, SectionNameError> {
        Ok(self.index)
    }

    fn section_name(&self, shstrndx: usize, sh_name: u32) -> Result<&str, SectionNameError> {
        if shstrndx != self.index {
            return Err(SectionNameError::StringTableOutOfBounds(shstrndx));
        }
        let start = usize::try_from(sh_name)
            .ok()
            .filter(|start| *start < self.data.len())
            .ok_or(SectionNameError::NameOutOfBounds {
                shstrndx,
                offset: sh_name,
            })?;
        let bytes = &self.data[start..];
        let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        std::str::from_utf8(&bytes[..len]).map_err(|_| SectionNameError::InvalidName(sh_name))
    }
}

/// Sections whose symbols may carry otherwise invalid values or sizes.
const SPECIAL_SYMBOL_SECTIONS: [&str; 2] = [".got", ".bss"];

/// Check whether a section may be a relocation target even though its type
/// is not one the generic checks accept.
#[must_use]
pub const fn check_reloc_target_type(sh_type: u32) -> bool {
    sh_type == SHT_MIPS_DWARF
}

/// Check whether a symbol's `st_value` and `st_size` are acceptable despite
/// failing the generic checks.
///
/// `sh_name` is the name offset of the section the symbol lives in. Symbols
/// in `.got` and `.bss` are accepted; a failed name lookup rejects.
#[must_use]
pub fn check_special_symbol<S: SectionNames + ?Sized>(sections: &S, sh_name: u32) -> bool {
    let name = sections
        .shstrndx()
        .and_then(|shstrndx| sections.section_name(shstrndx, sh_name));

    match name {
        Ok(name) => SPECIAL_SYMBOL_SECTIONS.contains(&name),
        Err(err) => {
            debug!("special symbol check: {err}");
            false
        }
    }
}

/// Processor-specific section flags a MIPS object may use.
pub const KNOWN_SECTION_FLAGS: u64 = SHF_MIPS_GPREL
    | SHF_MIPS_MERGE
    | SHF_MIPS_ADDR
    | SHF_MIPS_STRINGS
    | SHF_MIPS_NOSTRIP
    | SHF_MIPS_LOCAL
    | SHF_MIPS_NAMES
    | SHF_MIPS_NODUPE;

/// Check the `SHF_MASKPROC` part of a section's flags.
#[must_use]
pub const fn machine_section_flag_check(sh_flags: u64) -> bool {
    sh_flags & !KNOWN_SECTION_FLAGS == 0
}
