//! The per-object backend handle.

use tracing::debug;

use mipsebl_abi::{
    AttributeLookup, EM_MIPS, ElfClass, ElfType, Endian, FlagDecomposition, MachineFlagNames,
    SectionNames,
};
use mipsebl_core::{Mips32, Mips64, NoteHeader, NoteLayout, RegisterValue, core_note};

use crate::{Error, Result};

const ELF_MAGIC: &[u8; 4] = b"\x7fELF";
const EI_NIDENT: usize = 16;
/// `e_machine` follows `e_ident` and the 2-byte `e_type`.
const E_MACHINE: usize = EI_NIDENT + 2;

/// MIPS hooks bound to one object's class and byte order.
///
/// Everything here is a thin, class-aware wrapper over the free functions in
/// `mipsebl_abi` and `mipsebl_core`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MipsBackend {
    class: ElfClass,
    endian: Endian,
}

impl MipsBackend {
    #[must_use]
    pub const fn new(class: ElfClass, endian: Endian) -> Self {
        Self { class, endian }
    }

    /// Build a backend from the start of an ELF file.
    ///
    /// Only `e_ident` is inspected; see [`Self::from_header`] to also check
    /// `e_machine`.
    ///
    /// # Errors
    ///
    /// Returns an error if the magic, class or data encoding is invalid.
    pub fn from_ident(data: &[u8]) -> Result<Self> {
        if data.len() < EI_NIDENT {
            return Err(Error::TooSmall);
        }
        if !data.starts_with(ELF_MAGIC) {
            return Err(Error::InvalidMagic);
        }
        let class = ElfClass::from_ident(data).ok_or(Error::UnsupportedClass(data[4]))?;
        let endian = Endian::from_ident(data).ok_or(Error::UnsupportedEncoding(data[5]))?;
        Ok(Self::new(class, endian))
    }

    /// Build a backend from an ELF header, checking that it is a MIPS object.
    ///
    /// # Errors
    ///
    /// Returns an error if the identification is invalid or `e_machine` is
    /// not `EM_MIPS`.
    pub fn from_header(data: &[u8]) -> Result<Self> {
        let backend = Self::from_ident(data)?;
        let bytes: [u8; 2] = data
            .get(E_MACHINE..E_MACHINE + 2)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(Error::TooSmall)?;
        let machine = match backend.endian {
            Endian::Little => u16::from_le_bytes(bytes),
            Endian::Big => u16::from_be_bytes(bytes),
        };
        if machine != EM_MIPS {
            debug!("rejecting e_machine {machine}");
            return Err(Error::NotMips(machine));
        }
        Ok(backend)
    }

    #[must_use]
    pub const fn class(&self) -> ElfClass {
        self.class
    }

    #[must_use]
    pub const fn endian(&self) -> Endian {
        self.endian
    }

    #[must_use]
    pub const fn xlen(&self) -> u8 {
        self.class.bits()
    }

    /// Storage class of a simple data relocation, unpacking the composed
    /// 64-bit type word when the object is ELF64.
    #[must_use]
    pub const fn reloc_simple_type(&self, r_type: u32) -> Option<ElfType> {
        mipsebl_abi::reloc_simple_type(self.class, r_type)
    }
}

// Class-independent hooks, kept on the handle so callers dispatch through
// one value.
#[allow(clippy::unused_self)]
impl MipsBackend {
    #[must_use]
    pub fn object_attribute(&self, vendor: &str, tag: i32, value: u64) -> AttributeLookup {
        mipsebl_abi::check_object_attribute(vendor, tag, value)
    }

    #[must_use]
    pub const fn machine_flag_names(&self, flags: u32) -> MachineFlagNames {
        mipsebl_abi::machine_flag_names(flags)
    }

    #[must_use]
    pub fn decompose_machine_flags(&self, flags: u32) -> FlagDecomposition {
        mipsebl_abi::decompose_machine_flags(flags)
    }

    #[must_use]
    pub fn machine_flag_check(&self, flags: u32) -> bool {
        mipsebl_abi::machine_flag_check(flags)
    }

    #[must_use]
    pub const fn section_type_name(&self, sh_type: u32) -> Option<&'static str> {
        mipsebl_abi::section_type_name(sh_type)
    }

    #[must_use]
    pub const fn segment_type_name(&self, p_type: u32) -> Option<&'static str> {
        mipsebl_abi::segment_type_name(p_type)
    }

    #[must_use]
    pub const fn dynamic_tag_name(&self, tag: i64) -> Option<&'static str> {
        mipsebl_abi::dynamic_tag_name(tag)
    }

    #[must_use]
    pub const fn dynamic_tag_check(&self, tag: i64) -> bool {
        mipsebl_abi::dynamic_tag_check(tag)
    }

    #[must_use]
    pub const fn check_reloc_target_type(&self, sh_type: u32) -> bool {
        mipsebl_abi::check_reloc_target_type(sh_type)
    }

    #[must_use]
    pub fn check_special_symbol<S: SectionNames + ?Sized>(
        &self,
        sections: &S,
        sh_name: u32,
    ) -> bool {
        mipsebl_abi::check_special_symbol(sections, sh_name)
    }

    /// Resolve a section name through the caller's string table.
    ///
    /// # Errors
    ///
    /// Returns an error if the string table index or the name offset cannot
    /// be resolved.
    pub fn section_name<'a, S: SectionNames + ?Sized>(
        &self,
        sections: &'a S,
        sh_name: u32,
    ) -> Result<&'a str> {
        let shstrndx = sections.shstrndx()?;
        Ok(sections.section_name(shstrndx, sh_name)?)
    }

    #[must_use]
    pub const fn machine_section_flag_check(&self, sh_flags: u64) -> bool {
        mipsebl_abi::machine_section_flag_check(sh_flags)
    }
}

impl MipsBackend {
    /// Layout of a core-file note for this object's width.
    #[must_use]
    pub fn core_note(&self, header: &NoteHeader, name: &[u8]) -> Option<NoteLayout> {
        match self.class {
            ElfClass::Elf32 => core_note::<Mips32>(header, name),
            ElfClass::Elf64 => core_note::<Mips64>(header, name),
        }
    }

    fn require_note(&self, header: &NoteHeader, name: &[u8]) -> Result<NoteLayout> {
        self.core_note(header, name).ok_or(Error::UnrecognizedNote {
            n_type: header.n_type,
        })
    }

    /// Decode the registers carried by a note.
    ///
    /// # Errors
    ///
    /// Returns an error if the note is not a recognized core note or its
    /// descriptor does not match the header.
    pub fn note_registers(
        &self,
        header: &NoteHeader,
        name: &[u8],
        desc: &[u8],
    ) -> Result<Vec<RegisterValue>> {
        let layout = self.require_note(header, name)?;
        Ok(layout.registers(desc, self.endian)?)
    }

    /// Read the program counter from a note, if it carries one.
    ///
    /// # Errors
    ///
    /// Same as [`Self::note_registers`].
    pub fn note_pc(&self, header: &NoteHeader, name: &[u8], desc: &[u8]) -> Result<Option<u64>> {
        let layout = self.require_note(header, name)?;
        Ok(layout.pc(desc, self.endian)?)
    }
}
