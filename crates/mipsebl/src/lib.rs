//! mipsebl - MIPS ELF backend tables
//!
//! Decodes the MIPS-specific parts of ELF objects and core files: attribute
//! tags, `e_flags`, section/segment/dynamic codes, relocation storage
//! classes, and the register layout of Linux core notes. The caller parses
//! the container and passes in the extracted fields.
//!
//! # Example
//!
//! ```
//! use mipsebl::{ElfClass, Endian, MipsBackend};
//!
//! let backend = MipsBackend::new(ElfClass::Elf32, Endian::Big);
//! let names: Vec<_> = backend.machine_flag_names(0x1000_0007).collect();
//! assert_eq!(names, ["noreorder", "pic", "cpic", "mips2"]);
//! ```

pub use mipsebl_abi::*;
pub use mipsebl_core::{
    CoreItem, CoreNoteError, FpRegset, ItemFormat, Mips32, Mips64, NT_FPREGSET, NT_PRPSINFO,
    NT_PRSTATUS, NUM_PRSTATUS_REGS, NoteHeader, NoteKind, NoteLayout, Prpsinfo, Prstatus,
    RegisterLocation, RegisterValue, VMCOREINFO_ITEMS, Xlen, core_note,
};

mod backend;
pub use backend::*;

use thiserror::Error;

/// Backend errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("ELF data too small")]
    TooSmall,
    #[error("Invalid ELF magic number")]
    InvalidMagic,
    #[error("Unsupported ELF class: {0}")]
    UnsupportedClass(u8),
    #[error("Unsupported ELF data encoding: {0}")]
    UnsupportedEncoding(u8),
    #[error("Not a MIPS object: e_machine {0}")]
    NotMips(u16),
    #[error("Unrecognized core note: type {n_type}")]
    UnrecognizedNote { n_type: u32 },
    #[error("Section name error: {0}")]
    SectionName(#[from] SectionNameError),
    #[error("Core note error: {0}")]
    CoreNote(#[from] CoreNoteError),
}

pub type Result<T> = std::result::Result<T, Error>;
