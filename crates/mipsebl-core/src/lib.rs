//! MIPS Linux core-dump note layouts.
//!
//! Describes where registers and process fields live inside `NT_PRSTATUS`,
//! `NT_PRPSINFO` and `NT_FPREGSET` descriptors for 32-bit and 64-bit MIPS,
//! and decodes them from raw note bytes.

pub mod layout;
pub mod note;
pub mod regs;
pub mod xlen;

pub use layout::{FpRegset, NUM_PRSTATUS_REGS, Prpsinfo, Prstatus, VMCOREINFO_ITEMS};
pub use note::{
    CoreNoteError, NT_FPREGSET, NT_PRPSINFO, NT_PRSTATUS, NoteHeader, NoteKind, NoteLayout,
    core_note,
};
pub use regs::{CoreItem, ItemFormat, RegisterLocation, RegisterValue};
pub use xlen::{Mips32, Mips64, Xlen};
