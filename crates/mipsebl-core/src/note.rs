//! Core-file note dispatch and register extraction.

use thiserror::Error;
use tracing::{debug, trace};

use mipsebl_abi::{ElfClass, Endian};

use crate::layout::{FpRegset, Prpsinfo, Prstatus, VMCOREINFO_ITEMS};
use crate::regs::{CoreItem, RegisterLocation, RegisterValue};
use crate::xlen::Xlen;

pub const NT_PRSTATUS: u32 = 1;
pub const NT_FPREGSET: u32 = 2;
pub const NT_PRPSINFO: u32 = 3;

/// Core note errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreNoteError {
    #[error("{kind:?} descriptor is {actual} bytes, expected {expected}")]
    DescSize {
        kind: NoteKind,
        expected: usize,
        actual: usize,
    },
    #[error("Item {name} at offset {offset} runs past the {len}-byte descriptor")]
    ItemOutOfBounds {
        name: &'static str,
        offset: usize,
        len: usize,
    },
}

/// Fixed fields of an ELF note header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteHeader {
    pub n_namesz: u32,
    pub n_descsz: u32,
    pub n_type: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteKind {
    Prstatus,
    Fpregset,
    Prpsinfo,
    VmcoreInfo,
}

/// How to interpret one recognized note descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteLayout {
    pub kind: NoteKind,
    /// Exact descriptor size, `None` when any size is accepted.
    pub desc_size: Option<usize>,
    /// Start of the register area within the descriptor.
    pub regs_offset: usize,
    pub reglocs: &'static [RegisterLocation],
    pub items: &'static [CoreItem],
    pub class: ElfClass,
}

impl NoteLayout {
    /// Check a descriptor against the layout's size.
    ///
    /// # Errors
    ///
    /// Returns `DescSize` if the descriptor length differs from the size of
    /// the structure it holds.
    pub fn check_desc(&self, desc: &[u8]) -> Result<(), CoreNoteError> {
        match self.desc_size {
            Some(expected) if expected != desc.len() => Err(CoreNoteError::DescSize {
                kind: self.kind,
                expected,
                actual: desc.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Decode every register described by the layout's runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor has the wrong size.
    pub fn registers(
        &self,
        desc: &[u8],
        endian: Endian,
    ) -> Result<Vec<RegisterValue>, CoreNoteError> {
        self.check_desc(desc)?;

        let mut regs = Vec::with_capacity(self.reglocs.iter().map(|run| run.count).sum());
        for run in self.reglocs {
            let size = run.reg_bytes();
            let base = self.regs_offset + run.offset;
            for (regno, i) in (run.regno..).zip(0..run.count) {
                let start = base + i * size;
                let value = desc
                    .get(start..start + size)
                    .and_then(|bytes| endian.read(bytes))
                    .ok_or(CoreNoteError::ItemOutOfBounds {
                        name: "register",
                        offset: start,
                        len: desc.len(),
                    })?;
                regs.push(RegisterValue {
                    regno,
                    bits: run.bits,
                    value,
                });
            }
        }
        trace!("decoded {} registers from {:?} note", regs.len(), self.kind);
        Ok(regs)
    }

    /// Look up an item by name.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&'static CoreItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Raw bytes of an item. Rest-of-note items run to the end of `desc`.
    ///
    /// # Errors
    ///
    /// Returns `ItemOutOfBounds` if the item does not fit in `desc`.
    pub fn item_bytes<'a>(
        &self,
        item: &CoreItem,
        desc: &'a [u8],
    ) -> Result<&'a [u8], CoreNoteError> {
        let end = item
            .size(self.class)
            .map_or(Some(desc.len()), |size| item.offset.checked_add(size));
        end.and_then(|end| desc.get(item.offset..end))
            .ok_or(CoreNoteError::ItemOutOfBounds {
                name: item.name,
                offset: item.offset,
                len: desc.len(),
            })
    }

    /// Read a scalar item as an unsigned integer.
    ///
    /// Returns `Ok(None)` for arrays, strings and timevals.
    ///
    /// # Errors
    ///
    /// Returns `ItemOutOfBounds` if the item does not fit in `desc`.
    pub fn item_value(
        &self,
        item: &CoreItem,
        desc: &[u8],
        endian: Endian,
    ) -> Result<Option<u64>, CoreNoteError> {
        if item.count != 0 || item.size(self.class) != Some(item.item_type.size(self.class)) {
            return Ok(None);
        }
        Ok(endian.read(self.item_bytes(item, desc)?))
    }

    /// The program counter, if the layout carries one.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor has the wrong size.
    pub fn pc(&self, desc: &[u8], endian: Endian) -> Result<Option<u64>, CoreNoteError> {
        self.check_desc(desc)?;
        match self.items.iter().find(|item| item.pc_register) {
            Some(item) => self.item_value(item, desc, endian),
            None => Ok(None),
        }
    }
}

/// Which family a note owner name belongs to.
enum Owner {
    Linux,
    VmcoreInfo,
}

fn owner(name: &[u8]) -> Option<Owner> {
    match name {
        // Old kernels wrote "CORE" without the terminator.
        b"CORE" | b"CORE\0" | b"LINUX" | b"LINUX\0" => Some(Owner::Linux),
        b"VMCOREINFO\0" => Some(Owner::VmcoreInfo),
        _ => None,
    }
}

/// Find the layout of a core-file note.
///
/// `name` holds at least `n_namesz` bytes of the note's owner name. The
/// prstatus, prpsinfo and fpregset notes are only recognized when
/// `n_descsz` is exactly the size of the structure for width `X`.
#[must_use]
pub fn core_note<X: Xlen>(header: &NoteHeader, name: &[u8]) -> Option<NoteLayout> {
    let owner = usize::try_from(header.n_namesz)
        .ok()
        .and_then(|len| name.get(..len))
        .and_then(owner);

    let (kind, size, regs_offset, reglocs, items): (_, _, _, &'static [RegisterLocation], _) =
        match (owner, header.n_type) {
            (Some(Owner::VmcoreInfo), 0) => (NoteKind::VmcoreInfo, None, 0, &[], VMCOREINFO_ITEMS),
            (Some(Owner::Linux), NT_PRSTATUS) => (
                NoteKind::Prstatus,
                Some(Prstatus::<X>::SIZE),
                Prstatus::<X>::PR_REG,
                Prstatus::<X>::REGLOCS,
                Prstatus::<X>::ITEMS,
            ),
            (Some(Owner::Linux), NT_FPREGSET) => (
                NoteKind::Fpregset,
                Some(FpRegset::SIZE),
                0,
                FpRegset::REGLOCS,
                FpRegset::ITEMS,
            ),
            (Some(Owner::Linux), NT_PRPSINFO) => (
                NoteKind::Prpsinfo,
                Some(Prpsinfo::<X>::SIZE),
                0,
                &[],
                Prpsinfo::<X>::ITEMS,
            ),
            _ => {
                debug!(
                    "unrecognized note: namesz {} type {}",
                    header.n_namesz, header.n_type
                );
                return None;
            }
        };

    if size.is_some_and(|expected| usize::try_from(header.n_descsz) != Ok(expected)) {
        debug!("{kind:?} note rejected: descsz {} != {size:?}", header.n_descsz);
        return None;
    }

    trace!("{kind:?} note, {} register runs", reglocs.len());
    Some(NoteLayout {
        kind,
        desc_size: size,
        regs_offset,
        reglocs,
        items,
        class: X::CLASS,
    })
}
