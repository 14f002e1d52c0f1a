//! Register-location and core-item descriptors.

use mipsebl_abi::{ElfClass, ElfType};

/// A contiguous run of same-sized registers inside a note's register area.
///
/// `offset` is relative to the start of the register area, not the note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegisterLocation {
    pub offset: usize,
    /// DWARF number of the first register in the run.
    pub regno: u32,
    pub count: usize,
    pub bits: u32,
}

impl RegisterLocation {
    /// Bytes occupied by one register.
    #[must_use]
    pub const fn reg_bytes(&self) -> usize {
        self.bits as usize / 8
    }

    /// Bytes occupied by the whole run.
    #[must_use]
    pub const fn span(&self) -> usize {
        self.count * self.reg_bytes()
    }

    /// One past the last byte of the run.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.span()
    }

    /// Whether `regno` falls in this run.
    #[must_use]
    pub const fn contains(&self, regno: u32) -> bool {
        regno >= self.regno && ((regno - self.regno) as usize) < self.count
    }
}

/// A register decoded from a note payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterValue {
    pub regno: u32,
    pub bits: u32,
    pub value: u64,
}

/// How a core item is meant to be printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemFormat {
    Decimal,
    Hex,
    Char,
    Str,
    /// Bit set (signal masks).
    SigSet,
    /// `struct timeval` as seconds and microseconds.
    Timeval,
    /// Newline separated text.
    Lines,
}

impl ItemFormat {
    /// The single-character format code used by core-file printers.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Decimal => 'd',
            Self::Hex => 'x',
            Self::Char => 'c',
            Self::Str => 's',
            Self::SigSet => 'B',
            Self::Timeval => 'T',
            Self::Lines => '\n',
        }
    }
}

/// A named non-register field of a note.
///
/// `offset` is relative to the start of the note descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoreItem {
    pub name: &'static str,
    pub item_type: ElfType,
    pub format: ItemFormat,
    pub offset: usize,
    /// Array length; 0 means a scalar, or the rest of the note for `Lines`.
    pub count: usize,
    pub group: &'static str,
    pub pc_register: bool,
    pub thread_identifier: bool,
}

impl CoreItem {
    pub(crate) const fn new(
        name: &'static str,
        item_type: ElfType,
        format: ItemFormat,
        offset: usize,
        group: &'static str,
    ) -> Self {
        Self {
            name,
            item_type,
            format,
            offset,
            count: 0,
            group,
            pc_register: false,
            thread_identifier: false,
        }
    }

    pub(crate) const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub(crate) const fn pc(mut self) -> Self {
        self.pc_register = true;
        self
    }

    pub(crate) const fn thread_id(mut self) -> Self {
        self.thread_identifier = true;
        self
    }

    /// Bytes occupied by the item, or `None` for a rest-of-note item.
    #[must_use]
    pub const fn size(&self, class: ElfClass) -> Option<usize> {
        let elem = self.item_type.size(class);
        match (self.format, self.count) {
            (ItemFormat::Lines, 0) => None,
            (ItemFormat::Timeval, _) => Some(2 * elem),
            (_, 0) => Some(elem),
            (_, n) => Some(n * elem),
        }
    }
}
