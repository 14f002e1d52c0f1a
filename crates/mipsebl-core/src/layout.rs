//! Linux core-note geometry for MIPS.
//!
//! Offsets follow C layout rules for the kernel's `elf_prstatus`,
//! `elf_prpsinfo` and `elf_fpregset_t` with `unsigned long` of
//! `X::REG_BYTES`. They are computed here rather than taken from host
//! structs so a 64-bit host can describe a 32-bit core and back.

use std::marker::PhantomData;

use mipsebl_abi::ElfType;

use crate::regs::{CoreItem, ItemFormat, RegisterLocation};
use crate::xlen::Xlen;

/// Round `offset` up to a multiple of `align`.
#[must_use]
pub const fn align(offset: usize, align: usize) -> usize {
    offset.div_ceil(align) * align
}

/// Registers saved in `pr_reg`.
pub const NUM_PRSTATUS_REGS: usize = 45;

/// `sizeof (struct timeval)` is two longs.
const fn timeval<X: Xlen>() -> usize {
    2 * X::REG_BYTES
}

/// `struct elf_prstatus` layout.
pub struct Prstatus<X: Xlen>(PhantomData<X>);

impl<X: Xlen> Prstatus<X> {
    const W: usize = X::REG_BYTES;

    pub const SIGNO: usize = 0;
    pub const CODE: usize = 4;
    pub const ERRNO: usize = 8;
    /// `short pr_cursig`.
    pub const CURSIG: usize = 12;
    pub const SIGPEND: usize = align(Self::CURSIG + 2, Self::W);
    pub const SIGHOLD: usize = Self::SIGPEND + Self::W;
    pub const PID: usize = Self::SIGHOLD + Self::W;
    pub const PPID: usize = Self::PID + 4;
    pub const PGRP: usize = Self::PPID + 4;
    pub const SID: usize = Self::PGRP + 4;
    pub const UTIME: usize = align(Self::SID + 4, Self::W);
    pub const STIME: usize = Self::UTIME + timeval::<X>();
    pub const CUTIME: usize = Self::STIME + timeval::<X>();
    pub const CSTIME: usize = Self::CUTIME + timeval::<X>();
    pub const PR_REG: usize = align(Self::CSTIME + timeval::<X>(), Self::W);
    pub const FPVALID: usize = Self::PR_REG + Self::REGS_SIZE;
    pub const SIZE: usize = align(Self::FPVALID + 4, Self::W);

    /// Size of `pr_reg`.
    pub const REGS_SIZE: usize = NUM_PRSTATUS_REGS * Self::W;

    /// Slots before `epc` in `pr_reg`. The 32-bit kernel puts six unused
    /// words ahead of r0.
    pub const GPR_COUNT: usize = if X::VALUE == 32 { 40 } else { 34 };

    /// Offset of the pc slot within `pr_reg`.
    pub const PC_OFFSET: usize = Self::W * Self::GPR_COUNT;

    #[allow(clippy::cast_possible_truncation)]
    const STATUS_REGNO: u32 = Self::GPR_COUNT as u32 + 1;

    pub const REGLOCS: &'static [RegisterLocation] = &[
        RegisterLocation {
            offset: 0,
            regno: 0,
            count: Self::GPR_COUNT,
            bits: X::REG_BITS,
        },
        RegisterLocation {
            offset: Self::W * (Self::GPR_COUNT + 1),
            regno: Self::STATUS_REGNO,
            count: NUM_PRSTATUS_REGS - Self::GPR_COUNT - 1,
            bits: X::REG_BITS,
        },
    ];

    pub const ITEMS: &'static [CoreItem] = &[
        CoreItem::new("info.si_signo", ElfType::Sword, ItemFormat::Decimal, Self::SIGNO, "signal"),
        CoreItem::new("info.si_code", ElfType::Sword, ItemFormat::Decimal, Self::CODE, "signal"),
        CoreItem::new("info.si_errno", ElfType::Sword, ItemFormat::Decimal, Self::ERRNO, "signal"),
        CoreItem::new("cursig", ElfType::Half, ItemFormat::Decimal, Self::CURSIG, "signal"),
        CoreItem::new("sigpend", X::ULONG, ItemFormat::SigSet, Self::SIGPEND, "signal"),
        CoreItem::new("sighold", X::ULONG, ItemFormat::SigSet, Self::SIGHOLD, "signal"),
        CoreItem::new("pid", ElfType::Sword, ItemFormat::Decimal, Self::PID, "identity").thread_id(),
        CoreItem::new("ppid", ElfType::Sword, ItemFormat::Decimal, Self::PPID, "identity"),
        CoreItem::new("pgrp", ElfType::Sword, ItemFormat::Decimal, Self::PGRP, "identity"),
        CoreItem::new("sid", ElfType::Sword, ItemFormat::Decimal, Self::SID, "identity"),
        CoreItem::new("utime", X::LONG, ItemFormat::Timeval, Self::UTIME, "time"),
        CoreItem::new("stime", X::LONG, ItemFormat::Timeval, Self::STIME, "time"),
        CoreItem::new("cutime", X::LONG, ItemFormat::Timeval, Self::CUTIME, "time"),
        CoreItem::new("cstime", X::LONG, ItemFormat::Timeval, Self::CSTIME, "time"),
        CoreItem::new(
            "pc",
            ElfType::Addr,
            ItemFormat::Hex,
            Self::PR_REG + Self::PC_OFFSET,
            "register",
        )
        .pc(),
        CoreItem::new("fpvalid", ElfType::Sword, ItemFormat::Decimal, Self::FPVALID, "register"),
    ];
}

const FNAMESZ: usize = 16;
const PRARGSZ: usize = 80;

/// `struct elf_prpsinfo` layout.
pub struct Prpsinfo<X: Xlen>(PhantomData<X>);

impl<X: Xlen> Prpsinfo<X> {
    const W: usize = X::REG_BYTES;

    pub const STATE: usize = 0;
    pub const SNAME: usize = 1;
    pub const ZOMB: usize = 2;
    pub const NICE: usize = 3;
    pub const FLAG: usize = align(4, Self::W);
    pub const UID: usize = Self::FLAG + Self::W;
    pub const GID: usize = Self::UID + 4;
    pub const PID: usize = Self::GID + 4;
    pub const PPID: usize = Self::PID + 4;
    pub const PGRP: usize = Self::PPID + 4;
    pub const SID: usize = Self::PGRP + 4;
    pub const FNAME: usize = Self::SID + 4;
    pub const PSARGS: usize = Self::FNAME + FNAMESZ;
    pub const SIZE: usize = align(Self::PSARGS + PRARGSZ, Self::W);

    pub const ITEMS: &'static [CoreItem] = &[
        CoreItem::new("state", ElfType::Byte, ItemFormat::Decimal, Self::STATE, "state"),
        CoreItem::new("sname", ElfType::Byte, ItemFormat::Char, Self::SNAME, "state"),
        CoreItem::new("zomb", ElfType::Byte, ItemFormat::Decimal, Self::ZOMB, "state"),
        CoreItem::new("nice", ElfType::Byte, ItemFormat::Decimal, Self::NICE, "state"),
        CoreItem::new("flag", X::ULONG, ItemFormat::Hex, Self::FLAG, "state"),
        CoreItem::new("uid", ElfType::Word, ItemFormat::Decimal, Self::UID, "identity"),
        CoreItem::new("gid", ElfType::Word, ItemFormat::Decimal, Self::GID, "identity"),
        CoreItem::new("pid", ElfType::Sword, ItemFormat::Decimal, Self::PID, "identity"),
        CoreItem::new("ppid", ElfType::Sword, ItemFormat::Decimal, Self::PPID, "identity"),
        CoreItem::new("pgrp", ElfType::Sword, ItemFormat::Decimal, Self::PGRP, "identity"),
        CoreItem::new("sid", ElfType::Sword, ItemFormat::Decimal, Self::SID, "identity"),
        CoreItem::new("fname", ElfType::Byte, ItemFormat::Str, Self::FNAME, "command")
            .with_count(FNAMESZ),
        CoreItem::new("psargs", ElfType::Byte, ItemFormat::Str, Self::PSARGS, "command")
            .with_count(PRARGSZ),
    ];
}

/// `elf_fpregset_t`: 32 doubles, then the control/status and implementation
/// registers. Same on both widths.
pub struct FpRegset;

impl FpRegset {
    pub const FCS: usize = 32 * 8;
    pub const FIR: usize = Self::FCS + 4;
    pub const SIZE: usize = 32 * 8 + 4 * 2;

    pub const REGLOCS: &'static [RegisterLocation] = &[RegisterLocation {
        offset: 0,
        regno: 38,
        count: 32,
        bits: 64,
    }];

    pub const ITEMS: &'static [CoreItem] = &[
        CoreItem::new("fcs", ElfType::Word, ItemFormat::Hex, Self::FCS, "register"),
        CoreItem::new("fir", ElfType::Word, ItemFormat::Hex, Self::FIR, "register"),
    ];
}

/// The `VMCOREINFO` note is free-form text.
pub const VMCOREINFO_ITEMS: &[CoreItem] = &[CoreItem::new(
    "VMCOREINFO",
    ElfType::Byte,
    ItemFormat::Lines,
    0,
    "vmcoreinfo",
)];
