//! MIPS `e_flags` decoding.
//!
//! The header flag word mixes single-bit flags with three multi-bit fields
//! (machine variant, ABI, architecture level). Names are produced one
//! fragment at a time, each fragment clearing exactly the bits it covers, so
//! whatever is left at the end is the unrecognized part of the word.

use std::iter::FusedIterator;

use tracing::debug;

use crate::constants::*;

/// Single-bit flags, in the order they are reported.
const SINGLE_FLAGS: [(u32, &str); 9] = [
    (EF_MIPS_NOREORDER, "noreorder"),
    (EF_MIPS_PIC, "pic"),
    (EF_MIPS_CPIC, "cpic"),
    (EF_MIPS_UCODE, "ugen_reserved"),
    (EF_MIPS_ABI2, "abi2"),
    (EF_MIPS_OPTIONS_FIRST, "odk first"),
    (EF_MIPS_32BITMODE, "32bitmode"),
    (EF_MIPS_NAN2008, "nan2008"),
    (EF_MIPS_FP64, "fp64"),
];

const MACH_NAMES: [(u32, &str); 21] = [
    (EF_MIPS_MACH_3900, "3900"),
    (EF_MIPS_MACH_4010, "4010"),
    (EF_MIPS_MACH_4100, "4100"),
    (EF_MIPS_MACH_4111, "4111"),
    (EF_MIPS_MACH_4120, "4120"),
    (EF_MIPS_MACH_4650, "4650"),
    (EF_MIPS_MACH_5400, "5400"),
    (EF_MIPS_MACH_5500, "5500"),
    (EF_MIPS_MACH_5900, "5900"),
    (EF_MIPS_MACH_SB1, "sb1"),
    (EF_MIPS_MACH_9000, "9000"),
    (EF_MIPS_MACH_LS2E, "loongson-2e"),
    (EF_MIPS_MACH_LS2F, "loongson-2f"),
    (EF_MIPS_MACH_GS464, "gs464"),
    (EF_MIPS_MACH_GS464E, "gs464e"),
    (EF_MIPS_MACH_GS264E, "gs264e"),
    (EF_MIPS_MACH_OCTEON, "octeon"),
    (EF_MIPS_MACH_OCTEON2, "octeon2"),
    (EF_MIPS_MACH_OCTEON3, "octeon3"),
    (EF_MIPS_MACH_XLR, "xlr"),
    (EF_MIPS_MACH_IAMR2, "interaptiv-mr2"),
];

const ABI_NAMES: [(u32, &str); 4] = [
    (EF_MIPS_ABI_O32, "o32"),
    (EF_MIPS_ABI_O64, "o64"),
    (EF_MIPS_ABI_EABI32, "eabi32"),
    (EF_MIPS_ABI_EABI64, "eabi64"),
];

const ARCH_NAMES: [(u32, &str); 11] = [
    (EF_MIPS_ARCH_1, "mips1"),
    (EF_MIPS_ARCH_2, "mips2"),
    (EF_MIPS_ARCH_3, "mips3"),
    (EF_MIPS_ARCH_4, "mips4"),
    (EF_MIPS_ARCH_5, "mips5"),
    (EF_MIPS_ARCH_32, "mips32"),
    (EF_MIPS_ARCH_32R2, "mips32r2"),
    (EF_MIPS_ARCH_32R6, "mips32r6"),
    (EF_MIPS_ARCH_64, "mips64"),
    (EF_MIPS_ARCH_64R2, "mips64r2"),
    (EF_MIPS_ARCH_64R6, "mips64r6"),
];

const ASE_FLAGS: [(u32, &str); 3] = [
    (EF_MIPS_ARCH_ASE_MDMX, "mdmx"),
    (EF_MIPS_ARCH_ASE_M16, "mips16"),
    (EF_MIPS_ARCH_ASE_MICROMIPS, "micromips"),
];

/// Every bit a well-formed MIPS flag word may carry.
pub const KNOWN_FLAGS: u32 = EF_MIPS_NOREORDER
    | EF_MIPS_PIC
    | EF_MIPS_CPIC
    | EF_MIPS_UCODE
    | EF_MIPS_ABI2
    | EF_MIPS_OPTIONS_FIRST
    | EF_MIPS_32BITMODE
    | EF_MIPS_NAN2008
    | EF_MIPS_FP64
    | EF_MIPS_ARCH_ASE_MDMX
    | EF_MIPS_ARCH_ASE_M16
    | EF_MIPS_ARCH_ASE_MICROMIPS
    | EF_MIPS_MACH
    | EF_MIPS_ABI
    | EF_MIPS_ARCH;

fn lookup(table: &[(u32, &'static str)], value: u32) -> Option<&'static str> {
    table
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, name)| *name)
}

/// Iterator over the name fragments of a flag word.
///
/// Created by [`machine_flag_names`]. Once exhausted, [`Self::residual`]
/// holds the bits no fragment accounted for.
#[derive(Clone, Debug)]
pub struct MachineFlagNames {
    flags: u32,
}

impl MachineFlagNames {
    #[must_use]
    pub const fn new(flags: u32) -> Self {
        Self { flags }
    }

    /// Bits not yet consumed.
    #[must_use]
    pub const fn residual(&self) -> u32 {
        self.flags
    }

    /// Consume a multi-bit field. A zero field carries no information and
    /// is skipped; a value outside `table` still clears the whole field.
    fn take_field(
        &mut self,
        mask: u32,
        table: &[(u32, &'static str)],
        unknown: &'static str,
    ) -> Option<&'static str> {
        let value = self.flags & mask;
        if value == 0 {
            return None;
        }
        self.flags &= !mask;
        lookup(table, value).or_else(|| {
            debug!("{unknown}: field value {value:#010x}");
            Some(unknown)
        })
    }

    fn take_bit(&mut self, table: &[(u32, &'static str)]) -> Option<&'static str> {
        let &(bit, name) = table.iter().find(|(bit, _)| self.flags & bit != 0)?;
        self.flags &= !bit;
        Some(name)
    }
}

impl Iterator for MachineFlagNames {
    type Item = &'static str;

    fn next(&mut self) -> Option<&'static str> {
        if self.flags == 0 {
            return None;
        }

        let name = self
            .take_bit(&SINGLE_FLAGS)
            .or_else(|| self.take_field(EF_MIPS_MACH, &MACH_NAMES, "unknown CPU"))
            .or_else(|| self.take_field(EF_MIPS_ABI, &ABI_NAMES, "unknown ABI"))
            .or_else(|| self.take_field(EF_MIPS_ARCH, &ARCH_NAMES, "unknown ISA"))
            .or_else(|| self.take_bit(&ASE_FLAGS));

        if name.is_none() {
            debug!("unrecognized e_flags bits {:#010x}", self.flags);
        }
        name
    }
}

impl FusedIterator for MachineFlagNames {}

/// Name the fragments of `flags`, most significant flags first.
#[must_use]
pub const fn machine_flag_names(flags: u32) -> MachineFlagNames {
    MachineFlagNames::new(flags)
}

/// A flag word split into its named fragments and the leftover bits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagDecomposition {
    pub names: Vec<&'static str>,
    pub residual: u32,
}

impl FlagDecomposition {
    /// True if every bit of the word was named.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.residual == 0
    }
}

/// Decode a flag word in one go.
#[must_use]
pub fn decompose_machine_flags(flags: u32) -> FlagDecomposition {
    let mut iter = machine_flag_names(flags);
    let names = iter.by_ref().collect();
    FlagDecomposition {
        names,
        residual: iter.residual(),
    }
}

/// Check whether a flag word is well formed.
///
/// Rejects unknown bits and out-of-range machine, ABI or architecture
/// values. The architecture field has no "absent" value: zero means mips1.
#[must_use]
pub fn machine_flag_check(flags: u32) -> bool {
    if flags & !KNOWN_FLAGS != 0 {
        return false;
    }

    let mach = flags & EF_MIPS_MACH;
    if mach != 0 && lookup(&MACH_NAMES, mach).is_none() {
        return false;
    }

    let abi = flags & EF_MIPS_ABI;
    if abi != 0 && lookup(&ABI_NAMES, abi).is_none() {
        return false;
    }

    lookup(&ARCH_NAMES, flags & EF_MIPS_ARCH).is_some()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_known_flags_mask() {
        assert_eq!(KNOWN_FLAGS, 0xfeff_f7b7);
        assert_eq!(!KNOWN_FLAGS, 0x0100_0848);
    }

    #[test]
    fn test_single_bits_priority() {
        // fp64 (0x200) is a lower bit than nan2008 (0x400) but is named after it
        let d = decompose_machine_flags(EF_MIPS_FP64 | EF_MIPS_NAN2008 | EF_MIPS_NOREORDER);
        assert_eq!(d.names, ["noreorder", "nan2008", "fp64"]);
        assert!(d.is_complete());
    }

    #[test]
    fn test_typical_o32_pic() {
        let flags = EF_MIPS_NOREORDER
            | EF_MIPS_PIC
            | EF_MIPS_CPIC
            | EF_MIPS_ABI_O32
            | EF_MIPS_ARCH_32R2;
        let d = decompose_machine_flags(flags);
        assert_eq!(d.names, ["noreorder", "pic", "cpic", "o32", "mips32r2"]);
        assert_eq!(d.residual, 0);
    }

    #[test]
    fn test_fields_then_ase() {
        let flags = EF_MIPS_MACH_OCTEON3
            | EF_MIPS_ABI_EABI64
            | EF_MIPS_ARCH_64R2
            | EF_MIPS_ARCH_ASE_MICROMIPS
            | EF_MIPS_ARCH_ASE_MDMX;
        let d = decompose_machine_flags(flags);
        assert_eq!(d.names, ["octeon3", "eabi64", "mips64r2", "mdmx", "micromips"]);
        assert!(d.is_complete());
    }

    #[test]
    fn test_zero_fields_skipped() {
        // mips1 and an untagged ABI contribute no bits and no names
        let d = decompose_machine_flags(EF_MIPS_PIC);
        assert_eq!(d.names, ["pic"]);

        assert!(decompose_machine_flags(0).names.is_empty());
    }

    #[test]
    fn test_unknown_field_values() {
        let d = decompose_machine_flags(EF_MIPS_MACH_ALLEGREX | EF_MIPS_ABI_O64);
        assert_eq!(d.names, ["unknown CPU", "o64"]);
        assert!(d.is_complete());

        let d = decompose_machine_flags(0x0000_5000);
        assert_eq!(d.names, ["unknown ABI"]);
        assert!(d.is_complete());

        let d = decompose_machine_flags(0xf000_0000);
        assert_eq!(d.names, ["unknown ISA"]);
        assert!(d.is_complete());
    }

    #[test]
    fn test_residual_bits() {
        let d = decompose_machine_flags(EF_MIPS_PIC | EF_MIPS_XGOT | 0x40);
        assert_eq!(d.names, ["pic"]);
        assert_eq!(d.residual, EF_MIPS_XGOT | 0x40);
        assert!(!d.is_complete());
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut iter = machine_flag_names(0x800 | EF_MIPS_CPIC);
        assert_eq!(iter.next(), Some("cpic"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.residual(), 0x800);
    }

    #[test]
    fn test_flag_check() {
        assert!(machine_flag_check(EF_MIPS_NOREORDER | EF_MIPS_PIC));
        assert!(machine_flag_check(0));
        assert!(machine_flag_check(
            EF_MIPS_MACH_LS2F | EF_MIPS_ABI_O64 | EF_MIPS_ARCH_3
        ));
        assert!(!machine_flag_check(0x40));
        assert!(!machine_flag_check(EF_MIPS_XGOT));
        assert!(!machine_flag_check(0x0100_0000));
        assert!(!machine_flag_check(EF_MIPS_MACH_ALLEGREX));
        assert!(!machine_flag_check(0x0000_5000));
        assert!(!machine_flag_check(0xb000_0000));
    }

    fn legal_flags() -> impl Strategy<Value = u32> {
        let single = proptest::sample::subsequence(SINGLE_FLAGS.to_vec(), 0..=SINGLE_FLAGS.len());
        let ase = proptest::sample::subsequence(ASE_FLAGS.to_vec(), 0..=ASE_FLAGS.len());
        let mach = proptest::sample::select(
            std::iter::once(0)
                .chain(MACH_NAMES.iter().map(|(v, _)| *v))
                .collect::<Vec<_>>(),
        );
        let abi = proptest::sample::select(
            std::iter::once(0)
                .chain(ABI_NAMES.iter().map(|(v, _)| *v))
                .collect::<Vec<_>>(),
        );
        let arch = proptest::sample::select(ARCH_NAMES.iter().map(|(v, _)| *v).collect::<Vec<_>>());
        (single, ase, mach, abi, arch).prop_map(|(single, ase, mach, abi, arch)| {
            single
                .iter()
                .chain(ase.iter())
                .fold(mach | abi | arch, |acc, (bit, _)| acc | bit)
        })
    }

    proptest! {
        #[test]
        fn prop_legal_words_decompose_fully(flags in legal_flags()) {
            prop_assert!(machine_flag_check(flags));
            let first = decompose_machine_flags(flags);
            prop_assert_eq!(first.residual, 0);
            prop_assert_eq!(first, decompose_machine_flags(flags));
        }

        #[test]
        fn prop_foreign_bits_rejected(flags in any::<u32>(), foreign in 0usize..4) {
            let bit = [EF_MIPS_XGOT, 0x40, 0x800, 0x0100_0000][foreign];
            prop_assert!(!machine_flag_check(flags | bit));
        }

        #[test]
        fn prop_residual_is_foreign_bits(flags in any::<u32>()) {
            let d = decompose_machine_flags(flags);
            prop_assert_eq!(d.residual, flags & !KNOWN_FLAGS);
        }

        #[test]
        fn prop_exhausted_iterator_stays_done(flags in any::<u32>()) {
            let mut iter = machine_flag_names(flags);
            let names: Vec<_> = iter.by_ref().collect();
            let residual = iter.residual();
            for _ in 0..3 {
                prop_assert_eq!(iter.next(), None);
                prop_assert_eq!(iter.residual(), residual);
            }
            prop_assert_eq!(names, decompose_machine_flags(flags).names);
        }
    }
}
