//! MIPS psABI tables for ELF introspection.
//!
//! Pure lookups over already-extracted header, section, dynamic and
//! relocation fields. Nothing in this crate reads file bytes; unknown codes
//! come back as `None` so the caller can fall back to printing the number.

pub mod attrs;
mod constants;
pub mod flags;
pub mod names;
pub mod reloc;
pub mod symbol;
mod types;

pub use attrs::{AttributeLookup, GNU_VENDOR, check_object_attribute};
pub use constants::*;
pub use flags::{
    FlagDecomposition, KNOWN_FLAGS, MachineFlagNames, decompose_machine_flags, machine_flag_check,
    machine_flag_names,
};
pub use names::{
    DYNAMIC_TAG_MASK, dynamic_tag_check, dynamic_tag_name, section_type_name, segment_type_name,
};
pub use reloc::{
    elf64_mips_r_ssym, elf64_mips_r_type1, elf64_mips_r_type2, elf64_mips_r_type3,
    reloc_simple_type,
};
pub use symbol::{
    KNOWN_SECTION_FLAGS, SectionNameError, SectionNames, ShStrTab, check_reloc_target_type,
    check_special_symbol, machine_section_flag_check,
};
pub use types::*;
