//! GNU object attributes for MIPS (`.gnu.attributes`).

use tracing::trace;

use crate::constants::*;

/// Vendor namespace owned by this decoder.
pub const GNU_VENDOR: &str = "gnu";

/// Outcome of an object attribute lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeLookup {
    /// Vendor or tag not owned here; the caller should try another decoder
    /// or print the tag generically.
    UnknownVendor,
    /// Tag recognized. `value_name` is `None` for values outside the known
    /// set, which are accepted so that newer toolchains stay readable.
    Known {
        tag_name: &'static str,
        value_name: Option<&'static str>,
    },
}

impl AttributeLookup {
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }

    #[must_use]
    pub const fn tag_name(&self) -> Option<&'static str> {
        match self {
            Self::Known { tag_name, .. } => Some(*tag_name),
            Self::UnknownVendor => None,
        }
    }

    #[must_use]
    pub const fn value_name(&self) -> Option<&'static str> {
        match self {
            Self::Known { value_name, .. } => *value_name,
            Self::UnknownVendor => None,
        }
    }
}

/// Decode a MIPS object attribute.
#[must_use]
pub fn check_object_attribute(vendor: &str, tag: i32, value: u64) -> AttributeLookup {
    if vendor != GNU_VENDOR {
        return AttributeLookup::UnknownVendor;
    }

    let (tag_name, value_name) = match tag {
        TAG_GNU_MIPS_ABI_FP => ("Tag_GNU_MIPS_ABI_FP", abi_fp_name(value)),
        TAG_GNU_MIPS_ABI_MSA => ("Tag_GNU_MIPS_ABI_MSA", abi_msa_name(value)),
        _ => return AttributeLookup::UnknownVendor,
    };

    if value_name.is_none() {
        trace!(tag_name, value, "unrecognized attribute value");
    }

    AttributeLookup::Known {
        tag_name,
        value_name,
    }
}

const fn abi_fp_name(value: u64) -> Option<&'static str> {
    Some(match value {
        VAL_GNU_MIPS_ABI_FP_ANY => "Hard or soft float",
        VAL_GNU_MIPS_ABI_FP_DOUBLE => "Hard float (double precision)",
        VAL_GNU_MIPS_ABI_FP_SINGLE => "Hard float (single precision)",
        VAL_GNU_MIPS_ABI_FP_SOFT => "Soft float",
        VAL_GNU_MIPS_ABI_FP_OLD_64 => "Hard float (MIPS32r2 64-bit FPU 12 callee-saved)",
        VAL_GNU_MIPS_ABI_FP_XX => "Hard float (32-bit CPU, Any FPU)",
        VAL_GNU_MIPS_ABI_FP_64 => "Hard float (32-bit CPU, 64-bit FPU)",
        VAL_GNU_MIPS_ABI_FP_64A => "Hard float compat (32-bit CPU, 64-bit FPU)",
        VAL_GNU_MIPS_ABI_FP_NAN2008 => "NaN 2008 compatibility",
        _ => return None,
    })
}

const fn abi_msa_name(value: u64) -> Option<&'static str> {
    match value {
        VAL_GNU_MIPS_ABI_MSA_ANY => Some("Any MSA or not"),
        VAL_GNU_MIPS_ABI_MSA_128 => Some("128-bit MSA"),
        _ => None,
    }
}
