//! Names for processor-specific section types, segment types and dynamic
//! tags.

use crate::constants::*;

/// Name of a MIPS section type (`sh_type`).
#[must_use]
pub const fn section_type_name(sh_type: u32) -> Option<&'static str> {
    Some(match sh_type {
        SHT_MIPS_LIBLIST => "MIPS_LIBLIST",
        SHT_MIPS_MSYM => "MIPS_MSYM",
        SHT_MIPS_CONFLICT => "MIPS_CONFLICT",
        SHT_MIPS_GPTAB => "MIPS_GPTAB",
        SHT_MIPS_UCODE => "MIPS_UCODE",
        SHT_MIPS_DEBUG => "MIPS_DEBUG",
        SHT_MIPS_REGINFO => "MIPS_REGINFO",
        SHT_MIPS_PACKAGE => "MIPS_PACKAGE",
        SHT_MIPS_PACKSYM => "MIPS_PACKSYM",
        SHT_MIPS_RELD => "MIPS_RELD",
        SHT_MIPS_IFACE => "MIPS_IFACE",
        SHT_MIPS_CONTENT => "MIPS_CONTENT",
        SHT_MIPS_OPTIONS => "MIPS_OPTIONS",
        SHT_MIPS_SHDR => "MIPS_SHDR",
        SHT_MIPS_FDESC => "MIPS_FDESC",
        SHT_MIPS_EXTSYM => "MIPS_EXTSYM",
        SHT_MIPS_DENSE => "MIPS_DENSE",
        SHT_MIPS_PDESC => "MIPS_PDESC",
        SHT_MIPS_LOCSYM => "MIPS_LOCSYM",
        SHT_MIPS_AUXSYM => "MIPS_AUXSYM",
        SHT_MIPS_OPTSYM => "MIPS_OPTSYM",
        SHT_MIPS_LOCSTR => "MIPS_LOCSTR",
        SHT_MIPS_LINE => "MIPS_LINE",
        SHT_MIPS_RFDESC => "MIPS_RFDESC",
        SHT_MIPS_DELTASYM => "MIPS_DELTASYM",
        SHT_MIPS_DELTAINST => "MIPS_DELTAINST",
        SHT_MIPS_DELTACLASS => "MIPS_DELTACLASS",
        SHT_MIPS_DWARF => "MIPS_DWARF",
        SHT_MIPS_DELTADECL => "MIPS_DELTADECL",
        SHT_MIPS_SYMBOL_LIB => "MIPS_SYMBOL_LIB",
        SHT_MIPS_EVENTS => "MIPS_EVENTS",
        SHT_MIPS_TRANSLATE => "MIPS_TRANSLATE",
        SHT_MIPS_PIXIE => "MIPS_PIXIE",
        SHT_MIPS_XLATE => "MIPS_XLATE",
        SHT_MIPS_XLATE_DEBUG => "MIPS_XLATE_DEBUG",
        SHT_MIPS_WHIRL => "MIPS_WHIRL",
        SHT_MIPS_EH_REGION => "MIPS_EH_REGION",
        SHT_MIPS_XLATE_OLD => "MIPS_XLATE_OLD",
        SHT_MIPS_PDR_EXCEPTION => "MIPS_PDR_EXCEPTION",
        SHT_MIPS_ABIFLAGS => "MIPS_ABIFLAGS",
        SHT_MIPS_XHASH => "MIPS_XHASH",
        _ => return None,
    })
}

/// Name of a MIPS segment type (`p_type`).
#[must_use]
pub const fn segment_type_name(p_type: u32) -> Option<&'static str> {
    match p_type {
        PT_MIPS_REGINFO => Some("REGINFO"),
        PT_MIPS_RTPROC => Some("RTPROC"),
        PT_MIPS_OPTIONS => Some("OPTIONS"),
        PT_MIPS_ABIFLAGS => Some("ABIFLAGS"),
        _ => None,
    }
}

/// Name of a MIPS dynamic tag (`d_tag`).
#[must_use]
pub const fn dynamic_tag_name(tag: i64) -> Option<&'static str> {
    Some(match tag {
        DT_MIPS_RLD_VERSION => "MIPS_RLD_VERSION",
        DT_MIPS_TIME_STAMP => "MIPS_TIME_STAMP",
        DT_MIPS_ICHECKSUM => "MIPS_ICHECKSUM",
        DT_MIPS_IVERSION => "MIPS_IVERSION",
        DT_MIPS_FLAGS => "MIPS_FLAGS",
        DT_MIPS_BASE_ADDRESS => "MIPS_BASE_ADDRESS",
        DT_MIPS_MSYM => "MIPS_MSYM",
        DT_MIPS_CONFLICT => "MIPS_CONFLICT",
        DT_MIPS_LIBLIST => "MIPS_LIBLIST",
        DT_MIPS_LOCAL_GOTNO => "MIPS_LOCAL_GOTNO",
        DT_MIPS_CONFLICTNO => "MIPS_CONFLICTNO",
        DT_MIPS_LIBLISTNO => "MIPS_LIBLISTNO",
        DT_MIPS_SYMTABNO => "MIPS_SYMTABNO",
        DT_MIPS_UNREFEXTNO => "MIPS_UNREFEXTNO",
        DT_MIPS_GOTSYM => "MIPS_GOTSYM",
        DT_MIPS_HIPAGENO => "MIPS_HIPAGENO",
        DT_MIPS_RLD_MAP => "MIPS_RLD_MAP",
        DT_MIPS_RLD_MAP_REL => "MIPS_RLD_MAP_REL",
        DT_MIPS_DELTA_CLASS => "MIPS_DELTA_CLASS",
        DT_MIPS_DELTA_CLASS_NO => "MIPS_DELTA_CLASS_NO",
        DT_MIPS_DELTA_INSTANCE => "MIPS_DELTA_INSTANCE",
        DT_MIPS_DELTA_INSTANCE_NO => "MIPS_DELTA_INSTANCE_NO",
        DT_MIPS_DELTA_RELOC => "MIPS_DELTA_RELOC",
        DT_MIPS_DELTA_RELOC_NO => "MIPS_DELTA_RELOC_NO",
        DT_MIPS_DELTA_SYM => "MIPS_DELTA_SYM",
        DT_MIPS_DELTA_SYM_NO => "MIPS_DELTA_SYM_NO",
        DT_MIPS_DELTA_CLASSSYM => "MIPS_DELTA_CLASSSYM",
        DT_MIPS_DELTA_CLASSSYM_NO => "MIPS_DELTA_CLASSSYM_NO",
        DT_MIPS_CXX_FLAGS => "MIPS_CXX_FLAGS",
        DT_MIPS_PIXIE_INIT => "MIPS_PIXIE_INIT",
        DT_MIPS_SYMBOL_LIB => "MIPS_SYMBOL_LIB",
        DT_MIPS_LOCALPAGE_GOTIDX => "MIPS_LOCALPAGE_GOTIDX",
        DT_MIPS_LOCAL_GOTIDX => "MIPS_LOCAL_GOTIDX",
        DT_MIPS_HIDDEN_GOTIDX => "MIPS_HIDDEN_GOTIDX",
        DT_MIPS_PROTECTED_GOTIDX => "MIPS_PROTECTED_GOTIDX",
        DT_MIPS_OPTIONS => "MIPS_OPTIONS",
        DT_MIPS_INTERFACE => "MIPS_INTERFACE",
        DT_MIPS_DYNSTR_ALIGN => "MIPS_DYNSTR_ALIGN",
        DT_MIPS_INTERFACE_SIZE => "MIPS_INTERFACE_SIZE",
        DT_MIPS_RLD_TEXT_RESOLVE_ADDR => "MIPS_RLD_TEXT_RESOLVE_ADDR",
        DT_MIPS_PERF_SUFFIX => "MIPS_PERF_SUFFIX",
        DT_MIPS_COMPACT_SIZE => "MIPS_COMPACT_SIZE",
        DT_MIPS_GP_VALUE => "MIPS_GP_VALUE",
        DT_MIPS_AUX_DYNAMIC => "MIPS_AUX_DYNAMIC",
        DT_MIPS_PLTGOT => "MIPS_PLTGOT",
        DT_MIPS_RWPLT => "MIPS_RWPLT",
        DT_MIPS_XHASH => "MIPS_XHASH",
        _ => return None,
    })
}

/// Union of every MIPS dynamic tag value.
pub const DYNAMIC_TAG_MASK: i64 = DT_MIPS_RLD_VERSION
    | DT_MIPS_TIME_STAMP
    | DT_MIPS_ICHECKSUM
    | DT_MIPS_IVERSION
    | DT_MIPS_FLAGS
    | DT_MIPS_BASE_ADDRESS
    | DT_MIPS_MSYM
    | DT_MIPS_CONFLICT
    | DT_MIPS_LIBLIST
    | DT_MIPS_LOCAL_GOTNO
    | DT_MIPS_CONFLICTNO
    | DT_MIPS_LIBLISTNO
    | DT_MIPS_SYMTABNO
    | DT_MIPS_UNREFEXTNO
    | DT_MIPS_GOTSYM
    | DT_MIPS_HIPAGENO
    | DT_MIPS_RLD_MAP
    | DT_MIPS_DELTA_CLASS
    | DT_MIPS_DELTA_CLASS_NO
    | DT_MIPS_DELTA_INSTANCE
    | DT_MIPS_DELTA_INSTANCE_NO
    | DT_MIPS_DELTA_RELOC
    | DT_MIPS_DELTA_RELOC_NO
    | DT_MIPS_DELTA_SYM
    | DT_MIPS_DELTA_SYM_NO
    | DT_MIPS_DELTA_CLASSSYM
    | DT_MIPS_DELTA_CLASSSYM_NO
    | DT_MIPS_CXX_FLAGS
    | DT_MIPS_PIXIE_INIT
    | DT_MIPS_SYMBOL_LIB
    | DT_MIPS_LOCALPAGE_GOTIDX
    | DT_MIPS_LOCAL_GOTIDX
    | DT_MIPS_HIDDEN_GOTIDX
    | DT_MIPS_PROTECTED_GOTIDX
    | DT_MIPS_OPTIONS
    | DT_MIPS_INTERFACE
    | DT_MIPS_DYNSTR_ALIGN
    | DT_MIPS_INTERFACE_SIZE
    | DT_MIPS_RLD_TEXT_RESOLVE_ADDR
    | DT_MIPS_PERF_SUFFIX
    | DT_MIPS_COMPACT_SIZE
    | DT_MIPS_GP_VALUE
    | DT_MIPS_AUX_DYNAMIC
    | DT_MIPS_PLTGOT
    | DT_MIPS_RWPLT
    | DT_MIPS_RLD_MAP_REL
    | DT_MIPS_XHASH;

/// Check a dynamic tag against the MIPS tag mask.
///
/// This is a mask test, not a table lookup: any tag whose bits all fall
/// inside [`DYNAMIC_TAG_MASK`] passes.
#[must_use]
pub const fn dynamic_tag_check(tag: i64) -> bool {
    tag & !DYNAMIC_TAG_MASK == 0
}
