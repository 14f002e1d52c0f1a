//! MIPS psABI and GNU extension constants.
//!
//! Values follow the MIPS psABI, the SGI extensions and the GNU additions
//! (binutils `include/elf/mips.h`).

// ELF identification
pub const EI_CLASS: usize = 4;
pub const ELFCLASS32: u8 = 1;
pub const ELFCLASS64: u8 = 2;
pub const EI_DATA: usize = 5;
pub const ELFDATA2LSB: u8 = 1;
pub const ELFDATA2MSB: u8 = 2;
pub const EM_MIPS: u16 = 8;

// e_flags: single bits
pub const EF_MIPS_NOREORDER: u32 = 0x0000_0001;
pub const EF_MIPS_PIC: u32 = 0x0000_0002;
pub const EF_MIPS_CPIC: u32 = 0x0000_0004;
pub const EF_MIPS_XGOT: u32 = 0x0000_0008;
pub const EF_MIPS_UCODE: u32 = 0x0000_0010;
pub const EF_MIPS_ABI2: u32 = 0x0000_0020;
pub const EF_MIPS_OPTIONS_FIRST: u32 = 0x0000_0080;
pub const EF_MIPS_32BITMODE: u32 = 0x0000_0100;
pub const EF_MIPS_FP64: u32 = 0x0000_0200;
pub const EF_MIPS_NAN2008: u32 = 0x0000_0400;

// e_flags: architectural extensions
pub const EF_MIPS_ARCH_ASE: u32 = 0x0f00_0000;
pub const EF_MIPS_ARCH_ASE_MDMX: u32 = 0x0800_0000;
pub const EF_MIPS_ARCH_ASE_M16: u32 = 0x0400_0000;
pub const EF_MIPS_ARCH_ASE_MICROMIPS: u32 = 0x0200_0000;

// e_flags: machine variant (GNU extension)
pub const EF_MIPS_MACH: u32 = 0x00ff_0000;
pub const EF_MIPS_MACH_3900: u32 = 0x0081_0000;
pub const EF_MIPS_MACH_4010: u32 = 0x0082_0000;
pub const EF_MIPS_MACH_4100: u32 = 0x0083_0000;
pub const EF_MIPS_MACH_ALLEGREX: u32 = 0x0084_0000;
pub const EF_MIPS_MACH_4650: u32 = 0x0085_0000;
pub const EF_MIPS_MACH_4120: u32 = 0x0087_0000;
pub const EF_MIPS_MACH_4111: u32 = 0x0088_0000;
pub const EF_MIPS_MACH_SB1: u32 = 0x008a_0000;
pub const EF_MIPS_MACH_OCTEON: u32 = 0x008b_0000;
pub const EF_MIPS_MACH_XLR: u32 = 0x008c_0000;
pub const EF_MIPS_MACH_OCTEON2: u32 = 0x008d_0000;
pub const EF_MIPS_MACH_OCTEON3: u32 = 0x008e_0000;
pub const EF_MIPS_MACH_5400: u32 = 0x0091_0000;
pub const EF_MIPS_MACH_5900: u32 = 0x0092_0000;
pub const EF_MIPS_MACH_IAMR2: u32 = 0x0093_0000;
pub const EF_MIPS_MACH_5500: u32 = 0x0098_0000;
pub const EF_MIPS_MACH_9000: u32 = 0x0099_0000;
pub const EF_MIPS_MACH_LS2E: u32 = 0x00a0_0000;
pub const EF_MIPS_MACH_LS2F: u32 = 0x00a1_0000;
pub const EF_MIPS_MACH_GS464: u32 = 0x00a2_0000;
pub const EF_MIPS_MACH_GS464E: u32 = 0x00a3_0000;
pub const EF_MIPS_MACH_GS264E: u32 = 0x00a4_0000;

// e_flags: ABI (GNU extension)
pub const EF_MIPS_ABI: u32 = 0x0000_f000;
pub const EF_MIPS_ABI_O32: u32 = 0x0000_1000;
pub const EF_MIPS_ABI_O64: u32 = 0x0000_2000;
pub const EF_MIPS_ABI_EABI32: u32 = 0x0000_3000;
pub const EF_MIPS_ABI_EABI64: u32 = 0x0000_4000;

// e_flags: architecture level
pub const EF_MIPS_ARCH: u32 = 0xf000_0000;
pub const EF_MIPS_ARCH_1: u32 = 0x0000_0000;
pub const EF_MIPS_ARCH_2: u32 = 0x1000_0000;
pub const EF_MIPS_ARCH_3: u32 = 0x2000_0000;
pub const EF_MIPS_ARCH_4: u32 = 0x3000_0000;
pub const EF_MIPS_ARCH_5: u32 = 0x4000_0000;
pub const EF_MIPS_ARCH_32: u32 = 0x5000_0000;
pub const EF_MIPS_ARCH_64: u32 = 0x6000_0000;
pub const EF_MIPS_ARCH_32R2: u32 = 0x7000_0000;
pub const EF_MIPS_ARCH_64R2: u32 = 0x8000_0000;
pub const EF_MIPS_ARCH_32R6: u32 = 0x9000_0000;
pub const EF_MIPS_ARCH_64R6: u32 = 0xa000_0000;

// Section types
pub const SHT_MIPS_LIBLIST: u32 = 0x7000_0000;
pub const SHT_MIPS_MSYM: u32 = 0x7000_0001;
pub const SHT_MIPS_CONFLICT: u32 = 0x7000_0002;
pub const SHT_MIPS_GPTAB: u32 = 0x7000_0003;
pub const SHT_MIPS_UCODE: u32 = 0x7000_0004;
pub const SHT_MIPS_DEBUG: u32 = 0x7000_0005;
pub const SHT_MIPS_REGINFO: u32 = 0x7000_0006;
pub const SHT_MIPS_PACKAGE: u32 = 0x7000_0007;
pub const SHT_MIPS_PACKSYM: u32 = 0x7000_0008;
pub const SHT_MIPS_RELD: u32 = 0x7000_0009;
pub const SHT_MIPS_IFACE: u32 = 0x7000_000b;
pub const SHT_MIPS_CONTENT: u32 = 0x7000_000c;
pub const SHT_MIPS_OPTIONS: u32 = 0x7000_000d;
pub const SHT_MIPS_SHDR: u32 = 0x7000_0010;
pub const SHT_MIPS_FDESC: u32 = 0x7000_0011;
pub const SHT_MIPS_EXTSYM: u32 = 0x7000_0012;
pub const SHT_MIPS_DENSE: u32 = 0x7000_0013;
pub const SHT_MIPS_PDESC: u32 = 0x7000_0014;
pub const SHT_MIPS_LOCSYM: u32 = 0x7000_0015;
pub const SHT_MIPS_AUXSYM: u32 = 0x7000_0016;
pub const SHT_MIPS_OPTSYM: u32 = 0x7000_0017;
pub const SHT_MIPS_LOCSTR: u32 = 0x7000_0018;
pub const SHT_MIPS_LINE: u32 = 0x7000_0019;
pub const SHT_MIPS_RFDESC: u32 = 0x7000_001a;
pub const SHT_MIPS_DELTASYM: u32 = 0x7000_001b;
pub const SHT_MIPS_DELTAINST: u32 = 0x7000_001c;
pub const SHT_MIPS_DELTACLASS: u32 = 0x7000_001d;
pub const SHT_MIPS_DWARF: u32 = 0x7000_001e;
pub const SHT_MIPS_DELTADECL: u32 = 0x7000_001f;
pub const SHT_MIPS_SYMBOL_LIB: u32 = 0x7000_0020;
pub const SHT_MIPS_EVENTS: u32 = 0x7000_0021;
pub const SHT_MIPS_TRANSLATE: u32 = 0x7000_0022;
pub const SHT_MIPS_PIXIE: u32 = 0x7000_0023;
pub const SHT_MIPS_XLATE: u32 = 0x7000_0024;
pub const SHT_MIPS_XLATE_DEBUG: u32 = 0x7000_0025;
pub const SHT_MIPS_WHIRL: u32 = 0x7000_0026;
pub const SHT_MIPS_EH_REGION: u32 = 0x7000_0027;
pub const SHT_MIPS_XLATE_OLD: u32 = 0x7000_0028;
pub const SHT_MIPS_PDR_EXCEPTION: u32 = 0x7000_0029;
pub const SHT_MIPS_ABIFLAGS: u32 = 0x7000_002a;
pub const SHT_MIPS_XHASH: u32 = 0x7000_002b;

// Section flags
pub const SHF_MIPS_NODUPE: u64 = 0x0100_0000;
pub const SHF_MIPS_NAMES: u64 = 0x0200_0000;
pub const SHF_MIPS_LOCAL: u64 = 0x0400_0000;
pub const SHF_MIPS_NOSTRIP: u64 = 0x0800_0000;
pub const SHF_MIPS_GPREL: u64 = 0x1000_0000;
pub const SHF_MIPS_MERGE: u64 = 0x2000_0000;
pub const SHF_MIPS_ADDR: u64 = 0x4000_0000;
pub const SHF_MIPS_STRINGS: u64 = 0x8000_0000;

// Segment types
pub const PT_MIPS_REGINFO: u32 = 0x7000_0000;
pub const PT_MIPS_RTPROC: u32 = 0x7000_0001;
pub const PT_MIPS_OPTIONS: u32 = 0x7000_0002;
pub const PT_MIPS_ABIFLAGS: u32 = 0x7000_0003;

// Dynamic tags
pub const DT_MIPS_RLD_VERSION: i64 = 0x7000_0001;
pub const DT_MIPS_TIME_STAMP: i64 = 0x7000_0002;
pub const DT_MIPS_ICHECKSUM: i64 = 0x7000_0003;
pub const DT_MIPS_IVERSION: i64 = 0x7000_0004;
pub const DT_MIPS_FLAGS: i64 = 0x7000_0005;
pub const DT_MIPS_BASE_ADDRESS: i64 = 0x7000_0006;
pub const DT_MIPS_MSYM: i64 = 0x7000_0007;
pub const DT_MIPS_CONFLICT: i64 = 0x7000_0008;
pub const DT_MIPS_LIBLIST: i64 = 0x7000_0009;
pub const DT_MIPS_LOCAL_GOTNO: i64 = 0x7000_000a;
pub const DT_MIPS_CONFLICTNO: i64 = 0x7000_000b;
pub const DT_MIPS_LIBLISTNO: i64 = 0x7000_0010;
pub const DT_MIPS_SYMTABNO: i64 = 0x7000_0011;
pub const DT_MIPS_UNREFEXTNO: i64 = 0x7000_0012;
pub const DT_MIPS_GOTSYM: i64 = 0x7000_0013;
pub const DT_MIPS_HIPAGENO: i64 = 0x7000_0014;
pub const DT_MIPS_RLD_MAP: i64 = 0x7000_0016;
pub const DT_MIPS_DELTA_CLASS: i64 = 0x7000_0017;
pub const DT_MIPS_DELTA_CLASS_NO: i64 = 0x7000_0018;
pub const DT_MIPS_DELTA_INSTANCE: i64 = 0x7000_0019;
pub const DT_MIPS_DELTA_INSTANCE_NO: i64 = 0x7000_001a;
pub const DT_MIPS_DELTA_RELOC: i64 = 0x7000_001b;
pub const DT_MIPS_DELTA_RELOC_NO: i64 = 0x7000_001c;
pub const DT_MIPS_DELTA_SYM: i64 = 0x7000_001d;
pub const DT_MIPS_DELTA_SYM_NO: i64 = 0x7000_001e;
pub const DT_MIPS_DELTA_CLASSSYM: i64 = 0x7000_0020;
pub const DT_MIPS_DELTA_CLASSSYM_NO: i64 = 0x7000_0021;
pub const DT_MIPS_CXX_FLAGS: i64 = 0x7000_0022;
pub const DT_MIPS_PIXIE_INIT: i64 = 0x7000_0023;
pub const DT_MIPS_SYMBOL_LIB: i64 = 0x7000_0024;
pub const DT_MIPS_LOCALPAGE_GOTIDX: i64 = 0x7000_0025;
pub const DT_MIPS_LOCAL_GOTIDX: i64 = 0x7000_0026;
pub const DT_MIPS_HIDDEN_GOTIDX: i64 = 0x7000_0027;
pub const DT_MIPS_PROTECTED_GOTIDX: i64 = 0x7000_0028;
pub const DT_MIPS_OPTIONS: i64 = 0x7000_0029;
pub const DT_MIPS_INTERFACE: i64 = 0x7000_002a;
pub const DT_MIPS_DYNSTR_ALIGN: i64 = 0x7000_002b;
pub const DT_MIPS_INTERFACE_SIZE: i64 = 0x7000_002c;
pub const DT_MIPS_RLD_TEXT_RESOLVE_ADDR: i64 = 0x7000_002d;
pub const DT_MIPS_PERF_SUFFIX: i64 = 0x7000_002e;
pub const DT_MIPS_COMPACT_SIZE: i64 = 0x7000_002f;
pub const DT_MIPS_GP_VALUE: i64 = 0x7000_0030;
pub const DT_MIPS_AUX_DYNAMIC: i64 = 0x7000_0031;
pub const DT_MIPS_PLTGOT: i64 = 0x7000_0032;
pub const DT_MIPS_RWPLT: i64 = 0x7000_0034;
pub const DT_MIPS_RLD_MAP_REL: i64 = 0x7000_0035;
pub const DT_MIPS_XHASH: i64 = 0x7000_0036;

// Relocation types
pub const R_MIPS_NONE: u32 = 0;
pub const R_MIPS_16: u32 = 1;
pub const R_MIPS_32: u32 = 2;
pub const R_MIPS_REL32: u32 = 3;
pub const R_MIPS_26: u32 = 4;
pub const R_MIPS_HI16: u32 = 5;
pub const R_MIPS_LO16: u32 = 6;
pub const R_MIPS_64: u32 = 18;

// Object attribute tags (0-3 are generic)
pub const TAG_GNU_MIPS_ABI_FP: i32 = 4;
pub const TAG_GNU_MIPS_ABI_MSA: i32 = 8;

// Tag_GNU_MIPS_ABI_FP values
pub const VAL_GNU_MIPS_ABI_FP_ANY: u64 = 0;
pub const VAL_GNU_MIPS_ABI_FP_DOUBLE: u64 = 1;
pub const VAL_GNU_MIPS_ABI_FP_SINGLE: u64 = 2;
pub const VAL_GNU_MIPS_ABI_FP_SOFT: u64 = 3;
pub const VAL_GNU_MIPS_ABI_FP_OLD_64: u64 = 4;
pub const VAL_GNU_MIPS_ABI_FP_XX: u64 = 5;
pub const VAL_GNU_MIPS_ABI_FP_64: u64 = 6;
pub const VAL_GNU_MIPS_ABI_FP_64A: u64 = 7;
// Reserved for the pre-standard NaN2008 marking
pub const VAL_GNU_MIPS_ABI_FP_NAN2008: u64 = 8;

// Tag_GNU_MIPS_ABI_MSA values
pub const VAL_GNU_MIPS_ABI_MSA_ANY: u64 = 0;
pub const VAL_GNU_MIPS_ABI_MSA_128: u64 = 1;
