//! End-to-end checks through the backend handle.

mod common;

use common::{backends, core_header, init_tracing, note_header, put};
use mipsebl::{
    AttributeLookup, EF_MIPS_ABI_O32, EF_MIPS_ARCH_32R2, EF_MIPS_CPIC, EF_MIPS_NAN2008,
    EF_MIPS_NOREORDER, EF_MIPS_PIC, ElfClass, ElfType, Endian, Error, FpRegset, MipsBackend,
    Mips32, Mips64, NT_FPREGSET, NT_PRPSINFO, NT_PRSTATUS, NoteLayout, Prpsinfo, Prstatus,
    R_MIPS_32, R_MIPS_64, SHT_MIPS_DWARF, ShStrTab, TAG_GNU_MIPS_ABI_FP, Xlen,
};
use proptest::prelude::*;

/// Byte ranges of every run and fixed-size item, sorted by start.
fn spans(layout: &NoteLayout) -> Vec<(usize, usize, &'static str)> {
    let mut spans: Vec<_> = layout
        .reglocs
        .iter()
        .map(|run| {
            let start = layout.regs_offset + run.offset;
            (start, start + run.span(), "run")
        })
        .chain(layout.items.iter().filter_map(|item| {
            item.size(layout.class)
                .map(|size| (item.offset, item.offset + size, item.name))
        }))
        .collect();
    spans.sort_unstable();
    spans
}

fn assert_disjoint_within(layout: &NoteLayout, size: usize) {
    let spans = spans(layout);
    for pair in spans.windows(2) {
        assert!(pair[0].1 <= pair[1].0, "{:?} overlaps {:?}", pair[0], pair[1]);
    }
    let end = spans.last().map_or(0, |span| span.1);
    assert!(end <= size, "{:?} ends past {size}", spans.last());
}

fn prstatus_layout<X: Xlen>() -> NoteLayout {
    mipsebl::core_note::<X>(&core_header(NT_PRSTATUS, Prstatus::<X>::SIZE), b"CORE\0")
        .expect("prstatus recognized")
}

/// Bytes of `pr_reg` covered by runs and register-area items.
fn register_area_coverage<X: Xlen>() -> usize {
    let layout = prstatus_layout::<X>();
    let area = Prstatus::<X>::PR_REG..Prstatus::<X>::PR_REG + Prstatus::<X>::REGS_SIZE;
    let runs: usize = layout.reglocs.iter().map(|run| run.span()).sum();
    let items: usize = layout
        .items
        .iter()
        .filter(|item| area.contains(&item.offset))
        .filter_map(|item| item.size(layout.class))
        .sum();
    runs + items
}

#[test]
fn test_register_area_fully_covered() {
    init_tracing();
    assert_eq!(register_area_coverage::<Mips32>(), Prstatus::<Mips32>::REGS_SIZE);
    assert_eq!(register_area_coverage::<Mips64>(), Prstatus::<Mips64>::REGS_SIZE);
    assert_eq!(Prstatus::<Mips32>::REGS_SIZE, 180);
    assert_eq!(Prstatus::<Mips64>::REGS_SIZE, 360);
}

#[test]
fn test_fpregset_fully_covered() {
    init_tracing();
    for backend in backends() {
        let names: [&[u8]; 2] = [b"CORE", b"CORE\0"];
        for name in names {
            let header = note_header(name, NT_FPREGSET, FpRegset::SIZE);
            let layout = backend.core_note(&header, name).expect("fpregset recognized");
            let covered: usize = spans(&layout).iter().map(|(start, end, _)| end - start).sum();
            assert_eq!(covered, FpRegset::SIZE);
            assert_disjoint_within(&layout, FpRegset::SIZE);
        }
    }
}

#[test]
fn test_layouts_disjoint() {
    init_tracing();
    assert_disjoint_within(&prstatus_layout::<Mips32>(), Prstatus::<Mips32>::SIZE);
    assert_disjoint_within(&prstatus_layout::<Mips64>(), Prstatus::<Mips64>::SIZE);

    for (backend, size) in [
        (MipsBackend::new(ElfClass::Elf32, Endian::Big), Prpsinfo::<Mips32>::SIZE),
        (MipsBackend::new(ElfClass::Elf64, Endian::Big), Prpsinfo::<Mips64>::SIZE),
    ] {
        let layout = backend
            .core_note(&core_header(NT_PRPSINFO, size), b"LINUX\0")
            .expect("prpsinfo recognized");
        assert_disjoint_within(&layout, size);
    }
}

#[test]
fn test_prstatus_round_trip_all_backends() {
    init_tracing();
    for backend in backends() {
        let endian = backend.endian();
        let (size, pr_reg, width, gprs) = match backend.class() {
            ElfClass::Elf32 => (256, 72, 4, 40),
            ElfClass::Elf64 => (480, 112, 8, 34),
        };
        let header = core_header(NT_PRSTATUS, size);

        let mut desc = vec![0u8; size];
        for slot in 0..45u64 {
            let offset = pr_reg + usize::try_from(slot).unwrap() * width;
            put(&mut desc, offset, width, 0x100 + slot, endian);
        }

        let regs = backend.note_registers(&header, b"CORE\0", &desc).unwrap();
        assert_eq!(regs.len(), 44, "{backend:?}");
        for reg in &regs {
            assert_eq!(reg.value, 0x100 + u64::from(reg.regno), "{backend:?}");
            assert_eq!(reg.bits, u32::try_from(width * 8).unwrap());
        }
        // The pc slot is skipped by the runs and read through the item.
        assert!(regs.iter().all(|reg| reg.regno != u32::try_from(gprs).unwrap()));
        assert_eq!(
            backend.note_pc(&header, b"CORE\0", &desc),
            Ok(Some(0x100 + u64::try_from(gprs).unwrap()))
        );
    }
}

#[test]
fn test_short_descriptor_reported() {
    init_tracing();
    let backend = MipsBackend::new(ElfClass::Elf64, Endian::Little);
    let header = core_header(NT_PRSTATUS, 480);
    let err = backend
        .note_registers(&header, b"CORE\0", &[0u8; 400])
        .unwrap_err();
    assert!(matches!(err, Error::CoreNote(_)));
    assert!(err.to_string().contains("expected 480"));
}

#[test]
fn test_object_inspection() {
    init_tracing();
    let mut ident = vec![0x7f, b'E', b'L', b'F', 1, 2, 1, 0];
    ident.resize(52, 0);
    ident[18..20].copy_from_slice(&8u16.to_be_bytes());
    let backend = MipsBackend::from_header(&ident).unwrap();

    let flags = EF_MIPS_NOREORDER
        | EF_MIPS_PIC
        | EF_MIPS_CPIC
        | EF_MIPS_NAN2008
        | EF_MIPS_ABI_O32
        | EF_MIPS_ARCH_32R2;
    assert!(backend.machine_flag_check(flags));
    let names: Vec<_> = backend.machine_flag_names(flags).collect();
    assert_eq!(
        names,
        ["noreorder", "pic", "cpic", "nan2008", "o32", "mips32r2"]
    );

    assert_eq!(backend.reloc_simple_type(R_MIPS_32), Some(ElfType::Word));
    assert_eq!(backend.reloc_simple_type(R_MIPS_64), Some(ElfType::Xword));
    assert_eq!(backend.section_type_name(SHT_MIPS_DWARF), Some("MIPS_DWARF"));
    assert!(backend.check_reloc_target_type(SHT_MIPS_DWARF));

    let lookup = backend.object_attribute("gnu", TAG_GNU_MIPS_ABI_FP, 5);
    assert_eq!(lookup.tag_name(), Some("Tag_GNU_MIPS_ABI_FP"));
    assert!(lookup.value_name().is_some());
    assert_eq!(
        backend.object_attribute("arm", TAG_GNU_MIPS_ABI_FP, 5),
        AttributeLookup::UnknownVendor
    );

    let shstrtab = ShStrTab::new(1, b"\0.got\0.data\0.bss\0");
    assert!(backend.check_special_symbol(&shstrtab, 1));
    assert!(!backend.check_special_symbol(&shstrtab, 6));
    assert!(backend.check_special_symbol(&shstrtab, 12));
    assert_eq!(backend.section_name(&shstrtab, 6), Ok(".data"));
    assert!(matches!(
        backend.section_name(&shstrtab, 99),
        Err(Error::SectionName(_))
    ));
}

proptest! {
    #[test]
    fn prop_prstatus_size_is_exact(n_descsz in 0usize..4096) {
        for backend in backends() {
            let expected = match backend.class() {
                ElfClass::Elf32 => Prstatus::<Mips32>::SIZE,
                ElfClass::Elf64 => Prstatus::<Mips64>::SIZE,
            };
            let found = backend.core_note(&core_header(NT_PRSTATUS, n_descsz), b"CORE\0");
            prop_assert_eq!(found.is_some(), n_descsz == expected);
        }
    }

    #[test]
    fn prop_every_note_size_is_exact(
        n_type in prop::sample::select(vec![NT_PRSTATUS, NT_FPREGSET, NT_PRPSINFO]),
        n_descsz in prop_oneof![
            0usize..1024,
            prop::sample::select(vec![128usize, 136, 256, 264, 480]),
        ],
    ) {
        for backend in backends() {
            let expected = match (backend.class(), n_type) {
                (ElfClass::Elf32, NT_PRSTATUS) => Prstatus::<Mips32>::SIZE,
                (ElfClass::Elf64, NT_PRSTATUS) => Prstatus::<Mips64>::SIZE,
                (ElfClass::Elf32, NT_PRPSINFO) => Prpsinfo::<Mips32>::SIZE,
                (ElfClass::Elf64, NT_PRPSINFO) => Prpsinfo::<Mips64>::SIZE,
                _ => FpRegset::SIZE,
            };
            let matched = backend.core_note(&core_header(n_type, n_descsz), b"CORE\0");
            prop_assert_eq!(matched.is_some(), n_descsz == expected, "{:?} type {}", backend, n_type);
            if let Some(layout) = matched {
                prop_assert_eq!(layout.desc_size, Some(n_descsz));
            }
        }
    }

    #[test]
    fn prop_vendor_other_than_gnu_unknown(vendor in "[a-zA-Z_]{0,8}", tag in any::<i32>(), value in any::<u64>()) {
        prop_assume!(vendor != "gnu");
        let backend = MipsBackend::new(ElfClass::Elf32, Endian::Little);
        prop_assert_eq!(backend.object_attribute(&vendor, tag, value), AttributeLookup::UnknownVendor);
    }

    #[test]
    fn prop_name_lookups_idempotent(code in any::<u32>(), tag in any::<i64>()) {
        let backend = MipsBackend::new(ElfClass::Elf64, Endian::Big);
        prop_assert_eq!(backend.section_type_name(code), backend.section_type_name(code));
        prop_assert_eq!(backend.segment_type_name(code), backend.segment_type_name(code));
        prop_assert_eq!(backend.dynamic_tag_name(tag), backend.dynamic_tag_name(tag));
        if backend.dynamic_tag_name(tag).is_some() {
            prop_assert!(backend.dynamic_tag_check(tag));
        }
    }
}
