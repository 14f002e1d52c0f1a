use std::sync::Once;

use mipsebl::{ElfClass, Endian, MipsBackend, NoteHeader};
use tracing_subscriber::EnvFilter;

/// Route library logs to the test harness. `RUST_LOG=mipsebl=trace` shows
/// the fallbacks a test exercised.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn backends() -> [MipsBackend; 4] {
    [
        MipsBackend::new(ElfClass::Elf32, Endian::Little),
        MipsBackend::new(ElfClass::Elf32, Endian::Big),
        MipsBackend::new(ElfClass::Elf64, Endian::Little),
        MipsBackend::new(ElfClass::Elf64, Endian::Big),
    ]
}

/// Header of a note whose `n_namesz` matches `name` exactly.
pub fn note_header(name: &[u8], n_type: u32, n_descsz: usize) -> NoteHeader {
    NoteHeader {
        n_namesz: u32::try_from(name.len()).expect("name size fits u32"),
        n_descsz: u32::try_from(n_descsz).expect("descriptor size fits u32"),
        n_type,
    }
}

/// Header of a `CORE\0` note with the given type and descriptor size.
pub fn core_header(n_type: u32, n_descsz: usize) -> NoteHeader {
    note_header(b"CORE\0", n_type, n_descsz)
}

/// Write a register-sized value into a descriptor.
pub fn put(desc: &mut [u8], offset: usize, bytes: usize, value: u64, endian: Endian) {
    let raw = match endian {
        Endian::Little => value.to_le_bytes(),
        Endian::Big => value.to_be_bytes(),
    };
    let src = match endian {
        Endian::Little => &raw[..bytes],
        Endian::Big => &raw[8 - bytes..],
    };
    desc[offset..offset + bytes].copy_from_slice(src);
}
