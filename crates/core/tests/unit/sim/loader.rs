//! Image loader tests.

use std::io::Write;

use pipesim_core::Simulator;
use pipesim_core::common::SimError;
use pipesim_core::config::Config;
use pipesim_core::core::Core;
use pipesim_core::sim::loader::{load_image_bytes, load_image_file};
use pretty_assertions::assert_eq;

#[test]
fn loads_bytes_at_address_zero() {
    let mut core = Core::new(&Config::default());
    load_image_bytes(&mut core, &[0x13, 0x00, 0x00, 0x00, 0xEF, 0xBE, 0xAD, 0xDE]).unwrap();

    assert_eq!(core.mem.read_word(0), 0x0000_0013);
    assert_eq!(core.mem.read_word(4), 0xDEAD_BEEF);
}

#[test]
fn rejects_an_image_larger_than_memory() {
    let config = Config {
        mem_size: 16,
        ..Config::default()
    };
    let mut core = Core::new(&config);
    let err = load_image_bytes(&mut core, &[0u8; 17]).unwrap_err();

    assert!(matches!(
        err,
        SimError::ImageTooLarge {
            image: 17,
            memory: 16
        }
    ));
}

#[test]
fn round_trips_through_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x93, 0x00, 0x50, 0x00]).unwrap(); // addi x1, x0, 5

    let mut core = Core::new(&Config::default());
    load_image_file(&mut core, file.path()).unwrap();
    assert_eq!(core.mem.read_word(0), 0x0050_0093);
}

#[test]
fn simulator_with_image_loads_and_runs() {
    // addi x1, x0, 5 followed by the canonical NOP.
    let image = [0x93, 0x00, 0x50, 0x00, 0x13, 0x00, 0x00, 0x00];
    let mut sim = Simulator::with_image(&Config::default(), &image).unwrap();
    sim.run(10);
    assert_eq!(sim.core.regs.read(1), 5);
}

#[test]
fn missing_file_reports_the_path() {
    let mut core = Core::new(&Config::default());
    let err = load_image_file(&mut core, std::path::Path::new("/no/such/image.bin")).unwrap_err();

    match err {
        SimError::ImageRead { path, .. } => assert!(path.contains("image.bin")),
        other => panic!("unexpected error: {other}"),
    }
}
