//! Byte-addressable little-endian memory.
//!
//! A flat `Vec<u8>` backing store shared by instruction fetch, the memory
//! stage, and the debug memory port. Sub-word stores touch only the addressed
//! bytes; neighbouring bytes of the containing word are never rewritten.
//!
//! Bounds policy: the pipeline checks [`Memory::in_range`] before accessing
//! and raises an access fault on failure. The raw accessors themselves are
//! total — out-of-range reads return zero and out-of-range writes are
//! dropped — because the debug port is documented as undefined outside the
//! array and must not abort the simulation.

/// Flat little-endian memory array.
#[derive(Debug, Clone)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Memory size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the memory has zero size.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns whether an access of `len` bytes at `addr` lies inside memory.
    pub fn in_range(&self, addr: u32, len: u32) -> bool {
        (addr as usize)
            .checked_add(len as usize)
            .is_some_and(|end| end <= self.bytes.len())
    }

    /// Copies `data` into memory starting at `addr`.
    ///
    /// The caller guarantees the range fits; the loader checks sizes before
    /// calling.
    pub fn write_bytes(&mut self, addr: u32, data: &[u8]) {
        let start = addr as usize;
        self.bytes[start..start + data.len()].copy_from_slice(data);
    }

    /// Reads one byte. Out of range reads as zero.
    pub fn read_byte(&self, addr: u32) -> u8 {
        self.bytes.get(addr as usize).copied().unwrap_or(0)
    }

    /// Reads a little-endian halfword. Out of range reads as zero.
    pub fn read_half(&self, addr: u32) -> u16 {
        u16::from(self.read_byte(addr)) | u16::from(self.read_byte(addr.wrapping_add(1))) << 8
    }

    /// Reads a little-endian word. Out of range reads as zero.
    pub fn read_word(&self, addr: u32) -> u32 {
        u32::from(self.read_half(addr)) | u32::from(self.read_half(addr.wrapping_add(2))) << 16
    }

    /// Writes one byte. Out of range is dropped.
    pub fn write_byte(&mut self, addr: u32, val: u8) {
        if let Some(slot) = self.bytes.get_mut(addr as usize) {
            *slot = val;
        }
    }

    /// Writes a little-endian halfword, touching exactly two bytes.
    pub fn write_half(&mut self, addr: u32, val: u16) {
        self.write_byte(addr, val as u8);
        self.write_byte(addr.wrapping_add(1), (val >> 8) as u8);
    }

    /// Writes a little-endian word, touching exactly four bytes.
    pub fn write_word(&mut self, addr: u32, val: u32) {
        self.write_half(addr, val as u16);
        self.write_half(addr.wrapping_add(2), (val >> 16) as u16);
    }
}
