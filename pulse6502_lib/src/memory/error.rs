use thiserror::Error;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Error)]
pub enum MemoryError {
    // address, memory size
    #[error("Could not READ at address 0x{0:04X}, memory size is 0x{1:04X}.")]
    ReadOverflow(usize, usize),
    // address, memory size
    #[error("Could not WRITE at address 0x{0:04X}, memory size is 0x{1:04X}.")]
    WriteOverflow(usize, usize),
}
