use thiserror::Error;

use crate::memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MicrocodeError {
    // ↓ when a microcode is run with a step it does not know
    #[error("unexpected step {step} in {mnemonic}")]
    UnexpectedStep { mnemonic: &'static str, step: u8 },
    #[error("provide data in decode for register operand")]
    MissingDecodeInput,
    #[error("instructions take at most 2 operands, {0} asked")]
    InvalidOperandCount(u8),
    #[error("operand read before being decoded")]
    OperandNotDecoded,
    #[error("SYS call {0} is not supported")]
    UnsupportedSysCall(u8),
    #[error("byte 0x{0:02x} is not a printable character")]
    NonPrintableCharacter(u8),
    #[error("memory error during microcode operation: {0}")]
    Memory(#[from] memory::MemoryError),
}

pub type Result<T> = std::result::Result<T, MicrocodeError>;
