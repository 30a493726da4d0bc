pub(crate) mod context;
mod cpu_instruction;
pub mod microcode;

pub use self::context::{ExecutionContext, StepOutcome};
pub use self::cpu_instruction::{AddressingMode, CPUInstruction, InstructionTable, Microcode};
pub use self::microcode::MicrocodeError;
