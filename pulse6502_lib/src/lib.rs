mod cpu_instruction;
mod host;
pub mod memory;
mod pipeline;
mod processing_unit;
mod registers;
mod trace;

pub use cpu_instruction::{
    AddressingMode, CPUInstruction, ExecutionContext, InstructionTable, Microcode,
    MicrocodeError, StepOutcome,
};
pub use host::Host;
pub use memory::{AddressableIO, MemoryError, RAM as Memory};
pub use pipeline::PipelineState;
pub use processing_unit::{Cpu, CpuConfiguration};
pub use registers::{Registers, StatusFlag};
pub use trace::{TraceEntry, TraceLog};
