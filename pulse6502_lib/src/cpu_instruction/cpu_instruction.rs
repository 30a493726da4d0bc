use std::fmt;

use super::context::{ExecutionContext, StepOutcome};
use super::microcode;
use super::microcode::Result as MicrocodeResult;

pub type Microcode = fn(&mut ExecutionContext<'_>, u8) -> MicrocodeResult<StepOutcome>;

/// How the operands of an instruction are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Register,
    Immediate,
    Absolute,
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressingMode::Implied => "implied",
            AddressingMode::Register => "register",
            AddressingMode::Immediate => "immediate",
            AddressingMode::Absolute => "absolute",
        };
        f.pad(name)
    }
}

#[derive(Clone, Copy)]
pub struct CPUInstruction {
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub addressing_mode: AddressingMode,
    /// Pulses needed, fetch included.
    pub steps: u8,
    pub microcode: Microcode,
}

impl CPUInstruction {
    pub const fn new(
        opcode: u8,
        mnemonic: &'static str,
        addressing_mode: AddressingMode,
        steps: u8,
        microcode: Microcode,
    ) -> CPUInstruction {
        CPUInstruction {
            opcode,
            mnemonic,
            addressing_mode,
            steps,
            microcode,
        }
    }

    pub fn execute(&self, ctx: &mut ExecutionContext<'_>, step: u8) -> MicrocodeResult<StepOutcome> {
        (self.microcode)(ctx, step)
    }
}

impl fmt::Debug for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CPUInstruction")
            .field("opcode", &self.opcode)
            .field("mnemonic", &self.mnemonic)
            .field("addressing_mode", &self.addressing_mode)
            .field("steps", &self.steps)
            .finish()
    }
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(0x{:02x}) {: <4}{: <10}[{}]",
            self.opcode, self.mnemonic, self.addressing_mode, self.steps
        )
    }
}

const INSTRUCTION_SET: [CPUInstruction; 18] = [
    CPUInstruction::new(0xa9, "LDA", AddressingMode::Immediate, 4, microcode::lda_immediate),
    CPUInstruction::new(0xad, "LDA", AddressingMode::Absolute, 5, microcode::lda_memory),
    CPUInstruction::new(0x8d, "STA", AddressingMode::Absolute, 5, microcode::sta),
    CPUInstruction::new(0x8a, "TXA", AddressingMode::Register, 4, microcode::txa),
    CPUInstruction::new(0x98, "TYA", AddressingMode::Register, 4, microcode::tya),
    CPUInstruction::new(0x6d, "ADC", AddressingMode::Absolute, 5, microcode::adc),
    CPUInstruction::new(0xa2, "LDX", AddressingMode::Immediate, 4, microcode::ldx_immediate),
    CPUInstruction::new(0xae, "LDX", AddressingMode::Absolute, 5, microcode::ldx_memory),
    CPUInstruction::new(0xaa, "TAX", AddressingMode::Register, 4, microcode::tax),
    CPUInstruction::new(0xa0, "LDY", AddressingMode::Immediate, 4, microcode::ldy_immediate),
    CPUInstruction::new(0xac, "LDY", AddressingMode::Absolute, 5, microcode::ldy_memory),
    CPUInstruction::new(0xa8, "TAY", AddressingMode::Register, 4, microcode::tay),
    CPUInstruction::new(0xea, "NOP", AddressingMode::Implied, 3, microcode::nop),
    CPUInstruction::new(0x00, "BRK", AddressingMode::Implied, 3, microcode::brk),
    CPUInstruction::new(0xec, "CPX", AddressingMode::Absolute, 5, microcode::cpx),
    CPUInstruction::new(0xd0, "BNE", AddressingMode::Immediate, 4, microcode::bne),
    CPUInstruction::new(0xee, "INC", AddressingMode::Absolute, 7, microcode::inc),
    CPUInstruction::new(0xff, "SYS", AddressingMode::Register, 4, microcode::sys),
];

/// Opcode indexed lookup table.
#[derive(Debug, Clone)]
pub struct InstructionTable {
    table: [Option<CPUInstruction>; 256],
}

impl Default for InstructionTable {
    fn default() -> Self {
        let mut table: [Option<CPUInstruction>; 256] = [None; 256];
        for instruction in INSTRUCTION_SET.iter() {
            table[instruction.opcode as usize] = Some(*instruction);
        }

        Self { table }
    }
}

impl InstructionTable {
    pub fn resolve(&self, opcode: u8) -> Option<&CPUInstruction> {
        self.table[opcode as usize].as_ref()
    }

    pub fn instructions(&self) -> impl Iterator<Item = &CPUInstruction> {
        self.table.iter().flatten()
    }
}
