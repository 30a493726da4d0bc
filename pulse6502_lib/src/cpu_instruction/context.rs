use log::{error, trace};

use super::microcode::{MicrocodeError, Result};
use crate::host::Host;
use crate::memory::{compose_address, AddressableIO};
use crate::pipeline::PipelineState;
use crate::registers::{Registers, StatusFlag};

/// What a microcode step tells the processing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Complete,
}

/// Everything a microcode step may touch during one pulse.
pub struct ExecutionContext<'a> {
    pub registers: &'a mut Registers,
    pub pipeline: &'a mut PipelineState,
    pub memory: &'a mut dyn AddressableIO,
    pub host: &'a mut dyn Host,
}

impl<'a> ExecutionContext<'a> {
    /*
     * decode
     * 0 operand: the caller provides the value (register to register moves).
     * 1 operand: one byte immediate value read after the opcode.
     * 2 operands: two bytes address, read in two consecutive calls. The
     * second call composes the address in the stack pointer.
     */
    pub fn decode(&mut self, operand_count: u8, data: Option<u8>) -> Result<()> {
        match operand_count {
            0 => {
                let byte = data.ok_or(MicrocodeError::MissingDecodeInput)?;
                self.pipeline.decoded_byte1 = Some(byte);
            }
            1 => {
                self.registers.program_counter = self.registers.program_counter.wrapping_add(1);
                self.pipeline.decoded_byte1 = Some(self.memory.read(self.registers.program_counter)?);
            }
            2 => {
                self.registers.program_counter = self.registers.program_counter.wrapping_add(1);
                let byte = self.memory.read(self.registers.program_counter)?;
                match self.pipeline.decoded_byte1 {
                    None => self.pipeline.decoded_byte1 = Some(byte),
                    Some(low) => {
                        self.pipeline.decoded_byte2 = Some(byte);
                        self.registers.stack_pointer = compose_address(low, byte);
                        trace!("decoded address 0x{:04X}", self.registers.stack_pointer);
                    }
                }
            }
            n => return Err(MicrocodeError::InvalidOperandCount(n)),
        }

        Ok(())
    }

    pub fn decoded_byte1(&self) -> Result<u8> {
        self.pipeline
            .decoded_byte1
            .ok_or(MicrocodeError::OperandNotDecoded)
    }

    /// Terminal step of every instruction.
    pub fn check_interrupt(&mut self) -> StepOutcome {
        if self.host.interrupt_pending() {
            self.registers.set_flag(StatusFlag::InterruptPending);
        }
        self.pipeline.op_complete = true;

        StepOutcome::Complete
    }

    /// Byte at the address held by the stack pointer.
    pub fn read_pointed(&self) -> Result<u8> {
        Ok(self.memory.read(self.registers.stack_pointer)?)
    }

    pub fn write_pointed(&mut self, byte: u8) -> Result<()> {
        Ok(self.memory.write(self.registers.stack_pointer, byte)?)
    }

    pub fn report(&self, err: &MicrocodeError) {
        error!(
            "PC=0x{:04X} IR=0x{:02X} step {}: {}",
            self.registers.program_counter,
            self.registers.instruction_register,
            self.pipeline.step,
            err
        );
    }
}
