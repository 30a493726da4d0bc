use log::{debug, error, info, trace};

use crate::cpu_instruction::{ExecutionContext, InstructionTable, StepOutcome};
use crate::host::Host;
use crate::memory::AddressableIO;
use crate::pipeline::PipelineState;
use crate::registers::{Registers, StatusFlag};
use crate::trace::{TraceEntry, TraceLog};

#[derive(Debug, Clone, Default)]
pub struct CpuConfiguration {
    /// Dump the trace log through the host when the system halts.
    pub debug: bool,
}

/*
 * CPU
 * One call to pulse is one clock tick. An instruction spans several pulses:
 * step 1 fetches the opcode, the following steps are run by the microcode
 * of the opcode until it completes.
 */
#[derive(Debug)]
pub struct Cpu {
    registers: Registers,
    pipeline: PipelineState,
    trace: TraceLog,
    instructions: InstructionTable,
    configuration: CpuConfiguration,
    cycle_count: u64,
    halted: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(CpuConfiguration::default())
    }
}

impl Cpu {
    pub fn new(configuration: CpuConfiguration) -> Self {
        debug!("pipeline initiated and reset");
        Self {
            registers: Registers::new(0x0000),
            pipeline: PipelineState::default(),
            trace: TraceLog::default(),
            instructions: InstructionTable::default(),
            configuration,
            cycle_count: 0,
            halted: false,
        }
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn pipeline(&self) -> &PipelineState {
        &self.pipeline
    }

    pub fn trace(&self) -> &TraceLog {
        &self.trace
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// True once the host has been asked to shut the system down.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn pulse(&mut self, memory: &mut dyn AddressableIO, host: &mut dyn Host) {
        if self.halted {
            debug!("pulse ignored, the processor is halted");
            return;
        }
        self.cycle_count += 1;
        self.pipeline.step += 1;

        if self.pipeline.is_fetch_step() {
            self.fetch(memory);
            self.write_trace();
            return;
        }

        let opcode = self.registers.instruction_register;
        match self.instructions.resolve(opcode).copied() {
            Some(instruction) => {
                let step = self.pipeline.step;
                let mut ctx = ExecutionContext {
                    registers: &mut self.registers,
                    pipeline: &mut self.pipeline,
                    memory,
                    host: &mut *host,
                };
                match instruction.execute(&mut ctx, step) {
                    Ok(StepOutcome::Complete) => {
                        trace!("{} complete on step {}", instruction.mnemonic, step)
                    }
                    Ok(StepOutcome::Continue) => (),
                    Err(e) => ctx.report(&e),
                }
            }
            None => {
                error!(
                    "Illegal value in IR: 0x{:02X} at PC=0x{:04X}. Forcing shutdown.",
                    opcode, self.registers.program_counter
                );
                self.registers.set_flag(StatusFlag::Break);
            }
        }

        self.write_trace();

        if self.pipeline.op_complete {
            self.pipeline.restart();
        }

        if self.registers.b_flag_is_set() {
            self.halt(host);
        }
    }

    /*
     * The program counter points at the first instruction when the system
     * starts, it is incremented before every other fetch.
     */
    fn fetch(&mut self, memory: &dyn AddressableIO) {
        if self.cycle_count > 1 {
            self.registers.program_counter = self.registers.program_counter.wrapping_add(1);
        }

        match memory.read(self.registers.program_counter) {
            Ok(opcode) => self.registers.instruction_register = opcode,
            Err(e) => {
                // nothing to execute there, stop the machine
                error!("fetch failed: {}", e);
                self.registers.instruction_register = 0x00;
            }
        }
        trace!(
            "fetched 0x{:02x} at 0x{:04X}",
            self.registers.instruction_register,
            self.registers.program_counter
        );
    }

    fn write_trace(&mut self) {
        self.trace
            .push(TraceEntry::new(self.cycle_count, &self.registers, &self.pipeline));
    }

    fn halt(&mut self, host: &mut dyn Host) {
        self.halted = true;
        info!(
            "break flag raised after {} cycles, requesting shutdown",
            self.cycle_count
        );

        if self.configuration.debug {
            host.write_diagnostics(&self.trace.render_table());
        }
        host.request_shutdown();
    }
}
