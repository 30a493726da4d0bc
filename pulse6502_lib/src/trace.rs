use std::fmt;

use crate::pipeline::PipelineState;
use crate::registers::Registers;

/// Snapshot of the machine taken after each pulse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub cycle: u64,
    pub program_counter: u16,
    pub stack_pointer: u16,
    pub instruction_register: u8,
    pub decoded_byte1: Option<u8>,
    pub decoded_byte2: Option<u8>,
    pub accumulator: u8,
    pub register_x: u8,
    pub register_y: u8,
    pub status_register: Option<u8>,
    pub step: u8,
}

impl TraceEntry {
    pub fn new(cycle: u64, registers: &Registers, pipeline: &PipelineState) -> TraceEntry {
        TraceEntry {
            cycle,
            program_counter: registers.program_counter,
            stack_pointer: registers.stack_pointer,
            instruction_register: registers.instruction_register,
            decoded_byte1: pipeline.decoded_byte1,
            decoded_byte2: pipeline.decoded_byte2,
            accumulator: registers.accumulator,
            register_x: registers.register_x,
            register_y: registers.register_y,
            status_register: registers.status_register.map(|flag| flag.code()),
            step: pipeline.step,
        }
    }
}

fn format_byte(byte: Option<u8>) -> String {
    match byte {
        Some(b) => format!("{:02x}", b),
        None => "--".to_owned(),
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{: >6} | {:04x} | {:04x} | {:02x} | {} | {} | {:02x} | {:02x} | {:02x} | {} | {: >4}",
            self.cycle,
            self.program_counter,
            self.stack_pointer,
            self.instruction_register,
            format_byte(self.decoded_byte1),
            format_byte(self.decoded_byte2),
            self.accumulator,
            self.register_x,
            self.register_y,
            format_byte(self.status_register),
            self.step,
        )
    }
}

const TABLE_HEADER: &str = " Cycle |   PC |   SP | IR | B1 | B2 |  A |  X |  Y |  S | Step";

/// Append only record of the pulses.
#[derive(Debug, Default, Clone)]
pub struct TraceLog {
    entries: Vec<TraceEntry>,
}

impl TraceLog {
    pub fn push(&mut self, entry: TraceEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TraceEntry> {
        self.entries.last()
    }

    pub fn render_table(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(self.entries.len() + 1);
        lines.push(TABLE_HEADER.to_owned());
        self.entries
            .iter()
            .for_each(|entry| lines.push(entry.to_string()));

        lines.join("\n")
    }
}
