use std::collections::VecDeque;
use std::io::Write;

use log::{error, info, warn};
use pulse6502_lib::memory::{hex_dump, load_program};
use pulse6502_lib::{Cpu, CpuConfiguration, Host, Memory};

use crate::clock::ClockListener;
use crate::AppResult;

#[derive(Debug, Clone, Default)]
pub struct SystemConfiguration {
    pub debug: bool,
    /// Memory range dumped at shutdown.
    pub memory_dump: Option<(u16, u16)>,
}

/*
 * SystemHost
 * What the processor sees of the outside world: the console it prints on,
 * the interrupt input buffer and the shutdown switch.
 */
#[derive(Debug)]
pub struct SystemHost<T>
where
    T: Write,
{
    output: T,
    input_buffer: VecDeque<u8>,
    shutdown_requests: usize,
    diagnostics: Vec<String>,
}

impl<T> SystemHost<T>
where
    T: Write,
{
    pub fn new(output: T) -> Self {
        Self {
            output,
            input_buffer: VecDeque::new(),
            shutdown_requests: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn queue_input(&mut self, bytes: &[u8]) {
        self.input_buffer.extend(bytes);
    }

    pub fn input_buffer(&self) -> &VecDeque<u8> {
        &self.input_buffer
    }

    pub fn shutdown_requests(&self) -> usize {
        self.shutdown_requests
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn output(&self) -> &T {
        &self.output
    }
}

impl<T> Host for SystemHost<T>
where
    T: Write,
{
    fn write_output(&mut self, text: &str) {
        if let Err(e) = self
            .output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
        {
            error!("could not write console output: {}", e);
        }
    }

    fn interrupt_pending(&self) -> bool {
        !self.input_buffer.is_empty()
    }

    fn request_shutdown(&mut self) {
        self.shutdown_requests += 1;
    }

    fn write_diagnostics(&mut self, text: &str) {
        self.diagnostics.push(text.to_owned());
    }
}

pub struct System<T>
where
    T: Write,
{
    configuration: SystemConfiguration,
    memory: Memory,
    cpu: Cpu,
    host: SystemHost<T>,
    is_shut_down: bool,
}

impl<T> System<T>
where
    T: Write,
{
    /// Flash the program at address 0 and power the processor on.
    pub fn startup(configuration: SystemConfiguration, program: &[u8], output: T) -> AppResult<Self> {
        let mut memory = Memory::default();
        load_program(&mut memory, 0x0000, program)?;
        let cpu = Cpu::new(CpuConfiguration {
            debug: configuration.debug,
        });
        info!("system started, program of {} bytes loaded", program.len());

        Ok(Self {
            configuration,
            memory,
            cpu,
            host: SystemHost::new(output),
            is_shut_down: false,
        })
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn host(&self) -> &SystemHost<T> {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut SystemHost<T> {
        &mut self.host
    }

    pub fn is_shut_down(&self) -> bool {
        self.is_shut_down
    }

    /// Stop the system and return the diagnostic report (trace table and
    /// memory dump) when diagnostics are enabled. Only the first call does
    /// anything.
    pub fn shutdown(&mut self) -> AppResult<Option<String>> {
        if self.is_shut_down {
            warn!("system already shut down");
            return Ok(None);
        }
        self.is_shut_down = true;
        info!("system shutting down after {} cycles", self.cpu.cycle_count());

        if !self.configuration.debug {
            return Ok(None);
        }
        let mut report: Vec<String> = self.host.diagnostics.clone();
        if let Some((start, end)) = self.configuration.memory_dump {
            report.push(hex_dump(&self.memory, start, end)?);
        }

        Ok(Some(report.join("\n\n")))
    }
}

impl<T> ClockListener for System<T>
where
    T: Write,
{
    fn pulse(&mut self) {
        self.cpu.pulse(&mut self.memory, &mut self.host);
    }

    fn is_stopped(&self) -> bool {
        self.host.shutdown_requests > 0
    }
}
