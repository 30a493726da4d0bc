/// Narrow interface of the machine hosting the processor. The processing
/// unit only talks to the outside world through it (memory aside).
pub trait Host {
    /// Console output of the SYS instruction.
    fn write_output(&mut self, text: &str);

    /// True when the interrupt input buffer is not empty. The processor
    /// never dequeues it.
    fn interrupt_pending(&self) -> bool;

    /// Ask the host to stop feeding clock pulses.
    fn request_shutdown(&mut self);

    /// Sink for the diagnostic dump emitted at halt time.
    fn write_diagnostics(&mut self, text: &str);
}
