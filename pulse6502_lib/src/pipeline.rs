/// Scratch state of the instruction in flight. It is reset by the processing
/// unit once the instruction completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineState {
    /// Position in the instruction sequence, step 1 is always the fetch.
    pub step: u8,
    pub decoded_byte1: Option<u8>,
    pub decoded_byte2: Option<u8>,
    pub op_complete: bool,
}

impl PipelineState {
    pub fn restart(&mut self) {
        *self = PipelineState::default();
    }

    pub fn is_fetch_step(&self) -> bool {
        self.step == 1
    }
}
