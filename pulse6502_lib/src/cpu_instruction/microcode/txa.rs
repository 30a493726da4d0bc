use super::*;

/// Copy the X register in the accumulator.
pub fn txa(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    transfer_operation(
        ctx,
        step,
        "TXA",
        |registers| registers.register_x,
        |registers, byte| registers.accumulator = byte,
    )
}
