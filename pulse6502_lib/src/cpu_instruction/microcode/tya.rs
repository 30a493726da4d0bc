use super::*;

/// Copy the Y register in the accumulator.
pub fn tya(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    transfer_operation(
        ctx,
        step,
        "TYA",
        |registers| registers.register_y,
        |registers, byte| registers.accumulator = byte,
    )
}
