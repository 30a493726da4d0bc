use super::*;

/// Copy the accumulator in the Y register.
pub fn tay(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    transfer_operation(
        ctx,
        step,
        "TAY",
        |registers| registers.accumulator,
        |registers, byte| registers.register_y = byte,
    )
}
