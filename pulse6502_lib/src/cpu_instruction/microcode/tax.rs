use super::*;

/// Copy the accumulator in the X register.
pub fn tax(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    transfer_operation(
        ctx,
        step,
        "TAX",
        |registers| registers.accumulator,
        |registers, byte| registers.register_x = byte,
    )
}
