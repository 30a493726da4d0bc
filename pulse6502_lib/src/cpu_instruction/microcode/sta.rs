use super::*;

/// Store the accumulator at the decoded address.
pub fn sta(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    absolute_operation(ctx, step, "STA", |ctx| {
        let byte = ctx.registers.accumulator;
        ctx.write_pointed(byte)
    })
}
