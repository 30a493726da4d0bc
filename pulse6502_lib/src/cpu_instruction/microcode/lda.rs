use super::*;

/// Load the accumulator with a constant.
pub fn lda_immediate(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    immediate_operation(ctx, step, "LDA", |ctx, byte| {
        ctx.registers.accumulator = byte;
    })
}

/// Load the accumulator from memory.
pub fn lda_memory(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    absolute_operation(ctx, step, "LDA", |ctx| {
        ctx.registers.accumulator = ctx.read_pointed()?;
        Ok(())
    })
}
