use super::*;

/// Load the Y register with a constant.
pub fn ldy_immediate(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    immediate_operation(ctx, step, "LDY", |ctx, byte| {
        ctx.registers.register_y = byte;
    })
}

/// Load the Y register from memory.
pub fn ldy_memory(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    absolute_operation(ctx, step, "LDY", |ctx| {
        ctx.registers.register_y = ctx.read_pointed()?;
        Ok(())
    })
}
