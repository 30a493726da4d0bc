use super::*;

/// Load the X register with a constant.
pub fn ldx_immediate(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    immediate_operation(ctx, step, "LDX", |ctx, byte| {
        ctx.registers.register_x = byte;
    })
}

/// Load the X register from memory.
pub fn ldx_memory(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    absolute_operation(ctx, step, "LDX", |ctx| {
        ctx.registers.register_x = ctx.read_pointed()?;
        Ok(())
    })
}
