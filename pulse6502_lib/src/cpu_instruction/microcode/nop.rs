use super::*;

pub fn nop(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    match step {
        2 => Ok(StepOutcome::Continue),
        3 => Ok(ctx.check_interrupt()),
        _ => Err(unexpected("NOP", step)),
    }
}
