use super::*;

/// Raise the break flag, the processing unit halts the system on it.
pub fn brk(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    match step {
        2 => {
            ctx.registers.set_flag(StatusFlag::Break);
            Ok(StepOutcome::Continue)
        }
        3 => Ok(ctx.check_interrupt()),
        _ => Err(unexpected("BRK", step)),
    }
}
