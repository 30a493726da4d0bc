use super::*;

/*
 * INC
 * step 2 & 3: decode the address
 * step 4: load the byte in the accumulator
 * step 5: increment the accumulator
 * step 6: store the accumulator back
 * step 7: interrupt check
 */
pub fn inc(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    match step {
        2 | 3 => ctx.decode(2, None)?,
        4 => ctx.registers.accumulator = ctx.read_pointed()?,
        5 => ctx.registers.accumulator = ctx.registers.accumulator.wrapping_add(1),
        6 => {
            let byte = ctx.registers.accumulator;
            ctx.write_pointed(byte)?;
        }
        7 => return Ok(ctx.check_interrupt()),
        _ => return Err(unexpected("INC", step)),
    }

    Ok(StepOutcome::Continue)
}
