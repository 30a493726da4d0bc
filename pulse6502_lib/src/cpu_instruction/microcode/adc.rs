use log::warn;

use super::*;

/// Add the byte at the decoded address to the accumulator. Overflow is
/// flagged and the wrapped sum is kept, execution goes on.
pub fn adc(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    absolute_operation(ctx, step, "ADC", |ctx| {
        let byte = ctx.read_pointed()?;
        let accumulator = ctx.registers.accumulator;
        let (sum, overflow) = accumulator.overflowing_add(byte);
        ctx.registers.accumulator = sum;

        if overflow {
            ctx.registers.set_flag(StatusFlag::Overflow);
            warn!(
                "ADC overflow at PC=0x{:04X}: 0x{:02x} + 0x{:02x} does not fit the accumulator",
                ctx.registers.program_counter,
                accumulator, byte
            );
        }

        Ok(())
    })
}
