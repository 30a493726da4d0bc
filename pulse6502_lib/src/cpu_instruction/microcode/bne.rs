use super::*;

/// Distance to go back for a branch operand, `0x00` means 256 bytes.
pub fn backward_offset(byte: u8) -> u16 {
    0x100 - byte as u16
}

/// Branch back when the zero flag is not set.
pub fn bne(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    immediate_operation(ctx, step, "BNE", |ctx, byte| {
        if !ctx.registers.z_flag_is_set() {
            ctx.registers.program_counter = ctx
                .registers
                .program_counter
                .wrapping_sub(backward_offset(byte));
        }
    })
}
