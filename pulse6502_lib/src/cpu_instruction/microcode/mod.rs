use super::context::{ExecutionContext, StepOutcome};
use crate::registers::{Registers, StatusFlag};

mod error;

mod adc;
mod bne;
mod brk;
mod cpx;
mod inc;
mod lda;
mod ldx;
mod ldy;
mod nop;
mod sta;
mod sys;
mod tax;
mod tay;
mod txa;
mod tya;

pub use adc::adc;
pub use bne::bne;
pub use brk::brk;
pub use cpx::cpx;
pub use error::{MicrocodeError, Result};
pub use inc::inc;
pub use lda::{lda_immediate, lda_memory};
pub use ldx::{ldx_immediate, ldx_memory};
pub use ldy::{ldy_immediate, ldy_memory};
pub use nop::nop;
pub use sta::sta;
pub use sys::sys;
pub use tax::tax;
pub use tay::tay;
pub use txa::txa;
pub use tya::tya;

fn unexpected(mnemonic: &'static str, step: u8) -> MicrocodeError {
    MicrocodeError::UnexpectedStep { mnemonic, step }
}

/*
 * Two bytes address instructions
 * step 2 & 3: decode the address in the stack pointer
 * step 4: operation
 * step 5: interrupt check
 */
fn absolute_operation(
    ctx: &mut ExecutionContext<'_>,
    step: u8,
    mnemonic: &'static str,
    operation: impl FnOnce(&mut ExecutionContext<'_>) -> Result<()>,
) -> Result<StepOutcome> {
    match step {
        2 | 3 => ctx.decode(2, None)?,
        4 => operation(ctx)?,
        5 => return Ok(ctx.check_interrupt()),
        _ => return Err(unexpected(mnemonic, step)),
    }

    Ok(StepOutcome::Continue)
}

/*
 * One byte operand instructions
 * step 2: decode the operand
 * step 3: operation on the decoded byte
 * step 4: interrupt check
 */
fn immediate_operation(
    ctx: &mut ExecutionContext<'_>,
    step: u8,
    mnemonic: &'static str,
    operation: impl FnOnce(&mut ExecutionContext<'_>, u8),
) -> Result<StepOutcome> {
    match step {
        2 => ctx.decode(1, None)?,
        3 => {
            let byte = ctx.decoded_byte1()?;
            operation(ctx, byte);
        }
        4 => return Ok(ctx.check_interrupt()),
        _ => return Err(unexpected(mnemonic, step)),
    }

    Ok(StepOutcome::Continue)
}

/*
 * Register to register moves
 * step 2: decode the source register
 * step 3: store the decoded byte in the target register
 * step 4: interrupt check
 */
fn transfer_operation(
    ctx: &mut ExecutionContext<'_>,
    step: u8,
    mnemonic: &'static str,
    source: fn(&Registers) -> u8,
    target: fn(&mut Registers, u8),
) -> Result<StepOutcome> {
    match step {
        2 => {
            let byte = source(&*ctx.registers);
            ctx.decode(0, Some(byte))?;
        }
        3 => {
            let byte = ctx.decoded_byte1()?;
            target(&mut *ctx.registers, byte);
        }
        4 => return Ok(ctx.check_interrupt()),
        _ => return Err(unexpected(mnemonic, step)),
    }

    Ok(StepOutcome::Continue)
}
