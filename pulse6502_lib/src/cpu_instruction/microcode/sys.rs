use super::*;

/*
 * SYS
 * X register selects the call:
 * 1: print the Y register as a decimal number
 * 2: print the character whose code is in the Y register, only printable
 *    ASCII and whitespace are emitted, other bytes are reported and print
 *    nothing
 * others are not supported
 */
pub fn sys(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    match step {
        2 => match ctx.registers.register_x {
            1 | 2 => {
                let byte = ctx.registers.register_y;
                ctx.decode(0, Some(byte))?;
            }
            call => return Err(MicrocodeError::UnsupportedSysCall(call)),
        },
        3 => match ctx.registers.register_x {
            1 => {
                let text = ctx.registers.register_y.to_string();
                ctx.host.write_output(&text);
            }
            2 => {
                let byte = ctx.decoded_byte1()?;
                if !(byte.is_ascii_graphic() || byte.is_ascii_whitespace()) {
                    return Err(MicrocodeError::NonPrintableCharacter(byte));
                }
                let character = char::from(byte).to_string();
                ctx.host.write_output(&character);
            }
            _ => (),
        },
        4 => return Ok(ctx.check_interrupt()),
        _ => return Err(unexpected("SYS", step)),
    }

    Ok(StepOutcome::Continue)
}
