use super::*;

/// Compare the X register with a byte in memory, set the zero flag if they
/// are equal. The flag is left untouched otherwise.
pub fn cpx(ctx: &mut ExecutionContext<'_>, step: u8) -> Result<StepOutcome> {
    absolute_operation(ctx, step, "CPX", |ctx| {
        if ctx.registers.register_x == ctx.read_pointed()? {
            ctx.registers.set_flag(StatusFlag::Zero);
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::context::tests::get_stuff;
    use crate::memory::AddressableIO;

    #[test]
    fn test_cpx_equal() {
        let mut bench = get_stuff(0x1000, vec![0xec, 0x10, 0x00]);
        bench.memory.write(0x0010, 0x05).unwrap();
        bench.registers.register_x = 0x05;
        assert_eq!(5, bench.run(cpx));
        assert!(bench.registers.z_flag_is_set());
    }

    #[test]
    fn test_cpx_different() {
        let mut bench = get_stuff(0x1000, vec![0xec, 0x10, 0x00]);
        bench.memory.write(0x0010, 0x05).unwrap();
        bench.registers.register_x = 0x04;
        bench.run(cpx);
        assert_eq!(None, bench.registers.status_register);
    }

    #[test]
    fn test_cpx_different_keeps_previous_flag() {
        let mut bench = get_stuff(0x1000, vec![0xec, 0x10, 0x00]);
        bench.registers.register_x = 0x04;
        bench.registers.set_flag(StatusFlag::Zero);
        bench.run(cpx);
        assert!(bench.registers.z_flag_is_set());
    }
}
