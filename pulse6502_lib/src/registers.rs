use std::fmt;

/*
 * registers
 * accumulator, X & Y registers are 8 bits general purpose registers.
 * instruction register: opcode of the instruction being executed.
 * program counter: 16 bit address register.
 * stack pointer: 16 bit address register holding the address composed by
 * the two bytes operand instructions.
 * status register: holds at most one asserted flag at a time, asserting a
 * flag replaces the previous one.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFlag {
    Zero = 1,
    InterruptPending = 2,
    Break = 4,
    Overflow = 6,
}

impl StatusFlag {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for StatusFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusFlag::Zero => "Z",
            StatusFlag::InterruptPending => "I",
            StatusFlag::Break => "B",
            StatusFlag::Overflow => "V",
        };
        f.pad(name)
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Registers {
    pub program_counter: u16,
    pub stack_pointer: u16,
    pub instruction_register: u8,
    pub accumulator: u8,
    pub register_x: u8,
    pub register_y: u8,
    pub status_register: Option<StatusFlag>,
}

impl Registers {
    pub fn new(init_address: u16) -> Registers {
        Registers {
            program_counter: init_address,
            ..Registers::default()
        }
    }

    pub fn set_flag(&mut self, flag: StatusFlag) {
        self.status_register = Some(flag);
    }

    pub fn flag_is_set(&self, flag: StatusFlag) -> bool {
        self.status_register == Some(flag)
    }

    pub fn z_flag_is_set(&self) -> bool {
        self.flag_is_set(StatusFlag::Zero)
    }

    pub fn b_flag_is_set(&self) -> bool {
        self.flag_is_set(StatusFlag::Break)
    }

    pub fn format_status(&self) -> String {
        match self.status_register {
            Some(flag) => format!("{}", flag),
            None => "-".to_owned(),
        }
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers [A:0x{:02x}, X:0x{:02x}, Y:0x{:02x} | IR:0x{:02x} SP:0x{:04x} PC:0x{:04x} | {}]",
            self.accumulator,
            self.register_x,
            self.register_y,
            self.instruction_register,
            self.stack_pointer,
            self.program_counter,
            self.format_status()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        let registers = Registers::new(0x0000);
        assert_eq!(None, registers.status_register);
        assert!(!registers.z_flag_is_set());
        assert!(!registers.b_flag_is_set());
        assert_eq!("-", registers.format_status());
    }

    #[test]
    fn test_last_flag_wins() {
        let mut registers = Registers::new(0x0000);
        registers.set_flag(StatusFlag::Zero);
        assert!(registers.z_flag_is_set());
        registers.set_flag(StatusFlag::Overflow);
        assert!(!registers.z_flag_is_set());
        assert!(registers.flag_is_set(StatusFlag::Overflow));
        assert_eq!(Some(6), registers.status_register.map(StatusFlag::code));
    }

    #[test]
    fn test_debug_format() {
        let mut registers = Registers::new(0x1000);
        registers.accumulator = 0x2a;
        registers.set_flag(StatusFlag::Break);
        assert_eq!(
            "Registers [A:0x2a, X:0x00, Y:0x00 | IR:0x00 SP:0x0000 PC:0x1000 | B]",
            format!("{:?}", registers)
        );
    }
}
