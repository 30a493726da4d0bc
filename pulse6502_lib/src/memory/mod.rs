use std::fmt;

mod error;
mod ram;

pub use error::MemoryError;
pub use ram::RAM;

pub const MEMMAX: usize = 0xFFFF;

/*
 * AddressableIO
 * this trait defines the byte-wise interface the processor uses to reach
 * the memory. The processor never allocates nor sizes the store.
 */
pub trait AddressableIO {
    fn read(&self, addr: u16) -> Result<u8, MemoryError>;
    fn write(&mut self, addr: u16, byte: u8) -> Result<(), MemoryError>;
    fn get_size(&self) -> usize;
}

/// Two bytes operands are stored low byte first.
pub fn compose_address(low: u8, high: u8) -> u16 {
    (high as u16) << 8 | low as u16
}

/// Flash a program image in memory starting at the given address.
pub fn load_program(
    memory: &mut dyn AddressableIO,
    start: u16,
    program: &[u8],
) -> Result<(), MemoryError> {
    for (offset, byte) in program.iter().enumerate() {
        let addr = start as usize + offset;
        if addr > MEMMAX {
            return Err(MemoryError::WriteOverflow(addr, memory.get_size()));
        }
        memory.write(addr as u16, *byte)?;
    }

    Ok(())
}

/// Hexadecimal dump of the memory between `start` and `end` (included),
/// 16 bytes per line.
pub fn hex_dump(memory: &dyn AddressableIO, start: u16, end: u16) -> Result<String, MemoryError> {
    let mut lines: Vec<String> = vec![];
    let mut line = String::new();

    for address in start..=end {
        if (address - start) % 16 == 0 {
            if !line.is_empty() {
                lines.push(line);
            }
            line = format!("#{:04X}:", address);
        } else if (address - start) % 8 == 0 {
            line.push(' ');
        }
        line = format!("{} {:02x}", line, memory.read(address)?);
    }
    lines.push(line);

    Ok(lines.join("\n"))
}
