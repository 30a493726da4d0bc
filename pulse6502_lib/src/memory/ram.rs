use super::*;

pub struct RAM {
    ram: Vec<u8>,
}

impl Default for RAM {
    fn default() -> Self {
        Self::new(MEMMAX + 1)
    }
}

impl RAM {
    pub fn new(size: usize) -> Self {
        Self {
            ram: vec![0x00; size],
        }
    }
}

impl AddressableIO for RAM {
    fn read(&self, addr: u16) -> Result<u8, MemoryError> {
        self.ram
            .get(addr as usize)
            .copied()
            .ok_or(MemoryError::ReadOverflow(addr as usize, self.ram.len()))
    }

    fn write(&mut self, addr: u16, byte: u8) -> Result<(), MemoryError> {
        let size = self.ram.len();
        match self.ram.get_mut(addr as usize) {
            Some(cell) => {
                *cell = byte;
                Ok(())
            }
            None => Err(MemoryError::WriteOverflow(addr as usize, size)),
        }
    }

    fn get_size(&self) -> usize {
        self.ram.len()
    }
}

impl fmt::Debug for RAM {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RAM, size = {} bytes", self.ram.len())
    }
}
