pub const BLOCK_SIZE: usize = 512;

// Storage addressed in fixed 512 byte blocks.
pub trait BlockDevice {
    fn block_count(&self) -> u32;
    fn read_block(&self, lba: u32, block: &mut [u8; BLOCK_SIZE]) -> Result<(), String>;
    fn write_block(&mut self, lba: u32, block: &[u8; BLOCK_SIZE]) -> Result<(), String>;
}

// A disk image held entirely in memory.
#[derive(Clone, Debug)]
pub struct MemoryBlockDevice {
    data: Vec<u8>,
}

impl MemoryBlockDevice {
    pub fn new(block_count: u32) -> MemoryBlockDevice {
        MemoryBlockDevice { data: vec![0; block_count as usize * BLOCK_SIZE] }
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<MemoryBlockDevice, String> {
        if data.len() % BLOCK_SIZE != 0 {
            return Err(format!(
                "Disk image must be a multiple of {BLOCK_SIZE} bytes, but was {} bytes.", data.len()));
        }

        Ok(MemoryBlockDevice { data })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn range(&self, lba: u32) -> Result<std::ops::Range<usize>, String> {
        if lba >= self.block_count() {
            return Err(format!("Block {lba} is past the end of a {} block disk.", self.block_count()));
        }

        let start = lba as usize * BLOCK_SIZE;
        Ok(start..start + BLOCK_SIZE)
    }
}

impl BlockDevice for MemoryBlockDevice {
    fn block_count(&self) -> u32 {
        (self.data.len() / BLOCK_SIZE) as u32
    }

    fn read_block(&self, lba: u32, block: &mut [u8; BLOCK_SIZE]) -> Result<(), String> {
        let range = self.range(lba)?;
        block.copy_from_slice(&self.data[range]);
        Ok(())
    }

    fn write_block(&mut self, lba: u32, block: &[u8; BLOCK_SIZE]) -> Result<(), String> {
        let range = self.range(lba)?;
        self.data[range].copy_from_slice(block);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_independent() {
        let mut disk = MemoryBlockDevice::new(4);
        disk.write_block(2, &[0x5A; BLOCK_SIZE]).unwrap();

        let mut block = [0; BLOCK_SIZE];
        disk.read_block(2, &mut block).unwrap();
        assert_eq!(block, [0x5A; BLOCK_SIZE]);
        disk.read_block(1, &mut block).unwrap();
        assert_eq!(block, [0; BLOCK_SIZE]);
    }

    #[test]
    fn out_of_range_blocks_fail() {
        let mut disk = MemoryBlockDevice::new(1);
        assert!(disk.write_block(1, &[0; BLOCK_SIZE]).is_err());
        assert!(disk.read_block(7, &mut [0; BLOCK_SIZE]).is_err());
    }

    #[test]
    fn partial_blocks_are_rejected() {
        assert!(MemoryBlockDevice::from_bytes(vec![0; 700]).is_err());
        assert_eq!(MemoryBlockDevice::from_bytes(vec![0; 1024]).unwrap().block_count(), 2);
    }
}
