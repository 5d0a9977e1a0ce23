use log::{debug, warn};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::sdcard::block_device::{BlockDevice, BLOCK_SIZE};

const DATA_RESPONSE_OK: u8 = 0x05;
const DATA_RESPONSE_IO_ERROR: u8 = 0x0D;
const DATA_TOKEN: u8 = 0xFE;
// R1, gap byte, data token, the block, CRC.
const READ_RESPONSE_LENGTH: usize = 3 + BLOCK_SIZE + 2;
// The block followed by its CRC.
const WRITE_PACKET_LENGTH: usize = BLOCK_SIZE + 2;

#[derive(PartialEq, Eq, Clone, Copy, Debug, FromPrimitive)]
enum Command {
    GoIdleState = 0,
    SendIfCond = 8,
    ReadSingleBlock = 17,
    WriteBlock = 24,
    // Only legal as an application command.
    SdSendOpCond = 41,
    AppCmd = 55,
    ReadOcr = 58,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum State {
    Idle,
    WriteWaitToken,
    WriteData,
}

// An SDHC card on an SPI bus: 512 byte blocks, single block reads and writes.
//
// SPI mode 3: MOSI is latched on the rising clock edge, MISO shifts on the falling edge.
pub struct SpiSdCard<D: BlockDevice> {
    media: Option<D>,
    selected: bool,
    mosi: bool,
    miso: bool,
    in_latch: u8,
    out_latch: u8,
    current_bit: u8,
    // The last six bytes received while idle.
    command: [u8; 6],
    state: State,
    buffer: [u8; READ_RESPONSE_LENGTH],
    out_index: usize,
    out_count: usize,
    write_index: usize,
    app_command: bool,
}

impl<D: BlockDevice> SpiSdCard<D> {
    pub fn new(media: Option<D>) -> SpiSdCard<D> {
        SpiSdCard {
            media,
            selected: false,
            mosi: true,
            miso: true,
            in_latch: 0,
            out_latch: 0xFF,
            current_bit: 0,
            command: [0; 6],
            state: State::Idle,
            buffer: [0; READ_RESPONSE_LENGTH],
            out_index: 0,
            out_count: 0,
            write_index: 0,
            app_command: false,
        }
    }

    pub fn insert(&mut self, media: D) {
        self.media = Some(media);
    }

    pub fn eject(&mut self) -> Option<D> {
        self.media.take()
    }

    pub fn media(&self) -> Option<&D> {
        self.media.as_ref()
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn set_mosi(&mut self, mosi: bool) {
        self.mosi = mosi;
    }

    pub fn miso(&self) -> bool {
        self.miso
    }

    // Edges are ignored while the card isn't selected.
    pub fn set_clock(&mut self, high: bool) {
        if !self.selected {
            return;
        }

        if high {
            self.latch_bit();
        } else {
            self.shift_bit();
        }
    }

    // Clock a whole byte through the card, most significant bit first.
    pub fn transfer(&mut self, value: u8) -> u8 {
        let mut received = 0;
        for bit in (0..8).rev() {
            self.set_mosi((value >> bit) & 1 == 1);
            self.set_clock(false);
            self.set_clock(true);
            received = (received << 1) | u8::from(self.miso);
        }

        received
    }

    fn latch_bit(&mut self) {
        self.in_latch = (self.in_latch & !1) | u8::from(self.mosi);
        self.current_bit += 1;
        if self.current_bit == 8 {
            self.receive_byte(self.in_latch);
        }
    }

    fn shift_bit(&mut self) {
        self.in_latch <<= 1;
        // MISO idles high.
        self.out_latch = (self.out_latch << 1) | 1;
        if self.current_bit == 8 {
            self.current_bit = 0;
        }

        if self.current_bit == 0 && self.out_count > 0 {
            self.out_latch = self.buffer[self.out_index];
            self.out_index += 1;
            self.out_count -= 1;
        }

        self.miso = self.out_latch & 0x80 != 0;
    }

    fn receive_byte(&mut self, value: u8) {
        match self.state {
            State::Idle => {
                self.command.rotate_left(1);
                self.command[5] = value;
                let is_command = self.command[0] & 0xC0 == 0x40 && self.command[5] & 1 == 1;
                if is_command && self.out_count == 0 {
                    self.execute_command();
                }
            }
            State::WriteWaitToken => {
                if value == DATA_TOKEN {
                    self.state = State::WriteData;
                    self.out_latch = 0xFF;
                    self.write_index = 0;
                }
            }
            State::WriteData => {
                self.buffer[self.write_index] = value;
                self.write_index += 1;
                if self.write_index == WRITE_PACKET_LENGTH {
                    self.buffer[0] = self.write_block();
                    self.buffer[1] = 0x01;
                    self.state = State::Idle;
                    self.send(2);
                }
            }
        }
    }

    fn execute_command(&mut self) {
        let index = self.command[0] & 0x3F;
        debug!(target: "sdcommands", "SD card CMD{index:02}: {:02X} {:02X} {:02X} {:02X} {:02X}",
            self.command[1], self.command[2], self.command[3], self.command[4], self.command[5]);

        match Command::from_u8(index) {
            Some(Command::GoIdleState) => {
                self.buffer[0] = if self.media.is_some() { 0x01 } else { 0x00 };
                self.send(1);
            }
            Some(Command::SendIfCond) => {
                self.buffer[..5].copy_from_slice(&[0x01, 0x00, 0x00, 0x00, 0xAA]);
                self.send(5);
            }
            Some(Command::ReadSingleBlock) => {
                let response_length = self.read_block();
                self.send(response_length);
            }
            Some(Command::WriteBlock) => {
                self.buffer[0] = 0x00;
                self.send(1);
                self.state = State::WriteWaitToken;
            }
            Some(Command::SdSendOpCond) => {
                self.buffer[0] = if self.app_command { 0x00 } else { 0xFF };
                self.send(1);
            }
            Some(Command::AppCmd) => {
                self.buffer[0] = 0x01;
                self.send(1);
            }
            Some(Command::ReadOcr) => {
                // Bit 30 of the OCR: high capacity card.
                self.buffer[..5].copy_from_slice(&[0x00, 0x40, 0x00, 0x00, 0x00]);
                self.send(5);
            }
            None => debug!(target: "sdcommands", "SD card ignored unsupported CMD{index}."),
        }

        self.app_command = index == Command::AppCmd as u8;
    }

    fn lba(&self) -> u32 {
        u32::from_be_bytes([self.command[1], self.command[2], self.command[3], self.command[4]])
    }

    // Fills the buffer with the whole CMD17 response and returns its length.
    fn read_block(&mut self) -> usize {
        let lba = self.lba();
        let Some(media) = &self.media else {
            self.buffer[0] = 0xFF;
            return 1;
        };

        let mut block = [0; BLOCK_SIZE];
        if let Err(err) = media.read_block(lba, &mut block) {
            warn!("SD card read of block {lba} failed: {err}");
            self.buffer[0] = 0xFF;
            return 1;
        }

        debug!(target: "sdcommands", "SD card reading block {lba}.");
        self.buffer[0] = 0x00;
        // At least one byte must separate R1 from the data token.
        self.buffer[1] = 0xFF;
        self.buffer[2] = DATA_TOKEN;
        self.buffer[3..3 + BLOCK_SIZE].copy_from_slice(&block);
        self.buffer[3 + BLOCK_SIZE..].copy_from_slice(&[0xFF, 0xFF]);
        READ_RESPONSE_LENGTH
    }

    // Commits the received packet and returns the data response token.
    fn write_block(&mut self) -> u8 {
        let lba = self.lba();
        let mut block = [0; BLOCK_SIZE];
        block.copy_from_slice(&self.buffer[..BLOCK_SIZE]);
        debug!(target: "sdcommands", "SD card writing block {lba}.");

        let result = match &mut self.media {
            Some(media) => media.write_block(lba, &block),
            None => Err("No media inserted.".to_string()),
        };
        match result {
            Ok(()) => DATA_RESPONSE_OK,
            Err(err) => {
                warn!("SD card write of block {lba} failed: {err}");
                DATA_RESPONSE_IO_ERROR
            }
        }
    }

    fn send(&mut self, count: usize) {
        self.out_index = 0;
        self.out_count = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdcard::block_device::MemoryBlockDevice;

    fn card() -> SpiSdCard<MemoryBlockDevice> {
        let mut card = SpiSdCard::new(Some(MemoryBlockDevice::new(8)));
        card.set_selected(true);
        card
    }

    fn command(card: &mut SpiSdCard<MemoryBlockDevice>, bytes: [u8; 6], response_length: usize) -> Vec<u8> {
        for byte in bytes {
            card.transfer(byte);
        }

        (0..response_length).map(|_| card.transfer(0xFF)).collect()
    }

    #[test]
    fn go_idle_reports_media() {
        let mut card = card();
        assert_eq!(command(&mut card, [0x40, 0, 0, 0, 0, 0x95], 1), vec![0x01]);

        let mut empty: SpiSdCard<MemoryBlockDevice> = SpiSdCard::new(None);
        empty.set_selected(true);
        assert_eq!(command(&mut empty, [0x40, 0, 0, 0, 0, 0x95], 1), vec![0x00]);
    }

    #[test]
    fn miso_idles_high() {
        let mut card = card();
        assert_eq!(card.transfer(0xFF), 0xFF);
        command(&mut card, [0x40, 0, 0, 0, 0, 0x95], 1);
        assert_eq!(card.transfer(0xFF), 0xFF);
    }

    #[test]
    fn interface_condition_and_ocr() {
        let mut card = card();
        assert_eq!(command(&mut card, [0x48, 0, 0, 0x01, 0xAA, 0x87], 5), vec![0x01, 0, 0, 0, 0xAA]);
        assert_eq!(command(&mut card, [0x7A, 0, 0, 0, 0, 0xFD], 5), vec![0x00, 0x40, 0, 0, 0]);
    }

    #[test]
    fn op_cond_needs_app_prefix() {
        let mut card = card();
        assert_eq!(command(&mut card, [0x69, 0x40, 0, 0, 0, 0x77], 1), vec![0xFF]);

        let mut card = self::card();
        assert_eq!(command(&mut card, [0x77, 0, 0, 0, 0, 0x65], 1), vec![0x01]);
        assert_eq!(command(&mut card, [0x69, 0x40, 0, 0, 0, 0x77], 1), vec![0x00]);
    }

    #[test]
    fn deselected_card_ignores_clock() {
        let mut card = card();
        card.set_selected(false);
        assert_eq!(command(&mut card, [0x40, 0, 0, 0, 0, 0x95], 1), vec![0xFF]);
    }
}
