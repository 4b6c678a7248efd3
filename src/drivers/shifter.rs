// 74HC165 parallel-in / serial-out shift register (board-independent)
//
// A low pulse on LATCH snapshots the eight inputs; the bits then come
// out on DATA, D7 first, one per rising CLK edge. Only the data line
// is read back, so output pin errors are ignored.

use embedded_hal::digital::{InputPin, OutputPin};

pub struct ShiftRegister<LATCH, CLK, DATA> {
    latch: LATCH,
    clk: CLK,
    data: DATA,
}

impl<LATCH, CLK, DATA> ShiftRegister<LATCH, CLK, DATA>
where
    LATCH: OutputPin,
    CLK: OutputPin,
    DATA: InputPin,
{
    pub fn new(mut latch: LATCH, mut clk: CLK, data: DATA) -> Self {
        let _ = latch.set_high();
        let _ = clk.set_high();
        Self { latch, clk, data }
    }

    /// Snapshot all eight inputs. Bit 7 is D7.
    pub fn read8(&mut self) -> Result<u8, DATA::Error> {
        let _ = self.latch.set_low();
        let _ = self.latch.set_high();

        let mut value = 0u8;
        for _ in 0..8 {
            let _ = self.clk.set_low();
            value = (value << 1) | self.data.is_high()? as u8;
            let _ = self.clk.set_high();
        }
        Ok(value)
    }
}
