// esp-hal's hardware RNG behind the rand traits the game expects.
// Without the radio or ADC running the output is pseudo-random only.

use esp_hal::rng::Rng;
use rand::RngCore;

pub struct HwRng {
    rng: Rng,
}

impl HwRng {
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }
}

impl RngCore for HwRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.random()
    }

    fn next_u64(&mut self) -> u64 {
        ((self.next_u32() as u64) << 32) | self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.read(dst);
    }
}
