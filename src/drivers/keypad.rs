// Button sources for the game loop.
//
// ShiftKeypad: the eight-button 74HC165 keypad; its byte already uses
// the Buttons bit order (B, A, START, SELECT, RIGHT, DOWN, UP, LEFT
// from bit 0), high = pressed.
// DirectKeypad: N loose buttons to ground with pull-ups, each mapped
// to one logical button.

use embedded_hal::digital::{InputPin, OutputPin};
use snake_core::{ButtonSource, Buttons};

use super::shifter::ShiftRegister;

pub struct ShiftKeypad<LATCH, CLK, DATA> {
    sr: ShiftRegister<LATCH, CLK, DATA>,
}

impl<LATCH, CLK, DATA> ShiftKeypad<LATCH, CLK, DATA>
where
    LATCH: OutputPin,
    CLK: OutputPin,
    DATA: InputPin,
{
    pub fn new(sr: ShiftRegister<LATCH, CLK, DATA>) -> Self {
        Self { sr }
    }
}

impl<LATCH, CLK, DATA> ButtonSource for ShiftKeypad<LATCH, CLK, DATA>
where
    LATCH: OutputPin,
    CLK: OutputPin,
    DATA: InputPin,
{
    type Error = DATA::Error;

    fn poll_buttons(&mut self) -> Result<Buttons, Self::Error> {
        Ok(Buttons::from_bits(self.sr.read8()?))
    }
}

pub struct DirectKeypad<P, const N: usize> {
    pins: [(P, Buttons); N],
}

impl<P: InputPin, const N: usize> DirectKeypad<P, N> {
    pub fn new(pins: [(P, Buttons); N]) -> Self {
        Self { pins }
    }
}

impl<P: InputPin, const N: usize> ButtonSource for DirectKeypad<P, N> {
    type Error = P::Error;

    fn poll_buttons(&mut self) -> Result<Buttons, Self::Error> {
        let mut held = Buttons::NONE;
        for (pin, button) in self.pins.iter_mut() {
            // active low
            if pin.is_low()? {
                held |= *button;
            }
        }
        Ok(held)
    }
}
