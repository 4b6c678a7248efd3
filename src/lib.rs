// Snake firmware for ESP32-C3 handhelds with an ST7735 TFT

#![no_std]

pub mod board;
pub mod drivers;
