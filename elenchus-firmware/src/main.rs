//! Elenchus - In-Circuit Diagnostic Tester Firmware
//!
//! RP2040 binary wiring the navigation engine to a five-button pad,
//! a 128x64 OLED used as a 2x16 character surface, and the on-board
//! LED for the idle heartbeat.
//!
//! The whole device is one blocking poll loop; there is no executor.
//! The embassy time driver only supplies the monotonic clock.

#![no_std]
#![no_main]

extern crate alloc;

mod diags;
mod surface;

use cortex_m_rt::entry;
use defmt::info;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_time::{block_for, Duration, Instant};
use embedded_alloc::LlffHeap as Heap;
use {defmt_rtt as _, panic_probe as _};

use elenchus_core::engine::Engine;
use elenchus_core::keys::Key;
use elenchus_core::traits::Monotonic;
use elenchus_drivers::keypad::{RawKeypad, SampledKeypad};
use elenchus_drivers::led::GpioLed;

use crate::surface::OledSurface;

// Heap for diagnostic instances. Exhaustion has no recovery path at
// this layer; the panic backend resets the board.
#[global_allocator]
static HEAP: Heap = Heap::empty();

const HEAP_SIZE: usize = 16 * 1024;

fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    unsafe { HEAP.init(core::ptr::addr_of_mut!(HEAP_MEM) as usize, HEAP_SIZE) }
}

/// Millisecond clock over the embassy time driver.
struct BoardClock;

impl Monotonic for BoardClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}

/// Five-button pad, active low with pull-ups.
struct ButtonPad {
    left: Input<'static>,
    right: Input<'static>,
    up: Input<'static>,
    down: Input<'static>,
    select: Input<'static>,
}

impl RawKeypad for ButtonPad {
    fn read(&mut self) -> Key {
        if self.select.is_low() {
            Key::Select
        } else if self.left.is_low() {
            Key::Left
        } else if self.right.is_low() {
            Key::Right
        } else if self.up.is_low() {
            Key::Up
        } else if self.down.is_low() {
            Key::Down
        } else {
            Key::None
        }
    }
}

#[entry]
fn main() -> ! {
    info!("Elenchus firmware starting...");

    init_heap();

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // OLED on I2C0 (GP4=SDA, GP5=SCL)
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    let display = OledSurface::new(i2c);

    let pad = ButtonPad {
        left: Input::new(p.PIN_10, Pull::Up),
        right: Input::new(p.PIN_11, Pull::Up),
        up: Input::new(p.PIN_12, Pull::Up),
        down: Input::new(p.PIN_13, Pull::Up),
        select: Input::new(p.PIN_14, Pull::Up),
    };
    let keys = SampledKeypad::new(pad, BoardClock);

    let led = GpioLed::new_active_high(Output::new(p.PIN_25, Level::Low));

    let mut engine = Engine::new(display, keys, BoardClock, led, diags::ROOT_SELECTOR);
    info!("Entering poll loop");
    engine.run()
}
