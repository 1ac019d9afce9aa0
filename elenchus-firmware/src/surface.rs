//! SSD1306 character surface
//!
//! Renders the engine's two 16-column text rows onto a 128x64 OLED.
//! The glyph work is all `embedded-graphics`; this module only keeps
//! the row buffers and the write cursor.

use embedded_graphics::mono_font::ascii::FONT_8X13;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use elenchus_core::traits::display::{DisplaySurface, SCREEN_COLS, SCREEN_ROWS};

type Oled<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Two-row character surface on an SSD1306.
pub struct OledSurface<I2C> {
    oled: Oled<I2C>,
    lines: [String<SCREEN_COLS>; SCREEN_ROWS],
    col: usize,
    row: usize,
}

impl<I2C> OledSurface<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the OLED and start with a blank grid.
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        let _ = oled.init();
        oled.clear_buffer();
        let _ = oled.flush();

        Self {
            oled,
            lines: [String::new(), String::new()],
            col: 0,
            row: 0,
        }
    }

    fn text_style() -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyleBuilder::new()
            .font(&FONT_8X13)
            .text_color(BinaryColor::On)
            .build()
    }

    fn redraw(&mut self) {
        self.oled.clear_buffer();

        for (row, line) in self.lines.iter().enumerate() {
            if !line.is_empty() {
                // FONT_8X13 baseline; rows at the top and bottom half.
                let y = 14 + row as i32 * 16;
                let _ = Text::new(line.as_str(), Point::new(0, y), Self::text_style())
                    .draw(&mut self.oled);
            }
        }

        let _ = self.oled.flush();
    }
}

impl<I2C> DisplaySurface for OledSurface<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.col = 0;
        self.row = 0;
        self.redraw();
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.col = col as usize;
        self.row = (row as usize).min(SCREEN_ROWS - 1);
    }

    fn print(&mut self, text: &str) {
        let line = &mut self.lines[self.row];

        // Pad out to the cursor column, drop anything past it, append.
        while line.len() < self.col {
            let _ = line.push(' ');
        }
        if self.col <= line.len() {
            line.truncate(self.col);
        }
        for ch in text.chars() {
            if line.len() >= SCREEN_COLS {
                break;
            }
            let _ = line.push(ch);
        }
        self.col = line.len();

        self.redraw();
    }
}
