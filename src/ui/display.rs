//! SSD1306 OLED rendering for each UI screen.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::ui::menu::{UiState, MENU_ITEMS};

/// Concrete display driver, generic over the HAL's I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Line height of `FONT_6X10` plus spacing.
const LINE: i32 = 12;

/// Initialise the SSD1306 and blank it.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if display.init().is_err() {
        defmt::error!("SSD1306 init failed");
    }
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn line<I2C>(display: &mut Display<I2C>, row: i32, text: &str)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Text::new(text, Point::new(0, 10 + row * LINE), text_style()).draw(display);
}

/// Draw the screen for `state`.
pub fn render<I2C>(display: &mut Display<I2C>, state: UiState, cursor: usize, activations: u32)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    match state {
        // Start is left on the boot kick; nothing to show yet.
        UiState::Start => {}
        UiState::Splash => {
            line(display, 0, "tablefsm");
            line(display, 2, "table-driven UI");
        }
        UiState::Menu => {
            for (row, label) in MENU_ITEMS.iter().enumerate() {
                let marker = if row == cursor { ">" } else { " " };
                let mut text: heapless::String<24> = heapless::String::new();
                let _ = write!(text, "{} {}", marker, label);
                line(display, row as i32, text.as_str());
            }
        }
        UiState::Detail => {
            let label = MENU_ITEMS.get(cursor).copied().unwrap_or("?");
            line(display, 0, label);

            let mut runs: heapless::String<24> = heapless::String::new();
            let _ = write!(runs, "runs: {}", activations);
            line(display, 2, runs.as_str());
            line(display, 4, "SEL:run  UP/DN:back");
        }
    }

    if display.flush().is_err() {
        defmt::warn!("SSD1306 flush failed");
    }
}
