// Two pixels per cell: background paints the top half, `▄` the bottom.

use crate::color::Rgb;
use crate::surface::Surface;
use std::io::Write;

pub struct Presenter {
    bg_color: Rgb,
    output_buf: Vec<u8>,
}

impl Presenter {
    pub fn new(bg_color: (u8, u8, u8)) -> Self {
        Self {
            bg_color: Rgb::from_u8(bg_color),
            output_buf: Vec::new(),
        }
    }

    /// Light adds onto the background; a black surface shows the bare background.
    fn shade(&self, px: Rgb) -> (u8, u8, u8) {
        Rgb::new(
            self.bg_color.r + px.r,
            self.bg_color.g + px.g,
            self.bg_color.b + px.b,
        )
        .to_u8()
    }

    /// Encode a whole frame, starting from the home position.
    pub fn encode(&mut self, surface: &Surface) -> std::io::Result<&[u8]> {
        let (cols, rows) = (surface.cols(), surface.rows());
        self.output_buf.clear();
        self.output_buf.reserve(cols * rows.div_ceil(2) * 25);
        self.output_buf.extend_from_slice(b"\x1b[H");

        for y in (0..rows).step_by(2) {
            let mut prev_top: Option<(u8, u8, u8)> = None;
            let mut prev_bot: Option<(u8, u8, u8)> = None;

            for x in 0..cols {
                let top = self.shade(surface.pixel(x, y));
                let bot = if y + 1 < rows {
                    self.shade(surface.pixel(x, y + 1))
                } else {
                    top
                };

                if prev_top != Some(top) {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", top.0, top.1, top.2)?;
                    prev_top = Some(top);
                }
                if prev_bot != Some(bot) {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", bot.0, bot.1, bot.2)?;
                    prev_bot = Some(bot);
                }
                self.output_buf.extend_from_slice("▄".as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            if y + 2 < rows {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }
        Ok(&self.output_buf)
    }

    pub fn present<W: Write>(&mut self, surface: &Surface, out: &mut W) -> std::io::Result<()> {
        let frame = self.encode(surface)?;
        out.write_all(frame)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BlendMode;

    #[test]
    fn blank_frame_is_background_only() {
        let surface = Surface::new(3, 2, 1.0);
        let mut presenter = Presenter::new((10, 20, 30));
        let frame = String::from_utf8(presenter.encode(&surface).unwrap().to_vec()).unwrap();
        assert!(frame.starts_with("\x1b[H"));
        assert_eq!(frame.matches('▄').count(), 3);
        // one colour pair for the whole row
        assert_eq!(frame.matches("\x1b[48;2;10;20;30m").count(), 1);
        assert_eq!(frame.matches("\x1b[38;2;10;20;30m").count(), 1);
        assert!(!frame.contains("\r\n"));
    }

    #[test]
    fn lit_pixel_adds_to_background() {
        let mut surface = Surface::new(1, 2, 1.0);
        surface.fill_circle(0.5, 1.5, 0.4, Rgb::new(1.0, 0.0, 0.0), 1.0, BlendMode::Lighter);
        let mut presenter = Presenter::new((0, 0, 40));
        let frame = String::from_utf8(presenter.encode(&surface).unwrap().to_vec()).unwrap();
        assert!(frame.contains("\x1b[48;2;0;0;40m"));
        assert!(frame.contains("\x1b[38;2;255;0;40m"));
    }

    #[test]
    fn rows_pair_up_into_lines() {
        let surface = Surface::new(2, 5, 1.0);
        let mut presenter = Presenter::new((0, 0, 0));
        let frame = String::from_utf8(presenter.encode(&surface).unwrap().to_vec()).unwrap();
        assert_eq!(frame.matches("\r\n").count(), 2);
        assert_eq!(frame.matches('▄').count(), 6);
    }
}
