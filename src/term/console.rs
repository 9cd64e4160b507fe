use super::surface::Surface;
use crate::mach::{Host, Pointer};
use ansi_term::{Colour, Style};
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// ## Console host
///
/// The host capability set on a real terminal. The character grid is
/// shadowed in memory so `getch` can read back what `putch` wrote;
/// rendering goes through ANSI cursor addressing with `ansi_term`
/// colors. The pixel surface stays offscreen, and the cell pointer is
/// fed by mouse events pumped during the key poll.

pub struct ConsoleHost {
    terminal: mortal::Terminal,
    input: Interface<DefaultTerminal>,
    interrupted: Arc<AtomicBool>,
    width: usize,
    height: usize,
    cells: Vec<i32>,
    cx: usize,
    cy: usize,
    fg: u8,
    bg: u8,
    attr: u8,
    surface: Option<Surface>,
    pointer: Pointer,
    click: i32,
    cell_pointer: Pointer,
    cell_click: i32,
    start: Instant,
    elapsed_mark: Instant,
}

impl ConsoleHost {
    pub fn new(interrupted: Arc<AtomicBool>) -> std::io::Result<ConsoleHost> {
        let terminal = mortal::Terminal::new()?;
        let input = Interface::new("input")?;
        input.set_report_signal(Signal::Interrupt, true);
        let (width, height) = match terminal.size() {
            Ok(size) if size.columns > 0 && size.lines > 0 => (size.columns, size.lines),
            _ => (80, 25),
        };
        let now = Instant::now();
        Ok(ConsoleHost {
            terminal,
            input,
            interrupted,
            width,
            height,
            cells: vec![i32::from(b' '); width * height],
            cx: 0,
            cy: 0,
            fg: 7,
            bg: 0,
            attr: 0,
            surface: None,
            pointer: Pointer::default(),
            click: 0,
            cell_pointer: Pointer::default(),
            cell_click: 0,
            start: now,
            elapsed_mark: now,
        })
    }

    fn style(&self) -> Style {
        let style = Colour::Fixed(self.fg).on(Colour::Fixed(self.bg));
        match self.attr {
            1 => style.bold(),
            2 => style.reverse(),
            _ => style,
        }
    }

    fn cell_index(&self) -> usize {
        self.cy * self.width + self.cx
    }

    /// Paints one character at the cursor and advances it, wrapping at
    /// the right edge and pinning at the bottom-right corner.
    fn paint_char(&mut self, code: i32) {
        let index = self.cell_index();
        self.cells[index] = code;
        let ch = std::char::from_u32((code.max(0) as u32) & 0xFF).unwrap_or(' ');
        print!(
            "\x1b[{};{}H{}",
            self.cy + 1,
            self.cx + 1,
            self.style().paint(ch.to_string())
        );
        let _ = std::io::stdout().flush();
        self.cx += 1;
        if self.cx >= self.width {
            self.cx = 0;
            if self.cy + 1 < self.height {
                self.cy += 1;
            }
        }
    }

    fn pump_mouse(&mut self, mouse: mortal::terminal::MouseEvent) {
        use mortal::terminal::{MouseButton, MouseInput};
        self.cell_pointer.x = mouse.position.column as i32;
        self.cell_pointer.y = mouse.position.line as i32;
        let bit = |button: MouseButton| match button {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 4,
            _ => 0,
        };
        match mouse.input {
            MouseInput::ButtonPressed(button) => {
                self.cell_pointer.buttons |= bit(button);
                self.cell_pointer.drag |= bit(button);
                self.cell_click = match button {
                    MouseButton::Left => 1,
                    MouseButton::Right => 2,
                    MouseButton::Middle => 3,
                    _ => 0,
                };
            }
            MouseInput::ButtonReleased(button) => {
                self.cell_pointer.buttons &= !bit(button);
                self.cell_pointer.drag &= !bit(button);
            }
            _ => {}
        }
    }
}

impl Host for ConsoleHost {
    fn write(&mut self, text: &str) {
        print!("{}", text);
        let _ = std::io::stdout().flush();
    }

    fn read_line(&mut self, prompt: &str) -> String {
        if self.input.set_prompt(prompt).is_err() {
            return String::new();
        }
        match self.input.read_line() {
            Ok(ReadResult::Input(line)) => {
                self.input.add_history_unique(line.clone());
                line
            }
            Ok(ReadResult::Signal(_)) => {
                self.interrupted.store(true, Ordering::SeqCst);
                String::new()
            }
            Ok(ReadResult::Eof) | Err(_) => String::new(),
        }
    }

    fn poll_key(&mut self) -> i32 {
        match self.terminal.read_event(Some(Duration::from_millis(1))) {
            Ok(Some(mortal::terminal::Event::Key(key))) => {
                use mortal::terminal::Key::*;
                match key {
                    Backspace => 8,
                    Enter => 13,
                    Escape => 27,
                    Tab => 9,
                    // DOS scan codes offset past the byte range
                    Up => 256 + 72,
                    Down => 256 + 80,
                    Left => 256 + 75,
                    Right => 256 + 77,
                    Home => 256 + 71,
                    End => 256 + 79,
                    PageUp => 256 + 73,
                    PageDown => 256 + 81,
                    Insert => 256 + 82,
                    Delete => 256 + 83,
                    Char(ch) => ch as i32,
                    Ctrl(ch) => (ch as i32) & 0x1F,
                    F(_) => 0,
                }
            }
            Ok(Some(mortal::terminal::Event::Mouse(mouse))) => {
                self.pump_mouse(mouse);
                0
            }
            _ => 0,
        }
    }

    fn move_cursor(&mut self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.cx = x as usize;
        self.cy = y as usize;
        print!("\x1b[{};{}H", self.cy + 1, self.cx + 1);
        let _ = std::io::stdout().flush();
        true
    }

    fn char_under_cursor(&mut self) -> i32 {
        self.cells[self.cell_index()]
    }

    fn put_char(&mut self, code: i32) -> i32 {
        let old = self.cells[self.cell_index()];
        self.paint_char(code);
        old
    }

    fn put_text(&mut self, text: &str) -> i32 {
        let old = self.cells[self.cell_index()];
        for ch in text.chars() {
            self.paint_char(ch as i32);
        }
        old
    }

    fn set_foreground(&mut self, color: i32) -> bool {
        if !(0..=7).contains(&color) {
            return false;
        }
        self.fg = color as u8;
        true
    }

    fn set_background(&mut self, color: i32) -> bool {
        if !(0..=7).contains(&color) {
            return false;
        }
        self.bg = color as u8;
        true
    }

    fn set_attribute(&mut self, attr: i32) -> bool {
        self.attr = match attr {
            1 => 1,
            2 => 2,
            _ => 0,
        };
        true
    }

    fn grid_width(&mut self) -> i32 {
        self.width as i32
    }

    fn grid_height(&mut self) -> i32 {
        self.height as i32
    }

    fn clear_grid(&mut self) -> bool {
        for cell in self.cells.iter_mut() {
            *cell = i32::from(b' ');
        }
        self.cx = 0;
        self.cy = 0;
        self.terminal.clear_screen().is_ok()
    }

    fn open_surface(&mut self, width: i32, height: i32) -> bool {
        if self.surface.is_none() {
            self.surface = Some(Surface::new(width, height));
        }
        true
    }

    fn clear_surface(&mut self) -> bool {
        match &mut self.surface {
            Some(surface) => {
                surface.clear();
                true
            }
            None => false,
        }
    }

    fn set_pen(&mut self, r: i32, g: i32, b: i32) -> bool {
        match &mut self.surface {
            Some(surface) => {
                surface.set_pen((r as u8, g as u8, b as u8));
                true
            }
            None => false,
        }
    }

    fn set_brush(&mut self, r: i32, g: i32, b: i32) -> bool {
        match &mut self.surface {
            Some(surface) => {
                surface.set_brush((r as u8, g as u8, b as u8));
                true
            }
            None => false,
        }
    }

    fn draw_pixel(&mut self, x: i32, y: i32) -> bool {
        match &mut self.surface {
            Some(surface) => {
                surface.draw_pixel(x, y);
                true
            }
            None => false,
        }
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        match &mut self.surface {
            Some(surface) => {
                surface.draw_line(x1, y1, x2, y2);
                true
            }
            None => false,
        }
    }

    fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, filled: bool) -> bool {
        match &mut self.surface {
            Some(surface) => {
                surface.draw_rect(x1, y1, x2, y2, filled);
                true
            }
            None => false,
        }
    }

    fn draw_ellipse(&mut self, x: i32, y: i32, radius: i32, filled: bool) -> bool {
        match &mut self.surface {
            Some(surface) => {
                surface.draw_ellipse(x, y, radius, filled);
                true
            }
            None => false,
        }
    }

    fn draw_text(&mut self, _x: i32, _y: i32, _text: &str) -> bool {
        // accepted but not rasterized on the offscreen surface
        self.surface.is_some()
    }

    fn refresh_surface(&mut self) -> bool {
        self.surface.is_some()
    }

    fn pointer(&mut self) -> Pointer {
        self.pointer
    }

    fn take_click(&mut self) -> i32 {
        std::mem::replace(&mut self.click, 0)
    }

    fn cell_pointer(&mut self) -> Pointer {
        self.cell_pointer
    }

    fn take_cell_click(&mut self) -> i32 {
        std::mem::replace(&mut self.cell_click, 0)
    }

    fn clock_seconds(&mut self) -> f64 {
        chrono::Local::now().timestamp() as f64
    }

    fn ticks_ms(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    fn elapsed_ms(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.elapsed_mark).as_secs_f64() * 1000.0;
        self.elapsed_mark = now;
        elapsed
    }

    fn interrupted(&mut self) -> bool {
        self.interrupted.swap(false, Ordering::SeqCst)
    }
}
