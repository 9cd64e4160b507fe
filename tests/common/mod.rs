#![allow(dead_code)]

use itl::mach::{Host, Pointer, Runtime};
use std::collections::VecDeque;

pub const GRID_W: usize = 80;
pub const GRID_H: usize = 25;

/// A recording host: captures the output stream, serves scripted
/// input lines and key codes, shadows a small character grid, logs
/// graphics calls, and runs on a virtual clock.
pub struct TestHost {
    pub output: String,
    pub inputs: VecDeque<String>,
    pub keys: VecDeque<i32>,
    pub calls: Vec<String>,
    pub grid: Vec<i32>,
    pub cx: usize,
    pub cy: usize,
    pub fg: i32,
    pub bg: i32,
    pub attr: i32,
    pub surface_open: bool,
    pub pointer: Pointer,
    pub click: i32,
    pub cell_pointer: Pointer,
    pub cell_click: i32,
    pub clock: f64,
    pub ticks: f64,
    pub elapsed_mark: f64,
    pub interrupt: bool,
}

impl Default for TestHost {
    fn default() -> TestHost {
        TestHost {
            output: String::new(),
            inputs: VecDeque::new(),
            keys: VecDeque::new(),
            calls: vec![],
            grid: vec![i32::from(b' '); GRID_W * GRID_H],
            cx: 0,
            cy: 0,
            fg: 7,
            bg: 0,
            attr: 0,
            surface_open: false,
            pointer: Pointer::default(),
            click: 0,
            cell_pointer: Pointer::default(),
            cell_click: 0,
            clock: 0.0,
            ticks: 0.0,
            elapsed_mark: 0.0,
            interrupt: false,
        }
    }
}

impl Host for TestHost {
    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn read_line(&mut self, _prompt: &str) -> String {
        self.inputs.pop_front().unwrap_or_default()
    }

    fn poll_key(&mut self) -> i32 {
        self.keys.pop_front().unwrap_or(0)
    }

    fn move_cursor(&mut self, x: i32, y: i32) -> bool {
        self.calls.push(format!("gotoxy({},{})", x, y));
        if x < 0 || y < 0 || x as usize >= GRID_W || y as usize >= GRID_H {
            return false;
        }
        self.cx = x as usize;
        self.cy = y as usize;
        true
    }

    fn char_under_cursor(&mut self) -> i32 {
        self.grid[self.cy * GRID_W + self.cx]
    }

    fn put_char(&mut self, code: i32) -> i32 {
        let old = self.grid[self.cy * GRID_W + self.cx];
        self.grid[self.cy * GRID_W + self.cx] = code;
        self.cx += 1;
        if self.cx >= GRID_W {
            self.cx = 0;
            if self.cy + 1 < GRID_H {
                self.cy += 1;
            }
        }
        old
    }

    fn put_text(&mut self, text: &str) -> i32 {
        let old = self.grid[self.cy * GRID_W + self.cx];
        for ch in text.chars() {
            self.put_char(ch as i32);
        }
        old
    }

    fn set_foreground(&mut self, color: i32) -> bool {
        if !(0..=7).contains(&color) {
            return false;
        }
        self.fg = color;
        true
    }

    fn set_background(&mut self, color: i32) -> bool {
        if !(0..=7).contains(&color) {
            return false;
        }
        self.bg = color;
        true
    }

    fn set_attribute(&mut self, attr: i32) -> bool {
        self.attr = attr;
        true
    }

    fn grid_width(&mut self) -> i32 {
        GRID_W as i32
    }

    fn grid_height(&mut self) -> i32 {
        GRID_H as i32
    }

    fn clear_grid(&mut self) -> bool {
        for cell in self.grid.iter_mut() {
            *cell = i32::from(b' ');
        }
        self.cx = 0;
        self.cy = 0;
        true
    }

    fn open_surface(&mut self, width: i32, height: i32) -> bool {
        self.calls.push(format!("gopen({},{})", width, height));
        self.surface_open = true;
        true
    }

    fn clear_surface(&mut self) -> bool {
        self.calls.push("gclear".to_string());
        self.surface_open
    }

    fn set_pen(&mut self, r: i32, g: i32, b: i32) -> bool {
        self.calls.push(format!("gpen({},{},{})", r, g, b));
        self.surface_open
    }

    fn set_brush(&mut self, r: i32, g: i32, b: i32) -> bool {
        self.calls.push(format!("gbr({},{},{})", r, g, b));
        self.surface_open
    }

    fn draw_pixel(&mut self, x: i32, y: i32) -> bool {
        self.calls.push(format!("gpixel({},{})", x, y));
        self.surface_open
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        self.calls.push(format!("gline({},{},{},{})", x1, y1, x2, y2));
        self.surface_open
    }

    fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, filled: bool) -> bool {
        self.calls
            .push(format!("grect({},{},{},{},{})", x1, y1, x2, y2, filled));
        self.surface_open
    }

    fn draw_ellipse(&mut self, x: i32, y: i32, radius: i32, filled: bool) -> bool {
        self.calls
            .push(format!("gcircle({},{},{},{})", x, y, radius, filled));
        self.surface_open
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> bool {
        self.calls.push(format!("gtext({},{},{})", x, y, text));
        self.surface_open
    }

    fn refresh_surface(&mut self) -> bool {
        self.calls.push("grefresh".to_string());
        self.surface_open
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
        self.clock
    }

    fn ticks_ms(&mut self) -> f64 {
        self.ticks
    }

    fn elapsed_ms(&mut self) -> f64 {
        let elapsed = self.ticks - self.elapsed_mark;
        self.elapsed_mark = self.ticks;
        elapsed
    }

    fn interrupted(&mut self) -> bool {
        std::mem::take(&mut self.interrupt)
    }
}

/// Loads and runs a whole program in file mode, returning the output.
pub fn run_program(source: &str) -> String {
    let mut runtime = Runtime::new(TestHost::default());
    runtime.load(source);
    runtime.run();
    runtime.host().output.clone()
}

/// Feeds lines to a REPL-mode runtime, returning the output.
pub fn repl(lines: &[&str]) -> String {
    let mut runtime = Runtime::new(TestHost::default());
    runtime.set_repl(true);
    for line in lines {
        runtime.enter(line);
    }
    runtime.host().output.clone()
}

pub fn repl_runtime() -> Runtime<TestHost> {
    let mut runtime = Runtime::new(TestHost::default());
    runtime.set_repl(true);
    runtime
}

pub fn file_runtime() -> Runtime<TestHost> {
    Runtime::new(TestHost::default())
}
