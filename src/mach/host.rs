/// ## Host capabilities
///
/// The narrow seam between the engine and its environment. The engine
/// never touches a terminal, a pixel surface, or a clock directly; it
/// calls these operations and nothing else. Tests substitute a
/// recording host; `term::ConsoleHost` is the real one.
///
/// Conventions shared by every implementation:
/// * grid and surface coordinates are 0-based;
/// * out-of-range coordinates, colors (0-7), and attributes are
///   rejected by returning `false` / `-1`, never by panicking;
/// * pointer masks use bit 1 for left, 2 for right, 4 for middle;
/// * drawing on the pixel surface is buffered until `refresh_surface`.

/// Snapshot of a pointer: position, held-button mask, drag mask.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
    pub buttons: i32,
    pub drag: i32,
}

pub trait Host {
    /// Appends to the output stream.
    fn write(&mut self, text: &str);
    /// Blocking line read; the returned line carries no trailing newline.
    fn read_line(&mut self, prompt: &str) -> String;
    /// Non-blocking key poll; `0` when the queue is empty. Implementations
    /// pump pending pointer events into the cell-pointer snapshot here.
    fn poll_key(&mut self) -> i32;

    fn move_cursor(&mut self, x: i32, y: i32) -> bool;
    /// Character code under the cursor, `-1` when unavailable.
    fn char_under_cursor(&mut self) -> i32;
    /// Writes one character code, returning the code it replaced.
    fn put_char(&mut self, code: i32) -> i32;
    /// Writes a string's bytes, returning the code under the cursor
    /// before the write.
    fn put_text(&mut self, text: &str) -> i32;
    fn set_foreground(&mut self, color: i32) -> bool;
    fn set_background(&mut self, color: i32) -> bool;
    /// 0 = normal, 1 = bold, 2 = reverse.
    fn set_attribute(&mut self, attr: i32) -> bool;
    fn grid_width(&mut self) -> i32;
    fn grid_height(&mut self) -> i32;
    fn clear_grid(&mut self) -> bool;

    fn open_surface(&mut self, width: i32, height: i32) -> bool;
    fn clear_surface(&mut self) -> bool;
    fn set_pen(&mut self, r: i32, g: i32, b: i32) -> bool;
    fn set_brush(&mut self, r: i32, g: i32, b: i32) -> bool;
    fn draw_pixel(&mut self, x: i32, y: i32) -> bool;
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool;
    fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, filled: bool) -> bool;
    fn draw_ellipse(&mut self, x: i32, y: i32, radius: i32, filled: bool) -> bool;
    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> bool;
    fn refresh_surface(&mut self) -> bool;

    fn pointer(&mut self) -> Pointer;
    /// Last click button (1/2/3), consumed on read; `0` when none.
    fn take_click(&mut self) -> i32;
    fn cell_pointer(&mut self) -> Pointer;
    fn take_cell_click(&mut self) -> i32;

    /// Wall clock in whole seconds.
    fn clock_seconds(&mut self) -> f64;
    /// Monotonic milliseconds since the host started.
    fn ticks_ms(&mut self) -> f64;
    /// Monotonic milliseconds since the previous call; self-resets.
    fn elapsed_ms(&mut self) -> f64;

    /// Interrupt flag set by host signal handling; consumed on read.
    fn interrupted(&mut self) -> bool;
}
