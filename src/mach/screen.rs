use super::{Host, Runtime, Val};

/// ## Host builtins
///
/// The screen/graphics/mouse/timer family. These names route to the
/// host capability set rather than the math dispatcher; a name with no
/// following `(` is a zero-argument call.

const HOST_FUNCTIONS: &[&str] = &[
    "gotoxy",
    "putch",
    "getch",
    "setfore",
    "setback",
    "setattr",
    "getw",
    "geth",
    "clear",
    "gopen",
    "gclear",
    "gpen",
    "gbr",
    "gpixel",
    "gline",
    "grect",
    "gfillrect",
    "gcircle",
    "gfillcircle",
    "gtext",
    "grefresh",
    "gmx",
    "gmy",
    "gmb",
    "gmclick",
    "gmdrag",
    "tmx",
    "tmy",
    "tmclick",
    "tmdrag",
    "time",
    "ticks",
    "elapsed",
];

pub(crate) fn is_host_function(name: &str) -> bool {
    HOST_FUNCTIONS.contains(&name)
}

fn flag(ok: bool) -> Val {
    Val::Number(if ok { 1.0 } else { 0.0 })
}

fn drag_bit(button: i32) -> i32 {
    match button {
        1 => 1,
        2 => 2,
        _ => 4,
    }
}

impl<H: Host> Runtime<H> {
    pub(crate) fn call_host(&mut self, name: &str, args: &[Val]) -> Val {
        let int = |index: usize| args.get(index).map(|val| val.number() as i32).unwrap_or(0);
        match name {
            "gotoxy" => {
                if args.len() >= 2 {
                    flag(self.host_mut().move_cursor(int(0), int(1)))
                } else {
                    Val::Number(0.0)
                }
            }
            "putch" => match args.first() {
                None => Val::Number(-1.0),
                Some(Val::String(s)) => Val::Number(f64::from(self.host_mut().put_text(s))),
                Some(val) => {
                    let code = val.number() as i32;
                    if (0..=255).contains(&code) {
                        Val::Number(f64::from(self.host_mut().put_char(code)))
                    } else {
                        Val::Number(-1.0)
                    }
                }
            },
            "getch" => Val::Number(f64::from(self.host_mut().char_under_cursor())),
            "setfore" => {
                if args.is_empty() {
                    Val::Number(0.0)
                } else {
                    flag(self.host_mut().set_foreground(int(0)))
                }
            }
            "setback" => {
                if args.is_empty() {
                    Val::Number(0.0)
                } else {
                    flag(self.host_mut().set_background(int(0)))
                }
            }
            "setattr" => {
                if args.is_empty() {
                    Val::Number(0.0)
                } else {
                    let attr = int(0);
                    self.host_mut().set_attribute(attr);
                    Val::Number(f64::from(attr))
                }
            }
            "getw" => Val::Number(f64::from(self.host_mut().grid_width())),
            "geth" => Val::Number(f64::from(self.host_mut().grid_height())),
            "clear" => flag(self.host_mut().clear_grid()),
            "gopen" => {
                let width = if args.is_empty() { 640 } else { int(0) };
                let height = if args.len() < 2 { 480 } else { int(1) };
                flag(self.host_mut().open_surface(width, height))
            }
            "gclear" => flag(self.host_mut().clear_surface()),
            "gpen" => {
                if args.len() >= 3 {
                    flag(self.host_mut().set_pen(int(0), int(1), int(2)))
                } else {
                    Val::Number(0.0)
                }
            }
            "gbr" => {
                if args.len() >= 3 {
                    flag(self.host_mut().set_brush(int(0), int(1), int(2)))
                } else {
                    Val::Number(0.0)
                }
            }
            "gpixel" => {
                if args.len() >= 2 {
                    flag(self.host_mut().draw_pixel(int(0), int(1)))
                } else {
                    Val::Number(0.0)
                }
            }
            "gline" => {
                if args.len() >= 4 {
                    flag(self.host_mut().draw_line(int(0), int(1), int(2), int(3)))
                } else {
                    Val::Number(0.0)
                }
            }
            "grect" | "gfillrect" => {
                if args.len() >= 4 {
                    let filled = name == "gfillrect";
                    flag(self
                        .host_mut()
                        .draw_rect(int(0), int(1), int(2), int(3), filled))
                } else {
                    Val::Number(0.0)
                }
            }
            "gcircle" | "gfillcircle" => {
                if args.len() >= 3 {
                    let filled = name == "gfillcircle";
                    flag(self.host_mut().draw_ellipse(int(0), int(1), int(2), filled))
                } else {
                    Val::Number(0.0)
                }
            }
            "gtext" => {
                if args.len() >= 3 {
                    let label = match &args[2] {
                        Val::String(s) => s.to_string(),
                        val => val.string().to_string(),
                    };
                    flag(self.host_mut().draw_text(int(0), int(1), &label))
                } else {
                    Val::Number(0.0)
                }
            }
            "grefresh" => flag(self.host_mut().refresh_surface()),
            "gmx" => Val::Number(f64::from(self.host_mut().pointer().x)),
            "gmy" => Val::Number(f64::from(self.host_mut().pointer().y)),
            "gmb" => Val::Number(f64::from(self.host_mut().pointer().buttons)),
            "gmclick" => Val::Number(f64::from(self.host_mut().take_click())),
            "gmdrag" => {
                let button = if args.is_empty() { 1 } else { int(0) };
                let held = self.host_mut().pointer().drag & drag_bit(button) != 0;
                flag(held)
            }
            "tmx" => Val::Number(f64::from(self.host_mut().cell_pointer().x)),
            "tmy" => Val::Number(f64::from(self.host_mut().cell_pointer().y)),
            "tmclick" => Val::Number(f64::from(self.host_mut().take_cell_click())),
            "tmdrag" => {
                let button = if args.is_empty() { 1 } else { int(0) };
                let held = self.host_mut().cell_pointer().drag & drag_bit(button) != 0;
                flag(held)
            }
            "time" => Val::Number(self.host_mut().clock_seconds()),
            "ticks" => Val::Number(self.host_mut().ticks_ms()),
            "elapsed" => Val::Number(self.host_mut().elapsed_ms()),
            _ => Val::Undefined,
        }
    }
}
