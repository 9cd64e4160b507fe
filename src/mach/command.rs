use super::val::format_number;
use super::{Host, Operation, Runtime, Val, Var};

/// ## Meta-commands
///
/// Lines beginning with `:` in the REPL (or in a program) are
/// commands to the interpreter itself. Unknown commands change no
/// state; the caller reports them.

impl<H: Host> Runtime<H> {
    pub(crate) fn command(&mut self, command: &str) -> bool {
        match command {
            "help" => self.help(),
            "syntax" => self.syntax(),
            "screen" => self.screen_help(),
            "vars" => self.show_vars(),
            "array" => self.show_array(),
            "lines" => self.show_lines(),
            "clear" => {
                self.vars.clear();
                self.emit("All variables and array cleared.\n");
            }
            "reset" => {
                self.vars.clear();
                self.store.clear();
                self.emit("REPL completely reset.\n");
            }
            "exit" | "quit" => {
                self.emit("Goodbye.\n");
                self.quit = true;
            }
            _ => {
                if let Some(name) = command.strip_prefix("debug ") {
                    self.debug(name);
                    return true;
                }
                return false;
            }
        }
        true
    }

    fn show_vars(&mut self) {
        let mut found = false;
        for index in 0..super::var::NUM_VARS {
            let val = self.vars.fetch(index);
            if val.is_defined() {
                let line = format!("{} = {}\n", Var::name_of(index), Operation::echo_form(&val));
                self.emit(&line);
                found = true;
            }
        }
        if !found {
            self.emit("No variables defined.\n");
        }
    }

    fn show_array(&mut self) {
        let size = self.vars.array().len();
        if size == 0 {
            self.emit("Array is empty.\n");
            return;
        }
        self.emit(&format!("Array (size: {}):\n", size));
        let mut shown = vec![];
        for (index, num) in self.vars.array().iter().take(20).enumerate() {
            shown.push(format!("  @{} = {}\n", index, format_number(*num)));
        }
        for line in shown {
            self.emit(&line);
        }
        if size > 20 {
            self.emit(&format!("  ... ({} elements total)\n", size));
        }
    }

    fn show_lines(&mut self) {
        let count = self.store.len();
        if count == 0 {
            self.emit("No lines in program.\n");
            return;
        }
        self.emit(&format!("Program ({} lines):\n", count));
        let mut shown = vec![];
        for (index, segment) in self.store.iter().take(50).enumerate() {
            shown.push(format!("  {:>3}: {}\n", index + 1, segment));
        }
        for line in shown {
            self.emit(&line);
        }
        if count > 50 {
            self.emit(&format!("  ... ({} lines total)\n", count));
        }
    }

    fn debug(&mut self, name: &str) {
        let index = match name.as_bytes().first().copied().and_then(Var::index_of) {
            Some(index) if name.len() == 1 => index,
            _ => {
                self.emit("Usage: :debug VARIABLE (e.g. :debug A or :debug _)\n");
                return;
            }
        };
        let letter = Var::name_of(index);
        match self.vars.fetch(index) {
            Val::String(s) => {
                self.emit(&format!("Variable {} (string):\n", letter));
                self.emit(&format!("  Content: \"{}\"\n", s));
                let hex: String = s.bytes().map(|byte| format!("{:02X} ", byte)).collect();
                self.emit(&format!("  Bytes (hex): {}\n", hex.trim_end()));
                let dec: String = s.bytes().map(|byte| format!("{} ", byte)).collect();
                self.emit(&format!("  Bytes (dec): {}\n", dec.trim_end()));
            }
            Val::Number(num) => {
                self.emit(&format!(
                    "Variable {} = {} (number)\n",
                    letter,
                    format_number(num)
                ));
            }
            Val::Undefined => {
                self.emit(&format!("Variable {} is undefined\n", letter));
            }
        }
    }

    fn help(&mut self) {
        self.emit(concat!(
            "ITL REPL - Special commands:\n",
            "  :help         - Show this help\n",
            "  :vars         - Show all defined variables\n",
            "  :clear        - Clear all variables\n",
            "  :array        - Show array contents\n",
            "  :lines        - Show program lines\n",
            "  :syntax       - Show syntax help\n",
            "  :screen       - Show screen functions help\n",
            "  :debug VAR    - Show raw bytes of a variable (e.g. :debug A or :debug _)\n",
            "  :reset        - Reset the REPL completely (clears everything)\n",
            "  :exit/:quit   - Exit the REPL\n",
            "\n",
            "History and line editing follow your terminal's usual keys.\n",
            "\n",
        ));
    }

    fn syntax(&mut self) {
        self.emit(concat!(
            "ITL syntax:\n",
            "  #              - Current line number\n",
            "  #=expr         - Jump to line expr\n",
            "  '              - Random number in [0, 1)\n",
            "  'N             - Set RNG seed to integer N\n",
            "  :              - Read key from keyboard buffer (0 if empty)\n",
            "  ?              - Input from keyboard (inside expression)\n",
            "  $VAR           - Type conversion\n",
            "  @index         - Array access\n",
            "  ;              - Statement separator\n",
            "  func(args)     - Math function call (sin, cos, sqrt, etc.)\n",
            "  (stmt;stmt)    - Block: execute stmts, return last value\n",
            "  _              - Underscore variable (27th single-letter var)\n",
            "\n",
        ));
    }

    fn screen_help(&mut self) {
        self.emit(concat!(
            "Screen functions:\n",
            "  gotoxy(x,y)    - Move cursor to column x, row y\n",
            "  putch(c)       - Write char (ASCII or string) at cursor\n",
            "  getch()        - Read char at cursor (returns ASCII code)\n",
            "  setfore(c)     - Set foreground color 0-7\n",
            "  setback(c)     - Set background color 0-7\n",
            "  setattr(a)     - Set attribute: 0=normal, 1=bold, 2=reverse\n",
            "  getw()         - Screen width in columns\n",
            "  geth()         - Screen height in rows\n",
            "  clear()        - Clear screen with current background color\n",
            "Graphics: gopen gclear gpen gbr gpixel gline grect gfillrect\n",
            "          gcircle gfillcircle gtext grefresh\n",
            "Mouse:    gmx gmy gmb gmclick gmdrag / tmx tmy tmclick tmdrag\n",
            "Timers:   time ticks elapsed\n",
            "\n",
        ));
    }
}
