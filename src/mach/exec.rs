use super::eval::{is_self_ref_operator, Cursor};
use super::runtime::Flow;
use super::val::{decode_escapes, format_number, scan_number};
use super::{Host, Runtime, Val, Var};

/// ## Statement executor
///
/// A segment dispatches on its first significant byte: meta-command,
/// print, array write, jump, the assignment family, or a bare
/// expression evaluated for its side effects.

impl<H: Host> Runtime<H> {
    pub(crate) fn exec_segment(&mut self, index: usize) -> Flow {
        if index == 0 {
            return Flow::Next;
        }
        self.cursor = index;
        let segment = match self.store.get(index - 1) {
            Some(segment) => segment.clone(),
            None => return Flow::Next,
        };
        let mut c = Cursor::new(&segment);
        c.skip_blank();
        let lead = c.peek();

        if lead == 0 {
            return Flow::Next;
        }

        if lead == b':' {
            c.bump();
            let command = c.rest();
            if !self.command(command) {
                self.emit(&format!("Unknown command: :{}\n", command));
            }
            return Flow::Next;
        }

        if lead == b'?' {
            c.bump();
            c.skip_blank();
            if c.peek() == b'=' {
                c.bump();
            }
            let val = self.eval(&mut c);
            match val {
                Val::Number(num) => self.emit(&format_number(num)),
                Val::String(s) => {
                    let decoded = decode_escapes(&s);
                    if !decoded.is_empty() {
                        self.emit(&decoded);
                    }
                }
                Val::Undefined => {}
            }
            return Flow::Next;
        }

        // array write: a base primary (value unused), `@`, the index,
        // an optional `=`, then the stored expression
        if lead.is_ascii_digit() || Var::is_name(lead) {
            let saved = c.pos();
            if lead.is_ascii_digit() {
                let (_, end) = scan_number(c.bytes(), c.pos());
                c.set_pos(end);
            } else {
                c.bump();
            }
            c.skip_blank();
            if c.peek() == b'@' {
                c.bump();
                let index_val = self.primary(&mut c);
                let slot = index_val.number() as i64;
                c.skip_blank();
                if c.peek() == b'=' {
                    c.bump();
                }
                let val = self.eval(&mut c);
                match self.vars.array_store(slot, val.number()) {
                    Ok(written) => {
                        if self.repl {
                            let num = self.vars.array_fetch(written as i64);
                            self.emit(&format!("< @{} = {}\n", written, format_number(num)));
                        }
                    }
                    Err(error) => self.report(error),
                }
                return Flow::Next;
            }
            c.set_pos(saved);
        }

        if let Some(var_index) = Var::index_of(lead) {
            c.bump();
            c.skip_blank();
            // a bare name un-defines the cell
            if c.peek() == 0 {
                self.set_var(var_index, Val::Undefined);
                return Flow::Next;
            }
            if c.peek() == b'=' {
                c.bump();
                let val = self.eval(&mut c);
                self.set_var(var_index, val);
                return Flow::Next;
            }
            if is_self_ref_operator(c.peek()) {
                // V op expr rewrites as V = V op expr
                let current = self.get_var(var_index);
                let val = self.eval_chain(&mut c, current);
                self.set_var(var_index, val);
                return Flow::Next;
            }
            let val = self.eval(&mut c);
            self.set_var(var_index, val);
            return Flow::Next;
        }

        if lead == b'#' {
            c.bump();
            c.skip_blank();
            if c.peek() == b'=' {
                c.bump();
            }
            let val = self.eval(&mut c);
            return Flow::Jump(val.number() as i64);
        }

        self.eval(&mut c);
        Flow::Next
    }
}
