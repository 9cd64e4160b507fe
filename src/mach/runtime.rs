use super::{Host, Operation, Rng, Val, Var};
use crate::lang::{split, Error};
use std::rc::Rc;

/// ## Runtime
///
/// One engine instance: the program store, the variable environment,
/// the RNG, and the line cursor, driven over a host. Segments are
/// numbered from 1; the cursor is the value of `#` while a segment
/// executes.

pub struct Runtime<H> {
    host: H,
    pub(crate) vars: Var,
    pub(crate) rng: Rng,
    pub(crate) store: Vec<Rc<str>>,
    pub(crate) cursor: usize,
    in_forward_ref: bool,
    pub(crate) repl: bool,
    need_newline: bool,
    pub(crate) quit: bool,
}

pub(crate) enum Flow {
    Next,
    Jump(i64),
}

impl<H: Host + Default> Default for Runtime<H> {
    fn default() -> Runtime<H> {
        Runtime::new(H::default())
    }
}

impl<H: Host> Runtime<H> {
    pub fn new(host: H) -> Runtime<H> {
        Runtime {
            host,
            vars: Var::new(),
            rng: Rng::new(chrono::Local::now().timestamp()),
            store: vec![],
            cursor: 0,
            in_forward_ref: false,
            repl: false,
            need_newline: false,
            quit: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn set_repl(&mut self, repl: bool) {
        self.repl = repl;
    }

    /// True once `:exit` or `:quit` has run.
    pub fn done(&self) -> bool {
        self.quit
    }

    /// Appends a whole source text to the program store without
    /// executing it.
    pub fn load(&mut self, source: &str) {
        for segment in split(source) {
            self.store.push(segment.into());
        }
    }

    /// Runs the stored program from its first segment.
    pub fn run(&mut self) {
        self.run_from(1);
    }

    /// One REPL entry: meta-command lines are handled whole, anything
    /// else is split, appended, and executed from the first new
    /// segment. Returns false for lines not worth keeping in history.
    pub fn enter(&mut self, input: &str) -> bool {
        let input = input.trim_end_matches(|ch| ch == '\n' || ch == '\r');
        if input.is_empty() {
            return false;
        }
        if let Some(command) = input.strip_prefix(':') {
            if !self.command(command) {
                self.emit(&format!("Unknown command: :{}\n", command));
                self.emit("Type ':help' for the list of commands.\n");
            }
            return true;
        }
        let start = self.store.len() + 1;
        for segment in split(input) {
            self.store.push(segment.into());
        }
        if start <= self.store.len() {
            self.run_from(start);
        }
        true
    }

    /// The REPL prompt: the next segment number, on a fresh line when
    /// the previous output left the cursor mid-line.
    pub fn prompt(&mut self) -> String {
        let next = self.store.len() + 1;
        if self.need_newline {
            self.need_newline = false;
            format!("\n{}> ", next)
        } else {
            format!("{}> ", next)
        }
    }

    /// The control driver. The cursor advances by one after each
    /// segment unless the segment jumped; a cursor of 0 or past the
    /// end terminates. The interrupt flag is polled at segment
    /// boundaries only.
    fn run_from(&mut self, start: usize) {
        let mut next = start as i64;
        loop {
            if self.quit || next <= 0 || next as usize > self.store.len() {
                break;
            }
            if self.host.interrupted() {
                self.emit("\n[Interrupted]\n");
                break;
            }
            let index = next as usize;
            next = match self.exec_segment(index) {
                Flow::Next => index as i64 + 1,
                Flow::Jump(target) => target,
            };
        }
    }

    /// Reads a cell through the forward-reference path: the first read
    /// of an undefined cell scans the remaining segments for one that
    /// assigns it and executes that segment in place. A second
    /// triggering read during the scan returns the default
    /// immediately.
    pub(crate) fn get_var(&mut self, index: usize) -> Val {
        if !self.vars.is_defined(index) && !self.in_forward_ref {
            let name = Var::name_of(index) as u8;
            let saved = self.cursor;
            self.in_forward_ref = true;
            for candidate in self.cursor.max(1)..=self.store.len() {
                let segment = self.store[candidate - 1].clone();
                let bytes = segment.as_bytes();
                let mut pos = 0;
                while pos < bytes.len() && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
                    pos += 1;
                }
                if pos + 1 < bytes.len() && bytes[pos] == name {
                    self.exec_segment(candidate);
                    break;
                }
            }
            self.in_forward_ref = false;
            self.cursor = saved;
        }
        self.vars.fetch(index)
    }

    /// Writes a cell, echoing the assignment in REPL mode.
    pub(crate) fn set_var(&mut self, index: usize, val: Val) {
        self.vars.store(index, val);
        if self.repl {
            let echoed = Operation::echo_form(&self.vars.fetch(index));
            self.emit(&format!("< {} = {}\n", Var::name_of(index), echoed));
        }
    }

    /// All engine output funnels through here so the prompt knows
    /// whether the last byte was a newline.
    pub(crate) fn emit(&mut self, text: &str) {
        if let Some(last) = text.as_bytes().last() {
            self.need_newline = *last != b'\n';
        }
        self.host.write(text);
    }

    pub(crate) fn report(&mut self, error: Error) {
        let error = error.in_line_number(self.cursor);
        self.emit(&format!("?{}\n", error));
    }
}
