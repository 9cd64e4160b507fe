use super::function::{Function, MAX_FUNC_ARGS};
use super::screen::is_host_function;
use super::val::scan_number;
use super::{Host, Operation, Runtime, Val, Var};

/// ## Expression evaluator
///
/// Expressions evaluate strictly left to right with no operator
/// precedence; `1+2*3` is `9`. Grouping is only via paren-blocks,
/// which double as statement sequences (§ the block rules below).

/// A byte cursor over one segment. Reaching the end reads as byte 0,
/// which every dispatch treats as a terminator.
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Cursor<'a> {
        Cursor { text, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    pub fn peek(&self) -> u8 {
        *self.text.as_bytes().get(self.pos).unwrap_or(&0)
    }

    pub fn peek_at(&self, offset: usize) -> u8 {
        *self.text.as_bytes().get(self.pos + offset).unwrap_or(&0)
    }

    pub fn bump(&mut self) {
        if self.pos < self.text.len() {
            self.pos += 1;
        }
    }

    pub fn skip_blank(&mut self) {
        while self.peek() == b' ' || self.peek() == b'\t' {
            self.pos += 1;
        }
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }
}

/// The characters that may begin a primary; used to tell unary `-`
/// and the `'` seed form from their bare readings.
fn is_primary_starter(ch: u8) -> bool {
    ch.is_ascii_digit()
        || Var::is_name(ch)
        || matches!(ch, b'(' | b'@' | b'?' | b'\'' | b'#' | b'$')
}

/// Every character with an operator reading, unary forms included.
fn is_operator_char(ch: u8) -> bool {
    matches!(
        ch,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'^' | b'&' | b'|' | b'<' | b'>' | b'=' | b'!'
    )
}

/// The binary operators the left-to-right chain consumes.
fn is_binary_operator(ch: u8) -> bool {
    matches!(
        ch,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'^' | b'&' | b'|' | b'<' | b'>' | b'='
    )
}

/// The operators eligible for the self-referential shorthand
/// (`V op expr` meaning `V = V op expr`); `=` is not among them.
pub(crate) fn is_self_ref_operator(ch: u8) -> bool {
    matches!(
        ch,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'^' | b'&' | b'|' | b'<' | b'>'
    )
}

impl<H: Host> Runtime<H> {
    pub(crate) fn eval(&mut self, c: &mut Cursor) -> Val {
        let left = self.primary(c);
        self.eval_chain(c, left)
    }

    /// Continues the operator chain with `left` already in hand. The
    /// self-referential forms enter here directly so their right-hand
    /// side evaluates exactly once.
    pub(crate) fn eval_chain(&mut self, c: &mut Cursor, mut left: Val) -> Val {
        loop {
            c.skip_blank();
            let op = c.peek();
            if op == 0 || op == b')' || op == b';' || op == b',' {
                break;
            }
            if !is_binary_operator(op) {
                break;
            }
            c.bump();
            let right = self.primary(c);
            left = match op {
                b'+' => Operation::sum(left, right),
                b'-' => Operation::subtract(left, right),
                b'*' => Operation::multiply(left, right),
                b'/' => match Operation::divide(left, right) {
                    Ok(val) => val,
                    Err(error) => {
                        self.report(error);
                        Val::Number(0.0)
                    }
                },
                b'%' => match Operation::modulo(left, right) {
                    Ok(val) => val,
                    Err(error) => {
                        self.report(error);
                        Val::Number(0.0)
                    }
                },
                b'^' => Operation::power(left, right),
                b'&' => Operation::and(left, right),
                b'|' => Operation::or(left, right),
                b'<' => Operation::less(left, right),
                b'>' => Operation::greater(left, right),
                b'=' => Operation::equal(left, right),
                _ => Val::Number(0.0),
            };
        }
        left
    }

    pub(crate) fn primary(&mut self, c: &mut Cursor) -> Val {
        c.skip_blank();

        if c.peek() == b'-' && is_primary_starter(c.peek_at(1)) {
            c.bump();
            let val = self.primary(c);
            return Operation::negate(val);
        }

        if c.peek() == b'!' {
            c.bump();
            let val = self.primary(c);
            return Operation::not(val);
        }

        if c.peek() == b'$' {
            c.bump();
            c.skip_blank();
            if let Some(index) = Var::index_of(c.peek()) {
                c.bump();
                return self.get_var(index).flip();
            }
            // a stray `$` is skipped and parsing carries on
        }

        if c.peek() == b'(' {
            return self.paren_block(c);
        }

        if c.peek() == b'"' {
            c.bump();
            let start = c.pos();
            while c.peek() != b'"' && c.peek() != 0 {
                if c.peek() == b'\\' && c.peek_at(1) != 0 {
                    c.bump();
                }
                c.bump();
            }
            let text = c.slice(start, c.pos());
            if c.peek() == b'"' {
                c.bump();
            }
            return Val::String(text.into());
        }

        if c.peek() == b'\'' {
            c.bump();
            c.skip_blank();
            if is_primary_starter(c.peek()) {
                let seed = self.primary(c);
                self.rng.seed(seed.number() as i64);
                return Val::Number(0.0);
            }
            return Val::Number(self.rng.next());
        }

        if c.peek() == b':' {
            c.bump();
            return Val::Number(f64::from(self.host_mut().poll_key()));
        }

        if c.peek() == b'?' {
            c.bump();
            let prompt = if self.repl { "> " } else { "" };
            let line = self.host_mut().read_line(prompt);
            return Val::String(line.into());
        }

        if c.peek() == b'#' {
            c.bump();
            return Val::Number(self.cursor as f64);
        }

        if c.peek() == b'@' {
            c.bump();
            let index = self.primary(c);
            return Val::Number(self.vars.array_fetch(index.number() as i64));
        }

        if c.peek().is_ascii_lowercase() {
            let start = c.pos();
            while c.peek().is_ascii_lowercase() || c.peek().is_ascii_digit() {
                c.bump();
            }
            let name = c.slice(start, c.pos());
            c.skip_blank();
            let args = if c.peek() == b'(' {
                c.bump();
                self.parse_args(c)
            } else {
                vec![]
            };
            if is_host_function(name) {
                return self.call_host(name, &args);
            }
            let nums: Vec<f64> = args.iter().map(|val| val.number()).collect();
            return match Function::call(name, &nums) {
                Ok(val) => val,
                Err(error) => {
                    self.report(error);
                    Val::Undefined
                }
            };
        }

        if let Some(index) = Var::index_of(c.peek()) {
            c.bump();
            return self.get_var(index);
        }

        if c.peek().is_ascii_digit() || c.peek() == b'.' {
            let (num, end) = scan_number(c.bytes(), c.pos());
            c.set_pos(end);
            return Val::Number(num);
        }

        // anything else reads as 0 and is left for the caller
        Val::Number(0.0)
    }

    /// A comma-separated argument list, the opening paren already
    /// consumed. At most `MAX_FUNC_ARGS` are kept; the rest are
    /// evaluated and dropped.
    fn parse_args(&mut self, c: &mut Cursor) -> Vec<Val> {
        let mut args = vec![];
        loop {
            c.skip_blank();
            if c.peek() == b')' || c.peek() == 0 {
                break;
            }
            let before = c.pos();
            let val = self.eval(c);
            if args.len() < MAX_FUNC_ARGS {
                args.push(val);
            }
            c.skip_blank();
            if c.peek() == b',' {
                c.bump();
            } else if c.pos() == before {
                // a byte no argument can start; step over it
                c.bump();
            }
        }
        if c.peek() == b')' {
            c.bump();
        }
        args
    }

    /// A paren-block: items separated by `;` or `,`, the block's value
    /// being the last item's. Items led by a variable name carry the
    /// assignment readings; the explicit `V = expr` form flips between
    /// assignment and equality on whether a separator follows.
    fn paren_block(&mut self, c: &mut Cursor) -> Val {
        c.bump();
        let mut last = Val::Undefined;
        loop {
            c.skip_blank();
            if c.peek() == b')' || c.peek() == 0 {
                break;
            }
            last = self.block_item(c);
            c.skip_blank();
            if c.peek() == b';' || c.peek() == b',' {
                c.bump();
                continue;
            }
            break;
        }
        c.skip_blank();
        if c.peek() == b')' {
            c.bump();
        }
        match last {
            Val::Undefined => Val::Number(0.0),
            val => val,
        }
    }

    fn block_item(&mut self, c: &mut Cursor) -> Val {
        if let Some(index) = Var::index_of(c.peek()) {
            let mut ahead = 1;
            while c.peek_at(ahead) == b' ' || c.peek_at(ahead) == b'\t' {
                ahead += 1;
            }
            let next = c.peek_at(ahead);

            if next == b'=' {
                let current = self.get_var(index);
                c.bump();
                c.skip_blank();
                c.bump();
                let rhs = self.eval(c);
                c.skip_blank();
                if c.peek() == b';' || c.peek() == b',' {
                    self.set_var(index, rhs);
                    return self.vars.fetch(index);
                }
                return Operation::block_equal(&current, &rhs);
            }

            if is_self_ref_operator(next) {
                let current = self.get_var(index);
                c.bump();
                let full = self.eval_chain(c, current);
                c.skip_blank();
                if c.peek() == b';' || c.peek() == b',' {
                    self.set_var(index, full);
                    return self.vars.fetch(index);
                }
                return full;
            }

            let ends_item = matches!(next, 0 | b')' | b';' | b',');
            if !ends_item && !is_operator_char(next) {
                c.bump();
                c.skip_blank();
                let val = self.eval(c);
                self.set_var(index, val);
                return self.vars.fetch(index);
            }
        }
        self.eval(c)
    }
}
