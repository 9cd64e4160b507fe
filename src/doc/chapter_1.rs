/*!
# Chapter 1: The Language

## Segments

A program is a list of *segments*, numbered from 1. The splitter cuts
source text at top-level semicolons: a `;` inside parentheses or
inside a double-quoted string does not split. A physical line with no
semicolon is one segment. Blank segments are kept and do nothing.

## Values

A value is a number (IEEE double), a string of bytes, or undefined.
Fresh variables are undefined; reading one gives `0` as a number and
`"0"` as a string, after the forward-reference scan described below.
`$V` flips a value's type: numbers become their printed form, strings
become their parsed number.

## Statements

A segment dispatches on its first significant character:

| Lead | Meaning |
|------|---------|
| `:`  | REPL meta-command |
| `?`  | print the expression |
| `#`  | jump: set the line counter |
| base `@` index `= expr` | array write |
| variable | the assignment family |
| anything else | evaluate and discard |

The assignment family on a variable `V`:

* `V` alone makes the cell undefined again.
* `V = expr` assigns.
* `V op expr` (op a binary operator) means `V = V op expr`.
* `V expr` assigns too; the `=` is optional before a value.

## Expressions

Evaluation is strictly left to right with **no precedence**; grouping
is only via parentheses. The operators are `+ - * / % ^ & | < > =`,
all binding identically. `+` concatenates when either side is a
string. `&` and `|` are eager and answer `1` or `0`. Division or
modulo by zero reports a diagnostic and yields `0`. Unary `-` negates
and unary `!` answers `1` for zero, `0` otherwise.

## Paren-blocks

`( ... )` holds items separated by `;` or `,`; the block's value is
the last item's. Items led by a variable name read specially:

* `V = expr` followed by a separator assigns; as the **last** item it
  is instead an equality test answering `1` or `0`, leaving `V` alone.
* `V expr` assigns wherever it appears.
* `V op expr` assigns `V op expr` to `V` when a separator follows;
  as the last item it only computes the value.

So after `A=5`, the block `(A=5)` answers `1`, while `(A=7;)` sets
`A` and answers `7`. Conditional jumps are built from this:
`#=(cond)*target`.

## The forward reference

Reading a variable nobody has set yet makes the engine scan the rest
of the program for the first segment that starts with that variable's
name, execute it, and then carry on. A program can therefore print a
value before the line that computes it. The scan does not nest: a
second undefined read during the scan just answers the default.

## Input, randomness, the clock

`?` inside an expression reads a line from the keyboard as a string.
`:` inside an expression polls the keyboard without blocking and
answers the key code or `0`. `'` draws a uniform random number in
[0, 1); `'n` seeds the generator with the integer `n` and answers `0`.
The builtins `time`, `ticks`, and `elapsed` expose the clocks.
*/
