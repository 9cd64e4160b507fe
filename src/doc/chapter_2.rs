/*!
# Chapter 2: The REPL and the Screen

## The REPL

With no file argument, ITL starts its REPL. The prompt is the number
the next segment will get. Lines are appended to the program and the
new segments run immediately; jumps may land on any earlier line.
Every assignment echoes back as `< V = value`, and array writes as
`< @index = value`.

Lines starting with `:` command the interpreter itself:

| Command | Effect |
|---------|--------|
| `:help` `:syntax` `:screen` | help texts |
| `:vars` | print all defined cells |
| `:array` | print the first 20 array cells, then a summary |
| `:lines` | print the program, up to 50 segments |
| `:clear` | clear variables and array, keep the program |
| `:reset` | clear everything, program included |
| `:debug V` | show a cell's raw bytes in ASCII, hex, and decimal |
| `:exit` `:quit` | leave |

Unknown commands print a message and change nothing.

## The character grid

The screen builtins address a grid of character cells with 0-based
coordinates, eight colors (0-7), and the attributes normal, bold, and
reverse. `gotoxy(x,y)` moves the cursor and rejects out-of-range
coordinates by answering `0`. `putch(c)` writes a character code or a
whole string and answers the code it overwrote; `getch()` reads the
code under the cursor. `getw()`/`geth()` answer the grid size and
`clear()` wipes it.

## The pixel surface

`gopen(w,h)` opens a pixel surface. Drawing uses a one-pixel pen and
a solid brush, set by `gpen(r,g,b)` and `gbr(r,g,b)`: `gpixel`,
`gline`, `grect`/`gfillrect`, `gcircle`/`gfillcircle`, `gtext`.
Drawing is buffered; `grefresh()` asks the host to repaint.

## Mice and clocks

`gmx`/`gmy`/`gmb` answer the pixel pointer position and button mask
(1 left, 2 right, 4 middle); `gmclick` answers the last click once and
resets; `gmdrag(b)` answers whether button `b` is held while moving.
The `tm*` family is the same in character-cell coordinates, updated
while `:` polls the keyboard. `time` is the wall clock in whole
seconds, `ticks` counts milliseconds since start, and `elapsed`
counts milliseconds since its own previous call.
*/
