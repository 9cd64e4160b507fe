/*!
# Appendix A: Builtin Reference

## Mathematics

All arguments coerce to numbers; missing arguments are `0`. Unknown
names report a diagnostic and yield undefined.

| Name | Meaning |
|------|---------|
| `sin cos tan` | trigonometry (radians) |
| `asin acos atan atan2` | inverse trigonometry |
| `sinh cosh tanh` | hyperbolics |
| `exp log log2 log10` | exponential and logarithms |
| `sqrt cbrt pow hypot` | roots and powers |
| `ceil floor round trunc` | rounding |
| `abs fabs sign` | magnitude and sign |
| `fmod` | floating remainder |
| `max min fmax fmin` | extrema of two |
| `pi e` | constants; `()` optional |

## Screen

| Name | Meaning |
|------|---------|
| `gotoxy(x,y)` | move the cursor; `1`/`0` |
| `putch(c)` | write code or string; answers the old code |
| `getch()` | code under the cursor |
| `setfore(c) setback(c)` | colors 0-7 |
| `setattr(a)` | 0 normal, 1 bold, 2 reverse |
| `getw() geth()` | grid size |
| `clear()` | wipe the grid |

## Graphics

| Name | Meaning |
|------|---------|
| `gopen(w,h)` | open the surface (defaults 640x480) |
| `gclear()` | fill with the brush |
| `gpen(r,g,b) gbr(r,g,b)` | pen and brush colors |
| `gpixel(x,y) gline(x1,y1,x2,y2)` | points and lines |
| `grect gfillrect` | rectangle outline / filled |
| `gcircle gfillcircle` | circle outline / filled |
| `gtext(x,y,s)` | label |
| `grefresh()` | repaint |

## Mouse and timers

| Name | Meaning |
|------|---------|
| `gmx gmy gmb` | pixel pointer and button mask |
| `gmclick` | last click, consumed on read |
| `gmdrag(b)` | drag test for button `b` |
| `tmx tmy tmclick tmdrag` | cell-coordinate variants |
| `time` | wall clock, whole seconds |
| `ticks` | ms since start |
| `elapsed` | ms since the previous `elapsed` |
*/
