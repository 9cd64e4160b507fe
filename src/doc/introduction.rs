/*!
# Introductory Tutorial for ITL

Begin by opening a terminal and running the executable. If you get the
following, you have achieved success and are ready for this tutorial.
Type `:exit` to leave ITL.
<pre><code>&nbsp;  ITL (Incredibly Tiny Language) REPL v0.5.0
&nbsp;1> █
</code></pre>

Stop a running program with CTRL-C.

ITL is tiny on purpose. There are 27 variables, named `A` through `Z`
plus `_`. There is one array. Almost every statement is an assignment,
and the prompt shows the line number your next statement will get.
For this tutorial, I'll mark lines that you type with a "`>`".

<pre><code>&nbsp;> ?"Hello, World!\n"
&nbsp;  Hello, World!
</code></pre>

The `?` statement prints. Strings decode their escapes when printed,
so `\n` above became a real line break. Assignments are just as short:

<pre><code>&nbsp;> A=5
&nbsp;  &lt; A = 5
&nbsp;> ?A*2+1
&nbsp;  11
</code></pre>

The REPL echoes every assignment back with a leading `<` so you can
watch your program's state change. Note the result of `A*2+1`: there
is no operator precedence in ITL. Expressions evaluate strictly left
to right, so `1+2*3` is `9`, not `7`. Use parentheses when you mean
something else.

Every line you type is appended to the program, and jumping to a line
re-runs it. The jump statement assigns to `#`, the line counter:

<pre><code>&nbsp;> N=1
&nbsp;> ?N+"\n"
&nbsp;> N+1
&nbsp;> #=(N&lt;11)*2
</code></pre>

Line 4 is the whole of ITL's control flow: `(N<11)` is `1` or `0`, so
the jump target is line `2` while `N` is small and line `0` once it is
not. A jump to `0` ends the program. Counting `N+1` on line 3 shows
the self-referential shorthand: a variable followed by an operator
means "update me", so `N+1` is `N=N+1`.

When you are curious about the machine under your program, the REPL
commands starting with `:` will show you everything; `:help` lists
them. Continue with [Chapter 1](../__Chapter_1/index.html) for the
full language.
*/
