fn main() {
    itl::term::main()
}
