mod term;

fn main() {
    term::main();
}
