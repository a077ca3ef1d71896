fn main() {
    rubbish::cli::main(rubbish::cli::WHEREIS);
}
