fn main() {
    jtsbuild::cmd::run();
}
