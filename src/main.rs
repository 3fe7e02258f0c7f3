use githooks::cli::run;

fn main() {
    std::process::exit(run());
}
