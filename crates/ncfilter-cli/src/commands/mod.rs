pub mod compile;
pub mod loader;
pub mod modules;


/// Report a command failure and exit.
pub fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
