//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = paper_rater_cli::run() {
        #[expect(
            clippy::print_stderr,
            reason = "the binary reports fatal errors on stderr"
        )]
        {
            eprintln!("paper-rater: {err}");
        }
        std::process::exit(1);
    }
}
