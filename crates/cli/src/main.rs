//! share-average - Weighted average share price calculator.

fn main() -> std::process::ExitCode {
    share_average_cli::cmd::main()
}
