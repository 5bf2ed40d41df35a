//! Binary entrypoint that starts the session board server.

use std::process::ExitCode;

use session_board::start_session_board;

/// Start the HTTP server with configuration from the environment.
fn main() -> ExitCode {
    start_session_board::run()
}
