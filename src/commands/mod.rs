pub mod init;
pub mod run;

pub use init::{generate_config_template, run_init, run_init_impl};
pub use run::{ConsoleListener, run_bench, run_bench_impl};

use crate::error::BenchError;
use crate::{EXIT_CONFIG_ERROR, EXIT_FAILURE};

/// Exit code for an error that aborted a command.
pub(crate) const fn exit_code_for(error: &BenchError) -> i32 {
    if error.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_FAILURE
    }
}
