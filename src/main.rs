use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::Isolation;

fn main() {
    env_logger::init();
    #[cfg(feature = "instrumentation")]
    isolation::instrumentation::init_tracing();

    Isolation::from_args().execute();

    #[cfg(feature = "instrumentation")]
    isolation::instrumentation::print_timing_statistics();
}
