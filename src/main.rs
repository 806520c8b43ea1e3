use std::process::ExitCode;

use nmq_search::search::StdoutLogger;
use nmq_search::{run_sweep, SearchConfig};

fn main() -> ExitCode {
    let config = match SearchConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("usage: nmq-search [b=N] [h=N] [v=N] [i=N] [s=N] [debug=on|off]");
            return ExitCode::from(2);
        }
    };

    let mut rng = rand::thread_rng();
    run_sweep(&config, &mut rng, &StdoutLogger);
    ExitCode::SUCCESS
}
