use std::io;
use std::process::ExitCode;

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod table;
use table::Table;

fn main() -> ExitCode {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let rng = ChaCha8Rng::from_entropy();

    let mut table = Table::new(stdin.lock(), stdout.lock(), rng);
    match table.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("game aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
