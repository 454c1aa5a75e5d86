//! taxiledger main entrypoint.

use taxiledger::run;
use taxiledger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
