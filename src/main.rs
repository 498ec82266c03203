//! tasclock main entrypoint.

use tasclock::run;
use tasclock::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
