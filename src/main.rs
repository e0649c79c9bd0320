//! rsleepchart main entrypoint.

use rsleepchart::run;
use rsleepchart::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
