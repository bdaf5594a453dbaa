//! Zen Den tracker entrypoint.

use zenden::run;
use zenden::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
