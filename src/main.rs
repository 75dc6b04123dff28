//! rattendance main entrypoint.

use rattendance::run;

fn main() {
    if let Err(e) = run() {
        rattendance::ui::messages::error(format!("{}", e));
        std::process::exit(1);
    }
}
