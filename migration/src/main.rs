use migration::runner::{self, Command};
use util::config;

#[tokio::main]
async fn main() {
    let arg = std::env::args().nth(1);
    let command = match Command::parse(arg.as_deref()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = runner::run(command, &config::database_path()).await {
        eprintln!("Migration failed: {err}");
        std::process::exit(1);
    }
}
