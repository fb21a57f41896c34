mod command;
mod input;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
