mod command;
mod tui;

fn main() -> anyhow::Result<()> {
    command::run()
}
