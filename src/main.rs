fn main() -> anyhow::Result<()> {
    event_finder::cli::run()
}
