fn main() -> anyhow::Result<()> {
    spincube::app::run()
}
