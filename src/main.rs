fn main() -> anyhow::Result<()> {
    collect_includes::app::run()
}
