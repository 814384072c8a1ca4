fn main() -> anyhow::Result<()> {
    diag_filter::run()
}
