fn main() -> anyhow::Result<()> {
    contact_book::cli::run()
}
