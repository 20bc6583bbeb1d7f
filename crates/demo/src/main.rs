fn main() -> anyhow::Result<()> {
    forgecatalog_observability::init();

    let stdout = std::io::stdout();
    forgecatalog_demo::run(&mut stdout.lock())
}
