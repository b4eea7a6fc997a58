use tvdb::run;

fn main() -> anyhow::Result<()> {
    // The client never overlaps requests; a current-thread runtime is all
    // the work there is.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run())
}
