pub fn run() -> anyhow::Result<()> {
    print!("{}", banner());
    Ok(())
}

fn banner() -> String {
    format!(
        "dayplan {}\nExtractive summaries for planner notes and free text\n",
        env!("CARGO_PKG_VERSION")
    )
}
