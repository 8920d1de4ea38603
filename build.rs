use clap::CommandFactory;
use std::fs;
use std::path::PathBuf;

include!("src/cli.rs");

fn main() -> std::io::Result<()> {
    // Render the man page next to the build artifacts.
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("../../../man");
    fs::create_dir_all(&man_dir)?;

    let man = clap_mangen::Man::new(Cli::command());
    let mut rendered = Vec::new();
    man.render(&mut rendered)?;
    fs::write(man_dir.join("scattersum.1"), rendered)?;

    Ok(())
}
