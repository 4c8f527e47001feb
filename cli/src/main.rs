mod args;

use anyhow::Context;
use args::{Args, USAGE};
use boardtables::{Tables, emit, encode};
use std::{
    env, fs,
    io::{self, Write},
    path::Path,
    process::ExitCode,
    time::Instant,
};

fn main() -> ExitCode {
    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(error) => {
            eprintln!("error: {}", error);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let start = Instant::now();
    let tables = Tables::build();
    let blocks = args.blocks();
    let text = emit::render(&blocks, &tables, &args.emit_options())?;
    info(args, format_args!(
        "info rendered {} blocks in {}ms",
        blocks.len(),
        start.elapsed().as_millis()
    ));

    match &args.output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("failed to write {}", path.display()))?;
            info(args, format_args!("info wrote {}", path.display()));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .context("failed to write to stdout")?;
        }
    }

    if let Some(dir) = &args.blob_dir {
        write_blobs(args, &tables, dir)?;
    }
    Ok(())
}

fn write_blobs(args: &Args, tables: &Tables, dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    for &feature in args.selected_features() {
        let path = dir.join(format!("{}.bin", feature.name()));
        fs::write(&path, encode::bitboard_bytes(tables.get(feature)))
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    info(args, format_args!(
        "info wrote {} blobs to {}",
        args.selected_features().len(),
        dir.display()
    ));
    Ok(())
}

fn info(args: &Args, message: std::fmt::Arguments<'_>) {
    if !args.quiet {
        eprintln!("{}", message);
    }
}
