mod cli;
mod error;
mod logger;
mod picture;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use cli::{Demo, StegelfArgs, StegelfCommand};
use error::ToolError;
use log::info;
use picture::Picture;
use stegelf::ObjectFile;

fn main() -> ExitCode {
    let StegelfArgs { verbose, command } = StegelfArgs::parse();
    logger::init_logger(verbose);

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("stegelf: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(command: StegelfCommand) -> Result<(), ToolError> {
    match command {
        StegelfCommand::Insert { image, object, output } => {
            let output = output.unwrap_or_else(|| default_output(&image));
            insert(&image, &object, &output)
        }
        StegelfCommand::Symbols { image } => symbols(&image),
        StegelfCommand::Run { image, function } => call(&image, function),
    }
}

fn default_output(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("image"));
    image.with_file_name(format!("{}.stegelf.png", stem))
}

fn insert(image: &Path, object: &Path, output: &Path) -> Result<(), ToolError> {
    picture::check_lossless(output)?;

    let object = ObjectFile::open(object)?;
    let mut carrier = Picture::open(image)?;
    object.embed_into(&mut carrier, output)?;

    println!("wrote {} ({} byte object)", output.display(), object.len());
    Ok(())
}

fn symbols(image: &Path) -> Result<(), ToolError> {
    let object = ObjectFile::from_image(&Picture::open(image)?)?;
    for (name, symbol) in object.functions() {
        println!(
            "{:#06x} {:>6} {}",
            symbol.value(),
            symbol.size(),
            String::from_utf8_lossy(name)
        );
    }
    Ok(())
}

fn call(image: &Path, function: Demo) -> Result<(), ToolError> {
    let object = ObjectFile::from_image(&Picture::open(image)?)?;
    info!("loaded {} byte object from {}", object.len(), image.display());

    match function {
        Demo::Fib { n } => {
            let address = object
                .lookup_function("fib")
                .ok_or(ToolError::MissingFunction("fib"))?;
            // SAFETY: the demo objects define `int fib(int n)` with the C ABI.
            let fib: extern "C" fn(i32) -> i32 = unsafe { address.cast() };
            println!("fib({}) = {}", n, fib(n));
        }
        Demo::MergeSort { mut values } => {
            let hi = i32::try_from(values.len().saturating_sub(1))
                .map_err(|_| ToolError::TooManyValues(values.len()))?;
            let address = object
                .lookup_function("mergeSort")
                .ok_or(ToolError::MissingFunction("mergeSort"))?;
            // SAFETY: the demo objects define
            // `void mergeSort(int *arr, int lo, int hi)` with the C ABI, and
            // `hi` is the last valid index of `values`.
            let merge_sort: extern "C" fn(*mut i32, i32, i32) = unsafe { address.cast() };
            merge_sort(values.as_mut_ptr(), 0, hi);

            let sorted: Vec<String> = values.iter().map(i32::to_string).collect();
            println!("sorted: {}", sorted.join(", "));
        }
    }

    Ok(())
}
