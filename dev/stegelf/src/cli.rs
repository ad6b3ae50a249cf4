use std::path::PathBuf;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct StegelfArgs {
    /// Log more (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The command to run
    #[command(subcommand)]
    pub command: StegelfCommand,
}

#[derive(Subcommand, Debug)]
pub enum StegelfCommand {
    /// Hide a relocatable object inside an image
    Insert {
        /// The carrier image
        image: PathBuf,
        /// The object file to hide
        object: PathBuf,
        /// Where to write the new image (defaults to <IMAGE>.stegelf.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the functions carried by an image
    Symbols { image: PathBuf },
    /// Extract the object carried by an image and call one of its functions
    Run {
        image: PathBuf,
        #[command(subcommand)]
        function: Demo,
    },
}

#[derive(Subcommand, Debug)]
pub enum Demo {
    /// Call `int fib(int n)`
    Fib { n: i32 },
    /// Call `void mergeSort(int *arr, int lo, int hi)` over the whole list
    MergeSort {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
    },
}
