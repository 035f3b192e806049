use qascore_core::normalize::{normalize, tokenize};

use crate::cli::args::NormalizeArgs;
use crate::exit_codes;

pub fn run(args: NormalizeArgs) -> i32 {
    println!("{}", normalize(&args.text));
    println!("{:?}", tokenize(&args.text));
    exit_codes::OK
}
