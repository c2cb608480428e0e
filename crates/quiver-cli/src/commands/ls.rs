use crate::cli::LsArgs;
use crate::error::Result;
use quiver::ops;

pub fn run(args: LsArgs) -> Result<()> {
    for tag in ops::list_tags(&args.quiver_file)? {
        println!("{}", tag);
    }
    Ok(())
}
