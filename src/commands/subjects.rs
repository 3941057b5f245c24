//! Implementation of the `ciftify-env subjects` command.

use crate::cli::SubjectsArgs;
use crate::error::Result;
use crate::fs::list_subjects;

/// Print subject names under the root, one per line, sorted.
pub fn cmd_subjects(args: SubjectsArgs) -> Result<()> {
    for subject in sorted_subjects(&args)? {
        println!("{}", subject);
    }

    Ok(())
}

fn sorted_subjects(args: &SubjectsArgs) -> Result<Vec<String>> {
    let mut subjects = list_subjects(&args.root, args.filter.as_deref())?;
    subjects.sort();
    Ok(subjects)
}
