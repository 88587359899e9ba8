#![allow(dead_code)]

use crate::areas::repository::Repository;
use anyhow::Result;
use std::path::Path;

mod areas;
mod artifacts;
mod commands;

fn main() -> Result<()> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let pwd = std::env::current_dir()?;

    run(&args, &pwd)
}

/// Dispatch one command against the repository in `pwd`
///
/// Every defined outcome, user errors included, prints to standard output
/// and exits with status 0; only internal I/O failures propagate out.
fn run(args: &[String], pwd: &Path) -> Result<()> {
    let Some(command) = args.first() else {
        println!("Please enter a command.");
        return Ok(());
    };

    if command == "init" {
        if !operand_count_matches(args, 1) {
            return Ok(());
        }
        return Repository::init(pwd, Box::new(std::io::stdout()));
    }

    if !Repository::exists(pwd) {
        println!("Not in an initialized Gitlet directory.");
        return Ok(());
    }

    let mut repository = Repository::open(pwd, Box::new(std::io::stdout()))?;

    match command.as_str() {
        "add" => {
            if operand_count_matches(args, 2) {
                repository.add(&args[1])?;
            }
        }
        "commit" => {
            if operand_count_matches(args, 2) {
                repository.commit(&args[1])?;
            }
        }
        "rm" => {
            if operand_count_matches(args, 2) {
                repository.rm(&args[1])?;
            }
        }
        "log" => {
            if operand_count_matches(args, 1) {
                repository.log()?;
            }
        }
        "global-log" => {
            if operand_count_matches(args, 1) {
                repository.print_global_log()?;
            }
        }
        "find" => {
            if operand_count_matches(args, 2) {
                repository.find(&args[1])?;
            }
        }
        "status" => {
            if operand_count_matches(args, 1) {
                repository.status()?;
            }
        }
        "branch" => {
            if operand_count_matches(args, 2) {
                repository.branch(&args[1])?;
            }
        }
        "rm-branch" => {
            if operand_count_matches(args, 2) {
                repository.rm_branch(&args[1])?;
            }
        }
        "checkout" => dispatch_checkout(&mut repository, &args[1..])?,
        "reset" => {
            if operand_count_matches(args, 2) {
                repository.reset(&args[1])?;
            }
        }
        "merge" => {
            if operand_count_matches(args, 2) {
                repository.merge(&args[1])?;
            }
        }
        _ => println!("No command with that name exists."),
    }

    Ok(())
}

fn operand_count_matches(args: &[String], expected: usize) -> bool {
    if args.len() != expected {
        println!("Incorrect operands.");
        return false;
    }

    true
}

/// Tell the three checkout forms apart by their operand shape
fn dispatch_checkout(repository: &mut Repository, operands: &[String]) -> Result<()> {
    match operands {
        [separator, file] if separator == "--" => repository.checkout_file_from_head(file),
        [commit, separator, file] if separator == "--" => {
            repository.checkout_file_from_commit(commit, file)
        }
        [branch] => repository.checkout_branch(branch),
        _ => {
            println!("Incorrect operands.");
            Ok(())
        }
    }
}
