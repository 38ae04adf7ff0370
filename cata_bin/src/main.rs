use std::env;

use cata::rose;
use cata::{cata, list, nat};
use miette::miette;

mod checks;
mod report;

use checks::{print_help, Group};
use report::Report;

fn run(group: Group, report: &mut Report) {
    match group {
        Group::Nat => {
            let one = nat::from_depth(1);
            report.expect("nat depth 1", Some(1), one.map(|n| n.cata(&mut nat::depth)));
            let four = nat::from_depth(4);
            report.expect("nat depth 4", Some(4), four.map(|n| cata(nat::depth, &n)));
            report.expect("nat value 3", 3, nat::from_value(3).cata(&mut nat::value));
        }
        Group::List => {
            let items = list::from_iter([1, 2, 3, 4]);
            report.expect("list sum [1,2,3,4]", Some(10), items.map(|l| l.cata(&mut list::sum)));
            let single = list::from_iter([1]);
            report.expect("list sum [1]", Some(1), single.map(|l| l.cata(&mut list::sum)));
        }
        Group::Tree => {
            report.expect("tree sum", 6, rose::example().cata(&mut rose::sum));
            report.expect("tree sum leaf", 0, rose::leaf(0).cata(&mut rose::sum));
            report.expect("tree size", 5, rose::example().cata(&mut rose::size));
        }
        Group::Order => {
            let tree = rose::example();
            let rendered = tree.cata(&mut rose::render);
            report.expect("order render", "1(2(0),3(0))".to_string(), rendered.clone());
            report.expect("order repeatable", rendered, tree.cata(&mut rose::render));
        }
        Group::Purity => {
            let tree = rose::example();
            let before = tree.clone();
            let first = tree.cata(&mut rose::sum);
            report.expect("purity same result", first, tree.cata(&mut rose::sum));
            report.expect("purity same tree", before, tree);
        }
        Group::Errors => {
            if let Some(items) = list::from_iter([1u64, 2, 3, 4]) {
                report.expect_ok("errors checked list sum", 10, list::checked_sum(&items));
            }

            let overflowing = rose::node(
                0,
                [
                    rose::node(1, [rose::leaf(u64::MAX)]),
                    rose::node(2, [rose::leaf(u64::MAX)]),
                ],
            );
            let collected = rose::checked_sum(&overflowing).map_err(|errs| errs.0.len());
            report.expect("errors collected per subtree", Err(2), collected);
        }
    }
}

fn main() -> miette::Result<()> {
    let mut groups: Vec<Group> = Vec::new();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-v" | "--version" => {
                println!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            option => match option.strip_prefix("--").map(str::parse::<Group>) {
                Some(Ok(group)) => groups.push(group),
                _ => {
                    print_help();
                    return Err(miette!("Unexpected option \"{option}\""));
                }
            },
        };
    }

    if groups.is_empty() {
        groups.extend_from_slice(Group::ALL);
    }
    groups.sort();
    groups.dedup();

    let mut report = Report::default();
    for group in groups {
        println!("-- {group}");
        run(group, &mut report);
    }

    let passed = report.finish()?;
    println!("{passed} checks passed");
    Ok(())
}
