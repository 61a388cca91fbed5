//! Tests for command line parsing and rendering

use clap::Parser;
use rstest::rstest;

use sternbrocot::cli::commands::render_tree;
use sternbrocot::cli::{Cli, Commands};
use sternbrocot::config::OutputFormat;
use sternbrocot::domain::{Fraction, Tree};

#[rstest]
fn given_tree_args_when_parsing_then_fractions_are_typed() {
    let cli = Cli::try_parse_from([
        "sternbrocot", "tree", "-n", "4", "--left", "1/3", "--right", "1/2", "-f", "levels",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::Tree {
            depth,
            left,
            right,
            format,
        }) => {
            assert_eq!(depth, Some(4));
            assert_eq!(left, Some(Fraction::new(1, 3)));
            assert_eq!(right, Some(Fraction::new(1, 2)));
            assert_eq!(format, Some(OutputFormat::Levels));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[rstest]
fn given_negative_depth_when_parsing_then_accepted_for_domain_validation() {
    let cli = Cli::try_parse_from(["sternbrocot", "tree", "--depth", "-1"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Tree { depth: Some(-1), .. })));
}

#[rstest]
#[case(&["sternbrocot", "fraction", "x/y"])]
#[case(&["sternbrocot", "mediant", "1/2"])]
#[case(&["sternbrocot", "tree", "--format", "sideways"])]
fn given_bad_args_when_parsing_then_errors(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
fn given_debug_flags_when_parsing_then_counts() {
    let cli = Cli::try_parse_from(["sternbrocot", "-d", "-d", "series"]).unwrap();
    assert_eq!(cli.debug, 2);
}

#[rstest]
fn given_depth_one_tree_when_rendering_all_formats_then_consistent() {
    let tree = Tree::with_depth(1).unwrap();
    assert_eq!(render_tree(&tree, OutputFormat::List), "0/1, 1/1, 1/0");
    assert_eq!(render_tree(&tree, OutputFormat::Levels), "0: 0/1 1/0\n1: 1/1");
    assert!(render_tree(&tree, OutputFormat::Tree).contains("1/1"));
}
