use clap::{CommandFactory, Parser};

use crate::cli::{Args, Subcommand};

#[test]
fn test_cli_definition() {
    Args::command().debug_assert();
}

#[test]
fn test_parse_apply() {
    let args = Args::try_parse_from(["cubeturn", "apply", "R", "U", "R'", "U'", "--json"]).unwrap();
    assert!(args.prefs.is_none());
    match args.subcommand {
        Subcommand::Apply {
            algorithm,
            file,
            json,
            color,
        } => {
            assert_eq!(algorithm, ["R", "U", "R'", "U'"]);
            assert!(file.is_none());
            assert!(json);
            assert!(!color);
        }
        other => panic!("wrong subcommand: {other:?}"),
    }

    // an algorithm and a file at the same time is an error
    Args::try_parse_from(["cubeturn", "apply", "R", "--file", "-"]).unwrap_err();
}

#[test]
fn test_parse_global_prefs() {
    let args =
        Args::try_parse_from(["cubeturn", "scramble", "--prefs", "p.yaml", "-s", "abc", "-l", "10"])
            .unwrap();
    assert_eq!(args.prefs.as_deref(), Some(std::path::Path::new("p.yaml")));
    match args.subcommand {
        Subcommand::Scramble { seed, length, show } => {
            assert_eq!(seed.as_deref(), Some("abc"));
            assert_eq!(length, Some(10));
            assert!(!show);
        }
        other => panic!("wrong subcommand: {other:?}"),
    }
}
