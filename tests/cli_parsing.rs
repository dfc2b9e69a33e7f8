use std::path::PathBuf;

use clap::Parser;
use issue_graph::cli::commands::export::{parse_repo_slug, ExportArgs};
use issue_graph::cli::{Cli, Commands};
use issue_graph::Config;

#[test]
fn test_parse_export_defaults() {
    let cli = Cli::try_parse_from(["issue-graph", "export"]).unwrap();
    assert!(!cli.json);
    assert!(cli.config.is_none());

    match cli.command {
        Commands::Export(args) => {
            assert!(args.repo.is_none());
            assert!(args.max_issues.is_none());
            assert!(args.page_size.is_none());
            assert!(args.output.is_none());
            assert!(args.relations_output.is_none());
            assert!(!args.no_comment_pagination);
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_export_with_overrides() {
    let cli = Cli::try_parse_from([
        "issue-graph",
        "export",
        "--repo",
        "rust-lang/rust",
        "--max-issues",
        "250",
        "--page-size",
        "50",
        "--output",
        "out/log.csv",
        "--relations-output",
        "out/rel.csv",
        "--no-comment-pagination",
        "--json",
    ])
    .unwrap();
    assert!(cli.json);

    let Commands::Export(args) = cli.command else {
        panic!("Wrong command");
    };
    assert_eq!(args.repo.as_deref(), Some("rust-lang/rust"));
    assert_eq!(args.max_issues, Some(250));
    assert_eq!(args.page_size, Some(50));
    assert_eq!(args.output, Some(PathBuf::from("out/log.csv")));
    assert_eq!(args.relations_output, Some(PathBuf::from("out/rel.csv")));
    assert!(args.no_comment_pagination);

    let mut config = Config::default();
    args.apply(&mut config).unwrap();
    assert_eq!(config.github.slug(), "rust-lang/rust");
    assert_eq!(config.fetch.max_issues, 250);
    assert_eq!(config.fetch.page_size, 50);
    assert!(!config.fetch.paginate_comments);
    assert_eq!(config.output.relations_path, PathBuf::from("out/rel.csv"));
}

#[test]
fn test_export_overrides_are_validated() {
    let args = ExportArgs {
        page_size: Some(500),
        ..ExportArgs::default()
    };
    let mut config = Config::default();
    assert!(args.apply(&mut config).is_err());
}

#[test]
fn test_parse_repo_slug() {
    assert_eq!(
        parse_repo_slug("metabase/metabase").unwrap(),
        ("metabase".to_string(), "metabase".to_string())
    );
    assert!(parse_repo_slug("metabase").is_err());
    assert!(parse_repo_slug("/metabase").is_err());
    assert!(parse_repo_slug("a/b/c").is_err());
}

#[test]
fn test_parse_relations_with_global_config() {
    let cli = Cli::try_parse_from([
        "issue-graph",
        "relations",
        "--input",
        "log.csv",
        "-o",
        "rel.csv",
        "--config",
        "custom.yaml",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));

    let Commands::Relations(args) = cli.command else {
        panic!("Wrong command");
    };
    assert_eq!(args.input, Some(PathBuf::from("log.csv")));
    assert_eq!(args.output, Some(PathBuf::from("rel.csv")));
}

#[test]
fn test_parse_refs() {
    let cli = Cli::try_parse_from(["issue-graph", "refs", "dup of #12"]).unwrap();
    let Commands::Refs(args) = cli.command else {
        panic!("Wrong command");
    };
    assert_eq!(args.text, "dup of #12");
}

#[test]
fn test_refs_requires_text() {
    assert!(Cli::try_parse_from(["issue-graph", "refs"]).is_err());
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["issue-graph", "import"]).is_err());
}
