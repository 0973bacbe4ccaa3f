use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["lzscrape-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn scrape_defaults_to_one_page_and_env_output() {
    let cli = Cli::try_parse_from(["lzscrape-cli", "scrape", "whey"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Scrape {
            ref keyword,
            pages: 1,
            output: None,
            detach: false,
        }) if keyword == &["whey"]
    ));
}

#[test]
fn scrape_collects_multi_word_keyword() {
    let cli =
        Cli::try_parse_from(["lzscrape-cli", "scrape", "protein", "powder", "--pages", "5"])
            .unwrap();
    let Some(Commands::Scrape { keyword, pages, .. }) = cli.command else {
        panic!("expected scrape command");
    };
    assert_eq!(keyword.join(" "), "protein powder");
    assert_eq!(pages, 5);
}

#[test]
fn scrape_accepts_quoted_keyword_with_output_and_detach() {
    let cli = Cli::try_parse_from([
        "lzscrape-cli",
        "scrape",
        "protein powder",
        "-p",
        "3",
        "-o",
        "out/whey.csv",
        "--detach",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Scrape {
            ref keyword,
            pages: 3,
            output: Some(ref path),
            detach: true,
        }) if keyword == &["protein powder"] && path == &PathBuf::from("out/whey.csv")
    ));
}

#[test]
fn scrape_rejects_zero_pages() {
    let result = Cli::try_parse_from(["lzscrape-cli", "scrape", "whey", "--pages", "0"]);
    assert!(result.is_err());
}

#[test]
fn scrape_rejects_non_numeric_pages() {
    let result = Cli::try_parse_from(["lzscrape-cli", "scrape", "whey", "--pages", "five"]);
    assert!(result.is_err());
}

#[test]
fn scrape_requires_a_keyword() {
    let result = Cli::try_parse_from(["lzscrape-cli", "scrape"]);
    assert!(result.is_err());
}
