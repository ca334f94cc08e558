use crate::cli::{Cli, Commands, DropletsCommand, ImagesCommand};

use clap::Parser;

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_accepted() {
    let cli = Cli::try_parse_from([
        "do-cli", "droplets", "list", "--json", "--token", "tok", "--base-url", "http://x", "-v",
    ])
    .expect("parse");

    assert!(cli.global.json);
    assert!(cli.global.verbose);
    assert_eq!(cli.global.token.as_deref(), Some("tok"));
    assert_eq!(cli.global.base_url.as_deref(), Some("http://x"));
    assert!(matches!(
        cli.command,
        Commands::Droplets {
            command: DropletsCommand::List { tag: None, .. }
        }
    ));
}

#[test]
fn given_tag_and_paging_flags_when_droplets_list_parsed_then_captured() {
    let cli = Cli::try_parse_from([
        "do-cli", "droplets", "list", "--tag", "web", "--page", "2", "--per-page", "50",
    ])
    .expect("parse");

    let Commands::Droplets {
        command: DropletsCommand::List {
            tag,
            page,
            per_page,
        },
    } = cli.command
    else {
        panic!("Expected droplets list");
    };

    assert_eq!(tag.as_deref(), Some("web"));
    assert_eq!(page, Some(2));
    assert_eq!(per_page, Some(50));
}

/// **VALUE**: `--tags a,b` and repeated `--tags` both produce an ordered list.
///
/// **BUG THIS CATCHES**: Would catch the value delimiter being dropped, which would send a
/// single tag named `a,b` to the API.
#[test]
fn given_comma_separated_tags_when_parsed_then_split_in_order() {
    // GIVEN / WHEN
    let cli = Cli::try_parse_from([
        "do-cli", "droplets", "create", "--name", "web", "--region", "nyc3", "--size",
        "s-1vcpu-1gb", "--image", "ubuntu-24-04-x64", "--tags", "a,b", "--tags", "c",
    ])
    .expect("parse");

    // THEN
    let Commands::Droplets {
        command: DropletsCommand::Create(args),
    } = cli.command
    else {
        panic!("Expected droplets create");
    };
    assert_eq!(args.tags, vec!["a", "b", "c"]);
    assert!(!args.backups);
}

#[test]
fn given_create_without_image_when_parsed_then_error() {
    let result = Cli::try_parse_from([
        "do-cli", "droplets", "create", "--name", "web", "--region", "nyc3", "--size", "s",
    ]);

    assert!(result.is_err());
}

#[test]
fn given_non_numeric_id_when_parsed_then_error() {
    assert!(Cli::try_parse_from(["do-cli", "droplets", "get", "abc"]).is_err());
}

#[test]
fn given_power_off_subcommand_when_parsed_then_kebab_case_name() {
    let cli = Cli::try_parse_from(["do-cli", "droplets", "power-off", "42"]).expect("parse");

    assert!(matches!(
        cli.command,
        Commands::Droplets {
            command: DropletsCommand::PowerOff { id: 42 }
        }
    ));
}

#[test]
fn given_images_type_flag_when_parsed_then_mapped() {
    let cli = Cli::try_parse_from(["do-cli", "images", "list", "--type", "distribution", "--private"])
        .expect("parse");

    let Commands::Images {
        command: ImagesCommand::List {
            image_type,
            private,
        },
    } = cli.command
    else {
        panic!("Expected images list");
    };
    assert_eq!(image_type.as_deref(), Some("distribution"));
    assert!(private);
}
