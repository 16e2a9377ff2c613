//! Implementation of `pillar status`.

use std::{path::PathBuf, process::ExitCode};

use pillar_config::{global_config_path, is_global_config};

use crate::cli::{
    context::CommandContext,
    output::{dim, format_path_for_display, header, new_table, rule, subheader, warning},
};

/// Shows configuration files, the posts file, catalog, rules and effective settings.
pub fn run(ctx: &CommandContext) -> Result<ExitCode, ExitCode> {
    let cwd = &ctx.cwd;
    let home: Option<PathBuf> = global_config_path().and_then(|p| p.parent().map(PathBuf::from));

    println!("{}", header("Configuration"));
    println!();

    let config_files = &ctx.config.sources;
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("pillar init")
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", subheader("Config files (highest precedence first):"));
    for path in config_files {
        let display_path = format_path_for_display(path, Some(cwd), home.as_deref());
        if is_global_config(path) {
            println!("  {display_path} {}", dim("(global)"));
        } else {
            println!("  {display_path}");
        }
    }
    println!();

    let config = &ctx.config;

    println!("{}", subheader("Posts:"));
    match config.settings.posts {
        Some(ref path) => {
            let display_path = format_path_for_display(path, Some(cwd), home.as_deref());
            if path.is_file() {
                println!("  {display_path}");
            } else {
                println!("  {display_path} {}", warning("[missing]"));
            }
        }
        None => println!("  {}", dim("(not configured)")),
    }
    println!();

    let linker = &config.linker;
    println!("{}", subheader("Targets:"));
    if linker.targets.is_empty() {
        println!("  {}", dim("(none defined)"));
    } else {
        let mut table = new_table(vec!["#", "Slug", "Title", "Keywords"]);
        for (i, target) in linker.targets.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                target.slug.clone(),
                target.title.clone(),
                target.keywords.len().to_string(),
            ]);
        }
        println!("{table}");
    }
    println!();

    println!("{}", subheader("Fallback:"));
    if linker.fallback.is_empty() {
        println!("  {}", dim("(none)"));
    }
    for (i, slug) in linker.fallback.iter().enumerate() {
        println!("  {}. {slug}", i + 1);
    }
    println!();

    let classifier = &config.classifier;
    println!("{}", subheader("Rules (first match wins):"));
    if classifier.rules.is_empty() {
        println!("  {}", dim("(none defined)"));
    } else {
        let mut table = new_table(vec!["#", "Category", "Keywords"]);
        for (i, category_rule) in classifier.rules.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                category_rule.category.clone(),
                category_rule.keywords.join(", "),
            ]);
        }
        println!("{table}");
    }
    println!(
        "  {}",
        dim(&format!("default: {}", classifier.default_category))
    );
    println!();

    println!("{}", subheader("Effective settings:"));
    println!("{}", rule(40));
    print!("{}", config.settings_to_toml());
    println!("{}", rule(40));

    Ok(ExitCode::SUCCESS)
}
