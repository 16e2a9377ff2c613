//! Implementation of `pillar suggest`.

use std::process::ExitCode;

use pillar_core::{TopicTarget, contains_keyword, find_target, item_blob, score_targets};
use pillar_posts::Post;
use serde::Serialize;

use crate::cli::{
    args::SuggestCommand,
    context::{CommandContext, load_posts_or_failure},
    output::{dim, new_table, print_json, subheader, success},
};

/// Score of one target for the post.
#[derive(Serialize)]
struct TargetScore<'a> {
    /// Target slug.
    slug: &'a str,
    /// Number of keywords found.
    score: usize,
    /// The keywords found, in declared order.
    matched: Vec<&'a str>,
}

/// JSON output for `pillar suggest`.
#[derive(Serialize)]
struct JsonSuggestOutput<'a> {
    /// Slug of the post.
    slug: &'a str,
    /// Whether the post already carries the related section.
    already_linked: bool,
    /// Every candidate target, best first.
    scores: Vec<TargetScore<'a>>,
    /// Final selection, including fallback padding.
    selected: Vec<String>,
}

/// Shows how a post scores against the target catalog and what would be linked.
pub fn run(ctx: &CommandContext, cmd: &SuggestCommand) -> Result<ExitCode, ExitCode> {
    ctx.require_targets()?;
    let path = ctx.posts_path(cmd.posts.posts.as_deref())?;
    let posts = load_posts_or_failure(&path)?;

    let Some(post) = posts.iter().find(|p| p.slug() == cmd.slug) else {
        eprintln!("error: no post with slug '{}' in {}", cmd.slug, path.display());
        return Err(ExitCode::FAILURE);
    };

    let linker = &ctx.config.linker;
    let scores = target_scores(post, &linker.targets, linker.body_prefix_chars);
    let selected: Vec<String> = linker
        .selector()
        .select(post, post.slug())
        .into_iter()
        .filter(|slug| find_target(&linker.targets, slug).is_some())
        .collect();
    let already_linked = linker.section.is_present(post.content());

    if cmd.posts.json {
        return Ok(print_json(&JsonSuggestOutput {
            slug: post.slug(),
            already_linked,
            scores,
            selected,
        }));
    }

    println!("{} {}", subheader("Post:"), post.title());
    println!("  {}", dim(post.slug()));
    println!();

    let mut table = new_table(vec!["Target", "Score", "Matched keywords"]);
    for score in &scores {
        table.add_row(vec![
            score.slug.to_string(),
            score.score.to_string(),
            score.matched.join(", "),
        ]);
    }
    println!("{table}");
    println!();

    println!("{}", subheader("Selected:"));
    for (i, slug) in selected.iter().enumerate() {
        let source = if scores.iter().any(|s| s.slug == slug.as_str() && s.score > 0) {
            "keywords"
        } else {
            "fallback"
        };
        println!("  {}. {slug} {}", i + 1, dim(&format!("({source})")));
    }
    println!();

    if already_linked {
        println!("{}", dim("Post already has a related section; `pillar link` skips it."));
    } else {
        println!("{}", success("`pillar link` would append these links."));
    }

    Ok(ExitCode::SUCCESS)
}

/// Scores every target other than the post itself, best first, with the keywords that matched.
fn target_scores<'a>(
    post: &Post,
    catalog: &'a [TopicTarget],
    body_prefix_chars: usize,
) -> Vec<TargetScore<'a>> {
    let blob = item_blob(post, body_prefix_chars);

    score_targets(post, post.slug(), catalog, body_prefix_chars)
        .into_iter()
        .filter_map(|scored| {
            let target = find_target(catalog, &scored.slug)?;
            Some(TargetScore {
                slug: &target.slug,
                score: scored.score,
                matched: target
                    .keywords
                    .iter()
                    .map(String::as_str)
                    .filter(|kw| contains_keyword(&blob, kw))
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_list_matched_keywords_best_first() {
        let catalog = vec![
            TopicTarget::new("growth", "Growth", ["growth hacking", "cac"]),
            TopicTarget::new("geo", "GEO", ["chatgpt", "perplexity", "geo"]),
        ];
        let post = Post::new("Aparecer en ChatGPT", "aparecer-chatgpt", "y en Perplexity");

        let scores = target_scores(&post, &catalog, 2000);

        assert_eq!(scores[0].slug, "geo");
        assert_eq!(scores[0].score, 2);
        assert_eq!(scores[0].matched, vec!["chatgpt", "perplexity"]);
        assert_eq!(scores[1].slug, "growth");
        assert!(scores[1].matched.is_empty());
    }

    #[test]
    fn own_slug_is_not_scored() {
        let catalog = vec![TopicTarget::new("geo", "GEO", ["geo"])];
        let post = Post::new("GEO", "geo", "");
        assert!(target_scores(&post, &catalog, 2000).is_empty());
    }
}
