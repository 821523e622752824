use anyhow::Result;
use polyglot_press::config::Config;
use polyglot_press::content::Site;
use polyglot_press::i18n::{format_date, LanguageStrings};
use polyglot_press::store;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("polyglot_press=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let language = config.language;
    let strings = LanguageStrings::for_language(language);

    info!("Rendering preview in {} ({})", language.name(), language.code());

    let snapshot = store::load_snapshot(&config.content_file)?;
    let site = Site::new(snapshot, config.site_options());

    println!("== {} ==", strings.all_posts);
    for summary in site.resolved_listing(language) {
        let marker = if summary.language == language { " " } else { "*" };
        println!(
            "{} {:<24} {}  /{}",
            marker,
            format_date(&summary.date, language),
            summary.title,
            summary.path
        );
    }

    let Some(key) = config.preview_post.as_deref() else {
        return Ok(());
    };

    let Some(detail) = site.article_detail(key, language) else {
        warn!("No post with translation key '{}'", key);
        return Ok(());
    };

    println!();
    println!("== {} ==", detail.summary.title);
    println!(
        "{} {}",
        strings.published_on,
        format_date(&detail.summary.date, language)
    );
    if detail.is_fallback(language) {
        println!("(shown in {})", detail.language.native_name());
    }

    let authors: Vec<_> = detail.authors.iter().map(|author| author.name.as_str()).collect();
    if !authors.is_empty() {
        println!("{}", authors.join(", "));
    }

    let tags: Vec<_> = detail
        .summary
        .tags
        .iter()
        .map(|tag| site.tag_label(tag, language))
        .collect();
    if !tags.is_empty() {
        println!("{}: {}", strings.tags_title, tags.join(", "));
    }

    if let Some(previous) = &detail.previous {
        println!("{}: {} (/{})", strings.previous_article, previous.title, previous.path);
    }
    if let Some(next) = &detail.next {
        println!("{}: {} (/{})", strings.next_article, next.title, next.path);
    }

    Ok(())
}
