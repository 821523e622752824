use crate::i18n::{Language, Translations};

/// Localized labels that page layouts place around resolved content.
///
/// Strings are raw text; escaping for the output format is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStrings {
    /// Screen-reader label in front of the publication date
    pub published_on: &'static str,

    /// Label of the link to the older neighbouring article
    pub previous_article: &'static str,

    /// Label of the link to the newer neighbouring article
    pub next_article: &'static str,

    /// Heading of the about page
    pub about_title: &'static str,

    /// Heading of the tags page
    pub tags_title: &'static str,

    /// Heading of the full post listing
    pub all_posts: &'static str,
}

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    published_on: "Published on",
    previous_article: "Previous Article",
    next_article: "Next Article",
    about_title: "About",
    tags_title: "Tags",
    all_posts: "All Posts",
};

pub const CHINESE_STRINGS: LanguageStrings = LanguageStrings {
    published_on: "发布于",
    previous_article: "上一篇",
    next_article: "下一篇",
    about_title: "关于",
    tags_title: "标签",
    all_posts: "全部文章",
};

pub const JAPANESE_STRINGS: LanguageStrings = LanguageStrings {
    published_on: "公開日",
    previous_article: "前の記事",
    next_article: "次の記事",
    about_title: "概要",
    tags_title: "タグ",
    all_posts: "すべての記事",
};

pub const KOREAN_STRINGS: LanguageStrings = LanguageStrings {
    published_on: "게시일",
    previous_article: "이전 글",
    next_article: "다음 글",
    about_title: "소개",
    tags_title: "태그",
    all_posts: "전체 글",
};

pub const FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    published_on: "Publié le",
    previous_article: "Article précédent",
    next_article: "Article suivant",
    about_title: "À propos",
    tags_title: "Tags",
    all_posts: "Tous les articles",
};

pub const GERMAN_STRINGS: LanguageStrings = LanguageStrings {
    published_on: "Veröffentlicht am",
    previous_article: "Vorheriger Artikel",
    next_article: "Nächster Artikel",
    about_title: "Über mich",
    tags_title: "Tags",
    all_posts: "Alle Beiträge",
};

impl LanguageStrings {
    /// Labels for `requested`, resolved through the usual fallback chain.
    pub fn for_language(requested: Language) -> &'static LanguageStrings {
        let table: Translations<&'static LanguageStrings> = [
            (Language::ENGLISH, &ENGLISH_STRINGS),
            (Language::CHINESE, &CHINESE_STRINGS),
            (Language::JAPANESE, &JAPANESE_STRINGS),
            (Language::KOREAN, &KOREAN_STRINGS),
            (Language::FRENCH, &FRENCH_STRINGS),
            (Language::GERMAN, &GERMAN_STRINGS),
        ]
        .into_iter()
        .collect();

        table
            .resolve(requested)
            .copied()
            .unwrap_or_else(|| Self::for_code(Language::default_language().code()))
    }

    /// The built-in table for a language code; English for codes without one.
    fn for_code(code: &str) -> &'static LanguageStrings {
        match code {
            "zh" => &CHINESE_STRINGS,
            "ja" => &JAPANESE_STRINGS,
            "ko" => &KOREAN_STRINGS,
            "fr" => &FRENCH_STRINGS,
            "de" => &GERMAN_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }
}

/// A link in the site header with one title per language.
#[derive(Debug, Clone)]
pub struct HeaderNavLink {
    pub href: &'static str,
    pub titles: Translations<&'static str>,
}

impl HeaderNavLink {
    fn new(href: &'static str, titles: [(Language, &'static str); 6]) -> Self {
        Self {
            href,
            titles: titles.into_iter().collect(),
        }
    }

    /// Title for `requested`, falling back to the href when no title exists.
    pub fn title(&self, requested: Language) -> &'static str {
        self.titles.resolve(requested).copied().unwrap_or(self.href)
    }
}

/// Header navigation, in display order.
pub fn header_nav_links() -> Vec<HeaderNavLink> {
    use Language as L;

    vec![
        HeaderNavLink::new(
            "/",
            [
                (L::ENGLISH, "Home"),
                (L::CHINESE, "首页"),
                (L::JAPANESE, "ホーム"),
                (L::KOREAN, "홈"),
                (L::FRENCH, "Accueil"),
                (L::GERMAN, "Startseite"),
            ],
        ),
        HeaderNavLink::new(
            "/blog",
            [
                (L::ENGLISH, "Blog"),
                (L::CHINESE, "博客"),
                (L::JAPANESE, "ブログ"),
                (L::KOREAN, "블로그"),
                (L::FRENCH, "Blog"),
                (L::GERMAN, "Blog"),
            ],
        ),
        HeaderNavLink::new(
            "/tags",
            [
                (L::ENGLISH, "Tags"),
                (L::CHINESE, "标签"),
                (L::JAPANESE, "タグ"),
                (L::KOREAN, "태그"),
                (L::FRENCH, "Tags"),
                (L::GERMAN, "Tags"),
            ],
        ),
        HeaderNavLink::new(
            "/projects",
            [
                (L::ENGLISH, "Projects"),
                (L::CHINESE, "项目"),
                (L::JAPANESE, "プロジェクト"),
                (L::KOREAN, "프로젝트"),
                (L::FRENCH, "Projets"),
                (L::GERMAN, "Projekte"),
            ],
        ),
        HeaderNavLink::new(
            "/about",
            [
                (L::ENGLISH, "About"),
                (L::CHINESE, "关于"),
                (L::JAPANESE, "概要"),
                (L::KOREAN, "소개"),
                (L::FRENCH, "À propos"),
                (L::GERMAN, "Über mich"),
            ],
        ),
    ]
}
