//! Content API queries used by the article pages.

pub const ARTICLE_BY_SLUG: &str =
    r#"*[_type == "article" && slug.current == $slug][0]"#;

pub const ALL_ARTICLES: &str = r#"*[_type == "article"] | order(publishedAt desc)"#;

pub const ARTICLES_BY_CATEGORY: &str =
    r#"*[_type == "article" && category == $category] | order(publishedAt desc)"#;
