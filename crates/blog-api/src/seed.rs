//! Compiled-in posts served by the default repository.

use blog_types::Post;

const AUTHOR: &str = "Rauli";
const DATE: &str = "2.07.2025";

/// The seed posts, in the order they are listed by `GET /api/posts`.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(
            "first-post",
            "Мой первый пост",
            "Это содержимое моего первого поста. Здесь много интересного текста о веб-разработке!",
            AUTHOR,
            DATE,
            "first",
        ),
        Post::new(
            "fastapi-and-nextjs",
            "FastAPI + Next.js = ❤️",
            "Сочетание FastAPI для бэкенда и Next.js для фронтенда - это мощный и современный стек. Асинхронность FastAPI и рендеринг Next.js творят чудеса.",
            AUTHOR,
            DATE,
            "second",
        ),
        Post::new(
            "why-i-love-python",
            "Почему я люблю Python",
            "Python - это язык с простым синтаксисом и огромной экосистемой. Он отлично подходит для бэкенда, анализа данных и многого другого.",
            AUTHOR,
            DATE,
            "third",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_order_is_stable() {
        let slugs: Vec<String> = seed_posts().into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs, ["first-post", "fastapi-and-nextjs", "why-i-love-python"]);
    }

    #[test]
    fn seed_slugs_are_url_safe() {
        for post in seed_posts() {
            assert!(
                post.slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {} is not URL-safe",
                post.slug
            );
        }
    }

    #[test]
    fn every_field_is_populated() {
        for post in seed_posts() {
            assert!(!post.title.is_empty());
            assert!(!post.content.is_empty());
            assert_eq!(post.author, AUTHOR);
            assert_eq!(post.date, DATE);
        }
    }
}
