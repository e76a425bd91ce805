//! Deterministic fixture data for local runs and the integration tests.

use sqlx::SqlitePool;

use crate::Result;

const ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

pub struct SeedData {
    pub topics: Vec<SeedTopic>,
    pub users: Vec<SeedUser>,
    pub articles: Vec<SeedArticle>,
    pub comments: Vec<SeedComment>,
}

pub struct SeedTopic {
    pub slug: &'static str,
    pub description: &'static str,
}

pub struct SeedUser {
    pub username: &'static str,
    pub name: &'static str,
    pub avatar_url: &'static str,
}

pub struct SeedArticle {
    pub article_id: i64,
    pub title: &'static str,
    pub topic: &'static str,
    pub author: &'static str,
    pub body: &'static str,
    pub created_at: &'static str,
    pub votes: i64,
    pub article_img_url: &'static str,
}

pub struct SeedComment {
    pub comment_id: i64,
    pub article_id: i64,
    pub author: &'static str,
    pub body: &'static str,
    pub votes: i64,
    pub created_at: &'static str,
}

// Rows are replaced wholesale; ids are fixed so reseeding the same file is
// idempotent. Deletes run children first to satisfy the foreign keys.
pub async fn seed(pool: &SqlitePool, data: &SeedData) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM comments").execute(&mut tx).await?;
    sqlx::query("DELETE FROM articles").execute(&mut tx).await?;
    sqlx::query("DELETE FROM users").execute(&mut tx).await?;
    sqlx::query("DELETE FROM topics").execute(&mut tx).await?;

    for topic in &data.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(topic.slug)
            .bind(topic.description)
            .execute(&mut tx)
            .await?;
    }

    for user in &data.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(user.username)
            .bind(user.name)
            .bind(user.avatar_url)
            .execute(&mut tx)
            .await?;
    }

    for article in &data.articles {
        sqlx::query(
            r#"
            INSERT INTO articles (article_id, title, topic, author, body, created_at, votes, article_img_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(article.article_id)
        .bind(article.title)
        .bind(article.topic)
        .bind(article.author)
        .bind(article.body)
        .bind(article.created_at)
        .bind(article.votes)
        .bind(article.article_img_url)
        .execute(&mut tx)
        .await?;
    }

    for comment in &data.comments {
        sqlx::query(
            r#"
            INSERT INTO comments (comment_id, article_id, author, body, votes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.comment_id)
        .bind(comment.article_id)
        .bind(comment.author)
        .bind(comment.body)
        .bind(comment.votes)
        .bind(comment.created_at)
        .execute(&mut tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

pub fn test_data() -> SeedData {
    SeedData {
        topics: vec![
            SeedTopic {
                slug: "mitch",
                description: "The man, the Mystery",
            },
            SeedTopic {
                slug: "cats",
                description: "Not dogs",
            },
            SeedTopic {
                slug: "paper",
                description: "what books are made of",
            },
        ],
        users: vec![
            SeedUser {
                username: "butter_bridge",
                name: "jonny",
                avatar_url: "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
            },
            SeedUser {
                username: "icellusedkars",
                name: "sam",
                avatar_url: "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
            },
            SeedUser {
                username: "rogersop",
                name: "paul",
                avatar_url: "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
            },
            SeedUser {
                username: "lurker",
                name: "do_nothing",
                avatar_url: "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
            },
        ],
        articles: vec![
            SeedArticle {
                article_id: 1,
                title: "Living in the shadow of a great man",
                topic: "mitch",
                author: "butter_bridge",
                body: "I find this existence challenging",
                created_at: "2020-07-09 20:11:00",
                votes: 100,
                article_img_url: ARTICLE_IMG_URL,
            },
            SeedArticle {
                article_id: 2,
                title: "Sony Vaio; or, The Laptop",
                topic: "mitch",
                author: "icellusedkars",
                body: "Call me Mitchell. Some years ago, never mind how long precisely, I thought I would sail about a little and see the watery part of the world.",
                created_at: "2020-10-16 05:03:00",
                votes: 0,
                article_img_url: ARTICLE_IMG_URL,
            },
            SeedArticle {
                article_id: 3,
                title: "Eight pug gifs that remind me of mitch",
                topic: "mitch",
                author: "icellusedkars",
                body: "some gifs",
                created_at: "2020-11-03 09:12:00",
                votes: 0,
                article_img_url: ARTICLE_IMG_URL,
            },
            SeedArticle {
                article_id: 4,
                title: "Student SUES Mitch!",
                topic: "mitch",
                author: "rogersop",
                body: "We all love Mitch and his wonderful, unique typing style. However, the volume of his typing has ALLEGEDLY burst another students eardrums, and they are now suing for damages.",
                created_at: "2020-05-06 01:14:00",
                votes: 0,
                article_img_url: ARTICLE_IMG_URL,
            },
            SeedArticle {
                article_id: 5,
                title: "UNCOVERED: catspiracy to bring down democracy",
                topic: "cats",
                author: "rogersop",
                body: "Bastet walks amongst us, and the cats are taking arms!",
                created_at: "2020-08-03 13:14:00",
                votes: 0,
                article_img_url: ARTICLE_IMG_URL,
            },
            SeedArticle {
                article_id: 6,
                title: "A",
                topic: "mitch",
                author: "icellusedkars",
                body: "Delicious tin of cat food",
                created_at: "2020-01-07 14:08:00",
                votes: 0,
                article_img_url: ARTICLE_IMG_URL,
            },
        ],
        comments: vec![
            SeedComment {
                comment_id: 1,
                article_id: 1,
                author: "butter_bridge",
                body: "This morning, I showered for nine minutes.",
                votes: 16,
                created_at: "2020-04-06 12:17:00",
            },
            SeedComment {
                comment_id: 2,
                article_id: 1,
                author: "icellusedkars",
                body: "The beautiful thing about treasure is that it exists.",
                votes: 14,
                created_at: "2020-10-31 03:03:00",
            },
            SeedComment {
                comment_id: 3,
                article_id: 1,
                author: "icellusedkars",
                body: "Replacing the quiet elegance of the dark suit and tie with the casual indifference of these muted earth tones is a form of fashion suicide.",
                votes: 100,
                created_at: "2020-03-01 01:13:00",
            },
            SeedComment {
                comment_id: 4,
                article_id: 1,
                author: "lurker",
                body: "I carry a log about with me. Why not?",
                votes: -100,
                created_at: "2020-02-23 12:01:00",
            },
            SeedComment {
                comment_id: 5,
                article_id: 3,
                author: "icellusedkars",
                body: "I hate streaming noses",
                votes: 0,
                created_at: "2020-06-20 07:24:00",
            },
            SeedComment {
                comment_id: 6,
                article_id: 3,
                author: "butter_bridge",
                body: "Ambidextrous marsupial",
                votes: 1,
                created_at: "2020-04-11 21:02:00",
            },
            SeedComment {
                comment_id: 7,
                article_id: 5,
                author: "rogersop",
                body: "Lobster pot",
                votes: 10,
                created_at: "2020-09-19 23:10:00",
            },
        ],
    }
}
