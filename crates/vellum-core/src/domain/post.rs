use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::User;

/// BlogPost entity.
///
/// `date` is a display string stamped once at creation and never changed
/// afterwards, even when the post is edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub img_url: String,
}

impl BlogPost {
    /// Create a new post, stamped with today's date.
    pub fn new(
        author_id: Uuid,
        title: String,
        subtitle: String,
        body: String,
        img_url: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            subtitle,
            date: Self::date_today(),
            body,
            img_url,
        }
    }

    /// Today's date in the "Month DD, YYYY" display format.
    pub fn date_today() -> String {
        Local::now().format("%B %d, %Y").to_string()
    }
}

/// A post joined with its author row, as rendered by listing and detail pages.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: BlogPost,
    pub author: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_today_is_month_day_year() {
        let date = BlogPost::date_today();
        // "August 06, 2026" - a month name, a comma, a four digit year.
        let parts: Vec<&str> = date.splitn(2, ' ').collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].chars().all(|c| c.is_ascii_alphabetic()));
        assert!(parts[1].contains(", "));
    }

    #[test]
    fn new_post_gets_fresh_id() {
        let author = Uuid::new_v4();
        let a = BlogPost::new(
            author,
            "T".into(),
            "S".into(),
            "B".into(),
            "http://x/i.png".into(),
        );
        let b = BlogPost::new(
            author,
            "T".into(),
            "S".into(),
            "B".into(),
            "http://x/i.png".into(),
        );
        assert_ne!(a.id, b.id);
    }
}
