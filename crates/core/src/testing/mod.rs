//! Testing utilities shared by unit, integration and E2E tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_core::testing::fixtures;
//!
//! let genres = fixtures::example_genres(10);
//! repository.insert_many(&genres)?;
//!
//! let expected = fixtures::ordered_clone(&genres, "name", SearchOrder::Desc);
//! ```

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{Duration, Utc};

    use crate::entity::{
        CastMember, CastMemberType, CatalogEntity, Category, Genre, Rating, Video, VideoDetails,
    };
    use crate::search::SearchOrder;

    /// Scrambled index so insertion order differs from name order.
    fn scrambled(i: usize) -> usize {
        (i * 7919) % 1000
    }

    /// Minutes to subtract from now so creation order differs from both
    /// insertion and name order.
    fn age_minutes(i: usize) -> i64 {
        ((i * 13) % 97) as i64
    }

    /// Create `count` genres with distinct names and creation instants.
    pub fn example_genres(count: usize) -> Vec<Genre> {
        let now = Utc::now();
        (0..count)
            .map(|i| {
                Genre::new(format!("Genre {:03}", scrambled(i)), i % 2 == 0)
                    .expect("valid genre")
                    .created_on(now - Duration::minutes(age_minutes(i)))
            })
            .collect()
    }

    /// Create genres with the given names, in the given order.
    pub fn genres_named(names: &[&str]) -> Vec<Genre> {
        names
            .iter()
            .map(|name| Genre::new(*name, true).expect("valid genre"))
            .collect()
    }

    /// Create a category with a generated description.
    pub fn category(name: &str) -> Category {
        Category::new(name, format!("Description of {}", name), true).expect("valid category")
    }

    /// Create `count` categories with distinct names and creation instants.
    pub fn example_categories(count: usize) -> Vec<Category> {
        let now = Utc::now();
        (0..count)
            .map(|i| {
                let mut category = category(&format!("Category {:03}", scrambled(i)));
                if i % 3 == 0 {
                    category.deactivate();
                }
                category.created_on(now - Duration::minutes(age_minutes(i)))
            })
            .collect()
    }

    /// Create categories with the given names, in the given order.
    pub fn categories_named(names: &[&str]) -> Vec<Category> {
        names.iter().map(|name| category(name)).collect()
    }

    /// Create `count` cast members alternating between actors and directors.
    pub fn example_cast_members(count: usize) -> Vec<CastMember> {
        let now = Utc::now();
        (0..count)
            .map(|i| {
                let kind = if i % 2 == 0 {
                    CastMemberType::Actor
                } else {
                    CastMemberType::Director
                };
                CastMember::new(format!("Person {:03}", scrambled(i)), kind)
                    .expect("valid cast member")
                    .created_on(now - Duration::minutes(age_minutes(i)))
            })
            .collect()
    }

    /// Create actors with the given names, in the given order.
    pub fn cast_members_named(names: &[&str]) -> Vec<CastMember> {
        names
            .iter()
            .map(|name| CastMember::new(*name, CastMemberType::Actor).expect("valid cast member"))
            .collect()
    }

    /// Descriptive fields for a video with reasonable defaults.
    pub fn video_details(title: &str) -> VideoDetails {
        VideoDetails {
            title: title.to_string(),
            description: format!("About {}", title),
            year_launched: 2010,
            duration: 120,
            rating: Rating::Age14,
            opened: false,
        }
    }

    /// Create a video with reasonable defaults.
    pub fn video(title: &str) -> Video {
        Video::new(video_details(title)).expect("valid video")
    }

    /// Create `count` videos, every other one published.
    pub fn example_videos(count: usize) -> Vec<Video> {
        let now = Utc::now();
        (0..count)
            .map(|i| {
                let mut video = video(&format!("Video {:03}", scrambled(i)));
                if i % 2 == 0 {
                    video.publish();
                }
                video.created_on(now - Duration::minutes(age_minutes(i)))
            })
            .collect()
    }

    /// Create videos with the given titles, in the given order.
    pub fn videos_named(titles: &[&str]) -> Vec<Video> {
        titles.iter().map(|title| video(title)).collect()
    }

    /// Copy of `items` in the order a listing sorted by `order_by` should return.
    ///
    /// Computed independently of the search module: unknown fields order by
    /// name and ties keep their input order.
    pub fn ordered_clone<T: CatalogEntity>(
        items: &[T],
        order_by: &str,
        order: SearchOrder,
    ) -> Vec<T> {
        let mut sorted = items.to_vec();
        match order_by {
            "id" => sorted.sort_by_key(|item| item.id()),
            "createdAt" => sorted.sort_by_key(|item| item.created_at()),
            _ => sorted.sort_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes())),
        }
        if order == SearchOrder::Desc {
            // Reverse runs of equal keys back so ties stay in input order
            sorted = reverse_stable(sorted, order_by);
        }
        sorted
    }

    fn reverse_stable<T: CatalogEntity>(sorted: Vec<T>, order_by: &str) -> Vec<T> {
        let same_key = |a: &T, b: &T| match order_by {
            "id" => a.id() == b.id(),
            "createdAt" => a.created_at() == b.created_at(),
            _ => a.name() == b.name(),
        };

        let mut groups: Vec<Vec<T>> = Vec::new();
        for item in sorted {
            match groups.last_mut() {
                Some(group) if same_key(&group[0], &item) => group.push(item),
                _ => groups.push(vec![item]),
            }
        }
        groups.into_iter().rev().flatten().collect()
    }
}
