// tests/support/mocks/catalog_repos.rs
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use catalog_core::domain::catalog::{
    Category, CategoryId, CategoryRepository, NewCategory, NewPost, NewTag, Post, PostFilter,
    PostId, PostRepository, Slug, SlugIndex, Tag, TagId, TagRepository,
};
use catalog_core::domain::errors::{DomainError, DomainResult};

trait Row: Clone {
    fn id(&self) -> i64;
    fn slug(&self) -> &str;
}

impl Row for Post {
    fn id(&self) -> i64 {
        self.id.0
    }
    fn slug(&self) -> &str {
        self.slug.as_str()
    }
}

impl Row for Category {
    fn id(&self) -> i64 {
        self.id.0
    }
    fn slug(&self) -> &str {
        self.slug.as_str()
    }
}

impl Row for Tag {
    fn id(&self) -> i64 {
        self.id.0
    }
    fn slug(&self) -> &str {
        self.slug.as_str()
    }
}

/// One in-memory table with a unique slug column. Can be told to reject the next
/// N inserts as if another writer had claimed the slug first.
struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
    forced_slug_conflicts: u32,
    insert_attempts: Vec<String>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
            forced_slug_conflicts: 0,
            insert_attempts: Vec::new(),
        }
    }
}

impl<T: Row> Table<T> {
    fn slugs_with_prefix(&self, prefix: &str) -> HashSet<String> {
        self.rows
            .iter()
            .map(|row| row.slug())
            .filter(|slug| slug.starts_with(prefix))
            .map(str::to_string)
            .collect()
    }

    fn claim_id(&mut self, slug: &Slug) -> DomainResult<i64> {
        self.insert_attempts.push(slug.to_string());
        if self.forced_slug_conflicts > 0 {
            self.forced_slug_conflicts -= 1;
            return Err(DomainError::SlugConflict(slug.to_string()));
        }
        if self.rows.iter().any(|row| row.slug() == slug.as_str()) {
            return Err(DomainError::SlugConflict(slug.to_string()));
        }
        self.next_id += 1;
        Ok(self.next_id)
    }

    fn by_id(&self, id: i64) -> Option<T> {
        self.rows.iter().find(|row| row.id() == id).cloned()
    }

    fn by_slug(&self, slug: &Slug) -> Option<T> {
        self.rows.iter().find(|row| row.slug() == slug.as_str()).cloned()
    }

    fn replace(&mut self, updated: &T) -> DomainResult<T> {
        let slot = self
            .rows
            .iter_mut()
            .find(|row| row.id() == updated.id())
            .ok_or_else(|| DomainError::NotFound("row not found".into()))?;
        // The stored slug wins: updates never rewrite it.
        let slug = slot.slug().to_string();
        *slot = updated.clone();
        assert_eq!(slot.slug(), slug, "update attempted to change the slug");
        Ok(slot.clone())
    }

    fn remove(&mut self, id: i64) {
        self.rows.retain(|row| row.id() != id);
    }
}

macro_rules! table_controls {
    ($repo:ident, $row:ty) => {
        #[derive(Default)]
        pub struct $repo {
            table: Mutex<Table<$row>>,
        }

        impl $repo {
            pub fn new() -> Self {
                Self::default()
            }

            /// The next `n` inserts fail with a slug unique-constraint violation.
            pub fn force_slug_conflicts(&self, n: u32) {
                self.table.lock().unwrap().forced_slug_conflicts = n;
            }

            /// Every slug handed to `insert`, in order, including rejected ones.
            pub fn insert_attempts(&self) -> Vec<String> {
                self.table.lock().unwrap().insert_attempts.clone()
            }

            pub fn len(&self) -> usize {
                self.table.lock().unwrap().rows.len()
            }
        }

        #[async_trait]
        impl SlugIndex for $repo {
            async fn slugs_with_prefix(&self, prefix: &str) -> DomainResult<HashSet<String>> {
                Ok(self.table.lock().unwrap().slugs_with_prefix(prefix))
            }
        }
    };
}

table_controls!(InMemoryPostRepo, Post);
table_controls!(InMemoryCategoryRepo, Category);
table_controls!(InMemoryTagRepo, Tag);

#[async_trait]
impl PostRepository for InMemoryPostRepo {
    async fn insert(&self, post: &NewPost, slug: Slug) -> DomainResult<Post> {
        let mut table = self.table.lock().unwrap();
        let id = table.claim_id(&slug)?;
        let created = Post {
            id: PostId::new(id)?,
            title: post.title.clone(),
            description: post.description.clone(),
            slug,
            text: post.text.clone(),
            category_id: post.category_id,
            level: post.level,
            tag_ids: post.tag_ids.clone(),
            link_external_tool: post.link_external_tool.clone(),
            public: post.public,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, post: &Post) -> DomainResult<Post> {
        self.table.lock().unwrap().replace(post)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        self.table.lock().unwrap().remove(id.0);
        Ok(())
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.table.lock().unwrap().by_id(id.0))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        Ok(self.table.lock().unwrap().by_slug(slug))
    }

    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>> {
        let table = self.table.lock().unwrap();
        let mut posts: Vec<Post> = table
            .rows
            .iter()
            .filter(|post| filter.include_drafts || post.public)
            .filter(|post| filter.category_id.is_none_or(|id| post.category_id == id))
            .filter(|post| filter.tag_id.is_none_or(|id| post.tag_ids.contains(&id)))
            .filter(|post| filter.level.is_none_or(|level| post.level == Some(level)))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: &NewCategory, slug: Slug) -> DomainResult<Category> {
        let mut table = self.table.lock().unwrap();
        if table
            .rows
            .iter()
            .any(|row| row.name.as_str() == category.name.as_str())
        {
            return Err(DomainError::Conflict("category name already exists".into()));
        }
        let id = table.claim_id(&slug)?;
        let created = Category {
            id: CategoryId::new(id)?,
            name: category.name.clone(),
            slug,
            description: category.description.clone(),
            public: category.public,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, category: &Category) -> DomainResult<Category> {
        self.table.lock().unwrap().replace(category)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        self.table.lock().unwrap().remove(id.0);
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.table.lock().unwrap().by_id(id.0))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self.table.lock().unwrap().by_slug(slug))
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Category>> {
        let table = self.table.lock().unwrap();
        let mut categories: Vec<Category> = table
            .rows
            .iter()
            .filter(|category| include_drafts || category.public)
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn insert(&self, tag: &NewTag, slug: Slug) -> DomainResult<Tag> {
        let mut table = self.table.lock().unwrap();
        if table.rows.iter().any(|row| row.tag.as_str() == tag.tag.as_str()) {
            return Err(DomainError::Conflict("tag already exists".into()));
        }
        let id = table.claim_id(&slug)?;
        let created = Tag {
            id: TagId::new(id)?,
            tag: tag.tag.clone(),
            slug,
            public: tag.public,
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        };
        table.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, tag: &Tag) -> DomainResult<Tag> {
        self.table.lock().unwrap().replace(tag)
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        self.table.lock().unwrap().remove(id.0);
        Ok(())
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        Ok(self.table.lock().unwrap().by_id(id.0))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        Ok(self.table.lock().unwrap().by_slug(slug))
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Tag>> {
        let table = self.table.lock().unwrap();
        let mut tags: Vec<Tag> = table
            .rows
            .iter()
            .filter(|tag| include_drafts || tag.public)
            .cloned()
            .collect();
        tags.sort_by(|a, b| a.tag.as_str().cmp(b.tag.as_str()));
        Ok(tags)
    }
}
