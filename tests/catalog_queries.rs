mod support;

use catalog_core::application::commands::catalog::CreatePostCommand;
use catalog_core::application::dto::PostDto;
use catalog_core::application::queries::catalog::{GetBySlugQuery, ListPostsQuery};
use catalog_core::domain::catalog::Level;
use support::TestCatalog;

async fn post(
    catalog: &TestCatalog,
    title: &str,
    category_id: i64,
    tag_ids: &[i64],
    level: Option<i64>,
    public: bool,
) -> PostDto {
    let mut builder = CreatePostCommand::builder()
        .title(title)
        .category_id(category_id)
        .tag_ids(tag_ids.iter().copied())
        .public(public)
        .author_id(1);
    if let Some(level) = level {
        builder = builder.level(level);
    }
    catalog
        .commands()
        .create_post(builder.build().unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn drafts_are_hidden_from_public_lookups() {
    let catalog = TestCatalog::new();
    let category = catalog.category("General", true).await;
    post(&catalog, "Draft", category.id, &[], None, false).await;

    let err = catalog
        .queries()
        .get_post_by_slug(GetBySlugQuery::public("draft"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let found = catalog
        .queries()
        .get_post_by_slug(GetBySlugQuery {
            slug: "draft".into(),
            include_drafts: true,
        })
        .await
        .unwrap();
    assert_eq!(found.title, "Draft");
}

#[tokio::test]
async fn malformed_slug_is_not_found() {
    let catalog = TestCatalog::new();
    let err = catalog
        .queries()
        .get_tag_by_slug(GetBySlugQuery::public("Not A Slug"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn list_posts_filters_by_category_tag_and_level() {
    let catalog = TestCatalog::new();
    let redes = catalog.category("Redes", true).await;
    let web = catalog.category("Web", true).await;
    let linux = catalog.tag("Linux", true).await;

    post(&catalog, "Nmap", redes.id, &[linux.id], Some(1), true).await;
    post(&catalog, "Wireshark", redes.id, &[], Some(2), true).await;
    post(&catalog, "Burp", web.id, &[linux.id], Some(1), true).await;
    post(&catalog, "Hidden", redes.id, &[linux.id], Some(1), false).await;

    let in_redes = catalog
        .queries()
        .list_posts(ListPostsQuery {
            category_slug: Some("redes".into()),
            ..ListPostsQuery::default()
        })
        .await
        .unwrap();
    let titles: Vec<_> = in_redes.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Wireshark", "Nmap"]);

    let tagged_beginner = catalog
        .queries()
        .list_posts(ListPostsQuery {
            tag_slug: Some("linux".into()),
            level: Some(1),
            ..ListPostsQuery::default()
        })
        .await
        .unwrap();
    let titles: Vec<_> = tagged_beginner.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Burp", "Nmap"]);
    assert!(tagged_beginner.iter().all(|p| p.level == Some(Level::Beginner)));

    let everything = catalog
        .queries()
        .list_posts(ListPostsQuery {
            include_drafts: true,
            ..ListPostsQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(everything.len(), 4);
}

#[tokio::test]
async fn hidden_category_filter_is_not_found_for_public_listing() {
    let catalog = TestCatalog::new();
    catalog.category("Interna", false).await;

    let err = catalog
        .queries()
        .list_posts(ListPostsQuery {
            category_slug: Some("interna".into()),
            ..ListPostsQuery::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn listing_categories_and_tags_respects_visibility() {
    let catalog = TestCatalog::new();
    catalog.category("Visible", true).await;
    catalog.category("Oculta", false).await;
    catalog.tag("b-tag", true).await;
    catalog.tag("a-tag", true).await;

    let public = catalog.queries().list_categories(false).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].absolute_url, "/catalog/category/visible/");

    let all = catalog.queries().list_categories(true).await.unwrap();
    assert_eq!(all.len(), 2);

    let tags = catalog.queries().list_tags(false).await.unwrap();
    let names: Vec<_> = tags.iter().map(|t| t.tag.as_str()).collect();
    assert_eq!(names, vec!["a-tag", "b-tag"]);
}

#[tokio::test]
async fn post_dto_serializes_level_as_label() {
    let catalog = TestCatalog::new();
    let category = catalog.category("General", true).await;
    let dto = post(&catalog, "Serialized", category.id, &[], Some(3), true).await;

    let json = serde_json::to_value(&dto).unwrap();
    assert_eq!(json["level"], "advanced");
    assert_eq!(json["slug"], "serialized");
    assert_eq!(json["absolute_url"], "/catalog/post/serialized/");
}
