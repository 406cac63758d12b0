use masthead_core::{
    Article, ArticleId, Author, AuthorId, Magazine, MagazineId, ValidationError,
};
use uuid::Uuid;

#[test]
fn author_new_sets_defaults() {
    let author = Author::new("John Doe").unwrap();

    assert!(!author.id().is_nil());
    assert_eq!(author.name(), "John Doe");
    assert!(author.articles().is_empty());
}

#[test]
fn author_rejects_empty_name() {
    assert_eq!(Author::new("").unwrap_err(), ValidationError::EmptyAuthorName);
}

#[test]
fn magazine_validates_name_length_and_category() {
    assert!(Magazine::new("TT", "Technology").is_ok());
    assert!(Magazine::new("Sixteen chars!!!", "Technology").is_ok());
    assert_eq!(
        Magazine::new("T", "Technology").unwrap_err(),
        ValidationError::MagazineNameLength { chars: 1 }
    );
    assert_eq!(
        Magazine::new("Seventeen chars!!", "Technology").unwrap_err(),
        ValidationError::MagazineNameLength { chars: 17 }
    );
    assert_eq!(
        Magazine::new("Tech Today", "").unwrap_err(),
        ValidationError::EmptyCategory
    );
}

#[test]
fn magazine_name_is_checked_before_category() {
    assert_eq!(
        Magazine::new("", "").unwrap_err(),
        ValidationError::MagazineNameLength { chars: 0 }
    );
}

#[test]
fn article_validates_title_length() {
    let author = AuthorId::new();
    let magazine = MagazineId::new();
    let longest = "t".repeat(50);
    let too_long = "t".repeat(51);

    for title in ["Brief", "The Future of AI", longest.as_str()] {
        let article = Article::new(author, magazine, title).unwrap();
        assert_eq!(article.title(), title);
        assert_eq!(article.author(), author);
        assert_eq!(article.magazine(), magazine);
    }

    for (title, chars) in [("", 0), ("four", 4), (too_long.as_str(), 51)] {
        assert_eq!(
            Article::new(author, magazine, title).unwrap_err(),
            ValidationError::TitleLength { chars }
        );
    }
}

#[test]
fn with_id_rejects_nil_uuid() {
    let nil = Uuid::nil();
    assert_eq!(
        Author::with_id(AuthorId::from_uuid(nil), "Ann").unwrap_err(),
        ValidationError::NilId
    );
    assert_eq!(
        Magazine::with_id(MagazineId::from_uuid(nil), "Daily", "News").unwrap_err(),
        ValidationError::NilId
    );
    assert_eq!(
        Article::with_id(
            ArticleId::from_uuid(nil),
            AuthorId::new(),
            MagazineId::new(),
            "Valid title"
        )
        .unwrap_err(),
        ValidationError::NilId
    );
}

#[test]
fn magazine_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let magazine = Magazine::with_id(MagazineId::from_uuid(id), "Tech Today", "Technology")
        .unwrap();

    let json = serde_json::to_value(&magazine).unwrap();
    assert_eq!(json["uuid"], id.to_string());
    assert_eq!(json["name"], "Tech Today");
    assert_eq!(json["category"], "Technology");
    assert_eq!(json["articles"], serde_json::json!([]));

    let decoded: Magazine = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, magazine);
}

#[test]
fn article_serialization_uses_expected_wire_fields() {
    let article = Article::new(AuthorId::new(), MagazineId::new(), "The Future of AI").unwrap();

    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["uuid"], article.id().to_string());
    assert_eq!(json["author"], article.author().to_string());
    assert_eq!(json["magazine"], article.magazine().to_string());
    assert_eq!(json["title"], "The Future of AI");
}

#[test]
fn deserialize_rejects_invalid_title() {
    let value = serde_json::json!({
        "uuid": "11111111-2222-4333-8444-555555555555",
        "author": "21111111-2222-4333-8444-555555555555",
        "magazine": "31111111-2222-4333-8444-555555555555",
        "title": "AI"
    });

    let err = serde_json::from_value::<Article>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("title must be between 5 and 50 characters, got 2"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_empty_author_name() {
    let value = serde_json::json!({
        "uuid": "11111111-2222-4333-8444-555555555555",
        "name": ""
    });

    let err = serde_json::from_value::<Author>(value).unwrap_err();
    assert!(err.to_string().contains("non-empty"), "unexpected error: {err}");
}

#[test]
fn deserialize_rejects_magazine_with_listed_articles() {
    let unknown = ArticleId::new().to_string();
    let value = serde_json::json!({
        "uuid": "11111111-2222-4333-8444-555555555555",
        "name": "Tech Today",
        "category": "Technology",
        "articles": [unknown.clone(), unknown]
    });

    let err = serde_json::from_value::<Magazine>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("must not list articles before they are stored, got 2"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_author_with_listed_articles() {
    let value = serde_json::json!({
        "uuid": "11111111-2222-4333-8444-555555555555",
        "name": "John Doe",
        "articles": [ArticleId::new().to_string()]
    });

    let err = serde_json::from_value::<Author>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("must not list articles before they are stored, got 1"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_accepts_unlinked_author_with_or_without_articles_field() {
    let with_field = serde_json::json!({
        "uuid": "11111111-2222-4333-8444-555555555555",
        "name": "John Doe",
        "articles": []
    });
    let without_field = serde_json::json!({
        "uuid": "11111111-2222-4333-8444-555555555555",
        "name": "John Doe"
    });

    let first: Author = serde_json::from_value(with_field).unwrap();
    let second: Author = serde_json::from_value(without_field).unwrap();
    assert_eq!(first, second);
    assert!(first.articles().is_empty());
}
