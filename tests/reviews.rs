use plateful::errors::AppError;
use plateful::models::{PriceRange, User, Visibility};
use plateful::restaurants::{NewRestaurant, ReviewDraft};
use plateful::store::{JsonFileStore, MemoryStore, Store};
use plateful::{Repository, keys, visible_reviews};

fn seeded_repo() -> Repository<MemoryStore> {
    let mut repo = Repository::new(MemoryStore::new());
    repo.load_users().expect("seed users");
    repo.load_restaurants().expect("seed restaurants");
    repo
}

fn seed_user(repo: &mut Repository<MemoryStore>, user_id: &str) -> User {
    repo.load_users()
        .expect("load users")
        .into_iter()
        .find(|user| user.id == user_id)
        .expect("user exists")
}

fn draft(rating: u8, visibility: Visibility) -> ReviewDraft {
    ReviewDraft {
        rating,
        comment: "不错".to_string(),
        visibility,
    }
}

#[test]
fn adding_reviews_derives_the_rating() {
    let mut repo = seeded_repo();
    let zhangsan = seed_user(&mut repo, "1");

    // Restaurant 3 starts with no reviews.
    repo.add_review(&zhangsan, "3", draft(5, Visibility::Friends)).expect("first review");
    assert_eq!(repo.restaurant("3").expect("restaurant").rating, 5.0);

    let lisi = seed_user(&mut repo, "2");
    repo.add_review(&lisi, "3", draft(4, Visibility::Private)).expect("second review");
    assert_eq!(repo.restaurant("3").expect("restaurant").rating, 4.5);
}

#[test]
fn rating_rounds_half_away_from_zero() {
    let mut repo = seeded_repo();
    let zhangsan = seed_user(&mut repo, "1");

    // Restaurant 1 carries seed reviews rated 4.5 and 4.0. Adding and then
    // removing a third review forces a recompute over just those two.
    let review = repo.add_review(&zhangsan, "1", draft(1, Visibility::Private)).expect("add");
    repo.delete_review("1", "1", &review.id).expect("delete");
    assert_eq!(repo.restaurant("1").expect("restaurant").rating, 4.3);
}

#[test]
fn deleting_the_last_review_resets_the_rating() {
    let mut repo = seeded_repo();
    // Restaurant 2 has exactly one review (id 3, by 李四).
    repo.delete_review("2", "2", "3").expect("delete");
    let restaurant = repo.restaurant("2").expect("restaurant");
    assert!(restaurant.reviews.is_empty());
    assert_eq!(restaurant.rating, 0.0);
}

#[test]
fn editing_a_review_restamps_and_recomputes() {
    let mut repo = seeded_repo();
    let updated = repo
        .edit_review("2", "2", "3", draft(5, Visibility::Friends))
        .expect("edit");
    assert_eq!(updated.rating, 5.0);
    assert_eq!(updated.visibility, Visibility::Friends);
    assert_eq!(updated.date, chrono::Utc::now().date_naive());
    assert_eq!(repo.restaurant("2").expect("restaurant").rating, 5.0);
}

#[test]
fn only_the_author_may_edit_or_delete() {
    let mut repo = seeded_repo();
    // Review 3 belongs to 李四, not 张三.
    let err = repo.edit_review("1", "2", "3", draft(5, Visibility::Friends)).unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation { .. }));
    let err = repo.delete_review("1", "2", "3").unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation { .. }));
    // The review is untouched.
    assert_eq!(repo.restaurant("2").expect("restaurant").reviews.len(), 1);
}

#[test]
fn out_of_range_ratings_are_rejected() {
    let mut repo = seeded_repo();
    let zhangsan = seed_user(&mut repo, "1");
    for rating in [0, 6] {
        let err = repo.add_review(&zhangsan, "3", draft(rating, Visibility::Private)).unwrap_err();
        assert!(matches!(err, AppError::InvalidOperation { .. }));
    }
}

#[test]
fn legacy_public_visibility_is_not_writable() {
    let mut repo = seeded_repo();
    let zhangsan = seed_user(&mut repo, "1");
    let err = repo.add_review(&zhangsan, "3", draft(4, Visibility::Public)).unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation { .. }));

    // The same guard applies to edits of an existing legacy review.
    let err = repo.edit_review("1", "1", "1", draft(4, Visibility::Public)).unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation { .. }));
}

#[test]
fn unrecognized_visibility_is_not_writable() {
    let mut repo = seeded_repo();
    let zhangsan = seed_user(&mut repo, "1");
    let err = repo.add_review(&zhangsan, "3", draft(4, Visibility::Unknown)).unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation { .. }));
}

#[test]
fn unknown_visibility_tag_hides_one_review_not_the_dataset() {
    let mut repo = seeded_repo();
    let mut restaurants = repo.load_restaurants().expect("load");
    restaurants[0].name = "老王新川菜馆".to_string();
    repo.save_restaurants(&restaurants).expect("save");

    // Hand the stored snapshot a visibility tag this build does not know.
    let mut store = repo.into_store();
    let raw = store.get(keys::RESTAURANTS).expect("get").expect("present");
    let tampered = raw.replace("\"visibility\":\"public\"", "\"visibility\":\"unlisted\"");
    assert_ne!(raw, tampered, "seed review 1 carries the legacy public tag");
    store.set(keys::RESTAURANTS, &tampered).expect("set");
    let mut repo = Repository::new(store);

    // The snapshot still parses; the rename survives instead of being
    // thrown away for the seed dataset.
    let restaurant = repo.restaurant("1").expect("restaurant");
    assert_eq!(restaurant.name, "老王新川菜馆");
    assert_eq!(restaurant.reviews.len(), 2);

    // The bad tag costs exactly that review: hidden from the author's
    // friends, still visible to the author.
    let lisi = seed_user(&mut repo, "2");
    let visible = visible_reviews(Some(&lisi), &restaurant);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].user_id, "2");

    let zhangsan = seed_user(&mut repo, "1");
    assert_eq!(visible_reviews(Some(&zhangsan), &restaurant).len(), 2);
}

#[test]
fn snapshots_round_trip_the_legacy_public_tag() {
    let mut repo = seeded_repo();
    // Touch the snapshot so it is re-serialized from parsed models.
    let restaurants = repo.load_restaurants().expect("load");
    repo.save_restaurants(&restaurants).expect("save");

    let store = repo.into_store();
    let raw = store.get(keys::RESTAURANTS).expect("get").expect("present");
    assert!(raw.contains("\"visibility\":\"public\""), "legacy tag survives storage untouched");
}

#[test]
fn restaurants_are_deleted_by_their_owner_only() {
    let mut repo = seeded_repo();
    let zhangsan = seed_user(&mut repo, "1");
    let restaurant = repo
        .add_restaurant(
            "1",
            NewRestaurant {
                name: "张记面馆".to_string(),
                description: "手工拉面".to_string(),
                address: "北京市东城区东直门内大街45号".to_string(),
                cuisine: "面食".to_string(),
                price_range: PriceRange::Budget,
                image_url: None,
            },
        )
        .expect("add restaurant");
    repo.add_review(&zhangsan, &restaurant.id, draft(5, Visibility::Private)).expect("review");

    let err = repo.delete_restaurant("2", &restaurant.id).unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation { .. }));

    repo.delete_restaurant("1", &restaurant.id).expect("owner delete");
    let err = repo.restaurant(&restaurant.id).unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }), "reviews go with the restaurant");
}

#[test]
fn seed_restaurants_have_no_owner_and_cannot_be_deleted() {
    let mut repo = seeded_repo();
    let err = repo.delete_restaurant("1", "1").unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation { .. }));
}

#[test]
fn my_reviews_spans_restaurants() {
    let mut repo = seeded_repo();
    let lisi = seed_user(&mut repo, "2");
    repo.add_review(&lisi, "3", draft(4, Visibility::Friends)).expect("review");

    let authored = repo.my_reviews("2").expect("my reviews");
    // Seed reviews 2 and 3 plus the one just written.
    assert_eq!(authored.len(), 3);
    assert!(authored.iter().any(|entry| entry.restaurant_id == "3"));
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("plateful.json");

    let mut repo = Repository::new(JsonFileStore::new(&path));
    let user = repo.register("王五2", "wangwu2@example.com", "password123").expect("register");
    repo.add_review(&user, "3", draft(5, Visibility::Private)).expect("review");

    let mut reopened = Repository::new(JsonFileStore::new(&path));
    let users = reopened.load_users().expect("load users");
    assert!(users.iter().any(|u| u.id == user.id));
    let restaurant = reopened.restaurant("3").expect("restaurant");
    assert_eq!(restaurant.reviews.len(), 1);
    assert_eq!(restaurant.rating, 5.0);
    let session = reopened.current_user().expect("session").expect("still logged in");
    assert_eq!(session.id, user.id);
}
