use super::support::*;

use plateful::visible_reviews;

#[test]
fn anonymous_viewer_sees_no_reviews() {
    let mut repo = seeded_repo();
    let restaurant = repo.restaurant("1").expect("restaurant");
    assert!(visible_reviews(None, &restaurant).is_empty());
}

#[test]
fn author_always_sees_own_reviews() {
    let mut repo = seeded_repo();
    // Restaurant 2 holds 李四's private review.
    let restaurant = repo.restaurant("2").expect("restaurant");
    let lisi = user(&mut repo, "2");
    let visible = visible_reviews(Some(&lisi), &restaurant);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].user_id, "2");
}

#[test]
fn private_reviews_are_hidden_even_from_friends() {
    let mut repo = seeded_repo();
    let restaurant = repo.restaurant("2").expect("restaurant");
    // 张三 is 李四's friend but the review is private.
    let zhangsan = user(&mut repo, "1");
    assert!(visible_reviews(Some(&zhangsan), &restaurant).is_empty());
}

#[test]
fn friends_see_friend_scoped_reviews() {
    let mut repo = seeded_repo();
    // Restaurant 1: 张三's legacy-public review plus 李四's friends review.
    let restaurant = repo.restaurant("1").expect("restaurant");
    let zhangsan = user(&mut repo, "1");
    let visible = visible_reviews(Some(&zhangsan), &restaurant);
    assert_eq!(visible.len(), 2, "own review plus a friend's friends-scoped review");
}

#[test]
fn legacy_public_reads_as_friends_only() {
    let mut repo = seeded_repo();
    let restaurant = repo.restaurant("1").expect("restaurant");

    // 王五 is nobody's friend, so even the legacy 'public' review stays hidden.
    let wangwu = user(&mut repo, "3");
    assert!(visible_reviews(Some(&wangwu), &restaurant).is_empty());

    // Friendship with the author unlocks it.
    repo.add_friend_by_invite_code("3", "ZS1234").expect("add friend");
    let wangwu = user(&mut repo, "3");
    let visible = visible_reviews(Some(&wangwu), &restaurant);
    assert_eq!(visible.len(), 1);
    assert!(visible[0].visibility.is_legacy());
}

#[test]
fn visibility_tracks_graph_changes() {
    let mut repo = seeded_repo();
    let restaurant = repo.restaurant("1").expect("restaurant");

    // 李四 sees 张三's review while they are friends...
    let lisi = user(&mut repo, "2");
    assert_eq!(visible_reviews(Some(&lisi), &restaurant).len(), 2);

    // ...and loses access the moment the friendship is revoked.
    repo.unfollow("2", "1").expect("unfollow");
    let lisi = user(&mut repo, "2");
    let visible = visible_reviews(Some(&lisi), &restaurant);
    assert_eq!(visible.len(), 1, "only the own review remains");
    assert_eq!(visible[0].user_id, "2");
}
