use super::support::*;

#[test]
fn one_way_follow_is_not_friendship() {
    let mut repo = seeded_repo();
    repo.follow("3", "1").expect("follow");

    let wangwu = user(&mut repo, "3");
    let zhangsan = user(&mut repo, "1");
    assert!(wangwu.following.contains(&"1".to_string()));
    assert!(wangwu.friends.is_empty(), "a one-way follow must not create friendship");
    assert!(zhangsan.followers.contains(&"3".to_string()));
    assert!(!is_friend(&zhangsan, "3"));
}

#[test]
fn mutual_follow_creates_friendship_both_ways() {
    let mut repo = seeded_repo();
    repo.follow("3", "1").expect("first follow");
    repo.follow("1", "3").expect("reverse follow");

    let wangwu = user(&mut repo, "3");
    let zhangsan = user(&mut repo, "1");
    assert!(is_friend(&wangwu, "1"));
    assert!(is_friend(&zhangsan, "3"));
}

#[test]
fn follow_is_idempotent() {
    let mut repo = seeded_repo();
    repo.follow("3", "1").expect("first follow");
    repo.follow("3", "1").expect("second follow");

    let wangwu = user(&mut repo, "3");
    let zhangsan = user(&mut repo, "1");
    assert_eq!(wangwu.following.iter().filter(|id| *id == "1").count(), 1);
    assert_eq!(zhangsan.followers.iter().filter(|id| *id == "3").count(), 1);
}

#[test]
fn cannot_follow_yourself() {
    let mut repo = seeded_repo();
    let err = repo.follow("1", "1").unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation { .. }));
}

#[test]
fn follow_unknown_user_is_not_found() {
    let mut repo = seeded_repo();
    let err = repo.follow("1", "999").unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));

    // Nothing was persisted for the actor.
    let zhangsan = user(&mut repo, "1");
    assert!(!zhangsan.following.contains(&"999".to_string()));
}

#[test]
fn unfollow_revokes_friendship_both_ways() {
    let mut repo = seeded_repo();
    // Seed users 1 and 2 are mutual friends.
    repo.unfollow("1", "2").expect("unfollow");

    let zhangsan = user(&mut repo, "1");
    let lisi = user(&mut repo, "2");
    assert!(zhangsan.friends.is_empty());
    assert!(lisi.friends.is_empty(), "friendship is revoked for the other side too");
    assert!(!zhangsan.following.contains(&"2".to_string()));
    assert!(!lisi.followers.contains(&"1".to_string()));
    // The reverse follow edge survives the teardown.
    assert!(lisi.following.contains(&"1".to_string()));
    assert!(zhangsan.followers.contains(&"2".to_string()));
}

#[test]
fn refollow_after_unfollow_restores_friendship() {
    let mut repo = seeded_repo();
    repo.unfollow("1", "2").expect("unfollow");
    repo.follow("1", "2").expect("refollow");

    // 李四 still follows 张三, so the refollow is mutual again.
    let zhangsan = user(&mut repo, "1");
    let lisi = user(&mut repo, "2");
    assert!(is_friend(&zhangsan, "2"));
    assert!(is_friend(&lisi, "1"));
}

#[test]
fn unfollow_without_edge_is_a_no_op() {
    let mut repo = seeded_repo();
    repo.unfollow("3", "1").expect("unfollow with no prior follow");
    let wangwu = user(&mut repo, "3");
    assert!(wangwu.following.is_empty());
}
