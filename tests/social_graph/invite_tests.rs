use super::support::*;

#[test]
fn invite_code_links_both_users_symmetrically() {
    let mut repo = seeded_repo();
    let message = repo.add_friend_by_invite_code("3", "ZS1234").expect("add friend");
    assert_eq!(message, "张三 is now your friend");

    let wangwu = user(&mut repo, "3");
    let zhangsan = user(&mut repo, "1");
    for (a, b) in [(&wangwu, "1"), (&zhangsan, "3")] {
        assert!(a.following.contains(&b.to_string()));
        assert!(a.followers.contains(&b.to_string()));
        assert!(is_friend(a, b));
    }
}

#[test]
fn unknown_invite_code_is_not_found() {
    let mut repo = seeded_repo();
    let err = repo.add_friend_by_invite_code("3", "NOPE00").unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[test]
fn own_invite_code_is_rejected() {
    let mut repo = seeded_repo();
    let err = repo.add_friend_by_invite_code("1", "ZS1234").unwrap_err();
    assert!(matches!(err, AppError::SelfReference));
}

#[test]
fn existing_friends_cannot_relink() {
    let mut repo = seeded_repo();
    // Seed users 1 and 2 are already friends.
    let err = repo.add_friend_by_invite_code("2", "ZS1234").unwrap_err();
    assert!(matches!(err, AppError::AlreadyFriends));
}

#[test]
fn relinking_the_same_code_is_rejected_without_duplicates() {
    let mut repo = seeded_repo();
    repo.add_friend_by_invite_code("3", "LS5678").expect("first link");
    let err = repo.add_friend_by_invite_code("3", "LS5678").unwrap_err();
    assert!(matches!(err, AppError::AlreadyFriends));

    let wangwu = user(&mut repo, "3");
    let lisi = user(&mut repo, "2");
    for list in [
        &wangwu.following,
        &wangwu.followers,
        &wangwu.friends,
        &lisi.following,
        &lisi.followers,
        &lisi.friends,
    ] {
        let mut deduped = list.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), list.len(), "no id appears twice in {list:?}");
    }
    assert!(is_friend(&wangwu, "2"));
    assert!(is_friend(&lisi, "3"));
}

#[test]
fn unfollow_severs_an_invite_code_friendship_too() {
    let mut repo = seeded_repo();
    repo.add_friend_by_invite_code("3", "ZS1234").expect("add friend");
    repo.unfollow("3", "1").expect("unfollow");

    let wangwu = user(&mut repo, "3");
    let zhangsan = user(&mut repo, "1");
    assert!(!is_friend(&wangwu, "1"));
    assert!(!is_friend(&zhangsan, "3"));
}
