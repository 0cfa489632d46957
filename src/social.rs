//! Social graph & visibility resolver.
//!
//! Owns the directed follow relation, the derived-but-also-directly-settable
//! friend relation, invite-code linking, and review visibility queries.
//!
//! `friends` is written on two paths: a follow that becomes mutual, and an
//! invite-code exchange. `unfollow` revokes friendship both ways even when
//! the reverse follow still exists, so callers must not assume
//! `friends = following ∩ followers` after an unfollow.

use crate::errors::AppError;
use crate::id::generate_invite_code;
use crate::models::{User, Visibility};
use crate::repository::Repository;
use crate::store::Store;

/// Inserts `id` into an id list unless already present (set semantics).
fn insert_id(ids: &mut Vec<String>, id: &str) {
    if !ids.iter().any(|existing| existing == id) {
        ids.push(id.to_string());
    }
}

fn remove_id(ids: &mut Vec<String>, id: &str) {
    ids.retain(|existing| existing != id);
}

fn position_of(users: &[User], user_id: &str) -> Result<usize, AppError> {
    users
        .iter()
        .position(|user| user.id == user_id)
        .ok_or_else(|| AppError::not_found(format!("user {user_id}")))
}

/// Borrows two distinct users mutably out of the snapshot.
fn pair_mut(users: &mut [User], first: usize, second: usize) -> (&mut User, &mut User) {
    debug_assert_ne!(first, second);
    if first < second {
        let (head, tail) = users.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = users.split_at_mut(first);
        let (second_ref, first_ref) = (&mut head[second], &mut tail[0]);
        (first_ref, second_ref)
    }
}

/// `true` iff `other_id` is in the viewer's friends set.
pub fn is_friend(viewer: &User, other_id: &str) -> bool {
    viewer.friends.iter().any(|id| id == other_id)
}

/// Answers "can `viewer` see a review authored by `author_id` with this
/// visibility tag". Authors always see their own content; `friends` (and the
/// legacy `public` alias) require friendship; `private` is author-only.
pub fn can_view(viewer: &User, author_id: &str, visibility: Visibility) -> bool {
    if viewer.id == author_id {
        return true;
    }
    match visibility {
        Visibility::Friends | Visibility::Public => is_friend(viewer, author_id),
        // Private and unrecognized tags fail closed.
        Visibility::Private | Visibility::Unknown => false,
    }
}

/// Generates an invite code that collides with no existing user's code.
///
/// [`generate_invite_code`] itself draws independently per call and does not
/// guarantee uniqueness, so assignment sites retry here until the code is
/// free. Collisions in a 62^6 space are rare; the loop almost always runs
/// once.
pub fn unique_invite_code(users: &[User]) -> String {
    loop {
        let code = generate_invite_code();
        if !users.iter().any(|user| user.invite_code == code) {
            return code;
        }
    }
}

impl<S: Store> Repository<S> {
    /// Adds `target_id` to the actor's following list. Idempotent: following
    /// someone twice is a no-op. When the follow becomes mutual, both users
    /// gain each other as friends.
    pub fn follow(&mut self, actor_id: &str, target_id: &str) -> Result<(), AppError> {
        if actor_id == target_id {
            return Err(AppError::invalid("cannot follow yourself"));
        }
        self.update_users(|users| {
            let actor_idx = position_of(users, actor_id)?;
            let target_idx = position_of(users, target_id)?;
            let (actor, target) = pair_mut(users, actor_idx, target_idx);

            if actor.following.iter().any(|id| id == target_id) {
                return Ok(());
            }
            actor.following.push(target_id.to_string());
            insert_id(&mut target.followers, actor_id);

            if target.following.iter().any(|id| id == actor_id) {
                insert_id(&mut actor.friends, target_id);
                insert_id(&mut target.friends, actor_id);
            }
            Ok(())
        })
    }

    /// Removes the follow edge and revokes friendship in both directions,
    /// even if the reverse follow still exists.
    pub fn unfollow(&mut self, actor_id: &str, target_id: &str) -> Result<(), AppError> {
        if actor_id == target_id {
            return Err(AppError::invalid("cannot unfollow yourself"));
        }
        self.update_users(|users| {
            let actor_idx = position_of(users, actor_id)?;
            let target_idx = position_of(users, target_id)?;
            let (actor, target) = pair_mut(users, actor_idx, target_idx);

            remove_id(&mut actor.following, target_id);
            remove_id(&mut actor.friends, target_id);
            remove_id(&mut target.followers, actor_id);
            remove_id(&mut target.friends, actor_id);
            Ok(())
        })
    }

    /// Links two users as friends via an invite code: both ids are inserted
    /// into the other's following, followers and friends lists at once,
    /// bypassing the organic mutual-follow path.
    ///
    /// Returns a human-readable confirmation message on success.
    pub fn add_friend_by_invite_code(&mut self, self_id: &str, code: &str) -> Result<String, AppError> {
        self.update_users(|users| {
            let owner_idx = users
                .iter()
                .position(|user| user.invite_code == code)
                .ok_or_else(|| AppError::not_found(format!("invite code {code}")))?;
            if users[owner_idx].id == self_id {
                return Err(AppError::SelfReference);
            }
            let self_idx = position_of(users, self_id)?;
            if is_friend(&users[self_idx], &users[owner_idx].id) {
                return Err(AppError::AlreadyFriends);
            }

            let (me, owner) = pair_mut(users, self_idx, owner_idx);
            let owner_id = owner.id.clone();
            let my_id = me.id.clone();
            insert_id(&mut me.following, &owner_id);
            insert_id(&mut me.followers, &owner_id);
            insert_id(&mut me.friends, &owner_id);
            insert_id(&mut owner.following, &my_id);
            insert_id(&mut owner.followers, &my_id);
            insert_id(&mut owner.friends, &my_id);

            Ok(format!("{} is now your friend", owner.name))
        })
    }
}
