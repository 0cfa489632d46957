pub(crate) use plateful::errors::AppError;
pub(crate) use plateful::models::User;
pub(crate) use plateful::store::MemoryStore;
pub(crate) use plateful::{Repository, is_friend};

/// A repository over a fresh in-memory store, seeded with the default
/// dataset: 张三 (id 1) and 李四 (id 2) are mutual friends, 王五 (id 3)
/// starts unconnected.
pub(crate) fn seeded_repo() -> Repository<MemoryStore> {
    let mut repo = Repository::new(MemoryStore::new());
    repo.load_users().expect("seed users");
    repo.load_restaurants().expect("seed restaurants");
    repo
}

pub(crate) fn user(repo: &mut Repository<MemoryStore>, user_id: &str) -> User {
    repo.load_users()
        .expect("load users")
        .into_iter()
        .find(|user| user.id == user_id)
        .expect("user exists")
}
