//! Default seed dataset, written to the store on first run and used as the
//! recovery fallback when a persisted snapshot fails to parse.

use chrono::NaiveDate;

use crate::models::{PriceRange, Restaurant, Review, User, Visibility};

fn seed_user(
    id: &str,
    name: &str,
    email: &str,
    invite_code: &str,
    following: &[&str],
    followers: &[&str],
    friends: &[&str],
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
        avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={id}"),
        invite_code: invite_code.to_string(),
        following: following.iter().map(|s| s.to_string()).collect(),
        followers: followers.iter().map(|s| s.to_string()).collect(),
        friends: friends.iter().map(|s| s.to_string()).collect(),
    }
}

/// The three default users. 张三 and 李四 follow each other and are friends;
/// 王五 starts unconnected.
pub fn default_users() -> Vec<User> {
    vec![
        seed_user("1", "张三", "zhangsan@example.com", "ZS1234", &["2"], &["2"], &["2"]),
        seed_user("2", "李四", "lisi@example.com", "LS5678", &["1"], &["1"], &["1"]),
        seed_user("3", "王五", "wangwu@example.com", "WW9012", &[], &[], &[]),
    ]
}

fn seed_review(
    id: &str,
    user_id: &str,
    user_name: &str,
    rating: f64,
    comment: &str,
    date: (i32, u32, u32),
    visibility: Visibility,
) -> Review {
    let (year, month, day) = date;
    Review {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        rating,
        comment: comment.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date"),
        visibility,
    }
}

/// The three default restaurants. Seed ratings are the pre-derived values the
/// original dataset shipped with; they are recomputed on the first mutation.
/// The first review carries the legacy `public` visibility tag on purpose.
pub fn default_restaurants() -> Vec<Restaurant> {
    let reviews = [
        seed_review(
            "1",
            "1",
            "张三",
            4.5,
            "菜品很好吃，服务态度也很好！",
            (2024, 4, 19),
            Visibility::Public,
        ),
        seed_review(
            "2",
            "2",
            "李四",
            4.0,
            "环境不错，就是价格稍贵。",
            (2024, 4, 18),
            Visibility::Friends,
        ),
        seed_review(
            "3",
            "2",
            "李四",
            3.5,
            "这家店的菜有点咸，不太符合我的口味。",
            (2024, 4, 16),
            Visibility::Private,
        ),
    ];

    vec![
        Restaurant {
            id: "1".to_string(),
            name: "老王川菜馆".to_string(),
            description: "正宗川菜，麻辣鲜香".to_string(),
            address: "北京市朝阳区建国路88号".to_string(),
            rating: 4.5,
            price_range: PriceRange::Moderate,
            cuisine: "川菜".to_string(),
            image_url: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=500".to_string(),
            reviews: vec![reviews[0].clone(), reviews[1].clone()],
            owner_id: None,
        },
        Restaurant {
            id: "2".to_string(),
            name: "江南小馆".to_string(),
            description: "精致江浙菜，清淡可口".to_string(),
            address: "北京市海淀区中关村大街1号".to_string(),
            rating: 4.2,
            price_range: PriceRange::Premium,
            cuisine: "江浙菜".to_string(),
            image_url: "https://images.unsplash.com/photo-1552566626-52f8b828add9?w=500".to_string(),
            reviews: vec![reviews[2].clone()],
            owner_id: None,
        },
        Restaurant {
            id: "3".to_string(),
            name: "粤式茶餐厅".to_string(),
            description: "正宗粤式早茶，点心精致".to_string(),
            address: "北京市西城区西单北大街120号".to_string(),
            rating: 4.7,
            price_range: PriceRange::Moderate,
            cuisine: "粤菜".to_string(),
            image_url: "https://images.unsplash.com/photo-1559339352-11d035aa65de?w=500".to_string(),
            reviews: Vec::new(),
            owner_id: None,
        },
    ]
}

/// Fallback image applied when a restaurant is added without one.
pub const DEFAULT_RESTAURANT_IMAGE: &str = "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=500";
