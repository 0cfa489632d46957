use anyhow::{Result, anyhow};
use clap::{Args, Subcommand};

use plateful::models::{PriceRange, User, Visibility};
use plateful::restaurants::{NewRestaurant, ReviewDraft};
use plateful::search::{RestaurantFilter, filter_restaurants};
use plateful::store::JsonFileStore;
use plateful::validators::{is_valid_url, validate_registration};
use plateful::{Repository, visible_reviews};

use crate::output::OutputManager;

type Repo = Repository<JsonFileStore>;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and log in
    Register(RegisterArgs),
    /// Log in with email and password
    Login { email: String, password: String },
    /// End the current session
    Logout,
    /// Show the current session user
    Whoami,
    /// List restaurants, optionally filtered by cuisine or search term
    Restaurants {
        /// Exact cuisine tag (e.g. 川菜)
        #[arg(long)]
        cuisine: Option<String>,
        /// Search name, description, cuisine and address
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one restaurant with the reviews visible to you
    Show { restaurant_id: String },
    /// Add a restaurant (you become its owner)
    AddRestaurant(AddRestaurantArgs),
    /// Delete a restaurant you own (removes its reviews too)
    RemoveRestaurant { restaurant_id: String },
    /// Write and manage reviews
    #[command(subcommand)]
    Review(ReviewCommands),
    /// Follow a user; a mutual follow makes you friends
    Follow { user_id: String },
    /// Unfollow a user (revokes friendship in both directions)
    Unfollow { user_id: String },
    /// List users and how they relate to you
    Users,
    /// Show your invite code for others to add you with
    Invite,
    /// Become friends with the owner of an invite code
    AddFriend { code: String },
    /// Manage favorite restaurants
    #[command(subcommand)]
    Favorites(FavoriteCommands),
}

#[derive(Args)]
pub struct RegisterArgs {
    pub name: String,
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Must match --password
    #[arg(long)]
    pub confirm: String,
}

#[derive(Args)]
pub struct AddRestaurantArgs {
    pub name: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub cuisine: String,
    /// ¥, ¥¥ or ¥¥¥ (also 1/2/3)
    #[arg(long, default_value = "¥¥")]
    pub price: PriceRange,
    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Subcommand)]
pub enum ReviewCommands {
    /// Review a restaurant (1-5 stars)
    Add {
        restaurant_id: String,
        rating: u8,
        comment: String,
        /// friends or private
        #[arg(long, default_value = "private")]
        visibility: Visibility,
    },
    /// Edit one of your reviews (stamps today's date)
    Edit {
        restaurant_id: String,
        review_id: String,
        rating: u8,
        comment: String,
        #[arg(long, default_value = "private")]
        visibility: Visibility,
    },
    /// Delete one of your reviews
    Delete { restaurant_id: String, review_id: String },
    /// List your reviews across all restaurants
    Mine,
}

#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// List your favorite restaurants
    List,
    /// Add a restaurant to your favorites
    Add { restaurant_id: String },
    /// Remove a restaurant from your favorites
    Remove { restaurant_id: String },
}

fn require_user(repo: &mut Repo) -> Result<User> {
    repo.current_user()?
        .ok_or_else(|| anyhow!("not logged in; run 'plateful login <email> <password>' first"))
}

pub fn handle(command: Commands, repo: &mut Repo, output: &OutputManager) -> Result<()> {
    match command {
        Commands::Register(args) => {
            if let Err(err) = validate_registration(&args.name, &args.email, &args.password, &args.confirm) {
                for issue in &err.issues {
                    output.error(&format!("{}: {}", issue.field, issue.message));
                }
                return Err(err.into());
            }
            let user = repo.register(&args.name, &args.email, &args.password)?;
            output.success(&format!("welcome, {}! your invite code is {}", user.name, user.invite_code));
        }
        Commands::Login { email, password } => {
            let user = repo.login(&email, &password)?;
            output.success(&format!("logged in as {}", user.name));
        }
        Commands::Logout => {
            repo.logout()?;
            output.success("logged out");
        }
        Commands::Whoami => match repo.current_user()? {
            Some(user) => {
                output.plain(&format!("{} <{}> (id {})", user.name, user.email, user.id));
                output.plain(&format!(
                    "following {} / followers {} / friends {}",
                    user.following.len(),
                    user.followers.len(),
                    user.friends.len()
                ));
            }
            None => output.info("not logged in"),
        },
        Commands::Restaurants { cuisine, search } => {
            let restaurants = repo.list_restaurants()?;
            let filter = RestaurantFilter { cuisine, query: search };
            let hits = filter_restaurants(&restaurants, &filter);
            if hits.is_empty() {
                output.warning("no restaurants match");
            } else {
                output.restaurant_table(&hits);
            }
        }
        Commands::Show { restaurant_id } => {
            let restaurant = repo.restaurant(&restaurant_id)?;
            let viewer = repo.current_user()?;
            output.plain(&format!(
                "{} ({} {}) rated {:.1}",
                restaurant.name, restaurant.cuisine, restaurant.price_range, restaurant.rating
            ));
            output.plain(&restaurant.description);
            output.plain(&restaurant.address);
            let reviews = visible_reviews(viewer.as_ref(), &restaurant);
            if reviews.is_empty() {
                if viewer.is_some() {
                    output.info("no reviews visible to you yet; write the first one");
                } else {
                    output.info("log in to see reviews");
                }
            } else {
                let rows: Vec<_> = reviews.iter().map(|review| (None, *review)).collect();
                output.review_table(&rows);
            }
        }
        Commands::AddRestaurant(args) => {
            let user = require_user(repo)?;
            if let Some(url) = &args.image_url
                && !is_valid_url(url)
            {
                return Err(anyhow!("--image-url is not a valid URL"));
            }
            let restaurant = repo.add_restaurant(
                &user.id,
                NewRestaurant {
                    name: args.name,
                    description: args.description,
                    address: args.address,
                    cuisine: args.cuisine,
                    price_range: args.price,
                    image_url: args.image_url,
                },
            )?;
            output.success(&format!("added restaurant {} (id {})", restaurant.name, restaurant.id));
        }
        Commands::RemoveRestaurant { restaurant_id } => {
            let user = require_user(repo)?;
            repo.delete_restaurant(&user.id, &restaurant_id)?;
            output.success("restaurant deleted");
        }
        Commands::Review(command) => handle_review(command, repo, output)?,
        Commands::Follow { user_id } => {
            let user = require_user(repo)?;
            repo.follow(&user.id, &user_id)?;
            let refreshed = require_user(repo)?;
            if plateful::is_friend(&refreshed, &user_id) {
                output.success("now following; the follow is mutual, so you are now friends");
            } else {
                output.success("now following");
            }
        }
        Commands::Unfollow { user_id } => {
            let user = require_user(repo)?;
            repo.unfollow(&user.id, &user_id)?;
            output.success("unfollowed");
        }
        Commands::Users => {
            let me = repo.current_user()?;
            let users = repo.load_users()?;
            let rows: Vec<&User> = users.iter().collect();
            output.user_table(&rows, me.as_ref());
        }
        Commands::Invite => {
            let user = require_user(repo)?;
            output.plain(&user.invite_code);
        }
        Commands::AddFriend { code } => {
            let user = require_user(repo)?;
            let message = repo.add_friend_by_invite_code(&user.id, &code)?;
            output.success(&message);
        }
        Commands::Favorites(command) => handle_favorites(command, repo, output)?,
    }
    Ok(())
}

fn handle_review(command: ReviewCommands, repo: &mut Repo, output: &OutputManager) -> Result<()> {
    match command {
        ReviewCommands::Add {
            restaurant_id,
            rating,
            comment,
            visibility,
        } => {
            let user = require_user(repo)?;
            let review = repo.add_review(
                &user,
                &restaurant_id,
                ReviewDraft {
                    rating,
                    comment,
                    visibility,
                },
            )?;
            output.success(&format!("review {} added", review.id));
        }
        ReviewCommands::Edit {
            restaurant_id,
            review_id,
            rating,
            comment,
            visibility,
        } => {
            let user = require_user(repo)?;
            repo.edit_review(
                &user.id,
                &restaurant_id,
                &review_id,
                ReviewDraft {
                    rating,
                    comment,
                    visibility,
                },
            )?;
            output.success("review updated");
        }
        ReviewCommands::Delete {
            restaurant_id,
            review_id,
        } => {
            let user = require_user(repo)?;
            repo.delete_review(&user.id, &restaurant_id, &review_id)?;
            output.success("review deleted");
        }
        ReviewCommands::Mine => {
            let user = require_user(repo)?;
            let authored = repo.my_reviews(&user.id)?;
            if authored.is_empty() {
                output.info("you have not written any reviews yet");
            } else {
                let rows: Vec<_> = authored
                    .iter()
                    .map(|entry| (Some(entry.restaurant_name.as_str()), &entry.review))
                    .collect();
                output.review_table(&rows);
            }
        }
    }
    Ok(())
}

fn handle_favorites(command: FavoriteCommands, repo: &mut Repo, output: &OutputManager) -> Result<()> {
    let user = require_user(repo)?;
    match command {
        FavoriteCommands::List => {
            let favorites = repo.favorite_restaurants(&user.id)?;
            if favorites.is_empty() {
                output.info("no favorite restaurants yet");
            } else {
                let rows: Vec<_> = favorites.iter().collect();
                output.restaurant_table(&rows);
            }
        }
        FavoriteCommands::Add { restaurant_id } => {
            if repo.add_favorite(&user.id, &restaurant_id)? {
                output.success("added to favorites");
            } else {
                output.info("already a favorite");
            }
        }
        FavoriteCommands::Remove { restaurant_id } => {
            if repo.remove_favorite(&user.id, &restaurant_id)? {
                output.success("removed from favorites");
            } else {
                output.info("was not a favorite");
            }
        }
    }
    Ok(())
}
