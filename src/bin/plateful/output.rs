use colored::Colorize;
use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use plateful::models::{Restaurant, Review, User, Visibility};

use crate::theme::{ICONS, THEME};

/// Visibility column text; private reviews carry the lock icon.
fn visibility_cell(review: &Review) -> String {
    match review.visibility {
        Visibility::Private => format!("{} {}", ICONS.lock, review.visibility),
        _ => review.visibility.to_string(),
    }
}

/// Global CLI options that affect output.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub quiet: bool,
    pub no_color: bool,
}

/// Output manager handles formatting and display.
pub struct OutputManager {
    pub options: GlobalOptions,
}

impl OutputManager {
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }

    /// Display a success message with color and icon.
    pub fn success(&self, message: &str) {
        if self.options.quiet {
            return;
        }
        if self.options.no_color {
            println!("{} {message}", ICONS.success);
        } else {
            println!("{} {}", ICONS.success.color(THEME.success), message.color(THEME.success));
        }
    }

    /// Display an error message with color and icon.
    pub fn error(&self, message: &str) {
        if self.options.no_color {
            eprintln!("{} {message}", ICONS.error);
        } else {
            eprintln!("{} {}", ICONS.error.color(THEME.error), message.color(THEME.error));
        }
    }

    /// Display an informational message.
    pub fn info(&self, message: &str) {
        if self.options.quiet {
            return;
        }
        if self.options.no_color {
            println!("{} {message}", ICONS.info);
        } else {
            println!("{} {}", ICONS.info.color(THEME.info), message.color(THEME.info));
        }
    }

    /// Display a warning message.
    pub fn warning(&self, message: &str) {
        if self.options.quiet {
            return;
        }
        if self.options.no_color {
            println!("{} {message}", ICONS.warning);
        } else {
            println!("{} {}", ICONS.warning.color(THEME.warning), message.color(THEME.warning));
        }
    }

    pub fn plain(&self, message: &str) {
        if !self.options.quiet {
            println!("{message}");
        }
    }

    fn print_table(&self, table: Table) {
        if !self.options.quiet {
            println!("{table}");
        }
    }

    fn base_table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(
                headers
                    .iter()
                    .map(|header| Cell::new(header).add_attribute(Attribute::Bold)),
            );
        table
    }

    /// Tabular restaurant listing.
    pub fn restaurant_table(&self, restaurants: &[&Restaurant]) {
        let mut table = self.base_table(&["id", "name", "cuisine", "price", "rating", "reviews", "address"]);
        for restaurant in restaurants {
            table.add_row(vec![
                Cell::new(&restaurant.id),
                Cell::new(&restaurant.name),
                Cell::new(&restaurant.cuisine),
                Cell::new(restaurant.price_range.to_string()),
                Cell::new(format!("{} {:.1}", ICONS.star, restaurant.rating)),
                Cell::new(restaurant.reviews.len().to_string()),
                Cell::new(&restaurant.address),
            ]);
        }
        self.print_table(table);
    }

    /// Tabular review listing; `restaurant` column is optional.
    pub fn review_table(&self, reviews: &[(Option<&str>, &Review)]) {
        let mut table = self.base_table(&["id", "restaurant", "author", "rating", "date", "visibility", "comment"]);
        for (restaurant_name, review) in reviews {
            table.add_row(vec![
                Cell::new(&review.id),
                Cell::new(restaurant_name.unwrap_or("-")),
                Cell::new(&review.user_name),
                Cell::new(format!("{} {:.1}", ICONS.star, review.rating)),
                Cell::new(review.date.to_string()),
                Cell::new(visibility_cell(review)),
                Cell::new(&review.comment),
            ]);
        }
        self.print_table(table);
    }

    /// Tabular user listing for the social commands.
    pub fn user_table(&self, users: &[&User], me: Option<&User>) {
        let mut table = self.base_table(&["id", "name", "following", "followers", "friends", ""]);
        for user in users {
            let relation = match me {
                Some(me) if me.id == user.id => "me".to_string(),
                Some(me) if plateful::is_friend(me, &user.id) => format!("{} friend", ICONS.heart),
                Some(me) if me.following.contains(&user.id) => "following".to_string(),
                _ => String::new(),
            };
            table.add_row(vec![
                Cell::new(&user.id),
                Cell::new(&user.name),
                Cell::new(user.following.len().to_string()),
                Cell::new(user.followers.len().to_string()),
                Cell::new(user.friends.len().to_string()),
                Cell::new(relation),
            ]);
        }
        self.print_table(table);
    }
}
