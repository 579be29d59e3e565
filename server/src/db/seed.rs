//! Startup seed data
//!
//! Fills the menu and the suite listings when their tables are empty, so a
//! fresh install serves a browsable storefront immediately. Never touches
//! tables that already have rows.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{MenuItem, Suite};
use crate::db::repository::{MenuItemRepository, SiteSettingsRepository, SuiteRepository};
use crate::utils::{AppError, now_millis};

pub async fn seed_if_empty(db: &Surreal<Db>) -> Result<(), AppError> {
    let menu_repo = MenuItemRepository::new(db.clone());
    if menu_repo.count().await? == 0 {
        let items = default_menu();
        let count = items.len();
        menu_repo.seed(items).await?;
        tracing::info!(count, "Seeded default menu");
    }

    let suite_repo = SuiteRepository::new(db.clone());
    if suite_repo.count().await? == 0 {
        let suites = default_suites();
        let count = suites.len();
        suite_repo.seed(suites).await?;
        tracing::info!(count, "Seeded default suites");
    }

    // Make sure the settings singleton exists so checkout never races its
    // first-creation path
    SiteSettingsRepository::new(db.clone()).get_or_create().await?;

    Ok(())
}

fn menu_item(
    name: &str,
    price: &str,
    original_price: Option<&str>,
    description: &str,
    category: &str,
    tag: Option<&str>,
    image: &str,
) -> MenuItem {
    MenuItem {
        id: None,
        name: name.to_string(),
        price: price.to_string(),
        original_price: original_price.map(str::to_string),
        description: description.to_string(),
        category: category.to_string(),
        tag: tag.map(str::to_string),
        image: image.to_string(),
        is_available: true,
        created_at: now_millis(),
    }
}

fn default_menu() -> Vec<MenuItem> {
    const STARTERS: &str = "The Bitings (Starters)";
    const MAINS: &str = "Signature Main Plates";

    vec![
        menu_item(
            "Maasai Beef Samosas",
            "KSh 450",
            Some("KSh 600"),
            "Hand-folded pastry triangles filled with spiced Samburu beef and organic herbs. Served with a tangy coriander chutney.",
            STARTERS,
            Some("Must Try"),
            "/images/samosas_platter.png",
        ),
        menu_item(
            "Swahili Mahamri & Mbaazi",
            "KSh 550",
            Some("KSh 700"),
            "Golden coconut donuts served with pigeon peas in a rich, cardamom-scented coconut sauce.",
            STARTERS,
            Some("Coastal Classic"),
            "/images/mahamri_platter.png",
        ),
        menu_item(
            "Savannah Nyama Choma",
            "KSh 1,800",
            Some("KSh 2,200"),
            "Tender goat ribs slow-grilled over savannah wood, served with traditional Ugali, Sukuma Wiki, and spicy Kachumbari.",
            MAINS,
            Some("Signature"),
            "/images/nyama_choma_platter.png",
        ),
        menu_item(
            "Samaki wa Kupaka",
            "KSh 1,650",
            Some("KSh 2,000"),
            "Charcoal-grilled whole tilapia smothered in a spicy Swahili coconut and tamarind sauce.",
            MAINS,
            Some("Coastal"),
            "/images/grilled_tilapia.png",
        ),
        menu_item(
            "Mombasa Chicken Biryani",
            "KSh 1,350",
            Some("KSh 1,600"),
            "Fragrant basmati rice layered with tender spring chicken marinated in secret 'Savannah' spices.",
            MAINS,
            None,
            "/images/chicken_biryani.png",
        ),
        menu_item(
            "Swahili Fish Curry",
            "KSh 1,750",
            Some("KSh 2,100"),
            "Fresh catch of the day simmered in a rich coconut milk and tamarind curry, served with aromatic rice.",
            MAINS,
            None,
            "/images/swahili_fish_curry.png",
        ),
        menu_item(
            "Herb-Crusted Lamb Rack",
            "KSh 2,400",
            Some("KSh 3,000"),
            "Succulent rack of lamb with a fresh herb crust, served with a red wine reduction.",
            MAINS,
            Some("Chef's Special"),
            "/images/lamb_rack.png",
        ),
        menu_item(
            "Truffle Mushroom Risotto",
            "KSh 1,950",
            Some("KSh 2,500"),
            "Creamy arborio rice cooked with wild mushrooms and finished with truffle oil and a parmesan crisp.",
            "Vegetarian",
            None,
            "/images/mushroom_risotto.png",
        ),
        menu_item(
            "Masala Chai Tiramisu",
            "KSh 750",
            Some("KSh 950"),
            "A fusion twist on the classic Italian dessert, infused with house-blended Kenyan tea spices.",
            "Desserts & Refreshments",
            Some("Fusion"),
            "/images/chai_tiramisu.png",
        ),
    ]
}

fn suite(
    name: &str,
    description: &str,
    price_per_night: i64,
    image: &str,
    amenities: &[&str],
) -> Suite {
    Suite {
        id: None,
        name: name.to_string(),
        description: description.to_string(),
        price_per_night,
        image: image.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        is_available: true,
    }
}

fn default_suites() -> Vec<Suite> {
    vec![
        suite(
            "Acacia Garden Suite",
            "Ground-floor suite opening onto the acacia garden, with a private veranda and rain shower.",
            12_500,
            "/images/acacia_suite.png",
            &["King bed", "Garden veranda", "Rain shower", "Breakfast included"],
        ),
        suite(
            "Savannah View Suite",
            "Corner suite with floor-to-ceiling views over the savannah plains and a deep soaking tub.",
            18_000,
            "/images/savannah_view_suite.png",
            &["King bed", "Panoramic windows", "Soaking tub", "Evening turndown"],
        ),
        suite(
            "Baobab Family Suite",
            "Two connected rooms under the old baobab, sleeping up to five, with a private lounge.",
            24_000,
            "/images/baobab_suite.png",
            &["Two bedrooms", "Private lounge", "Child beds", "Breakfast included"],
        ),
    ]
}
