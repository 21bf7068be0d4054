use sepet_client_rs::constants::FIREBASE_BASE_URL;
use sepet_client_rs::data_backend::RestaurantGateway;
use sepet_client_rs::data_types::Backend;
use sepet_client_rs::screens::add_restaurant::AddRestaurantForm;
use sepet_client_rs::screens::restaurant_detail::{MenuView, RestaurantDetailScreen};
use sepet_client_rs::screens::restaurant_list::{RestaurantListScreen, RestaurantRow};
use sepet_client_rs::screens::ScreenState;

use clap::{Parser, Subcommand, ValueEnum};
use std::env;

#[derive(ValueEnum, Copy, Clone, Debug)]
enum BackendArg {
    /// Realtime-database revision (restourantlar.json)
    Firebase,
    /// REST revision (/api/restaurants/, /api/menus/)
    Rest,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Firebase => Backend::Firebase,
            BackendArg::Rest => Backend::Rest,
        }
    }
}

/// Food-delivery browsing client: lists restaurants, shows a restaurant's
/// menu grouped by category, and adds new restaurant entries.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Backend base URL
    #[arg(short, long, env = "BASE_URL", default_value = FIREBASE_BASE_URL)]
    base_url: String,
    /// Backend revision to talk to
    #[arg(long, env = "BACKEND", value_enum, default_value = "firebase")]
    backend: BackendArg,
    /// Enable verbose logging (mostly timing metrics){n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all restaurants
    List,
    /// Show a restaurant's menu
    Menu {
        /// Restaurant id (document key or primary key)
        restaurant_id: String,
    },
    /// Add a new restaurant entry
    Add {
        name: String,
        location: String,
        /// Image URL
        image: String,
    },
}

fn logger_init() {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module(
            "sepet_client_rs",
            if env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default()
                == "debug"
            {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        env::set_var("RUST_LOG", "debug");
    }
    logger_init();

    let gateway = RestaurantGateway::new(args.backend.into(), &args.base_url);
    log::info!("Using {:?} backend at {}", gateway.backend(), args.base_url);

    match args.command {
        Command::List => {
            let mut screen = RestaurantListScreen::mount();
            screen.resolve(gateway.list_restaurants().await);
            print!("{}", restaurant_list_text(screen.state()));
        }
        Command::Menu { restaurant_id } => {
            let mut screen = RestaurantDetailScreen::mount();
            screen.resolve(gateway.get_menu(&restaurant_id).await);
            print!("{}", menu_text(screen.state()));
        }
        Command::Add {
            name,
            location,
            image,
        } => {
            let form = AddRestaurantForm {
                name,
                location,
                image,
            };
            match form.submit(&gateway).await {
                Ok(()) => println!("Restaurant added successfully"),
                Err(e) => {
                    // alert-style: surfaced, never a crash
                    println!("Failed to add restaurant: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn restaurant_list_text(state: &ScreenState<Vec<RestaurantRow>>) -> String {
    let mut msg = String::new();
    match state {
        ScreenState::Loading => msg += "Loading...\n",
        ScreenState::Failed(reason) => msg += &format!("Could not load restaurants: {reason}\n"),
        ScreenState::Ready(rows) => {
            if rows.is_empty() {
                msg += "No restaurants yet.\n";
            }
            for row in rows {
                msg += &format!(
                    "[{}] {} — {} ({:.1}★)\n      {}\n",
                    row.restaurant.id,
                    row.restaurant.name,
                    row.restaurant.location,
                    row.restaurant.rating,
                    row.display_image(),
                );
            }
        }
    }
    msg
}

fn menu_text(state: &ScreenState<MenuView>) -> String {
    let mut msg = String::new();
    match state {
        ScreenState::Loading => msg += "Loading...\n",
        ScreenState::Failed(reason) => msg += &format!("Could not load menu: {reason}\n"),
        ScreenState::Ready(view) => {
            msg += &format!(
                "{} — {}\n",
                view.menu.restaurant.name, view.menu.restaurant.location
            );
            if view.menu.categories.is_empty() {
                msg += "No menu available.\n";
            }
            for category in &view.menu.categories {
                msg += &format!("\n{}\n", category.name);
                for dish in &category.dishes {
                    msg += &format!("  • {} — ${:.2}\n", dish.name, dish.price);
                    if !dish.description.is_empty() {
                        msg += &format!("      {}\n", dish.description);
                    }
                }
            }
        }
    }
    msg
}
