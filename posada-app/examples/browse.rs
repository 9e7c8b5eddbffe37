// posada-app/examples/browse.rs
// Load the hotel catalog and apply a city filter from the command line.

use posada_app::views::home::{HomeView, PriceOrder};
use posada_client::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::var("POSADA_BACKEND")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let client = ClientConfig::new(&base_url).build_http_client();

    let mut view = HomeView::new();
    view.load(&client).await;

    if let Some(city) = std::env::args().nth(1) {
        view.set_city_filter(city);
    }
    view.set_price_order(PriceOrder::Ascending);

    println!("cities: {:?}", view.city_options());
    for hotel in view.visible_hotels() {
        println!(
            "{}  {} ({})  desde {}",
            hotel.id, hotel.name, hotel.city, hotel.best_price
        );
    }

    Ok(())
}
