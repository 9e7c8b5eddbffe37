// posada-client/examples/login.rs
// Log in and print the caller's reservation history.

use posada_client::{ClientConfig, SessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <email> <password>", args[0]);
        println!("  Example: {} ana@mail.com secret123", args[0]);
        return Ok(());
    }

    let base_url = std::env::var("POSADA_BACKEND")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    let mut client = ClientConfig::new(&base_url).build_http_client();
    let mut session = SessionStore::new();

    let login = client.login(&args[1], &args[2]).await?;
    session.sign_in(login.token.clone(), login.is_admin);
    client.set_token(login.token);
    tracing::info!(is_admin = login.is_admin, "logged in");

    let reservations = client.my_reservations().await?;
    for reservation in &reservations {
        println!(
            "{}  check-in {}  {} nights  total {}  [{:?}]",
            reservation.id,
            reservation.date.date_naive(),
            reservation.nights_quantity,
            reservation.total,
            reservation.status,
        );
    }
    println!("{} reservations", reservations.len());

    Ok(())
}
