use petpulse_client::views::{AlertDetailView, AlertListView};
use petpulse_client::{ApiClient, Config, Session};

#[tokio::main]
async fn main() {
    // Load .env if present (dotenvy)
    dotenvy::dotenv().ok();

    petpulse_client::telemetry::init_telemetry("petpulse-console");

    let config = Config::from_env().expect("invalid configuration");
    let api = ApiClient::new(&config).expect("failed to build API client");

    let email = std::env::var("PETPULSE_EMAIL").expect("PETPULSE_EMAIL must be set");
    let password = std::env::var("PETPULSE_PASSWORD").expect("PETPULSE_PASSWORD must be set");

    let mut session = Session::new();
    session
        .login(&api, &email, &password)
        .await
        .expect("login failed");
    if let Some(user) = session.user() {
        tracing::info!("signed in as {} <{}>", user.name, user.email);
    }

    let mut list = AlertListView::new();
    list.load(&api).await.expect("failed to load alerts");
    list.load_quick_actions(&api)
        .await
        .expect("failed to load quick actions");

    if list.alerts.is_empty() {
        println!("No alerts. Your pets are doing great!");
        return;
    }

    println!(
        "Alerts (page {} of {}):",
        list.page(),
        list.total_pages()
    );
    for (pet_name, alerts) in list.grouped_by_pet() {
        println!("\n{} ({})", pet_name, alerts.len());
        for alert in alerts {
            let marker = if alert.severity_level.is_actionable() && !alert.is_resolved() {
                "  (action suggested)"
            } else {
                ""
            };
            println!(
                "  [{}] {}  {}  {}{}",
                alert.severity_level,
                alert.created_at,
                alert.alert_type,
                alert.message.as_deref().unwrap_or("-"),
                marker
            );
        }
    }

    // Audit feed for the most recent alert
    if let Some(alert) = list.alerts.first() {
        let mut detail = AlertDetailView::new(alert.id, config.debounce_window());
        detail.load(&api).await.expect("failed to load alert detail");

        println!("\nHistory for {} ({}):", alert.alert_type, alert.id);
        let timeline = detail.timeline();
        if timeline.is_empty() {
            println!("  no actions taken yet");
        }
        for entry in timeline {
            println!(
                "  {}  [{}]  {}",
                entry.timestamp, entry.category, entry.display_text
            );
        }
    }
}
