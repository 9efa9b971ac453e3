//! Kasku API Server
//!
//! Main entry point for the Kasku backend service. Wires configuration,
//! tracing, the database, the router, and the optional email-report task.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Utc};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kasku_api::{AppState, create_router};
use kasku_core::reports::ReportService;
use kasku_db::migration::{Migrator, MigratorTrait};
use kasku_db::{ReportRepository, connect_with_pool};
use kasku_shared::{AdvisorService, AppConfig, EmailService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kasku=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database and bring the schema up to date
    let db = connect_with_pool(&config.database.url, config.database.max_connections).await?;
    Migrator::up(&db, None).await?;
    info!("Connected to database");

    let db = Arc::new(db);

    // Optional scheduled email report, fully outside the engine's path
    if config.email.enabled {
        let email_service = EmailService::new(config.email.clone());
        info!(
            smtp_host = %config.email.smtp_host,
            interval_hours = %config.email.report_interval_hours,
            "Email report task enabled"
        );
        tokio::spawn(report_mailer_loop(
            Arc::clone(&db),
            email_service,
            config.email.report_interval_hours,
        ));
    }

    // Create application state
    let state = AppState {
        db: Arc::clone(&db),
        advisor: Arc::new(AdvisorService::new(config.advisor.clone())),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically mails a month-to-date summary to the configured
/// recipient. Failures are logged and the loop keeps going.
async fn report_mailer_loop(
    db: Arc<sea_orm::DatabaseConnection>,
    email: EmailService,
    interval_hours: u64,
) {
    let interval = Duration::from_secs(interval_hours.max(1) * 3600);

    loop {
        tokio::time::sleep(interval).await;

        if let Err(e) = send_report(&db, &email).await {
            error!(error = %e, "Scheduled report failed");
        }
    }
}

async fn send_report(
    db: &sea_orm::DatabaseConnection,
    email: &EmailService,
) -> anyhow::Result<()> {
    let today = Utc::now().date_naive();
    let month_start = today.with_day(1).unwrap_or(today);

    let facts = ReportRepository::new(db.clone())
        .facts_between(month_start, today)
        .await?;
    let summary = ReportService::summarize(&facts);

    let subject = format!("Laporan Keuangan {}", today.format("%Y-%m-%d"));
    let mut body = format!(
        "Ringkasan bulan berjalan ({start} s/d {today}):\n\
         - Pemasukan: Rp {income}\n\
         - Pengeluaran: Rp {expense}\n\
         - Sisa Cashflow: Rp {net}\n",
        start = month_start,
        income = summary.total_income,
        expense = summary.total_expense,
        net = summary.net_cashflow,
    );

    if !summary.expense_by_category.is_empty() {
        body.push_str("\nPengeluaran terbesar:\n");
        for total in summary.expense_by_category.iter().take(5) {
            body.push_str(&format!("- {}: Rp {}\n", total.name, total.total));
        }
    }

    email.send_report(&subject, &body).await?;
    info!("Scheduled report sent");
    Ok(())
}
